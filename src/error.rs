//! Error types for rendering and value formatting

use std::fmt;

use thiserror::Error;

/// Failure of a property value's own formatting
#[derive(Error, Debug)]
pub enum FormatError {
    /// The value does not understand the format specifier
    #[error("unsupported format specifier `{specifier}` for {kind} value")]
    UnsupportedSpecifier {
        specifier: String,
        kind: &'static str,
    },

    /// The output sink rejected a write
    #[error("failed to write formatted value")]
    Write(#[from] fmt::Error),

    /// Failure reported by a custom value implementation
    #[error("{0}")]
    Custom(String),
}

/// Errors that abort a render call
#[derive(Error, Debug)]
pub enum RenderError {
    /// A property value failed to format itself
    #[error("failed to format property `{property}`: {source}")]
    Value {
        property: String,
        #[source]
        source: FormatError,
    },

    /// The output sink rejected a write
    #[error("failed to write rendered output")]
    Write(#[from] fmt::Error),
}

impl RenderError {
    /// Attribute a value formatting failure to a property.
    ///
    /// Sink failures stay sink failures regardless of which value hit them.
    pub fn from_value(property: &str, err: FormatError) -> Self {
        match err {
            FormatError::Write(err) => RenderError::Write(err),
            source => RenderError::Value {
                property: property.to_string(),
                source,
            },
        }
    }
}
