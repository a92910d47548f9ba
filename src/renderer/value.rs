//! Property values and the mappings they are looked up in
//!
//! The renderer only needs two capabilities: finding a value by name
//! ([`PropertyLookup`]) and asking a value to format itself
//! ([`FormatValue`]). [`ScalarValue`] is the stock value type.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Write;
use std::hash::{BuildHasher, Hash};
use std::rc::Rc;
use std::sync::Arc;

use super::numeric;
use super::provider::FormatProvider;
use crate::error::FormatError;

/// A value that can write its own representation
pub trait FormatValue {
    /// Write the value, honouring `format` when the value understands it.
    fn format_to(
        &self,
        format: Option<&str>,
        provider: &dyn FormatProvider,
        output: &mut dyn Write,
    ) -> Result<(), FormatError>;
}

impl<T: FormatValue + ?Sized> FormatValue for &T {
    fn format_to(
        &self,
        format: Option<&str>,
        provider: &dyn FormatProvider,
        output: &mut dyn Write,
    ) -> Result<(), FormatError> {
        (**self).format_to(format, provider, output)
    }
}

impl<T: FormatValue + ?Sized> FormatValue for Box<T> {
    fn format_to(
        &self,
        format: Option<&str>,
        provider: &dyn FormatProvider,
        output: &mut dyn Write,
    ) -> Result<(), FormatError> {
        (**self).format_to(format, provider, output)
    }
}

impl<T: FormatValue + ?Sized> FormatValue for Rc<T> {
    fn format_to(
        &self,
        format: Option<&str>,
        provider: &dyn FormatProvider,
        output: &mut dyn Write,
    ) -> Result<(), FormatError> {
        (**self).format_to(format, provider, output)
    }
}

impl<T: FormatValue + ?Sized> FormatValue for Arc<T> {
    fn format_to(
        &self,
        format: Option<&str>,
        provider: &dyn FormatProvider,
        output: &mut dyn Write,
    ) -> Result<(), FormatError> {
        (**self).format_to(format, provider, output)
    }
}

/// Read-only mapping from property name to value
///
/// Lookups are exact and case-sensitive.
pub trait PropertyLookup {
    fn lookup(&self, name: &str) -> Option<&dyn FormatValue>;
}

impl<T: PropertyLookup + ?Sized> PropertyLookup for &T {
    fn lookup(&self, name: &str) -> Option<&dyn FormatValue> {
        (**self).lookup(name)
    }
}

impl<K, V, S> PropertyLookup for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: FormatValue,
    S: BuildHasher,
{
    fn lookup(&self, name: &str) -> Option<&dyn FormatValue> {
        self.get(name).map(|value| value as &dyn FormatValue)
    }
}

impl<K, V> PropertyLookup for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: FormatValue,
{
    fn lookup(&self, name: &str) -> Option<&dyn FormatValue> {
        self.get(name).map(|value| value as &dyn FormatValue)
    }
}

/// A simple scalar property value
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl ScalarValue {
    /// Build a value from free text, picking the narrowest type that fits:
    /// `null`, `true`/`false`, an integer, a float, and otherwise a string.
    pub fn infer(text: &str) -> Self {
        match text {
            "null" => return ScalarValue::Null,
            "true" => return ScalarValue::Bool(true),
            "false" => return ScalarValue::Bool(false),
            _ => {}
        }
        if let Ok(int) = text.parse::<i64>() {
            return ScalarValue::Int(int);
        }
        match text.parse::<f64>() {
            // keep words like "inf" and "NaN" as text
            Ok(float) if float.is_finite() => ScalarValue::Float(float),
            _ => ScalarValue::Str(text.to_string()),
        }
    }
}

fn write_quoted(output: &mut dyn Write, text: &str) -> Result<(), FormatError> {
    output.write_char('"')?;
    for c in text.chars() {
        if c == '"' || c == '\\' {
            output.write_char('\\')?;
        }
        output.write_char(c)?;
    }
    output.write_char('"')?;
    Ok(())
}

impl FormatValue for ScalarValue {
    fn format_to(
        &self,
        format: Option<&str>,
        provider: &dyn FormatProvider,
        output: &mut dyn Write,
    ) -> Result<(), FormatError> {
        match self {
            ScalarValue::Null => output.write_str("null")?,
            ScalarValue::Bool(b) => output.write_str(if *b { "true" } else { "false" })?,
            ScalarValue::Int(i) => numeric::write_integer(*i, format, provider, output)?,
            ScalarValue::Float(f) => numeric::write_float(*f, format, provider, output)?,
            // `l` renders the literal text; every other format is ignored
            ScalarValue::Str(s) if format == Some("l") => output.write_str(s)?,
            ScalarValue::Str(s) => write_quoted(output, s)?,
        }
        Ok(())
    }
}

impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        ScalarValue::Bool(value)
    }
}

impl From<i32> for ScalarValue {
    fn from(value: i32) -> Self {
        ScalarValue::Int(value.into())
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        ScalarValue::Int(value)
    }
}

impl From<u32> for ScalarValue {
    fn from(value: u32) -> Self {
        ScalarValue::Int(value.into())
    }
}

impl From<f64> for ScalarValue {
    fn from(value: f64) -> Self {
        ScalarValue::Float(value)
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::Str(value.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        ScalarValue::Str(value)
    }
}

impl<T: Into<ScalarValue>> From<Option<T>> for ScalarValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ScalarValue::Null, Into::into)
    }
}
