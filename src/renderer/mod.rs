//! Renderer writing a parsed template against a set of property values
//!
//! Each token renders itself in order into the shared output. The first
//! failure aborts the render and is returned to the caller.

mod numeric;
pub mod padding;
pub mod provider;
pub mod value;

use std::fmt::Write;

pub use provider::{Culture, FormatProvider, Invariant, INVARIANT};
pub use value::{FormatValue, PropertyLookup, ScalarValue};

use crate::error::RenderError;
use crate::template::MessageTemplate;

/// Render `template` into `output`.
///
/// Missing properties render as their placeholder text. When `provider` is
/// `None` values are formatted with [`Invariant`].
pub fn render<P>(
    template: &MessageTemplate,
    properties: &P,
    output: &mut dyn Write,
    provider: Option<&dyn FormatProvider>,
) -> Result<(), RenderError>
where
    P: PropertyLookup + ?Sized,
{
    for token in template.tokens() {
        token.render(properties, output, provider)?;
    }
    Ok(())
}

/// Render `template` into a new string
pub fn render_to_string<P>(
    template: &MessageTemplate,
    properties: &P,
    provider: Option<&dyn FormatProvider>,
) -> Result<String, RenderError>
where
    P: PropertyLookup + ?Sized,
{
    let mut output = String::with_capacity(template.text().len());
    render(template, properties, &mut output, provider)?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatError;
    use std::collections::HashMap;

    struct Failing;

    impl FormatValue for Failing {
        fn format_to(
            &self,
            _format: Option<&str>,
            _provider: &dyn FormatProvider,
            _output: &mut dyn Write,
        ) -> Result<(), FormatError> {
            Err(FormatError::Custom("boom".to_string()))
        }
    }

    #[test]
    fn test_render_substitutes_in_order() {
        let template = MessageTemplate::parse("User {UserId} logged in from {IPAddress:l}");
        let mut props = HashMap::new();
        props.insert("UserId", ScalarValue::from(42));
        props.insert("IPAddress", ScalarValue::from("10.0.0.1"));

        let output = render_to_string(&template, &props, None).unwrap();
        assert_eq!(output, "User 42 logged in from 10.0.0.1");
    }

    #[test]
    fn test_missing_property_keeps_rendering() {
        let template = MessageTemplate::parse("{Foo} and {Bar}");
        let mut props = HashMap::new();
        props.insert("Bar", ScalarValue::from(1));

        let output = render_to_string(&template, &props, None).unwrap();
        assert_eq!(output, "{Foo} and 1");
    }

    #[test]
    fn test_value_failure_aborts_render() {
        let template = MessageTemplate::parse("before {Bad} after");
        let mut props: HashMap<&str, Box<dyn FormatValue>> = HashMap::new();
        props.insert("Bad", Box::new(Failing));

        let mut output = String::new();
        let err = render(&template, &props, &mut output, None).unwrap_err();
        assert!(matches!(err, RenderError::Value { ref property, .. } if property == "Bad"));
        assert_eq!(output, "before ");
    }

    #[test]
    fn test_provider_is_passed_to_values() {
        let template = MessageTemplate::parse("{Amount:N2}");
        let mut props = HashMap::new();
        props.insert("Amount", ScalarValue::from(1234.5));
        let culture = Culture::new("de-DE")
            .with_decimal_separator(",")
            .with_group_separator(".");

        let output = render_to_string(&template, &props, Some(&culture)).unwrap();
        assert_eq!(output, "1.234,50");
    }

    #[test]
    fn test_positional_properties() {
        let template = MessageTemplate::parse("{1} before {0}");
        let mut props = HashMap::new();
        props.insert("0", ScalarValue::from("a"));
        props.insert("1", ScalarValue::from("b"));

        let output = render_to_string(&template, &props, None).unwrap();
        assert_eq!(output, "\"b\" before \"a\"");
    }
}
