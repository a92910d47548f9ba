//! Standard numeric format specifiers for scalar values
//!
//! Supported: `D<n>` (zero padded), `X<n>`/`x<n>` (hexadecimal),
//! `F<n>` (fixed point) and `N<n>` (grouped fixed point). Precision is at
//! most two digits.

use std::fmt::Write;

use super::provider::FormatProvider;
use crate::error::FormatError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumericFormat {
    Decimal(Option<usize>),
    Hex { upper: bool, digits: Option<usize> },
    Fixed(usize),
    Number(usize),
}

fn parse_specifier(specifier: &str) -> Option<NumericFormat> {
    let mut chars = specifier.chars();
    let letter = chars.next()?;
    let rest = chars.as_str();

    let precision = if rest.is_empty() {
        None
    } else if rest.len() <= 2 && rest.bytes().all(|b| b.is_ascii_digit()) {
        Some(rest.parse().ok()?)
    } else {
        return None;
    };

    match letter {
        'D' | 'd' => Some(NumericFormat::Decimal(precision)),
        'X' => Some(NumericFormat::Hex {
            upper: true,
            digits: precision,
        }),
        'x' => Some(NumericFormat::Hex {
            upper: false,
            digits: precision,
        }),
        'F' | 'f' => Some(NumericFormat::Fixed(precision.unwrap_or(2))),
        'N' | 'n' => Some(NumericFormat::Number(precision.unwrap_or(2))),
        _ => None,
    }
}

fn unsupported(specifier: &str, kind: &'static str) -> FormatError {
    FormatError::UnsupportedSpecifier {
        specifier: specifier.to_string(),
        kind,
    }
}

/// Insert `separator` between groups of three digits, counting from the right
fn group_digits(digits: &str, separator: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(c);
    }
    grouped
}

/// Write an unsigned fixed-point rendering such as `1234.50`, localised
fn write_fixed(
    output: &mut dyn Write,
    fixed: &str,
    grouped: bool,
    provider: &dyn FormatProvider,
) -> Result<(), FormatError> {
    let (integral, fraction) = match fixed.split_once('.') {
        Some((integral, fraction)) => (integral, Some(fraction)),
        None => (fixed, None),
    };
    if grouped {
        output.write_str(&group_digits(integral, provider.group_separator()))?;
    } else {
        output.write_str(integral)?;
    }
    if let Some(fraction) = fraction {
        output.write_str(provider.decimal_separator())?;
        output.write_str(fraction)?;
    }
    Ok(())
}

fn has_nonzero_digit(text: &str) -> bool {
    text.bytes().any(|b| matches!(b, b'1'..=b'9'))
}

/// Format an integer according to an optional specifier
pub(crate) fn write_integer(
    value: i64,
    format: Option<&str>,
    provider: &dyn FormatProvider,
    output: &mut dyn Write,
) -> Result<(), FormatError> {
    let Some(specifier) = format else {
        if value < 0 {
            output.write_str(provider.negative_sign())?;
        }
        write!(output, "{}", value.unsigned_abs())?;
        return Ok(());
    };

    let parsed = parse_specifier(specifier).ok_or_else(|| unsupported(specifier, "integer"))?;

    if let NumericFormat::Hex { upper, digits } = parsed {
        let width = digits.unwrap_or(0);
        if upper {
            write!(output, "{:0width$X}", value, width = width)?;
        } else {
            write!(output, "{:0width$x}", value, width = width)?;
        }
        return Ok(());
    }

    if value < 0 {
        output.write_str(provider.negative_sign())?;
    }
    let magnitude = value.unsigned_abs();
    match parsed {
        NumericFormat::Decimal(digits) => {
            write!(output, "{:0width$}", magnitude, width = digits.unwrap_or(0))?;
        }
        NumericFormat::Fixed(precision) | NumericFormat::Number(precision) => {
            let fixed = if precision == 0 {
                magnitude.to_string()
            } else {
                format!("{}.{}", magnitude, "0".repeat(precision))
            };
            let grouped = matches!(parsed, NumericFormat::Number(_));
            write_fixed(output, &fixed, grouped, provider)?;
        }
        NumericFormat::Hex { .. } => {}
    }
    Ok(())
}

/// Format a floating point number according to an optional specifier
pub(crate) fn write_float(
    value: f64,
    format: Option<&str>,
    provider: &dyn FormatProvider,
    output: &mut dyn Write,
) -> Result<(), FormatError> {
    let parsed = match format {
        Some(specifier) => match parse_specifier(specifier) {
            Some(parsed @ (NumericFormat::Fixed(_) | NumericFormat::Number(_))) => Some(parsed),
            _ => return Err(unsupported(specifier, "float")),
        },
        None => None,
    };

    if value.is_nan() {
        output.write_str("NaN")?;
        return Ok(());
    }
    if value.is_infinite() {
        if value < 0.0 {
            output.write_str(provider.negative_sign())?;
        }
        output.write_str("Infinity")?;
        return Ok(());
    }

    let (fixed, grouped) = match parsed {
        Some(NumericFormat::Fixed(precision)) => (format!("{:.*}", precision, value.abs()), false),
        Some(NumericFormat::Number(precision)) => (format!("{:.*}", precision, value.abs()), true),
        _ => (value.abs().to_string(), false),
    };

    // rounding may leave nothing but zeros; those carry no sign
    if value < 0.0 && has_nonzero_digit(&fixed) {
        output.write_str(provider.negative_sign())?;
    }
    write_fixed(output, &fixed, grouped, provider)
}
