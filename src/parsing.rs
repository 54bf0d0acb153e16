use crate::error_handling::{CalcError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    addition,
    subtraction,
    multiplication,
    division,
    modulo,
    exponentiation,
}

impl Operator {
    pub const ALL: [Operator; 6] = [
        Operator::addition,
        Operator::subtraction,
        Operator::multiplication,
        Operator::division,
        Operator::modulo,
        Operator::exponentiation,
    ];

    pub fn token(&self) -> &'static str {
        use Operator::*;
        match self {
            addition => "+",
            subtraction => "-",
            multiplication => "*",
            division => "/",
            modulo => "%",
            exponentiation => "**",
        }
    }
}

/// Tokens are matched exactly; padding or case changes are not accepted.
impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|operator| operator.token() == s)
            .ok_or_else(|| CalcError::invalid_operator(s.into()))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Comma separated list of every operator token, in menu order.
pub fn operator_menu() -> String {
    Operator::ALL.map(|operator| operator.token()).join(", ")
}

fn radix_of(text: &str) -> Option<(u32, &str)> {
    let radix = match text.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    Some((radix, &text[2..]))
}

fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0, |value: f64, character| {
        let digit = character.to_digit(radix)?;
        Some(value * radix as f64 + digit as f64)
    })
}

fn is_decimal_literal(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
}

/// Parses one operand the way a user would type it: decimal literals with
/// optional sign and exponent, signed `Infinity`, and unsigned `0x`/`0o`/`0b`
/// literals. Surrounding whitespace is ignored. Never yields NaN.
pub fn parse_number(text: &str) -> Result<f64> {
    let invalid = || CalcError::invalid_number(text.into());

    let trimmed = text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if trimmed.is_empty() {
        return Err(invalid());
    }

    let value = match trimmed {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ => match radix_of(trimmed) {
            Some((radix, digits)) => parse_radix(digits, radix).ok_or_else(invalid)?,
            None if is_decimal_literal(trimmed) => trimmed.parse::<f64>().map_err(|_| invalid())?,
            None => return Err(invalid()),
        },
    };

    if value.is_nan() {
        Err(invalid())
    } else {
        Ok(value)
    }
}

/// Renders a number for the equation line. Integral values carry no
/// fraction, very large and very small magnitudes switch to exponent form.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".into()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        text.into()
    } else if value == 0.0 {
        "0".into()
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        let exponential = format!("{:e}", value);
        match exponential.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            },
            _ => exponential,
        }
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_token_maps_to_its_operator() {
        for operator in Operator::ALL {
            assert_eq!(operator.token().parse::<Operator>().unwrap(), operator);
        }
        assert_eq!("**".parse::<Operator>().unwrap(), Operator::exponentiation);
        assert_eq!("*".parse::<Operator>().unwrap(), Operator::multiplication);
    }

    #[test]
    fn unknown_or_padded_tokens_are_rejected() {
        for token in ["x", " + ", "+ ", "add", "", "^", "//", "***"] {
            assert!(
                matches!(token.parse::<Operator>(), Err(CalcError::invalid_operator(_))),
                "{:?} should be rejected",
                token
            );
        }
    }

    #[test]
    fn menu_lists_all_tokens() {
        assert_eq!(operator_menu(), "+, -, *, /, %, **");
    }

    #[test]
    fn decimal_numbers() {
        assert_eq!(parse_number("42").unwrap(), 42.0);
        assert_eq!(parse_number("3.5").unwrap(), 3.5);
        assert_eq!(parse_number("  -7  ").unwrap(), -7.0);
        assert_eq!(parse_number("+2E-2").unwrap(), 0.02);
        assert_eq!(parse_number(".5").unwrap(), 0.5);
        assert_eq!(parse_number("5.").unwrap(), 5.0);
        assert_eq!(parse_number("1e3").unwrap(), 1000.0);
        assert_eq!(parse_number("\u{feff}42\u{feff}").unwrap(), 42.0);
    }

    #[test]
    fn infinity_and_radix_literals() {
        assert_eq!(parse_number("Infinity").unwrap(), f64::INFINITY);
        assert_eq!(parse_number("-Infinity").unwrap(), f64::NEG_INFINITY);
        assert_eq!(parse_number("0x1A").unwrap(), 26.0);
        assert_eq!(parse_number("0o17").unwrap(), 15.0);
        assert_eq!(parse_number("0B101").unwrap(), 5.0);
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        for text in ["", "   ", "abc", "NaN-literal-text", "NaN", "nan", "inf", "infinity",
                     "1_000", "1e", ".", "0x", "0xZZ", "-0x10", "1.2.3", "--1", "4 2", "\u{feff}"] {
            assert!(
                matches!(parse_number(text), Err(CalcError::invalid_number(_))),
                "{:?} should be rejected",
                text
            );
        }
    }

    #[test]
    fn numbers_render_like_a_calculator_display() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(2f64.sqrt()), "1.4142135623730951");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(0.000001), "0.000001");
    }
}
