use crate::parsing::*;
use std::fmt;

use tracing::warn;

pub const DIVISION_BY_ZERO: &str = "Error: Division by zero!";

/// Outcome of one round: a number, or a message for an undefined operation.
#[derive(Clone, Debug, PartialEq)]
pub enum CalculationResult {
    value(f64),
    domain_error(String),
}

impl fmt::Display for CalculationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::value(value) => f.write_str(&format_number(*value)),
            Self::domain_error(message) => f.write_str(message),
        }
    }
}

// IEEE pow, except that a base of magnitude one raised to an infinite or NaN
// exponent is NaN rather than 1.
fn power(base: f64, exponent: f64) -> f64 {
    if exponent.is_nan() || (base.abs() == 1.0 && exponent.is_infinite()) {
        f64::NAN
    } else {
        base.powf(exponent)
    }
}

impl Operator {
    pub fn call(&self, left: f64, right: f64) -> f64 {
        use Operator::*;

        match self {
            addition => left + right,
            subtraction => left - right,
            multiplication => left * right,
            division => left / right,
            modulo => left % right,
            exponentiation => power(left, right),
        }
    }
}

/// Only an exact zero divisor (either sign) is a domain error. A zero modulus
/// is left to produce NaN.
pub fn evaluate(left: f64, right: f64, operator: Operator) -> CalculationResult {
    if operator == Operator::division && right == 0.0 {
        warn!(left, "division by zero");
        return CalculationResult::domain_error(DIVISION_BY_ZERO.into());
    }
    CalculationResult::value(operator.call(left, right))
}
