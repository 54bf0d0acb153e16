use crate::evaluating::*;
use std::fmt;

pub const BANNER_WIDTH: usize = 50;

pub fn banner() -> String {
    "=".repeat(BANNER_WIDTH)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sign {
    positive,
    negative,
    zero,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    integer,
    float,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parity {
    even,
    odd,
    not_applicable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classification {
    pub sign: Sign,
    pub kind: Kind,
    pub parity: Parity,
    pub combined_label: Option<&'static str>,
}

/// NaN is neither above nor below zero, so it lands on `Sign::zero`.
pub fn classify(value: f64) -> Classification {
    let sign = if value > 0.0 {
        Sign::positive
    } else if value < 0.0 {
        Sign::negative
    } else {
        Sign::zero
    };

    let kind = if value.is_finite() && value.fract() == 0.0 {
        Kind::integer
    } else {
        Kind::float
    };

    let parity = match kind {
        Kind::integer if value % 2.0 == 0.0 => Parity::even,
        Kind::integer => Parity::odd,
        Kind::float => Parity::not_applicable,
    };

    let combined_label = match (sign, parity) {
        (Sign::positive, Parity::even) => Some("Positive and Even"),
        (Sign::positive, Parity::odd) => Some("Positive and Odd"),
        (Sign::negative, Parity::even) => Some("Negative and Even"),
        (Sign::negative, Parity::odd) => Some("Negative and Odd"),
        _ => None,
    };

    Classification{sign, kind, parity, combined_label}
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Sign::positive => "Positive number",
            Sign::negative => "Negative number",
            Sign::zero => "Zero",
        })
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::integer => "Integer",
            Kind::float => "Floating-point number",
        })
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value: {}\nType: {}", self.sign, self.kind)?;
        match self.parity {
            Parity::even => write!(f, "\nParity: Even")?,
            Parity::odd => write!(f, "\nParity: Odd")?,
            Parity::not_applicable => {},
        }
        if let Some(label) = self.combined_label {
            write!(f, "\nSpecial: {}", label)?;
        }
        Ok(())
    }
}

/// What gets printed for a result: a full analysis of a number, or the
/// domain error message as is.
#[derive(Clone, Debug, PartialEq)]
pub enum Report<'a> {
    analysis(Classification),
    passthrough(&'a str),
}

impl<'a> Report<'a> {
    pub fn of(result: &'a CalculationResult) -> Self {
        match result {
            CalculationResult::value(value) => Report::analysis(classify(*value)),
            CalculationResult::domain_error(message) => Report::passthrough(message),
        }
    }

    fn data_type(&self) -> &'static str {
        match self {
            Report::analysis(_) => "number",
            Report::passthrough(_) => "string",
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let banner = banner();
        writeln!(f, "\n{}\nRESULT ANALYSIS\n{}", banner, banner)?;
        writeln!(f, "Data Type: {}", self.data_type())?;
        match self {
            Report::analysis(classification) => writeln!(f, "{}", classification)?,
            Report::passthrough(message) => writeln!(f, "{}", message)?,
        }
        writeln!(f, "{}", banner)
    }
}
