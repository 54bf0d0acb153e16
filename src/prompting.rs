use crate::error_handling::*;
use crate::parsing::*;
use crate::scanning::*;

use tracing::debug;

pub const INVALID_NUMBER_MESSAGE: &str = "Invalid input! Please enter a valid number.";

pub fn invalid_operator_message() -> String {
    format!("Invalid operator! Please use: {}", operator_menu())
}

/// Keeps prompting until the answer parses as a number.
/// Only a console failure or end of input gets it out of the loop otherwise.
pub fn read_number<S: Scanner>(scanner: &mut S, prompt: &str) -> Result<f64> {
    loop {
        let line = scanner.prompt(prompt)?;
        match parse_number(&line) {
            Ok(value) => return Ok(value),
            Err(error) => {
                debug!(%error, "rejected operand");
                scanner.say(&format!("{}\n", INVALID_NUMBER_MESSAGE))?;
            },
        }
    }
}

/// Keeps prompting until the answer is exactly one of the operator tokens.
pub fn read_operator<S: Scanner>(scanner: &mut S, prompt: &str) -> Result<Operator> {
    loop {
        let line = scanner.prompt(prompt)?;
        match line.parse::<Operator>() {
            Ok(operator) => return Ok(operator),
            Err(error) => {
                debug!(%error, "rejected operator");
                scanner.say(&format!("{}\n", invalid_operator_message()))?;
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript(scanner: &StreamScanner<&[u8], Vec<u8>>) -> String {
        String::from_utf8(scanner.output().clone()).unwrap()
    }

    #[test]
    fn number_reader_retries_until_valid() {
        let input = "\n   \nabc\nNaN-literal-text\n42\n";
        let mut scanner = StreamScanner::new(input.as_bytes(), Vec::new());

        assert_eq!(read_number(&mut scanner, "n: ").unwrap(), 42.0);

        let output = transcript(&scanner);
        assert_eq!(output.matches(INVALID_NUMBER_MESSAGE).count(), 4);
        assert_eq!(output.matches("n: ").count(), 5);
    }

    #[test]
    fn number_reader_accepts_fractions() {
        let mut scanner = StreamScanner::new("3.5\n".as_bytes(), Vec::new());
        assert_eq!(read_number(&mut scanner, "n: ").unwrap(), 3.5);
        assert_eq!(transcript(&scanner), "n: ");
    }

    #[test]
    fn number_reader_surfaces_end_of_input() {
        let mut scanner = StreamScanner::new("abc\n".as_bytes(), Vec::new());
        assert!(matches!(read_number(&mut scanner, "n: "), Err(CalcError::end_of_input)));
    }

    #[test]
    fn operator_reader_rejects_padding_and_words() {
        let input = "x\n + \nadd\n**\n";
        let mut scanner = StreamScanner::new(input.as_bytes(), Vec::new());

        assert_eq!(read_operator(&mut scanner, "op: ").unwrap(), Operator::exponentiation);

        let output = transcript(&scanner);
        assert_eq!(output.matches("Invalid operator! Please use: +, -, *, /, %, **\n\n").count(), 3);
    }

    #[test]
    fn operator_reader_accepts_every_token() {
        for operator in Operator::ALL {
            let line = format!("{}\n", operator.token());
            let mut scanner = StreamScanner::new(line.as_bytes(), Vec::new());
            assert_eq!(read_operator(&mut scanner, "").unwrap(), operator);
        }
    }
}
