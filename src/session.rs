use crate::classifying::*;
use crate::error_handling::*;
use crate::evaluating::*;
use crate::parsing::*;
use crate::prompting::*;
use crate::scanning::*;

use tracing::{debug, info};

pub const FIRST_NUMBER_PROMPT: &str = "Enter first number: ";
pub const SECOND_NUMBER_PROMPT: &str = "Enter second number: ";
pub const CONTINUE_PROMPT: &str = "Do you want to perform another calculation? (yes/no): ";
pub const FAREWELL: &str = "Thank you for using the calculator! Goodbye!";

pub fn operator_prompt() -> String {
    format!("Enter operator ({}): ", operator_menu())
}

#[derive(Debug, PartialEq)]
pub enum State {
    awaiting_inputs,
    evaluating { left: f64, right: f64, operator: Operator },
    reporting(CalculationResult),
    awaiting_continuation,
    exited,
}

/// Case-insensitive "no" or "n". Anything else, blank included, means go on.
pub fn wants_to_stop(answer: &str) -> bool {
    let answer = answer.to_lowercase();
    answer == "no" || answer == "n"
}

pub struct Session<S> {
    scanner: S,
}

impl<S: Scanner> Session<S> {
    pub fn new(scanner: S) -> Self {
        Self{scanner}
    }

    /// Runs rounds until the user declines another one or input runs out.
    /// Only console failures come back as errors.
    pub fn run(&mut self) -> Result<()> {
        self.greet()?;

        let mut state = State::awaiting_inputs;
        while state != State::exited {
            state = match self.step(state) {
                Ok(next) => next,
                Err(CalcError::end_of_input) => {
                    info!("input closed, ending session");
                    self.farewell()?;
                    State::exited
                },
                Err(error) => return Err(error),
            };
            debug!(?state, "transition");
        }
        Ok(())
    }

    fn step(&mut self, state: State) -> Result<State> {
        use State::*;

        match state {
            awaiting_inputs => {
                let left = read_number(&mut self.scanner, FIRST_NUMBER_PROMPT)?;
                let right = read_number(&mut self.scanner, SECOND_NUMBER_PROMPT)?;
                let operator = read_operator(&mut self.scanner, &operator_prompt())?;
                Ok(evaluating{left, right, operator})
            },

            evaluating{left, right, operator} => {
                let result = evaluate(left, right, operator);
                info!(left, right, %operator, %result, "evaluated");
                self.scanner.say(&format!(
                    "\n{} {} {} = {}",
                    format_number(left),
                    operator,
                    format_number(right),
                    result
                ))?;
                Ok(reporting(result))
            },

            reporting(result) => {
                self.scanner.say(&Report::of(&result).to_string())?;
                Ok(awaiting_continuation)
            },

            awaiting_continuation => {
                let answer = self.scanner.prompt(CONTINUE_PROMPT)?;
                if wants_to_stop(&answer) {
                    self.farewell()?;
                    Ok(exited)
                } else {
                    self.scanner.say("\n")?;
                    Ok(awaiting_inputs)
                }
            },

            exited => Ok(exited),
        }
    }

    fn greet(&mut self) -> Result<()> {
        let banner = banner();
        self.scanner.say(&format!("\n{}", banner))?;
        self.scanner.say("INTERACTIVE CALCULATOR & DATA ANALYZER")?;
        self.scanner.say(&banner)?;
        self.scanner.say(&format!("Available operators: {}", operator_menu()))?;
        self.scanner.say(&format!("{}\n", banner))
    }

    fn farewell(&mut self) -> Result<()> {
        self.scanner.say(&format!("\n{}\n", FAREWELL))
    }
}
