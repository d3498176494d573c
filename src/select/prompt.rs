use std::io::{BufRead, Write};

use anyhow::Result;

use super::{BackSelector, ChoiceError, parse_choice};
use crate::error::SlicerError;

/// Asks on a terminal (or any reader/writer pair) until a valid answer is given.
///
/// Invalid answers are rejected and asked again with no retry limit. A blank
/// answer takes the first candidate; end of input is an error.
pub struct PromptSelector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptSelector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect what was printed
    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, count: usize) -> Result<usize, SlicerError> {
        let prompt_err = |source: std::io::Error| SlicerError::Prompt { source };

        loop {
            write!(self.output, "Enter option number (1-{}): ", count).map_err(prompt_err)?;
            self.output.flush().map_err(prompt_err)?;

            let mut line = String::new();
            if self.input.read_line(&mut line).map_err(prompt_err)? == 0 {
                return Err(SlicerError::SelectionAborted);
            }

            match parse_choice(&line, count) {
                Ok(index) => {
                    if line.trim().is_empty() {
                        writeln!(self.output, "No choice given, using the first card back.")
                            .map_err(prompt_err)?;
                    }
                    return Ok(index);
                }
                Err(ChoiceError::NotANumber) => {
                    writeln!(self.output, "Please enter a number.").map_err(prompt_err)?;
                }
                Err(ChoiceError::OutOfRange) => {
                    writeln!(self.output, "Invalid option, please try again.")
                        .map_err(prompt_err)?;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> BackSelector for PromptSelector<R, W> {
    fn select(&mut self, candidates: &[String]) -> Result<usize> {
        let prompt_err = |source: std::io::Error| SlicerError::Prompt { source };

        writeln!(self.output, "Choose the card back to use:").map_err(prompt_err)?;
        for (i, name) in candidates.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, name).map_err(prompt_err)?;
        }

        Ok(self.ask(candidates.len())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn candidates(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("back_option_{i}.png")).collect()
    }

    fn run(input: &str, n: usize) -> (Result<usize>, String) {
        let mut selector = PromptSelector::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let result = selector.select(&candidates(n));
        let output = String::from_utf8(selector.into_output()).unwrap();
        (result, output)
    }

    #[test]
    fn test_lists_candidates_one_based() {
        let (result, output) = run("2\n", 3);

        assert_eq!(result.unwrap(), 1);
        assert!(output.contains("1. back_option_0.png\n"));
        assert!(output.contains("3. back_option_2.png\n"));
        assert!(output.contains("Enter option number (1-3): "));
    }

    #[test]
    fn test_blank_answer_picks_first() {
        let (result, output) = run("\n", 3);

        assert_eq!(result.unwrap(), 0);
        assert!(output.contains("using the first card back"));
    }

    #[test]
    fn test_out_of_range_asks_again() {
        let (result, output) = run("0\n4\n3\n", 3);

        assert_eq!(result.unwrap(), 2);
        assert_eq!(output.matches("Invalid option, please try again.").count(), 2);
        assert_eq!(output.matches("Enter option number").count(), 3);
    }

    #[test]
    fn test_non_numeric_asks_again() {
        let (result, output) = run("blue\n1\n", 3);

        assert_eq!(result.unwrap(), 0);
        assert_eq!(output.matches("Please enter a number.").count(), 1);
    }

    #[test]
    fn test_end_of_input_aborts() {
        let (result, _) = run("abc\n", 3);

        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SlicerError>(),
            Some(SlicerError::SelectionAborted)
        ));
    }

    #[test]
    fn test_last_line_without_newline() {
        let (result, _) = run("3", 3);
        assert_eq!(result.unwrap(), 2);
    }
}
