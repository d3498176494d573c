mod finalize;
mod fixed;
mod prompt;

pub use finalize::finalize_back;
pub use fixed::FixedSelector;
pub use prompt::PromptSelector;

use anyhow::Result;

/// Picks one card back out of the cropped candidates
pub trait BackSelector {
    /// Return the 0-based index of the chosen candidate.
    ///
    /// `candidates` is never empty and is listed in enumeration order.
    fn select(&mut self, candidates: &[String]) -> Result<usize>;
}

/// Why a typed answer was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceError {
    NotANumber,
    OutOfRange,
}

/// Parse a 1-based answer into a 0-based index.
///
/// A blank answer picks the first candidate.
pub fn parse_choice(input: &str, count: usize) -> Result<usize, ChoiceError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0);
    }

    let choice: usize = input.parse().map_err(|_e| ChoiceError::NotANumber)?;
    if (1..=count).contains(&choice) {
        Ok(choice - 1)
    } else {
        Err(ChoiceError::OutOfRange)
    }
}
