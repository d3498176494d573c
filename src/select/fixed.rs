use anyhow::Result;
use log::info;

use super::BackSelector;
use crate::error::SlicerError;

/// Non-interactive selection for scripted runs
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedSelector {
    /// 1-based choice; `None` takes the first candidate
    choice: Option<usize>,
}

impl FixedSelector {
    pub fn first() -> Self {
        Self { choice: None }
    }

    /// Select candidate `choice`, counting from 1
    pub fn nth(choice: usize) -> Self {
        Self {
            choice: Some(choice),
        }
    }
}

impl BackSelector for FixedSelector {
    fn select(&mut self, candidates: &[String]) -> Result<usize> {
        let count = candidates.len();
        let index = match self.choice {
            None => 0,
            Some(choice) if (1..=count).contains(&choice) => choice - 1,
            Some(choice) => return Err(SlicerError::SelectionOutOfRange { choice, count }.into()),
        };

        if let Some(name) = candidates.get(index) {
            info!("Selected card back {} ({})", index + 1, name);
        }
        Ok(index)
    }
}
