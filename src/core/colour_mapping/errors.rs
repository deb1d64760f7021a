use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColourMapError {
    IterationsExceedCap { iterations: u32, iteration_cap: u32 },
}

impl fmt::Display for ColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationsExceedCap {
                iterations,
                iteration_cap,
            } => {
                write!(
                    f,
                    "iterations {} exceeds iteration cap {}",
                    iterations, iteration_cap
                )
            }
        }
    }
}

impl Error for ColourMapError {}

pub(crate) fn check_within_cap(iterations: u32, iteration_cap: u32) -> Result<(), ColourMapError> {
    if iterations > iteration_cap {
        return Err(ColourMapError::IterationsExceedCap {
            iterations,
            iteration_cap,
        });
    }

    Ok(())
}
