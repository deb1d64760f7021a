use std::fmt;

use crate::controllers::frame::Frame;

#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub frame: Frame,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderError {
    pub generation: u64,
    pub message: String,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "render {} failed: {}", self.generation, self.message)
    }
}

impl std::error::Error for RenderError {}

#[derive(Debug)]
pub enum RenderEvent {
    Frame(FrameData),
    Error(RenderError),
}

impl RenderEvent {
    #[must_use]
    pub fn generation(&self) -> u64 {
        match self {
            Self::Frame(frame) => frame.generation,
            Self::Error(error) => error.generation,
        }
    }
}
