use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::controllers::frame::Frame;
use crate::controllers::ports::frame_renderer::FrameRenderer;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::GeneratePixelBufferError;
use crate::core::data::transition::Transition;
use crate::core::navigation::command::Command;
use crate::core::navigation::controller::NavigationController;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    Render(GeneratePixelBufferError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(err) => write!(f, "render failed: {}", err),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Render(err) => Some(err),
        }
    }
}

impl From<GeneratePixelBufferError> for SessionError {
    fn from(err: GeneratePixelBufferError) -> Self {
        Self::Render(err)
    }
}

/// Synchronous render loop: apply commands, then redraw only when something
/// changed.
pub struct FractalSession {
    controller: NavigationController,
    renderer: Arc<dyn FrameRenderer>,
    frame: Option<Frame>,
}

impl FractalSession {
    pub fn new(controller: NavigationController, renderer: Arc<dyn FrameRenderer>) -> Self {
        Self {
            controller,
            renderer,
            frame: None,
        }
    }

    #[must_use]
    pub fn controller(&self) -> &NavigationController {
        &self.controller
    }

    pub fn apply(&mut self, command: Command) -> Transition {
        self.controller.apply(command)
    }

    /// Recomputes and recolours the current view if it is dirty.
    ///
    /// On failure the dirty flag stays set so the next call retries.
    pub fn render_if_dirty(&mut self) -> Result<Option<&Frame>, SessionError> {
        if !self.controller.is_dirty() {
            return Ok(None);
        }

        let snapshot = self.controller.snapshot();
        let frame = self.renderer.render(&snapshot)?;

        log::info!(
            "rendered {}x{} frame in {:?}",
            frame.pixels.resolution().width(),
            frame.pixels.resolution().height(),
            frame.render_duration
        );

        self.controller.clear_dirty();
        self.frame = Some(frame);

        Ok(self.frame.as_ref())
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }
}
