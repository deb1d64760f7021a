//! Engine configuration, loadable from JSON. Every field has a default, so a
//! config file only needs to name what it changes.

use std::error::Error;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::actions::generate_fractal::worker_pool::{WorkerPool, WorkerPoolError};
use crate::core::colour_mapping::settings::ColourSettings;
use crate::core::data::complex::Complex;
use crate::core::data::fractal_params::FractalParams;
use crate::core::data::resolution::{Resolution, ResolutionError};
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::navigation::controller::{NavigationController, NavigationState};
use crate::core::navigation::limits::{InvalidLimit, NavigationLimits};

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Resolution(ResolutionError),
    Viewport(ViewportError),
    Limits(InvalidLimit),
    WorkerPool(WorkerPoolError),
    /// A zoom step of at least half the width always crosses the center, so
    /// every zoom-in would be rejected.
    ZoomStepTooWide { zoom_step_pixels: f64, width: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "could not read config: {}", err),
            Self::Json(err) => write!(f, "invalid config JSON: {}", err),
            Self::Resolution(err) => write!(f, "invalid resolution: {}", err),
            Self::Viewport(err) => write!(f, "invalid viewport: {}", err),
            Self::Limits(err) => write!(f, "invalid limits: {}", err),
            Self::WorkerPool(err) => write!(f, "invalid worker pool: {}", err),
            Self::ZoomStepTooWide {
                zoom_step_pixels,
                width,
            } => write!(
                f,
                "zoom step of {} pixels must be less than half the width ({})",
                zoom_step_pixels, width
            ),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Resolution(err) => Some(err),
            Self::Viewport(err) => Some(err),
            Self::Limits(err) => Some(err),
            Self::WorkerPool(err) => Some(err),
            Self::ZoomStepTooWide { .. } => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<ResolutionError> for ConfigError {
    fn from(err: ResolutionError) -> Self {
        Self::Resolution(err)
    }
}

impl From<ViewportError> for ConfigError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<InvalidLimit> for ConfigError {
    fn from(err: InvalidLimit) -> Self {
        Self::Limits(err)
    }
}

impl From<WorkerPoolError> for ConfigError {
    fn from(err: WorkerPoolError) -> Self {
        Self::WorkerPool(err)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub width: u32,
    pub height: u32,
    pub center: Complex,
    /// Plane location of the leftmost, vertically centred pixel.
    pub anchor: Complex,
    pub params: FractalParams,
    pub colour: ColourSettings,
    pub limits: NavigationLimits,
    /// Worker threads; `None` sizes the pool from the CPU count.
    pub workers: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            center: Complex::ZERO,
            anchor: Complex::new(-2.0, 0.0),
            params: FractalParams::default(),
            colour: ColourSettings::default(),
            limits: NavigationLimits::default(),
            workers: None,
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = Self::from_json(&std::fs::read_to_string(path)?)?;

        log::debug!("loaded config from {}", path.display());

        Ok(config)
    }

    pub fn initial_state(&self) -> Result<NavigationState, ConfigError> {
        let resolution = Resolution::new(self.width, self.height)?;

        Ok(NavigationState {
            viewport: Viewport::new(self.center, self.anchor, resolution)?,
            params: self.params.clamped(),
            colour: self.colour,
        })
    }

    pub fn build_controller(&self) -> Result<NavigationController, ConfigError> {
        self.limits.validate()?;
        let state = self.initial_state()?;
        if self.limits.zoom_step_pixels * 2.0 >= f64::from(self.width) {
            return Err(ConfigError::ZoomStepTooWide {
                zoom_step_pixels: self.limits.zoom_step_pixels,
                width: self.width,
            });
        }

        Ok(NavigationController::new(state, self.limits))
    }

    pub fn build_worker_pool(&self) -> Result<WorkerPool, ConfigError> {
        let pool = match self.workers {
            Some(workers) => WorkerPool::new(workers)?,
            None => WorkerPool::with_default_size()?,
        };

        Ok(pool)
    }
}
