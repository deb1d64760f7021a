use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidLimit {
    pub field: &'static str,
}

impl fmt::Display for InvalidLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "navigation limit `{}` must be finite and positive", self.field)
    }
}

impl Error for InvalidLimit {}

/// Step sizes and bounds applied by the navigation controller. Pan and zoom
/// steps are measured in pixel spacings of the current view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationLimits {
    pub pan_step_pixels: f64,
    pub zoom_step_pixels: f64,
    pub max_zoom: f64,
    pub exponent_step: f64,
    pub iteration_cap_step: u32,
}

impl NavigationLimits {
    pub fn validate(&self) -> Result<(), InvalidLimit> {
        let positive = |value: f64| value.is_finite() && value > 0.0;

        if !positive(self.pan_step_pixels) {
            return Err(InvalidLimit {
                field: "pan_step_pixels",
            });
        }
        if !positive(self.zoom_step_pixels) {
            return Err(InvalidLimit {
                field: "zoom_step_pixels",
            });
        }
        if !positive(self.max_zoom) {
            return Err(InvalidLimit { field: "max_zoom" });
        }
        if !positive(self.exponent_step) {
            return Err(InvalidLimit {
                field: "exponent_step",
            });
        }
        if self.iteration_cap_step == 0 {
            return Err(InvalidLimit {
                field: "iteration_cap_step",
            });
        }

        Ok(())
    }
}

impl Default for NavigationLimits {
    fn default() -> Self {
        Self {
            pan_step_pixels: 5.0,
            zoom_step_pixels: 100.0,
            max_zoom: 1e13,
            exponent_step: 0.1,
            iteration_cap_step: 10,
        }
    }
}
