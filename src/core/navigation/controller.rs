//! Viewer-facing state machine over the viewport, formula parameters and
//! colour settings.
//!
//! Every accepted command marks the state dirty; the render loop clears the
//! flag once it has recomputed, recoloured and displayed a frame. A rejected
//! zoom leaves both the state and the flag untouched.

use crate::core::colour_mapping::settings::ColourSettings;
use crate::core::data::complex::Complex;
use crate::core::data::direction::{PanDirection, Step, ZoomDirection};
use crate::core::data::fractal_params::{FractalParams, MIN_ITERATION_CAP};
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use crate::core::data::transition::Transition;
use crate::core::data::viewport::Viewport;
use crate::core::navigation::command::Command;
use crate::core::navigation::limits::NavigationLimits;

/// Everything a render needs. Owned copies of this are handed to the
/// scheduler, so later navigation never races a render in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationState {
    pub viewport: Viewport,
    pub params: FractalParams,
    pub colour: ColourSettings,
}

#[derive(Debug)]
pub struct NavigationController {
    state: NavigationState,
    limits: NavigationLimits,
    dirty: bool,
}

impl NavigationController {
    /// Starts dirty so the first frame gets drawn.
    #[must_use]
    pub fn new(state: NavigationState, limits: NavigationLimits) -> Self {
        Self {
            state: NavigationState {
                params: state.params.clamped(),
                ..state
            },
            limits,
            dirty: true,
        }
    }

    #[must_use]
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    #[must_use]
    pub fn snapshot(&self) -> NavigationState {
        self.state
    }

    #[must_use]
    pub fn limits(&self) -> &NavigationLimits {
        &self.limits
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    pub fn apply(&mut self, command: Command) -> Transition {
        match command {
            Command::Pan(direction) => self.pan(direction),
            Command::Zoom(direction) => self.zoom(direction),
            Command::Recenter(pixel) => self.recenter(pixel),
            Command::ToggleColourMode => self.toggle_colour_mode(),
            Command::CycleMode => self.cycle_mode(),
            Command::SetIterationCap(step) => self.set_iteration_cap(step),
            Command::SetExponent(step) => self.set_exponent(step),
            Command::MoveStartValue(direction) => self.move_start_value(direction),
            Command::CycleSpectralVariant => self.cycle_spectral_variant(),
            Command::ToggleContrastStretch => self.toggle_contrast_stretch(),
            Command::Resize(resolution) => self.resize(resolution),
        }
    }

    pub fn pan(&mut self, direction: PanDirection) -> Transition {
        let transition = self
            .state
            .viewport
            .pan(direction, self.limits.pan_step_pixels);

        self.finish(transition, || {
            format!("pan {:?}", direction)
        })
    }

    pub fn zoom(&mut self, direction: ZoomDirection) -> Transition {
        let transition = self.state.viewport.zoom(
            direction,
            self.limits.zoom_step_pixels,
            self.limits.max_zoom,
        );

        let zoom_level = self.state.viewport.zoom_level();
        self.finish(transition, || {
            format!("zoom {:?} to level {:e}", direction, zoom_level)
        })
    }

    pub fn recenter(&mut self, pixel: Point) -> Transition {
        let transition = self.state.viewport.recenter(pixel);

        let center = self.state.viewport.center();
        self.finish(transition, || {
            format!(
                "recenter on pixel ({}, {}) at {} {:+}i",
                pixel.x, pixel.y, center.real, center.imag
            )
        })
    }

    pub fn toggle_colour_mode(&mut self) -> Transition {
        self.state.colour.mode = self.state.colour.mode.toggled();

        let mode = self.state.colour.mode;
        self.finish(Transition::Applied, || format!("colour mode {:?}", mode))
    }

    pub fn cycle_mode(&mut self) -> Transition {
        self.state.params.mode = self.state.params.mode.toggled();

        let mode = self.state.params.mode;
        self.finish(Transition::Applied, || format!("fractal mode {}", mode))
    }

    /// Steps the cap by `iteration_cap_step`, never below the floor. Hitting
    /// the floor still counts as applied.
    pub fn set_iteration_cap(&mut self, step: Step) -> Transition {
        let cap = self.state.params.iteration_cap;
        let delta = self.limits.iteration_cap_step;

        self.state.params.iteration_cap = match step {
            Step::Increase => cap.saturating_add(delta),
            Step::Decrease => cap.saturating_sub(delta).max(MIN_ITERATION_CAP),
        };

        let cap = self.state.params.iteration_cap;
        self.finish(Transition::Applied, || format!("iteration cap {}", cap))
    }

    pub fn set_exponent(&mut self, step: Step) -> Transition {
        let delta = match step {
            Step::Increase => self.limits.exponent_step,
            Step::Decrease => -self.limits.exponent_step,
        };
        let exponent = self.state.params.exponent + delta;

        if !exponent.is_finite() {
            log::trace!("exponent step rejected: {} is not finite", exponent);
            return Transition::Rejected;
        }
        self.state.params.exponent = exponent;

        self.finish(Transition::Applied, || format!("exponent {:.3}", exponent))
    }

    /// Moves the start value by the pan step, along the same axes as panning.
    pub fn move_start_value(&mut self, direction: PanDirection) -> Transition {
        let (unit_real, unit_imag) = direction.unit();
        let distance = self.limits.pan_step_pixels * self.state.viewport.pixel_spacing();
        let start_value =
            self.state.params.start_value + Complex::new(unit_real, unit_imag).scale(distance);

        if !start_value.is_finite() {
            log::trace!("start value move rejected: result is not finite");
            return Transition::Rejected;
        }
        self.state.params.start_value = start_value;

        self.finish(Transition::Applied, || {
            format!(
                "start value {} {:+}i",
                start_value.real, start_value.imag
            )
        })
    }

    pub fn cycle_spectral_variant(&mut self) -> Transition {
        self.state.colour.spectral = self.state.colour.spectral.cycled();

        let variant = self.state.colour.spectral;
        self.finish(Transition::Applied, || format!("spectral variant {:?}", variant))
    }

    pub fn toggle_contrast_stretch(&mut self) -> Transition {
        self.state.colour.monochrome = self.state.colour.monochrome.toggled();

        let scaling = self.state.colour.monochrome;
        self.finish(Transition::Applied, || {
            format!("monochrome scaling {:?}", scaling)
        })
    }

    pub fn resize(&mut self, resolution: Resolution) -> Transition {
        self.state.viewport = self.state.viewport.with_resolution(resolution);

        self.finish(Transition::Applied, || {
            format!("resize to {}x{}", resolution.width(), resolution.height())
        })
    }

    fn finish(&mut self, transition: Transition, describe: impl FnOnce() -> String) -> Transition {
        if transition.is_applied() {
            self.dirty = true;
            log::debug!("{}", describe());
        }

        transition
    }
}
