use crate::core::data::direction::{PanDirection, Step, ZoomDirection};
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;

/// Every viewer action the navigation controller understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Pan(PanDirection),
    Zoom(ZoomDirection),
    Recenter(Point),
    ToggleColourMode,
    CycleMode,
    SetIterationCap(Step),
    SetExponent(Step),
    MoveStartValue(PanDirection),
    CycleSpectralVariant,
    ToggleContrastStretch,
    Resize(Resolution),
}
