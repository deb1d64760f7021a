use serde::{Deserialize, Serialize};

/// Screen-relative direction. `Up` moves toward the positive imaginary axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Increment or decrement of a stepped parameter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    Increase,
    Decrease,
}

impl PanDirection {
    pub const ALL: &'static [Self] = &[Self::Up, Self::Down, Self::Left, Self::Right];

    /// Unit offset in the complex plane.
    #[must_use]
    pub const fn unit(self) -> (f64, f64) {
        match self {
            Self::Up => (0.0, 1.0),
            Self::Down => (0.0, -1.0),
            Self::Left => (-1.0, 0.0),
            Self::Right => (1.0, 0.0),
        }
    }
}
