use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColourSchemeKind {
    #[default]
    Monochrome,
    ContrastStretch,
    WavelengthSweep,
    BandedRainbow,
}

impl ColourSchemeKind {
    pub const ALL: &'static [Self] = &[
        Self::Monochrome,
        Self::ContrastStretch,
        Self::WavelengthSweep,
        Self::BandedRainbow,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Monochrome => "Monochrome",
            Self::ContrastStretch => "Monochrome (contrast stretch)",
            Self::WavelengthSweep => "Wavelength sweep",
            Self::BandedRainbow => "Banded rainbow",
        }
    }

    /// Short identifier, as accepted on the command line.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Monochrome => "monochrome",
            Self::ContrastStretch => "stretch",
            Self::WavelengthSweep => "wavelength",
            Self::BandedRainbow => "rainbow",
        }
    }
}

impl std::fmt::Display for ColourSchemeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
