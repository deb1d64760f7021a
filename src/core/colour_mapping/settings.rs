use crate::core::colour_mapping::kinds::ColourSchemeKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColourMode {
    #[default]
    Monochrome,
    Spectral,
}

impl ColourMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Monochrome => Self::Spectral,
            Self::Spectral => Self::Monochrome,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpectralVariant {
    #[default]
    WavelengthSweep,
    BandedRainbow,
}

impl SpectralVariant {
    #[must_use]
    pub const fn cycled(self) -> Self {
        match self {
            Self::WavelengthSweep => Self::BandedRainbow,
            Self::BandedRainbow => Self::WavelengthSweep,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MonochromeScaling {
    #[default]
    CapRelative,
    ContrastStretch,
}

impl MonochromeScaling {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::CapRelative => Self::ContrastStretch,
            Self::ContrastStretch => Self::CapRelative,
        }
    }
}

/// Viewer-selected colouring. Only one of `spectral` / `monochrome` is in
/// effect at a time, depending on `mode`; the other is remembered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColourSettings {
    pub mode: ColourMode,
    pub spectral: SpectralVariant,
    pub monochrome: MonochromeScaling,
}

impl ColourSettings {
    #[must_use]
    pub const fn scheme(&self) -> ColourSchemeKind {
        match (self.mode, self.monochrome, self.spectral) {
            (ColourMode::Monochrome, MonochromeScaling::CapRelative, _) => {
                ColourSchemeKind::Monochrome
            }
            (ColourMode::Monochrome, MonochromeScaling::ContrastStretch, _) => {
                ColourSchemeKind::ContrastStretch
            }
            (ColourMode::Spectral, _, SpectralVariant::WavelengthSweep) => {
                ColourSchemeKind::WavelengthSweep
            }
            (ColourMode::Spectral, _, SpectralVariant::BandedRainbow) => {
                ColourSchemeKind::BandedRainbow
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_resolve_to_monochrome() {
        assert_eq!(ColourSettings::default().scheme(), ColourSchemeKind::Monochrome);
    }

    #[test]
    fn toggles_are_involutions() {
        assert_eq!(ColourMode::Spectral.toggled().toggled(), ColourMode::Spectral);
        assert_eq!(
            SpectralVariant::BandedRainbow.cycled().cycled(),
            SpectralVariant::BandedRainbow
        );
        assert_eq!(
            MonochromeScaling::CapRelative.toggled().toggled(),
            MonochromeScaling::CapRelative
        );
    }

    #[test]
    fn scheme_depends_only_on_active_mode() {
        let spectral = ColourSettings {
            mode: ColourMode::Spectral,
            spectral: SpectralVariant::BandedRainbow,
            monochrome: MonochromeScaling::ContrastStretch,
        };
        assert_eq!(spectral.scheme(), ColourSchemeKind::BandedRainbow);

        let monochrome = ColourSettings {
            mode: ColourMode::Monochrome,
            ..spectral
        };
        assert_eq!(monochrome.scheme(), ColourSchemeKind::ContrastStretch);
    }

    #[test]
    fn every_scheme_is_reachable() {
        let mut reached = Vec::new();
        for mode in [ColourMode::Monochrome, ColourMode::Spectral] {
            for spectral in [SpectralVariant::WavelengthSweep, SpectralVariant::BandedRainbow] {
                for monochrome in [MonochromeScaling::CapRelative, MonochromeScaling::ContrastStretch] {
                    let scheme = ColourSettings { mode, spectral, monochrome }.scheme();
                    if !reached.contains(&scheme) {
                        reached.push(scheme);
                    }
                }
            }
        }

        for kind in ColourSchemeKind::ALL {
            assert!(reached.contains(kind), "{} unreachable", kind);
        }
    }
}
