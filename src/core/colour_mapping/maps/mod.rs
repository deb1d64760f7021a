pub mod banded_rainbow;
pub mod contrast_stretch;
pub mod monochrome;
pub mod wavelength_sweep;
