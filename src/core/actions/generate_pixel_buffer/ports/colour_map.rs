use crate::core::colour_mapping::errors::ColourMapError;
use crate::core::colour_mapping::kinds::ColourSchemeKind;
use crate::core::data::colour::Colour;

pub trait ColourMap: Send + Sync {
    fn map(&self, iterations: u32) -> Result<Colour, ColourMapError>;

    fn kind(&self) -> ColourSchemeKind;

    fn display_name(&self) -> &'static str {
        self.kind().display_name()
    }
}
