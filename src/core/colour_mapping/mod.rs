pub mod errors;
pub mod factory;
pub mod kinds;
pub mod lookup_table;
pub mod maps;
pub mod settings;
