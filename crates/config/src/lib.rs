pub mod fabric;
pub mod settings;

pub use fabric::{FabricCatalog, PriceMatrix};
pub use settings::{BatchSelectScope, ClickSelectionMode, Settings};
