pub mod cell;
pub mod selection;

pub use cell::{CellRef, Column, Direction};
pub use selection::SelectionSet;
