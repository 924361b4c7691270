pub mod action;
pub mod calc;
pub mod controller;
pub mod dialog;
pub mod focus;
pub mod item;
pub mod persist;
pub mod quote;
pub mod store;

pub use action::Action;
pub use controller::{GridController, Intent, NumericKey};
pub use item::{Accessory, Item};
pub use quote::QuoteData;
pub use store::{QuoteState, QuoteStore};
