mod mint;
mod state;
mod views;

pub use state::{SaleState, Stage};
pub use views::SaleInfo;
