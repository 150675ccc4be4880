pub mod lookup;
pub mod types;

pub use lookup::{LookupController, LookupState, NOT_FOUND_MESSAGE};
