pub mod client;
pub mod error;

pub use client::{DefinitionSource, DictionaryClient};
pub use error::LookupError;
