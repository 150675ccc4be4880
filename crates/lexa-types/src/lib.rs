pub mod entry;

pub use entry::{Definition, Meaning, Phonetic, WordEntry};
