//! Translator Common - Shared types and matching logic for the Error Translator
//!
//! The catalog is pure data, the matcher is a linear first-match-wins scan.
//! Nothing here is mutable after process start.

pub mod catalog;
pub mod matcher;
pub mod types;

pub use catalog::*;
pub use matcher::*;
pub use types::*;
