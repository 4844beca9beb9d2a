//! vitrans-translate: Vietnamese translation of text and images.
//!
//! One call in, one remote request out, one cleaned string back.

pub mod normalize;
pub mod prompt;
pub mod translator;

pub use normalize::clean_translation;
pub use translator::{TranslationFailure, Translator};
