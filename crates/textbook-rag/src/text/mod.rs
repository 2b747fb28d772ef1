//! Text utilities

pub mod sentences;

pub use sentences::split_into_sentences;
