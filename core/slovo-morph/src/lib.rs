//! Stem/flexion decomposition of Russian word forms against the lexical tables,
//! and the inverse synthesis of a form from a canonical word plus features.

pub mod decompose;
pub mod error;
pub mod store;
pub mod synthesis;

#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;

pub use decompose::{analyze, Analysis, MIN_STEM_CHARS};
pub use error::MorphError;
pub use store::LexicalStore;
pub use synthesis::{synthesize, synthesize_request, FeatureRequest};
