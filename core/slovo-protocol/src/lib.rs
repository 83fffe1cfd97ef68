#![no_std] // Shared by every crate, including archive tooling

extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

pub mod error;
pub mod ids;
pub mod morphology;

// Re-export core types for convenience
pub use error::ProtocolError;
pub use ids::{RootId, TokenId};
pub use morphology::*;

pub mod model;
pub use model::*;
