//! Dense indexes handed out while loading a store and analysing a sentence.

use core::fmt;

use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// A root entry's slot in its store's load order. Ids are assigned from zero
/// without gaps, so `index()` addresses the store's root vector directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(transparent)]
pub struct RootId(pub u32);

impl RootId {
    /// Id of the entry stored at `index`.
    pub const fn at(index: usize) -> Self {
        Self(index as u32)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for RootId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "root#{}", self.0)
    }
}

/// Zero-based position of a word in its sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(transparent)]
pub struct TokenId(pub u32);

impl TokenId {
    pub const fn at(position: usize) -> Self {
        Self(position as u32)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Strictly earlier in the sentence.
    pub const fn precedes(self, other: TokenId) -> bool {
        self.0 < other.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}
