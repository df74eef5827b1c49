pub mod item;

use std::fmt;

pub use self::item::{Comment, Item, Post};

/// Identifier of an item (a post or a comment)
///
/// Posts and comments share a single id space, which is why a
/// [`Comment::parent`] can point at either of them.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub u64);

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Creation time of an item, in whole seconds since the Unix epoch
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub u64);

impl Timestamp {
    pub fn as_secs(self) -> u64 {
        self.0
    }
}

impl From<u64> for Timestamp {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Anything carrying a creation [`Timestamp`]
pub trait Timestamped {
    fn time(&self) -> Timestamp;
}
