use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;
use thiserror::Error;

/// Requested number of students per group. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct GroupSize(NonZeroUsize);

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Group size must be greater than 0")]
pub struct InvalidGroupSize;

impl GroupSize {
    pub const MIN: GroupSize = GroupSize(NonZeroUsize::MIN);

    pub fn new(size: usize) -> Result<Self, InvalidGroupSize> {
        NonZeroUsize::new(size).map(Self).ok_or(InvalidGroupSize)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }

    pub fn increment(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// One smaller, clamped at [`GroupSize::MIN`].
    pub fn decrement(self) -> Self {
        NonZeroUsize::new(self.get() - 1).map(Self).unwrap_or(Self::MIN)
    }
}

impl Default for GroupSize {
    fn default() -> Self {
        // three per group unless configured otherwise
        Self(NonZeroUsize::MIN.saturating_add(2))
    }
}

impl TryFrom<usize> for GroupSize {
    type Error = InvalidGroupSize;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<GroupSize> for usize {
    fn from(size: GroupSize) -> usize {
        size.get()
    }
}

impl fmt::Display for GroupSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Disjoint, exhaustive grouping of the present identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Partition {
    groups: Vec<Vec<String>>,
}

impl Partition {
    pub(crate) fn from_groups(groups: Vec<Vec<String>>) -> Self {
        Self { groups }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn groups(&self) -> &[Vec<String>] {
        &self.groups
    }

    pub fn iter(&self) -> impl Iterator<Item = &[String]> {
        self.groups.iter().map(Vec::as_slice)
    }

    /// Member count of each group, in group order.
    pub fn sizes(&self) -> Vec<usize> {
        self.groups.iter().map(Vec::len).collect()
    }

    pub fn member_count(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    pub fn into_groups(self) -> Vec<Vec<String>> {
        self.groups
    }
}
