use serde::Serialize;
use std::fmt;

/// A generated group annotated with its display number and team name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedGroup {
    /// 1-based position in the partition
    pub number: usize,
    pub name: String,
    pub members: Vec<String>,
}

impl NamedGroup {
    pub fn label(&self) -> String {
        format!("Group {}: {}", self.number, self.name)
    }
}

impl fmt::Display for NamedGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.members.join(", "))
    }
}
