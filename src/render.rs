//! Plain-text and JSON views of a session.

use crate::naming::NamedGroup;
use crate::roster::{AppState, Roster};
use chrono::{DateTime, Utc};
use serde::Serialize;

const PRESENT: char = '●';
const ABSENT: char = '○';
const MEMBER: char = '•';

/// Render the class list with attendance markers.
///
/// Example output:
/// ```text
/// Students 2/3
///   ● RČ
///   ○ AČ
///   ● DK
/// ```
pub fn render_roster(roster: &Roster) -> String {
    let mut output = format!("Students {}\n", roster.summary());
    for student in roster.students() {
        let marker = if student.is_present { PRESENT } else { ABSENT };
        output.push_str("  ");
        output.push(marker);
        output.push(' ');
        output.push_str(&student.name);
        output.push('\n');
    }
    output
}

/// Render generated groups, one block per group.
///
/// Example output:
/// ```text
/// Group 1: Epic Squad
///   • DK
///   • RL
/// ```
pub fn render_groups(groups: &[NamedGroup]) -> String {
    let mut output = String::new();
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&group.label());
        output.push('\n');
        for member in &group.members {
            output.push_str("  ");
            output.push(MEMBER);
            output.push(' ');
            output.push_str(member);
            output.push('\n');
        }
    }
    output
}

/// Group size line, then either groups, the error message, or a prompt.
pub fn render_outcome(state: &AppState) -> String {
    let mut output = format!("Group size: {}\n\n", state.group_size);
    match &state.outcome {
        Some(Ok(groups)) => output.push_str(&render_groups(groups)),
        Some(Err(e)) => {
            output.push_str("Error: ");
            output.push_str(&e.to_string());
            output.push('\n');
        }
        None => output.push_str("No groups yet. Run `generate` to begin.\n"),
    }
    output
}

/// Machine-readable result of a successful generation.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub generated_at: DateTime<Utc>,
    pub group_size: usize,
    pub present: usize,
    pub total: usize,
    pub groups: Vec<NamedGroup>,
}

impl GenerationReport {
    /// `None` unless the state's last generation succeeded.
    pub fn from_state(state: &AppState) -> Option<Self> {
        let groups = state.groups()?;
        Some(Self {
            generated_at: Utc::now(),
            group_size: state.group_size.get(),
            present: state.roster.present_count(),
            total: state.roster.len(),
            groups: groups.to_vec(),
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
