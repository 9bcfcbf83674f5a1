use super::student::Roster;
use crate::naming::{name_groups, GroupNamer, NamedGroup};
use crate::partitioner::{partition, GenerationError, GroupSize, RandomSource};
use tracing::{debug, warn};

/// Result of the most recent generate request.
pub type Outcome = Result<Vec<NamedGroup>, GenerationError>;

/// Everything the view needs: roster, current group size and last outcome.
///
/// Every update takes the state by value and hands back the next state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub roster: Roster,
    pub group_size: GroupSize,
    pub outcome: Option<Outcome>,
}

/// User intents the state reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ToggleAttendance(usize),
    IncrementGroupSize,
    DecrementGroupSize,
    Generate,
}

impl AppState {
    pub fn new(roster: Roster, group_size: GroupSize) -> Self {
        Self {
            roster,
            group_size,
            outcome: None,
        }
    }

    pub fn toggle_attendance(mut self, index: usize) -> Self {
        if self.roster.toggle(index) {
            debug!(index, present = %self.roster.summary(), "toggled attendance");
        } else {
            warn!(index, "ignoring toggle for unknown student index");
        }
        self
    }

    pub fn increment_group_size(mut self) -> Self {
        self.group_size = self.group_size.increment();
        debug!(group_size = self.group_size.get(), "group size changed");
        self
    }

    pub fn decrement_group_size(mut self) -> Self {
        self.group_size = self.group_size.decrement();
        debug!(group_size = self.group_size.get(), "group size changed");
        self
    }

    /// Replace the previous outcome with a fresh partition of present students.
    pub fn generate(mut self, source: &mut dyn RandomSource, namer: &mut dyn GroupNamer) -> Self {
        let present = self.roster.present();

        let outcome = partition(&present, self.group_size, source)
            .map(|groups| name_groups(&groups, namer));

        match &outcome {
            Ok(groups) => debug!(groups = groups.len(), "generated groups"),
            Err(e) => debug!(error = %e, "generation rejected"),
        }

        self.outcome = Some(outcome);
        self
    }

    pub fn apply(
        self,
        action: Action,
        source: &mut dyn RandomSource,
        namer: &mut dyn GroupNamer,
    ) -> Self {
        match action {
            Action::ToggleAttendance(index) => self.toggle_attendance(index),
            Action::IncrementGroupSize => self.increment_group_size(),
            Action::DecrementGroupSize => self.decrement_group_size(),
            Action::Generate => self.generate(source, namer),
        }
    }

    pub fn groups(&self) -> Option<&[NamedGroup]> {
        match &self.outcome {
            Some(Ok(groups)) => Some(groups),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&GenerationError> {
        match &self.outcome {
            Some(Err(e)) => Some(e),
            _ => None,
        }
    }
}
