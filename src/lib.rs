// Public API exports
pub mod config;
pub mod console;
pub mod naming;
pub mod partitioner;
pub mod render;
pub mod roster;

// Re-export main types for convenience
pub use partitioner::{
    partition, GenerationError, GroupSize, InvalidGroupSize, Partition, RandomSource, RngSource,
};

pub use naming::{name_groups, GroupNamer, NamedGroup, RandomNamer};

pub use roster::{Action, AppState, Outcome, Roster, RosterError, Student};

pub use config::{ConfigError, Settings};

pub use console::{Command, Session};

pub use render::{render_groups, render_outcome, render_roster, GenerationReport};
