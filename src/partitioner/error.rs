use thiserror::Error;

/// User-correctable reasons a partition could not be produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("No students are present")]
    EmptySelection,

    #[error(
        "Group size ({requested}) is larger than the number of present students ({available})"
    )]
    SizeExceedsAvailable { requested: usize, available: usize },
}
