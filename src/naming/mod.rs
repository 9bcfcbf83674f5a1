mod namer;
mod types;

#[cfg(test)]
mod tests;

pub use namer::{name_groups, GroupNamer, RandomNamer, ADJECTIVES, NOUNS};
pub use types::NamedGroup;
