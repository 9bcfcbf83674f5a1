// namer.rs - decorative team names, no tie to partition contents
use super::types::NamedGroup;
use crate::partitioner::Partition;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

pub const ADJECTIVES: &[&str] = &[
    "Dynamic",
    "Creative",
    "Brilliant",
    "Energetic",
    "Innovative",
    "Visionary",
    "Courageous",
    "Fearless",
    "Bombastic",
    "Epic",
    "Legendary",
    "Mighty",
    "Fierce",
    "Savage",
    "Radical",
    "Awesome",
];

pub const NOUNS: &[&str] = &[
    "Team", "Squad", "Group", "Crew", "Alliance", "Gang", "Pack", "Tribe", "Clan",
];

/// Source of cosmetic group names
pub trait GroupNamer {
    fn next_name(&mut self) -> String;
}

/// Picks "<Adjective> <Noun>" uniformly from the fixed word lists.
pub struct RandomNamer<R> {
    rng: R,
}

impl<R: Rng> RandomNamer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomNamer<ThreadRng> {
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> GroupNamer for RandomNamer<R> {
    fn next_name(&mut self) -> String {
        let adjective = ADJECTIVES.choose(&mut self.rng).copied().unwrap_or("Mighty");
        let noun = NOUNS.choose(&mut self.rng).copied().unwrap_or("Team");
        format!("{adjective} {noun}")
    }
}

/// Attach a number and an independently drawn name to every group.
pub fn name_groups(partition: &Partition, namer: &mut dyn GroupNamer) -> Vec<NamedGroup> {
    partition
        .iter()
        .enumerate()
        .map(|(i, members)| NamedGroup {
            number: i + 1,
            name: namer.next_name(),
            members: members.to_vec(),
        })
        .collect()
}
