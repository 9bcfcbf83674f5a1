use super::*;
use crate::partitioner::{partition, GroupSize, RandomSource};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

struct Fixed(&'static str);

impl GroupNamer for Fixed {
    fn next_name(&mut self) -> String {
        self.0.to_string()
    }
}

struct Identity;

impl RandomSource for Identity {
    fn shuffle(&mut self, _ids: &mut [String]) {}
}

#[test]
fn test_random_name_uses_word_lists() {
    let mut namer = RandomNamer::new(ChaCha8Rng::seed_from_u64(1));

    for _ in 0..50 {
        let name = namer.next_name();
        let (adjective, noun) = name.split_once(' ').unwrap();
        assert!(ADJECTIVES.contains(&adjective), "{adjective}");
        assert!(NOUNS.contains(&noun), "{noun}");
    }
}

#[test]
fn test_thread_namer() {
    let name = RandomNamer::thread().next_name();
    assert_eq!(name.split(' ').count(), 2);
}

#[test]
fn test_name_groups_numbers_from_one() {
    let p = partition(&["A", "B", "C", "D"], GroupSize::new(2).unwrap(), &mut Identity).unwrap();
    let named = name_groups(&p, &mut Fixed("Epic Crew"));

    assert_eq!(named.len(), 2);
    assert_eq!(named[0].number, 1);
    assert_eq!(named[1].number, 2);
    assert_eq!(named[0].members, vec!["A".to_string(), "C".to_string()]);
    assert_eq!(named[1].label(), "Group 2: Epic Crew");
}

#[test]
fn test_named_group_display() {
    let group = NamedGroup {
        number: 3,
        name: "Fierce Pack".to_string(),
        members: vec!["RL".to_string(), "TP".to_string()],
    };

    assert_eq!(group.to_string(), "Group 3: Fierce Pack (RL, TP)");
}
