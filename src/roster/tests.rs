use super::*;
use crate::naming::GroupNamer;
use crate::partitioner::{GenerationError, GroupSize, RandomSource};

struct Identity;

impl RandomSource for Identity {
    fn shuffle(&mut self, _ids: &mut [String]) {}
}

struct Counter(usize);

impl GroupNamer for Counter {
    fn next_name(&mut self) -> String {
        self.0 += 1;
        format!("Team {}", self.0)
    }
}

fn state(names: &[&str], size: usize) -> AppState {
    AppState::new(
        Roster::new(names.iter().copied()).unwrap(),
        GroupSize::new(size).unwrap(),
    )
}

#[test]
fn test_default_roster() {
    let roster = Roster::default();
    assert_eq!(roster.len(), 11);
    assert_eq!(roster.present_count(), 11);
    assert_eq!(roster.students()[0].name, "RČ");
    assert_eq!(roster.summary(), "11/11");
}

#[test]
fn test_roster_rejects_duplicates() {
    let result = Roster::new(["DK", "RL", "DK"]);
    assert_eq!(result, Err(RosterError::DuplicateStudent("DK".to_string())));
}

#[test]
fn test_roster_rejects_blank_names() {
    assert_eq!(Roster::new(["DK", "  "]), Err(RosterError::BlankName));
}

#[test]
fn test_roster_trims_names() {
    let roster = Roster::new([" DK "]).unwrap();
    assert_eq!(roster.students()[0].name, "DK");
}

#[test]
fn test_toggle_flips_attendance() {
    let mut roster = Roster::new(["A", "B", "C"]).unwrap();

    assert!(roster.toggle(1));
    assert_eq!(roster.present(), vec!["A".to_string(), "C".to_string()]);
    assert_eq!(roster.summary(), "2/3");

    assert!(roster.toggle(1));
    assert_eq!(roster.present_count(), 3);
}

#[test]
fn test_toggle_out_of_range_is_noop() {
    let mut roster = Roster::new(["A"]).unwrap();
    assert!(!roster.toggle(5));
    assert_eq!(roster.present_count(), 1);
}

#[test]
fn test_toggle_by_name() {
    let mut roster = Roster::new(["A", "B"]).unwrap();

    assert_eq!(roster.toggle_by_name("B"), Ok(false));
    assert_eq!(roster.toggle_by_name("B"), Ok(true));
    assert_eq!(
        roster.toggle_by_name("Z"),
        Err(RosterError::UnknownStudent("Z".to_string()))
    );
}

#[test]
fn test_default_state() {
    let state = AppState::default();
    assert_eq!(state.group_size.get(), 3);
    assert_eq!(state.roster.len(), 11);
    assert!(state.outcome.is_none());
}

#[test]
fn test_group_size_never_below_one() {
    let s = state(&["A"], 2).decrement_group_size();
    assert_eq!(s.group_size.get(), 1);

    let s = s.decrement_group_size();
    assert_eq!(s.group_size.get(), 1);

    let s = s.increment_group_size().increment_group_size();
    assert_eq!(s.group_size.get(), 3);
}

#[test]
fn test_generate_uses_only_present_students() {
    let s = state(&["A", "B", "C", "D", "E"], 2)
        .toggle_attendance(0)
        .generate(&mut Identity, &mut Counter(0));

    let groups = s.groups().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].members, vec!["B".to_string(), "D".to_string()]);
    assert_eq!(groups[1].members, vec!["C".to_string(), "E".to_string()]);
    assert_eq!(groups[0].label(), "Group 1: Team 1");
    assert!(s.error().is_none());
}

#[test]
fn test_generate_with_nobody_present() {
    let s = state(&["A"], 1)
        .toggle_attendance(0)
        .generate(&mut Identity, &mut Counter(0));

    assert_eq!(s.error(), Some(&GenerationError::EmptySelection));
    assert!(s.groups().is_none());
}

#[test]
fn test_generate_replaces_previous_outcome() {
    let s = state(&["A", "B"], 2).generate(&mut Identity, &mut Counter(0));
    assert_eq!(s.groups().map(<[_]>::len), Some(1));

    let s = s
        .increment_group_size()
        .generate(&mut Identity, &mut Counter(0));
    assert_eq!(
        s.error(),
        Some(&GenerationError::SizeExceedsAvailable {
            requested: 3,
            available: 2
        })
    );
    assert!(s.groups().is_none());

    let s = s
        .decrement_group_size()
        .generate(&mut Identity, &mut Counter(0));
    assert!(s.error().is_none());
}

#[test]
fn test_apply_dispatches_actions() {
    let mut source = Identity;
    let mut namer = Counter(0);

    let s = [
        Action::ToggleAttendance(2),
        Action::DecrementGroupSize,
        Action::IncrementGroupSize,
        Action::IncrementGroupSize,
        Action::Generate,
    ]
    .into_iter()
    .fold(state(&["A", "B", "C", "D", "E", "F", "G"], 2), |s, action| {
        s.apply(action, &mut source, &mut namer)
    });

    assert_eq!(s.group_size.get(), 3);
    assert_eq!(s.roster.summary(), "6/7");
    let sizes: Vec<usize> = s.groups().unwrap().iter().map(|g| g.members.len()).collect();
    assert_eq!(sizes, vec![3, 3]);
}
