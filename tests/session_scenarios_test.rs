//! Whole-game scenarios driven through the facade crate.

use killer_darts::core::Session;
use killer_darts::types::{GameAction, PlayerStatus};

fn session_with(names: &[&str]) -> Session {
    let mut s = Session::new();
    for (i, name) in names.iter().enumerate() {
        s.add_player(name, i as u8 + 1).unwrap();
    }
    s
}

fn hits(s: &mut Session, index: usize, n: usize) {
    for _ in 0..n {
        assert!(s.apply_action(GameAction::Hit(index)));
    }
}

#[test]
fn first_killer_knocks_out_every_scoreless_player() {
    let mut s = session_with(&["A", "B", "C", "D"]);

    hits(&mut s, 0, 4);
    assert_eq!(s.players()[0].score, 4);
    assert!(!s.players()[0].is_killer);
    assert!(s.players().iter().all(|p| !p.eliminated));
    assert_eq!(s.winner(), None);

    hits(&mut s, 0, 1);
    let a = &s.players()[0];
    assert_eq!(a.score, 5);
    assert!(a.is_killer);
    assert!(s.players()[1..].iter().all(|p| p.eliminated));
    assert_eq!(s.winner(), Some("A"));

    let event = s.take_last_event().unwrap();
    assert!(event.became_killer);
    assert_eq!(event.knocked_out.as_slice(), &[1, 2, 3]);
    assert_eq!(event.winner, Some(0));
}

#[test]
fn two_player_game_ends_on_first_killer() {
    let mut s = session_with(&["A", "B"]);
    hits(&mut s, 0, 5);
    assert!(s.players()[0].is_killer);
    assert!(s.players()[1].eliminated);
    assert_eq!(s.winner(), Some("A"));
}

#[test]
fn players_with_points_survive_the_first_killer() {
    let mut s = session_with(&["A", "B", "C"]);
    hits(&mut s, 1, 1);
    hits(&mut s, 0, 5);

    assert!(!s.players()[1].eliminated);
    assert!(s.players()[2].eliminated);
    assert_eq!(s.winner(), None);
    assert_eq!(s.alive_count(), 2);
    assert_eq!(s.killer_count(), 1);
}

#[test]
fn second_killer_knocks_out_players_still_on_zero() {
    let mut s = session_with(&["A", "B", "C"]);
    hits(&mut s, 1, 1);
    hits(&mut s, 2, 1);
    hits(&mut s, 0, 5);
    assert_eq!(s.alive_count(), 3);

    // Drop C back to zero; B then becomes the second killer.
    assert!(s.apply_action(GameAction::Miss(2)));
    hits(&mut s, 1, 4);

    assert!(s.players()[2].eliminated);
    assert_eq!(s.killer_count(), 2);
    assert_eq!(s.winner(), None);
}

#[test]
fn miss_on_killer_recomputes_flag_from_score() {
    let mut s = session_with(&["A", "B", "C"]);
    hits(&mut s, 1, 1);
    hits(&mut s, 0, 5);
    assert!(s.players()[0].is_killer);

    assert!(s.apply_action(GameAction::Miss(0)));
    let a = &s.players()[0];
    assert_eq!(a.score, 4);
    assert!(!a.is_killer);
    assert_eq!(a.status(), PlayerStatus::Active);
    // Eliminations stand.
    assert!(s.players()[2].eliminated);
}

#[test]
fn guarded_operations_change_nothing() {
    let mut s = session_with(&["A", "B", "C"]);
    hits(&mut s, 1, 1);
    hits(&mut s, 0, 5);
    let before = s.snapshot();

    assert!(!s.apply_action(GameAction::Hit(0)), "at threshold");
    assert!(!s.apply_action(GameAction::Hit(2)), "eliminated");
    assert!(!s.apply_action(GameAction::Miss(2)), "eliminated");
    assert!(!s.apply_action(GameAction::Hit(9)), "out of range");
    assert!(!s.apply_action(GameAction::Miss(9)), "out of range");

    assert_eq!(s.snapshot(), before);
}

#[test]
fn miss_at_zero_is_ignored() {
    let mut s = session_with(&["A", "B"]);
    let before = s.snapshot();
    assert!(!s.apply_action(GameAction::Miss(0)));
    assert_eq!(s.snapshot(), before);
}

#[test]
fn new_game_keeps_identities_and_clears_round_state() {
    let mut s = session_with(&["A", "B"]);
    hits(&mut s, 0, 5);
    assert_eq!(s.winner(), Some("A"));

    assert!(s.apply_action(GameAction::NewGame));
    assert_eq!(s.winner(), None);
    assert_eq!(s.round(), 2);
    for (p, (name, number)) in s.players().iter().zip([("A", 1), ("B", 2)]) {
        assert_eq!(p.name, name);
        assert_eq!(p.number, number);
        assert_eq!(p.score, 0);
        assert!(!p.is_killer);
        assert!(!p.eliminated);
    }
}

#[test]
fn reset_all_empties_the_roster() {
    let mut s = Session::with_threshold(3);
    s.add_player("A", 20).unwrap();
    s.add_player("B", 19).unwrap();
    hits(&mut s, 0, 3);

    assert!(s.apply_action(GameAction::ResetAll));
    assert!(s.is_empty());
    assert_eq!(s.winner(), None);
    assert_eq!(s.threshold(), 3);
    assert_eq!(s.available_numbers().len(), 20);
}

#[test]
fn custom_threshold_changes_when_killers_emerge() {
    let mut s = Session::with_threshold(2);
    s.add_player("A", 20).unwrap();
    s.add_player("B", 19).unwrap();
    hits(&mut s, 0, 2);
    assert!(s.players()[0].is_killer);
    assert_eq!(s.winner(), Some("A"));
}

#[test]
fn roster_edits_keep_numbers_unique() {
    let mut s = session_with(&["A", "B"]);
    assert!(!s.apply_action(GameAction::AddPlayer {
        name: "C".to_string(),
        number: 2,
    }));
    assert!(!s.apply_action(GameAction::ChangeNumber { index: 0, number: 2 }));
    assert!(s.apply_action(GameAction::ChangeNumber { index: 0, number: 1 }));
    assert!(s.apply_action(GameAction::ChangeNumber { index: 0, number: 17 }));
    assert_eq!(s.players()[0].number, 17);
    assert_eq!(s.len(), 2);
}

#[test]
fn renaming_the_winner_moves_the_crown() {
    let mut s = session_with(&["A", "B"]);
    hits(&mut s, 0, 5);
    assert!(s.apply_action(GameAction::ChangeName {
        index: 0,
        name: "Iceman".to_string(),
    }));
    assert_eq!(s.winner(), Some("Iceman"));
}

#[test]
fn removing_a_player_shifts_later_indices() {
    let mut s = session_with(&["A", "B", "C"]);
    assert!(s.apply_action(GameAction::RemovePlayer(0)));
    assert_eq!(s.players()[0].name, "B");
    assert!(s.apply_action(GameAction::Hit(1)));
    assert_eq!(s.players()[1].name, "C");
    assert_eq!(s.players()[1].score, 1);
    assert!(!s.apply_action(GameAction::RemovePlayer(5)));
}

#[test]
fn winning_hit_only_touches_hitter_and_knocked_out_players() {
    let mut s = session_with(&["A", "B", "C", "D"]);
    hits(&mut s, 0, 4);
    let before = s.players().to_vec();

    let event = s.apply_hit(0).unwrap();
    assert_eq!(event.winner, Some(0));
    assert_eq!(s.winner(), Some("A"));

    for (i, (old, new)) in before.iter().zip(s.players()).enumerate() {
        if i == 0 {
            assert_eq!((new.score, new.is_killer), (5, true));
            assert_eq!((&new.name, new.number, new.eliminated), (&old.name, old.number, false));
        } else if event.knocked_out.contains(&i) {
            let mut expected = old.clone();
            expected.eliminated = true;
            assert_eq!(new, &expected, "player {i}");
        } else {
            assert_eq!(new, old, "player {i}");
        }
    }
    assert_eq!(event.knocked_out.as_slice(), &[1, 2, 3]);
}
