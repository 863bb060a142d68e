//! Integration tests for team registration.

use belote_tournament::{schedule, Tournament, TournamentError, MAX_PERIOD_COUNT};

#[test]
fn duplicate_team_name_is_rejected() {
    let mut t = Tournament::default();
    assert!(t.add_team("Alpha", "A1", "A2").is_ok());
    assert_eq!(
        t.add_team("Alpha", "B1", "B2"),
        Err(TournamentError::DuplicateTeamName("Alpha".to_string()))
    );
    assert_eq!(t.teams().len(), 1);
    let alpha = t.team_by_name("Alpha").unwrap();
    assert_eq!(alpha.player_1.name(), "A1");
    assert_eq!(alpha.player_2.name(), "A2");
}

#[test]
fn team_names_are_case_sensitive() {
    let mut t = Tournament::default();
    t.add_team("Alpha", "A1", "A2").unwrap();
    assert!(t.add_team("alpha", "B1", "B2").is_ok());
    assert_eq!(t.teams().len(), 2);
}

#[test]
fn blank_names_are_rejected() {
    let mut t = Tournament::default();
    assert_eq!(t.add_team("  ", "A1", "A2"), Err(TournamentError::EmptyName));
    assert_eq!(t.add_team("Beta", "B1", ""), Err(TournamentError::EmptyName));
    assert_eq!(t.add_team("Beta", " ", "B2"), Err(TournamentError::EmptyName));
    assert!(t.teams().is_empty());
}

#[test]
fn names_are_stored_exactly_as_given() {
    let mut t = Tournament::default();
    t.add_team(" Alpha", "A1", "A2").unwrap();
    assert_eq!(t.team_by_name(" Alpha").unwrap().score(), 0);
    assert!(t.team_by_name("Alpha").is_none());

    // surrounding whitespace makes a different name
    t.add_team("Alpha", "B1", "B2").unwrap();
    t.add_team("Alpha ", "C1", "C2").unwrap();
    assert_eq!(t.teams().len(), 3);

    assert_eq!(t.remove_team(" Alpha"), Ok(()));
    assert_eq!(t.remove_team("Alpha "), Ok(()));
    let names: Vec<_> = t.teams().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Alpha"]);
}

#[test]
fn teams_keep_registration_order() {
    let mut t = Tournament::default();
    for name in ["C", "A", "B"] {
        t.add_team(name, "p", "q").unwrap();
    }
    let names: Vec<_> = t.teams().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["C", "A", "B"]);
}

#[test]
fn remove_team_by_name() {
    let mut t = Tournament::default();
    t.add_team("Alpha", "A1", "A2").unwrap();
    t.add_team("Beta", "B1", "B2").unwrap();
    assert_eq!(t.remove_team("Alpha"), Ok(()));
    assert!(t.team_by_name("Alpha").is_none());
    assert_eq!(
        t.remove_team("Alpha"),
        Err(TournamentError::UnknownTeam("Alpha".to_string()))
    );
    assert_eq!(t.teams().len(), 1);
}

#[test]
fn removing_a_scheduled_team_keeps_its_games() {
    let mut t = Tournament::default();
    for name in ["A", "B", "C", "D"] {
        t.add_team(name, "p", "q").unwrap();
    }
    schedule(&mut t, 3).unwrap();
    t.remove_team("B").unwrap();
    assert_eq!(t.games().len(), 6);
}

#[test]
fn clear_teams_keeps_games_reset_clears_both() {
    let mut t = Tournament::default();
    for name in ["A", "B"] {
        t.add_team(name, "p", "q").unwrap();
    }
    schedule(&mut t, 1).unwrap();

    t.clear_teams();
    assert!(t.teams().is_empty());
    assert_eq!(t.games().len(), 1);

    t.reset();
    assert!(t.games().is_empty());
    assert_eq!(t.periods_scheduled(), 0);
}

#[test]
fn team_ids_are_not_reused_after_reset() {
    let mut t = Tournament::default();
    t.add_team("A", "p", "q").unwrap();
    let first = t.teams()[0].id;
    t.reset();
    t.add_team("A", "p", "q").unwrap();
    assert_ne!(t.teams()[0].id, first);
}

#[test]
fn shuffle_keeps_the_same_teams() {
    let mut t = Tournament::default();
    for i in 0..8 {
        t.add_team(format!("T{i}"), "p", "q").unwrap();
    }
    t.shuffle_teams();
    let mut names: Vec<_> = t.teams().iter().map(|t| t.name.clone()).collect();
    names.sort();
    let expected: Vec<_> = (0..8).map(|i| format!("T{i}")).collect();
    assert_eq!(names, expected);
}

#[test]
fn period_count_defaults_to_four() {
    let mut t = Tournament::default();
    assert_eq!(t.period_count(), 4);
    t.set_period_count(7).unwrap();
    assert_eq!(t.period_count(), 7);
}

#[test]
fn oversized_period_count_is_refused() {
    let mut t = Tournament::default();
    assert_eq!(
        t.set_period_count(MAX_PERIOD_COUNT + 1),
        Err(TournamentError::InvalidPeriodCount(MAX_PERIOD_COUNT + 1))
    );
    assert_eq!(
        t.set_period_count(u32::MAX),
        Err(TournamentError::InvalidPeriodCount(u32::MAX))
    );
    assert_eq!(t.period_count(), 4);
    t.set_period_count(MAX_PERIOD_COUNT).unwrap();
}
