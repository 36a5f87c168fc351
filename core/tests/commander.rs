//! Commander tests: recruitment, drills, strength, pruning.

use wargames_core::{Commander, Rank, Soldier, WarError};

fn alexander() -> Commander {
    Commander::new("Alexander", 100)
}

#[test]
fn recruiting_a_private_and_a_captain() {
    let mut general = alexander();
    general.recruit_soldier(Rank::Private).unwrap();
    general.recruit_soldier(Rank::Captain).unwrap();

    assert_eq!(general.treasury(), 60);
    assert_eq!(
        general.roster(),
        &[Soldier::new(Rank::Private, 1), Soldier::new(Rank::Captain, 1)]
    );
}

/// A failed recruit must not touch the treasury or the roster.
#[test]
fn recruiting_without_funds_changes_nothing() {
    let mut general = Commander::new("Alexander", 5);

    let err = general.recruit_soldier(Rank::Private).unwrap_err();
    assert!(
        matches!(err, WarError::InsufficientFunds { needed: 10, available: 5 }),
        "unexpected error: {err:?}"
    );
    assert_eq!(general.treasury(), 5);
    assert!(general.roster().is_empty());
}

#[test]
fn drilling_the_whole_roster() {
    let mut general = alexander();
    general.recruit_soldier(Rank::Private).unwrap();
    general.recruit_soldier(Rank::Corporal).unwrap();
    assert_eq!(general.treasury(), 70);

    let report = general.drill_all().unwrap();

    assert_eq!(report.cost, 3);
    assert_eq!(report.participants, 2);
    assert_eq!(general.treasury(), 67);
    assert_eq!(general.roster().len(), 2);
    assert_eq!(general.roster()[0].experience, 2);
    assert_eq!(general.roster()[1].experience, 2);
}

#[test]
fn drill_without_funds_changes_nothing() {
    let mut general = Commander::new("Alexander", 40);
    general.recruit_soldier(Rank::Major).unwrap();
    assert_eq!(general.treasury(), 0);

    let before = general.clone();
    let err = general.drill_all().unwrap_err();
    assert!(matches!(err, WarError::InsufficientFunds { needed: 4, available: 0 }));
    assert_eq!(general, before);
}

#[test]
fn drill_promotes_soldiers_crossing_the_threshold() {
    let mut general = alexander();
    general.enlist(Soldier::new(Rank::Private, 4));
    general.enlist(Soldier::new(Rank::Captain, 2));

    let report = general.drill_all().unwrap();

    assert_eq!(report.promotions, 1);
    assert_eq!(general.roster()[0], Soldier::new(Rank::Corporal, 1));
    assert_eq!(general.roster()[1], Soldier::new(Rank::Captain, 3));
    assert_eq!(general.treasury(), 96);
}

#[test]
fn drill_selected_only_touches_chosen_positions() {
    let mut general = alexander();
    for rank in [Rank::Private, Rank::Corporal, Rank::Captain] {
        general.recruit_soldier(rank).unwrap();
    }
    assert_eq!(general.treasury(), 40);

    let report = general.drill_selected(&[2, 0]).unwrap();

    assert_eq!(report.cost, 4);
    assert_eq!(general.treasury(), 36);
    let experience: Vec<u32> = general.roster().iter().map(|s| s.experience).collect();
    assert_eq!(experience, vec![2, 1, 2]);
}

/// Listing a soldier twice drills and charges them twice.
#[test]
fn drill_selected_with_duplicates_drills_twice() {
    let mut general = alexander();
    general.recruit_soldier(Rank::Corporal).unwrap();

    let report = general.drill_selected(&[0, 0]).unwrap();

    assert_eq!(report.cost, 4);
    assert_eq!(general.treasury(), 76);
    assert_eq!(general.roster()[0].experience, 3);
}

#[test]
fn drill_selected_rejects_unknown_positions_before_charging() {
    let mut general = alexander();
    general.recruit_soldier(Rank::Private).unwrap();
    let before = general.clone();

    let err = general.drill_selected(&[0, 5]).unwrap_err();

    assert!(matches!(err, WarError::SoldierNotFound { position: 5, roster_len: 1 }));
    assert_eq!(general, before);
}

#[test]
fn drilling_soldiers_from_another_roster() {
    let mut paymaster = Commander::new("Paymaster", 10);
    let mut allies = vec![Soldier::recruit(Rank::Captain), Soldier::recruit(Rank::Major)];

    let report = paymaster.drill(allies.iter_mut()).unwrap();

    assert_eq!(report.cost, 7);
    assert_eq!(paymaster.treasury(), 3);
    assert!(paymaster.roster().is_empty());
    assert!(allies.iter().all(|s| s.experience == 2));

    let err = paymaster.drill(allies.iter_mut()).unwrap_err();
    assert!(matches!(err, WarError::InsufficientFunds { needed: 7, available: 3 }));
    assert!(allies.iter().all(|s| s.experience == 2));
}

#[test]
fn army_strength_sums_soldier_strength() {
    let mut general = Commander::new("Alexander", 0);
    assert_eq!(general.army_strength(), 0);

    general.enlist(Soldier::new(Rank::Private, 3));
    general.enlist(Soldier::new(Rank::Major, 2));
    general.enlist(Soldier::new(Rank::Captain, 0));
    assert_eq!(general.army_strength(), 3 + 8);
}

#[test]
fn prune_dead_keeps_survivors_in_order() {
    let mut general = Commander::new("Alexander", 50);
    general.enlist(Soldier::new(Rank::Private, 1));
    general.enlist(Soldier::new(Rank::Private, 0));
    general.enlist(Soldier::new(Rank::Major, 3));
    general.enlist(Soldier::new(Rank::Corporal, 0));
    general.enlist(Soldier::new(Rank::Captain, 2));

    assert_eq!(general.prune_dead(), 2);
    assert_eq!(
        general.roster(),
        &[
            Soldier::new(Rank::Private, 1),
            Soldier::new(Rank::Major, 3),
            Soldier::new(Rank::Captain, 2),
        ]
    );
    assert_eq!(general.prune_dead(), 0);
}

/// Pruning is never automatic: a soldier reduced to zero stays listed.
#[test]
fn fallen_soldiers_stay_until_pruned() {
    let mut general = alexander();
    general.recruit_soldier(Rank::Private).unwrap();
    general.roster_mut()[0].lose_experience();

    assert_eq!(general.roster().len(), 1);
    assert!(!general.roster()[0].is_alive());
    assert_eq!(general.prune_dead(), 1);
    assert!(general.roster().is_empty());
}
