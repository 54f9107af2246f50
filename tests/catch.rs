use legacy_pp::{
    catch::{self, CatchScore, CatchScoreState},
    AttributeSource, GameMode, GameMods, Score, ScoreState,
};

mod common;

use common::*;

fn perfect() -> ScoreState {
    ScoreState {
        max_combo: 730,
        n_geki: 0,
        n_katu: 0,
        n300: 650,
        n100: 80,
        n50: 200,
        misses: 0,
    }
}

fn score(state: ScoreState, mods: u32) -> CatchScore {
    CatchScore::new(info(GameMode::Catch, CATCH_MAP_ID), state, mods, &catch_map())
}

#[test]
fn tiny_droplet_misses_are_hits() {
    let state = ScoreState {
        n_katu: 20,
        ..perfect()
    };

    let score = score(state, NM);

    assert_eq!(score.total_hits(), 950);
    assert_eq!(score.total_successful_hits(), 930);
    assert_eq_float(score.accuracy(), 930.0 / 950.0);
}

#[test]
fn perfect_play_has_full_accuracy() {
    assert_eq!(score(perfect(), NM).accuracy(), 1.0);
}

#[test]
fn unranked_mods_are_worth_nothing() {
    for unranked in UNRANKED {
        for mods in [NM, HD, HR, HD | HR | FL] {
            assert_eq!(score(perfect(), unranked | mods).total_value(), 0.0);
        }
    }
}

#[test]
fn penalty_mods_multiply_in_order() {
    let attrs = catch_map().difficulty_attributes(GameMods::NOMOD);
    let state = CatchScoreState::from(perfect());

    let nomod = catch::calculate(attrs.clone(), NM, state).pp;
    let penalized = catch::calculate(attrs, HT | NF | SO, state).pp;

    assert_eq!(penalized, nomod * 0.90 * 0.90 * 0.95);
}

#[test]
fn hardrock_uses_its_own_entry() {
    let nm = score(perfect(), NM);
    let hdhr = score(perfect(), HD | HR);

    assert_eq!(hdhr.attributes().difficulty.ar, 10.0);
    assert_eq!(hdhr.attributes().difficulty.direction_change_count, 413.0);
    assert!(hdhr.total_value() > nm.total_value());
}

#[test]
fn spinners_do_not_matter() {
    let attrs = catch_map().difficulty_attributes(GameMods::NOMOD);
    let state = CatchScoreState::from(perfect());

    let with_spinners = catch::calculate(attrs.clone(), SO, state).pp;

    let without_spinners = catch::calculate(
        legacy_pp::DifficultyAttributes {
            n_spinners: 0,
            ..attrs
        },
        SO,
        state,
    )
    .pp;

    assert_eq!(with_spinners, without_spinners);
}

#[test]
fn missing_difficulty_entry_is_defined() {
    // DT has no entry so every difficulty number is zero
    let score = score(perfect(), DT);

    assert_eq!(score.attributes().difficulty.aim, 0.0);
    assert!(score.total_value().is_finite());
    assert!(score.total_value() > 0.0);
}

#[test]
fn misses_reduce_pp() {
    let missed = ScoreState {
        max_combo: 500,
        n300: 640,
        misses: 10,
        ..perfect()
    };

    assert!(score(missed, NM).total_value() < score(perfect(), NM).total_value());
}

#[test]
fn deterministic() {
    for mods in [NM, HD, HR, HD | HR | FL, HT | NF | SO] {
        let a = score(perfect(), mods).total_value();
        let b = score(perfect(), mods).total_value();

        assert_eq!(a.to_bits(), b.to_bits());
    }
}
