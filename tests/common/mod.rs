#![allow(unused)]

use legacy_pp::{Beatmap, DifficultyEntry, GameMode, ScoreInfo, ScoreVersion};

pub use self::mods::*;

/// Bit values for mods
mod mods {
    pub const NM: u32 = 0;
    pub const NF: u32 = 1 << 0;
    pub const EZ: u32 = 1 << 1;
    pub const TD: u32 = 1 << 2;
    pub const HD: u32 = 1 << 3;
    pub const HR: u32 = 1 << 4;
    pub const DT: u32 = 1 << 6;
    pub const RX: u32 = 1 << 7;
    pub const HT: u32 = 1 << 8;
    pub const NC: u32 = (1 << 9) | DT;
    pub const FL: u32 = 1 << 10;
    pub const AT: u32 = 1 << 11;
    pub const SO: u32 = 1 << 12;
    pub const AP: u32 = 1 << 13;

    pub const UNRANKED: [u32; 3] = [RX, AP, AT];
}

pub const OSU_MAP_ID: i32 = 2785319;
pub const CATCH_MAP_ID: i32 = 2118524;

/// An osu!standard map with entries for NM, HR, and DT.
pub fn osu_map() -> Beatmap {
    Beatmap::new(OSU_MAP_ID)
        .score_version(ScoreVersion::V1)
        .n_circles(307)
        .n_spinners(1)
        .entry(
            NM,
            DifficultyEntry {
                aim: 2.8693628,
                speed: 2.5338697,
                ar: 9.3,
                od: 8.8,
                max_combo: 909.0,
                direction_change_count: 0.0,
            },
        )
        .entry(
            HR,
            DifficultyEntry {
                aim: 3.1011624,
                speed: 2.6833772,
                ar: 10.0,
                od: 10.0,
                max_combo: 909.0,
                direction_change_count: 0.0,
            },
        )
        .entry(
            DT,
            DifficultyEntry {
                aim: 3.9832215,
                speed: 3.6184773,
                ar: 10.533334,
                od: 10.007408,
                max_combo: 909.0,
                direction_change_count: 0.0,
            },
        )
}

/// An osu!catch map with entries for NM and HR.
pub fn catch_map() -> Beatmap {
    Beatmap::new(CATCH_MAP_ID)
        .n_circles(0)
        .n_spinners(2)
        .entry(
            NM,
            DifficultyEntry {
                aim: 3.2,
                speed: 0.0,
                ar: 8.0,
                od: 8.0,
                max_combo: 730.0,
                direction_change_count: 412.0,
            },
        )
        .entry(
            HR,
            DifficultyEntry {
                aim: 4.1,
                speed: 0.0,
                ar: 10.0,
                od: 10.0,
                max_combo: 730.0,
                direction_change_count: 413.0,
            },
        )
}

pub fn info(mode: GameMode, beatmap_id: i32) -> ScoreInfo {
    ScoreInfo {
        score_id: 4_000_000_001,
        mode,
        user_id: 2,
        beatmap_id,
        score: 31_415_926,
    }
}

#[track_caller]
pub fn assert_eq_float<F: Float>(a: F, b: F) {
    assert!((a - b).abs() < F::EPSILON, "{a} != {b}")
}

/// Trait to provide flexibility in the `assert_eq_float` function.
pub trait Float:
    Copy + std::fmt::Display + std::ops::Sub<Output = Self> + PartialOrd + Sized
{
    const EPSILON: Self;

    fn abs(self) -> Self;
}

macro_rules! impl_float {
    ( $( $ty:ty )* ) => {
        $(
            impl Float for $ty {
                const EPSILON: Self = Self::EPSILON;

                fn abs(self) -> Self {
                    self.abs()
                }
            }
        )*
    }
}

impl_float!(f32 f64);
