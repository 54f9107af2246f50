use crate::{
    any::{Score, ScoreInfo, ScoreState},
    model::{
        beatmap::{AttributeSource, DifficultyAttributes},
        mods::GameMods,
    },
    osu::{OsuPerformanceAttributes, OsuScoreState},
};

use self::calculator::OsuPerformanceCalculator;

pub use self::calculator::PERFORMANCE_BASE_MULTIPLIER;

mod calculator;

/// Calculate the performance attributes of an osu!standard score.
///
/// This is a pure function of its arguments, i.e. calling it twice with the
/// same arguments returns bit-identical results.
pub fn calculate(
    attrs: DifficultyAttributes,
    mods: impl Into<GameMods>,
    state: impl Into<OsuScoreState>,
) -> OsuPerformanceAttributes {
    OsuPerformanceCalculator::new(attrs, mods.into(), state.into()).calculate()
}

/// A finished osu!standard score and its performance.
///
/// # Example
///
/// ```
/// use legacy_pp::{
///     osu::OsuScore, DifficultyAttributes, GameMode, Score, ScoreInfo, ScoreState, ScoreVersion,
/// };
///
/// let attrs = DifficultyAttributes {
///     aim: 2.6,
///     speed: 2.4,
///     ar: 9.6,
///     od: 8.8,
///     max_combo: 1200.0,
///     n_circles: 700,
///     n_spinners: 2,
///     score_version: ScoreVersion::V1,
///     ..Default::default()
/// };
///
/// let info = ScoreInfo {
///     mode: GameMode::Osu,
///     ..Default::default()
/// };
///
/// let state = ScoreState {
///     max_combo: 1150,
///     n300: 980,
///     n100: 15,
///     misses: 1,
///     ..Default::default()
/// };
///
/// let score = OsuScore::new(info, state, 8 + 16, &attrs);
///
/// assert!(score.total_value() > 0.0);
/// assert_eq!(score.total_hits(), 996);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct OsuScore {
    info: ScoreInfo,
    state: ScoreState,
    mods: GameMods,
    attrs: OsuPerformanceAttributes,
}

impl OsuScore {
    /// Query the attribute source for the given mods and calculate the
    /// score's performance.
    pub fn new(
        info: ScoreInfo,
        state: ScoreState,
        mods: impl Into<GameMods>,
        source: &impl AttributeSource,
    ) -> Self {
        let mods = mods.into();
        let attrs = calculate(
            source.difficulty_attributes(mods),
            mods,
            OsuScoreState::from(state.clone()),
        );

        Self {
            info,
            state,
            mods,
            attrs,
        }
    }

    /// The calculated performance attributes.
    pub const fn attributes(&self) -> &OsuPerformanceAttributes {
        &self.attrs
    }

    /// Consume the score and return its performance attributes.
    pub fn into_attributes(self) -> OsuPerformanceAttributes {
        self.attrs
    }

    /// The aim portion of the total value.
    pub const fn aim_value(&self) -> f32 {
        self.attrs.pp_aim
    }

    /// The speed portion of the total value.
    pub const fn speed_value(&self) -> f32 {
        self.attrs.pp_speed
    }

    /// The accuracy portion of the total value.
    pub const fn acc_value(&self) -> f32 {
        self.attrs.pp_acc
    }

    fn osu_state(&self) -> OsuScoreState {
        OsuScoreState::from(self.state.clone())
    }
}

impl Score for OsuScore {
    fn info(&self) -> &ScoreInfo {
        &self.info
    }

    fn state(&self) -> &ScoreState {
        &self.state
    }

    fn mods(&self) -> GameMods {
        self.mods
    }

    fn total_value(&self) -> f32 {
        self.attrs.pp
    }

    fn accuracy(&self) -> f32 {
        self.osu_state().accuracy()
    }

    fn total_hits(&self) -> u32 {
        self.osu_state().total_hits()
    }

    fn total_successful_hits(&self) -> u32 {
        self.osu_state().total_successful_hits()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::model::beatmap::ScoreVersion;

    use super::*;

    const RX: u32 = 1 << 7;
    const AP: u32 = 1 << 13;
    const AT: u32 = 1 << 11;

    fn attrs() -> DifficultyAttributes {
        DifficultyAttributes {
            aim: 3.1,
            speed: 2.9,
            ar: 9.7,
            od: 9.1,
            max_combo: 1500.0,
            direction_change_count: 0.0,
            n_spinners: 3,
            n_circles: 800,
            score_version: ScoreVersion::V1,
        }
    }

    fn state() -> OsuScoreState {
        OsuScoreState {
            max_combo: 1450,
            n300: 1050,
            n100: 40,
            n50: 3,
            misses: 2,
        }
    }

    #[test]
    fn unranked_mods_zero_total_but_keep_sub_values() {
        for mods in [RX, AP, AT, RX | 8 | 16] {
            let attrs = calculate(attrs(), mods, state());

            assert_eq!(attrs.pp, 0.0, "mods {mods}");
            assert!(attrs.pp_aim > 0.0);
            assert!(attrs.pp_speed > 0.0);
        }
    }

    #[test]
    fn zero_difficulty_uses_floor() {
        let attrs = DifficultyAttributes {
            score_version: ScoreVersion::V2,
            ..Default::default()
        };

        let state = OsuScoreState {
            max_combo: 1000,
            n300: 1000,
            ..Default::default()
        };

        let result = calculate(attrs, 0, state);

        for value in [result.pp_aim, result.pp_speed, result.pp_acc, result.pp] {
            assert!(value.is_finite());
            assert!(value > 0.0);
        }
    }

    #[test]
    fn huge_counters_do_not_panic() {
        let state = OsuScoreState {
            max_combo: 15_000_000,
            n300: 15_000_000,
            ..Default::default()
        };

        let result = calculate(DifficultyAttributes::default(), 0, state);

        assert!(result.pp.is_finite());

        let saturated = OsuScoreState {
            max_combo: u32::MAX,
            n300: u32::MAX,
            n100: u32::MAX,
            n50: u32::MAX,
            misses: u32::MAX,
        };

        let result = calculate(attrs(), 0, saturated);

        assert!(!result.pp.is_nan());
    }

    #[test]
    fn no_hits_zeroes_aim_and_speed() {
        let result = calculate(attrs(), 0, OsuScoreState::new());

        // Zero combo zeroes aim and zero accuracy zeroes speed
        assert_eq!(result.pp_aim, 0.0);
        assert_eq!(result.pp_speed, 0.0);
        assert!(result.pp.is_finite());
    }

    #[test]
    fn nofail_penalty_caps_at_ten_percent() {
        let many_misses = OsuScoreState {
            misses: 20,
            ..state()
        };

        let nm = calculate(attrs(), 0, many_misses);
        let nf = calculate(attrs(), 1, many_misses);

        assert_eq!(nm.pp_aim, nf.pp_aim);

        let ratio = nf.pp / nm.pp;
        assert!((ratio - 0.9).abs() < 1e-5, "{ratio}");
    }

    #[test]
    fn legacy_accuracy_assumes_non_circles_are_300s() {
        let state = OsuScoreState {
            max_combo: 1500,
            n300: 1400,
            n100: 95,
            n50: 0,
            misses: 0,
        };

        let mut attrs = attrs();

        // 695 non-circles take away that many 300s from the circles
        attrs.n_circles = 800;
        let concentrated = calculate(attrs.clone(), 0, state);

        attrs.n_circles = 1495;
        let spread = calculate(attrs, 0, state);

        assert!(spread.pp_acc > concentrated.pp_acc);
        assert_eq!(spread.pp_aim, concentrated.pp_aim);
    }

    #[test]
    fn legacy_accuracy_clamps_negative_percentage() {
        let state = OsuScoreState {
            max_combo: 10,
            n300: 0,
            n100: 0,
            n50: 0,
            misses: 1000,
        };

        let result = calculate(attrs(), 0, state);

        assert_eq!(result.pp_acc, 0.0);
    }

    #[test]
    fn legacy_accuracy_without_circles() {
        let mut attrs = attrs();
        attrs.n_circles = 0;

        let result = calculate(attrs, 0, state());

        assert_eq!(result.pp_acc, 0.0);
    }

    #[test]
    fn flashlight_and_ar_bonus_do_not_stack() {
        let mut attrs = attrs();
        attrs.ar = 11.0;

        // On very short maps the AR bonus outweighs the FL bonus
        let short = OsuScoreState {
            max_combo: 10,
            n300: 10,
            ..Default::default()
        };

        let nm = calculate(attrs.clone(), 0, short);
        let fl = calculate(attrs.clone(), 1024, short);

        assert_eq!(nm.pp_aim, fl.pp_aim);
        assert!(fl.pp_acc > nm.pp_acc);

        // whereas on long maps the FL bonus takes over
        let long = OsuScoreState {
            max_combo: 1000,
            n300: 1000,
            ..Default::default()
        };

        let nm = calculate(attrs.clone(), 0, long);
        let fl = calculate(attrs, 1024, long);

        assert!(fl.pp_aim > nm.pp_aim);
    }

    proptest! {
        #[test]
        fn deterministic(
            n300 in 0..3_000_u32,
            n100 in 0..300_u32,
            n50 in 0..100_u32,
            misses in 0..50_u32,
            mods in 0..(1_u32 << 14),
        ) {
            let state = OsuScoreState { max_combo: n300, n300, n100, n50, misses };

            let a = calculate(attrs(), mods, state);
            let b = calculate(attrs(), mods, state);

            prop_assert_eq!(a.pp.to_bits(), b.pp.to_bits());
        }
    }
}
