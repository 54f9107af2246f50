use crate::{
    any::{Score, ScoreInfo, ScoreState},
    catch::{CatchPerformanceAttributes, CatchScoreState},
    model::{
        beatmap::{AttributeSource, DifficultyAttributes},
        mods::GameMods,
    },
};

use self::calculator::CatchPerformanceCalculator;

mod calculator;

/// Calculate the performance attributes of an osu!catch score.
///
/// This is a pure function of its arguments, i.e. calling it twice with the
/// same arguments returns bit-identical results.
pub fn calculate(
    attrs: DifficultyAttributes,
    mods: impl Into<GameMods>,
    state: impl Into<CatchScoreState>,
) -> CatchPerformanceAttributes {
    CatchPerformanceCalculator::new(attrs, mods.into(), state.into()).calculate()
}

/// A finished osu!catch score and its performance.
#[derive(Clone, Debug, PartialEq)]
pub struct CatchScore {
    info: ScoreInfo,
    state: ScoreState,
    mods: GameMods,
    attrs: CatchPerformanceAttributes,
}

impl CatchScore {
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
            CatchScoreState::from(state.clone()),
        );

        Self {
            info,
            state,
            mods,
            attrs,
        }
    }

    /// The calculated performance attributes.
    pub const fn attributes(&self) -> &CatchPerformanceAttributes {
        &self.attrs
    }

    /// Consume the score and return its performance attributes.
    pub fn into_attributes(self) -> CatchPerformanceAttributes {
        self.attrs
    }

    fn catch_state(&self) -> CatchScoreState {
        CatchScoreState::from(self.state.clone())
    }
}

impl Score for CatchScore {
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
        self.catch_state().accuracy()
    }

    fn total_hits(&self) -> u32 {
        self.catch_state().total_hits()
    }

    fn total_successful_hits(&self) -> u32 {
        self.catch_state().total_successful_hits()
    }
}
