use crate::{
    any::{PerformanceAttributes, ScoreInfo, ScoreState},
    catch::CatchScore,
    model::{beatmap::AttributeSource, mode::GameMode, mods::GameMods},
    osu::OsuScore,
};

/// Common interface of finished scores of any mode.
///
/// The semantics of the hit counting and the accuracy depend on the mode.
pub trait Score {
    /// The score's identity.
    fn info(&self) -> &ScoreInfo;

    /// The score's raw hitresults.
    fn state(&self) -> &ScoreState;

    /// The mods the score was set with.
    fn mods(&self) -> GameMods;

    /// The performance points of the score.
    fn total_value(&self) -> f32;

    /// The accuracy between `0.0` and `1.0`.
    fn accuracy(&self) -> f32;

    /// The total amount of judged hits.
    fn total_hits(&self) -> u32;

    /// The amount of hits that were not a miss.
    fn total_successful_hits(&self) -> u32;
}

/// All the ways that creating an [`AnyScore`] can fail.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScoreError {
    #[error("no performance model available for mode {0}")]
    UnsupportedMode(GameMode),
}

/// A finished score of any supported mode.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyScore {
    Osu(OsuScore),
    Catch(CatchScore),
}

impl AnyScore {
    /// Create the score for the mode of `info`.
    ///
    /// Returns [`ScoreError::UnsupportedMode`] for osu!taiko and osu!mania.
    pub fn new(
        info: ScoreInfo,
        state: ScoreState,
        mods: impl Into<GameMods>,
        source: &impl AttributeSource,
    ) -> Result<Self, ScoreError> {
        match info.mode {
            GameMode::Osu => Ok(Self::Osu(OsuScore::new(info, state, mods, source))),
            GameMode::Catch => Ok(Self::Catch(CatchScore::new(info, state, mods, source))),
            mode @ (GameMode::Taiko | GameMode::Mania) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(score_id = info.score_id, %mode, "unsupported mode");

                Err(ScoreError::UnsupportedMode(mode))
            }
        }
    }

    /// The mode of the score.
    pub const fn mode(&self) -> GameMode {
        match self {
            Self::Osu(_) => GameMode::Osu,
            Self::Catch(_) => GameMode::Catch,
        }
    }

    /// The calculated performance attributes.
    pub fn attributes(&self) -> PerformanceAttributes {
        match self {
            Self::Osu(score) => PerformanceAttributes::Osu(score.attributes().clone()),
            Self::Catch(score) => PerformanceAttributes::Catch(score.attributes().clone()),
        }
    }

    fn inner(&self) -> &dyn Score {
        match self {
            Self::Osu(score) => score,
            Self::Catch(score) => score,
        }
    }
}

impl Score for AnyScore {
    fn info(&self) -> &ScoreInfo {
        self.inner().info()
    }

    fn state(&self) -> &ScoreState {
        self.inner().state()
    }

    fn mods(&self) -> GameMods {
        self.inner().mods()
    }

    fn total_value(&self) -> f32 {
        self.inner().total_value()
    }

    fn accuracy(&self) -> f32 {
        self.inner().accuracy()
    }

    fn total_hits(&self) -> u32 {
        self.inner().total_hits()
    }

    fn total_successful_hits(&self) -> u32 {
        self.inner().total_successful_hits()
    }
}

impl From<OsuScore> for AnyScore {
    fn from(score: OsuScore) -> Self {
        Self::Osu(score)
    }
}

impl From<CatchScore> for AnyScore {
    fn from(score: CatchScore) -> Self {
        Self::Catch(score)
    }
}
