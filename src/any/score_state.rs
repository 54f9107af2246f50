use crate::{catch::CatchScoreState, model::mode::GameMode, osu::OsuScoreState};

/// Identity of a score.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreInfo {
    /// The score's id.
    pub score_id: i64,
    /// The mode the score was set in.
    pub mode: GameMode,
    /// The id of the player.
    pub user_id: i64,
    /// The id of the beatmap.
    pub beatmap_id: i32,
    /// The raw score value.
    pub score: i32,
}

/// Raw hitresults and max combo of a finished play, independent of mode.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreState {
    /// Maximum combo that the score has reached. **Not** the maximum
    /// possible combo of the map.
    ///
    /// Note that for osu!catch only fruits and droplets are considered for
    /// combo.
    pub max_combo: u32,
    /// Amount of gekis.
    pub n_geki: u32,
    /// Amount of katus (tiny droplet misses for osu!catch).
    pub n_katu: u32,
    /// Amount of 300s (fruits for osu!catch).
    pub n300: u32,
    /// Amount of 100s (droplets for osu!catch).
    pub n100: u32,
    /// Amount of 50s (tiny droplets for osu!catch).
    pub n50: u32,
    /// Amount of misses (fruits + droplets for osu!catch).
    pub misses: u32,
}

impl ScoreState {
    /// Create a new empty score state.
    pub const fn new() -> Self {
        Self {
            max_combo: 0,
            n_geki: 0,
            n_katu: 0,
            n300: 0,
            n100: 0,
            n50: 0,
            misses: 0,
        }
    }

    /// Return the total amount of hits by adding everything up based on the
    /// mode.
    ///
    /// Katus only count towards osu!catch. Saturates at `u32::MAX`.
    pub const fn total_hits(&self, mode: GameMode) -> u32 {
        let amount = self.total_successful_hits().saturating_add(self.misses);

        match mode {
            GameMode::Catch => amount.saturating_add(self.n_katu),
            GameMode::Osu | GameMode::Taiko | GameMode::Mania => amount,
        }
    }

    /// Return the amount of hits that were not a miss.
    ///
    /// Saturates at `u32::MAX`.
    pub const fn total_successful_hits(&self) -> u32 {
        self.n300.saturating_add(self.n100).saturating_add(self.n50)
    }
}

impl From<ScoreState> for OsuScoreState {
    fn from(state: ScoreState) -> Self {
        Self {
            max_combo: state.max_combo,
            n300: state.n300,
            n100: state.n100,
            n50: state.n50,
            misses: state.misses,
        }
    }
}

impl From<ScoreState> for CatchScoreState {
    fn from(state: ScoreState) -> Self {
        Self {
            max_combo: state.max_combo,
            fruits: state.n300,
            droplets: state.n100,
            tiny_droplets: state.n50,
            tiny_droplet_misses: state.n_katu,
            misses: state.misses,
        }
    }
}

impl From<OsuScoreState> for ScoreState {
    fn from(state: OsuScoreState) -> Self {
        Self {
            max_combo: state.max_combo,
            n_geki: 0,
            n_katu: 0,
            n300: state.n300,
            n100: state.n100,
            n50: state.n50,
            misses: state.misses,
        }
    }
}

impl From<CatchScoreState> for ScoreState {
    fn from(state: CatchScoreState) -> Self {
        Self {
            max_combo: state.max_combo,
            n_geki: 0,
            n_katu: state.tiny_droplet_misses,
            n300: state.fruits,
            n100: state.droplets,
            n50: state.tiny_droplets,
            misses: state.misses,
        }
    }
}
