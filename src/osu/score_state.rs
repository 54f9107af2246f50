/// Hitresults and max combo of an osu!standard score.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OsuScoreState {
    /// Maximum combo that the score has reached. **Not** the maximum
    /// possible combo of the map.
    pub max_combo: u32,
    /// Amount of 300s.
    pub n300: u32,
    /// Amount of 100s.
    pub n100: u32,
    /// Amount of 50s.
    pub n50: u32,
    /// Amount of misses.
    pub misses: u32,
}

impl OsuScoreState {
    /// Create a new empty score state.
    pub const fn new() -> Self {
        Self {
            max_combo: 0,
            n300: 0,
            n100: 0,
            n50: 0,
            misses: 0,
        }
    }

    /// Return the total amount of hits by adding everything up.
    ///
    /// Saturates at `u32::MAX`.
    pub const fn total_hits(&self) -> u32 {
        self.total_successful_hits().saturating_add(self.misses)
    }

    /// Return the amount of hits that were not a miss.
    ///
    /// Saturates at `u32::MAX`.
    pub const fn total_successful_hits(&self) -> u32 {
        self.n50.saturating_add(self.n100).saturating_add(self.n300)
    }

    /// Calculate the accuracy between `0.0` and `1.0` for this state.
    pub fn accuracy(&self) -> f32 {
        let n300 = u64::from(self.n300);
        let n100 = u64::from(self.n100);
        let n50 = u64::from(self.n50);
        let total_hits = n300 + n100 + n50 + u64::from(self.misses);

        if total_hits == 0 {
            return 0.0;
        }

        let numerator = n50 * 50 + n100 * 100 + n300 * 300;

        (numerator as f32 / (total_hits * 300) as f32).clamp(0.0, 1.0)
    }
}
