/// Hitresults and max combo of an osu!catch score.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatchScoreState {
    /// Maximum combo that the score has reached. **Not** the maximum
    /// possible combo of the map.
    ///
    /// Note that only fruits and droplets are considered for osu!catch combo.
    pub max_combo: u32,
    /// Amount of fruits (300s).
    pub fruits: u32,
    /// Amount of droplets (100s).
    pub droplets: u32,
    /// Amount of tiny droplets (50s).
    pub tiny_droplets: u32,
    /// Amount of tiny droplet misses (katus).
    pub tiny_droplet_misses: u32,
    /// Amount of misses (fruits and droplets).
    pub misses: u32,
}

impl CatchScoreState {
    /// Create a new empty score state.
    pub const fn new() -> Self {
        Self {
            max_combo: 0,
            fruits: 0,
            droplets: 0,
            tiny_droplets: 0,
            tiny_droplet_misses: 0,
            misses: 0,
        }
    }

    /// Return the total amount of hits by adding everything up.
    ///
    /// Saturates at `u32::MAX`.
    pub const fn total_hits(&self) -> u32 {
        self.total_successful_hits()
            .saturating_add(self.misses)
            .saturating_add(self.tiny_droplet_misses)
    }

    /// Return the amount of caught objects.
    ///
    /// Saturates at `u32::MAX`.
    pub const fn total_successful_hits(&self) -> u32 {
        self.tiny_droplets
            .saturating_add(self.droplets)
            .saturating_add(self.fruits)
    }

    /// Return the amount of objects that contribute to combo.
    ///
    /// Tiny droplets are excluded whereas misses are not.
    pub const fn combo_hits(&self) -> u32 {
        self.fruits
            .saturating_add(self.droplets)
            .saturating_add(self.misses)
    }

    /// Calculate the accuracy between `0.0` and `1.0` for this state.
    pub fn accuracy(&self) -> f32 {
        let successful = u64::from(self.tiny_droplets)
            + u64::from(self.droplets)
            + u64::from(self.fruits);

        let total_hits =
            successful + u64::from(self.misses) + u64::from(self.tiny_droplet_misses);

        if total_hits == 0 {
            return 0.0;
        }

        (successful as f32 / total_hits as f32).clamp(0.0, 1.0)
    }
}
