use crate::model::beatmap::DifficultyAttributes;

/// The result of a performance calculation on an osu!catch map.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatchPerformanceAttributes {
    /// The difficulty attributes that were used for the performance calculation.
    pub difficulty: DifficultyAttributes,
    /// The final performance points.
    pub pp: f32,
}

impl CatchPerformanceAttributes {
    /// Return the performance point value.
    pub const fn pp(&self) -> f32 {
        self.pp
    }

    /// Return the maximum combo of the map.
    pub fn max_combo(&self) -> f32 {
        self.difficulty.max_combo
    }
}

impl From<CatchPerformanceAttributes> for DifficultyAttributes {
    fn from(attributes: CatchPerformanceAttributes) -> Self {
        attributes.difficulty
    }
}
