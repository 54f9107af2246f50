use crate::model::beatmap::DifficultyAttributes;

/// The result of a performance calculation on an osu!standard map.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OsuPerformanceAttributes {
    /// The difficulty attributes that were used for the performance calculation.
    pub difficulty: DifficultyAttributes,
    /// The accuracy portion of the final pp.
    pub pp_acc: f32,
    /// The aim portion of the final pp.
    pub pp_aim: f32,
    /// The speed portion of the final pp.
    pub pp_speed: f32,
    /// The final performance points.
    pub pp: f32,
}

impl OsuPerformanceAttributes {
    /// Return the performance point value.
    pub const fn pp(&self) -> f32 {
        self.pp
    }

    /// Return the maximum combo of the map.
    pub fn max_combo(&self) -> f32 {
        self.difficulty.max_combo
    }
}

impl From<OsuPerformanceAttributes> for DifficultyAttributes {
    fn from(attributes: OsuPerformanceAttributes) -> Self {
        attributes.difficulty
    }
}
