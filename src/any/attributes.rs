use crate::{
    catch::CatchPerformanceAttributes, model::beatmap::DifficultyAttributes,
    osu::OsuPerformanceAttributes,
};

/// The result of a performance calculation based on the mode.
#[derive(Clone, Debug, PartialEq)]
pub enum PerformanceAttributes {
    /// osu!standard performance calculation result.
    Osu(OsuPerformanceAttributes),
    /// osu!catch performance calculation result.
    Catch(CatchPerformanceAttributes),
}

impl PerformanceAttributes {
    /// The pp value.
    pub const fn pp(&self) -> f32 {
        match self {
            Self::Osu(attrs) => attrs.pp,
            Self::Catch(attrs) => attrs.pp,
        }
    }

    /// The difficulty attributes that were used for the calculation.
    pub const fn difficulty(&self) -> &DifficultyAttributes {
        match self {
            Self::Osu(attrs) => &attrs.difficulty,
            Self::Catch(attrs) => &attrs.difficulty,
        }
    }
}

impl From<OsuPerformanceAttributes> for PerformanceAttributes {
    fn from(attributes: OsuPerformanceAttributes) -> Self {
        Self::Osu(attributes)
    }
}

impl From<CatchPerformanceAttributes> for PerformanceAttributes {
    fn from(attributes: CatchPerformanceAttributes) -> Self {
        Self::Catch(attributes)
    }
}

impl From<PerformanceAttributes> for DifficultyAttributes {
    fn from(attributes: PerformanceAttributes) -> Self {
        match attributes {
            PerformanceAttributes::Osu(attrs) => attrs.difficulty,
            PerformanceAttributes::Catch(attrs) => attrs.difficulty,
        }
    }
}
