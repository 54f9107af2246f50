use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::model::mods::GameMods;

/// The kinds of numbers an [`AttributeSource`] can provide.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    /// Aim difficulty rating.
    Aim,
    /// Speed difficulty rating.
    Speed,
    /// Approach rate after applying mods.
    Ar,
    /// Overall difficulty after applying mods.
    Od,
    /// Maximum combo of the map.
    MaxCombo,
    /// Amount of direction changes, osu!catch only.
    DirectionChangeCount,
    /// Amount of spinners.
    SpinnerCount,
    /// Amount of hit circles.
    HitCircleCount,
    /// Scoring format of the map's leaderboard, see [`ScoreVersion`].
    ScoreVersion,
}

impl Display for AttributeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::Aim => "aim",
            Self::Speed => "speed",
            Self::Ar => "ar",
            Self::Od => "od",
            Self::MaxCombo => "max combo",
            Self::DirectionChangeCount => "direction change count",
            Self::SpinnerCount => "spinner count",
            Self::HitCircleCount => "hit circle count",
            Self::ScoreVersion => "score version",
        };

        f.write_str(name)
    }
}

/// The scoring format which decides how accuracy is weighted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScoreVersion {
    /// Accuracy only considers hit circles.
    #[default]
    V1,
    /// Accuracy considers all objects.
    V2,
}

impl ScoreVersion {
    /// Interpret the numeric tag of an [`AttributeSource`].
    ///
    /// Anything other than exactly `2.0` falls back to [`ScoreVersion::V1`].
    #[allow(clippy::float_cmp)]
    pub fn from_attribute(value: f32) -> Self {
        if value == 2.0 {
            Self::V2
        } else {
            Self::V1
        }
    }

    /// The numeric tag as provided through an [`AttributeSource`].
    pub const fn as_attribute(self) -> f32 {
        match self {
            Self::V1 => 1.0,
            Self::V2 => 2.0,
        }
    }
}

/// Provider of difficulty numbers for a map.
///
/// Implementations must be deterministic, i.e. the same mods and kind must
/// always return the exact same value.
pub trait AttributeSource {
    /// The value of the given kind for the given mods.
    fn attribute(&self, mods: GameMods, kind: AttributeKind) -> f32;

    /// Query all attributes for the given mods at once.
    fn difficulty_attributes(&self, mods: GameMods) -> DifficultyAttributes {
        DifficultyAttributes::from_source(self, mods)
    }
}

impl<T: AttributeSource + ?Sized> AttributeSource for &T {
    fn attribute(&self, mods: GameMods, kind: AttributeKind) -> f32 {
        (**self).attribute(mods, kind)
    }
}

/// The difficulty attributes of a map for one mod combination.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DifficultyAttributes {
    /// The aim rating.
    pub aim: f32,
    /// The speed rating.
    pub speed: f32,
    /// The approach rate.
    pub ar: f32,
    /// The overall difficulty.
    pub od: f32,
    /// The maximum combo.
    pub max_combo: f32,
    /// The amount of direction changes. Only used for osu!catch.
    pub direction_change_count: f32,
    /// The amount of spinners.
    pub n_spinners: u32,
    /// The amount of hit circles.
    pub n_circles: u32,
    /// The scoring format.
    pub score_version: ScoreVersion,
}

impl DifficultyAttributes {
    /// Collect all attributes of a source for the given mods.
    pub fn from_source<S: AttributeSource + ?Sized>(source: &S, mods: GameMods) -> Self {
        Self {
            aim: source.attribute(mods, AttributeKind::Aim),
            speed: source.attribute(mods, AttributeKind::Speed),
            ar: source.attribute(mods, AttributeKind::Ar),
            od: source.attribute(mods, AttributeKind::Od),
            max_combo: source.attribute(mods, AttributeKind::MaxCombo),
            direction_change_count: source.attribute(mods, AttributeKind::DirectionChangeCount),
            n_spinners: source.attribute(mods, AttributeKind::SpinnerCount) as u32,
            n_circles: source.attribute(mods, AttributeKind::HitCircleCount) as u32,
            score_version: ScoreVersion::from_attribute(
                source.attribute(mods, AttributeKind::ScoreVersion),
            ),
        }
    }
}

impl AttributeSource for DifficultyAttributes {
    fn attribute(&self, _: GameMods, kind: AttributeKind) -> f32 {
        match kind {
            AttributeKind::Aim => self.aim,
            AttributeKind::Speed => self.speed,
            AttributeKind::Ar => self.ar,
            AttributeKind::Od => self.od,
            AttributeKind::MaxCombo => self.max_combo,
            AttributeKind::DirectionChangeCount => self.direction_change_count,
            AttributeKind::SpinnerCount => self.n_spinners as f32,
            AttributeKind::HitCircleCount => self.n_circles as f32,
            AttributeKind::ScoreVersion => self.score_version.as_attribute(),
        }
    }

    fn difficulty_attributes(&self, _: GameMods) -> DifficultyAttributes {
        self.clone()
    }
}
