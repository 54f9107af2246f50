use std::collections::HashMap;

pub use self::attributes::{AttributeKind, AttributeSource, DifficultyAttributes, ScoreVersion};

use super::mods::GameMods;

mod attributes;

/// Difficulty numbers of a map for one mod combination.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DifficultyEntry {
    /// The aim rating.
    pub aim: f32,
    /// The speed rating.
    pub speed: f32,
    /// The approach rate after applying mods.
    pub ar: f32,
    /// The overall difficulty after applying mods.
    pub od: f32,
    /// The maximum combo.
    pub max_combo: f32,
    /// The amount of direction changes. Only used for osu!catch.
    pub direction_change_count: f32,
}

/// Precomputed difficulty data of a map.
///
/// Object counts and the score version are shared by all mod combinations
/// while everything else is stored per combination of difficulty-relevant
/// mods, see [`GameMods::difficulty_mods`].
///
/// # Example
///
/// ```
/// use legacy_pp::{AttributeKind, AttributeSource, Beatmap, DifficultyEntry, GameMods};
///
/// let map = Beatmap::new(75)
///     .n_circles(160)
///     .n_spinners(1)
///     .entry(0, DifficultyEntry { aim: 2.3, ar: 9.0, ..Default::default() })
///     .entry(16, DifficultyEntry { aim: 2.6, ar: 10.0, ..Default::default() });
///
/// // Hidden does not alter difficulty so HDHR resolves to the HR entry
/// let hdhr = GameMods::from(8 + 16);
///
/// assert_eq!(map.attribute(hdhr, AttributeKind::Aim), 2.6);
/// assert_eq!(map.attribute(hdhr, AttributeKind::HitCircleCount), 160.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Beatmap {
    /// The beatmap id.
    pub id: i32,
    /// The scoring format of the map's leaderboard.
    pub score_version: ScoreVersion,
    /// The amount of hit circles.
    pub n_circles: u32,
    /// The amount of spinners.
    pub n_spinners: u32,
    /// Difficulty numbers keyed by the bits of difficulty-relevant mods.
    pub difficulty: HashMap<u32, DifficultyEntry>,
}

impl Beatmap {
    /// Create a new map without any difficulty entries.
    pub fn new(id: i32) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Specify the scoring format of the map's leaderboard.
    pub const fn score_version(mut self, score_version: ScoreVersion) -> Self {
        self.score_version = score_version;

        self
    }

    /// Specify the amount of hit circles.
    pub const fn n_circles(mut self, n_circles: u32) -> Self {
        self.n_circles = n_circles;

        self
    }

    /// Specify the amount of spinners.
    pub const fn n_spinners(mut self, n_spinners: u32) -> Self {
        self.n_spinners = n_spinners;

        self
    }

    /// Add the difficulty numbers for the given mods.
    pub fn entry(mut self, mods: impl Into<GameMods>, entry: DifficultyEntry) -> Self {
        self.insert(mods, entry);

        self
    }

    /// Insert the difficulty numbers for the given mods, returning the
    /// previous entry of the same difficulty-relevant mods.
    pub fn insert(
        &mut self,
        mods: impl Into<GameMods>,
        entry: DifficultyEntry,
    ) -> Option<DifficultyEntry> {
        let key = mods.into().difficulty_mods().bits();

        self.difficulty.insert(key, entry)
    }

    /// The difficulty numbers for the given mods, if available.
    pub fn get(&self, mods: GameMods) -> Option<&DifficultyEntry> {
        self.difficulty.get(&mods.difficulty_mods().bits())
    }
}

impl AttributeSource for Beatmap {
    fn attribute(&self, mods: GameMods, kind: AttributeKind) -> f32 {
        match kind {
            AttributeKind::SpinnerCount => return self.n_spinners as f32,
            AttributeKind::HitCircleCount => return self.n_circles as f32,
            AttributeKind::ScoreVersion => return self.score_version.as_attribute(),
            _ => {}
        }

        let Some(entry) = self.get(mods) else {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                map_id = self.id,
                mods = mods.difficulty_mods().bits(),
                %kind,
                "missing difficulty entry, defaulting to zero"
            );

            return 0.0;
        };

        match kind {
            AttributeKind::Aim => entry.aim,
            AttributeKind::Speed => entry.speed,
            AttributeKind::Ar => entry.ar,
            AttributeKind::Od => entry.od,
            AttributeKind::MaxCombo => entry.max_combo,
            AttributeKind::DirectionChangeCount => entry.direction_change_count,
            AttributeKind::SpinnerCount
            | AttributeKind::HitCircleCount
            | AttributeKind::ScoreVersion => unreachable!(),
        }
    }
}
