use std::fmt::{Debug, Formatter, Result as FmtResult};

use rosu_mods::GameModsLegacy;

/// Collection of game mods.
///
/// Only legacy mods are supported, i.e. the bit values of
/// <https://github.com/ppy/osu-api/wiki#mods>. This type can be created
/// through its `From<T>` implementations where `T` can be
/// - `u32`
/// - [`rosu_mods::GameModsLegacy`]
///
/// # Example
///
/// ```
/// use legacy_pp::GameMods;
/// use rosu_mods::GameModsLegacy;
///
/// let int = GameMods::from(64 + 8);
/// let legacy = GameMods::from(GameModsLegacy::Hidden | GameModsLegacy::DoubleTime);
///
/// assert_eq!(int, legacy);
/// ```
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "u32", into = "u32")
)]
pub struct GameMods {
    bits: u32,
}

impl Debug for GameMods {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(&self.legacy(), f)
    }
}

impl GameMods {
    /// No mods.
    pub const NOMOD: Self = Self { bits: 0 };

    /// Mods that have an effect on difficulty attributes.
    ///
    /// EZ, HR, DT, HT, and FL. Nightcore is covered through its implied
    /// `DoubleTime` bit. TouchDevice only adjusts the aim rating during the
    /// performance calculation so it does not pick its own entry.
    const DIFFICULTY_MASK: u32 = (1 << 1) | (1 << 4) | (1 << 6) | (1 << 8) | (1 << 10);

    /// Create mods from their bit values.
    pub const fn from_bits(bits: u32) -> Self {
        Self { bits }
    }

    /// The bit values of the mods.
    pub const fn bits(self) -> u32 {
        self.bits
    }

    fn legacy(self) -> GameModsLegacy {
        GameModsLegacy::from_bits(self.bits)
    }

    /// Only keep the mods that alter a map's difficulty attributes.
    pub const fn difficulty_mods(self) -> Self {
        Self {
            bits: self.bits & Self::DIFFICULTY_MASK,
        }
    }

    /// Whether the mods make a score ineligible for pp.
    pub(crate) fn unranked(self) -> bool {
        self.rx() || self.ap() || self.at()
    }
}

macro_rules! impl_has_mod {
    ( $( $fn:ident: $name:ident [ $s:literal ], )* ) => {
        impl GameMods {
            $(
                #[doc = "Check whether [`GameMods`] contain `"]
                #[doc = $s]
                #[doc = "`."]
                pub fn $fn(self) -> bool {
                    self.legacy().contains(GameModsLegacy::$name)
                }
            )*
        }
    };
}

impl_has_mod! {
    nf: NoFail ["NoFail"],
    ez: Easy ["Easy"],
    td: TouchDevice ["TouchDevice"],
    hd: Hidden ["Hidden"],
    hr: HardRock ["HardRock"],
    dt: DoubleTime ["DoubleTime"],
    rx: Relax ["Relax"],
    ht: HalfTime ["HalfTime"],
    fl: Flashlight ["Flashlight"],
    at: Autoplay ["Autoplay"],
    so: SpunOut ["SpunOut"],
    ap: Autopilot ["Autopilot"],
}

impl From<GameModsLegacy> for GameMods {
    fn from(mods: GameModsLegacy) -> Self {
        Self { bits: mods.bits() }
    }
}

impl From<u32> for GameMods {
    fn from(bits: u32) -> Self {
        Self { bits }
    }
}

impl From<GameMods> for u32 {
    fn from(mods: GameMods) -> Self {
        mods.bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_values() {
        let mods = GameMods::from(1 + 8 + 1024);

        assert!(mods.nf());
        assert!(mods.hd());
        assert!(mods.fl());
        assert!(!mods.hr());
        assert!(!mods.unranked());
    }

    #[test]
    fn unranked_mods() {
        assert!(GameMods::from(GameModsLegacy::Relax).unranked());
        assert!(GameMods::from(GameModsLegacy::Autopilot).unranked());
        assert!(GameMods::from(GameModsLegacy::Autoplay).unranked());
    }

    #[test]
    fn difficulty_mods_drop_cosmetic_bits() {
        let mods = GameMods::from(GameModsLegacy::Hidden | GameModsLegacy::HardRock);

        assert_eq!(
            mods.difficulty_mods(),
            GameMods::from(GameModsLegacy::HardRock)
        );

        let nightcore = GameMods::from(GameModsLegacy::Nightcore | GameModsLegacy::DoubleTime);

        assert_eq!(
            nightcore.difficulty_mods(),
            GameMods::from(GameModsLegacy::DoubleTime)
        );
    }

    #[test]
    fn touch_device_is_not_a_difficulty_mod() {
        let mods = GameMods::from(GameModsLegacy::TouchDevice | GameModsLegacy::HardRock);

        assert!(mods.td());
        assert_eq!(
            mods.difficulty_mods(),
            GameMods::from(GameModsLegacy::HardRock)
        );
    }
}
