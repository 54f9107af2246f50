/// Beatmap and difficulty attribute related types.
pub mod beatmap;

/// Gamemode related types.
pub mod mode;

/// Gamemods related types.
pub mod mods;
