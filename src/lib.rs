//! Library to calculate legacy performance points of osu!standard and
//! osu!catch scores.
//!
//! ## Description
//!
//! Performance points (pp) rank scores across maps of differing difficulty.
//! The calculation takes a score's hitresults and mods together with the
//! map's precomputed difficulty attributes and produces a single value.
//!
//! Results are meant to be compared against other implementations bit by
//! bit. Hence, all arithmetic is done in `f32` and every formula keeps the
//! exact order of operations.
//!
//! Calculating difficulty attributes from a `.osu` file is **not** part of
//! this library; provide them through an [`AttributeSource`] such as
//! [`Beatmap`] or plain [`DifficultyAttributes`].
//!
//! ## Usage
//!
//! ```
//! use legacy_pp::{
//!     AnyScore, Beatmap, DifficultyEntry, GameMode, Score, ScoreInfo, ScoreState, ScoreVersion,
//! };
//!
//! let map = Beatmap::new(2785319)
//!     .score_version(ScoreVersion::V1)
//!     .n_circles(450)
//!     .n_spinners(1)
//!     .entry(
//!         8 + 16, // only HR is relevant for HDHR
//!         DifficultyEntry {
//!             aim: 3.3,
//!             speed: 2.9,
//!             ar: 10.0,
//!             od: 9.8,
//!             max_combo: 909.0,
//!             direction_change_count: 0.0,
//!         },
//!     );
//!
//! let info = ScoreInfo {
//!     score_id: 1,
//!     mode: GameMode::Osu,
//!     user_id: 2,
//!     beatmap_id: map.id,
//!     score: 12_345_678,
//! };
//!
//! let state = ScoreState {
//!     max_combo: 880,
//!     n300: 580,
//!     n100: 20,
//!     n50: 1,
//!     misses: 1,
//!     ..Default::default()
//! };
//!
//! let score = AnyScore::new(info, state, 8 + 16, &map).unwrap();
//!
//! println!("PP: {} | Acc: {}", score.total_value(), score.accuracy());
//! ```
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | No features |
//! | `serde` | Implement `Serialize` and `Deserialize` for input types such as [`Beatmap`], [`ScoreState`], and [`GameMods`]. | [`serde`]
//! | `tracing` | Lookups of missing difficulty entries and unsupported modes are logged through `tracing`. If this feature is not enabled, nothing is logged. | [`tracing`]
//!
//! [`serde`]: https://docs.rs/serde
//! [`tracing`]: https://docs.rs/tracing

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::unreadable_literal
)]

#[doc(inline)]
pub use self::{
    any::{AnyScore, PerformanceAttributes, Score, ScoreError, ScoreInfo, ScoreState},
    model::{
        beatmap::{
            AttributeKind, AttributeSource, Beatmap, DifficultyAttributes, DifficultyEntry,
            ScoreVersion,
        },
        mode::{GameMode, ParseGameModeError},
        mods::GameMods,
    },
};

/// Types for scores of any mode.
pub mod any;

/// Types for osu!standard calculations.
pub mod osu;

/// Types for osu!catch calculations.
pub mod catch;

/// Types used in and around this crate.
pub mod model;
