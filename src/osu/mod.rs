pub use self::{
    attributes::OsuPerformanceAttributes,
    performance::{calculate, OsuScore, PERFORMANCE_BASE_MULTIPLIER},
    score_state::OsuScoreState,
};

mod attributes;
mod performance;
mod score_state;

