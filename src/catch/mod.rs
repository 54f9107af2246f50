pub use self::{
    attributes::CatchPerformanceAttributes,
    performance::{calculate, CatchScore},
    score_state::CatchScoreState,
};

mod attributes;
mod performance;
mod score_state;
