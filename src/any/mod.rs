pub use self::{
    attributes::PerformanceAttributes,
    score::{AnyScore, Score, ScoreError},
    score_state::{ScoreInfo, ScoreState},
};

mod attributes;
mod score;
mod score_state;
