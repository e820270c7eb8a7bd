pub mod engine;
pub mod scale;
pub mod weights;

pub use engine::{score_coordinate, CompositeResult, FactorResult};
pub use weights::{validate_weights, Weights};
