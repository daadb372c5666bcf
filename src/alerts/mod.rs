//! Threshold alerting

pub mod evaluator;

pub use evaluator::evaluate;
