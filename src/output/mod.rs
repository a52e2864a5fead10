//! Rendering of experiment results: console text, PNG chart and JSON.

pub mod chart;
pub mod json;
pub mod terminal;
