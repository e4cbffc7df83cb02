pub mod fill_flow;

pub use fill_flow::{FillFlow, FillOutcome};
