mod tracker;

pub use tracker::{IntegerTracker, Operand, TrackedInteger, TrackedRange};
