//! Measurement infrastructure.
//!
//! Every sample is one call of the measured closure, timed with the monotonic
//! `Instant` clock. Calls are never batched.

mod timer;

pub use timer::{black_box, Timed, Timer};
