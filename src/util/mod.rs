//! Shared utilities.

mod frame_timing;

pub use frame_timing::FrameTiming;
