//! Data models for the Dogs gallery application.
//!
//! These models match the frontend interfaces exactly for seamless interoperability.

mod item;

pub use item::*;
