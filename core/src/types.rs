//! Shared primitive types used across the entire simulation.

/// An amount of gold. Treasuries can never go below zero.
pub type Gold = u64;

/// A soldier's experience counter within the current rank.
pub type Experience = u32;

/// A soldier's position in a commander's roster.
pub type RosterPosition = usize;
