//! Core logic of the profile page.
//!
//! This module provides:
//! - [`Typewriter`] and [`PhraseCycle`] for the home section animation
//! - [`ProfileState`] combining typing with section switching
//! - [`error`] types shared across the crate

pub mod error;
mod profile;
mod typewriter;

pub use profile::{ProfileState, Schedule, TimerKind};
pub use typewriter::{PhraseCycle, TypingDelays, TypingMode, Typewriter};
