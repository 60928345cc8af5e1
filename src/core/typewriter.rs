//! Typewriter animation state.
//!
//! Reveals a phrase one character at a time, pauses on the full phrase,
//! erases it again and moves on to the next phrase in the cycle. The
//! machine itself has no notion of time: every [`Typewriter::step`] returns
//! the delay the caller should wait before stepping again.

use serde::Deserialize;

use crate::config::typing_delays;

// ============================================================================
// PhraseCycle
// ============================================================================

/// Ordered phrases with a cyclic cursor and the currently visible prefix.
///
/// Lengths are counted in `char`s so multi-byte phrases never split a
/// code point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhraseCycle {
    phrases: Vec<String>,
    index: usize,
    shown: usize,
}

impl PhraseCycle {
    /// Create a cycle positioned at the first phrase with nothing shown.
    ///
    /// Returns `None` when `phrases` is empty.
    pub fn new(phrases: Vec<String>) -> Option<Self> {
        if phrases.is_empty() {
            return None;
        }
        Some(Self {
            phrases,
            index: 0,
            shown: 0,
        })
    }

    /// Raw (ever-increasing) phrase counter.
    #[cfg(test)]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The phrase currently being typed.
    pub fn phrase(&self) -> &str {
        &self.phrases[self.index % self.phrases.len()]
    }

    /// Length of the current phrase in chars.
    pub fn full_len(&self) -> usize {
        self.phrase().chars().count()
    }

    /// Number of chars currently visible.
    #[cfg(test)]
    pub fn shown_len(&self) -> usize {
        self.shown
    }

    /// The visible prefix of the current phrase.
    pub fn visible(&self) -> &str {
        let phrase = self.phrase();
        let end = phrase
            .char_indices()
            .nth(self.shown)
            .map_or(phrase.len(), |(i, _)| i);
        &phrase[..end]
    }

    pub fn is_full(&self) -> bool {
        self.shown == self.full_len()
    }

    pub fn is_empty(&self) -> bool {
        self.shown == 0
    }

    fn grow(&mut self) {
        if self.shown < self.full_len() {
            self.shown += 1;
        }
    }

    fn shrink(&mut self) {
        self.shown = self.shown.saturating_sub(1);
    }

    fn advance(&mut self) {
        self.index = self.index.wrapping_add(1);
        self.shown = 0;
    }
}

// ============================================================================
// Typing mode and delays
// ============================================================================

/// Position of the typewriter within one phrase cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TypingMode {
    /// Appending characters.
    #[default]
    Growing,
    /// Full phrase on screen, waiting before erasing.
    Idle,
    /// Removing characters.
    Shrinking,
}

/// Delays (milliseconds) returned by each kind of step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TypingDelays {
    /// After a character was appended.
    pub grow_ms: u32,
    /// After the phrase became complete.
    pub idle_ms: u32,
    /// After a character was removed, or after leaving idle.
    pub shrink_ms: u32,
    /// After the phrase was fully erased.
    pub next_phrase_ms: u32,
}

impl Default for TypingDelays {
    fn default() -> Self {
        Self {
            grow_ms: typing_delays::GROW,
            idle_ms: typing_delays::IDLE,
            shrink_ms: typing_delays::SHRINK,
            next_phrase_ms: typing_delays::NEXT_PHRASE,
        }
    }
}

// ============================================================================
// Typewriter
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    cycle: PhraseCycle,
    mode: TypingMode,
    delays: TypingDelays,
}

impl Typewriter {
    pub fn new(cycle: PhraseCycle, delays: TypingDelays) -> Self {
        Self {
            cycle,
            mode: TypingMode::Growing,
            delays,
        }
    }

    pub fn mode(&self) -> TypingMode {
        self.mode
    }

    #[cfg(test)]
    pub fn cycle(&self) -> &PhraseCycle {
        &self.cycle
    }

    /// Text currently on screen (without the cursor).
    pub fn text(&self) -> &str {
        self.cycle.visible()
    }

    /// Advance the animation by one step.
    ///
    /// Returns the delay in milliseconds before the next step.
    pub fn step(&mut self) -> u32 {
        match self.mode {
            TypingMode::Growing => {
                self.cycle.grow();
                if self.cycle.is_full() {
                    self.mode = TypingMode::Idle;
                    self.delays.idle_ms
                } else {
                    self.delays.grow_ms
                }
            }
            TypingMode::Idle => {
                self.mode = TypingMode::Shrinking;
                self.delays.shrink_ms
            }
            TypingMode::Shrinking => {
                self.cycle.shrink();
                if self.cycle.is_empty() {
                    self.cycle.advance();
                    self.mode = TypingMode::Growing;
                    self.delays.next_phrase_ms
                } else {
                    self.delays.shrink_ms
                }
            }
        }
    }
}
