//! Profile page state machine.
//!
//! Combines the [`Typewriter`] with section switching. All operations are
//! synchronous and return the timer the caller has to arm next (if any),
//! so the browser layer only owns timer handles and never decides anything.

use crate::config::SECTION_TRANSITION_MS;
use crate::core::typewriter::{TypingMode, Typewriter};
use crate::models::Section;

/// Which timer slot a [`Schedule`] targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKind {
    /// Next typewriter step; calls [`ProfileState::tick`].
    Typing,
    /// Pending section swap; calls [`ProfileState::finish_transition`].
    Transition,
}

/// A request to call back into the state machine after a delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Schedule {
    pub kind: TimerKind,
    pub delay_ms: u32,
}

impl Schedule {
    fn typing(delay_ms: u32) -> Self {
        Self {
            kind: TimerKind::Typing,
            delay_ms,
        }
    }

    fn transition(delay_ms: u32) -> Self {
        Self {
            kind: TimerKind::Transition,
            delay_ms,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileState {
    typewriter: Typewriter,
    active: Section,
    pending: Option<Section>,
    typing_started: bool,
    typing_pending: bool,
    transition_ms: u32,
}

impl ProfileState {
    pub fn new(typewriter: Typewriter) -> Self {
        Self {
            typewriter,
            active: Section::Home,
            pending: None,
            typing_started: false,
            typing_pending: false,
            transition_ms: SECTION_TRANSITION_MS,
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// True while the content area is hidden for a section swap.
    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    pub fn typed_text(&self) -> &str {
        self.typewriter.text()
    }

    pub fn typing_mode(&self) -> TypingMode {
        self.typewriter.mode()
    }

    /// Start the typing loop. Only the first call has any effect.
    pub fn start_typing(&mut self) -> Option<Schedule> {
        if self.typing_started {
            return None;
        }
        self.typing_started = true;
        self.tick()
    }

    /// Run one typewriter step.
    ///
    /// Inert outside of [`Section::Home`]: nothing changes and no further
    /// step is scheduled, which ends the loop until home is shown again.
    pub fn tick(&mut self) -> Option<Schedule> {
        self.typing_pending = false;
        if self.active != Section::Home {
            return None;
        }
        let delay = self.typewriter.step();
        self.typing_pending = true;
        Some(Schedule::typing(delay))
    }

    /// Request a switch to `target`.
    ///
    /// No-op when `target` is already active. A newer request replaces a
    /// pending one since both share the same transition timer.
    pub fn change_section(&mut self, target: Section) -> Option<Schedule> {
        if target == self.active {
            return None;
        }
        self.pending = Some(target);
        Some(Schedule::transition(self.transition_ms))
    }

    /// Swap in the pending section once the transition delay elapsed.
    ///
    /// Resumes typing when returning home, unless a typing step is still
    /// pending (it will carry on by itself).
    pub fn finish_transition(&mut self) -> Option<Schedule> {
        let target = self.pending.take()?;
        self.active = target;
        if target == Section::Home && self.typing_started && !self.typing_pending {
            return self.tick();
        }
        None
    }
}
