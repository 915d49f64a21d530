//! Intro greeting sequencer (stateful).
//!
//! A closed, time-driven automaton: greetings show one at a time for a fixed
//! dwell, then a short exit transition runs, then the sequencer reports
//! completion exactly once. No input can skip ahead or reorder the list.

use techweeb_core::Greeting;

/// How long each greeting stays on screen.
pub const GREETING_DWELL_MS: u64 = 600;

/// Pause between the last greeting and the completion signal.
pub const EXIT_TRANSITION_MS: u64 = 300;

/// Current position in the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerState {
    /// Greeting at this index is on screen.
    Showing(usize),
    /// All greetings shown; exit transition running.
    Exiting,
    /// Sequence complete.
    Finished,
}

/// Emitted by [`GreetingSequencer::advance`] when the state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerEvent {
    /// Moved on to the greeting at this index.
    Advanced(usize),
    /// The whole sequence is done. Emitted exactly once.
    Finished,
}

/// Steps through a fixed greeting list on a timer.
#[derive(Debug)]
pub struct GreetingSequencer {
    greetings: &'static [Greeting],
    dwell_ms: u64,
    exit_ms: u64,
    state: SequencerState,
    elapsed_in_state: u64,
    completion_sent: bool,
}

impl GreetingSequencer {
    /// Create a sequencer with the default dwell and exit durations.
    pub fn new(greetings: &'static [Greeting]) -> Self {
        Self::with_durations(greetings, GREETING_DWELL_MS, EXIT_TRANSITION_MS)
    }

    /// Create a sequencer with explicit durations.
    pub fn with_durations(greetings: &'static [Greeting], dwell_ms: u64, exit_ms: u64) -> Self {
        let state = if greetings.is_empty() {
            SequencerState::Exiting
        } else {
            SequencerState::Showing(0)
        };
        Self {
            greetings,
            dwell_ms,
            exit_ms,
            state,
            elapsed_in_state: 0,
            completion_sent: false,
        }
    }

    /// Advance the automaton by `delta_ms`. A delta spanning several
    /// transitions steps through all of them; the last event is returned.
    pub fn advance(&mut self, delta_ms: u64) -> Option<SequencerEvent> {
        self.elapsed_in_state = self.elapsed_in_state.saturating_add(delta_ms);
        let mut event = None;

        loop {
            match self.state {
                SequencerState::Showing(index) if self.elapsed_in_state >= self.dwell_ms => {
                    self.elapsed_in_state -= self.dwell_ms;
                    if index + 1 < self.greetings.len() {
                        self.state = SequencerState::Showing(index + 1);
                        event = Some(SequencerEvent::Advanced(index + 1));
                    } else {
                        self.state = SequencerState::Exiting;
                    }
                }
                SequencerState::Exiting if self.elapsed_in_state >= self.exit_ms => {
                    self.state = SequencerState::Finished;
                    self.elapsed_in_state = 0;
                    if !self.completion_sent {
                        self.completion_sent = true;
                        event = Some(SequencerEvent::Finished);
                    }
                }
                _ => break,
            }
        }

        event
    }

    /// Greeting currently on screen, if any.
    pub fn current(&self) -> Option<&Greeting> {
        match self.state {
            SequencerState::Showing(index) => self.greetings.get(index),
            _ => None,
        }
    }

    /// Current automaton state.
    pub fn state(&self) -> SequencerState {
        self.state
    }

    /// Fraction of the current state's duration that has elapsed, for
    /// transition fades. Always `1.0` once finished.
    pub fn progress(&self) -> f32 {
        let total = match self.state {
            SequencerState::Showing(_) => self.dwell_ms,
            SequencerState::Exiting => self.exit_ms,
            SequencerState::Finished => return 1.0,
        };
        if total == 0 {
            1.0
        } else {
            (self.elapsed_in_state as f32 / total as f32).min(1.0)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state == SequencerState::Finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREETINGS: &[Greeting] = &[
        Greeting {
            text: "Hello",
            lang: "en",
        },
        Greeting {
            text: "Bonjour",
            lang: "fr",
        },
        Greeting {
            text: "おい",
            lang: "ja",
        },
        Greeting {
            text: "Xin Chào",
            lang: "vi",
        },
        Greeting {
            text: "Guten tag",
            lang: "de",
        },
    ];

    #[test]
    fn test_transitions_in_order_and_single_completion() {
        let mut sequencer = GreetingSequencer::with_durations(GREETINGS, 600, 300);
        let mut events = Vec::new();

        // 5 * 600ms dwell + 300ms exit = 3300ms; tick well past that.
        for _ in 0..40 {
            if let Some(event) = sequencer.advance(100) {
                events.push(event);
            }
        }

        assert_eq!(
            events,
            vec![
                SequencerEvent::Advanced(1),
                SequencerEvent::Advanced(2),
                SequencerEvent::Advanced(3),
                SequencerEvent::Advanced(4),
                SequencerEvent::Finished,
            ]
        );
        assert!(sequencer.is_finished());

        // Ticking after completion never re-fires the terminal event.
        for _ in 0..10 {
            assert_eq!(sequencer.advance(1000), None);
        }
    }

    #[test]
    fn test_current_greeting_tracks_state() {
        let mut sequencer = GreetingSequencer::with_durations(GREETINGS, 600, 300);
        assert_eq!(sequencer.current().map(|g| g.text), Some("Hello"));

        sequencer.advance(600);
        assert_eq!(sequencer.current().map(|g| g.text), Some("Bonjour"));

        // Through the remaining dwells into the exit transition.
        sequencer.advance(600 * 4);
        assert_eq!(sequencer.state(), SequencerState::Exiting);
        assert_eq!(sequencer.current(), None);

        sequencer.advance(300);
        assert!(sequencer.is_finished());
        assert_eq!(sequencer.current(), None);
    }

    #[test]
    fn test_large_delta_steps_through_everything() {
        let mut sequencer = GreetingSequencer::with_durations(GREETINGS, 600, 300);
        let event = sequencer.advance(60_000);
        assert_eq!(event, Some(SequencerEvent::Finished));
        assert!(sequencer.is_finished());
    }

    #[test]
    fn test_exact_boundary_advances() {
        let mut sequencer = GreetingSequencer::with_durations(GREETINGS, 600, 300);
        assert_eq!(sequencer.advance(599), None);
        assert_eq!(sequencer.advance(1), Some(SequencerEvent::Advanced(1)));
    }

    #[test]
    fn test_empty_list_finishes_after_exit() {
        let mut sequencer = GreetingSequencer::with_durations(&[], 600, 300);
        assert_eq!(sequencer.current(), None);
        assert_eq!(sequencer.advance(300), Some(SequencerEvent::Finished));
    }

    #[test]
    fn test_progress_fraction() {
        let mut sequencer = GreetingSequencer::with_durations(GREETINGS, 600, 300);
        assert_eq!(sequencer.progress(), 0.0);
        sequencer.advance(300);
        assert!((sequencer.progress() - 0.5).abs() < 1e-6);
    }
}
