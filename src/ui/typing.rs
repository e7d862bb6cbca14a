// SPDX-License-Identifier: MPL-2.0
//! Typewriter effect for the hero headline.
//!
//! The animator is a two-phase state machine driven by a timer. Each call to
//! [`TypingAnimator::step`] is one tick: it returns the text to show and how
//! long to wait before the next tick. Nothing here sleeps, so the whole cycle
//! can be stepped through in tests.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Typing,
    Deleting,
}

/// Inspectable position inside the cycle.
///
/// `char_index` never exceeds the length (in chars) of the current text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypingCycleState {
    pub text_index: usize,
    pub char_index: usize,
    pub phase: Phase,
}

/// Output of one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingStep {
    pub visible: String,
    pub delay: Duration,
}

#[derive(Debug, Clone)]
pub struct TypingAnimator {
    texts: Vec<String>,
    speed: Duration,
    pause: Duration,
    state: TypingCycleState,
}

impl TypingAnimator {
    /// Creates an animator starting at the first text, typing.
    ///
    /// Returns `None` for an empty list since there is nothing to cycle.
    #[must_use]
    pub fn new(texts: Vec<String>, speed: Duration, pause: Duration) -> Option<Self> {
        if texts.is_empty() {
            return None;
        }
        Some(Self {
            texts,
            speed,
            pause,
            state: TypingCycleState::default(),
        })
    }

    #[must_use]
    pub fn state(&self) -> TypingCycleState {
        self.state
    }

    #[must_use]
    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    /// Advances the animation by one tick.
    pub fn step(&mut self) -> TypingStep {
        let len = self.current_len();

        match self.state.phase {
            Phase::Typing if len == 0 => {
                // Nothing to type or delete, move on
                self.advance_text();
                TypingStep {
                    visible: String::new(),
                    delay: self.speed,
                }
            }
            Phase::Typing => {
                self.state.char_index = (self.state.char_index + 1).min(len);
                let visible = self.visible_prefix();
                if self.state.char_index == len {
                    self.state.phase = Phase::Deleting;
                    TypingStep {
                        visible,
                        delay: self.pause,
                    }
                } else {
                    TypingStep {
                        visible,
                        delay: self.speed,
                    }
                }
            }
            Phase::Deleting => {
                self.state.char_index = self.state.char_index.saturating_sub(1);
                let visible = self.visible_prefix();
                if self.state.char_index == 0 {
                    self.advance_text();
                    TypingStep {
                        visible,
                        delay: self.speed,
                    }
                } else {
                    TypingStep {
                        visible,
                        delay: self.speed / 2,
                    }
                }
            }
        }
    }

    fn current_len(&self) -> usize {
        self.texts[self.state.text_index].chars().count()
    }

    fn visible_prefix(&self) -> String {
        self.texts[self.state.text_index]
            .chars()
            .take(self.state.char_index)
            .collect()
    }

    fn advance_text(&mut self) {
        self.state.phase = Phase::Typing;
        self.state.char_index = 0;
        self.state.text_index = (self.state.text_index + 1) % self.texts.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEED: Duration = Duration::from_millis(100);
    const PAUSE: Duration = Duration::from_millis(2000);

    fn animator(texts: &[&str]) -> TypingAnimator {
        TypingAnimator::new(texts.iter().map(ToString::to_string).collect(), SPEED, PAUSE)
            .expect("non-empty texts")
    }

    #[test]
    fn empty_list_yields_no_animator() {
        assert!(TypingAnimator::new(Vec::new(), SPEED, PAUSE).is_none());
    }

    #[test]
    fn starts_typing_first_text() {
        let anim = animator(&["A", "BB"]);
        assert_eq!(anim.state(), TypingCycleState::default());
    }

    #[test]
    fn types_one_char_per_tick_then_pauses() {
        let mut anim = animator(&["abc"]);
        assert_eq!(anim.step(), TypingStep { visible: "a".into(), delay: SPEED });
        assert_eq!(anim.step(), TypingStep { visible: "ab".into(), delay: SPEED });
        assert_eq!(anim.step(), TypingStep { visible: "abc".into(), delay: PAUSE });
        assert_eq!(anim.state().phase, Phase::Deleting);
    }

    #[test]
    fn deletes_at_double_speed() {
        let mut anim = animator(&["abc"]);
        for _ in 0..3 {
            anim.step();
        }
        assert_eq!(anim.step(), TypingStep { visible: "ab".into(), delay: SPEED / 2 });
        assert_eq!(anim.step(), TypingStep { visible: "a".into(), delay: SPEED / 2 });
        // Last deletion hands back to typing at normal speed
        assert_eq!(anim.step(), TypingStep { visible: String::new(), delay: SPEED });
    }

    #[test]
    fn full_cycle_advances_to_next_text_and_resets_char_index() {
        let texts = ["one", "two", "three"];
        let mut anim = animator(&texts);

        for i in 0..texts.len() * 2 {
            let start = anim.state().text_index;
            assert_eq!(start, i % texts.len());
            let len = texts[start].chars().count();
            // len typing ticks + len deleting ticks
            for _ in 0..len * 2 {
                anim.step();
            }
            let state = anim.state();
            assert_eq!(state.text_index, (start + 1) % texts.len());
            assert_eq!(state.char_index, 0);
            assert_eq!(state.phase, Phase::Typing);
        }
    }

    #[test]
    fn char_index_never_exceeds_text_length() {
        let mut anim = animator(&["hey", "x", "longer text"]);
        for _ in 0..200 {
            anim.step();
            let state = anim.state();
            let len = anim.texts()[state.text_index].chars().count();
            assert!(state.char_index <= len);
        }
    }

    #[test]
    fn two_texts_sequence_matches_expected_timeline() {
        let mut anim = animator(&["A", "BB"]);
        let steps: Vec<TypingStep> = (0..4).map(|_| anim.step()).collect();
        assert_eq!(
            steps,
            vec![
                TypingStep { visible: "A".into(), delay: PAUSE },
                TypingStep { visible: String::new(), delay: SPEED },
                TypingStep { visible: "B".into(), delay: SPEED },
                TypingStep { visible: "BB".into(), delay: PAUSE },
            ]
        );
    }

    #[test]
    fn counts_unicode_scalars_not_bytes() {
        let mut anim = animator(&["Olá"]);
        assert_eq!(anim.step().visible, "O");
        assert_eq!(anim.step().visible, "Ol");
        let last = anim.step();
        assert_eq!(last.visible, "Olá");
        assert_eq!(last.delay, PAUSE);
    }

    #[test]
    fn empty_text_is_skipped() {
        let mut anim = animator(&["", "Z"]);
        let skipped = anim.step();
        assert_eq!(skipped.visible, "");
        assert_eq!(anim.state().text_index, 1);
        assert_eq!(anim.step().visible, "Z");
    }

    #[test]
    fn single_text_cycles_onto_itself() {
        let mut anim = animator(&["ab"]);
        for _ in 0..4 {
            anim.step();
        }
        assert_eq!(anim.state().text_index, 0);
        assert_eq!(anim.step().visible, "a");
    }
}
