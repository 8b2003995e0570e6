//! Headline typing effect.
//!
//! The animator types a role title one character at a time, holds it, erases
//! it, waits, and moves on to the next title, forever. All progress is driven
//! by [`TypingState::advance`], a pure function of the previous state and the
//! elapsed time, so the loop runs the same under a browser interval and under
//! a virtual clock in tests.

use std::time::Duration;

use crate::config::TypingTimings;
use crate::error::ConfigError;

/// Non-empty, immutable, cyclic list of role titles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleSequence {
    roles: Vec<String>,
}

impl RoleSequence {
    pub fn new<I, S>(roles: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roles: Vec<String> = roles.into_iter().map(Into::into).collect();

        if roles.is_empty() {
            return Err(ConfigError::EmptyRoles);
        }
        if let Some(index) = roles.iter().position(|role| role.trim().is_empty()) {
            return Err(ConfigError::BlankRole(index));
        }

        Ok(Self { roles })
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Always false: construction rejects empty lists.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, index: usize) -> &str {
        &self.roles[index % self.roles.len()]
    }

    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.roles.len()
    }

    fn char_len(&self, index: usize) -> usize {
        self.get(index).chars().count()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Pausing,
    Erasing,
    Waiting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingState {
    pub role_index: usize,
    pub char_index: usize,
    pub phase: Phase,
    until_next: Duration,
}

impl Default for TypingState {
    fn default() -> Self {
        Self::new()
    }
}

impl TypingState {
    /// The first character is due immediately.
    pub fn new() -> Self {
        Self {
            role_index: 0,
            char_index: 0,
            phase: Phase::Typing,
            until_next: Duration::ZERO,
        }
    }

    pub fn until_next(&self) -> Duration {
        self.until_next
    }

    /// Runs every step that falls due within `elapsed`.
    pub fn advance(
        mut self,
        roles: &RoleSequence,
        timings: &TypingTimings,
        mut elapsed: Duration,
    ) -> Self {
        while elapsed >= self.until_next {
            elapsed -= self.until_next;
            self = self.step(roles, timings);
        }
        self.until_next -= elapsed;
        self
    }

    fn step(self, roles: &RoleSequence, timings: &TypingTimings) -> Self {
        let role_len = roles.char_len(self.role_index);

        match self.phase {
            Phase::Typing if self.char_index < role_len => Self {
                char_index: self.char_index + 1,
                until_next: timings.typing_step,
                ..self
            },
            Phase::Typing => Self {
                phase: Phase::Pausing,
                until_next: timings.typed_pause,
                ..self
            },
            Phase::Pausing => Self {
                phase: Phase::Erasing,
                until_next: Duration::ZERO,
                ..self
            },
            Phase::Erasing if self.char_index > 0 => Self {
                char_index: self.char_index - 1,
                until_next: timings.erasing_step,
                ..self
            },
            Phase::Erasing => Self {
                role_index: roles.next_index(self.role_index),
                phase: Phase::Waiting,
                until_next: timings.next_role_pause,
                ..self
            },
            Phase::Waiting => Self {
                phase: Phase::Typing,
                until_next: Duration::ZERO,
                ..self
            },
        }
    }

    /// The partial role currently on screen.
    pub fn display<'a>(&self, roles: &'a RoleSequence) -> &'a str {
        let role = roles.get(self.role_index);
        let end = role
            .char_indices()
            .nth(self.char_index)
            .map(|(offset, _)| offset)
            .unwrap_or(role.len());
        &role[..end]
    }
}

/// Owns the role list, its timings and the running state. The rendered text
/// node is written by nothing else.
#[derive(Clone, Debug, PartialEq)]
pub struct TypingAnimator {
    roles: RoleSequence,
    timings: TypingTimings,
    state: TypingState,
}

impl TypingAnimator {
    pub fn new(roles: RoleSequence, timings: TypingTimings) -> Self {
        Self {
            roles,
            timings,
            state: TypingState::new(),
        }
    }

    pub fn advance(&mut self, elapsed: Duration) {
        self.state = self.state.advance(&self.roles, &self.timings, elapsed);
    }

    pub fn state(&self) -> TypingState {
        self.state
    }

    pub fn text(&self) -> &str {
        self.state.display(&self.roles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn animator(roles: &[&str]) -> TypingAnimator {
        let roles = RoleSequence::new(roles.iter().copied()).expect("non-empty roles");
        TypingAnimator::new(roles, TypingTimings::default())
    }

    #[test]
    fn empty_sequence_is_rejected() {
        let result = RoleSequence::new(Vec::<String>::new());
        assert_eq!(result, Err(ConfigError::EmptyRoles));
    }

    #[test]
    fn blank_role_is_rejected() {
        let result = RoleSequence::new(["Dev", "  "]);
        assert_eq!(result, Err(ConfigError::BlankRole(1)));
    }

    #[test]
    fn first_character_appears_immediately() {
        let mut typing = animator(&["Dev"]);
        typing.advance(Duration::ZERO);
        assert_eq!(typing.text(), "D");
        assert_eq!(typing.state().until_next(), ms(100));
    }

    #[test]
    fn follows_the_timeline_of_one_full_cycle() {
        let mut typing = animator(&["ab", "xyz"]);

        typing.advance(Duration::ZERO);
        assert_eq!(typing.text(), "a");
        typing.advance(ms(100));
        assert_eq!(typing.text(), "ab");

        // Full role noticed at t=200, held until t=2200.
        typing.advance(ms(100));
        assert_eq!(typing.state().phase, Phase::Pausing);
        typing.advance(ms(1_999));
        assert_eq!(typing.text(), "ab");
        typing.advance(ms(1));
        assert_eq!(typing.state().phase, Phase::Erasing);
        assert_eq!(typing.text(), "a");

        typing.advance(ms(50));
        assert_eq!(typing.text(), "");
        typing.advance(ms(50));
        assert_eq!(typing.state().phase, Phase::Waiting);
        assert_eq!(typing.state().role_index, 1);

        typing.advance(ms(499));
        assert_eq!(typing.text(), "");
        typing.advance(ms(1));
        assert_eq!(typing.text(), "x");
    }

    #[test]
    fn one_large_step_equals_many_small_steps() {
        let mut coarse = animator(&["Web Developer", "UI/UX"]);
        let mut fine = coarse.clone();

        coarse.advance(ms(5_432));
        for _ in 0..5_432 {
            fine.advance(ms(1));
        }

        assert_eq!(coarse, fine);
    }

    #[test]
    fn multibyte_roles_are_cut_on_char_boundaries() {
        let mut typing = animator(&["Café"]);
        typing.advance(ms(300));
        assert_eq!(typing.text(), "Café");
    }

    proptest! {
        /// Every role index is typed exactly once per cycle, in order.
        #[test]
        fn prop_roles_are_visited_cyclically(
            roles in prop::collection::vec("[a-z]{1,6}", 1..5),
        ) {
            let roles = RoleSequence::new(roles).expect("generated roles are non-blank");
            let timings = TypingTimings::default();
            let mut state = TypingState::new();
            let mut started = Vec::new();
            let mut previous = state;

            while started.len() < roles.len() * 2 {
                state = state.advance(&roles, &timings, Duration::from_millis(10));
                if previous.char_index == 0 && state.char_index > 0 {
                    started.push(state.role_index);
                }
                previous = state;
            }

            let expected: Vec<usize> = (0..roles.len() * 2).map(|i| i % roles.len()).collect();
            prop_assert_eq!(started, expected);
        }

        /// The display is always a prefix of the current role, and is empty
        /// whenever the role changes.
        #[test]
        fn prop_roles_never_overlap(
            roles in prop::collection::vec("[a-zA-Z ]{1,8}", 1..4),
            steps in prop::collection::vec(1u64..400, 1..200),
        ) {
            prop_assume!(roles.iter().all(|role| !role.trim().is_empty()));
            let roles = RoleSequence::new(roles).expect("non-blank roles");
            let timings = TypingTimings::default();
            let mut state = TypingState::new();

            for step in steps {
                let before = state;
                state = state.advance(&roles, &timings, Duration::from_millis(step));

                prop_assert!(roles.get(state.role_index).starts_with(state.display(&roles)));
                prop_assert!(state.char_index <= roles.get(state.role_index).chars().count());
                if before.role_index != state.role_index {
                    prop_assert_eq!(state.display(&roles), "");
                }
            }
        }
    }
}
