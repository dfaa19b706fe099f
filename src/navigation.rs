//! Step navigation state
//!
//! A bounded step counter with the Back / Next / Select transitions used by
//! the stepper. Kept free of rendering so it can be tested on its own.

use crate::error::WizardError;
use strum::Display;

/// Where a step sits relative to the active one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum StepStatus {
    /// Before the active step
    Done,
    /// The active step
    Active,
    /// After the active step
    Upcoming,
}

/// Result of a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The active step changed
    Moved { from: usize, to: usize },
    /// Next was requested on the last step
    Submit,
    /// Nothing happened
    Unchanged,
}

/// Active step index over a fixed number of steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepNavigator {
    current: usize,
    len: usize,
}

impl StepNavigator {
    /// Create a navigator over `len` steps starting at `start`
    pub fn new(len: usize, start: usize) -> Result<Self, WizardError> {
        if len == 0 {
            return Err(WizardError::EmptySteps);
        }
        if start >= len {
            return Err(WizardError::StepOutOfRange { index: start, len });
        }
        Ok(Self {
            current: start,
            len,
        })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.len
    }

    /// Advance one step, or ask for submit on the last step
    pub fn next(&mut self) -> Transition {
        if self.is_last() {
            return Transition::Submit;
        }
        self.move_to(self.current + 1)
    }

    /// Go back one step; no-op on the first step
    pub fn back(&mut self) -> Transition {
        if self.is_first() {
            return Transition::Unchanged;
        }
        self.move_to(self.current - 1)
    }

    /// Jump straight to `index`
    pub fn select(&mut self, index: usize) -> Result<Transition, WizardError> {
        if index >= self.len {
            return Err(WizardError::StepOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(self.move_to(index))
    }

    fn move_to(&mut self, to: usize) -> Transition {
        let from = self.current;
        if from == to {
            return Transition::Unchanged;
        }
        self.current = to;
        Transition::Moved { from, to }
    }

    /// Status of the step circle at `index`
    pub fn status(&self, index: usize) -> StepStatus {
        if index < self.current {
            StepStatus::Done
        } else if index == self.current {
            StepStatus::Active
        } else {
            StepStatus::Upcoming
        }
    }

    /// Whether the connector leading into step `index` is filled
    pub fn connector_filled(&self, index: usize) -> bool {
        index <= self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty() {
        assert!(matches!(
            StepNavigator::new(0, 0),
            Err(WizardError::EmptySteps)
        ));
    }

    #[test]
    fn test_new_rejects_start_past_end() {
        assert!(matches!(
            StepNavigator::new(3, 3),
            Err(WizardError::StepOutOfRange { index: 3, len: 3 })
        ));
    }

    #[test]
    fn test_next_reaches_last_then_submits() {
        for len in 1..8 {
            for start in 0..len {
                let mut nav = StepNavigator::new(len, start).unwrap();
                for _ in start..len - 1 {
                    assert!(matches!(nav.next(), Transition::Moved { .. }));
                }
                assert_eq!(nav.current(), len - 1);
                assert_eq!(nav.next(), Transition::Submit);
                assert_eq!(nav.current(), len - 1);
            }
        }
    }

    #[test]
    fn test_back_decrements_by_one() {
        let mut nav = StepNavigator::new(5, 4).unwrap();
        for expected in (0..4).rev() {
            assert_eq!(
                nav.back(),
                Transition::Moved {
                    from: expected + 1,
                    to: expected
                }
            );
        }
        assert_eq!(nav.back(), Transition::Unchanged);
        assert_eq!(nav.current(), 0);
    }

    #[test]
    fn test_select_any_index() {
        let mut nav = StepNavigator::new(4, 0).unwrap();
        for from in 0..4 {
            for to in 0..4 {
                nav.select(from).unwrap();
                nav.select(to).unwrap();
                assert_eq!(nav.current(), to);
            }
        }
    }

    #[test]
    fn test_select_same_index_is_unchanged() {
        let mut nav = StepNavigator::new(3, 1).unwrap();
        assert_eq!(nav.select(1).unwrap(), Transition::Unchanged);
    }

    #[test]
    fn test_select_out_of_range() {
        let mut nav = StepNavigator::new(3, 1).unwrap();
        assert!(nav.select(3).is_err());
        assert_eq!(nav.current(), 1);
    }

    #[test]
    fn test_single_step_submits_immediately() {
        let mut nav = StepNavigator::new(1, 0).unwrap();
        assert!(nav.is_first() && nav.is_last());
        assert_eq!(nav.next(), Transition::Submit);
        assert_eq!(nav.back(), Transition::Unchanged);
    }

    #[test]
    fn test_status_and_connectors() {
        let nav = StepNavigator::new(4, 2).unwrap();
        assert_eq!(nav.status(0), StepStatus::Done);
        assert_eq!(nav.status(1), StepStatus::Done);
        assert_eq!(nav.status(2), StepStatus::Active);
        assert_eq!(nav.status(3), StepStatus::Upcoming);
        assert!(nav.connector_filled(2));
        assert!(!nav.connector_filled(3));
        assert_eq!(nav.status(3).to_string(), "upcoming");
    }
}
