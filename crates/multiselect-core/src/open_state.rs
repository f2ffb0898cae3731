//! Open/close state of the option list

use serde::{Deserialize, Serialize};

use crate::error::{MultiSelectError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenState {
    #[default]
    Closed,
    Open,
}

impl OpenState {
    pub fn from_open(open: bool) -> Self {
        if open {
            return OpenState::Open;
        }
        OpenState::Closed
    }

    pub fn is_open(&self) -> bool {
        matches!(self, OpenState::Open)
    }

    pub fn toggled(&self) -> Self {
        match self {
            OpenState::Closed => OpenState::Open,
            OpenState::Open => OpenState::Closed,
        }
    }

    /// Next state for a chevron click.
    ///
    /// A locked control may close but never open.
    pub fn transition(&self, locked: bool) -> Result<Self> {
        let next = self.toggled();
        if locked && next.is_open() {
            return Err(MultiSelectError::Locked);
        }
        Ok(next)
    }

    pub fn label(&self) -> &'static str {
        match self {
            OpenState::Closed => "closed",
            OpenState::Open => "open",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_self_inverse() {
        for state in [OpenState::Closed, OpenState::Open] {
            assert_eq!(state.toggled().toggled(), state);
            assert_ne!(state.toggled(), state);
        }
    }

    #[test]
    fn test_locked_refuses_open() {
        let err = OpenState::Closed.transition(true).unwrap_err();
        assert!(matches!(err, MultiSelectError::Locked));
    }

    #[test]
    fn test_locked_allows_close() {
        assert_eq!(OpenState::Open.transition(true).unwrap(), OpenState::Closed);
    }

    #[test]
    fn test_unlocked_transitions() {
        assert_eq!(OpenState::Closed.transition(false).unwrap(), OpenState::Open);
        assert_eq!(OpenState::Open.transition(false).unwrap(), OpenState::Closed);
    }
}
