use std::fmt;

use thiserror::Error;

/// What a bot wants to do with its turn. The amount on a
/// bet is the extra chips pushed in by this action, so
/// `Bet(0)` is a check and a call is a bet of exactly the
/// difference to the current max bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Action {
    Fold,
    Bet(i32),
}

impl Action {
    /// Decode the single integer form: -1 folds, anything
    /// else bets that many extra chips.
    pub fn from_raise_size(raise_size: i32) -> Self {
        if raise_size == -1 {
            Action::Fold
        } else {
            Action::Bet(raise_size)
        }
    }

    /// Encode back into the single integer form.
    pub fn raise_size(&self) -> i32 {
        match self {
            Action::Fold => -1,
            Action::Bet(amount) => *amount,
        }
    }
}

/// Why a requested action broke the betting rules. These
/// never surface as hard errors. The engine folds the seat
/// instead and reports the reason in the outcome.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum IllegalAction {
    #[error("bet amounts can never be negative")]
    NegativeBet,
    #[error("bet of {amount} is more than the {available} chips behind")]
    NotEnoughChips { amount: i32, available: i32 },
    #[error("cannot check with {to_call} left to call")]
    CannotCheck { to_call: i32 },
    #[error("total of {total} neither calls {max_bet} nor raises to at least {min_total}")]
    RaiseTooSmall {
        total: i32,
        max_bet: i32,
        min_total: i32,
    },
}

/// What actually happened once an action was applied.
/// Amounts are the extra chips the action moved in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ActionOutcome {
    Folded,
    Checked,
    Called(i32),
    /// A raise, reported as the total bet it left in front
    /// of the seat.
    Raised { to: i32 },
    /// The seat's whole remaining stack went in.
    AllIn(i32),
    /// The requested action was illegal so the engine
    /// folded the seat instead.
    AutoFolded(IllegalAction),
}

impl ActionOutcome {
    /// Did this turn end with the seat folding?
    pub fn is_fold(&self) -> bool {
        matches!(self, ActionOutcome::Folded | ActionOutcome::AutoFolded(_))
    }
}

impl fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionOutcome::Folded => write!(f, "Fold"),
            ActionOutcome::Checked => write!(f, "Check"),
            ActionOutcome::Called(amount) => write!(f, "Call {amount}"),
            ActionOutcome::Raised { to } => write!(f, "Raise to {to}"),
            ActionOutcome::AllIn(amount) => write!(f, "All-in {amount}"),
            ActionOutcome::AutoFolded(reason) => write!(f, "Invalid action ({reason}), folded"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raise_size_round_trip() {
        assert_eq!(Action::Fold, Action::from_raise_size(-1));
        assert_eq!(Action::Bet(0), Action::from_raise_size(0));
        assert_eq!(Action::Bet(250), Action::from_raise_size(250));
        for action in [Action::Fold, Action::Bet(0), Action::Bet(75)] {
            assert_eq!(action, Action::from_raise_size(action.raise_size()));
        }
    }

    #[test]
    fn test_is_fold() {
        assert!(ActionOutcome::Folded.is_fold());
        assert!(ActionOutcome::AutoFolded(IllegalAction::NegativeBet).is_fold());
        assert!(!ActionOutcome::Checked.is_fold());
        assert!(!ActionOutcome::Called(50).is_fold());
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!("Raise to 300", ActionOutcome::Raised { to: 300 }.to_string());
        let auto = ActionOutcome::AutoFolded(IllegalAction::CannotCheck { to_call: 50 });
        assert_eq!(
            "Invalid action (cannot check with 50 left to call), folded",
            auto.to_string()
        );
    }
}
