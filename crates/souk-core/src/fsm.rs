// Rust guideline compliant 2026-08-14

//! Transaction status state machine.
//!
//! Statuses arrive from two worlds: canonical snake_case names used in
//! storage, and legacy camelCase aliases kept for imported data. Both
//! map onto [`TransactionStatus`] here. Transition guarding is split
//! from assignment so callers can choose legacy (unguarded) or strict
//! behavior per the `strict_transitions` config flag.

use crate::models::{Transaction, TransactionStatus};

/// Legacy alias for [`TransactionStatus::InProgress`].
pub const ALIAS_IN_PROGRESS: &str = "transactionInProgress";
/// Legacy alias for [`TransactionStatus::Completed`].
pub const ALIAS_COMPLETED: &str = "transactionCompleted";
/// Legacy alias for [`TransactionStatus::Cancelled`].
pub const ALIAS_CANCELLED: &str = "transactionCancelled";

impl TransactionStatus {
    /// Parses a status from its canonical name or legacy alias.
    ///
    /// # Errors
    ///
    /// Returns a value error for any unrecognized string.
    pub fn from_alias(s: &str) -> crate::Result<Self> {
        match s {
            ALIAS_IN_PROGRESS | "in_progress" => Ok(Self::InProgress),
            ALIAS_COMPLETED | "completed" => Ok(Self::Completed),
            ALIAS_CANCELLED | "cancelled" => Ok(Self::Cancelled),
            other => Err(crate::Error::StatusValue(other.to_string())),
        }
    }

    /// Parses a status from a dynamic JSON value.
    ///
    /// # Errors
    ///
    /// Returns a type error for non-string values, and a value error for
    /// strings that name no status.
    pub fn from_value(value: &serde_json::Value) -> crate::Result<Self> {
        match value {
            serde_json::Value::String(s) => Self::from_alias(s),
            other => Err(crate::Error::StatusType(json_type_name(other))),
        }
    }

    /// Returns the legacy camelCase alias for this status.
    pub fn alias(&self) -> &'static str {
        match self {
            Self::InProgress => ALIAS_IN_PROGRESS,
            Self::Completed => ALIAS_COMPLETED,
            Self::Cancelled => ALIAS_CANCELLED,
        }
    }

    /// Returns true for statuses that end a transaction's life.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Checks whether this status may move to `target`.
    ///
    /// Legacy mode (`strict` false) allows every move. Strict mode
    /// freezes terminal statuses, except the no-op self-transition.
    ///
    /// # Errors
    ///
    /// Returns a transition error for a strict-mode move out of a
    /// terminal status.
    pub fn can_transition_to(&self, target: TransactionStatus, strict: bool) -> crate::Result<()> {
        if strict && self.is_terminal() && target != *self {
            return Err(crate::Error::InvalidTransition(format!(
                "Cannot transition from {:?} to {:?}",
                self, target
            )));
        }
        Ok(())
    }

    /// Lists the statuses reachable from this one.
    pub fn valid_transitions(&self, strict: bool) -> Vec<TransactionStatus> {
        let all = [Self::InProgress, Self::Completed, Self::Cancelled];
        all.into_iter()
            .filter(|target| self.can_transition_to(*target, strict).is_ok())
            .collect()
    }
}

/// Checks a transaction's pending status change.
///
/// # Arguments
///
/// * `txn` - Transaction whose status would change
/// * `new_status` - Proposed status
/// * `strict` - Whether terminal statuses are frozen
///
/// # Errors
///
/// Returns a transition error when the move is not allowed.
pub fn validate_transition(
    txn: &Transaction,
    new_status: TransactionStatus,
    strict: bool,
) -> crate::Result<()> {
    txn.status.can_transition_to(new_status, strict)
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
