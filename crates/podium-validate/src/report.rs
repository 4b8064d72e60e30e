//! Validation report types.

use serde::{Deserialize, Serialize};

use podium_model::EventGroup;

use crate::error::GroupError;
use crate::issue::Issue;

/// An issue and the event group it was found in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupIssue {
    pub event_key: String,
    pub issue: Issue,
}

impl GroupIssue {
    pub fn to_error(&self) -> GroupError {
        GroupError {
            event_key: self.event_key.clone(),
            reason: self.issue.message(),
        }
    }
}

/// Outcome of checking every group of a placement sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Groups that passed every check, in first-seen order.
    pub groups: Vec<EventGroup>,
    /// Issues in first-seen group order.
    pub issues: Vec<GroupIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    /// Event keys with at least one issue, without repeats.
    pub fn invalid_event_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        for issue in &self.issues {
            if !keys.contains(&issue.event_key.as_str()) {
                keys.push(&issue.event_key);
            }
        }
        keys
    }

    /// The error fail-fast validation would have returned.
    pub fn first_error(&self) -> Option<GroupError> {
        self.issues.first().map(GroupIssue::to_error)
    }
}
