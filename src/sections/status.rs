//! Client-side triage overlays for requirements and risks/issues.
//!
//! The overlay is never part of the document and is never persisted: it is
//! keyed by [`RecordKey`] and discarded whenever a different document is
//! loaded. Every row starts `pending`; a row can leave `pending` exactly once.

use std::collections::HashMap;
use std::fmt::Debug;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    errors::{AppError, AppResult},
    types::RecordKey,
};

pub trait TriageStatus: Copy + Eq + Debug + 'static {
    const PENDING: Self;

    /// Targets reachable from `pending`, in display order.
    fn actions() -> &'static [Self];
    fn as_str(&self) -> &'static str;
    fn label(&self) -> &'static str;
    fn action_label(&self) -> &'static str;
    fn icon(&self) -> &'static str;
    fn parse(raw: &str) -> Option<Self>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RequirementStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Review,
}

impl TriageStatus for RequirementStatus {
    const PENDING: Self = Self::Pending;

    fn actions() -> &'static [Self] {
        &[Self::Approved, Self::Review, Self::Rejected]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Review => "review",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Review => "Under Review",
        }
    }

    fn action_label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approve",
            Self::Rejected => "Reject",
            Self::Review => "Review",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "check",
            Self::Rejected => "close",
            Self::Review => "visibility",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "approved" | "approve" => Some(Self::Approved),
            "rejected" | "reject" => Some(Self::Rejected),
            "review" => Some(Self::Review),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RiskIssueStatus {
    #[default]
    Pending,
    Resolved,
    Ignored,
    Review,
}

impl TriageStatus for RiskIssueStatus {
    const PENDING: Self = Self::Pending;

    fn actions() -> &'static [Self] {
        &[Self::Resolved, Self::Review, Self::Ignored]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Resolved => "resolved",
            Self::Ignored => "ignored",
            Self::Review => "review",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Resolved => "Resolved",
            Self::Ignored => "Ignored",
            Self::Review => "Under Review",
        }
    }

    fn action_label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Resolved => "Resolve",
            Self::Ignored => "Ignore",
            Self::Review => "Under Review",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Resolved => "check_circle",
            Self::Ignored => "block",
            Self::Review => "visibility",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "resolved" | "resolve" => Some(Self::Resolved),
            "ignored" | "ignore" => Some(Self::Ignored),
            "review" => Some(Self::Review),
            _ => None,
        }
    }
}

/// Status cell of a triage-enabled row: a badge, plus action controls while
/// the row is still pending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RowStatus {
    pub state: String,
    pub label: String,
    pub actions: Vec<RowAction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RowAction {
    pub target: String,
    pub label: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusOverlay<S> {
    entries: HashMap<RecordKey, S>,
}

impl<S> Default for StatusOverlay<S> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<S: TriageStatus> StatusOverlay<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status_of(&self, key: &RecordKey) -> S {
        self.entries.get(key).copied().unwrap_or(S::PENDING)
    }

    /// Moves a pending row to `next`.
    pub fn apply(&mut self, key: RecordKey, next: S) -> AppResult<S> {
        if next == S::PENDING {
            return Err(AppError::InvalidTransition(format!(
                "record {key} cannot be returned to pending"
            )));
        }
        let current = self.status_of(&key);
        if current != S::PENDING {
            return Err(AppError::InvalidTransition(format!(
                "record {key} is already {}",
                current.as_str()
            )));
        }
        debug!(record = %key, status = next.as_str(), "status overlay updated");
        self.entries.insert(key, next);
        Ok(next)
    }

    pub fn row_status(&self, key: &RecordKey) -> RowStatus {
        let status = self.status_of(key);
        let actions = if status == S::PENDING {
            S::actions()
                .iter()
                .map(|target| RowAction {
                    target: target.as_str().to_string(),
                    label: target.action_label().to_string(),
                    icon: target.icon().to_string(),
                })
                .collect()
        } else {
            Vec::new()
        };
        RowStatus {
            state: status.as_str().to_string(),
            label: status.label().to_string(),
            actions,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
