//! Source-reference correlation.
//!
//! References are not declared anywhere in the document schema; they are
//! discovered by walking the JSON for `source_references` arrays. The walk
//! assumes tree-shaped input (plain deserialized JSON has no back-references)
//! and stops descending at a configurable depth.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    core::{
        config::DEFAULT_REFERENCE_DEPTH,
        types::{DocumentKind, SourceReference},
    },
    documents::Document,
};

pub mod viewer;

pub use viewer::{SourceDetail, SourceListItem, SourceViewer};

pub const REFERENCES_FIELD: &str = "source_references";
pub const HIGH_CONFIDENCE: f64 = 0.8;
pub const MEDIUM_CONFIDENCE: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceBand {
    High,
    Medium,
    Low,
}

impl ConfidenceBand {
    pub fn of(confidence: f64) -> Self {
        if confidence >= HIGH_CONFIDENCE {
            Self::High
        } else if confidence >= MEDIUM_CONFIDENCE {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::High => "#4CAF50",
            Self::Medium => "#FF9800",
            Self::Low => "#F44336",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

pub fn confidence_percent(confidence: f64) -> i64 {
    (confidence * 100.0).round() as i64
}

/// Aggregate badge for a set of references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Indicator {
    pub total: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub label: String,
}

impl Indicator {
    /// Bands with at least one reference, in high → low order.
    pub fn bands(&self) -> Vec<(ConfidenceBand, usize)> {
        [
            (ConfidenceBand::High, self.high),
            (ConfidenceBand::Medium, self.medium),
            (ConfidenceBand::Low, self.low),
        ]
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .collect()
    }
}

/// Returns `None` for an empty reference list; callers render nothing.
pub fn build_indicator(references: &[SourceReference]) -> Option<Indicator> {
    if references.is_empty() {
        return None;
    }
    let (mut high, mut medium, mut low) = (0, 0, 0);
    for reference in references {
        match ConfidenceBand::of(reference.confidence) {
            ConfidenceBand::High => high += 1,
            ConfidenceBand::Medium => medium += 1,
            ConfidenceBand::Low => low += 1,
        }
    }
    let total = references.len();
    Some(Indicator {
        total,
        high,
        medium,
        low,
        label: format!("{total} source references available"),
    })
}

pub fn extract_references(value: &Value) -> Vec<SourceReference> {
    extract_references_with_limit(value, DEFAULT_REFERENCE_DEPTH)
}

pub fn extract_references_with_limit(value: &Value, depth_limit: usize) -> Vec<SourceReference> {
    let mut references = Vec::new();
    collect(value, 0, depth_limit, &mut references);
    references
}

fn collect(value: &Value, depth: usize, depth_limit: usize, out: &mut Vec<SourceReference>) {
    if depth > depth_limit {
        warn!(depth, "source reference scan hit depth limit");
        return;
    }
    let map = match value {
        Value::Object(map) => map,
        Value::Array(items) => {
            for item in items.iter().filter(|item| item.is_object()) {
                collect(item, depth + 1, depth_limit, out);
            }
            return;
        }
        _ => return,
    };

    if let Some(Value::Array(items)) = map.get(REFERENCES_FIELD) {
        for item in items {
            match serde_json::from_value::<SourceReference>(item.clone()) {
                Ok(reference) if item.is_object() => out.push(reference),
                _ => debug!("skipping malformed source reference"),
            }
        }
    }

    for child in map.values() {
        if child.is_object() || child.is_array() {
            collect(child, depth + 1, depth_limit, out);
        }
    }
}

/// References found under the document fields a section is built from.
pub fn references_for_section(
    document: &Document,
    section_id: &str,
    depth_limit: usize,
) -> Vec<SourceReference> {
    let mut references = Vec::new();
    for path in section_paths(document.kind, section_id) {
        let node = path
            .iter()
            .try_fold(&document.raw, |node, key| node.get(*key));
        if let Some(node) = node {
            collect(node, 0, depth_limit, &mut references);
        }
    }
    references
}

fn section_paths(kind: DocumentKind, section_id: &str) -> &'static [&'static [&'static str]] {
    match (kind, section_id) {
        (DocumentKind::Sow, "overview") => &[&["scope_summary"], &["assumptions"]],
        (DocumentKind::Sow, "project-overview" | "primary-objective" | "out-of-scope") => {
            &[&["scope_summary"]]
        }
        (DocumentKind::Sow, "assumptions") => &[&["assumptions"]],
        (DocumentKind::Sow, "modules") => &[&["modules"]],
        (DocumentKind::Sow, "licenses") => &[&["salesforce_licenses"]],
        (DocumentKind::Sow, "stakeholders") => &[&["business_units"]],
        (DocumentKind::Sow, "validation") => &[&["validation_summary"]],

        (DocumentKind::Brd, "business-units-teams") => &[&["business_units_teams"]],
        (DocumentKind::Brd, "modules-processes") => &[&["modules_processes"]],
        (DocumentKind::Brd, "license-list") => &[&["license_list"]],
        (DocumentKind::Brd, "personas") => &[&["personas"]],
        (DocumentKind::Brd, "requirements") => &[&["requirements"]],
        (DocumentKind::Brd, "current-state") => &[&["current_state"]],
        (DocumentKind::Brd, "target-state") => &[&["target_state"]],
        (DocumentKind::Brd, "applications-integrate") => &[&["applications_to_integrate"]],
        (DocumentKind::Brd, "data-migration") => &[&["data_migration"]],
        (DocumentKind::Brd, "data-model") => &[&["data_model"]],
        (DocumentKind::Brd, "metadata-updates") => &[&["metadata_updates"]],

        (DocumentKind::Raid, "risks-issues") => &[&["risks_issues"]],
        (DocumentKind::Raid, "action-items") => &[&["action_items"]],
        (DocumentKind::Raid, "decisions") => &[&["decisions"]],
        (DocumentKind::Raid, "dependencies") => &[&["dependencies"]],
        (DocumentKind::Raid, "pain-points") => &[&["pain_points"]],

        (DocumentKind::Meeting, "meeting-overview") => &[&["meeting"]],
        (DocumentKind::Meeting, "org-structure") => {
            &[&["extractions", "bu_teams"], &["extractions", "personas"]]
        }
        (DocumentKind::Meeting, "requirements") => &[
            &["extractions", "requirements"],
            &["extractions", "modules_processes"],
            &["extractions", "pain_points"],
            &["extractions", "current_state"],
            &["extractions", "target_state"],
        ],
        (DocumentKind::Meeting, "raidd") => &[
            &["extractions", "risks_issues"],
            &["extractions", "action_items"],
            &["extractions", "decisions"],
            &["extractions", "dependencies"],
        ],
        (DocumentKind::Meeting, "data-systems") => &[
            &["extractions", "integrations"],
            &["extractions", "data_migration"],
            &["extractions", "data_model"],
            &["extractions", "metadata_updates"],
        ],

        (DocumentKind::Dashboard, "recent-meetings") => &[&["recent_meetings"]],
        (DocumentKind::Dashboard, "upcoming-meetings") => &[&["upcoming_meetings"]],
        (DocumentKind::Dashboard, "recent-activity") => &[&["recent_activity"]],
        _ => &[],
    }
}
