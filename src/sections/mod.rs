//! Section model and per-kind builders.
//!
//! Builders are pure: the same document and options always yield the same
//! tree, and a missing document yields an empty tree.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    core::types::{DocumentKind, RecordKey},
    documents::{Document, DocumentPayload, Record},
};

pub mod brd;
pub mod columns;
pub mod dashboard;
pub mod format;
pub mod meeting;
pub mod raid;
pub mod sow;
pub mod status;
pub mod table;

use status::{RequirementStatus, RiskIssueStatus, RowStatus, StatusOverlay, TriageStatus};
use table::TableView;

/// What to do with a section whose data is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EmptySectionPolicy {
    /// Omit the section from the outline.
    Skip,
    /// Keep the section and render an empty-state message.
    ShowPlaceholder,
}

impl EmptySectionPolicy {
    pub fn default_for(kind: DocumentKind) -> Self {
        match kind {
            DocumentKind::Brd | DocumentKind::Raid => Self::Skip,
            DocumentKind::Sow | DocumentKind::Meeting | DocumentKind::Dashboard => {
                Self::ShowPlaceholder
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions<'a> {
    pub empty_policy: Option<EmptySectionPolicy>,
    pub requirement_statuses: Option<&'a StatusOverlay<RequirementStatus>>,
    pub risk_issue_statuses: Option<&'a StatusOverlay<RiskIssueStatus>>,
}

impl<'a> BuildOptions<'a> {
    pub fn policy_for(&self, kind: DocumentKind) -> EmptySectionPolicy {
        self.empty_policy
            .unwrap_or_else(|| EmptySectionPolicy::default_for(kind))
    }

    pub(crate) fn requirement_row(&self, key: &RecordKey) -> RowStatus {
        row_status(self.requirement_statuses, key)
    }

    pub(crate) fn risk_issue_row(&self, key: &RecordKey) -> RowStatus {
        row_status(self.risk_issue_statuses, key)
    }
}

fn row_status<S: TriageStatus>(overlay: Option<&StatusOverlay<S>>, key: &RecordKey) -> RowStatus {
    match overlay {
        Some(overlay) => overlay.row_status(key),
        None => StatusOverlay::<S>::new().row_status(key),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldEntry {
    pub label: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummaryCard {
    pub title: String,
    pub count: u64,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentBlock {
    Heading { text: String, level: u8 },
    Paragraph { text: String },
    List { items: Vec<String> },
    Fields { fields: Vec<FieldEntry> },
    Badge { label: String, tone: BadgeTone },
    Cards { cards: Vec<SummaryCard> },
    Table(TableView),
    Empty { message: String },
}

impl ContentBlock {
    pub fn heading(text: impl Into<String>) -> Self {
        Self::Heading {
            text: text.into(),
            level: 3,
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph { text: text.into() }
    }

    pub fn empty(message: impl Into<String>) -> Self {
        Self::Empty {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SectionBody {
    Content(Vec<ContentBlock>),
    Children(Vec<Section>),
    Empty,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub body: SectionBody,
}

impl Section {
    pub fn leaf(
        id: impl Into<String>,
        title: impl Into<String>,
        icon: impl Into<String>,
        blocks: Vec<ContentBlock>,
    ) -> Self {
        let body = if blocks.is_empty() {
            SectionBody::Empty
        } else {
            SectionBody::Content(blocks)
        };
        Self {
            id: id.into(),
            title: title.into(),
            icon: icon.into(),
            body,
        }
    }

    pub fn branch(
        id: impl Into<String>,
        title: impl Into<String>,
        icon: impl Into<String>,
        children: Vec<Section>,
    ) -> Self {
        let body = if children.is_empty() {
            SectionBody::Empty
        } else {
            SectionBody::Children(children)
        };
        Self {
            id: id.into(),
            title: title.into(),
            icon: icon.into(),
            body,
        }
    }

    pub fn is_branch(&self) -> bool {
        matches!(self.body, SectionBody::Children(_))
    }

    pub fn children(&self) -> &[Section] {
        match &self.body {
            SectionBody::Children(children) => children,
            _ => &[],
        }
    }

    pub fn content(&self) -> Option<&[ContentBlock]> {
        match &self.body {
            SectionBody::Content(blocks) => Some(blocks),
            _ => None,
        }
    }

    pub fn tables(&self) -> impl Iterator<Item = &TableView> {
        self.content()
            .unwrap_or(&[])
            .iter()
            .filter_map(|block| match block {
                ContentBlock::Table(table) => Some(table),
                _ => None,
            })
    }
}

pub const NO_DATA: &str = "No data available";

/// Emits a leaf for a data-backed section, honoring the empty policy.
pub(crate) fn data_section(
    policy: EmptySectionPolicy,
    has_data: bool,
    section: impl FnOnce() -> Section,
    empty: impl FnOnce() -> Section,
) -> Option<Section> {
    match (has_data, policy) {
        (true, _) => Some(section()),
        (false, EmptySectionPolicy::Skip) => None,
        (false, EmptySectionPolicy::ShowPlaceholder) => Some(empty()),
    }
}

/// One table leaf per record array; `table` only runs when records exist.
pub(crate) fn record_section<R>(
    policy: EmptySectionPolicy,
    (id, title, icon): (&str, &str, &str),
    records: &[Record<R>],
    table: impl FnOnce(&[Record<R>]) -> TableView,
) -> Option<Section> {
    data_section(
        policy,
        !records.is_empty(),
        || Section::leaf(id, title, icon, vec![ContentBlock::Table(table(records))]),
        || Section::leaf(id, title, icon, vec![ContentBlock::empty(NO_DATA)]),
    )
}

pub fn build_sections(document: Option<&Document>, options: &BuildOptions<'_>) -> Vec<Section> {
    let Some(document) = document else {
        return Vec::new();
    };
    let policy = options.policy_for(document.kind);
    let sections = match &document.payload {
        DocumentPayload::Sow(sow) => sow::build(sow, policy),
        DocumentPayload::Brd(brd) => brd::build(brd, policy, options),
        DocumentPayload::Raid(raid) => raid::build(raid, policy, options),
        DocumentPayload::Meeting(meeting) => meeting::build(meeting, policy),
        DocumentPayload::Dashboard(dashboard) => dashboard::build(dashboard, policy),
    };
    tracing::debug!(
        kind = document.kind.as_str(),
        top_level = sections.len(),
        "sections built"
    );
    sections
}

/// Counts every section in the tree, branches included.
pub fn count_sections(sections: &[Section]) -> usize {
    sections
        .iter()
        .map(|section| 1 + count_sections(section.children()))
        .sum()
}

pub fn count_leaves(sections: &[Section]) -> usize {
    sections
        .iter()
        .map(|section| {
            if section.is_branch() {
                count_leaves(section.children())
            } else {
                1
            }
        })
        .sum()
}
