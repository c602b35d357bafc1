use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    documents::value::{lenient_confidence, lenient_text},
    navigation::{DetailsView, OutlineRow},
    provenance::{Indicator, SourceDetail, SourceListItem},
    sections::status::{RequirementStatus, RiskIssueStatus},
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Sow,
    Brd,
    Raid,
    Meeting,
    Dashboard,
}

impl DocumentKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "sow" | "statement_of_work" => Some(Self::Sow),
            "brd" => Some(Self::Brd),
            "raid" => Some(Self::Raid),
            "meeting" | "meeting_extraction" => Some(Self::Meeting),
            "dashboard" => Some(Self::Dashboard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sow => "sow",
            Self::Brd => "brd",
            Self::Raid => "raid",
            Self::Meeting => "meeting",
            Self::Dashboard => "dashboard",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Sow => "Statement of Work",
            Self::Brd => "Business Requirements Document",
            Self::Raid => "RAID Log",
            Self::Meeting => "Meeting",
            Self::Dashboard => "Project Dashboard",
        }
    }
}

/// Provenance annotation attached to an extracted record. Fields are read
/// leniently: null or non-string text becomes `""` and an unreadable
/// confidence becomes `0.0`, so any reference object is kept.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct SourceReference {
    #[serde(default, deserialize_with = "lenient_text")]
    pub file_name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub page_section: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub quote_text: String,
    #[serde(default, deserialize_with = "lenient_confidence")]
    pub confidence: f64,
}

/// Stable identifier of a record within a document, independent of its array
/// position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema)]
#[serde(transparent)]
pub struct RecordKey(pub String);

impl RecordKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSummary {
    pub kind: DocumentKind,
    pub title: String,
    pub fingerprint: String,
    pub section_count: usize,
    pub leaf_count: usize,
    pub reference_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenDocumentResponse {
    pub document: DocumentSummary,
    pub active_section_id: String,
    pub reset: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetOutlineResponse {
    pub rows: Vec<OutlineRow>,
    pub active_section_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectSectionResponse {
    pub active_section_id: String,
    pub expanded: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDetailsResponse {
    pub details: DetailsView,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetRequirementStatusResponse {
    pub record_key: String,
    pub status: RequirementStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetRiskIssueStatusResponse {
    pub record_key: String,
    pub status: RiskIssueStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenSourcesResponse {
    pub indicator: Option<Indicator>,
    pub references: Vec<SourceListItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectSourceResponse {
    pub detail: SourceDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseSourcesResponse {
    pub closed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMarkdownResponse {
    pub markdown: String,
}
