//! Typed views of the backend payloads rendered by the viewer.
//!
//! A [`Document`] keeps both the typed payload used by the section builders
//! and the raw JSON the source-reference correlator walks.

use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use crate::core::{
    errors::{AppError, AppResult},
    types::DocumentKind,
};

pub mod kinds;
pub mod records;
pub mod value;

pub use kinds::{BrdDocument, DashboardDocument, MeetingDocument, RaidDocument, SowDocument};
pub use value::{FieldValue, Record};

#[derive(Debug, Clone)]
pub enum DocumentPayload {
    Sow(SowDocument),
    Brd(BrdDocument),
    Raid(RaidDocument),
    Meeting(MeetingDocument),
    Dashboard(DashboardDocument),
}

#[derive(Debug, Clone)]
pub struct Document {
    pub kind: DocumentKind,
    pub fingerprint: String,
    pub raw: Value,
    pub payload: DocumentPayload,
}

impl Document {
    pub fn from_value(kind: DocumentKind, raw: Value) -> AppResult<Self> {
        if !raw.is_object() {
            return Err(AppError::InvalidDocument(format!(
                "{} payload must be a JSON object, got {}",
                kind.as_str(),
                value::value_kind(&raw)
            )));
        }

        let fingerprint = value::checksum_text(&raw.to_string());
        let payload = match kind {
            DocumentKind::Sow => DocumentPayload::Sow(serde_json::from_value(raw.clone())?),
            DocumentKind::Brd => DocumentPayload::Brd(serde_json::from_value(raw.clone())?),
            DocumentKind::Raid => DocumentPayload::Raid(serde_json::from_value(raw.clone())?),
            DocumentKind::Meeting => {
                DocumentPayload::Meeting(serde_json::from_value(raw.clone())?)
            }
            DocumentKind::Dashboard => {
                DocumentPayload::Dashboard(serde_json::from_value(raw.clone())?)
            }
        };
        debug!(kind = kind.as_str(), %fingerprint, "document parsed");

        Ok(Self {
            kind,
            fingerprint,
            raw,
            payload,
        })
    }

    /// Title shown above the outline.
    pub fn title(&self) -> String {
        match &self.payload {
            DocumentPayload::Meeting(meeting) => meeting
                .meeting
                .as_ref()
                .and_then(|info| info.meeting_name.as_ref())
                .and_then(FieldValue::as_text)
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(ToString::to_string)
                .unwrap_or_else(|| self.kind.display_name().to_string()),
            _ => self.kind.display_name().to_string(),
        }
    }
}

pub fn parse_document(kind: DocumentKind, text: &str) -> AppResult<Document> {
    let raw: Value = serde_json::from_str(text)?;
    Document::from_value(kind, raw)
}

pub fn load_document(kind: DocumentKind, path: &Path) -> AppResult<Document> {
    if !path.exists() {
        return Err(AppError::NotFound(format!("file {}", path.display())));
    }
    let text = std::fs::read_to_string(path)
        .map_err(|err| AppError::Io(format!("cannot read {}: {err}", path.display())))?;
    let document = parse_document(kind, &text)?;
    info!(
        kind = kind.as_str(),
        path = %path.display(),
        fingerprint = %document.fingerprint,
        "document loaded"
    );
    Ok(document)
}
