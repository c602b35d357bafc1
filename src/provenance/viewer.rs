use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{confidence_percent, ConfidenceBand};
use crate::core::{
    errors::{AppError, AppResult},
    types::SourceReference,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SourceListItem {
    pub index: usize,
    pub file_name: String,
    pub page_section: String,
    pub quote_text: String,
    pub confidence_percent: i64,
    pub band: ConfidenceBand,
    pub color: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SourceDetail {
    pub file_name: String,
    pub page_section: String,
    pub quote_text: String,
    pub confidence: f64,
    pub confidence_percent: i64,
    pub band: ConfidenceBand,
    pub color: String,
}

impl From<&SourceReference> for SourceDetail {
    fn from(reference: &SourceReference) -> Self {
        let band = ConfidenceBand::of(reference.confidence);
        Self {
            file_name: reference.file_name.clone(),
            page_section: reference.page_section.clone(),
            quote_text: reference.quote_text.clone(),
            confidence: reference.confidence,
            confidence_percent: confidence_percent(reference.confidence),
            band,
            color: band.color().to_string(),
        }
    }
}

/// Detail view over one set of references. Selection lives only as long as
/// the viewer does.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceViewer {
    references: Vec<SourceReference>,
    active: Option<usize>,
}

impl SourceViewer {
    /// Returns `None` when there is nothing to show.
    pub fn open(references: Vec<SourceReference>) -> Option<Self> {
        if references.is_empty() {
            return None;
        }
        Some(Self {
            references,
            active: None,
        })
    }

    pub fn references(&self) -> &[SourceReference] {
        &self.references
    }

    pub fn heading(&self) -> String {
        format!("All References ({})", self.references.len())
    }

    pub fn items(&self) -> Vec<SourceListItem> {
        self.references
            .iter()
            .enumerate()
            .map(|(index, reference)| {
                let band = ConfidenceBand::of(reference.confidence);
                SourceListItem {
                    index,
                    file_name: reference.file_name.clone(),
                    page_section: reference.page_section.clone(),
                    quote_text: reference.quote_text.clone(),
                    confidence_percent: confidence_percent(reference.confidence),
                    band,
                    color: band.color().to_string(),
                    active: self.active == Some(index),
                }
            })
            .collect()
    }

    pub fn select(&mut self, index: usize) -> AppResult<SourceDetail> {
        let reference = self
            .references
            .get(index)
            .ok_or_else(|| AppError::NotFound(format!("source reference {index}")))?;
        self.active = Some(index);
        Ok(SourceDetail::from(reference))
    }

    pub fn clear_selection(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<SourceDetail> {
        self.active
            .and_then(|index| self.references.get(index))
            .map(SourceDetail::from)
    }
}
