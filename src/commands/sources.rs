use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ViewerSession;
use crate::{
    core::{
        errors::{AppError, AppResult},
        types::{CloseSourcesResponse, OpenSourcesResponse, RecordKey, SelectSourceResponse},
    },
    navigation::find_section,
    provenance::{build_indicator, references_for_section, SourceViewer},
};

/// What a source indicator was clicked on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum SourceTarget {
    Section(String),
    Record(String),
}

pub fn open_sources(
    session: &mut ViewerSession,
    target: SourceTarget,
) -> AppResult<OpenSourcesResponse> {
    let document = session.require_document()?;
    let references = match &target {
        SourceTarget::Section(id) => {
            if find_section(&session.sections, id).is_none() {
                return Err(AppError::NotFound(format!("section {id}")));
            }
            references_for_section(document, id, session.config.reference_depth_limit)
        }
        SourceTarget::Record(key) => session
            .find_row(&RecordKey(key.clone()))
            .map(|row| row.references.clone())
            .ok_or_else(|| AppError::NotFound(format!("record {key}")))?,
    };
    debug!(?target, count = references.len(), "source list opened");

    let indicator = build_indicator(&references);
    session.sources = SourceViewer::open(references);
    Ok(OpenSourcesResponse {
        indicator,
        references: session
            .sources
            .as_ref()
            .map(SourceViewer::items)
            .unwrap_or_default(),
    })
}

pub fn select_source(session: &mut ViewerSession, index: usize) -> AppResult<SelectSourceResponse> {
    let viewer = session
        .sources
        .as_mut()
        .ok_or_else(|| AppError::InvalidInput("no source list is open".to_string()))?;
    let detail = viewer.select(index)?;
    Ok(SelectSourceResponse { detail })
}

/// Closes the source list, discarding its selection.
pub fn close_sources(session: &mut ViewerSession) -> AppResult<CloseSourcesResponse> {
    let closed = session.sources.take().is_some();
    Ok(CloseSourcesResponse { closed })
}
