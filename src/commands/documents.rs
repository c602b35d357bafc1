use std::path::Path;

use tracing::info;

use super::ViewerSession;
use crate::{
    core::{
        errors::{AppError, AppResult},
        types::{DocumentKind, ExportMarkdownResponse, OpenDocumentResponse},
    },
    documents::{load_document, parse_document, Document},
    render,
};

fn parsed_kind(kind: &str) -> AppResult<DocumentKind> {
    DocumentKind::parse(kind)
        .ok_or_else(|| AppError::InvalidInput(format!("unknown document kind: {kind}")))
}

fn install(session: &mut ViewerSession, document: Document) -> AppResult<OpenDocumentResponse> {
    let reset = session.load(document);
    Ok(OpenDocumentResponse {
        document: session.summary()?,
        active_section_id: session.navigation.active_section_id.clone(),
        reset,
    })
}

pub fn open_document(
    session: &mut ViewerSession,
    kind: &str,
    json: &str,
) -> AppResult<OpenDocumentResponse> {
    let kind = parsed_kind(kind)?;
    if json.trim().is_empty() {
        return Err(AppError::InvalidInput("document body cannot be empty".to_string()));
    }
    let document = parse_document(kind, json)?;
    install(session, document)
}

pub fn open_document_file(
    session: &mut ViewerSession,
    kind: &str,
    file_path: &Path,
) -> AppResult<OpenDocumentResponse> {
    let kind = parsed_kind(kind)?;
    let document = load_document(kind, file_path)?;
    install(session, document)
}

pub fn export_markdown(session: &ViewerSession) -> AppResult<ExportMarkdownResponse> {
    let document = session.require_document()?;
    let markdown = render::markdown(&document.title(), &session.sections);
    info!(
        kind = document.kind.as_str(),
        bytes = markdown.len(),
        "document exported as markdown"
    );
    Ok(ExportMarkdownResponse { markdown })
}

/// Writes the markdown export to `export_path`, creating parent directories.
pub fn export_markdown_file(
    session: &ViewerSession,
    export_path: &Path,
) -> AppResult<ExportMarkdownResponse> {
    let response = export_markdown(session)?;
    if let Some(parent) = export_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|err| AppError::Io(err.to_string()))?;
    }
    std::fs::write(export_path, &response.markdown)?;
    Ok(response)
}
