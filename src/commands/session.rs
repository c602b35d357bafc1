use tracing::{debug, info};

use crate::{
    core::{
        config::ViewerConfig,
        errors::{AppError, AppResult},
        types::{DocumentSummary, RecordKey},
    },
    documents::{Document, DocumentPayload},
    navigation::NavigationState,
    provenance::{extract_references_with_limit, SourceViewer},
    sections::{
        build_sections, count_leaves, count_sections,
        status::{RequirementStatus, RiskIssueStatus, StatusOverlay},
        table::TableRow,
        BuildOptions, Section,
    },
};

/// Viewer state for one open document: the built outline, navigation, the
/// triage overlays and the source list, if one is open.
#[derive(Debug, Default)]
pub struct ViewerSession {
    pub(crate) config: ViewerConfig,
    pub(crate) document: Option<Document>,
    pub(crate) sections: Vec<Section>,
    pub(crate) navigation: NavigationState,
    pub(crate) requirement_statuses: StatusOverlay<RequirementStatus>,
    pub(crate) risk_issue_statuses: StatusOverlay<RiskIssueStatus>,
    pub(crate) sources: Option<SourceViewer>,
}

impl ViewerSession {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn requirement_statuses(&self) -> &StatusOverlay<RequirementStatus> {
        &self.requirement_statuses
    }

    pub fn risk_issue_statuses(&self) -> &StatusOverlay<RiskIssueStatus> {
        &self.risk_issue_statuses
    }

    pub fn source_viewer(&self) -> Option<&SourceViewer> {
        self.sources.as_ref()
    }

    pub(crate) fn require_document(&self) -> AppResult<&Document> {
        self.document.as_ref().ok_or(AppError::NoDocument)
    }

    /// Installs `document`. A document with a new fingerprint discards
    /// navigation, overlays and the open source list; reloading the same
    /// content keeps them. Returns whether state was reset.
    pub fn load(&mut self, document: Document) -> bool {
        let reset = self
            .document
            .as_ref()
            .map_or(true, |current| current.fingerprint != document.fingerprint);
        if reset {
            self.requirement_statuses.clear();
            self.risk_issue_statuses.clear();
            self.sources = None;
        }
        self.document = Some(document);
        self.rebuild();
        if reset {
            self.navigation = NavigationState::for_sections(&self.sections);
            info!(
                active = %self.navigation.active_section_id,
                sections = self.sections.len(),
                "viewer state reset for new document"
            );
        }
        reset
    }

    pub fn rebuild(&mut self) {
        let options = BuildOptions {
            empty_policy: self.config.empty_policy,
            requirement_statuses: Some(&self.requirement_statuses),
            risk_issue_statuses: Some(&self.risk_issue_statuses),
        };
        self.sections = build_sections(self.document.as_ref(), &options);
        debug!(sections = self.sections.len(), "outline rebuilt");
    }

    pub fn summary(&self) -> AppResult<DocumentSummary> {
        let document = self.require_document()?;
        Ok(DocumentSummary {
            kind: document.kind,
            title: document.title(),
            fingerprint: document.fingerprint.clone(),
            section_count: count_sections(&self.sections),
            leaf_count: count_leaves(&self.sections),
            reference_count: extract_references_with_limit(
                &document.raw,
                self.config.reference_depth_limit,
            )
            .len(),
        })
    }

    /// Finds a table row by record key anywhere in the outline.
    pub fn find_row(&self, key: &RecordKey) -> Option<&TableRow> {
        fn walk<'a>(sections: &'a [Section], key: &RecordKey) -> Option<&'a TableRow> {
            sections.iter().find_map(|section| {
                section
                    .tables()
                    .flat_map(|table| table.rows.iter())
                    .find(|row| &row.record_key == key)
                    .or_else(|| walk(section.children(), key))
            })
        }
        walk(&self.sections, key)
    }

    /// Whether `key` names a requirement of the open BRD.
    pub(crate) fn has_requirement(&self, key: &RecordKey) -> AppResult<bool> {
        match &self.require_document()?.payload {
            DocumentPayload::Brd(brd) => Ok(brd.requirements.iter().any(|r| &r.key == key)),
            _ => Err(AppError::InvalidInput(
                "requirement status applies to BRD documents only".to_string(),
            )),
        }
    }

    /// Whether `key` names a risk or issue of the open RAID log.
    pub(crate) fn has_risk_issue(&self, key: &RecordKey) -> AppResult<bool> {
        match &self.require_document()?.payload {
            DocumentPayload::Raid(raid) => Ok(raid.risks_issues.iter().any(|r| &r.key == key)),
            _ => Err(AppError::InvalidInput(
                "risk/issue status applies to RAID documents only".to_string(),
            )),
        }
    }
}
