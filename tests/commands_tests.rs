mod common;

use common::{first_table, fixture, fixture_path};
use designer_lib::{
    commands::{
        documents::{export_markdown, export_markdown_file, open_document, open_document_file},
        navigation::{click_section, get_details, get_outline, select_section, toggle_section},
        sources::{close_sources, open_sources, select_source},
        status::set_requirement_status,
        SourceTarget, ViewerSession,
    },
    core::{config::ViewerConfig, errors::AppError, types::DocumentKind},
    navigation::DetailsView,
    sections::EmptySectionPolicy,
};

fn session() -> ViewerSession {
    ViewerSession::new(ViewerConfig::default())
}

#[test]
fn open_document_summarizes_and_selects_first_leaf() {
    let mut session = session();
    let response = open_document(&mut session, "brd", &fixture("brd.json")).expect("open brd");

    assert!(response.reset);
    assert_eq!(response.active_section_id, "business-units-teams");
    assert_eq!(response.document.kind, DocumentKind::Brd);
    assert_eq!(response.document.title, "Business Requirements Document");
    assert_eq!(response.document.section_count, 4);
    assert_eq!(response.document.reference_count, 3);
}

#[test]
fn open_document_rejects_bad_input() {
    let mut session = session();

    let err = open_document(&mut session, "invoice", "{}").expect_err("unknown kind");
    assert!(matches!(err, AppError::InvalidInput(_)));
    let err = open_document(&mut session, "brd", "   ").expect_err("empty body");
    assert!(matches!(err, AppError::InvalidInput(_)));
    let err = open_document(&mut session, "brd", "[1, 2]").expect_err("not an object");
    assert!(matches!(err, AppError::InvalidDocument(_)));
    let err = open_document(&mut session, "brd", "{ nope").expect_err("not json");
    assert!(matches!(err, AppError::InvalidDocument(_)));
    assert!(session.document().is_none());
}

#[test]
fn commands_without_a_document_report_no_document() {
    let mut session = session();

    assert!(matches!(
        click_section(&mut session, "requirements"),
        Err(AppError::NoDocument)
    ));
    assert!(matches!(export_markdown(&session), Err(AppError::NoDocument)));
    assert!(matches!(
        open_sources(&mut session, SourceTarget::Section("requirements".to_string())),
        Err(AppError::NoDocument)
    ));
    let details = get_details(&session).expect("details never fail");
    assert!(details.details.is_empty());
    assert!(get_outline(&session).expect("outline").rows.is_empty());
}

#[test]
fn new_document_resets_state_but_same_content_keeps_it() {
    let mut session = session();
    open_document(&mut session, "brd", &fixture("brd.json")).expect("open brd");
    select_section(&mut session, "requirements").expect("select");
    let key = first_table(session.sections(), "requirements").rows[0]
        .record_key
        .as_str()
        .to_string();
    set_requirement_status(&mut session, key, "approved").expect("approve");
    open_sources(&mut session, SourceTarget::Section("requirements".to_string()))
        .expect("open sources");

    let same = open_document(&mut session, "brd", &fixture("brd.json")).expect("reopen");
    assert!(!same.reset);
    assert_eq!(same.active_section_id, "requirements");
    assert_eq!(session.requirement_statuses().len(), 1);
    assert!(session.source_viewer().is_some());

    let edited = fixture("brd.json").replace("Support SSO", "Support SSO and MFA");
    let changed = open_document(&mut session, "brd", &edited).expect("open edited");
    assert!(changed.reset);
    assert_eq!(changed.active_section_id, "business-units-teams");
    assert!(session.requirement_statuses().is_empty());
    assert!(session.source_viewer().is_none());
}

#[test]
fn click_toggles_groups_and_selects_leaves() {
    let mut session = session();
    open_document(&mut session, "sow", &fixture("sow.json")).expect("open sow");

    let toggled = click_section(&mut session, "overview").expect("toggle overview");
    assert_eq!(toggled.expanded, vec!["overview".to_string()]);
    assert_eq!(toggled.active_section_id, "project-overview");

    let selected = click_section(&mut session, "licenses").expect("select licenses");
    assert_eq!(selected.active_section_id, "licenses");
    assert_eq!(selected.expanded, vec!["overview".to_string()]);

    assert!(matches!(
        click_section(&mut session, "missing"),
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        select_section(&mut session, "overview"),
        Err(AppError::InvalidInput(_))
    ));
    assert!(matches!(
        toggle_section(&mut session, "licenses"),
        Err(AppError::InvalidInput(_))
    ));

    let DetailsView::Section { id, .. } = get_details(&session).expect("details").details else {
        panic!("expected section details");
    };
    assert_eq!(id, "licenses");
}

#[test]
fn empty_policy_override_comes_from_config() {
    let mut session = ViewerSession::new(ViewerConfig {
        empty_policy: Some(EmptySectionPolicy::ShowPlaceholder),
        ..ViewerConfig::default()
    });
    let response = open_document(&mut session, "raid", &fixture("raid.json")).expect("open raid");

    assert_eq!(response.document.section_count, 5);
    select_section(&mut session, "decisions").expect("placeholder is selectable");
}

#[test]
fn source_lists_open_select_and_close() {
    let mut session = session();
    open_document(&mut session, "brd", &fixture("brd.json")).expect("open brd");
    let key = first_table(session.sections(), "requirements").rows[0]
        .record_key
        .as_str()
        .to_string();

    let listing = open_sources(&mut session, SourceTarget::Record(key)).expect("row sources");
    let indicator = listing.indicator.expect("indicator");
    assert_eq!((indicator.total, indicator.high, indicator.medium), (2, 1, 1));
    assert_eq!(listing.references[1].file_name, "notes.txt");

    let selected = select_source(&mut session, 1).expect("select second");
    assert_eq!(selected.detail.confidence_percent, 70);
    assert!(matches!(
        select_source(&mut session, 9),
        Err(AppError::NotFound(_))
    ));

    assert!(close_sources(&mut session).expect("close").closed);
    assert!(!close_sources(&mut session).expect("close again").closed);
    assert!(matches!(
        select_source(&mut session, 0),
        Err(AppError::InvalidInput(_))
    ));
}

#[test]
fn sections_without_references_open_no_viewer() {
    let mut session = session();
    open_document(&mut session, "brd", &fixture("brd.json")).expect("open brd");

    let listing = open_sources(&mut session, SourceTarget::Section("current-state".to_string()))
        .expect("open empty sources");
    assert!(listing.indicator.is_none());
    assert!(listing.references.is_empty());
    assert!(session.source_viewer().is_none());

    assert!(matches!(
        open_sources(&mut session, SourceTarget::Record("r-missing".to_string())),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn loads_documents_from_disk() {
    let mut session = session();
    let response = open_document_file(&mut session, "meeting", &fixture_path("meeting.json"))
        .expect("open meeting file");
    assert_eq!(response.document.title, "Discovery Workshop");

    let err = open_document_file(&mut session, "meeting", &fixture_path("absent.json"))
        .expect_err("missing file");
    assert!(matches!(err, AppError::NotFound(_)));
}

#[test]
fn export_writes_markdown_with_status_column() {
    let mut session = session();
    open_document(&mut session, "brd", &fixture("brd.json")).expect("open brd");
    let key = first_table(session.sections(), "requirements").rows[1]
        .record_key
        .as_str()
        .to_string();
    set_requirement_status(&mut session, key, "rejected").expect("reject");

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("out").join("brd.md");
    let response = export_markdown_file(&session, &path).expect("export");
    let written = std::fs::read_to_string(&path).expect("read export");

    assert_eq!(written, response.markdown);
    assert!(written.starts_with("# Business Requirements Document\n\n## Business Units & Teams"));
    assert!(written.contains("| Type | Description | Acceptance Criteria | Created | Status |"));
    assert!(written.contains(
        "| Non-Functional | Pages load in under 2s | P95 below 2 seconds | Not set | Rejected |"
    ));
    assert!(!written.contains("## Personas"));
}
