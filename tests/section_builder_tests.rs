mod common;

use common::{column, document, first_table, ids, load, section};
use designer_lib::{
    core::types::DocumentKind,
    sections::{
        build_sections, count_leaves, BuildOptions, ContentBlock, EmptySectionPolicy, SectionBody,
        NO_DATA,
    },
};
use serde_json::json;

fn build(doc: &designer_lib::documents::Document) -> Vec<designer_lib::sections::Section> {
    build_sections(Some(doc), &BuildOptions::default())
}

#[test]
fn missing_document_builds_no_sections() {
    assert!(build_sections(None, &BuildOptions::default()).is_empty());
}

#[test]
fn requirements_only_document_emits_single_table_section() {
    let raw = json!({
        "requirements": [{
            "requirement_type": "Functional",
            "description_md": "Support SSO",
            "acceptance_criteria": ["Login via SAML", "Session timeout 30min"]
        }],
        "risks_issues": []
    });

    let brd = build(&document(DocumentKind::Brd, raw.clone()));
    assert_eq!(ids(&brd), vec!["requirements"]);
    let table = first_table(&brd, "requirements");
    assert_eq!(table.rows.len(), 1);
    assert_eq!(column(table, "requirement_type"), vec!["Functional"]);
    assert_eq!(column(table, "description_md"), vec!["Support SSO"]);
    assert_eq!(
        column(table, "acceptance_criteria"),
        vec!["Login via SAML; Session timeout 30min"]
    );

    let raid = build(&document(DocumentKind::Raid, raw));
    assert!(raid.is_empty());
}

#[test]
fn brd_skips_empty_arrays_and_keeps_author_order() {
    let sections = build(&load(DocumentKind::Brd, "brd.json"));

    assert_eq!(
        ids(&sections),
        vec!["business-units-teams", "license-list", "requirements", "current-state"]
    );
    let requirements = first_table(&sections, "requirements");
    assert_eq!(
        column(requirements, "description_md"),
        vec!["Support SSO", "Pages load in under 2s"]
    );
    assert_eq!(
        column(requirements, "acceptance_criteria"),
        vec!["Login via SAML; Session timeout 30min", "P95 below 2 seconds"]
    );
    assert_eq!(
        column(requirements, "created_at"),
        vec!["Mar 18, 2024, 09:05 AM", "Not set"]
    );

    let unset = requirements.rows[1].cell("created_at").expect("created cell");
    assert!(unset.value.is_missing());
    assert_eq!(unset.display, "Not set");
    let created = requirements.rows[0].cell("created_at").expect("created cell");
    assert!(!created.value.is_missing());

    let units = first_table(&sections, "business-units-teams");
    assert_eq!(column(units, "teams"), vec!["Inside Sales, Field Sales"]);
    assert_eq!(units.rows[0].sources.as_ref().map(|i| i.total), Some(1));
}

#[test]
fn brd_requirement_rows_start_pending_with_three_actions() {
    let sections = build(&load(DocumentKind::Brd, "brd.json"));
    let requirements = first_table(&sections, "requirements");

    for row in &requirements.rows {
        let status = row.status.as_ref().expect("requirement rows carry status");
        assert_eq!(status.state, "pending");
        let targets: Vec<&str> = status.actions.iter().map(|a| a.target.as_str()).collect();
        assert_eq!(targets, vec!["approved", "review", "rejected"]);
    }
    assert!(!first_table(&sections, "license-list").has_status());
}

#[test]
fn placeholder_policy_keeps_every_brd_section() {
    let doc = load(DocumentKind::Brd, "brd.json");
    let sections = build_sections(
        Some(&doc),
        &BuildOptions {
            empty_policy: Some(EmptySectionPolicy::ShowPlaceholder),
            ..BuildOptions::default()
        },
    );

    assert_eq!(sections.len(), 11);
    assert_eq!(
        section(&sections, "modules-processes").content(),
        Some(&[ContentBlock::empty(NO_DATA)][..])
    );
}

#[test]
fn raid_risks_carry_status_but_other_tables_do_not() {
    let sections = build(&load(DocumentKind::Raid, "raid.json"));

    assert_eq!(ids(&sections), vec!["risks-issues", "action-items", "pain-points"]);
    let risks = first_table(&sections, "risks-issues");
    assert_eq!(column(risks, "type"), vec!["Risk", "Issue"]);
    assert_eq!(column(risks, "mitigation_md"), vec!["Cleansing sprint", "-"]);
    let targets: Vec<&str> = risks.rows[0]
        .status
        .as_ref()
        .expect("risk status")
        .actions
        .iter()
        .map(|a| a.target.as_str())
        .collect();
    assert_eq!(targets, vec!["resolved", "review", "ignored"]);
    assert!(!first_table(&sections, "action-items").has_status());
}

#[test]
fn malformed_arrays_are_normalized_not_fatal() {
    let doc = document(
        DocumentKind::Brd,
        json!({
            "requirements": "not a list",
            "personas": [1, {"persona_name": "Admin", "responsibilities": "Setup"}, null]
        }),
    );
    let sections = build(&doc);

    assert_eq!(ids(&sections), vec!["personas"]);
    let personas = first_table(&sections, "personas");
    assert_eq!(column(personas, "persona_name"), vec!["Admin"]);
    assert_eq!(column(personas, "responsibilities"), vec!["Setup"]);
    assert_eq!(column(personas, "primary_modules"), vec!["-"]);
}

#[test]
fn meeting_emits_fixed_leaves_with_placeholders() {
    let sections = build(&load(DocumentKind::Meeting, "meeting.json"));

    assert_eq!(
        ids(&sections),
        vec!["meeting-overview", "org-structure", "requirements", "raidd", "data-systems"]
    );
    assert_eq!(
        section(&sections, "raidd").content(),
        Some(&[ContentBlock::empty(NO_DATA)][..])
    );

    let org = section(&sections, "org-structure");
    let titles: Vec<Option<&str>> = org.tables().map(|t| t.title.as_deref()).collect();
    assert_eq!(titles, vec![Some("Business Units & Teams")]);
    let keys: Vec<&str> = org
        .tables()
        .next()
        .expect("table")
        .columns
        .iter()
        .map(|c| c.key.as_str())
        .collect();
    assert_eq!(keys, vec!["business_unit", "teams", "notes_md"]);
}

#[test]
fn meeting_overview_lists_meeting_facts() {
    let sections = build(&load(DocumentKind::Meeting, "meeting.json"));
    let blocks = section(&sections, "meeting-overview")
        .content()
        .expect("overview content");

    let ContentBlock::Fields { fields } = &blocks[0] else {
        panic!("expected fields block, got {:?}", blocks[0]);
    };
    let pairs: Vec<(&str, &str)> = fields
        .iter()
        .map(|f| (f.label.as_str(), f.value.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("Date & Time", "Feb 1, 2024, 02:00 PM"),
            ("Status", "completed"),
            ("Stakeholders", "Ana, Raj"),
            ("Files", "2 uploaded"),
        ]
    );
    assert_eq!(blocks[1], ContentBlock::heading("Meeting Details"));
}

#[test]
fn meeting_skip_policy_drops_empty_groups() {
    let doc = load(DocumentKind::Meeting, "meeting.json");
    let sections = build_sections(
        Some(&doc),
        &BuildOptions {
            empty_policy: Some(EmptySectionPolicy::Skip),
            ..BuildOptions::default()
        },
    );

    assert_eq!(
        ids(&sections),
        vec!["meeting-overview", "org-structure", "requirements"]
    );
}

#[test]
fn sow_overview_group_has_fixed_children() {
    let sections = build(&load(DocumentKind::Sow, "sow.json"));

    assert_eq!(
        ids(&sections),
        vec!["overview", "modules", "licenses", "stakeholders", "validation"]
    );
    let overview = section(&sections, "overview");
    assert!(overview.is_branch());
    assert_eq!(
        ids(overview.children()),
        vec!["project-overview", "primary-objective", "out-of-scope", "assumptions"]
    );
    assert_eq!(
        section(&sections, "out-of-scope").content(),
        Some(&[ContentBlock::empty("Out of scope items not defined.")][..])
    );
    let project = section(&sections, "project-overview")
        .content()
        .expect("project overview content");
    assert!(project.contains(&ContentBlock::paragraph(
        "Scope of implementation details not available."
    )));
    assert!(project.contains(&ContentBlock::paragraph(
        "Regional distributor of medical supplies."
    )));
    assert_eq!(count_leaves(&sections), 8);
}

#[test]
fn sow_lists_render_strings_and_objects() {
    let sections = build(&load(DocumentKind::Sow, "sow.json"));

    assert_eq!(
        section(&sections, "licenses").content(),
        Some(
            &[ContentBlock::List {
                items: vec![
                    "Sales Cloud: 40".to_string(),
                    "Platform Starter".to_string(),
                    "License: 1".to_string(),
                ]
            }][..]
        )
    );
    assert_eq!(
        section(&sections, "assumptions").content(),
        Some(
            &[ContentBlock::List {
                items: vec![
                    "Client provides SMEs".to_string(),
                    "Data is exported by client".to_string(),
                ]
            }][..]
        )
    );
    let modules = section(&sections, "modules").content().expect("modules");
    assert_eq!(
        modules.last(),
        Some(&ContentBlock::List {
            items: vec!["Lead management".to_string(), "Quoting".to_string()]
        })
    );
}

#[test]
fn sow_skip_policy_keeps_group_while_any_child_survives() {
    let doc = document(
        DocumentKind::Sow,
        json!({"scope_summary": {"primary_objective": "One CRM"}}),
    );
    let sections = build_sections(
        Some(&doc),
        &BuildOptions {
            empty_policy: Some(EmptySectionPolicy::Skip),
            ..BuildOptions::default()
        },
    );

    assert_eq!(ids(&sections), vec!["overview"]);
    assert_eq!(ids(sections[0].children()), vec!["primary-objective"]);

    let bare = build_sections(
        Some(&document(DocumentKind::Sow, json!({}))),
        &BuildOptions {
            empty_policy: Some(EmptySectionPolicy::Skip),
            ..BuildOptions::default()
        },
    );
    assert!(bare.is_empty());
}

#[test]
fn dashboard_always_shows_six_summary_cards() {
    let sections = build(&load(DocumentKind::Dashboard, "dashboard.json"));

    assert_eq!(
        ids(&sections),
        vec!["summary", "recent-meetings", "upcoming-meetings", "recent-activity"]
    );
    let Some([ContentBlock::Cards { cards }]) = section(&sections, "summary").content() else {
        panic!("expected summary cards");
    };
    let counts: Vec<(&str, u64)> = cards.iter().map(|c| (c.title.as_str(), c.count)).collect();
    assert_eq!(
        counts,
        vec![
            ("Meetings", 4),
            ("Requirements", 12),
            ("Risks & Issues", 0),
            ("Action Items", 0),
            ("Decisions", 0),
            ("Dependencies", 0),
        ]
    );
    assert_eq!(
        section(&sections, "upcoming-meetings").content(),
        Some(&[ContentBlock::empty("No upcoming meetings")][..])
    );
    let recent = first_table(&sections, "recent-meetings");
    assert_eq!(column(recent, "meeting_datetime"), vec!["Feb 1, 2024, 02:00 PM"]);
    assert!(matches!(
        section(&sections, "recent-activity").body,
        SectionBody::Content(_)
    ));
}

#[test]
fn absent_datetimes_read_not_set_like_created() {
    let doc = document(
        DocumentKind::Dashboard,
        json!({"recent_meetings": [
            {"meeting_name": "Sync"},
            {"meeting_name": "Kickoff", "meeting_datetime": ""}
        ]}),
    );
    let sections = build(&doc);
    let recent = first_table(&sections, "recent-meetings");

    assert_eq!(column(recent, "meeting_datetime"), vec!["Not set", "Not set"]);
    for row in &recent.rows {
        let cell = row.cell("meeting_datetime").expect("datetime cell");
        assert!(cell.value.is_missing());
    }
}
