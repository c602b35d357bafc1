//! Meeting detail outline: five fixed leaves, each composed of the non-empty
//! extraction tables that belong to it.

use super::{
    columns, data_section,
    format::{display_text, format_datetime, DEFAULT_SEPARATOR},
    table::{TableBuilder, TableColumn, TableView},
    ContentBlock, EmptySectionPolicy, FieldEntry, Section, NO_DATA,
};
use crate::documents::{
    kinds::{MeetingExtractions, MeetingInfo},
    FieldValue, MeetingDocument, Record,
};

pub fn build(meeting: &MeetingDocument, policy: EmptySectionPolicy) -> Vec<Section> {
    let empty = MeetingExtractions::default();
    let extractions = meeting.extractions.as_ref().unwrap_or(&empty);

    let overview = data_section(
        policy,
        meeting.meeting.is_some(),
        || {
            Section::leaf(
                "meeting-overview",
                "Meeting Overview",
                "overview",
                overview_blocks(meeting.meeting.as_ref(), meeting.files.len()),
            )
        },
        || {
            Section::leaf(
                "meeting-overview",
                "Meeting Overview",
                "overview",
                vec![ContentBlock::empty("No meeting overview data available")],
            )
        },
    );

    let org_structure = vec![
        sub_table(
            "Business Units & Teams",
            &extractions.bu_teams,
            &columns::business_unit_columns(),
        ),
        sub_table("Personas", &extractions.personas, &columns::persona_columns()),
    ];
    let requirements = vec![
        sub_table(
            "Requirements",
            &extractions.requirements,
            &columns::requirement_columns(),
        ),
        sub_table(
            "Modules and Processes",
            &extractions.modules_processes,
            &columns::module_columns(),
        ),
        sub_table(
            "Pain Points",
            &extractions.pain_points,
            &columns::pain_point_columns(),
        ),
        sub_table(
            "Current State (As-is)",
            &extractions.current_state,
            &columns::state_columns(),
        ),
        sub_table(
            "Target State (To-be)",
            &extractions.target_state,
            &columns::state_columns(),
        ),
    ];
    let raidd = vec![
        sub_table(
            "Risks and Issues",
            &extractions.risks_issues,
            &columns::risk_issue_columns(),
        ),
        sub_table(
            "Action Items",
            &extractions.action_items,
            &columns::action_item_columns(),
        ),
        sub_table("Decisions", &extractions.decisions, &columns::decision_columns()),
        sub_table(
            "Dependencies",
            &extractions.dependencies,
            &columns::dependency_columns(),
        ),
    ];
    let data_systems = vec![
        sub_table(
            "Applications to be Integrated",
            &extractions.integrations,
            &columns::integration_columns(),
        ),
        sub_table(
            "Data Migration",
            &extractions.data_migration,
            &columns::data_migration_columns(),
        ),
        sub_table("Data Model", &extractions.data_model, &columns::data_model_columns()),
        sub_table(
            "List of Metadata names to be updated / upgraded",
            &extractions.metadata_updates,
            &columns::metadata_update_columns(),
        ),
    ];

    [
        overview,
        grouped(policy, ("org-structure", "Org structure", "corporate_fare"), org_structure),
        grouped(policy, ("requirements", "Requirements", "assignment"), requirements),
        grouped(policy, ("raidd", "RAIDD", "warning"), raidd),
        grouped(policy, ("data-systems", "Data & Systems", "storage"), data_systems),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn overview_blocks(info: Option<&MeetingInfo>, file_count: usize) -> Vec<ContentBlock> {
    let Some(info) = info else {
        return Vec::new();
    };
    let mut fields = vec![
        FieldEntry {
            label: "Date & Time".to_string(),
            value: format_datetime(info.meeting_datetime.as_ref().and_then(FieldValue::as_text)),
            icon: Some("schedule".to_string()),
        },
        FieldEntry {
            label: "Status".to_string(),
            value: display_text(info.status.as_ref(), DEFAULT_SEPARATOR),
            icon: Some("label".to_string()),
        },
    ];
    if info.stakeholders.is_some() {
        fields.push(FieldEntry {
            label: "Stakeholders".to_string(),
            value: display_text(info.stakeholders.as_ref(), ", "),
            icon: Some("group".to_string()),
        });
    }
    if file_count > 0 {
        fields.push(FieldEntry {
            label: "Files".to_string(),
            value: format!("{file_count} uploaded"),
            icon: Some("attach_file".to_string()),
        });
    }

    let mut blocks = vec![ContentBlock::Fields { fields }];
    if let Some(details) = info.meeting_details.as_ref() {
        blocks.push(ContentBlock::heading("Meeting Details"));
        blocks.push(ContentBlock::paragraph(display_text(
            Some(details),
            DEFAULT_SEPARATOR,
        )));
    }
    blocks
}

fn sub_table<R>(title: &str, records: &[Record<R>], columns: &[TableColumn<R>]) -> Option<TableView> {
    if records.is_empty() {
        return None;
    }
    Some(
        TableBuilder::new(columns)
            .title(title)
            .show_created(false)
            .build(records),
    )
}

fn grouped(
    policy: EmptySectionPolicy,
    (id, title, icon): (&str, &str, &str),
    tables: Vec<Option<TableView>>,
) -> Option<Section> {
    let blocks: Vec<ContentBlock> = tables
        .into_iter()
        .flatten()
        .map(ContentBlock::Table)
        .collect();
    data_section(
        policy,
        !blocks.is_empty(),
        || Section::leaf(id, title, icon, blocks),
        || Section::leaf(id, title, icon, vec![ContentBlock::empty(NO_DATA)]),
    )
}
