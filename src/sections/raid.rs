use super::{
    columns, record_section, table::TableBuilder, BuildOptions, EmptySectionPolicy, Section,
};
use crate::documents::RaidDocument;

pub const RISKS_ISSUES_ID: &str = "risks-issues";

pub fn build(raid: &RaidDocument, policy: EmptySectionPolicy, options: &BuildOptions<'_>) -> Vec<Section> {
    [
        record_section(
            policy,
            (RISKS_ISSUES_ID, "Risks & Issues", "warning"),
            &raid.risks_issues,
            |records| {
                TableBuilder::new(&columns::risk_issue_columns())
                    .build(records)
                    .with_row_status(|key| options.risk_issue_row(key))
            },
        ),
        record_section(
            policy,
            ("action-items", "Action Items", "task_alt"),
            &raid.action_items,
            |records| TableBuilder::new(&columns::action_item_columns()).build(records),
        ),
        record_section(
            policy,
            ("decisions", "Decisions", "gavel"),
            &raid.decisions,
            |records| TableBuilder::new(&columns::decision_columns()).build(records),
        ),
        record_section(
            policy,
            ("dependencies", "Dependencies", "link"),
            &raid.dependencies,
            |records| TableBuilder::new(&columns::dependency_columns()).build(records),
        ),
        record_section(
            policy,
            ("pain-points", "Pain Points", "error"),
            &raid.pain_points,
            |records| TableBuilder::new(&columns::pain_point_columns()).build(records),
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}
