use super::{
    columns, record_section, table::TableBuilder, BuildOptions, EmptySectionPolicy, Section,
};
use crate::documents::BrdDocument;

pub const REQUIREMENTS_ID: &str = "requirements";

pub fn build(brd: &BrdDocument, policy: EmptySectionPolicy, options: &BuildOptions<'_>) -> Vec<Section> {
    [
        record_section(
            policy,
            ("business-units-teams", "Business Units & Teams", "corporate_fare"),
            &brd.business_units_teams,
            |records| TableBuilder::new(&columns::business_unit_columns()).build(records),
        ),
        record_section(
            policy,
            ("modules-processes", "Modules & Processes", "widgets"),
            &brd.modules_processes,
            |records| TableBuilder::new(&columns::module_columns()).build(records),
        ),
        record_section(
            policy,
            ("license-list", "License List", "license"),
            &brd.license_list,
            |records| TableBuilder::new(&columns::license_columns()).build(records),
        ),
        record_section(
            policy,
            ("personas", "Personas", "account_circle"),
            &brd.personas,
            |records| TableBuilder::new(&columns::persona_columns()).build(records),
        ),
        record_section(
            policy,
            (REQUIREMENTS_ID, "Requirements", "assignment"),
            &brd.requirements,
            |records| {
                TableBuilder::new(&columns::requirement_columns())
                    .build(records)
                    .with_row_status(|key| options.requirement_row(key))
            },
        ),
        record_section(
            policy,
            ("current-state", "Current State (As-Is)", "history"),
            &brd.current_state,
            |records| TableBuilder::new(&columns::state_columns()).build(records),
        ),
        record_section(
            policy,
            ("target-state", "Target State (To-Be)", "flag"),
            &brd.target_state,
            |records| TableBuilder::new(&columns::state_columns()).build(records),
        ),
        record_section(
            policy,
            ("applications-integrate", "Applications to Integrate", "hub"),
            &brd.applications_to_integrate,
            |records| TableBuilder::new(&columns::integration_columns()).build(records),
        ),
        record_section(
            policy,
            ("data-migration", "Data Migration", "cloud_sync"),
            &brd.data_migration,
            |records| TableBuilder::new(&columns::data_migration_columns()).build(records),
        ),
        record_section(
            policy,
            ("data-model", "Data Model", "table_chart"),
            &brd.data_model,
            |records| TableBuilder::new(&columns::data_model_columns()).build(records),
        ),
        record_section(
            policy,
            ("metadata-updates", "Metadata Updates", "code"),
            &brd.metadata_updates,
            |records| TableBuilder::new(&columns::metadata_update_columns()).build(records),
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}
