//! Column descriptors shared by the BRD, RAID and meeting builders.

use super::table::TableColumn;
use crate::documents::records::{
    ActionItem, BusinessUnitTeam, DataMigration, DataModelEntity, Decision, Dependency,
    Integration, License, MetadataUpdate, ModuleProcess, PainPoint, Persona, Requirement,
    RiskIssue, StateDescription,
};

pub fn business_unit_columns() -> Vec<TableColumn<BusinessUnitTeam>> {
    vec![
        TableColumn::new("business_unit", "Business Unit", |r: &BusinessUnitTeam| {
            r.business_unit.as_ref()
        }),
        TableColumn::new("teams", "Teams", |r: &BusinessUnitTeam| r.teams.as_ref()).joined(", "),
        TableColumn::new("notes_md", "Notes", |r: &BusinessUnitTeam| r.notes_md.as_ref()),
    ]
}

pub fn persona_columns() -> Vec<TableColumn<Persona>> {
    vec![
        TableColumn::new("persona_name", "Persona", |r: &Persona| r.persona_name.as_ref()),
        TableColumn::new("responsibilities", "Responsibilities", |r: &Persona| {
            r.responsibilities.as_ref()
        })
        .joined(", "),
        TableColumn::new("primary_modules", "Primary Modules", |r: &Persona| {
            r.primary_modules.as_ref()
        })
        .joined(", "),
    ]
}

pub fn requirement_columns() -> Vec<TableColumn<Requirement>> {
    vec![
        TableColumn::new("requirement_type", "Type", |r: &Requirement| {
            r.requirement_type.as_ref()
        })
        .class("requirement-type-cell"),
        TableColumn::new("description_md", "Description", |r: &Requirement| {
            r.description_md.as_ref()
        })
        .class("requirement-description-cell"),
        TableColumn::new("acceptance_criteria", "Acceptance Criteria", |r: &Requirement| {
            r.acceptance_criteria.as_ref()
        })
        .joined("; "),
    ]
}

pub fn module_columns() -> Vec<TableColumn<ModuleProcess>> {
    vec![
        TableColumn::new("module_name", "Module", |r: &ModuleProcess| r.module_name.as_ref()),
        TableColumn::new("processes", "Processes", |r: &ModuleProcess| r.processes.as_ref())
            .joined(", "),
        TableColumn::new("scope_tag", "Scope", |r: &ModuleProcess| r.scope_tag.as_ref()),
        TableColumn::new("notes_md", "Notes", |r: &ModuleProcess| r.notes_md.as_ref()),
    ]
}

pub fn license_columns() -> Vec<TableColumn<License>> {
    vec![
        TableColumn::new("license_type", "License Type", |r: &License| r.license_type.as_ref()),
        TableColumn::new("count", "Count", |r: &License| r.count.as_ref()),
        TableColumn::new("allocation_md", "Allocation", |r: &License| r.allocation_md.as_ref()),
        TableColumn::new("notes_md", "Notes", |r: &License| r.notes_md.as_ref()),
    ]
}

pub fn pain_point_columns() -> Vec<TableColumn<PainPoint>> {
    vec![
        TableColumn::new("pain_point_md", "Pain Point", |r: &PainPoint| r.pain_point_md.as_ref()),
        TableColumn::new("affected_bu_md", "Affected BU", |r: &PainPoint| {
            r.affected_bu_md.as_ref()
        }),
        TableColumn::new("impact_md", "Impact", |r: &PainPoint| r.impact_md.as_ref()),
    ]
}

pub fn state_columns() -> Vec<TableColumn<StateDescription>> {
    vec![TableColumn::new("description_md", "Description", |r: &StateDescription| {
        r.description_md.as_ref()
    })]
}

pub fn risk_issue_columns() -> Vec<TableColumn<RiskIssue>> {
    vec![
        TableColumn::new("type", "Type", |r: &RiskIssue| r.kind.as_ref()).class("risk-type"),
        TableColumn::new("description_md", "Description", |r: &RiskIssue| {
            r.description_md.as_ref()
        }),
        TableColumn::new("impact_md", "Impact", |r: &RiskIssue| r.impact_md.as_ref()),
        TableColumn::new("mitigation_md", "Mitigation", |r: &RiskIssue| {
            r.mitigation_md.as_ref()
        }),
        TableColumn::new("owner_md", "Owner", |r: &RiskIssue| r.owner_md.as_ref()),
        TableColumn::new("due_date", "Due Date", |r: &RiskIssue| r.due_date.as_ref()),
    ]
}

pub fn action_item_columns() -> Vec<TableColumn<ActionItem>> {
    vec![
        TableColumn::new("task_md", "Task", |r: &ActionItem| r.task_md.as_ref()),
        TableColumn::new("item_status", "Status", |r: &ActionItem| r.item_status.as_ref()),
        TableColumn::new("owner_md", "Owner", |r: &ActionItem| r.owner_md.as_ref()),
        TableColumn::new("due_date", "Due Date", |r: &ActionItem| r.due_date.as_ref()),
    ]
}

pub fn decision_columns() -> Vec<TableColumn<Decision>> {
    vec![
        TableColumn::new("decision_md", "Decision", |r: &Decision| r.decision_md.as_ref()),
        TableColumn::new("rationale_md", "Rationale", |r: &Decision| r.rationale_md.as_ref()),
        TableColumn::new("decided_on", "Decided On", |r: &Decision| r.decided_on.as_ref()),
        TableColumn::new("approver_md", "Approver", |r: &Decision| r.approver_md.as_ref()),
    ]
}

pub fn dependency_columns() -> Vec<TableColumn<Dependency>> {
    vec![
        TableColumn::new("description_md", "Description", |r: &Dependency| {
            r.description_md.as_ref()
        }),
        TableColumn::new("type", "Type", |r: &Dependency| r.kind.as_ref()),
        TableColumn::new("depends_on_md", "Depends On", |r: &Dependency| {
            r.depends_on_md.as_ref()
        }),
        TableColumn::new("owner_md", "Owner", |r: &Dependency| r.owner_md.as_ref()),
    ]
}

pub fn integration_columns() -> Vec<TableColumn<Integration>> {
    vec![
        TableColumn::new("application_name", "Application", |r: &Integration| {
            r.application_name.as_ref()
        }),
        TableColumn::new("purpose_md", "Purpose", |r: &Integration| r.purpose_md.as_ref()),
        TableColumn::new("integration_type", "Type", |r: &Integration| {
            r.integration_type.as_ref()
        }),
        TableColumn::new("directionality", "Directionality", |r: &Integration| {
            r.directionality.as_ref()
        }),
        TableColumn::new("notes_md", "Notes", |r: &Integration| r.notes_md.as_ref()),
    ]
}

pub fn data_migration_columns() -> Vec<TableColumn<DataMigration>> {
    vec![
        TableColumn::new("source_md", "Source", |r: &DataMigration| r.source_md.as_ref()),
        TableColumn::new("mapping_notes_md", "Mapping Notes", |r: &DataMigration| {
            r.mapping_notes_md.as_ref()
        }),
        TableColumn::new("cleansing_rules_md", "Cleansing Rules", |r: &DataMigration| {
            r.cleansing_rules_md.as_ref()
        }),
        TableColumn::new("tools_md", "Tools", |r: &DataMigration| r.tools_md.as_ref()),
    ]
}

pub fn data_model_columns() -> Vec<TableColumn<DataModelEntity>> {
    vec![
        TableColumn::new("entity_name", "Entity", |r: &DataModelEntity| r.entity_name.as_ref()),
        TableColumn::new("entity_type", "Type", |r: &DataModelEntity| r.entity_type.as_ref()),
        TableColumn::new("key_fields", "Key Fields", |r: &DataModelEntity| {
            r.key_fields.as_ref()
        })
        .joined(", "),
        TableColumn::new("relationships_md", "Relationships", |r: &DataModelEntity| {
            r.relationships_md.as_ref()
        }),
    ]
}

pub fn metadata_update_columns() -> Vec<TableColumn<MetadataUpdate>> {
    vec![
        TableColumn::new("component_type", "Component Type", |r: &MetadataUpdate| {
            r.component_type.as_ref()
        }),
        TableColumn::new("api_name_md", "API Name", |r: &MetadataUpdate| r.api_name_md.as_ref()),
        TableColumn::new("change_type", "Change Type", |r: &MetadataUpdate| {
            r.change_type.as_ref()
        }),
        TableColumn::new("scope_md", "Scope", |r: &MetadataUpdate| r.scope_md.as_ref()),
    ]
}
