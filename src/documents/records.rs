use serde::{Deserialize, Serialize};

use super::value::FieldValue;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessUnitTeam {
    pub business_unit: Option<FieldValue>,
    pub teams: Option<FieldValue>,
    pub notes_md: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleProcess {
    pub module_name: Option<FieldValue>,
    pub processes: Option<FieldValue>,
    pub scope_tag: Option<FieldValue>,
    pub notes_md: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct License {
    pub license_type: Option<FieldValue>,
    pub count: Option<FieldValue>,
    pub allocation_md: Option<FieldValue>,
    pub notes_md: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Persona {
    pub persona_name: Option<FieldValue>,
    pub responsibilities: Option<FieldValue>,
    pub primary_modules: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Requirement {
    pub requirement_type: Option<FieldValue>,
    pub description_md: Option<FieldValue>,
    pub acceptance_criteria: Option<FieldValue>,
}

/// As-is / to-be state statements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateDescription {
    pub description_md: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Integration {
    pub application_name: Option<FieldValue>,
    pub purpose_md: Option<FieldValue>,
    pub integration_type: Option<FieldValue>,
    pub directionality: Option<FieldValue>,
    pub notes_md: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataMigration {
    pub source_md: Option<FieldValue>,
    pub mapping_notes_md: Option<FieldValue>,
    pub cleansing_rules_md: Option<FieldValue>,
    pub tools_md: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataModelEntity {
    pub entity_name: Option<FieldValue>,
    pub entity_type: Option<FieldValue>,
    pub key_fields: Option<FieldValue>,
    pub relationships_md: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataUpdate {
    pub component_type: Option<FieldValue>,
    pub api_name_md: Option<FieldValue>,
    pub change_type: Option<FieldValue>,
    pub scope_md: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskIssue {
    #[serde(rename = "type")]
    pub kind: Option<FieldValue>,
    pub description_md: Option<FieldValue>,
    pub impact_md: Option<FieldValue>,
    pub mitigation_md: Option<FieldValue>,
    pub owner_md: Option<FieldValue>,
    pub due_date: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionItem {
    pub task_md: Option<FieldValue>,
    pub item_status: Option<FieldValue>,
    pub owner_md: Option<FieldValue>,
    pub due_date: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Decision {
    pub decision_md: Option<FieldValue>,
    pub rationale_md: Option<FieldValue>,
    pub decided_on: Option<FieldValue>,
    pub approver_md: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dependency {
    pub description_md: Option<FieldValue>,
    #[serde(rename = "type")]
    pub kind: Option<FieldValue>,
    pub depends_on_md: Option<FieldValue>,
    pub owner_md: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PainPoint {
    pub pain_point_md: Option<FieldValue>,
    pub affected_bu_md: Option<FieldValue>,
    pub impact_md: Option<FieldValue>,
}
