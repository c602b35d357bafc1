use serde::Deserialize;
use serde_json::Value;

use super::{
    records::{
        ActionItem, BusinessUnitTeam, DataMigration, DataModelEntity, Decision, Dependency,
        Integration, License, MetadataUpdate, ModuleProcess, PainPoint, Persona, Requirement,
        RiskIssue, StateDescription,
    },
    value::{lenient_count, lenient_object, lenient_records, lenient_values, FieldValue, Record},
};

// ── Statement of Work ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SowDocument {
    #[serde(default, deserialize_with = "lenient_object")]
    pub scope_summary: Option<ScopeSummary>,
    #[serde(default, deserialize_with = "lenient_values")]
    pub assumptions: Vec<Value>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub modules: Vec<Record<SowModule>>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub business_units: Vec<Record<BusinessUnit>>,
    #[serde(default, deserialize_with = "lenient_values")]
    pub salesforce_licenses: Vec<Value>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub validation_summary: Option<ValidationSummary>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScopeSummary {
    pub company_background: Option<FieldValue>,
    pub project_purpose: Option<FieldValue>,
    pub scope_of_implementation: Option<FieldValue>,
    pub expected_outcomes: Option<FieldValue>,
    pub primary_objective: Option<FieldValue>,
    pub out_of_scope: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SowModule {
    pub name: Option<FieldValue>,
    pub description: Option<FieldValue>,
    pub processes: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BusinessUnit {
    pub name: Option<FieldValue>,
    pub description: Option<FieldValue>,
    pub responsibilities: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ValidationSummary {
    pub json_validity: Option<bool>,
    pub issues_detected: Option<FieldValue>,
}

// ── Business Requirements Document ──────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrdDocument {
    #[serde(default, deserialize_with = "lenient_records")]
    pub business_units_teams: Vec<Record<BusinessUnitTeam>>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub modules_processes: Vec<Record<ModuleProcess>>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub license_list: Vec<Record<License>>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub personas: Vec<Record<Persona>>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub requirements: Vec<Record<Requirement>>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub current_state: Vec<Record<StateDescription>>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub target_state: Vec<Record<StateDescription>>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub applications_to_integrate: Vec<Record<Integration>>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub data_migration: Vec<Record<DataMigration>>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub data_model: Vec<Record<DataModelEntity>>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub metadata_updates: Vec<Record<MetadataUpdate>>,
}

// ── RAID log ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RaidDocument {
    #[serde(default, deserialize_with = "lenient_records")]
    pub risks_issues: Vec<Record<RiskIssue>>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub action_items: Vec<Record<ActionItem>>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub decisions: Vec<Record<Decision>>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub dependencies: Vec<Record<Dependency>>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub pain_points: Vec<Record<PainPoint>>,
}

// ── Meeting extraction bundle ────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MeetingDocument {
    #[serde(default, deserialize_with = "lenient_object")]
    pub meeting: Option<MeetingInfo>,
    #[serde(default, deserialize_with = "lenient_values")]
    pub files: Vec<Value>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub extractions: Option<MeetingExtractions>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MeetingInfo {
    pub meeting_name: Option<FieldValue>,
    pub meeting_datetime: Option<FieldValue>,
    pub status: Option<FieldValue>,
    pub stakeholders: Option<FieldValue>,
    pub meeting_details: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MeetingExtractions {
    #[serde(default, deserialize_with = "lenient_records")]
    pub bu_teams: Vec<Record<BusinessUnitTeam>>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub personas: Vec<Record<Persona>>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub requirements: Vec<Record<Requirement>>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub modules_processes: Vec<Record<ModuleProcess>>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub pain_points: Vec<Record<PainPoint>>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub current_state: Vec<Record<StateDescription>>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub target_state: Vec<Record<StateDescription>>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub risks_issues: Vec<Record<RiskIssue>>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub action_items: Vec<Record<ActionItem>>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub decisions: Vec<Record<Decision>>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub dependencies: Vec<Record<Dependency>>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub integrations: Vec<Record<Integration>>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub data_migration: Vec<Record<DataMigration>>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub data_model: Vec<Record<DataModelEntity>>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub metadata_updates: Vec<Record<MetadataUpdate>>,
}

// ── Dashboard ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardDocument {
    #[serde(default, deserialize_with = "lenient_object")]
    pub summary: Option<DashboardSummary>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub recent_meetings: Vec<Record<MeetingBrief>>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub upcoming_meetings: Vec<Record<MeetingBrief>>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub recent_activity: Vec<Record<Activity>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DashboardSummary {
    #[serde(deserialize_with = "lenient_count")]
    pub meeting_count: u64,
    #[serde(deserialize_with = "lenient_count")]
    pub requirements_count: u64,
    #[serde(deserialize_with = "lenient_count")]
    pub risks_issues_count: u64,
    #[serde(deserialize_with = "lenient_count")]
    pub action_items_count: u64,
    #[serde(deserialize_with = "lenient_count")]
    pub decisions_count: u64,
    #[serde(deserialize_with = "lenient_count")]
    pub dependencies_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MeetingBrief {
    pub meeting_name: Option<FieldValue>,
    pub meeting_datetime: Option<FieldValue>,
    pub status: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Activity {
    #[serde(rename = "type")]
    pub kind: Option<FieldValue>,
    pub description: Option<FieldValue>,
}
