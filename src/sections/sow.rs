use serde_json::Value;

use super::{
    data_section,
    format::{display_text, list_item_text, list_items, text_or, DEFAULT_SEPARATOR, MISSING_VALUE},
    BadgeTone, ContentBlock, EmptySectionPolicy, Section,
};
use crate::documents::{
    kinds::{BusinessUnit, ScopeSummary, SowModule, ValidationSummary},
    FieldValue, Record, SowDocument,
};

pub fn build(sow: &SowDocument, policy: EmptySectionPolicy) -> Vec<Section> {
    let scope = sow.scope_summary.as_ref();
    let overview_children: Vec<Section> = [
        data_section(
            policy,
            scope.is_some_and(has_project_overview),
            || project_overview(scope),
            || project_overview(scope),
        ),
        text_leaf(
            policy,
            ("primary-objective", "Primary Objective", "target"),
            scope.and_then(|s| s.primary_objective.as_ref()),
            "Primary objective information not available.",
        ),
        text_leaf(
            policy,
            ("out-of-scope", "Out of scope", "block"),
            scope.and_then(|s| s.out_of_scope.as_ref()),
            "Out of scope items not defined.",
        ),
        data_section(
            policy,
            !assumption_items(&sow.assumptions).is_empty(),
            || {
                Section::leaf(
                    "assumptions",
                    "Assumptions",
                    "info",
                    vec![ContentBlock::List {
                        items: assumption_items(&sow.assumptions),
                    }],
                )
            },
            || placeholder(("assumptions", "Assumptions", "info"), "No assumptions defined."),
        ),
    ]
    .into_iter()
    .flatten()
    .collect();

    // The grouping branch stays while at least one child survives.
    let overview = (!overview_children.is_empty())
        .then(|| Section::branch("overview", "Overview", "overview", overview_children));

    [
        overview,
        data_section(
            policy,
            !sow.modules.is_empty(),
            || {
                Section::leaf(
                    "modules",
                    "Modules & Processes",
                    "widgets",
                    module_blocks(&sow.modules),
                )
            },
            || {
                placeholder(
                    ("modules", "Modules & Processes", "widgets"),
                    "No modules defined.",
                )
            },
        ),
        data_section(
            policy,
            !license_items(&sow.salesforce_licenses).is_empty(),
            || {
                Section::leaf(
                    "licenses",
                    "Salesforce Licenses",
                    "verified_user",
                    vec![ContentBlock::List {
                        items: license_items(&sow.salesforce_licenses),
                    }],
                )
            },
            || {
                placeholder(
                    ("licenses", "Salesforce Licenses", "verified_user"),
                    "No Salesforce licenses defined.",
                )
            },
        ),
        data_section(
            policy,
            !sow.business_units.is_empty(),
            || {
                Section::leaf(
                    "stakeholders",
                    "Stakeholders",
                    "groups",
                    stakeholder_blocks(&sow.business_units),
                )
            },
            || {
                placeholder(
                    ("stakeholders", "Stakeholders", "groups"),
                    "No business units or personas defined.",
                )
            },
        ),
        data_section(
            policy,
            sow.validation_summary.is_some(),
            || {
                Section::leaf(
                    "validation",
                    "Validation Summary",
                    "verified",
                    validation_blocks(sow.validation_summary.as_ref()),
                )
            },
            || {
                placeholder(
                    ("validation", "Validation Summary", "verified"),
                    "No validation information available.",
                )
            },
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn placeholder((id, title, icon): (&str, &str, &str), message: &str) -> Section {
    Section::leaf(id, title, icon, vec![ContentBlock::empty(message)])
}

fn text_leaf(
    policy: EmptySectionPolicy,
    (id, title, icon): (&str, &str, &str),
    value: Option<&FieldValue>,
    fallback: &str,
) -> Option<Section> {
    let text = text_or(value, "");
    data_section(
        policy,
        !text.is_empty(),
        || Section::leaf(id, title, icon, vec![ContentBlock::paragraph(text.clone())]),
        || placeholder((id, title, icon), fallback),
    )
}

fn has_project_overview(scope: &ScopeSummary) -> bool {
    [
        &scope.company_background,
        &scope.project_purpose,
        &scope.scope_of_implementation,
        &scope.expected_outcomes,
    ]
    .into_iter()
    .any(|field| !text_or(field.as_ref(), "").is_empty())
}

fn project_overview(scope: Option<&ScopeSummary>) -> Section {
    let parts: [(&str, Option<&FieldValue>, &str); 4] = [
        (
            "Company Background",
            scope.and_then(|s| s.company_background.as_ref()),
            "Company background information not available.",
        ),
        (
            "Project Purpose & Business Need",
            scope.and_then(|s| s.project_purpose.as_ref()),
            "Project purpose information not available.",
        ),
        (
            "Scope of Implementation",
            scope.and_then(|s| s.scope_of_implementation.as_ref()),
            "Scope of implementation details not available.",
        ),
        (
            "Expected Outcomes & Benefits",
            scope.and_then(|s| s.expected_outcomes.as_ref()),
            "Expected outcomes information not available.",
        ),
    ];
    let blocks = parts
        .into_iter()
        .flat_map(|(heading, value, fallback)| {
            [
                ContentBlock::heading(heading),
                ContentBlock::paragraph(text_or(value, fallback)),
            ]
        })
        .collect();
    Section::leaf("project-overview", "Project Overview", "description", blocks)
}

fn assumption_items(assumptions: &[Value]) -> Vec<String> {
    assumptions.iter().filter_map(list_item_text).collect()
}

fn license_items(licenses: &[Value]) -> Vec<String> {
    licenses.iter().filter_map(license_text).collect()
}

/// `"{license_type}: {count}"` for object entries, defaulting to `License`
/// and `1`.
fn license_text(license: &Value) -> Option<String> {
    let Value::Object(map) = license else {
        return list_item_text(license);
    };
    let license_type = map
        .get("license_type")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or("License");
    let count = match map.get("count") {
        Some(Value::Number(number)) if number.as_f64() != Some(0.0) => number.to_string(),
        Some(Value::String(text)) if !text.trim().is_empty() => text.trim().to_string(),
        _ => "1".to_string(),
    };
    Some(format!("{license_type}: {count}"))
}

fn module_blocks(modules: &[Record<SowModule>]) -> Vec<ContentBlock> {
    let mut blocks = Vec::new();
    for module in modules {
        let fields = &module.fields;
        blocks.push(ContentBlock::heading(display_text(
            fields.name.as_ref(),
            DEFAULT_SEPARATOR,
        )));
        let description = display_text(fields.description.as_ref(), DEFAULT_SEPARATOR);
        if description != MISSING_VALUE {
            blocks.push(ContentBlock::paragraph(description));
        }
        let processes = list_items(fields.processes.as_ref());
        if !processes.is_empty() {
            blocks.push(ContentBlock::Heading {
                text: "Processes:".to_string(),
                level: 4,
            });
            blocks.push(ContentBlock::List { items: processes });
        }
    }
    blocks
}

fn stakeholder_blocks(units: &[Record<BusinessUnit>]) -> Vec<ContentBlock> {
    let mut blocks = Vec::new();
    for unit in units {
        let fields = &unit.fields;
        blocks.push(ContentBlock::heading(display_text(
            fields.name.as_ref(),
            DEFAULT_SEPARATOR,
        )));
        blocks.push(ContentBlock::paragraph(text_or(
            fields.description.as_ref(),
            "No description available.",
        )));
        let responsibilities = list_items(fields.responsibilities.as_ref());
        if !responsibilities.is_empty() {
            blocks.push(ContentBlock::Heading {
                text: "Responsibilities:".to_string(),
                level: 4,
            });
            blocks.push(ContentBlock::List {
                items: responsibilities,
            });
        }
    }
    blocks
}

fn validation_blocks(summary: Option<&ValidationSummary>) -> Vec<ContentBlock> {
    let Some(summary) = summary else {
        return Vec::new();
    };
    let valid = summary.json_validity.unwrap_or(false);
    let mut blocks = vec![
        ContentBlock::heading("JSON Validity"),
        ContentBlock::Badge {
            label: if valid { "Valid" } else { "Invalid" }.to_string(),
            tone: if valid {
                BadgeTone::Positive
            } else {
                BadgeTone::Negative
            },
        },
    ];
    let issues = list_items(summary.issues_detected.as_ref());
    if !issues.is_empty() {
        blocks.push(ContentBlock::heading("Issues Detected"));
        blocks.push(ContentBlock::List { items: issues });
    }
    blocks
}
