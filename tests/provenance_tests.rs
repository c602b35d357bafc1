mod common;

use common::{document, first_table, load};
use designer_lib::{
    core::types::DocumentKind,
    provenance::{
        build_indicator, extract_references, extract_references_with_limit,
        references_for_section, ConfidenceBand, SourceViewer,
    },
    sections::{build_sections, BuildOptions},
};
use serde_json::json;

fn nested_document() -> serde_json::Value {
    json!({
        "source_references": [
            {"file_name": "root.pdf", "page_section": "1", "quote_text": "root", "confidence": 0.9}
        ],
        "items": [
            {
                "source_references": [
                    {"file_name": "item.pdf", "page_section": "2", "quote_text": "item", "confidence": 0.7}
                ],
                "details": {
                    "notes": [
                        {"source_references": [
                            {"file_name": "deep.pdf", "page_section": "3", "quote_text": "deep", "confidence": 0.4}
                        ]}
                    ]
                }
            }
        ]
    })
}

fn files(references: &[designer_lib::core::types::SourceReference]) -> Vec<&str> {
    references.iter().map(|r| r.file_name.as_str()).collect()
}

#[test]
fn extraction_finds_references_at_any_depth_in_traversal_order() {
    let references = extract_references(&nested_document());
    assert_eq!(files(&references), vec!["root.pdf", "item.pdf", "deep.pdf"]);
}

#[test]
fn depth_limit_bounds_the_walk() {
    let doc = nested_document();
    assert_eq!(files(&extract_references_with_limit(&doc, 0)), vec!["root.pdf"]);
    // items array is depth 1, its objects depth 2.
    assert_eq!(files(&extract_references_with_limit(&doc, 1)), vec!["root.pdf"]);
    assert_eq!(
        files(&extract_references_with_limit(&doc, 2)),
        vec!["root.pdf", "item.pdf"]
    );
}

#[test]
fn scalars_and_malformed_entries_yield_nothing() {
    assert!(extract_references(&json!("text")).is_empty());
    assert!(extract_references(&json!({"source_references": "none"})).is_empty());
    let refs = extract_references(&json!({
        "source_references": [42, {"file_name": "ok.pdf", "confidence": 0.6}]
    }));
    assert_eq!(files(&refs), vec!["ok.pdf"]);
}

#[test]
fn null_reference_fields_keep_every_entry() {
    let raw = json!({
        "requirements": [{
            "description_md": "Support SSO",
            "source_references": [
                {"file_name": "brd.pdf", "page_section": null, "quote_text": "SSO", "confidence": 0.9},
                {"file_name": "notes.txt", "page_section": "Line 4", "quote_text": null, "confidence": null},
                {"file_name": null, "page_section": "p2", "quote_text": "SAML", "confidence": "0.65"}
            ]
        }]
    });

    let references = extract_references(&raw);
    assert_eq!(files(&references), vec!["brd.pdf", "notes.txt", ""]);
    assert_eq!(references[0].page_section, "");
    assert_eq!(references[1].quote_text, "");
    let confidences: Vec<f64> = references.iter().map(|r| r.confidence).collect();
    assert_eq!(confidences, vec![0.9, 0.0, 0.65]);

    let indicator = build_indicator(&references).expect("indicator");
    assert_eq!(
        (indicator.total, indicator.high, indicator.medium, indicator.low),
        (3, 1, 1, 1)
    );

    let doc = document(DocumentKind::Brd, raw);
    assert_eq!(references_for_section(&doc, "requirements", 64).len(), 3);
    let sections = build_sections(Some(&doc), &BuildOptions::default());
    let row = &first_table(&sections, "requirements").rows[0];
    assert_eq!(row.references.len(), 3);
    assert_eq!(row.sources.as_ref().map(|i| i.total), Some(3));
}

#[test]
fn indicator_counts_each_band() {
    let doc = load(DocumentKind::Brd, "brd.json");
    let mut references = references_for_section(&doc, "requirements", 64);
    let raid = load(DocumentKind::Raid, "raid.json");
    references.extend(references_for_section(&raid, "risks-issues", 64));

    let confidences: Vec<f64> = references.iter().map(|r| r.confidence).collect();
    assert_eq!(confidences, vec![0.95, 0.7, 0.5]);

    let indicator = build_indicator(&references).expect("indicator");
    assert_eq!((indicator.high, indicator.medium, indicator.low), (1, 1, 1));
    assert_eq!(indicator.label, "3 source references available");
    assert_eq!(
        indicator.bands(),
        vec![
            (ConfidenceBand::High, 1),
            (ConfidenceBand::Medium, 1),
            (ConfidenceBand::Low, 1)
        ]
    );
    assert!(build_indicator(&[]).is_none());
}

#[test]
fn section_references_follow_the_section_data() {
    let meeting = load(DocumentKind::Meeting, "meeting.json");
    assert_eq!(
        files(&references_for_section(&meeting, "requirements", 64)),
        vec!["recording.mp4"]
    );
    assert!(references_for_section(&meeting, "raidd", 64).is_empty());
    assert!(references_for_section(&meeting, "no-such-section", 64).is_empty());

    let sow = load(DocumentKind::Sow, "sow.json");
    assert_eq!(
        files(&references_for_section(&sow, "primary-objective", 64)),
        vec!["sow.pdf"]
    );
    assert_eq!(files(&references_for_section(&sow, "overview", 64)), vec!["sow.pdf"]);
}

#[test]
fn table_rows_carry_their_own_references() {
    let doc = load(DocumentKind::Brd, "brd.json");
    let sections = build_sections(Some(&doc), &BuildOptions::default());
    let table = first_table(&sections, "requirements");

    let first = table.rows[0].sources.as_ref().expect("first row has sources");
    assert_eq!((first.total, first.high, first.medium), (2, 1, 1));
    assert!(table.rows[1].sources.is_none());
    assert!(table.rows[1].references.is_empty());
}

#[test]
fn viewer_lists_all_references_and_tracks_selection() {
    let doc = document(
        DocumentKind::Raid,
        json!({"risks_issues": [{
            "type": "Risk",
            "source_references": [
                {"file_name": "a.pdf", "page_section": "p1", "quote_text": "first", "confidence": 0.876},
                {"file_name": "b.pdf", "page_section": "p9", "quote_text": "second", "confidence": 0.3}
            ]
        }]}),
    );
    let references = references_for_section(&doc, "risks-issues", 64);
    let mut viewer = SourceViewer::open(references).expect("viewer opens");

    assert_eq!(viewer.heading(), "All References (2)");
    let items = viewer.items();
    assert_eq!(items[0].confidence_percent, 88);
    assert_eq!(items[0].color, "#4CAF50");
    assert_eq!(items[1].band, ConfidenceBand::Low);
    assert!(items.iter().all(|item| !item.active));

    let detail = viewer.select(1).expect("select second");
    assert_eq!(detail.quote_text, "second");
    assert_eq!(detail.color, "#F44336");
    assert!(viewer.items()[1].active);
    assert!(viewer.select(5).is_err());

    viewer.clear_selection();
    assert!(viewer.active().is_none());
    assert!(SourceViewer::open(Vec::new()).is_none());
}
