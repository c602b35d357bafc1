//! Text renderings of the viewer state, used by the CLI and markdown export.

use crate::{
    navigation::{DetailsView, OutlineRow},
    provenance::{Indicator, SourceListItem},
    sections::{table::TableView, ContentBlock, Section, SectionBody},
};

/// Indented outline, one row per line. `*` marks the active leaf, `+`/`-`
/// mark collapsed/expanded branches.
pub fn outline_text(rows: &[OutlineRow]) -> String {
    let mut out = String::new();
    for row in rows {
        let marker = match (row.is_branch, row.expanded, row.active) {
            (true, true, _) => '-',
            (true, false, _) => '+',
            (false, _, true) => '*',
            (false, _, false) => ' ',
        };
        out.push_str(&"  ".repeat(row.depth));
        out.push(marker);
        out.push(' ');
        out.push_str(&row.title);
        out.push_str(&format!("  [{}]\n", row.id));
    }
    out
}

pub fn details_text(view: &DetailsView) -> String {
    match view {
        DetailsView::Empty { message } => format!("{message}\n"),
        DetailsView::Section { title, blocks, .. } => {
            let mut out = String::new();
            out.push_str("## ");
            out.push_str(title);
            out.push_str("\n\n");
            push_blocks(&mut out, blocks);
            out
        }
    }
}

pub fn sources_text(heading: &str, indicator: Option<&Indicator>, items: &[SourceListItem]) -> String {
    let Some(indicator) = indicator else {
        return "No source references\n".to_string();
    };
    let mut out = String::new();
    out.push_str(&indicator.label);
    out.push('\n');
    for (band, count) in indicator.bands() {
        out.push_str(&format!("  {}: {count}\n", band.as_str()));
    }
    out.push('\n');
    out.push_str(heading);
    out.push('\n');
    for item in items {
        out.push_str(&format!(
            "{}{}. {} ({}) {}% {}\n",
            if item.active { '>' } else { ' ' },
            item.index + 1,
            item.file_name,
            item.page_section,
            item.confidence_percent,
            item.band.as_str()
        ));
        if !item.quote_text.is_empty() {
            out.push_str(&format!("    \"{}\"\n", item.quote_text));
        }
    }
    out
}

/// Whole document as markdown: every section in outline order, branches as
/// headings one level above their children.
pub fn markdown(title: &str, sections: &[Section]) -> String {
    let mut out = String::new();
    out.push_str("# ");
    out.push_str(title);
    out.push_str("\n\n");
    push_sections(&mut out, sections, 2);
    out
}

fn push_sections(out: &mut String, sections: &[Section], level: usize) {
    for section in sections {
        out.push_str(&"#".repeat(level.min(6)));
        out.push(' ');
        out.push_str(&section.title);
        out.push_str("\n\n");
        match &section.body {
            SectionBody::Children(children) => push_sections(out, children, level + 1),
            SectionBody::Content(blocks) => push_blocks(out, blocks),
            SectionBody::Empty => {}
        }
    }
}

fn push_blocks(out: &mut String, blocks: &[ContentBlock]) {
    for block in blocks {
        match block {
            ContentBlock::Heading { text, level } => {
                out.push_str(&"#".repeat(usize::from(*level).min(6)));
                out.push(' ');
                out.push_str(text);
                out.push_str("\n\n");
            }
            ContentBlock::Paragraph { text } => {
                out.push_str(text);
                out.push_str("\n\n");
            }
            ContentBlock::List { items } => {
                for item in items {
                    out.push_str("- ");
                    out.push_str(item);
                    out.push('\n');
                }
                out.push('\n');
            }
            ContentBlock::Fields { fields } => {
                for field in fields {
                    out.push_str(&format!("**{}:** {}\n", field.label, field.value));
                }
                out.push('\n');
            }
            ContentBlock::Badge { label, .. } => {
                out.push_str(&format!("`{label}`\n\n"));
            }
            ContentBlock::Cards { cards } => {
                for card in cards {
                    out.push_str(&format!("- {}: {}\n", card.title, card.count));
                }
                out.push('\n');
            }
            ContentBlock::Table(table) => push_table(out, table),
            ContentBlock::Empty { message } => {
                out.push('_');
                out.push_str(message);
                out.push_str("_\n\n");
            }
        }
    }
}

fn push_table(out: &mut String, table: &TableView) {
    if let Some(title) = &table.title {
        out.push_str("#### ");
        out.push_str(title);
        out.push_str("\n\n");
    }
    let with_status = table.has_status();
    let mut headers: Vec<&str> = table.columns.iter().map(|c| c.header.as_str()).collect();
    if with_status {
        headers.push("Status");
    }
    out.push_str(&format!("| {} |\n", headers.join(" | ")));
    out.push_str(&format!("|{}\n", " --- |".repeat(headers.len())));
    for row in &table.rows {
        let mut cells: Vec<String> = row.cells.iter().map(|cell| escape_cell(&cell.display)).collect();
        if let Some(status) = &row.status {
            cells.push(status.label.clone());
        }
        out.push_str(&format!("| {} |\n", cells.join(" | ")));
    }
    out.push('\n');
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}
