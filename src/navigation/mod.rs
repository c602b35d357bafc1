//! Outline navigation and details lookup over a built section tree.
//!
//! Expansion and selection are independent: toggling a branch never moves the
//! active id, and selecting a leaf never touches the expanded set.

use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::sections::{ContentBlock, Section};

pub const INDENT_STEP_PX: u32 = 16;
pub const INDENT_BASE_PX: u32 = 12;
pub const EMPTY_DETAILS_MESSAGE: &str = "Select a section from the navigation to view details";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    pub active_section_id: String,
    pub expanded: BTreeSet<String>,
}

/// What a click on an outline row did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ClickOutcome {
    Toggled,
    Selected,
    Ignored,
}

impl NavigationState {
    pub fn new(active_section_id: impl Into<String>) -> Self {
        Self {
            active_section_id: active_section_id.into(),
            expanded: BTreeSet::new(),
        }
    }

    /// Starts on the first leaf of `sections`, with nothing expanded.
    pub fn for_sections(sections: &[Section]) -> Self {
        Self::new(default_section_id(sections).unwrap_or_default())
    }

    /// Flips expansion of `id`; returns whether it is now expanded.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.to_string());
            true
        }
    }

    pub fn select(&mut self, id: &str) {
        self.active_section_id = id.to_string();
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Branch rows toggle, leaf rows select, unknown ids do nothing.
    pub fn handle_click(&mut self, sections: &[Section], id: &str) -> ClickOutcome {
        match find_section(sections, id) {
            Some(section) if section.is_branch() => {
                let expanded = self.toggle(id);
                debug!(section = id, expanded, "outline branch toggled");
                ClickOutcome::Toggled
            }
            Some(_) => {
                self.select(id);
                debug!(section = id, "outline leaf selected");
                ClickOutcome::Selected
            }
            None => ClickOutcome::Ignored,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OutlineRow {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub depth: usize,
    pub indent_px: u32,
    pub is_branch: bool,
    pub expanded: bool,
    pub active: bool,
}

/// Visible outline rows in depth-first pre-order. Children of collapsed
/// branches are not emitted.
pub fn outline(sections: &[Section], state: &NavigationState) -> Vec<OutlineRow> {
    let mut rows = Vec::new();
    push_rows(sections, state, 0, &mut rows);
    rows
}

fn push_rows(sections: &[Section], state: &NavigationState, depth: usize, out: &mut Vec<OutlineRow>) {
    for section in sections {
        let is_branch = section.is_branch();
        let expanded = is_branch && state.is_expanded(&section.id);
        out.push(OutlineRow {
            id: section.id.clone(),
            title: section.title.clone(),
            icon: section.icon.clone(),
            depth,
            indent_px: depth as u32 * INDENT_STEP_PX + INDENT_BASE_PX,
            is_branch,
            expanded,
            active: !is_branch && section.id == state.active_section_id,
        });
        if expanded {
            push_rows(section.children(), state, depth + 1, out);
        }
    }
}

pub fn find_section<'a>(sections: &'a [Section], id: &str) -> Option<&'a Section> {
    for section in sections {
        if section.id == id {
            return Some(section);
        }
        if let Some(found) = find_section(section.children(), id) {
            return Some(found);
        }
    }
    None
}

/// First leaf in pre-order.
pub fn default_section_id(sections: &[Section]) -> Option<String> {
    sections.iter().find_map(|section| {
        if section.is_branch() {
            default_section_id(section.children())
        } else {
            Some(section.id.clone())
        }
    })
}

pub fn branch_ids(sections: &[Section]) -> Vec<String> {
    let mut ids = Vec::new();
    for section in sections.iter().filter(|section| section.is_branch()) {
        ids.push(section.id.clone());
        ids.extend(branch_ids(section.children()));
    }
    ids
}

/// Ids of every branch on the path to `id`, outermost first.
pub fn ancestors_of(sections: &[Section], id: &str) -> Option<Vec<String>> {
    for section in sections {
        if section.id == id {
            return Some(Vec::new());
        }
        if let Some(mut path) = ancestors_of(section.children(), id) {
            path.insert(0, section.id.clone());
            return Some(path);
        }
    }
    None
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DetailsView {
    Section {
        id: String,
        title: String,
        icon: String,
        blocks: Vec<ContentBlock>,
    },
    Empty {
        message: String,
    },
}

impl DetailsView {
    pub fn empty() -> Self {
        Self::Empty {
            message: EMPTY_DETAILS_MESSAGE.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }
}

/// Content of the active section, or the select-a-section state when the id
/// is unknown or names a section with nothing to show.
pub fn details(sections: &[Section], active_section_id: &str) -> DetailsView {
    match find_section(sections, active_section_id).and_then(|s| s.content().map(|c| (s, c))) {
        Some((section, blocks)) => DetailsView::Section {
            id: section.id.clone(),
            title: section.title.clone(),
            icon: section.icon.clone(),
            blocks: blocks.to_vec(),
        },
        None => {
            debug!(section = active_section_id, "no details for active section");
            DetailsView::empty()
        }
    }
}
