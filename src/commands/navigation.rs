use super::ViewerSession;
use crate::{
    core::{
        errors::{AppError, AppResult},
        types::{GetDetailsResponse, GetOutlineResponse, SelectSectionResponse},
    },
    navigation::{details, find_section, outline},
};

fn selection(session: &ViewerSession) -> SelectSectionResponse {
    SelectSectionResponse {
        active_section_id: session.navigation.active_section_id.clone(),
        expanded: session.navigation.expanded.iter().cloned().collect(),
    }
}

pub fn get_outline(session: &ViewerSession) -> AppResult<GetOutlineResponse> {
    Ok(GetOutlineResponse {
        rows: outline(&session.sections, &session.navigation),
        active_section_id: session.navigation.active_section_id.clone(),
    })
}

/// Outline click: toggles branches, selects leaves.
pub fn click_section(
    session: &mut ViewerSession,
    section_id: &str,
) -> AppResult<SelectSectionResponse> {
    session.require_document()?;
    if find_section(&session.sections, section_id).is_none() {
        return Err(AppError::NotFound(format!("section {section_id}")));
    }
    session
        .navigation
        .handle_click(&session.sections, section_id);
    Ok(selection(session))
}

pub fn select_section(
    session: &mut ViewerSession,
    section_id: &str,
) -> AppResult<SelectSectionResponse> {
    session.require_document()?;
    match find_section(&session.sections, section_id) {
        None => return Err(AppError::NotFound(format!("section {section_id}"))),
        Some(section) if section.is_branch() => {
            return Err(AppError::InvalidInput(format!(
                "section {section_id} is a group; toggle it instead"
            )))
        }
        Some(_) => {}
    }
    session.navigation.select(section_id);
    Ok(selection(session))
}

pub fn toggle_section(
    session: &mut ViewerSession,
    section_id: &str,
) -> AppResult<SelectSectionResponse> {
    session.require_document()?;
    match find_section(&session.sections, section_id) {
        None => return Err(AppError::NotFound(format!("section {section_id}"))),
        Some(section) if !section.is_branch() => {
            return Err(AppError::InvalidInput(format!(
                "section {section_id} has no children to expand"
            )))
        }
        Some(_) => {}
    }
    session.navigation.toggle(section_id);
    Ok(selection(session))
}

/// Details of the active section. Never fails: an unknown or empty section
/// yields the select-a-section view.
pub fn get_details(session: &ViewerSession) -> AppResult<GetDetailsResponse> {
    Ok(GetDetailsResponse {
        details: details(&session.sections, &session.navigation.active_section_id),
    })
}
