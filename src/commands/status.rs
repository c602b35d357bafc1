use super::ViewerSession;
use crate::{
    core::{
        errors::{AppError, AppResult},
        types::{RecordKey, SetRequirementStatusResponse, SetRiskIssueStatusResponse},
    },
    sections::status::{RequirementStatus, RiskIssueStatus, TriageStatus},
};

fn parsed<S: TriageStatus>(raw: &str) -> AppResult<S> {
    S::parse(raw).ok_or_else(|| AppError::InvalidInput(format!("unknown status: {raw}")))
}

pub fn set_requirement_status(
    session: &mut ViewerSession,
    record_key: String,
    status: &str,
) -> AppResult<SetRequirementStatusResponse> {
    let next: RequirementStatus = parsed(status)?;
    let key = RecordKey(record_key);
    if !session.has_requirement(&key)? {
        return Err(AppError::NotFound(format!("requirement {key}")));
    }
    let status = session.requirement_statuses.apply(key.clone(), next)?;
    session.rebuild();
    Ok(SetRequirementStatusResponse {
        record_key: key.0,
        status,
    })
}

pub fn set_risk_issue_status(
    session: &mut ViewerSession,
    record_key: String,
    status: &str,
) -> AppResult<SetRiskIssueStatusResponse> {
    let next: RiskIssueStatus = parsed(status)?;
    let key = RecordKey(record_key);
    if !session.has_risk_issue(&key)? {
        return Err(AppError::NotFound(format!("risk or issue {key}")));
    }
    let status = session.risk_issue_statuses.apply(key.clone(), next)?;
    session.rebuild();
    Ok(SetRiskIssueStatusResponse {
        record_key: key.0,
        status,
    })
}
