use super::{
    data_section,
    table::{TableBuilder, TableColumn},
    ContentBlock, EmptySectionPolicy, Section, SummaryCard,
};
use crate::documents::{
    kinds::{Activity, DashboardSummary, MeetingBrief},
    DashboardDocument, Record,
};

pub fn build(dashboard: &DashboardDocument, policy: EmptySectionPolicy) -> Vec<Section> {
    let summary = dashboard.summary.clone().unwrap_or_default();
    let meeting_columns = meeting_columns();

    [
        // Summary cards are always present; missing counts read as zero.
        Some(Section::leaf(
            "summary",
            "Project Summary",
            "dashboard",
            vec![ContentBlock::Cards {
                cards: summary_cards(&summary),
            }],
        )),
        meeting_list(
            policy,
            ("recent-meetings", "Recent Meetings", "history"),
            &dashboard.recent_meetings,
            &meeting_columns,
            "No recent meetings",
        ),
        meeting_list(
            policy,
            ("upcoming-meetings", "Upcoming Meetings", "event_upcoming"),
            &dashboard.upcoming_meetings,
            &meeting_columns,
            "No upcoming meetings",
        ),
        data_section(
            policy,
            !dashboard.recent_activity.is_empty(),
            || {
                Section::leaf(
                    "recent-activity",
                    "Recent Activity",
                    "notifications",
                    vec![ContentBlock::Table(
                        TableBuilder::new(&activity_columns()).build(&dashboard.recent_activity),
                    )],
                )
            },
            || {
                Section::leaf(
                    "recent-activity",
                    "Recent Activity",
                    "notifications",
                    vec![ContentBlock::empty("No recent activity")],
                )
            },
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

pub fn summary_cards(summary: &DashboardSummary) -> Vec<SummaryCard> {
    [
        ("Meetings", summary.meeting_count, "event", "blue"),
        ("Requirements", summary.requirements_count, "assignment", "purple"),
        ("Risks & Issues", summary.risks_issues_count, "warning", "red"),
        ("Action Items", summary.action_items_count, "task_alt", "orange"),
        ("Decisions", summary.decisions_count, "gavel", "green"),
        ("Dependencies", summary.dependencies_count, "link", "blue"),
    ]
    .into_iter()
    .map(|(title, count, icon, color)| SummaryCard {
        title: title.to_string(),
        count,
        icon: icon.to_string(),
        color: color.to_string(),
    })
    .collect()
}

fn meeting_columns() -> Vec<TableColumn<MeetingBrief>> {
    vec![
        TableColumn::new("meeting_name", "Meeting", |m: &MeetingBrief| m.meeting_name.as_ref()),
        TableColumn::new("meeting_datetime", "Date & Time", |m: &MeetingBrief| {
            m.meeting_datetime.as_ref()
        })
        .datetime(),
        TableColumn::new("status", "Status", |m: &MeetingBrief| m.status.as_ref())
            .class("meeting-status"),
    ]
}

fn activity_columns() -> Vec<TableColumn<Activity>> {
    vec![
        TableColumn::new("description", "Activity", |a: &Activity| a.description.as_ref()),
        TableColumn::new("type", "Type", |a: &Activity| a.kind.as_ref()).class("activity-type"),
    ]
}

fn meeting_list(
    policy: EmptySectionPolicy,
    (id, title, icon): (&str, &str, &str),
    meetings: &[Record<MeetingBrief>],
    columns: &[TableColumn<MeetingBrief>],
    empty_message: &str,
) -> Option<Section> {
    data_section(
        policy,
        !meetings.is_empty(),
        || {
            Section::leaf(
                id,
                title,
                icon,
                vec![ContentBlock::Table(
                    TableBuilder::new(columns).show_created(false).build(meetings),
                )],
            )
        },
        || Section::leaf(id, title, icon, vec![ContentBlock::empty(empty_message)]),
    )
}
