use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use serde::Serialize;

use crate::{
    commands::{
        documents::{export_markdown, export_markdown_file, open_document_file},
        navigation::{click_section, get_details, get_outline, select_section},
        sources::{open_sources, select_source},
        SourceTarget, ViewerSession,
    },
    core::errors::{AppError, AppResult},
    navigation::branch_ids,
    render,
    sections::Section,
};

fn document_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("kind")
                .required(true)
                .help("Document kind: sow, brd, raid, meeting or dashboard"),
        )
        .arg(
            Arg::new("file")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("Path to the document JSON"),
        )
}

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output as JSON")
}

pub fn command() -> Command {
    Command::new("designer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Browse AI-extracted SoW, BRD, RAID and meeting documents")
        .subcommand_required(true)
        .subcommand(
            document_args(Command::new("outline").about("Print the navigation outline"))
                .arg(
                    Arg::new("expand-all")
                        .long("expand-all")
                        .action(ArgAction::SetTrue)
                        .help("Expand every group"),
                )
                .arg(
                    Arg::new("click")
                        .long("click")
                        .action(ArgAction::Append)
                        .help("Click an outline row by id (repeatable)"),
                )
                .arg(json_flag()),
        )
        .subcommand(
            document_args(Command::new("show").about("Print the details of a section"))
                .arg(
                    Arg::new("section")
                        .long("section")
                        .help("Section id (defaults to the first leaf)"),
                )
                .arg(json_flag()),
        )
        .subcommand(
            document_args(Command::new("sources").about("List source references"))
                .arg(
                    Arg::new("section")
                        .long("section")
                        .conflicts_with("record")
                        .required_unless_present("record")
                        .help("Section id"),
                )
                .arg(Arg::new("record").long("record").help("Record key of a table row"))
                .arg(
                    Arg::new("select")
                        .long("select")
                        .value_parser(value_parser!(usize))
                        .help("Show one reference in detail (1-based)"),
                )
                .arg(json_flag()),
        )
        .subcommand(
            document_args(Command::new("export").about("Export the document as markdown")).arg(
                Arg::new("out")
                    .long("out")
                    .value_parser(value_parser!(PathBuf))
                    .help("Write to a file instead of stdout"),
            ),
        )
        .subcommand(Command::new("schema").about("Print the JSON schema of the section model"))
}

fn to_json<T: Serialize>(value: &T) -> AppResult<String> {
    serde_json::to_string_pretty(value).map_err(|err| AppError::Internal(err.to_string()))
}

fn open(session: &mut ViewerSession, args: &ArgMatches) -> AppResult<()> {
    let kind = args
        .get_one::<String>("kind")
        .ok_or_else(|| AppError::InvalidInput("missing document kind".to_string()))?;
    let file = args
        .get_one::<PathBuf>("file")
        .ok_or_else(|| AppError::InvalidInput("missing document path".to_string()))?;
    open_document_file(session, kind, file)?;
    Ok(())
}

/// Runs one parsed invocation and returns what should be printed.
pub fn execute(session: &mut ViewerSession, matches: &ArgMatches) -> AppResult<String> {
    match matches.subcommand() {
        Some(("outline", args)) => {
            open(session, args)?;
            if args.get_flag("expand-all") {
                for id in branch_ids(session.sections()) {
                    session.navigation.toggle(&id);
                }
            }
            for id in args.get_many::<String>("click").into_iter().flatten() {
                click_section(session, id)?;
            }
            let response = get_outline(session)?;
            if args.get_flag("json") {
                to_json(&response)
            } else {
                Ok(render::outline_text(&response.rows))
            }
        }
        Some(("show", args)) => {
            open(session, args)?;
            if let Some(id) = args.get_one::<String>("section") {
                select_section(session, id)?;
            }
            let response = get_details(session)?;
            if args.get_flag("json") {
                to_json(&response)
            } else {
                Ok(render::details_text(&response.details))
            }
        }
        Some(("sources", args)) => {
            open(session, args)?;
            let target = match (
                args.get_one::<String>("section"),
                args.get_one::<String>("record"),
            ) {
                (Some(id), _) => SourceTarget::Section(id.clone()),
                (None, Some(key)) => SourceTarget::Record(key.clone()),
                (None, None) => {
                    return Err(AppError::InvalidInput(
                        "either --section or --record is required".to_string(),
                    ))
                }
            };
            let listing = open_sources(session, target)?;
            let selected = match args.get_one::<usize>("select") {
                Some(0) => {
                    return Err(AppError::InvalidInput(
                        "reference numbers start at 1".to_string(),
                    ))
                }
                Some(position) => Some(select_source(session, position - 1)?.detail),
                None => None,
            };
            if args.get_flag("json") {
                return match selected {
                    Some(detail) => to_json(&detail),
                    None => to_json(&listing),
                };
            }
            let viewer = session.source_viewer();
            let heading = viewer.map(|v| v.heading()).unwrap_or_default();
            let items = viewer.map(|v| v.items()).unwrap_or_default();
            Ok(render::sources_text(
                &heading,
                listing.indicator.as_ref(),
                &items,
            ))
        }
        Some(("export", args)) => {
            open(session, args)?;
            match args.get_one::<PathBuf>("out") {
                Some(path) => {
                    export_markdown_file(session, path)?;
                    Ok(format!("wrote {}\n", path.display()))
                }
                None => Ok(export_markdown(session)?.markdown),
            }
        }
        Some(("schema", _)) => to_json(&schemars::schema_for!(Section)),
        _ => Err(AppError::InvalidInput("unknown command".to_string())),
    }
}
