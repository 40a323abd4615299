use super::{normalize_folder, parse_level};
use crate::libs::{
    config::Config,
    formatter::OutputFormat,
    task::{IdMatch, TaskFilter},
    view::View,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Filter by id. `/part/` matches every id containing `part`
    #[arg(long)]
    id: Option<String>,

    /// Search in titles (case-sensitive)
    #[arg(short = 'T', long)]
    title: Option<String>,

    /// Filter by urgency
    #[arg(short, long, allow_negative_numbers = true, value_parser = parse_level)]
    urgency: Option<u8>,

    /// Filter by importance
    #[arg(short, long, allow_negative_numbers = true, value_parser = parse_level)]
    importance: Option<u8>,

    /// Match tasks carrying any of these tags
    #[arg(short = 't', long = "tag")]
    tags: Vec<String>,

    /// Filter by anchored folder
    #[arg(short, long)]
    folder: Option<String>,

    /// Search in descriptions (case-sensitive)
    #[arg(short, long)]
    description: Option<String>,

    /// Output format [default: from configuration]
    #[arg(short, long = "output-format", value_enum)]
    output: Option<OutputFormat>,
}

pub fn cmd(args: SearchArgs, config: &Config) -> Result<()> {
    let filter = TaskFilter {
        id: args.id.as_deref().map(IdMatch::parse),
        title: args.title,
        urgency: args.urgency,
        importance: args.importance,
        tags: args.tags,
        folder: normalize_folder(args.folder)?,
        description: args.description,
    };

    let tasks = config.tasks().search(&filter)?;
    View::print(&tasks, args.output.unwrap_or(config.search_output_format))
}
