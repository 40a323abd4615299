use super::{confirm_task, normalize_folder, parse_level, unescape};
use crate::{
    libs::{
        config::Config,
        messages::Message,
        path,
        task::{Task, LEVEL_DEFAULT},
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

pub const DEFAULT_TITLE: &str = "Give a Title to this Task.";

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Title of the task
    #[arg(short = 'T', long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Level of urgency, 0 to 4. Higher is more urgent
    #[arg(short, long, default_value_t = LEVEL_DEFAULT, allow_negative_numbers = true, value_parser = parse_level)]
    urgency: u8,

    /// Level of importance, 0 to 4. Higher is more important
    #[arg(short, long, default_value_t = LEVEL_DEFAULT, allow_negative_numbers = true, value_parser = parse_level)]
    importance: u8,

    /// Tag for the task, may be repeated
    #[arg(short = 't', long = "tag")]
    tags: Vec<String>,

    /// Directory or file to anchor the task to [default: current directory]
    #[arg(short, long)]
    folder: Option<String>,

    /// A short description. `\n` and `\t` are turned into line breaks and tabs
    #[arg(short, long)]
    description: Option<String>,

    /// Create the task without confirmation
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: AddArgs, config: &Config) -> Result<()> {
    let folder = match normalize_folder(args.folder)? {
        Some(folder) => folder,
        None => path::current_dir()?,
    };

    let mut task = Task::new(args.title, args.urgency, args.importance)
        .with_tags(&args.tags)
        .with_folder(folder);
    if let Some(description) = args.description.filter(|d| !d.is_empty()) {
        task = task.with_description(unescape(&description));
    }

    if !confirm_task(&task, Message::ConfirmAddTask, args.yes)? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    let added = config.tasks().add(&task)?;
    msg_print!(Message::TaskAddedHeader);
    msg_print!(added.short());
    Ok(())
}
