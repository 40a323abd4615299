use super::{confirm_task, normalize_folder, parse_level, unescape};
use crate::{
    libs::{
        config::Config,
        messages::Message,
        task::{TaskFilter, TaskPatch},
    },
    msg_error_anyhow, msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Id of the task to edit
    id: String,

    /// New title
    #[arg(short = 'T', long)]
    title: Option<String>,

    /// New urgency, 0 to 4
    #[arg(short, long, allow_negative_numbers = true, value_parser = parse_level)]
    urgency: Option<u8>,

    /// New importance, 0 to 4
    #[arg(short, long, allow_negative_numbers = true, value_parser = parse_level)]
    importance: Option<u8>,

    /// Replace the tags, may be repeated
    #[arg(short = 't', long = "tag")]
    tags: Vec<String>,

    /// New anchor folder
    #[arg(short, long)]
    folder: Option<String>,

    /// New description
    #[arg(short, long)]
    description: Option<String>,

    /// Save the changes without confirmation
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: EditArgs, config: &Config) -> Result<()> {
    let patch = TaskPatch {
        title: args.title,
        urgency: args.urgency,
        importance: args.importance,
        tags: args.tags,
        folder: normalize_folder(args.folder)?,
        description: args.description.map(|d| unescape(&d)),
    };

    if patch.is_empty() {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    let tasks = config.tasks();
    if !args.yes {
        let mut preview = tasks
            .search(&TaskFilter::by_id(args.id.as_str()))?
            .into_iter()
            .next()
            .ok_or_else(|| msg_error_anyhow!(Message::TaskNotFound(args.id.clone())))?;
        patch.apply(&mut preview);

        msg_print!(Message::TaskEditPreview);
        if !confirm_task(&preview, Message::ConfirmEditTask, false)? {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    let updated = tasks.edit(&args.id, &patch)?;
    msg_print!(Message::TaskUpdatedHeader);
    msg_print!(updated.short());
    Ok(())
}
