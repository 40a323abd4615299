use super::confirm_task;
use crate::{
    libs::{config::Config, messages::Message, task::TaskFilter},
    msg_error_anyhow, msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Id of the task to remove
    id: String,

    /// Delete the task without confirmation
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: RemoveArgs, config: &Config) -> Result<()> {
    let tasks = config.tasks();

    if !args.yes {
        let task = tasks
            .search(&TaskFilter::by_id(args.id.as_str()))?
            .into_iter()
            .next()
            .ok_or_else(|| msg_error_anyhow!(Message::TaskNotFound(args.id.clone())))?;
        if !confirm_task(&task, Message::ConfirmRemoveTask, false)? {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    let removed = tasks.remove(&args.id)?;
    msg_print!(Message::TaskRemovedHeader);
    msg_print!(removed.short());
    Ok(())
}
