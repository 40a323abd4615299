pub mod add;
pub mod db;
pub mod edit;
pub mod remove;
pub mod search;
pub mod shell;
pub mod show;

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::path;
use crate::libs::task::{clamp_level, Task};
use crate::msg_print;
use anyhow::Result;
use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Add a new task")]
    Add(add::AddArgs),
    #[command(about = "Search for tasks")]
    Search(search::SearchArgs),
    #[command(about = "Show one task, or every task anchored to the current directory")]
    Show(show::ShowArgs),
    #[command(about = "Edit a task")]
    Edit(edit::EditArgs),
    #[command(about = "Remove a task")]
    Remove(remove::RemoveArgs),
    #[command(about = "Print a script integrating tack with your shell")]
    Shell(shell::ShellArgs),
    #[command(about = "Manage the task database")]
    Db(db::DbArgs),
}

/// tack is a command-line tool to create and manage tasks and todo lists.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Location of the task database
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Runs the parsed command against the database `config` points at.
    ///
    /// The database is initialized first on every run.
    pub fn menu(self, config: &Config) -> Result<()> {
        config.db().initialize()?;

        match self.command {
            Commands::Add(args) => add::cmd(args, config),
            Commands::Search(args) => search::cmd(args, config),
            Commands::Show(args) => show::cmd(args, config),
            Commands::Edit(args) => edit::cmd(args, config),
            Commands::Remove(args) => remove::cmd(args, config),
            Commands::Shell(args) => shell::cmd(args),
            Commands::Db(args) => db::cmd(args, config),
        }
    }
}

/// Level argument parser: any integer, squeezed into `0..=4`.
pub(crate) fn parse_level(raw: &str) -> Result<u8, String> {
    raw.trim().parse::<i64>().map(clamp_level).map_err(|e| e.to_string())
}

/// Turns the literal `\n` and `\t` sequences typed on a command line into
/// real line breaks and tabs.
pub(crate) fn unescape(raw: &str) -> String {
    raw.replace("\\n", "\n").replace("\\t", "\t")
}

pub(crate) fn normalize_folder(folder: Option<String>) -> Result<Option<String>> {
    Ok(folder.filter(|f| !f.is_empty()).map(path::normalize).transpose()?)
}

/// Asks a yes/no question, answering yes by itself when `assume_yes` is set.
pub(crate) fn confirm(prompt: Message, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(true)
        .interact()?;
    Ok(confirmed)
}

/// Shows `task` as YAML, then asks `prompt`.
pub(crate) fn confirm_task(task: &Task, prompt: Message, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    msg_print!(task.yaml()?.trim_end());
    confirm(prompt, false)
}
