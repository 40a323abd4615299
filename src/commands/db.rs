use super::confirm;
use crate::{
    libs::{
        config::{Config, CONFIG_FILE_NAME},
        data_storage::DataStorage,
        messages::Message,
        path,
    },
    msg_bail_anyhow, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct DbArgs {
    #[command(subcommand)]
    command: DbCommand,
}

#[derive(Debug, Subcommand)]
enum DbCommand {
    /// Delete every task and keep the database
    Purge {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Drop every table of the database
    Drop {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Move the database file and remember its new location
    Move {
        /// Destination file
        destination: PathBuf,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Print the location of the database and its schema version
    Path,
}

pub fn cmd(args: DbArgs, config: &Config) -> Result<()> {
    match args.command {
        DbCommand::Purge { yes } => handle_purge(config, yes),
        DbCommand::Drop { yes } => handle_drop(config, yes),
        DbCommand::Move { destination, yes } => handle_move(config, &destination, yes),
        DbCommand::Path => handle_path(config),
    }
}

fn handle_purge(config: &Config, yes: bool) -> Result<()> {
    if !confirm(Message::ConfirmPurge, yes)? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }
    let removed = config.tasks().purge_all()?;
    msg_success!(Message::TasksPurged(removed));
    Ok(())
}

fn handle_drop(config: &Config, yes: bool) -> Result<()> {
    if !confirm(Message::ConfirmDrop, yes)? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }
    let db = config.db();
    db.drop_schema()?;
    msg_success!(Message::DbDropped(db.location().display().to_string()));
    Ok(())
}

fn handle_move(config: &Config, destination: &Path, yes: bool) -> Result<()> {
    let source = resolve_location(&config.db_location())?;
    let destination = resolve_location(destination)?;
    if source == destination {
        msg_bail_anyhow!(Message::DbMoveTargetIsSource(source.display().to_string()));
    }
    if destination.exists() {
        msg_warning!(Message::DbMoveOverwrites(destination.display().to_string()));
    }
    if !confirm(Message::ConfirmMove(destination.display().to_string()), yes)? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
    move_database(&source, &destination, &config_path)?;

    msg_success!(Message::DbMoved(source.display().to_string(), destination.display().to_string()));
    msg_info!(Message::ConfigSaved(config_path.display().to_string()));
    Ok(())
}

/// Absolute, canonical form of a database location.
pub fn resolve_location(location: &Path) -> Result<PathBuf> {
    Ok(PathBuf::from(path::normalize(location)?))
}

/// Moves the database file and records its new absolute location in the
/// configuration file at `config_file`. Returns that location.
///
/// Only `db_path` changes in the saved file; environment and flag overrides
/// never end up in it.
pub fn move_database(source: &Path, destination: &Path, config_file: &Path) -> Result<PathBuf> {
    let source = resolve_location(source)?;
    let destination = resolve_location(destination)?;
    if source == destination {
        msg_bail_anyhow!(Message::DbMoveTargetIsSource(source.display().to_string()));
    }

    move_file(&source, &destination)?;

    let mut saved = Config::read_from(config_file)?;
    saved.db_path = Some(destination.clone());
    saved.save_to(config_file)?;
    Ok(destination)
}

fn handle_path(config: &Config) -> Result<()> {
    let db = config.db();
    msg_print!(Message::DbLocation(db.location().display().to_string()));
    msg_print!(Message::DatabaseVersion(db.schema_version()?));
    Ok(())
}

/// Renames `source` to `destination`, overwriting it. Falls back to copy and
/// delete when the two are on different filesystems.
pub fn move_file(source: &Path, destination: &Path) -> Result<()> {
    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    if fs::rename(source, destination).is_err() {
        fs::copy(source, destination)?;
        fs::remove_file(source)?;
    }
    Ok(())
}
