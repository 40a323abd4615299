//! Output formats for printing tasks.
//!
//! The per-task formats map directly onto [`Task`]'s own renderings:
//!
//! | Format    | Output                                        |
//! |-----------|-----------------------------------------------|
//! | `oneline` | `<id> [U<u> I<i>] <title>`                    |
//! | `short`   | title line plus indented details              |
//! | `yaml`    | one `---` separated YAML document per task    |
//! | `json`    | one JSON object per line                      |
//! | `table`   | all results in a single terminal table        |
//!
//! `table` only makes sense for a whole result set and is handled by
//! [`View::print`](super::view::View::print); [`render`] falls back to the
//! one-line form for it.

use super::task::Task;
use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Oneline,
    Short,
    Yaml,
    Json,
    Table,
}

/// Renders one task. The result carries no trailing newline.
pub fn render(task: &Task, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Oneline | OutputFormat::Table => task.one_line(),
        OutputFormat::Short => task.short(),
        OutputFormat::Yaml => format!("---\n{}", task.yaml()?.trim_end()),
        OutputFormat::Json => task.json()?,
    };
    Ok(text)
}
