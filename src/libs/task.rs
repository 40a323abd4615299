//! Task record, field validation, search criteria and partial updates.
//!
//! [`Task`] is a plain value with no knowledge of storage; persistence lives
//! in [`crate::db::tasks::Tasks`]. The same module defines the two inputs the
//! repository accepts besides a task: [`TaskFilter`] for searches and
//! [`TaskPatch`] for edits.
//!
//! ## Levels
//!
//! Urgency and importance share a 0..=4 scale. The repository rejects values
//! outside it, while command-line input is first squeezed into range with
//! [`clamp_level`].
//!
//! ## Renderings
//!
//! A task renders itself four ways, none of which touch the database:
//! [`Task::one_line`], [`Task::short`], [`Task::yaml`] and [`Task::json`].

use super::error::{TaskError, TaskResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::path::Path;

/// Highest urgency or importance level.
pub const LEVEL_MAX: u8 = 4;

/// Level used when the user does not pick one.
pub const LEVEL_DEFAULT: u8 = 2;

/// Squeezes an arbitrary integer into the `0..=LEVEL_MAX` range.
pub fn clamp_level(value: i64) -> u8 {
    value.clamp(0, LEVEL_MAX as i64) as u8
}

/// Trims, drops empty entries and deduplicates a tag collection.
///
/// The result is ordered, so two collections naming the same tags produce
/// equal sets regardless of input order or repetition.
pub fn normalize_tags<I, S>(tags: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .map(|tag| tag.as_ref().trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Assigned by the repository on insert, `None` before that.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<String>,
    pub title: String,
    pub urgency: u8,
    pub importance: u8,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Canonical absolute path the task is anchored to.
    pub folder: Option<String>,
    pub description: Option<String>,
}

impl Task {
    pub fn new(title: impl Into<String>, urgency: u8, importance: u8) -> Self {
        Task {
            id: None,
            title: title.into(),
            urgency,
            importance,
            tags: BTreeSet::new(),
            folder: None,
            description: None,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags = normalize_tags(tags);
        self
    }

    pub fn with_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = Some(folder.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Checks every field invariant.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Validation`] for an empty title, a level outside
    /// `0..=4`, an empty tag, or a folder that is not an absolute path.
    pub fn validate(&self) -> TaskResult<()> {
        if self.title.trim().is_empty() {
            return Err(TaskError::validation("title must not be empty"));
        }
        check_level("urgency", self.urgency)?;
        check_level("importance", self.importance)?;

        if self.tags.iter().any(|tag| tag.trim().is_empty()) {
            return Err(TaskError::validation("tags must not be empty strings"));
        }

        if let Some(folder) = &self.folder {
            if !Path::new(folder).is_absolute() {
                return Err(TaskError::validation(format!("folder '{}' is not an absolute path", folder)));
            }
        }

        Ok(())
    }

    /// `<id> [U<urgency> I<importance>] <title>` on a single line.
    pub fn one_line(&self) -> String {
        let title = self.title.replace(['\n', '\t'], " ");
        match &self.id {
            Some(id) => format!("{} [U{} I{}] {}", id, self.urgency, self.importance, title),
            None => format!("[U{} I{}] {}", self.urgency, self.importance, title),
        }
    }

    /// Human readable multi-line block. Absent optional fields are skipped.
    pub fn short(&self) -> String {
        let mut out = self.title.clone();
        if let Some(id) = &self.id {
            let _ = write!(out, "\n    id: {}", id);
        }
        let _ = write!(out, "\n    urgency: {}, importance: {}", self.urgency, self.importance);
        if !self.tags.is_empty() {
            let tags: Vec<&str> = self.tags.iter().map(String::as_str).collect();
            let _ = write!(out, "\n    tags: {}", tags.join(", "));
        }
        if let Some(folder) = &self.folder {
            let _ = write!(out, "\n    folder: {}", folder);
        }
        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            out.push_str("\n    description:");
            for line in description.lines() {
                let _ = write!(out, "\n        {}", line);
            }
        }
        out
    }

    /// YAML document of every field.
    pub fn yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Compact single-line JSON object, suitable for one-task-per-line output.
    pub fn json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn check_level(field: &str, value: u8) -> TaskResult<()> {
    if value > LEVEL_MAX {
        return Err(TaskError::validation(format!(
            "{} must be between 0 and {}, got {}",
            field, LEVEL_MAX, value
        )));
    }
    Ok(())
}

/// How a search matches the task id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdMatch {
    Exact(String),
    Contains(String),
}

impl IdMatch {
    /// Reads the command-line id syntax: `/fragment/` asks for every id
    /// containing `fragment`, anything else is an exact id.
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix('/').and_then(|rest| rest.strip_suffix('/')) {
            Some(fragment) => IdMatch::Contains(fragment.to_string()),
            None => IdMatch::Exact(raw.to_string()),
        }
    }
}

/// Search criteria. Every populated field must match; `None` or an empty
/// tag list matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub id: Option<IdMatch>,
    /// Case-sensitive substring of the title.
    pub title: Option<String>,
    pub urgency: Option<u8>,
    pub importance: Option<u8>,
    /// A task matches when it carries at least one of these tags.
    pub tags: Vec<String>,
    /// Canonical folder, compared for equality.
    pub folder: Option<String>,
    /// Case-sensitive substring of the description.
    pub description: Option<String>,
}

impl TaskFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(IdMatch::Exact(id.into())),
            ..Self::default()
        }
    }

    pub fn by_folder(folder: impl Into<String>) -> Self {
        Self {
            folder: Some(folder.into()),
            ..Self::default()
        }
    }
}

/// Fields to overwrite during an edit.
///
/// Empty strings and an empty tag list count as "not supplied", so an edit
/// can never blank out a title, a folder or the tag set. Levels apply
/// whenever they are present, zero included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub urgency: Option<u8>,
    pub importance: Option<u8>,
    pub tags: Vec<String>,
    pub folder: Option<String>,
    pub description: Option<String>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        supplied(&self.title).is_none()
            && self.urgency.is_none()
            && self.importance.is_none()
            && normalize_tags(&self.tags).is_empty()
            && supplied(&self.folder).is_none()
            && supplied(&self.description).is_none()
    }

    /// Writes the supplied fields over `task`. The id is never touched.
    pub fn apply(&self, task: &mut Task) {
        if let Some(title) = supplied(&self.title) {
            task.title = title.to_string();
        }
        if let Some(urgency) = self.urgency {
            task.urgency = urgency;
        }
        if let Some(importance) = self.importance {
            task.importance = importance;
        }
        let tags = normalize_tags(&self.tags);
        if !tags.is_empty() {
            task.tags = tags;
        }
        if let Some(folder) = supplied(&self.folder) {
            task.folder = Some(folder.to_string());
        }
        if let Some(description) = supplied(&self.description) {
            task.description = Some(description.to_string());
        }
    }
}

fn supplied(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
