//! Core library modules for tack.
//!
//! - [`task`]: the task record, validation, search filters and patches
//! - [`path`]: folder normalization
//! - [`error`]: the domain error type
//! - [`config`] and [`data_storage`]: where settings and the database live
//! - [`formatter`] and [`view`]: rendering tasks for the terminal
//! - [`messages`]: user-facing text and the macros that print it
//!
//! ```rust
//! use tack::libs::task::{clamp_level, Task};
//!
//! let task = Task::new("Review code", clamp_level(7), 1).with_tags(["review", "review"]);
//! assert_eq!(task.urgency, 4);
//! assert_eq!(task.tags.len(), 1);
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod formatter;
pub mod messages;
pub mod path;
pub mod task;
pub mod view;
