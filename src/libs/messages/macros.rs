//! Message display macros with debug-aware routing.
//!
//! In normal mode the macros print straight to the terminal. In debug mode
//! (`TACK_DEBUG` or `RUST_LOG` set) they go through `tracing` instead, so
//! user messages interleave with the storage layer's debug events.
//!
//! ```text
//! msg_info!(..) ──▶ is_debug_mode()? ──yes──▶ tracing::info!
//!                                    └─no───▶ println!
//! ```
//!
//! ## Macros
//!
//! - `msg_print!`: plain text
//! - `msg_success!` / `msg_info!` / `msg_warning!`: prefixed status lines
//! - `msg_error!`: prefixed, to stderr
//! - `msg_debug!`: debug mode only, silent otherwise
//! - `msg_error_anyhow!` / `msg_bail_anyhow!`: build or return an `anyhow::Error`
//!
//! ```rust
//! use tack::libs::messages::Message;
//! use tack::{msg_debug, msg_success};
//!
//! msg_success!(Message::TasksPurged(2));
//! msg_debug!("opening database");
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether debug routing is on. Read once per process and cached.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("TACK_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a message as is.
///
/// ```rust
/// # use tack::{msg_print, libs::messages::Message};
/// msg_print!(Message::TaskAddedHeader);
/// msg_print!(Message::TaskEditPreview, true); // surrounded by blank lines
/// ```
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success message with a ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n✅ {}\n", $msg);
        } else {
            println!("\n✅ {}\n", $msg);
        }
    };
}

/// Prints an error message with a ❌ prefix to stderr.
///
/// ```rust
/// # use tack::{msg_error, libs::messages::Message};
/// msg_error!(Message::TaskNotFound("3f2a".to_string()));
/// // stderr: "❌ No task with id '3f2a'."
/// ```
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("\n❌ {}\n", $msg);
        } else {
            eprintln!("\n❌ {}\n", $msg);
        }
    };
}

/// Prints a warning with a ⚠️ prefix.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("\n⚠️ {}\n", $msg);
        } else {
            println!("\n⚠️ {}\n", $msg);
        }
    };
}

/// Prints an informational message with an ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\nℹ️ {}\n", $msg);
        } else {
            println!("\nℹ️ {}\n", $msg);
        }
    };
}

/// Emits a 🔍 debug event. Nothing is printed outside debug mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Builds an `anyhow::Error` from a message.
///
/// ```rust
/// # use tack::{msg_error_anyhow, libs::messages::Message};
/// let err = msg_error_anyhow!(Message::OperationCancelled);
/// assert_eq!(err.to_string(), "Operation cancelled");
/// ```
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("{}", $msg)
    };
}

/// Returns early with an `anyhow::Error` built from a message.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("{}", $msg)
    };
}
