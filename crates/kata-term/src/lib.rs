//! Terminal workbench for a remote code-running service.
//!
//! This crate provides an in-terminal code editor wired to a remote runner:
//! edit source text, execute or submit it against the service, and observe
//! the classified result together with resource metrics. Editor color themes
//! are fetched lazily and cached for the lifetime of the process.

pub mod application;
pub mod configuration;
pub mod domain;
pub mod infrastructure;
pub use application::ui::{destruct_terminal_for_panic, start_loop};
pub use configuration::{Config, ConfigKey};
pub use domain::models::{
    Action, Event, Notification, NotificationKind, OutputState, RunKind, RunnerName,
    ThemeDescriptor,
};
pub use domain::services::{ThemeRegistry, Workbench};
