pub mod actions;
pub mod classifier;
mod events;
mod themes;
mod workbench;

pub use actions::ActionsService;
pub use events::EventsService;
pub use themes::ThemeRegistry;
pub use workbench::Workbench;
pub use workbench::DEFAULT_SNIPPET;
