pub mod allocator;
pub mod filetypes;
pub mod host;
pub mod manager;
pub mod paths;
pub mod settings;
pub mod store;
pub mod tabs;

// Re-export commonly used types for convenience.
pub use filetypes::{Filetype, FiletypeCatalog};
pub use host::{EditorHost, InputOptions, PickEntry, UserInterface};
pub use manager::ScratchpadsManager;
pub use paths::ScratchPaths;
pub use settings::{Settings, SettingsStore};
pub use store::{ScratchpadFile, ScratchpadStore, SortKey};
pub use tabs::TabCoordinator;
