//! Engine bootstrap for solidus-admin
//!
//! Ties the UI components to host configuration:
//!
//! - **Settings**: [`AdminSettings`] from TOML with `SOLIDUS_ADMIN_*` overrides
//! - **Container**: component factories by key, e.g. `"ui/pagination"`
//! - **Main navigation**: the sorted side menu
//! - **Engine**: validates settings, registers components, builds tables
//!   from configured column presets
//!
//! This crate never installs a `tracing` subscriber; that is left to the host.

pub mod container;
pub mod engine;
pub mod error;
pub mod main_nav;
pub mod settings;

pub use container::{ComponentFactory, Container};
pub use engine::{Engine, PAGINATION_COMPONENT};
pub use error::{EngineError, Result};
pub use main_nav::{MainNav, NavItem};
pub use settings::{AdminSettings, ENV_PREFIX, TablePreset};
