//! Scaffolding for fraud-case evidence folders: a fixed directory tree, README
//! and template files, an evidence log, a naming guide, and `case_info.json`.

pub mod case;
pub mod config;
pub mod logging;

pub mod error;

pub use case::builder::{create_case_directory, CaseDirectoryBuilder, ScaffoldReport};
pub use config::{ScaffoldConfig, WritePolicy};
pub use error::{CoreError, CoreResult};
