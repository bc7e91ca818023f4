//! pip-chill - lists the Python packages that were installed on purpose
//!
//! Inventories the distributions installed in a Python environment and
//! splits them into top-level distributions (nothing else installed needs
//! them) and dependency distributions (pulled in by another package), so a
//! minimal requirements file can be rebuilt from the first set.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`chill`): Distribution model, requirement-name extraction,
//!   discovery and classification
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): site-packages, egg-link, interpreter, formatter and console implementations
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use pip_chill::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let paths = SearchPaths::explicit(vec![PathBuf::from(".venv/lib/python3.12/site-packages")])?;
//!
//! let use_case = ChillUseCase::new(
//!     SitePackagesRegistry::new(paths.registry_dirs),
//!     EggLinkReader::new(paths.legacy_dirs),
//!     StderrProgressReporter::default(),
//! );
//!
//! let response = use_case.execute(ChillRequest::default())?;
//! let output = TextFormatter::new().format(&response, RenderOptions::default())?;
//! print!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod chill;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        EggLinkReader, FileSystemWriter, SitePackagesRegistry, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::adapters::outbound::python::{PythonInterpreter, SearchPaths};
    pub use crate::application::dto::{ChillRequest, ChillResponse, OutputFormat};
    pub use crate::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
    pub use crate::application::use_cases::ChillUseCase;
    pub use crate::chill::domain::{
        canonicalize_name, extract, Distribution, DistributionRecord, IgnoreSet,
        RequirementExpression, RequirementName,
    };
    pub use crate::chill::services::{ChillOptions, Classification, Classifier, Discovery};
    pub use crate::ports::outbound::{
        ChillFormatter, LegacyInstallReader, OutputPresenter, PackageRegistry, ProgressReporter,
        RecordResult, RenderOptions,
    };
    pub use crate::shared::error::{ChillError, ExitCode};
    pub use crate::shared::Result;
}
