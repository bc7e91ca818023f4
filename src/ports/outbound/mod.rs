/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (site-packages, console, output, etc.).
pub mod formatter;
pub mod legacy_install_reader;
pub mod output_presenter;
pub mod package_registry;
pub mod progress_reporter;

pub use formatter::{ChillFormatter, RenderOptions};
pub use legacy_install_reader::LegacyInstallReader;
pub use output_presenter::OutputPresenter;
pub use package_registry::{PackageRegistry, RecordResult};
pub use progress_reporter::ProgressReporter;
