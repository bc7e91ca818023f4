/// Filesystem adapters: installed metadata, legacy links and output files
mod egg_link;
mod file_writer;
pub mod metadata;
mod site_packages;

pub use egg_link::EggLinkReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use site_packages::SitePackagesRegistry;
