/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) are the interfaces the classification core
/// uses to reach installed-package metadata, the console and the output sink.
pub mod outbound;
