/// Chill - Domain layer for classifying installed distributions
///
/// Pure business logic: requirement-name extraction, the distribution model,
/// and the services that discover and classify installed packages. Nothing in
/// here touches the file system directly; I/O goes through the outbound ports.
pub mod domain;
pub mod services;
