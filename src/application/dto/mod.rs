/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod chill_request;
mod chill_response;
mod output_format;

pub use chill_request::ChillRequest;
pub use chill_response::ChillResponse;
pub use output_format::OutputFormat;
