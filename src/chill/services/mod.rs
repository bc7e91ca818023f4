pub mod classifier;
pub mod discovery;

pub use classifier::{ChillOptions, Classification, Classifier};
pub use discovery::Discovery;
