/// Python environment discovery: interpreter probe and search paths
mod interpreter;
mod search_paths;

pub use interpreter::PythonInterpreter;
pub use search_paths::SearchPaths;
