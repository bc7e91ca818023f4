use crate::chill::services::ChillOptions;

/// ChillRequest - Internal request DTO for the chill use case
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChillRequest {
    /// Also list installer and build tooling (pip, setuptools, wheel, ...)
    pub show_all: bool,
    /// Hide pip-chill itself from the listing
    pub omit_self: bool,
    /// Additional distribution names to leave out
    pub extra_ignored: Vec<String>,
}

impl ChillRequest {
    pub fn new(show_all: bool, omit_self: bool, extra_ignored: Vec<String>) -> Self {
        Self {
            show_all,
            omit_self,
            extra_ignored,
        }
    }

    /// Classification options derived from this request
    pub fn options(&self) -> ChillOptions {
        ChillOptions {
            show_all: self.show_all,
            omit_self: self.omit_self,
            extra_ignored: self.extra_ignored.clone(),
        }
    }
}
