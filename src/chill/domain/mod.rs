pub mod distribution;
pub mod ignore_set;
pub mod package_name;
pub mod record;
pub mod requirement;

pub use distribution::Distribution;
pub use ignore_set::{IgnoreSet, BOOTSTRAP_PACKAGES, SELF_PACKAGE};
pub use package_name::canonicalize_name;
pub use record::DistributionRecord;
pub use requirement::{extract, RequirementError, RequirementExpression, RequirementName};
