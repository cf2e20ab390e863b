pub mod config;
pub mod error;
pub mod group;
pub mod load;
pub mod models;
pub mod normalize;
pub mod report;
pub mod thumbnail;

pub use config::ReporterConfig;
pub use error::{ReportError, Result};
pub use group::{DuplicateGroup, GroupKey, Groups, duplicate_set, group_records};
pub use load::{load_assets, parse_assets};
pub use models::*;
pub use normalize::{SpaceCollapse, normalize_title, truncate_chars};
pub use report::{DuplicateReport, GroupReport, MemberReport, Reporter};
pub use thumbnail::ThumbnailPolicy;
