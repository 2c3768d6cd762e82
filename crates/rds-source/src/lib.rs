//! rds-source: parameter group retrieval
//!
//! Lists parameter groups and fetches their parameters, either from the RDS
//! API or from an in-memory fixture.

pub mod aws;
pub mod catalog;
pub mod error;
pub mod memory;
pub mod paging;
pub mod source;

pub use aws::RdsSource;
pub use catalog::{discover_groups, list_all_groups, resolve_group};
pub use error::SourceError;
pub use memory::MemorySource;
pub use paging::{MAX_PAGES, Page, collect_pages};
pub use source::ParameterSource;
