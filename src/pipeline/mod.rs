//! Pipeline entry points for crawler operations.
//!
//! - `run_crawler`: Discover card links, scrape them and write the dataset
//! - `run_links`: Discover card links only
//! - `run_validate`: Check configuration and selectors
//! - `run_info`: Report on the written dataset

pub mod crawl;
pub mod info;
pub mod links;
pub mod validate;

pub use crawl::{run_crawler, scrape_all, sort_by_name};
pub use info::run_info;
pub use links::run_links;
pub use validate::run_validate;
