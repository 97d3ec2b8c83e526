//! pagefix: one-shot rewrite of the category page product-loading script
//!
//! Walks a fixed list of category pages, finds the old inline
//! `loadCategoryProducts(category, gender)` block and replaces it with one
//! that initializes Firebase as a module before loading products.
//!
//! # Example Usage
//!
//! ```no_run
//! use pagefix::{PatchConfig, Patcher};
//!
//! let config = PatchConfig::default().with_base_dir("frontend");
//! let patcher = Patcher::new().unwrap();
//! let report = patcher.run(&config, &mut std::io::stdout()).unwrap();
//!
//! println!("{} files processed", report.len());
//! ```

pub mod cli;
pub mod config;
pub mod models;
pub mod output;
pub mod patcher;

// Re-export commonly used types
pub use config::PatchConfig;
pub use models::{PatchOutcome, PatchReport, PatchStatus};
pub use patcher::{PatchedContent, Patcher};
