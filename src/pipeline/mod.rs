// src/pipeline/mod.rs

//! Pipeline stages for the incremental publish run.
//!
//! - `diff`: decide whether the collection changed since last publish
//! - `render`: convert one note body into a standalone HTML page
//! - `inline`: resolve embedded image resources into data URIs
//! - `index`: build the sorted listing page
//! - `publish`: orchestrate the batch run

pub mod diff;
pub mod index;
pub mod inline;
pub mod publish;
pub mod render;

pub use diff::is_dirty;
pub use index::{IndexTemplate, build_index};
pub use inline::inline_resources;
pub use publish::{PublishSummary, run_publish};
pub use render::render;
