//! Case domain module.
//!
//! # Module Structure
//!
//! - `model`: `SuccessCase`, `Role`, `Industry` and the publish draft
//! - `filter`: gallery filtering (`CaseFilter`, `Facet`)
//! - `repository`: repository trait for the case collection
//! - `seed`: built-in showcase records

mod filter;
mod model;
mod repository;
mod seed;

pub use filter::{CaseFilter, FACET_ALL, Facet};
pub use model::{
    CaseDraft, DEFAULT_DRAFT_CLIENT, DEFAULT_DRAFT_IMAGE_URL, DEFAULT_DRAFT_RESULTS,
    DEFAULT_DRAFT_SUMMARY, DRAFT_TRANSFORMATION_TAG, Industry, Role, SuccessCase,
};
pub use repository::CaseRepository;
pub use seed::seed_cases;
