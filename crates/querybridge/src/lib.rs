//! # querybridge
//!
//! Vendor-neutral abstract query model and runtime capability detection for
//! plugin-supplied query-source adapters.
//!
//! A central application moves queries between otherwise-incompatible
//! label-based backends by translating through an abstract form, and probes
//! arbitrary adapters for optional behavior without static knowledge of
//! their concrete type.
//!
//! ## Architecture
//!
//! The crate uses a trait-based architecture with capability detection:
//!
//! - **QuerySource**: core trait every adapter implements
//! - **QueryImportSupport**: optional trait for abstract-to-concrete
//!   translation
//! - **QueryExportSupport**: optional trait for concrete-to-abstract
//!   translation
//! - **QueryManipulationSupport**: optional trait for interactive query
//!   editing and inspection
//!
//! Optional traits are discovered per instance through the predicates in
//! [`capability`]; nothing is registered centrally and adapters share no
//! concrete base type.
//!
//! ## Example
//!
//! ```rust
//! use querybridge::{
//!     has_query_export_support, has_query_import_support, translate_queries,
//!     DataQuery, QuerySource,
//! };
//!
//! # async fn example(
//! #     source: &dyn QuerySource,
//! #     target: &dyn QuerySource,
//! #     queries: &[DataQuery],
//! # ) -> querybridge::Result<()> {
//! // Carry queries across backends when both sides cooperate
//! if has_query_export_support(source) && has_query_import_support(target) {
//!     let translated = translate_queries(source, target, queries).await?;
//!     assert_eq!(translated.len(), queries.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Implementing an adapter
//!
//! 1. Create a struct that implements `QuerySource`
//! 2. Implement the optional capability traits the backend can honor
//! 3. Override the matching capability accessors to return `self`
//!
//! The abstract form is a conjunction of label matchers and nothing more; an
//! adapter whose language carries constructs outside that ceiling drops them
//! during export and documents its failure policy for operators it cannot
//! import.

pub mod capability;
pub mod error;
pub mod registry;
pub mod traits;
pub mod translate;
pub mod types;

// Re-export commonly used items
pub use capability::{
    has_query_export_support, has_query_import_support, has_query_manipulation_support,
};
pub use error::{QueryError, Result};
pub use registry::SourceRegistry;
pub use traits::{
    ManipulationMethod, QueryExportSupport, QueryImportSupport, QueryManipulationSupport,
    QuerySource,
};
pub use translate::{translate_queries, translate_queries_to_all};
pub use types::{
    AbstractLabelMatcher, AbstractLabelOperator, AbstractQuery, AnalyzeQueryOptions, DataQuery,
    DataSourceRef, DataTopic, QueryFixAction,
};
