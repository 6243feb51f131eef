//! Runtime capability detection for opaque adapter references.
//!
//! Adapters are supplied by independently developed plugins that share
//! nothing beyond [`QuerySource`]. A caller holding `&dyn QuerySource` asks
//! these predicates whether a specific instance carries an optional
//! capability, then narrows through the matching accessor for the call:
//!
//! ```rust
//! use querybridge::{has_query_import_support, QuerySource};
//!
//! fn can_receive_queries(target: &dyn QuerySource) -> bool {
//!     has_query_import_support(target)
//! }
//! ```
//!
//! The predicates never fail and perform no side effects; detection is
//! advisory, so every optional call must stay gated behind its predicate. A
//! caller holding `Option<&dyn QuerySource>` treats `None` as "capability
//! absent" (`source.is_some_and(has_query_import_support)`).

use crate::traits::{ManipulationMethod, QuerySource};

/// True iff the adapter can convert abstract queries into its own language.
///
/// A positive answer guarantees [`QuerySource::import_support`] returns the
/// narrowed view and the subsequent call cannot fail due to absence.
pub fn has_query_import_support(source: &dyn QuerySource) -> bool {
    source.import_support().is_some()
}

/// True iff the adapter can project its own queries onto the abstract model.
///
/// A positive answer guarantees [`QuerySource::export_support`] returns the
/// narrowed view.
pub fn has_query_export_support(source: &dyn QuerySource) -> bool {
    source.export_support().is_some()
}

/// True iff the adapter carries the given manipulation method.
///
/// Parameterized because the two manipulation methods are independently
/// optional, unlike the single-method import/export capabilities. A presence
/// check only: nothing guarantees a present `modify_query` returns a
/// well-formed query.
pub fn has_query_manipulation_support(
    source: &dyn QuerySource,
    method: ManipulationMethod,
) -> bool {
    source.manipulation_support(method).is_some()
}
