use async_trait::async_trait;
use downcast_rs::{impl_downcast, Downcast};

use crate::error::Result;
use crate::types::{AbstractQuery, AnalyzeQueryOptions, DataQuery, QueryFixAction};

/// The two independently optional manipulation methods
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ManipulationMethod {
    /// Interactive query editing
    ModifyQuery,
    /// Log-detail inspection
    AnalyzeQuery,
}

/// Core trait every query-source adapter implements.
///
/// Optional behavior is exposed through the capability accessors, which
/// default to absent. An adapter opts into a capability by implementing the
/// matching trait and overriding the accessor to return itself; nothing is
/// registered centrally and adapters share no concrete base type. Callers
/// probe through the predicates in [`crate::capability`] and only invoke a
/// capability after a positive answer.
pub trait QuerySource: Send + Sync + Downcast {
    /// Type name of this adapter's backend
    fn source_type(&self) -> &'static str;

    /// Import capability, if implemented
    fn import_support(&self) -> Option<&dyn QueryImportSupport> {
        None
    }

    /// Export capability, if implemented
    fn export_support(&self) -> Option<&dyn QueryExportSupport> {
        None
    }

    /// Manipulation capability for one method, if implemented.
    ///
    /// The two methods are independently optional; an adapter overriding this
    /// reports each method it actually carries. The override is the sole
    /// presence signal, so an adapter relying on the defaulted
    /// [`QueryManipulationSupport::analyze_query`] body must report
    /// [`ManipulationMethod::AnalyzeQuery`] as absent.
    fn manipulation_support(
        &self,
        method: ManipulationMethod,
    ) -> Option<&dyn QueryManipulationSupport> {
        let _ = method;
        None
    }
}

impl_downcast!(QuerySource);

/// Optional capability: synthesize concrete queries from abstract ones.
#[async_trait]
pub trait QueryImportSupport: QuerySource {
    /// Convert each abstract query into a concrete query whose filter
    /// semantics are the conjunction of its matchers.
    ///
    /// An empty matcher sequence means "match everything" and must convert,
    /// never fail. An empty matcher value under `Equal` translates to "label
    /// present and equal to the empty string". Regex pattern strings are
    /// rendered with their content unchanged (no re-escaping).
    ///
    /// An operator the concrete language cannot render fails that query's
    /// conversion; whether that rejects the whole batch or substitutes an
    /// adapter-defined fallback for the single item is the adapter's
    /// documented policy. Unless documented otherwise, the returned sequence
    /// has the input's length, index-aligned.
    async fn import_from_abstract_queries(
        &self,
        queries: &[AbstractQuery],
    ) -> Result<Vec<DataQuery>>;
}

/// Optional capability: project concrete queries onto the abstract model.
#[async_trait]
pub trait QueryExportSupport: QuerySource {
    /// Produce, for each input query, the matchers capturing every filterable
    /// dimension expressible as Equal/NotEqual/regex semantics.
    ///
    /// Best-effort and lossy by design: constructs the abstract model cannot
    /// express (aggregations, functions, time-range math) are dropped
    /// silently, not reported as errors. Output index i corresponds to input
    /// index i so callers can re-associate results with originating queries.
    async fn export_to_abstract_queries(
        &self,
        queries: &[DataQuery],
    ) -> Result<Vec<AbstractQuery>>;
}

/// Optional capability: interactive query editing and inspection.
pub trait QueryManipulationSupport: QuerySource {
    /// Return a new query reflecting the fix action.
    ///
    /// Pure; the input query is never mutated. The action payload is an
    /// application-defined descriptor the adapter interprets on its own
    /// terms.
    fn modify_query(&self, query: &DataQuery, action: &QueryFixAction) -> DataQuery;

    /// Report whether the query matches the property described by the
    /// options.
    ///
    /// Independently optional: adapters carrying it also report
    /// [`ManipulationMethod::AnalyzeQuery`](crate::ManipulationMethod::AnalyzeQuery)
    /// from their capability accessor. The default body is never reached
    /// behind a correct probe.
    fn analyze_query(&self, query: &DataQuery, options: &AnalyzeQueryOptions) -> bool {
        let _ = (query, options);
        false
    }
}
