//! Carrying queries across adapters through the abstract model.
//!
//! The caller holds two opaque adapters and a batch of queries written for
//! the first one; translation succeeds when the source can export to the
//! abstract form and the target can import from it. Adapters share no state,
//! so independent targets can be translated to in parallel.

use tracing::{debug, warn};

use crate::error::{QueryError, Result};
use crate::traits::QuerySource;
use crate::types::DataQuery;

/// Translate concrete queries from one adapter's language into another's.
///
/// Gates on the source's export capability and the target's import
/// capability; absence of either is reported as
/// [`QueryError::OperationNotSupported`] before any translation runs.
/// Translation is lossy by design: dimensions the abstract model cannot
/// express are dropped by the exporting adapter.
pub async fn translate_queries(
    source: &dyn QuerySource,
    target: &dyn QuerySource,
    queries: &[DataQuery],
) -> Result<Vec<DataQuery>> {
    let export = source.export_support().ok_or_else(|| {
        QueryError::operation_not_supported(format!(
            "source adapter '{}' cannot export to abstract queries",
            source.source_type()
        ))
    })?;
    let import = target.import_support().ok_or_else(|| {
        QueryError::operation_not_supported(format!(
            "target adapter '{}' cannot import abstract queries",
            target.source_type()
        ))
    })?;

    debug!(
        "Translating {} queries from {} to {}",
        queries.len(),
        source.source_type(),
        target.source_type()
    );

    let abstract_queries = export.export_to_abstract_queries(queries).await?;

    if abstract_queries.len() != queries.len() {
        warn!(
            "Export from {} returned {} queries for {} inputs",
            source.source_type(),
            abstract_queries.len(),
            queries.len()
        );
    }

    import.import_from_abstract_queries(&abstract_queries).await
}

/// Translate the same batch into several target adapters in parallel.
///
/// The source is exported once; imports run concurrently and independently,
/// so one target's failure never affects a sibling's outcome. The returned
/// outcomes are index-aligned with `targets`. Fails up front only when the
/// source itself cannot export.
pub async fn translate_queries_to_all(
    source: &dyn QuerySource,
    targets: &[&dyn QuerySource],
    queries: &[DataQuery],
) -> Result<Vec<Result<Vec<DataQuery>>>> {
    let export = source.export_support().ok_or_else(|| {
        QueryError::operation_not_supported(format!(
            "source adapter '{}' cannot export to abstract queries",
            source.source_type()
        ))
    })?;

    let abstract_queries = export.export_to_abstract_queries(queries).await?;
    let abstract_queries = &abstract_queries;

    let imports = targets.iter().map(|&target| async move {
        let import = target.import_support().ok_or_else(|| {
            QueryError::operation_not_supported(format!(
                "target adapter '{}' cannot import abstract queries",
                target.source_type()
            ))
        })?;
        import.import_from_abstract_queries(abstract_queries).await
    });

    Ok(futures::future::join_all(imports).await)
}
