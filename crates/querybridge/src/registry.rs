use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::capability::{has_query_export_support, has_query_import_support};
use crate::traits::QuerySource;

/// Registry of plugin-supplied adapter instances, keyed by source id.
///
/// Lookup only: capability detection stays per instance through
/// [`crate::capability`], and registration never requires an adapter to
/// declare anything beyond [`QuerySource`].
pub struct SourceRegistry {
    sources: Arc<RwLock<HashMap<String, Arc<dyn QuerySource>>>>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self {
            sources: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register an adapter instance under an id
    pub async fn register(&self, source_id: &str, source: Arc<dyn QuerySource>) {
        let mut sources = self.sources.write().await;

        if sources.contains_key(source_id) {
            warn!("Overwriting existing adapter: {}", source_id);
        }

        debug!(
            "Registered adapter {} (backend: {})",
            source_id,
            source.source_type()
        );
        sources.insert(source_id.to_string(), source);
    }

    /// Get a registered adapter
    pub async fn get(&self, source_id: &str) -> Option<Arc<dyn QuerySource>> {
        let sources = self.sources.read().await;
        sources.get(source_id).cloned()
    }

    /// Remove a registered adapter
    pub async fn remove(&self, source_id: &str) -> Option<Arc<dyn QuerySource>> {
        let mut sources = self.sources.write().await;
        let removed = sources.remove(source_id);

        if removed.is_some() {
            debug!("Removed adapter: {}", source_id);
        }

        removed
    }

    /// List all registered adapter ids
    pub async fn list(&self) -> Vec<String> {
        let sources = self.sources.read().await;
        sources.keys().cloned().collect()
    }

    /// Ids of adapters that can receive queries from the abstract form
    pub async fn import_capable(&self) -> Vec<String> {
        let sources = self.sources.read().await;
        sources
            .iter()
            .filter(|(_, source)| has_query_import_support(source.as_ref()))
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// Ids of adapters that can project queries onto the abstract form
    pub async fn export_capable(&self) -> Vec<String> {
        let sources = self.sources.read().await;
        sources
            .iter()
            .filter(|(_, source)| has_query_export_support(source.as_ref()))
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// Return the number of registered adapters
    pub async fn len(&self) -> usize {
        let sources = self.sources.read().await;
        sources.len()
    }

    /// Returns `true` when no adapters have been registered
    pub async fn is_empty(&self) -> bool {
        let sources = self.sources.read().await;
        sources.is_empty()
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
