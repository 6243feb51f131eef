use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{QueryError, Result};

/// Reference to the data source a query runs against.
///
/// Opaque to this layer beyond its identifying fields.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct DataSourceRef {
    /// Backend type identifier (prometheus, loki, graphite, etc.)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    /// Unique identifier of the data source instance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}

/// Minimal base query record: an identifying reference plus backend-specific
/// fields this layer carries but never interprets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataQuery {
    /// Identifier used to re-associate results with the originating query
    pub ref_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_type: Option<String>,
    /// Hidden queries are kept but not executed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datasource: Option<DataSourceRef>,
    /// Backend-specific payload (expressions, aggregations, time-range math)
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl DataQuery {
    pub fn new(ref_id: impl Into<String>) -> Self {
        Self {
            ref_id: ref_id.into(),
            ..Default::default()
        }
    }

    /// Attach a backend-specific field
    pub fn with_field(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

/// Attached to transient result payloads to mark their semantic role.
///
/// Never part of a query's identity and never persisted with the query.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataTopic {
    Annotations,
}

impl fmt::Display for DataTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataTopic::Annotations => write!(f, "annotations"),
        }
    }
}

/// Comparison operators available to a label matcher.
///
/// Closed set: adapters map every concrete operator they support onto exactly
/// one of these or reject the query as untranslatable.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum AbstractLabelOperator {
    Equal,
    NotEqual,
    EqualRegEx,
    NotEqualRegEx,
}

impl AbstractLabelOperator {
    /// Whether the matcher value is a regular-expression pattern
    pub fn is_regex(self) -> bool {
        matches!(self, Self::EqualRegEx | Self::NotEqualRegEx)
    }
}

impl fmt::Display for AbstractLabelOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbstractLabelOperator::Equal => write!(f, "Equal"),
            AbstractLabelOperator::NotEqual => write!(f, "NotEqual"),
            AbstractLabelOperator::EqualRegEx => write!(f, "EqualRegEx"),
            AbstractLabelOperator::NotEqualRegEx => write!(f, "NotEqualRegEx"),
        }
    }
}

/// One filter clause: label name, comparison operator and operand.
///
/// Immutable value object with structural equality. The value is a
/// regular-expression pattern when the operator is a regex variant and must
/// pass through translation without re-escaping. An empty value under `Equal`
/// means "label present and equal to the empty string", not "label absent".
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct AbstractLabelMatcher {
    pub name: String,
    pub value: String,
    pub operator: AbstractLabelOperator,
}

impl AbstractLabelMatcher {
    pub fn new(
        name: impl Into<String>,
        operator: AbstractLabelOperator,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            operator,
        }
    }

    /// Check the matcher is well formed.
    ///
    /// Adapters reject the individual query on failure rather than guessing
    /// intent. The operator set is closed at the type level, so only the
    /// label name needs a runtime check.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(QueryError::malformed_matcher("label name must not be empty"));
        }
        Ok(())
    }
}

/// Engine-independent representation of a label-based query.
///
/// The filter is the logical AND of all matchers; no OR, grouping or nesting
/// is representable. Matcher order is preserved for adapters whose concrete
/// language is order-sensitive. Constructed fresh per translation call and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbstractQuery {
    #[serde(flatten)]
    pub base: DataQuery,
    /// Ordered matcher sequence; empty means "match everything"
    pub label_matchers: Vec<AbstractLabelMatcher>,
}

impl AbstractQuery {
    pub fn new(ref_id: impl Into<String>, label_matchers: Vec<AbstractLabelMatcher>) -> Self {
        Self {
            base: DataQuery::new(ref_id),
            label_matchers,
        }
    }

    /// True when the query carries no filter at all.
    ///
    /// Every adapter must import this as "match everything", never as an
    /// error.
    pub fn matches_everything(&self) -> bool {
        self.label_matchers.is_empty()
    }
}

/// Descriptor for an interactive query fix.
///
/// Defined by the embedding application; carried through to
/// [`modify_query`](crate::QueryManipulationSupport::modify_query) without
/// interpretation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryFixAction {
    /// Discriminant understood by the adapter (e.g. "ADD_FILTER")
    #[serde(rename = "type")]
    pub action_type: String,
    #[serde(flatten)]
    pub payload: serde_json::Map<String, serde_json::Value>,
}

impl QueryFixAction {
    pub fn new(action_type: impl Into<String>) -> Self {
        Self {
            action_type: action_type.into(),
            payload: serde_json::Map::new(),
        }
    }

    pub fn with_field(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.payload.insert(key.into(), value.into());
        self
    }
}

/// Options for [`analyze_query`](crate::QueryManipulationSupport::analyze_query).
///
/// Defined by the embedding application; carried through without
/// interpretation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeQueryOptions {
    #[serde(flatten)]
    pub options: serde_json::Map<String, serde_json::Value>,
}

impl AnalyzeQueryOptions {
    pub fn with_field(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}
