#![allow(dead_code)]

//! Representative fake adapters used across integration tests.

use async_trait::async_trait;
use querybridge::{
    AbstractLabelMatcher, AbstractLabelOperator, AbstractQuery, AnalyzeQueryOptions, DataQuery,
    ManipulationMethod, QueryError, QueryExportSupport, QueryFixAction, QueryImportSupport,
    QueryManipulationSupport, QuerySource, Result,
};

/// Adapter for a label-selector language covering the full operator set.
///
/// Concrete queries carry an `expr` field holding a selector such as
/// `{job="api",path=~"^/v1/.*"}`. Since every abstract operator is
/// representable, the round-trip law holds for this adapter.
pub struct PromLikeSource;

fn operator_token(operator: AbstractLabelOperator) -> &'static str {
    match operator {
        AbstractLabelOperator::Equal => "=",
        AbstractLabelOperator::NotEqual => "!=",
        AbstractLabelOperator::EqualRegEx => "=~",
        AbstractLabelOperator::NotEqualRegEx => "!~",
    }
}

/// Parse a selector into matchers. Clause-level splitting is naive (test
/// data keeps commas out of values).
pub fn parse_selector(expr: &str) -> Result<Vec<AbstractLabelMatcher>> {
    let inner = expr
        .trim()
        .trim_start_matches('{')
        .trim_end_matches('}')
        .trim();
    if inner.is_empty() {
        return Ok(Vec::new());
    }

    inner
        .split(',')
        .map(|clause| {
            // two-character tokens must win over bare '='
            for (token, operator) in [
                ("!=", AbstractLabelOperator::NotEqual),
                ("!~", AbstractLabelOperator::NotEqualRegEx),
                ("=~", AbstractLabelOperator::EqualRegEx),
                ("=", AbstractLabelOperator::Equal),
            ] {
                if let Some((name, value)) = clause.split_once(token) {
                    let matcher = AbstractLabelMatcher::new(
                        name.trim(),
                        operator,
                        value.trim().trim_matches('"'),
                    );
                    matcher.validate()?;
                    return Ok(matcher);
                }
            }
            Err(QueryError::invalid_query(format!(
                "unparsable clause: {clause}"
            )))
        })
        .collect()
}

pub fn render_selector(matchers: &[AbstractLabelMatcher]) -> String {
    let clauses: Vec<String> = matchers
        .iter()
        .map(|matcher| {
            format!(
                "{}{}\"{}\"",
                matcher.name,
                operator_token(matcher.operator),
                matcher.value
            )
        })
        .collect();
    format!("{{{}}}", clauses.join(","))
}

fn expr_of(query: &DataQuery) -> &str {
    query
        .fields
        .get("expr")
        .and_then(|value| value.as_str())
        .unwrap_or("")
}

impl QuerySource for PromLikeSource {
    fn source_type(&self) -> &'static str {
        "promlike"
    }

    fn import_support(&self) -> Option<&dyn QueryImportSupport> {
        Some(self)
    }

    fn export_support(&self) -> Option<&dyn QueryExportSupport> {
        Some(self)
    }

    fn manipulation_support(
        &self,
        _method: ManipulationMethod,
    ) -> Option<&dyn QueryManipulationSupport> {
        Some(self)
    }
}

#[async_trait]
impl QueryImportSupport for PromLikeSource {
    async fn import_from_abstract_queries(
        &self,
        queries: &[AbstractQuery],
    ) -> Result<Vec<DataQuery>> {
        queries
            .iter()
            .map(|query| {
                for matcher in &query.label_matchers {
                    matcher.validate()?;
                }
                Ok(DataQuery::new(&query.base.ref_id)
                    .with_field("expr", render_selector(&query.label_matchers)))
            })
            .collect()
    }
}

#[async_trait]
impl QueryExportSupport for PromLikeSource {
    async fn export_to_abstract_queries(
        &self,
        queries: &[DataQuery],
    ) -> Result<Vec<AbstractQuery>> {
        queries
            .iter()
            .map(|query| {
                let matchers = parse_selector(expr_of(query))?;
                Ok(AbstractQuery::new(&query.ref_id, matchers))
            })
            .collect()
    }
}

impl QueryManipulationSupport for PromLikeSource {
    fn modify_query(&self, query: &DataQuery, action: &QueryFixAction) -> DataQuery {
        if action.action_type != "ADD_FILTER" {
            return query.clone();
        }
        let (Some(key), Some(value)) = (
            action.payload.get("key").and_then(|v| v.as_str()),
            action.payload.get("value").and_then(|v| v.as_str()),
        ) else {
            return query.clone();
        };

        let mut matchers = parse_selector(expr_of(query)).unwrap_or_default();
        matchers.push(AbstractLabelMatcher::new(
            key,
            AbstractLabelOperator::Equal,
            value,
        ));
        query.clone().with_field("expr", render_selector(&matchers))
    }

    fn analyze_query(&self, query: &DataQuery, options: &AnalyzeQueryOptions) -> bool {
        options
            .options
            .get("expr_contains")
            .and_then(|v| v.as_str())
            .is_some_and(|needle| expr_of(query).contains(needle))
    }
}

/// Adapter for an equality-only key/value filter language.
///
/// Concrete queries carry a `filters` object mapping label names to exact
/// values. Regex and negative operators have no rendering; import rejects
/// the whole batch on the first unsupported operator rather than coercing
/// or corrupting sibling items.
pub struct KvFilterSource;

impl QuerySource for KvFilterSource {
    fn source_type(&self) -> &'static str {
        "kvfilter"
    }

    fn import_support(&self) -> Option<&dyn QueryImportSupport> {
        Some(self)
    }

    fn export_support(&self) -> Option<&dyn QueryExportSupport> {
        Some(self)
    }
}

#[async_trait]
impl QueryImportSupport for KvFilterSource {
    async fn import_from_abstract_queries(
        &self,
        queries: &[AbstractQuery],
    ) -> Result<Vec<DataQuery>> {
        let mut converted = Vec::with_capacity(queries.len());

        for query in queries {
            let mut filters = serde_json::Map::new();
            for matcher in &query.label_matchers {
                matcher.validate()?;
                match matcher.operator {
                    AbstractLabelOperator::Equal => {
                        filters.insert(
                            matcher.name.clone(),
                            serde_json::Value::String(matcher.value.clone()),
                        );
                    }
                    unsupported => {
                        return Err(QueryError::UnsupportedOperator {
                            operator: unsupported,
                            backend: "kvfilter",
                        });
                    }
                }
            }
            converted.push(
                DataQuery::new(&query.base.ref_id)
                    .with_field("filters", serde_json::Value::Object(filters)),
            );
        }

        Ok(converted)
    }
}

#[async_trait]
impl QueryExportSupport for KvFilterSource {
    async fn export_to_abstract_queries(
        &self,
        queries: &[DataQuery],
    ) -> Result<Vec<AbstractQuery>> {
        queries
            .iter()
            .map(|query| {
                let matchers = query
                    .fields
                    .get("filters")
                    .and_then(|value| value.as_object())
                    .map(|filters| {
                        filters
                            .iter()
                            .map(|(name, value)| {
                                AbstractLabelMatcher::new(
                                    name.clone(),
                                    AbstractLabelOperator::Equal,
                                    value.as_str().unwrap_or_default(),
                                )
                            })
                            .collect()
                    })
                    .unwrap_or_default();
                Ok(AbstractQuery::new(&query.ref_id, matchers))
            })
            .collect()
    }
}

/// Adapter with no optional capabilities at all.
pub struct NullSource;

impl QuerySource for NullSource {
    fn source_type(&self) -> &'static str {
        "null"
    }
}
