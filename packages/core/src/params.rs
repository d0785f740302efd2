//! Per-call query parameter construction.
//!
//! [`RequestOptions`] enumerates every optional parameter an endpoint
//! accepts. [`merge_params`] turns a set of options into the final
//! [`QueryParams`] sent on the wire:
//!
//! 1. every default field selector, as `fields[<collection>] = @all`;
//! 2. caller field selectors, overwriting the defaults they name;
//! 3. `page[size]`, `page[number]`, `include`, `revision`, `query`, `sort`
//!    and `templates`, each only when supplied.
//!
//! Absent options never appear in the output, not even as empty values.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::fields::{default_fields, field_key};

// ---------------------------------------------------------------------------
// ParamValue
// ---------------------------------------------------------------------------

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Bool(bool),
}

/// Formats the value as it appears in a query string.
impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(s) => f.write_str(s),
            ParamValue::Int(n) => write!(f, "{n}"),
            ParamValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Str(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Str(s)
    }
}

impl From<u32> for ParamValue {
    fn from(n: u32) -> Self {
        ParamValue::Int(i64::from(n))
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        ParamValue::Int(n)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}

// ---------------------------------------------------------------------------
// QueryParams
// ---------------------------------------------------------------------------

/// The query parameters of one request, keyed by their literal wire name
/// (`fields[workitems]`, `page[size]`, `include`, ...).
///
/// Key order carries no meaning; a [`BTreeMap`] keeps output deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryParams(BTreeMap<String, ParamValue>);

impl QueryParams {
    /// An empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a parameter.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Only the `fields[...]` selectors.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.iter().filter(|(k, _)| k.starts_with("fields["))
    }

    /// The parameters as `(key, value)` string pairs, ready for URL encoding.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(k, v)| (k.clone(), v.to_string()))
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

// ---------------------------------------------------------------------------
// RequestOptions
// ---------------------------------------------------------------------------

/// Optional parameters recognised by the API's read endpoints.
///
/// `Default` supplies nothing, so the request carries only the default
/// field selectors.
///
/// ```
/// use almrest::RequestOptions;
///
/// let options = RequestOptions::new()
///     .field("workitems", "id,title")
///     .page(50, 2)
///     .sort("-created");
/// let params = options.to_query();
/// assert_eq!(params.get("fields[workitems]").unwrap().to_string(), "id,title");
/// assert_eq!(params.get("page[size]").unwrap().to_string(), "50");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Field selectors keyed by collection name, e.g. `workitems → "id,title"`.
    /// Collections not named here keep the `@all` default.
    pub fields: BTreeMap<String, String>,

    /// Sent as `page[size]`.
    pub page_size: Option<u32>,

    /// Sent as `page[number]`.
    pub page_number: Option<u32>,

    /// Comma-separated relationship paths to include.
    pub include: Option<String>,

    /// Read the resource as of this revision.
    pub revision: Option<String>,

    /// Lucene-style filter expression.
    pub query: Option<String>,

    /// Comma-separated sort keys; a leading `-` sorts descending.
    pub sort: Option<String>,

    /// Return templates instead of regular resources (plans, documents).
    pub templates: Option<bool>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the field selector for one collection.
    pub fn field(mut self, collection: impl Into<String>, selector: impl Into<String>) -> Self {
        self.fields.insert(collection.into(), selector.into());
        self
    }

    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    pub fn page_number(mut self, number: u32) -> Self {
        self.page_number = Some(number);
        self
    }

    /// Set both `page[size]` and `page[number]`.
    pub fn page(self, size: u32, number: u32) -> Self {
        self.page_size(size).page_number(number)
    }

    pub fn include(mut self, include: impl Into<String>) -> Self {
        self.include = Some(include.into());
        self
    }

    pub fn revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = Some(revision.into());
        self
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn templates(mut self, templates: bool) -> Self {
        self.templates = Some(templates);
        self
    }

    /// Merge these options over the shared default field catalog.
    pub fn to_query(&self) -> QueryParams {
        merge_params(default_fields(), self)
    }
}

/// Build the query parameters for one call.
///
/// `defaults` maps collection names to selectors; each becomes a
/// `fields[<collection>]` entry. Caller field selectors then overwrite or
/// extend those entries. Collection names are not validated: an unknown
/// name is sent as-is and left for the server to judge.
pub fn merge_params(defaults: &BTreeMap<&str, &str>, options: &RequestOptions) -> QueryParams {
    let mut params = QueryParams::new();

    for (collection, selector) in defaults {
        params.insert(field_key(collection), *selector);
    }
    for (collection, selector) in &options.fields {
        params.insert(field_key(collection), selector.as_str());
    }

    if let Some(size) = options.page_size {
        params.insert("page[size]", size);
    }
    if let Some(number) = options.page_number {
        params.insert("page[number]", number);
    }
    if let Some(ref include) = options.include {
        params.insert("include", include.as_str());
    }
    if let Some(ref revision) = options.revision {
        params.insert("revision", revision.as_str());
    }
    if let Some(ref query) = options.query {
        params.insert("query", query.as_str());
    }
    if let Some(ref sort) = options.sort {
        params.insert("sort", sort.as_str());
    }
    if let Some(templates) = options.templates {
        params.insert("templates", templates);
    }

    params
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
