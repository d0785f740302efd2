//! Default field catalog.
//!
//! The remote API returns only a minimal attribute set for each resource
//! type unless a `fields[<collection>]` selector asks for more. Every request
//! built by this crate starts from the catalog below, which selects `@all`
//! for every collection the API knows about. Callers narrow individual
//! collections through [`RequestOptions::field`](crate::RequestOptions::field).

use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Wildcard selector meaning "return every attribute".
pub const ALL_FIELDS: &str = "@all";

/// Every collection name recognised by the API's field-selection mechanism.
pub const COLLECTIONS: &[&str] = &[
    "collections",
    "categories",
    "documents",
    "document_attachments",
    "document_comments",
    "document_parts",
    "enumerations",
    "globalroles",
    "icons",
    "jobs",
    "linkedworkitems",
    "externallylinkedworkitems",
    "linkedoslcresources",
    "pages",
    "page_attachments",
    "plans",
    "projectroles",
    "projects",
    "projecttemplates",
    "testparameters",
    "testparameter_definitions",
    "testrecords",
    "teststep_results",
    "testruns",
    "testrun_attachments",
    "teststepresult_attachments",
    "testrun_comments",
    "usergroups",
    "users",
    "workitems",
    "workitem_attachments",
    "workitem_approvals",
    "workitem_comments",
    "featureselections",
    "teststeps",
    "workrecords",
    "revisions",
    "testrecord_attachments",
];

/// The default field selection: every entry of [`COLLECTIONS`] mapped to
/// [`ALL_FIELDS`].
///
/// Built on first use and shared read-only afterwards.
pub fn default_fields() -> &'static BTreeMap<&'static str, &'static str> {
    static CATALOG: OnceLock<BTreeMap<&'static str, &'static str>> = OnceLock::new();
    CATALOG.get_or_init(|| COLLECTIONS.iter().map(|c| (*c, ALL_FIELDS)).collect())
}

/// Query-string key for a collection's field selector: `fields[<collection>]`.
pub fn field_key(collection: &str) -> String {
    format!("fields[{collection}]")
}
