//! Resource path construction.
//!
//! Every endpoint owns a fixed template such as
//! `projects/{}/workitems/{}/linkedworkitems/{}/{}/{}`. [`build_path`] fills
//! the `{}` placeholders left to right with caller identifiers. There is no
//! I/O and no escaping here: identifiers are substituted exactly as given,
//! and whatever encoding the HTTP client applies when the path is joined to
//! the base URL is the only encoding that happens.

/// Substitute `identifiers` into the `{}` placeholders of `template`.
///
/// Placeholders without a matching identifier are left as a literal `{}`;
/// identifiers without a matching placeholder are ignored.
///
/// ```
/// use almrest::build_path;
///
/// assert_eq!(
///     build_path("projects/{}/plans/{}", &["MyProjectId", "MyPlanId"]),
///     "projects/MyProjectId/plans/MyPlanId",
/// );
/// ```
pub fn build_path(template: &str, identifiers: &[&str]) -> String {
    let extra: usize = identifiers.iter().map(|id| id.len()).sum();
    let mut path = String::with_capacity(template.len() + extra);
    let mut ids = identifiers.iter();
    let mut rest = template;

    while let Some(pos) = rest.find("{}") {
        path.push_str(&rest[..pos]);
        match ids.next() {
            Some(id) => path.push_str(id),
            None => path.push_str("{}"),
        }
        rest = &rest[pos + 2..];
    }
    path.push_str(rest);
    path
}

/// Number of `{}` placeholders in `template`.
pub fn placeholder_count(template: &str) -> usize {
    template.matches("{}").count()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
