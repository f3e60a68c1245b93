/// Extract the bare type name from a full module path.
///
/// Given `"opsdesk_pipeline::filter::CategoryFilter"`, returns
/// `"CategoryFilter"`.
pub fn short_type_name(full: &str) -> &str {
    full.rsplit("::").next().unwrap_or(full)
}
