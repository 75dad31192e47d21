//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/records/{general_id}/context', use [format_endpoint].

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The dashboard with the date-range picker, account multiselect and records table.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";

/// The route for the records table fragment.
pub const RECORDS_TABLE: &str = "/api/records";
/// The route for the filtered records as JSON.
pub const RECORDS_JSON: &str = "/api/records.json";
/// The route for the filtered records as CSV.
pub const RECORDS_CSV: &str = "/api/records.csv";
/// The route for the lines of the journal entry of a selected record.
pub const GENERAL_CONTEXT: &str = "/api/records/{general_id}/context";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/records/{general_id}', '{general_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let (Some(param_start), Some(param_end)) = (endpoint_path.find('{'), endpoint_path.find('}'))
    else {
        return endpoint_path.to_string();
    };

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end + 1..]
    )
}
