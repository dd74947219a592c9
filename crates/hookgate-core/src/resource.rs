//! Resource resolution from the method ARN.
//!
//! A method ARN looks like:
//!
//! ```text
//! arn:aws:execute-api:<region>:<account>:<api-id>/<stage>/<METHOD>/<resource>/...
//! ```
//!
//! Only the first path segment after the HTTP method is granted.

/// Resource granted when the method ARN carries no resource segment.
pub const ROOT_RESOURCE: &str = "/";

/// Index of the resource segment after splitting on `/`.
const RESOURCE_SEGMENT_INDEX: usize = 3;

/// Resolve the resource path to grant from a method ARN.
///
/// Returns `/<segment>` when the segment is present and non-empty, and `/`
/// otherwise. Never fails.
#[must_use]
pub fn resolve_resource(routing_identifier: &str) -> String {
    match routing_identifier.split('/').nth(RESOURCE_SEGMENT_INDEX) {
        Some(segment) if !segment.is_empty() => format!("/{segment}"),
        _ => ROOT_RESOURCE.to_owned(),
    }
}
