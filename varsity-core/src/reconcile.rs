//! Team identity reconciliation.
//!
//! Providers variously supply a team's "name" and "location" as full
//! duplicates, one containing the other, or genuinely disjoint parts. This
//! module resolves the split into one display identity; its output is the
//! only key used for cross-endpoint matching.

/// Sentinel used when a provider supplies no usable name parts.
pub const UNKNOWN_TEAM: &str = "Unknown Team";

/// Resolve a `(name, location)` pair into a canonical display name.
///
/// - both equal (case-insensitive): use either
/// - one a substring of the other: use the longer string
/// - disjoint: `"{location} {name}"`
/// - one present: use it
/// - neither: [`UNKNOWN_TEAM`]
#[must_use]
pub fn display_name(name: &str, location: &str) -> String {
    let name = name.trim();
    let location = location.trim();
    match (name.is_empty(), location.is_empty()) {
        (true, true) => UNKNOWN_TEAM.to_string(),
        (false, true) => name.to_string(),
        (true, false) => location.to_string(),
        (false, false) => {
            let n = name.to_lowercase();
            let l = location.to_lowercase();
            if n == l {
                name.to_string()
            } else if l.contains(&n) {
                location.to_string()
            } else if n.contains(&l) {
                name.to_string()
            } else {
                format!("{location} {name}")
            }
        }
    }
}
