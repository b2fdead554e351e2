//! Case-insensitive substring matching
//!
//! Matching is plain containment on lowercased text: no tokenizing, no
//! fuzziness, no scoring.

/// A query lowercased once so it can be tested against many fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Needle {
    lowered: String,
}

impl Needle {
    /// Build a needle, or `None` for an empty or whitespace-only query.
    ///
    /// A non-blank query is kept as typed (lowercased, not trimmed).
    pub fn new(query: &str) -> Option<Self> {
        if is_blank(query) {
            return None;
        }
        Some(Self {
            lowered: query.to_lowercase(),
        })
    }

    /// True when the needle occurs anywhere inside `field`, ignoring case.
    pub fn found_in(&self, field: &str) -> bool {
        field.to_lowercase().contains(&self.lowered)
    }

    /// True when the needle occurs in at least one of `fields`.
    pub fn found_in_any<S: AsRef<str>>(&self, fields: &[S]) -> bool {
        fields.iter().any(|field| self.found_in(field.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.lowered
    }
}

pub fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_queries_have_no_needle() {
        assert_eq!(Needle::new(""), None);
        assert_eq!(Needle::new("   "), None);
        assert_eq!(Needle::new("\t\n"), None);
    }

    #[test]
    fn test_case_insensitive_containment() {
        let needle = Needle::new("IBRA").unwrap();
        assert!(needle.found_in("library"));
        assert!(needle.found_in("Kenneth Dike LIBRARY"));
        assert!(!needle.found_in("Senate"));
    }

    #[test]
    fn test_found_in_any() {
        let needle = Needle::new("zaria").unwrap();
        assert!(needle.found_in_any(&["Ahmadu Bello University", "Zaria"]));
        assert!(!needle.found_in_any(&["University of Lagos", "Lagos"]));
        assert!(!needle.found_in_any::<&str>(&[]));
    }

    #[test]
    fn test_surrounding_whitespace_is_kept() {
        let needle = Needle::new(" hall").unwrap();
        assert_eq!(needle.as_str(), " hall");
        assert!(needle.found_in("Makama Hall"));
        assert!(!needle.found_in("Hall of Fame"));
    }
}
