//! Pattern segment classification
//!
//! A route pattern is a `/`-separated list of segments. A segment is either
//! literal text or `:name`, which captures exactly one non-empty path segment.
//! Optional (`:id?`), catch-all (`*rest`) and inline-regex (`:id(\d+)`)
//! segments are not part of the pattern language and are rejected.

/// One segment of a parsed route pattern
///
/// # Examples
///
/// ```
/// use kanban_router::route::pattern::{classify_segment, PatternSegment};
///
/// assert_eq!(classify_segment("projects"), Ok(PatternSegment::Static("projects".to_string())));
/// assert_eq!(classify_segment(":id"), Ok(PatternSegment::Param("id".to_string())));
/// assert!(classify_segment(":id?").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSegment {
    /// Literal text that must match the path segment
    Static(String),
    /// Named parameter capturing one segment
    Param(String),
}

impl PatternSegment {
    pub fn is_param(&self) -> bool {
        matches!(self, PatternSegment::Param(_))
    }

    /// Segment text as written in a canonical pattern
    pub fn as_pattern(&self) -> String {
        match self {
            PatternSegment::Static(text) => text.clone(),
            PatternSegment::Param(name) => format!(":{}", name),
        }
    }
}

/// Classifies a single non-empty segment
///
/// Returns the reason as plain text on rejection; the caller attaches the
/// full pattern when building the error.
pub fn classify_segment(segment: &str) -> Result<PatternSegment, String> {
    if segment.starts_with('*') {
        return Err(format!("catch-all segment '{}' is not supported", segment));
    }

    match segment.strip_prefix(':') {
        Some(name) => {
            if name.is_empty() {
                return Err("parameter name is empty".to_string());
            }
            if name.ends_with('?') || name.ends_with('*') || name.ends_with('+') {
                return Err(format!("repeatable or optional parameter '{}' is not supported", segment));
            }
            if !is_param_name(name) {
                return Err(format!("invalid parameter name '{}'", name));
            }
            Ok(PatternSegment::Param(name.to_string()))
        }
        None => {
            if segment.contains(':') {
                return Err(format!("parameter inside literal segment '{}'", segment));
            }
            if segment.contains('?') {
                return Err(format!("query string in pattern segment '{}'", segment));
            }
            Ok(PatternSegment::Static(segment.to_string()))
        }
    }
}

/// Parameter names are identifiers: ASCII letters, digits and `_`, not starting with a digit
fn is_param_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_static() {
        assert_eq!(
            classify_segment("signup"),
            Ok(PatternSegment::Static("signup".to_string()))
        );
    }

    #[test]
    fn test_classify_param() {
        let seg = classify_segment(":project_id").unwrap();
        assert_eq!(seg, PatternSegment::Param("project_id".to_string()));
        assert!(seg.is_param());
        assert_eq!(seg.as_pattern(), ":project_id");
    }

    #[test]
    fn test_rejects_unsupported_segments() {
        assert!(classify_segment("*rest").is_err());
        assert!(classify_segment(":id?").is_err());
        assert!(classify_segment(":ids+").is_err());
        assert!(classify_segment(":").is_err());
        assert!(classify_segment(":1st").is_err());
        assert!(classify_segment(":id(\\d+)").is_err());
        assert!(classify_segment("v:id").is_err());
    }
}
