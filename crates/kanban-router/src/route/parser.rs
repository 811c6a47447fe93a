//! Pattern parsing and priority calculation for routes
use std::collections::HashSet;

use super::pattern::{classify_segment, PatternSegment};
use crate::error::{Result, RouteError};

/// A route pattern broken into typed segments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPattern {
    /// Canonical pattern text, e.g. `/projects/:id`
    pub pattern: String,
    pub segments: Vec<PatternSegment>,
    /// Parameter names in order of appearance
    pub params: Vec<String>,
    /// Matching precedence, lower is tried first
    pub priority: usize,
}

/// Fold accumulator for [`parse_pattern`]
#[derive(Default)]
struct ParseState {
    segments: Vec<PatternSegment>,
    params: Vec<String>,
    seen: HashSet<String>,
}

impl ParseState {
    fn with_segment(mut self, segment: PatternSegment) -> std::result::Result<Self, String> {
        if let PatternSegment::Param(name) = &segment {
            if !self.seen.insert(name.clone()) {
                return Err(format!("parameter '{}' appears twice", name));
            }
            self.params.push(name.clone());
        }
        self.segments.push(segment);
        Ok(self)
    }

    fn finalize(self, raw: &str) -> ParsedPattern {
        let body = self
            .segments
            .iter()
            .map(PatternSegment::as_pattern)
            .collect::<Vec<_>>()
            .join("/");
        let pattern = format!("/{}", body);
        let priority = calculate_priority(self.params.len(), self.segments.len());

        tracing::trace!(raw, %pattern, priority, "parsed route pattern");

        ParsedPattern {
            pattern,
            segments: self.segments,
            params: self.params,
            priority,
        }
    }
}

/// Parses a route pattern such as `/projects/:id`
///
/// Empty segments are dropped, so `/projects/` and `projects` both parse to
/// `/projects`. Backslashes and fragments are rejected rather than corrected:
/// patterns are written by developers and are expected to be in URL form.
///
/// # Examples
///
/// ```
/// use kanban_router::route::parser::parse_pattern;
///
/// let parsed = parse_pattern("/projects/:id").unwrap();
/// assert_eq!(parsed.pattern, "/projects/:id");
/// assert_eq!(parsed.params, vec!["id"]);
///
/// assert_eq!(parse_pattern("/").unwrap().pattern, "/");
/// assert!(parse_pattern("/docs/*rest").is_err());
/// ```
pub fn parse_pattern(raw: &str) -> Result<ParsedPattern> {
    let invalid = |reason: String| RouteError::InvalidPattern {
        pattern: raw.to_string(),
        reason,
    };

    if raw.contains('\\') || raw.contains('#') {
        return Err(invalid("pattern must be a plain URL path".to_string()));
    }

    raw.split('/')
        .filter(|s| !s.is_empty())
        .try_fold(ParseState::default(), |state, segment| {
            let classified = classify_segment(segment)?;
            state.with_segment(classified)
        })
        .map(|state| state.finalize(raw))
        .map_err(invalid)
}

/// Calculates route priority for matching order
///
/// Lower number = higher priority.
///
/// 1. **Literal routes** → 0
/// 2. **Parameterized routes** → param count + depth + 1
///
/// ```
/// use kanban_router::route::parser::calculate_priority;
///
/// assert_eq!(calculate_priority(0, 1), 0);
/// assert_eq!(calculate_priority(1, 2), 4);
/// ```
pub fn calculate_priority(dynamic_count: usize, depth: usize) -> usize {
    if dynamic_count == 0 {
        0
    } else {
        dynamic_count + depth + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pattern_root() {
        let parsed = parse_pattern("/").unwrap();
        assert_eq!(parsed.pattern, "/");
        assert!(parsed.segments.is_empty());
        assert_eq!(parsed.priority, 0);
    }

    #[test]
    fn test_parse_pattern_static() {
        let parsed = parse_pattern("/projects/").unwrap();
        assert_eq!(parsed.pattern, "/projects");
        assert!(parsed.params.is_empty());
        assert_eq!(parsed.priority, 0);
    }

    #[test]
    fn test_parse_pattern_dynamic() {
        let parsed = parse_pattern("/projects/:id").unwrap();
        assert_eq!(parsed.pattern, "/projects/:id");
        assert_eq!(parsed.params, vec!["id"]);
        assert_eq!(parsed.priority, 4);
    }

    #[test]
    fn test_parse_pattern_duplicate_param() {
        let err = parse_pattern("/a/:id/b/:id").unwrap_err();
        assert!(matches!(err, RouteError::InvalidPattern { .. }));
    }

    #[test]
    fn test_parse_pattern_rejects_non_paths() {
        assert!(parse_pattern("\\projects").is_err());
        assert!(parse_pattern("/projects#top").is_err());
        assert!(parse_pattern("/projects?page=1").is_err());
    }

    #[test]
    fn test_static_beats_dynamic() {
        let literal = parse_pattern("/projects/new").unwrap();
        let dynamic = parse_pattern("/projects/:id").unwrap();
        assert!(literal.priority < dynamic.priority);
    }
}
