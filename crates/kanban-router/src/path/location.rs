//! Address-bar locations: path, query and fragment splitting plus percent decoding

/// A requested location split into path, query string and fragment
///
/// Borrows from the input; nothing is decoded until asked for.
///
/// # Examples
///
/// ```
/// use kanban_router::path::Location;
///
/// let loc = Location::parse("/projects/7?tab=done#card-3");
/// assert_eq!(loc.path, "/projects/7");
/// assert_eq!(loc.query, Some("tab=done"));
/// assert_eq!(loc.fragment, Some("card-3"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location<'a> {
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

impl<'a> Location<'a> {
    /// Splits on the first `#`, then on the first `?` before it
    pub fn parse(input: &'a str) -> Self {
        let (rest, fragment) = match input.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (input, None),
        };

        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (rest, None),
        };

        Self {
            path,
            query,
            fragment,
        }
    }

    /// Decoded query pairs, empty when there is no query string
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.query.map(parse_query).unwrap_or_default()
    }
}

/// Decodes `a=1&b=two%20words` into ordered pairs
///
/// `+` is read as a space. A key without `=` gets an empty value and empty
/// pieces (`a=1&&b=2`) are skipped. Undecodable escapes are kept verbatim.
///
/// ```
/// use kanban_router::path::parse_query;
///
/// let pairs = parse_query("q=hello+world&flag&empty=");
/// assert_eq!(pairs, vec![
///     ("q".to_string(), "hello world".to_string()),
///     ("flag".to_string(), String::new()),
///     ("empty".to_string(), String::new()),
/// ]);
/// ```
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|piece| !piece.is_empty())
        .map(|piece| {
            let (key, value) = piece.split_once('=').unwrap_or((piece, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

/// Percent-decodes one path segment, falling back to the raw text
///
/// Unlike query components, `+` stays a literal plus.
pub(crate) fn decode_segment(raw: &str) -> String {
    match urlencoding::decode(raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    }
}

/// Percent-decodes one query component, falling back to the raw text
pub(crate) fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}
