// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Route templates: parsing, matching, and parameter capture.
//!
//! ## Overview
//!
//! A [`Pattern`] is a parsed route template such as `/posts/[id]` or
//! `/docs/[...rest]`. Parsing is lenient and infallible: a segment is
//! dynamic only when it is bracket-delimited, and anything else — including
//! a segment with unbalanced brackets — is kept as a literal. Matching is
//! per-segment string equality; there is no percent-decoding and no query
//! string handling.
//!
//! ## Segment rules
//!
//! Templates and paths are split on `/`. Empty segments (leading, trailing,
//! or doubled slashes) are ignored, so `/a/b`, `a/b/`, and `//a//b` all
//! describe the same two segments. A dynamic segment matches exactly one
//! path segment. A catch-all segment matches one or more remaining path
//! segments and is meaningful only in last position; a pattern with
//! trailing segments after a catch-all never matches.

use alloc::vec::Vec;

/// One parsed segment of a route template.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Segment<'p> {
    /// A plain segment matched by string equality.
    Literal(&'p str),
    /// A `[name]` segment matching exactly one path segment.
    Dynamic(&'p str),
    /// A `[...name]` segment matching one or more remaining path segments.
    CatchAll(&'p str),
}

impl<'p> Segment<'p> {
    fn parse(raw: &'p str) -> Self {
        // Lenient: only a fully bracket-delimited segment is dynamic.
        // `[id` or `id]` stay literals rather than producing an error.
        if raw.len() >= 2 && raw.starts_with('[') && raw.ends_with(']') {
            let inner = &raw[1..raw.len() - 1];
            match inner.strip_prefix("...") {
                Some(name) => Self::CatchAll(name),
                None => Self::Dynamic(inner),
            }
        } else {
            Self::Literal(raw)
        }
    }

    /// The parameter name, for dynamic and catch-all segments.
    pub fn name(&self) -> Option<&'p str> {
        match self {
            Self::Literal(_) => None,
            Self::Dynamic(name) | Self::CatchAll(name) => Some(name),
        }
    }
}

/// A parsed route template.
///
/// Borrows the template string it was parsed from; route tables are
/// typically built once from static strings.
///
/// ```
/// use backdrop_route::Pattern;
///
/// let posts = Pattern::parse("/posts/[id]");
/// assert!(posts.matches("/posts/1"));
/// assert!(!posts.matches("/posts"));
/// assert!(!posts.matches("/posts/1/comments"));
///
/// let params = posts.captures("/posts/42").unwrap();
/// assert_eq!(params.get("id"), Some("42"));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pattern<'p> {
    raw: &'p str,
    segments: Vec<Segment<'p>>,
}

impl<'p> Pattern<'p> {
    /// Parse a route template. Infallible; see the module docs for the
    /// lenient segment rules.
    pub fn parse(template: &'p str) -> Self {
        let segments = template
            .split('/')
            .filter(|s| !s.is_empty())
            .map(Segment::parse)
            .collect();
        Self {
            raw: template,
            segments,
        }
    }

    /// The template string this pattern was parsed from.
    pub fn as_str(&self) -> &'p str {
        self.raw
    }

    /// The parsed segments, in order.
    pub fn segments(&self) -> &[Segment<'p>] {
        &self.segments
    }

    /// True if any segment is dynamic or catch-all.
    pub fn is_dynamic(&self) -> bool {
        self.segments
            .iter()
            .any(|s| !matches!(s, Segment::Literal(_)))
    }

    /// Test whether a concrete path matches this pattern.
    pub fn matches(&self, path: &str) -> bool {
        let mut segs = path.split('/').filter(|s| !s.is_empty());
        for (i, pat) in self.segments.iter().enumerate() {
            match pat {
                Segment::Literal(lit) => match segs.next() {
                    Some(s) if s == *lit => {}
                    _ => return false,
                },
                Segment::Dynamic(_) => {
                    if segs.next().is_none() {
                        return false;
                    }
                }
                Segment::CatchAll(_) => {
                    // Only meaningful in last position; at least one
                    // remaining path segment is required.
                    return i + 1 == self.segments.len() && segs.next().is_some();
                }
            }
        }
        segs.next().is_none()
    }

    /// Match a concrete path and bind its dynamic segments.
    ///
    /// Returns `None` when the path does not match. A catch-all binds the
    /// remaining path suffix verbatim (separators included, outer slashes
    /// trimmed).
    pub fn captures<'a>(&self, path: &'a str) -> Option<Params<'p, 'a>> {
        let segs = split_with_offsets(path);
        let mut bindings = Vec::new();
        let mut at = 0;
        for (i, pat) in self.segments.iter().enumerate() {
            match pat {
                Segment::Literal(lit) => {
                    let (_, s) = segs.get(at)?;
                    if s != lit {
                        return None;
                    }
                    at += 1;
                }
                Segment::Dynamic(name) => {
                    let (_, s) = segs.get(at)?;
                    bindings.push((*name, *s));
                    at += 1;
                }
                Segment::CatchAll(name) => {
                    if i + 1 != self.segments.len() {
                        return None;
                    }
                    let (offset, _) = segs.get(at)?;
                    bindings.push((*name, path[*offset..].trim_end_matches('/')));
                    return Some(Params { bindings });
                }
            }
        }
        if at == segs.len() {
            Some(Params { bindings })
        } else {
            None
        }
    }
}

/// Parameter bindings produced by [`Pattern::captures`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Params<'p, 'a> {
    bindings: Vec<(&'p str, &'a str)>,
}

impl<'p, 'a> Params<'p, 'a> {
    /// Look up a binding by parameter name. First binding wins when a
    /// template repeats a name.
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.bindings
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// True if the match bound no parameters.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterate over `(name, value)` bindings in template order.
    pub fn iter(&self) -> impl Iterator<Item = (&'p str, &'a str)> + '_ {
        self.bindings.iter().copied()
    }
}

/// Test whether a concrete path still contains a bracket-delimited
/// placeholder, i.e. a `[` with a `]` somewhere after it.
///
/// Hosts that render a dynamic route before its parameters are known pass
/// the raw template through as the current path (`/posts/[id]`); once the
/// parameters arrive the path becomes concrete (`/posts/1`). This test is
/// how downstream code distinguishes the two states. It is a heuristic
/// tied to bracket-style template syntax; hosts with a different syntax
/// should supply their own test where one is accepted.
///
/// ```
/// use backdrop_route::has_dynamic_segment;
///
/// assert!(has_dynamic_segment("/posts/[id]"));
/// assert!(!has_dynamic_segment("/posts/1"));
/// ```
pub fn has_dynamic_segment(path: &str) -> bool {
    match path.find('[') {
        Some(i) => path[i + 1..].contains(']'),
        None => false,
    }
}

fn split_with_offsets(path: &str) -> Vec<(usize, &str)> {
    let mut out = Vec::new();
    let mut start = 0;
    for (i, b) in path.bytes().enumerate() {
        if b == b'/' {
            if i > start {
                out.push((start, &path[start..i]));
            }
            start = i + 1;
        }
    }
    if path.len() > start {
        out.push((start, &path[start..]));
    }
    out
}
