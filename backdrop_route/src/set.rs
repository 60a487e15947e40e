// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Route tables: patterns paired with presentation capabilities.

use alloc::vec::Vec;

use crate::pattern::Pattern;

bitflags::bitflags! {
    /// Presentation capabilities of a route.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct RouteFlags: u8 {
        /// The route's screen may render as an overlay (in a dialog) over a
        /// stale main view.
        const OVERLAY  = 0b0000_0001;
        /// The route serves a placeholder render before its data arrives.
        const FALLBACK = 0b0000_0010;
    }
}

impl Default for RouteFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// One route table entry.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Route<'p> {
    /// The route's template.
    pub pattern: Pattern<'p>,
    /// The route's capabilities.
    pub flags: RouteFlags,
}

/// An ordered route table.
///
/// Lookups walk the table in insertion order and the first matching route
/// wins, so register more specific templates before overlapping general
/// ones (`/posts/new` before `/posts/[id]`).
///
/// ```
/// use backdrop_route::{RouteFlags, RouteSet};
///
/// let mut routes = RouteSet::new();
/// routes.push("/", RouteFlags::empty());
/// routes.push("/detail", RouteFlags::OVERLAY);
/// routes.push("/posts/[id]", RouteFlags::OVERLAY | RouteFlags::FALLBACK);
///
/// assert!(!routes.overlay_eligible("/"));
/// assert!(routes.overlay_eligible("/detail"));
/// assert!(routes.overlay_eligible("/posts/7"));
/// assert_eq!(routes.flags_for("/missing"), None);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RouteSet<'p> {
    routes: Vec<Route<'p>>,
}

impl<'p> RouteSet<'p> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Append a route parsed from `template`.
    pub fn push(&mut self, template: &'p str, flags: RouteFlags) {
        self.routes.push(Route {
            pattern: Pattern::parse(template),
            flags,
        });
    }

    /// All routes, in insertion order.
    pub fn routes(&self) -> &[Route<'p>] {
        &self.routes
    }

    /// The first route matching `path`, if any.
    pub fn matching(&self, path: &str) -> Option<&Route<'p>> {
        self.routes.iter().find(|r| r.pattern.matches(path))
    }

    /// Flags of the first route matching `path`. First match wins.
    pub fn flags_for(&self, path: &str) -> Option<RouteFlags> {
        self.matching(path).map(|r| r.flags)
    }

    /// True when `path` matches a route carrying [`RouteFlags::OVERLAY`].
    ///
    /// Unmatched paths are not overlay eligible.
    pub fn overlay_eligible(&self, path: &str) -> bool {
        self.flags_for(path)
            .is_some_and(|f| f.contains(RouteFlags::OVERLAY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteSet<'static> {
        let mut routes = RouteSet::new();
        routes.push("/", RouteFlags::empty());
        routes.push("/about", RouteFlags::empty());
        routes.push("/detail", RouteFlags::OVERLAY);
        routes.push("/posts/new", RouteFlags::empty());
        routes.push("/posts/[id]", RouteFlags::OVERLAY | RouteFlags::FALLBACK);
        routes
    }

    #[test]
    fn first_match_wins() {
        let routes = table();
        // `/posts/new` is shadowed from the dynamic route by insertion order.
        assert_eq!(routes.flags_for("/posts/new"), Some(RouteFlags::empty()));
        assert_eq!(
            routes.flags_for("/posts/7"),
            Some(RouteFlags::OVERLAY | RouteFlags::FALLBACK)
        );
    }

    #[test]
    fn unmatched_paths_have_no_flags() {
        let routes = table();
        assert_eq!(routes.flags_for("/nope"), None);
        assert!(routes.matching("/nope").is_none());
        assert!(!routes.overlay_eligible("/nope"));
    }

    #[test]
    fn overlay_eligibility_follows_flags() {
        let routes = table();
        assert!(!routes.overlay_eligible("/"));
        assert!(!routes.overlay_eligible("/about"));
        assert!(routes.overlay_eligible("/detail"));
        assert!(routes.overlay_eligible("/posts/7"));
        assert!(!routes.overlay_eligible("/posts/new"));
    }

    #[test]
    fn matching_returns_the_route() {
        let routes = table();
        let r = routes.matching("/posts/7").unwrap();
        assert_eq!(r.pattern.as_str(), "/posts/[id]");
        assert!(r.flags.contains(RouteFlags::FALLBACK));
    }

    #[test]
    fn default_flags_are_empty() {
        assert_eq!(RouteFlags::default(), RouteFlags::empty());
    }
}
