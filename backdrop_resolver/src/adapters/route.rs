// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter helpers for Backdrop Route tables.
//!
//! ## Feature
//!
//! Enable with `route_adapter`.
//!
//! ## Notes
//!
//! These helpers look the current path up in a [`RouteSet`] so the caller
//! does not hand-roll the "is this path overlay-eligible" check each cycle.
//! They do not consult the table's `FALLBACK` flag: whether *this* cycle is
//! a fallback render is per-cycle knowledge only the host has, so it stays
//! on the [`NavContext`].

use backdrop_route::RouteSet;

use crate::adapters::{NavContext, request_from_nav};
use crate::types::RenderRequest;

/// Build a render request, deriving overlay eligibility from a route table.
///
/// Paths matching no route are not overlay-eligible, which keeps unknown
/// screens in the main slot.
pub fn request_with_routes<'a, D, R>(
    nav: &NavContext<'a, D, R>,
    routes: &RouteSet<'_>,
) -> RenderRequest<'a, D, R> {
    request_from_nav(nav, routes.overlay_eligible(nav.path))
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use backdrop_route::RouteFlags;

    use super::*;
    use crate::types::{CycleFlags, ScreenDescriptor};

    fn screen(data: &&'static str) -> String {
        String::from(*data)
    }

    fn nav<'a>(path: &'a str, is_fallback: bool) -> NavContext<'a, &'static str, String> {
        NavContext {
            screen: ScreenDescriptor::new(screen),
            page_data: &"data",
            path,
            is_fallback,
        }
    }

    #[test]
    fn overlay_eligibility_comes_from_the_table() {
        let mut routes = RouteSet::new();
        routes.push("/", RouteFlags::empty());
        routes.push("/detail", RouteFlags::OVERLAY);

        let request = request_with_routes(&nav("/detail", false), &routes);
        assert_eq!(request.flags, CycleFlags::MAY_BE_SLAVE);

        let request = request_with_routes(&nav("/", false), &routes);
        assert_eq!(request.flags, CycleFlags::empty());
    }

    #[test]
    fn unmatched_paths_are_main_only() {
        let routes = RouteSet::new();
        let request = request_with_routes(&nav("/anything", true), &routes);
        assert_eq!(request.flags, CycleFlags::FALLBACK);
    }
}
