// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters from host navigation contexts to render requests.
//!
//! A host framework hands its root component some per-render navigation
//! state. [`NavContext`] is the resolver's view of that state, and the
//! functions here project it into a [`RenderRequest`] — pure, stateless
//! conversions with no error cases.
//!
//! The [`route`] integration is enabled via the `route_adapter` feature to
//! keep the core small and `no_std` by default.

use crate::types::{CycleFlags, RenderRequest, ScreenDescriptor};

#[cfg(feature = "route_adapter")]
pub mod route;

/// Per-render navigation context supplied by the host framework.
///
/// `path` is the host router's current path — possibly still a template
/// (`/posts/[id]`) before hydration — and `is_fallback` marks `page_data`
/// as placeholder rather than final data.
pub struct NavContext<'a, D, R> {
    /// The screen the router selected for this cycle.
    pub screen: ScreenDescriptor<D, R>,
    /// The screen's page data.
    pub page_data: &'a D,
    /// The current navigation path.
    pub path: &'a str,
    /// Whether `page_data` is a placeholder.
    pub is_fallback: bool,
}

impl<D, R> Clone for NavContext<'_, D, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D, R> Copy for NavContext<'_, D, R> {}

impl<D, R> core::fmt::Debug for NavContext<'_, D, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NavContext")
            .field("path", &self.path)
            .field("is_fallback", &self.is_fallback)
            .finish_non_exhaustive()
    }
}

/// Build a render request from a navigation context.
///
/// `may_be_slave` stays caller-supplied here; use
/// [`route::request_with_routes`] to derive it from a route table instead.
pub fn request_from_nav<'a, D, R>(
    nav: &NavContext<'a, D, R>,
    may_be_slave: bool,
) -> RenderRequest<'a, D, R> {
    let mut flags = CycleFlags::empty();
    flags.set(CycleFlags::MAY_BE_SLAVE, may_be_slave);
    flags.set(CycleFlags::FALLBACK, nav.is_fallback);
    RenderRequest {
        screen: nav.screen,
        page_data: nav.page_data,
        current_path: nav.path,
        flags,
    }
}
