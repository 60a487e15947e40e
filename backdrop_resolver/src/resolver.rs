// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Body resolver implementation.
//!
//! ## Overview
//!
//! [`BodyResolver`] owns the per-instance state that persists across render
//! cycles — the main and slave slots, the hydration marker, and the single
//! pending post-commit effect — and exposes the two-phase protocol:
//!
//! 1. [`decide`](BodyResolver::decide) runs once per cycle, synchronously,
//!    before the cycle's output is used. It clears or populates the slots
//!    and returns which content belongs where.
//! 2. [`commit`](BodyResolver::commit) runs after the caller has used the
//!    cycle's [`Resolution`] and before the next `decide`. It drains the
//!    cycle's deferred effect: fallback renders are evicted from their
//!    slots and the recorded main path is repaired once the current path
//!    hydrates.
//!
//! ## Decision rules
//!
//! In order, every cycle:
//!
//! - A path that still contains a dynamic-segment placeholder counts as
//!   unhydrated; the resolver seeds its hydration marker from the first
//!   cycle's path.
//! - An unhydrated path, or a path equal to the cached main path, is "the
//!   main path". The main path can never populate the slave slot, so
//!   closing a dialog by navigating back never shows the same screen twice.
//! - The slave slot is cleared when the cycle is not overlay-eligible or
//!   the path is the main path; it is populated (without layout) when the
//!   cycle is overlay-eligible, a main render already exists, and the path
//!   is not the main path. The first cycle can therefore never produce a
//!   slave.
//! - The main slot is populated (layout-wrapped) when it is empty or when
//!   the cycle navigated to a different, non-overlay-eligible path.
//!   Opening an overlay leaves the stale main untouched.
//!
//! ## See Also
//!
//! [`crate::adapters`] for building [`RenderRequest`]s from a host
//! navigation context.

use alloc::string::String;

use crate::types::{CommitSummary, CycleFlags, RenderRequest, Resolution};

/// A slot's cached render and the path that produced it.
struct Slot<R> {
    content: Option<R>,
    path: Option<String>,
}

impl<R> Slot<R> {
    const fn empty() -> Self {
        Self {
            content: None,
            path: None,
        }
    }

    fn clear(&mut self) {
        self.content = None;
        self.path = None;
    }

    fn holds_path(&self, path: &str) -> bool {
        self.path.as_deref() == Some(path)
    }
}

/// The deferred post-commit work recorded by a `decide`. One slot only:
/// a later `decide` before `commit` supersedes it.
struct PendingEffect {
    path: String,
    fallback: bool,
    path_hydrated: bool,
}

/// Decides, once per render cycle, which screen owns the main view and
/// which renders as a slave (overlay) above a stale main.
///
/// One resolver per mounted root component; drop it with the component.
/// All mutation goes through `&mut self`, matching the single writer of a
/// UI render scheduler.
///
/// ## Usage
///
/// ```
/// use backdrop_resolver::resolver::BodyResolver;
/// use backdrop_resolver::types::{CycleFlags, RenderRequest, ScreenDescriptor};
///
/// fn home(_: &()) -> String {
///     "home".into()
/// }
/// fn detail(_: &()) -> String {
///     "detail".into()
/// }
///
/// let mut resolver: BodyResolver<String> = BodyResolver::new();
///
/// // First cycle: the home screen becomes the main body.
/// let request = RenderRequest {
///     screen: ScreenDescriptor::new(home),
///     page_data: &(),
///     current_path: "/",
///     flags: CycleFlags::empty(),
/// };
/// let cycle = resolver.decide(&request);
/// assert_eq!(cycle.main.map(String::as_str), Some("home"));
/// assert!(!cycle.slave_active);
/// resolver.commit();
///
/// // Overlay-eligible navigation: detail renders in the slave slot while
/// // the stale home render keeps the main slot.
/// let request = RenderRequest {
///     screen: ScreenDescriptor::new(detail),
///     page_data: &(),
///     current_path: "/detail",
///     flags: CycleFlags::MAY_BE_SLAVE,
/// };
/// let cycle = resolver.decide(&request);
/// assert_eq!(cycle.main.map(String::as_str), Some("home"));
/// assert_eq!(cycle.slave.map(String::as_str), Some("detail"));
/// assert!(cycle.slave_active);
/// resolver.commit();
/// ```
pub struct BodyResolver<R> {
    main: Slot<R>,
    slave: Slot<R>,
    // Unset until seeded by the first cycle; Some(false) → Some(true) at
    // most once, never back.
    hydrated: Option<bool>,
    slave_active: bool,
    dynamic_test: fn(&str) -> bool,
    pending: Option<PendingEffect>,
}

impl<R> BodyResolver<R> {
    /// Create an empty resolver using the bracket-delimited
    /// dynamic-segment test.
    pub fn new() -> Self {
        Self {
            main: Slot::empty(),
            slave: Slot::empty(),
            hydrated: None,
            slave_active: false,
            dynamic_test: has_placeholder,
            pending: None,
        }
    }

    /// Replace the dynamic-segment test.
    ///
    /// The default treats a path containing a bracket-delimited placeholder
    /// (`/posts/[id]`) as not yet hydrated. That is a heuristic over one
    /// router family's template syntax; hosts whose routers spell
    /// placeholders differently (`:id`, `{id}`, …) should inject the test
    /// derived from their actual syntax.
    pub fn set_dynamic_segment_test(&mut self, test: fn(&str) -> bool) {
        self.dynamic_test = test;
    }

    /// Run one cycle's decision and borrow the resulting slot contents.
    ///
    /// Call exactly once per render cycle, then use the [`Resolution`],
    /// then [`commit`](Self::commit) before the next cycle.
    pub fn decide<'s, D>(&'s mut self, request: &RenderRequest<'_, D, R>) -> Resolution<'s, R> {
        let path = request.current_path;
        let may_be_slave = request.flags.contains(CycleFlags::MAY_BE_SLAVE);

        // The first cycle seeds the hydration marker from its own path.
        let is_path_hydrated = !(self.dynamic_test)(path);
        let hydrated = *self.hydrated.get_or_insert(is_path_hydrated);

        // An unhydrated path counts as the main path so that a placeholder
        // render can never end up in the slave slot while the hydrated
        // form of the same page sits in the main slot.
        let is_main_path = !hydrated || self.main.holds_path(path);

        // Clear the slave when the screen is not allowed there, or when
        // the main slot already owns this path (navigation back).
        if !may_be_slave || is_main_path {
            self.slave.clear();
            self.slave_active = false;
        }

        // A slave needs an existing main underneath it; the first render
        // of an instance can never produce one. Overlays never get the
        // page layout.
        if may_be_slave && self.main.content.is_some() && !is_main_path {
            self.slave.content = Some((request.screen.render)(request.page_data));
            self.slave.path = Some(String::from(path));
            self.slave_active = true;
        }

        // Replace the main only when it is missing or the user navigated
        // to a different, non-overlay path. Opening an overlay leaves the
        // stale main (and its layout) untouched.
        let invalidate_main = !is_main_path && !may_be_slave;
        if self.main.content.is_none() || invalidate_main {
            let content = (request.screen.render)(request.page_data);
            let content = match request.screen.layout {
                Some(wrap) => wrap(content, request.page_data),
                None => content,
            };
            self.main.content = Some(content);
            self.main.path = Some(String::from(path));
        }

        // Queue this cycle's post-commit effect. Deciding again before a
        // commit overwrites it: a superseded cycle's effect never runs.
        self.pending = Some(PendingEffect {
            path: String::from(path),
            fallback: request.flags.contains(CycleFlags::FALLBACK),
            path_hydrated: is_path_hydrated,
        });

        Resolution {
            main: self.main.content.as_ref(),
            slave: self.slave.content.as_ref(),
            slave_active: self.slave_active,
        }
    }

    /// Execute the pending cycle's deferred effect.
    ///
    /// Must run after the caller has used the cycle's [`Resolution`] and
    /// before the next [`decide`](Self::decide). At most one effect is
    /// ever pending, so calling this twice per cycle is a no-op the second
    /// time.
    ///
    /// - A fallback render is evicted from whichever slot recorded its
    ///   path, forcing a full recompute next cycle once real data arrives.
    /// - When the current path has hydrated for the first time, the main
    ///   path is repaired to it, so the next real-data cycle for the same
    ///   logical page is recognized as "still the main path" rather than a
    ///   navigation.
    pub fn commit(&mut self) -> CommitSummary {
        let mut summary = CommitSummary::default();
        let Some(effect) = self.pending.take() else {
            return summary;
        };

        if effect.fallback {
            if self.main.holds_path(&effect.path) {
                self.main.clear();
                summary.main_cleared = true;
            }
            if self.slave.holds_path(&effect.path) {
                self.slave.clear();
                summary.slave_cleared = true;
            }
        }

        if self.hydrated == Some(false) && effect.path_hydrated {
            self.main.path = Some(effect.path);
            self.hydrated = Some(true);
            summary.path_repaired = true;
        }

        summary
    }

    /// Path cached for the main slot, if any.
    pub fn main_path(&self) -> Option<&str> {
        self.main.path.as_deref()
    }

    /// Path cached for the slave slot, if any.
    pub fn slave_path(&self) -> Option<&str> {
        self.slave.path.as_deref()
    }

    /// Whether the slave slot currently holds a meaningful value.
    pub fn slave_active(&self) -> bool {
        self.slave_active
    }

    /// Whether the first hydrated path has been observed and committed (or
    /// seeded by an already-hydrated first cycle).
    pub fn is_hydrated(&self) -> bool {
        self.hydrated == Some(true)
    }
}

impl<R> Default for BodyResolver<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> core::fmt::Debug for BodyResolver<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BodyResolver")
            .field("main_path", &self.main.path)
            .field("slave_path", &self.slave.path)
            .field("slave_active", &self.slave_active)
            .field("hydrated", &self.hydrated)
            .finish_non_exhaustive()
    }
}

// The bracket test mirrors template syntax where a dynamic segment is
// written `[param]`: a `[` with a `]` somewhere after it.
fn has_placeholder(path: &str) -> bool {
    match path.find('[') {
        Some(i) => path[i + 1..].contains(']'),
        None => false,
    }
}
