// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for body resolution: per-cycle flags, screen descriptors,
//! requests, resolutions, and commit summaries.
//!
//! ## Overview
//!
//! These types describe one render cycle's input and output. They are
//! referenced by the [`resolver`](crate::resolver) and built by hosts,
//! either directly or through the [`adapters`](crate::adapters).

bitflags::bitflags! {
    /// Per-cycle request flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CycleFlags: u8 {
        /// The current screen is allowed to render as the slave body (in a
        /// dialog). Callers typically derive this by matching the current
        /// path against their overlay-eligible routes.
        const MAY_BE_SLAVE = 0b0000_0001;
        /// The cycle's page data is a placeholder, not final data; slots
        /// rendered from it are cleared on commit so the next cycle
        /// recomputes them from real data.
        const FALLBACK     = 0b0000_0010;
    }
}

impl Default for CycleFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// Descriptor for a renderable screen.
///
/// `D` is the screen's page data and `R` the rendered output. The optional
/// layout wrapper is a capability of the screen: it is applied only when
/// the screen occupies the main slot, never when it renders as a slave.
/// An absent wrapper means identity.
pub struct ScreenDescriptor<D, R> {
    /// Produce the screen's content from its page data.
    pub render: fn(&D) -> R,
    /// Wrap main-slot content in the screen's layout.
    pub layout: Option<fn(R, &D) -> R>,
}

impl<D, R> ScreenDescriptor<D, R> {
    /// A screen without a layout wrapper.
    pub fn new(render: fn(&D) -> R) -> Self {
        Self {
            render,
            layout: None,
        }
    }

    /// A screen with a layout wrapper for main-slot renders.
    pub fn with_layout(render: fn(&D) -> R, layout: fn(R, &D) -> R) -> Self {
        Self {
            render,
            layout: Some(layout),
        }
    }
}

// Manual impls: the fields are plain `fn` pointers, so the descriptor is
// copyable for any `D`/`R`, which a derive would not accept.
impl<D, R> Clone for ScreenDescriptor<D, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D, R> Copy for ScreenDescriptor<D, R> {}

impl<D, R> core::fmt::Debug for ScreenDescriptor<D, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScreenDescriptor")
            .field("render", &self.render)
            .field("layout", &self.layout)
            .finish()
    }
}

/// One render cycle's input to [`BodyResolver::decide`].
///
/// Recomputed every cycle and never stored; the resolver owns all state
/// that persists across cycles.
///
/// [`BodyResolver::decide`]: crate::resolver::BodyResolver::decide
pub struct RenderRequest<'a, D, R> {
    /// The screen that should render in this cycle.
    pub screen: ScreenDescriptor<D, R>,
    /// The screen's page data for this cycle.
    pub page_data: &'a D,
    /// The current navigation path. May still contain a dynamic-segment
    /// placeholder (for example `/posts/[id]`) before hydration.
    pub current_path: &'a str,
    /// Per-cycle flags.
    pub flags: CycleFlags,
}

impl<D, R> Clone for RenderRequest<'_, D, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D, R> Copy for RenderRequest<'_, D, R> {}

impl<D, R> core::fmt::Debug for RenderRequest<'_, D, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RenderRequest")
            .field("current_path", &self.current_path)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

/// One render cycle's output from [`BodyResolver::decide`].
///
/// The caller places `main` in the primary layout region and, when
/// `slave_active` is true, renders `slave` inside its overlay container.
/// Both borrows come from the resolver's slots and end before the next
/// cycle's `decide`.
///
/// [`BodyResolver::decide`]: crate::resolver::BodyResolver::decide
pub struct Resolution<'r, R> {
    /// The main-slot content. Populated by every decision in practice; it
    /// can be empty only before the first cycle ever renders.
    pub main: Option<&'r R>,
    /// The slave-slot content, if an overlay is active.
    pub slave: Option<&'r R>,
    /// Whether the slave slot holds a meaningful value this cycle.
    pub slave_active: bool,
}

impl<R> Clone for Resolution<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Resolution<'_, R> {}

impl<R> core::fmt::Debug for Resolution<'_, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Resolution")
            .field("slave_active", &self.slave_active)
            .finish_non_exhaustive()
    }
}

/// What a [`BodyResolver::commit`] changed.
///
/// [`BodyResolver::commit`]: crate::resolver::BodyResolver::commit
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CommitSummary {
    /// The main slot was cleared because it held a fallback render.
    pub main_cleared: bool,
    /// The slave slot was cleared because it held a fallback render.
    pub slave_cleared: bool,
    /// The main path was repaired to the first hydrated path and the
    /// resolver is now hydrated.
    pub path_repaired: bool,
}

impl CommitSummary {
    /// True if the commit changed nothing.
    pub fn is_empty(&self) -> bool {
        !(self.main_cleared || self.slave_cleared || self.path_repaired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    fn upper(s: &&'static str) -> String {
        let mut out = String::new();
        out.push_str(s);
        out
    }

    #[test]
    fn cycle_flags_default_to_empty() {
        assert_eq!(CycleFlags::default(), CycleFlags::empty());
        assert!(!CycleFlags::default().contains(CycleFlags::MAY_BE_SLAVE));
    }

    #[test]
    fn screen_descriptor_is_copy_for_any_output() {
        let screen: ScreenDescriptor<&'static str, String> = ScreenDescriptor::new(upper);
        let copy = screen;
        assert!(copy.layout.is_none());
        assert_eq!((copy.render)(&"x"), (screen.render)(&"x"));
    }

    #[test]
    fn with_layout_records_the_wrapper() {
        fn wrap(content: String, _: &&'static str) -> String {
            content
        }
        let screen = ScreenDescriptor::with_layout(upper, wrap);
        assert!(screen.layout.is_some());
    }

    #[test]
    fn commit_summary_emptiness() {
        assert!(CommitSummary::default().is_empty());
        let summary = CommitSummary {
            slave_cleared: true,
            ..CommitSummary::default()
        };
        assert!(!summary.is_empty());
    }
}
