// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=backdrop_resolver --heading-base-level=0

//! Backdrop Resolver: a deterministic, `no_std` body resolver for UI.
//!
//! ## Overview
//!
//! This crate decides, once per render cycle, whether the currently routed
//! screen renders as the primary ("main") view or as an overlay ("slave",
//! e.g. in a dialog) layered over a stale, previously rendered main view.
//! It does not route, fetch data, or present the overlay — it only decides
//! WHICH rendered output belongs in which of two slots and WHEN each slot
//! must be recomputed.
//!
//! ## Inputs
//!
//! Each cycle the host builds a [`RenderRequest`](crate::types::RenderRequest):
//! the screen descriptor (a render function plus an optional layout
//! wrapper), its page data, the current path, and
//! [`CycleFlags`](crate::types::CycleFlags) saying whether the screen may
//! act as an overlay and whether this cycle's data is a fallback
//! placeholder. The [`adapters`](crate::adapters) build requests from a
//! host navigation context, optionally deriving overlay eligibility from a
//! [`backdrop_route`](https://docs.rs/backdrop_route) table.
//!
//! ## Two-phase cycle
//!
//! [`BodyResolver::decide`](crate::resolver::BodyResolver::decide) runs
//! synchronously per cycle and returns the
//! [`Resolution`](crate::types::Resolution) — main content, slave content,
//! and whether the slave is active.
//! [`BodyResolver::commit`](crate::resolver::BodyResolver::commit) must run
//! after the cycle's output has been used and before the next `decide`: it
//! evicts fallback renders and repairs the recorded main path once the
//! path hydrates. Only one effect is ever pending, so a cycle that is
//! superseded before its commit simply never takes effect.
//!
//! ## Guarantees
//!
//! - The first cycle of an instance never produces a slave.
//! - A slave never shows the path the main slot already owns, so closing a
//!   dialog by navigating back never doubles the screen.
//! - Opening an overlay leaves the stale main render, and its layout,
//!   untouched; navigating to any other non-overlay path replaces the main
//!   and clears any residual slave.
//! - The layout wrapper applies to main-slot renders only.
//!
//! ## Root component sketch
//!
//! The snippet below shows the intended call shape inside a host's root
//! component: adapt the navigation context, decide, place both bodies,
//! commit.
//!
//! ```no_run
//! use backdrop_resolver::adapters::{self, NavContext};
//! use backdrop_resolver::resolver::BodyResolver;
//!
//! /// Hand the rendered bodies to the host toolkit.
//! fn place(_main: &String, _dialog: Option<&String>) {}
//!
//! fn render_root(
//!     resolver: &mut BodyResolver<String>,
//!     nav: &NavContext<'_, u32, String>,
//!     overlay_eligible: bool,
//! ) {
//!     let request = adapters::request_from_nav(nav, overlay_eligible);
//!     let cycle = resolver.decide(&request);
//!     let dialog = cycle.slave_active.then_some(cycle.slave).flatten();
//!     place(cycle.main.expect("decide populates the main slot"), dialog);
//!     resolver.commit();
//! }
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod resolver;
pub mod types;
