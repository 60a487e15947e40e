// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=backdrop_route --heading-base-level=0

//! Backdrop Route: route templates and path classification.
//!
//! Backdrop Route is the structural layer under the
//! [body resolver](https://docs.rs/backdrop_resolver): it describes an
//! application's routes and answers the two questions the resolver's caller
//! has every render cycle — "may the screen at this path render as an
//! overlay?" and "is this path still an unhydrated template?".
//!
//! - [`Pattern`]: a parsed route template (`/posts/[id]`, `/docs/[...rest]`)
//!   with matching and parameter capture.
//! - [`RouteSet`]: an ordered, first-match-wins table pairing patterns with
//!   [`RouteFlags`] capabilities (overlay eligibility, fallback renders).
//! - [`has_dynamic_segment`]: the bracket-placeholder test on concrete
//!   paths, for hosts that surface route templates as paths until their
//!   parameters hydrate.
//!
//! Parsing is lenient and infallible; see [`pattern`] for the segment
//! rules. Matching is per-segment string equality — this crate does not
//! execute navigation, decode escapes, or interpret query strings.
//!
//! # Example
//!
//! ```
//! use backdrop_route::{RouteFlags, RouteSet, has_dynamic_segment};
//!
//! let mut routes = RouteSet::new();
//! routes.push("/", RouteFlags::empty());
//! routes.push("/posts/[id]", RouteFlags::OVERLAY | RouteFlags::FALLBACK);
//!
//! // Overlay eligibility drives the resolver's per-cycle request flags.
//! assert!(routes.overlay_eligible("/posts/7"));
//! assert!(!routes.overlay_eligible("/"));
//!
//! // Before hydration the host reports the template itself as the path.
//! assert!(has_dynamic_segment("/posts/[id]"));
//! assert!(!has_dynamic_segment("/posts/7"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod pattern;
pub mod set;

pub use pattern::{Params, Pattern, Segment, has_dynamic_segment};
pub use set::{Route, RouteFlags, RouteSet};
