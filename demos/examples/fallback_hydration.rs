// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fallback rendering and path hydration for a dynamic route.
//!
//! A statically generated `/posts/[id]` page first renders with the raw
//! template as its path and placeholder data. The commit evicts that
//! render, and once the path hydrates to `/posts/1` with real data the
//! main body is recomputed exactly once and the recorded main path is
//! repaired — so later cycles for the same page are not mistaken for
//! navigation.
//!
//! Run:
//! - `cargo run -p backdrop_demos --example fallback_hydration`

use backdrop_resolver::resolver::BodyResolver;
use backdrop_resolver::types::{CycleFlags, RenderRequest, ScreenDescriptor};

struct Post {
    body: String,
}

fn post(page: &Post) -> String {
    format!("Post: {}", page.body)
}

fn main() {
    let loading = Post {
        body: String::from("loading…"),
    };
    let ready = Post {
        body: String::from("Post Title 1"),
    };
    let mut resolver: BodyResolver<String> = BodyResolver::new();

    // Fallback render: the path is still the route template.
    let out = resolver.decide(&RenderRequest {
        screen: ScreenDescriptor::new(post),
        page_data: &loading,
        current_path: "/posts/[id]",
        flags: CycleFlags::FALLBACK,
    });
    println!("== /posts/[id] (fallback) ==\n  main: {:?}", out.main);
    assert_eq!(out.main.map(String::as_str), Some("Post: loading…"));
    assert!(!resolver.is_hydrated());

    let summary = resolver.commit();
    println!("  commit: {summary:?}");
    assert!(summary.main_cleared);
    assert_eq!(resolver.main_path(), None);

    // Real data under the hydrated path replaces the placeholder in place.
    let out = resolver.decide(&RenderRequest {
        screen: ScreenDescriptor::new(post),
        page_data: &ready,
        current_path: "/posts/1",
        flags: CycleFlags::empty(),
    });
    println!("== /posts/1 ==\n  main: {:?}", out.main);
    assert_eq!(out.main.map(String::as_str), Some("Post: Post Title 1"));

    let summary = resolver.commit();
    println!("  commit: {summary:?}");
    assert!(summary.path_repaired);
    assert!(resolver.is_hydrated());
    assert_eq!(resolver.main_path(), Some("/posts/1"));

    // Stable from here on: the hydrated page is recognized as main.
    let out = resolver.decide(&RenderRequest {
        screen: ScreenDescriptor::new(post),
        page_data: &ready,
        current_path: "/posts/1",
        flags: CycleFlags::MAY_BE_SLAVE,
    });
    assert_eq!(out.main.map(String::as_str), Some("Post: Post Title 1"));
    assert!(!out.slave_active);
    resolver.commit();
    println!("stable: no dialog for the page already shown as main");
}
