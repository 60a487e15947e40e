// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A root-component shell built on the route table and the adapters.
//!
//! Screens are plain functions producing strings; the layout and dialog
//! shells are presentational only. Each navigation step builds a
//! [`NavContext`], derives overlay eligibility from the route table,
//! decides, places both bodies, and commits — the whole per-cycle
//! contract of a host's root component.
//!
//! Run:
//! - `cargo run -p backdrop_demos --example app_shell`

use backdrop_resolver::adapters::{NavContext, route::request_with_routes};
use backdrop_resolver::resolver::BodyResolver;
use backdrop_resolver::types::{Resolution, ScreenDescriptor};
use backdrop_route::{RouteFlags, RouteSet};

struct PageData {
    title: &'static str,
    body: String,
}

fn page(data: &PageData) -> String {
    format!("<h1>{}</h1><p>{}</p>", data.title, data.body)
}

fn site_layout(content: String, _data: &PageData) -> String {
    format!("<nav>Home | Detail</nav>{content}<footer>I'm here to stay</footer>")
}

// Presentational dialog shell; the resolver only decides visibility.
fn dialog(content: &str) -> String {
    format!("<dialog>{content}<button>Close</button></dialog>")
}

fn place(step: &str, out: &Resolution<'_, String>) {
    println!("== {step} ==");
    println!("  main: {}", out.main.map(String::as_str).unwrap_or("<empty>"));
    match (out.slave_active, out.slave) {
        (true, Some(body)) => println!("  overlay: {}", dialog(body)),
        _ => println!("  overlay: (closed)"),
    }
}

fn routes() -> RouteSet<'static> {
    let mut routes = RouteSet::new();
    routes.push("/", RouteFlags::empty());
    routes.push("/about", RouteFlags::empty());
    routes.push("/detail", RouteFlags::OVERLAY);
    routes.push("/posts/[id]", RouteFlags::OVERLAY | RouteFlags::FALLBACK);
    routes
}

/// Look the path up the way a data layer would: the dynamic post route
/// resolves its `id` parameter into page data.
fn data_for(routes: &RouteSet<'_>, path: &str, ready: bool) -> PageData {
    if !ready {
        return PageData {
            title: "Post",
            body: String::from("loading…"),
        };
    }
    match routes.matching(path) {
        Some(route) if route.pattern.as_str() == "/posts/[id]" => {
            let params = route.pattern.captures(path).expect("matched route");
            PageData {
                title: "Post",
                body: format!("Post Title {}", params.get("id").unwrap_or("?")),
            }
        }
        _ => PageData {
            title: "Page",
            body: format!("content of {path}"),
        },
    }
}

fn main() {
    let routes = routes();
    let mut resolver: BodyResolver<String> = BodyResolver::new();

    let with_layout = ScreenDescriptor::with_layout(page, site_layout);
    let bare = ScreenDescriptor::new(page);

    // Home: main body, layout-wrapped.
    let data = data_for(&routes, "/", true);
    let nav = NavContext {
        screen: with_layout,
        page_data: &data,
        path: "/",
        is_fallback: false,
    };
    let out = resolver.decide(&request_with_routes(&nav, &routes));
    place("/", &out);
    assert!(out.main.is_some_and(|m| m.contains("<nav>")));
    assert!(!out.slave_active);
    resolver.commit();

    // Detail opens as a dialog over the stale home.
    let data = data_for(&routes, "/detail", true);
    let nav = NavContext {
        screen: bare,
        page_data: &data,
        path: "/detail",
        is_fallback: false,
    };
    let out = resolver.decide(&request_with_routes(&nav, &routes));
    place("/detail", &out);
    assert!(out.slave_active);
    assert!(out.main.is_some_and(|m| m.contains("<h1>Page</h1>")));
    resolver.commit();

    // Back to home: dialog closes, the cached main is reused.
    let data = data_for(&routes, "/", true);
    let nav = NavContext {
        screen: with_layout,
        page_data: &data,
        path: "/",
        is_fallback: false,
    };
    let out = resolver.decide(&request_with_routes(&nav, &routes));
    place("/ (back)", &out);
    assert!(!out.slave_active);
    resolver.commit();

    // A dynamic post opens as a dialog, first as a fallback render…
    let data = data_for(&routes, "/posts/1", false);
    let nav = NavContext {
        screen: bare,
        page_data: &data,
        path: "/posts/1",
        is_fallback: true,
    };
    let out = resolver.decide(&request_with_routes(&nav, &routes));
    place("/posts/1 (fallback)", &out);
    assert!(out.slave_active);
    assert!(out.slave.is_some_and(|s| s.contains("loading…")));
    let summary = resolver.commit();
    assert!(summary.slave_cleared);

    // …then again with real data once it arrives.
    let data = data_for(&routes, "/posts/1", true);
    let nav = NavContext {
        screen: bare,
        page_data: &data,
        path: "/posts/1",
        is_fallback: false,
    };
    let out = resolver.decide(&request_with_routes(&nav, &routes));
    place("/posts/1", &out);
    assert!(out.slave_active);
    assert!(out.slave.is_some_and(|s| s.contains("Post Title 1")));
    resolver.commit();

    // Plain navigation replaces the main body and closes the dialog.
    let data = data_for(&routes, "/about", true);
    let nav = NavContext {
        screen: with_layout,
        page_data: &data,
        path: "/about",
        is_fallback: false,
    };
    let out = resolver.decide(&request_with_routes(&nav, &routes));
    place("/about", &out);
    assert!(!out.slave_active);
    assert!(out.main.is_some_and(|m| m.contains("content of /about")));
    resolver.commit();
}
