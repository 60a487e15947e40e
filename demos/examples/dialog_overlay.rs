// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dialog flow: a detail screen opens over a stale home screen.
//!
//! Four cycles: home renders as main; detail opens as a slave while home
//! stays untouched underneath; repeating the detail cycle changes nothing;
//! a reload-style visit to the same path promotes detail to the main slot.
//!
//! Run:
//! - `cargo run -p backdrop_demos --example dialog_overlay`

use backdrop_resolver::resolver::BodyResolver;
use backdrop_resolver::types::{CycleFlags, RenderRequest, ScreenDescriptor};

struct Page {
    title: &'static str,
}

fn screen(page: &Page) -> String {
    format!("[{}]", page.title)
}

fn layout(content: String, _page: &Page) -> String {
    format!("<layout>{content}</layout>")
}

fn cycle<'a>(page: &'a Page, path: &'a str, flags: CycleFlags) -> RenderRequest<'a, Page, String> {
    RenderRequest {
        screen: ScreenDescriptor::with_layout(screen, layout),
        page_data: page,
        current_path: path,
        flags,
    }
}

fn main() {
    let home = Page { title: "home" };
    let detail = Page { title: "detail" };
    let mut resolver: BodyResolver<String> = BodyResolver::new();

    // Home becomes the main body, layout-wrapped.
    let out = resolver.decide(&cycle(&home, "/", CycleFlags::empty()));
    println!("== / ==\n  main: {:?}  dialog: {:?}", out.main, out.slave);
    assert_eq!(out.main.map(String::as_str), Some("<layout>[home]</layout>"));
    assert!(!out.slave_active);
    resolver.commit();

    // Detail opens in the dialog; the stale home keeps the main slot and
    // the overlay render skips the layout.
    let out = resolver.decide(&cycle(&detail, "/detail", CycleFlags::MAY_BE_SLAVE));
    println!("== /detail (dialog) ==\n  main: {:?}  dialog: {:?}", out.main, out.slave);
    assert_eq!(out.main.map(String::as_str), Some("<layout>[home]</layout>"));
    assert_eq!(out.slave.map(String::as_str), Some("[detail]"));
    assert!(out.slave_active);
    resolver.commit();

    // Re-rendering the same cycle is idempotent.
    let out = resolver.decide(&cycle(&detail, "/detail", CycleFlags::MAY_BE_SLAVE));
    assert_eq!(out.main.map(String::as_str), Some("<layout>[home]</layout>"));
    assert_eq!(out.slave.map(String::as_str), Some("[detail]"));
    assert!(out.slave_active);
    resolver.commit();

    // Direct visit: detail becomes the main body and the dialog closes.
    let out = resolver.decide(&cycle(&detail, "/detail", CycleFlags::empty()));
    println!("== /detail (direct) ==\n  main: {:?}  dialog: {:?}", out.main, out.slave);
    assert_eq!(
        out.main.map(String::as_str),
        Some("<layout>[detail]</layout>")
    );
    assert!(out.slave.is_none());
    assert!(!out.slave_active);
    resolver.commit();
}
