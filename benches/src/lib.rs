// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the Backdrop crates. See the `benches/` directory.
