// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runnable demos for the Backdrop crates. See the `examples/` directory.
