// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where the indexes meet the catalog.
//!
//! Exact product-name matches first, fuzzy matches when there are none, and
//! an inverted-index pass to narrow a candidate list by every query token.

mod engine;

pub use engine::*;
