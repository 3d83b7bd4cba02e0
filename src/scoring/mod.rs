// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking: ordering pages of documents by how often a term appears.

mod heap;
mod pages;

pub use heap::MaxHeap;
pub use pages::PageRanker;
