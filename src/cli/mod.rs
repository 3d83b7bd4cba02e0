// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the lapdex command-line interface.
//!
//! Every subcommand loads the catalog from `--docs`, builds the indexes in
//! memory, answers one query, and exits. `vocab build` is the only one that
//! writes anything: a vocabulary file that later runs can seed from via the
//! `vocabularyPath` config key.

pub mod display;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "lapdex",
    about = "Lexical search and ranking over a laptop catalog",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args)]
pub struct GlobalArgs {
    /// JSON array of catalog documents
    #[arg(long, global = true, default_value = "laptops.json")]
    pub docs: PathBuf,

    /// Engine configuration (JSON, camelCase keys)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find documents by product name, falling back to fuzzy matching
    Search {
        /// Search query
        query: String,

        /// Skip the exact stage and rank by edit distance only
        #[arg(long)]
        fuzzy_only: bool,

        /// Edit distance threshold (default: config maxEditDistance)
        #[arg(long)]
        max_distance: Option<usize>,

        /// Narrow results so every query word prefix-matches a product or brand word
        #[arg(long)]
        full: bool,
    },

    /// Most frequent vocabulary words starting with a prefix
    Complete {
        /// Word prefix
        prefix: String,

        /// Number of completions (default: config topK)
        #[arg(short)]
        k: Option<usize>,
    },

    /// Vocabulary words containing a substring
    Spellcheck {
        /// Substring to look for
        needle: String,
    },

    /// Rank catalog pages by occurrences of a term
    Rank {
        /// Term to count
        term: String,

        /// Documents per page (default: config pageSize)
        #[arg(long)]
        page_size: Option<usize>,

        /// Only count occurrences on this page (0-based)
        #[arg(long)]
        page: Option<usize>,
    },

    /// Vocabulary maintenance
    Vocab {
        #[command(subcommand)]
        command: VocabCommands,
    },
}

#[derive(Subcommand)]
pub enum VocabCommands {
    /// Build a vocabulary file from the catalog
    Build {
        /// Output file (`word: frequency` per line)
        #[arg(short, long)]
        output: PathBuf,

        /// One entry per normalized product name instead of per word
        #[arg(long)]
        product_names: bool,
    },
}
