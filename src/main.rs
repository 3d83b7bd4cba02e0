// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use lapdex::{
    logging, DocumentSource, EngineConfig, FuzzyMatcher, InMemorySource, SearchEngine, Vocabulary,
};

mod cli;
use cli::{display, Cli, Commands, VocabCommands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.global.verbose);

    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = load_config(cli.global.config.as_deref())?;
    let source = InMemorySource::from_json_file(&cli.global.docs)
        .with_context(|| format!("failed to load documents from {}", cli.global.docs.display()))?;

    match cli.command {
        Commands::Search {
            query,
            fuzzy_only,
            max_distance,
            full,
        } => {
            if let Some(max) = max_distance {
                config.max_edit_distance = max;
            }
            if fuzzy_only {
                run_fuzzy(&source, &config, &query);
                return Ok(());
            }
            let engine = SearchEngine::new(source, config)?;
            if full {
                display::print_documents("FULL SEARCH", &engine.full_search(&query));
            } else {
                display::print_documents("SEARCH", &engine.search(&query));
            }
        }
        Commands::Complete { prefix, k } => {
            let engine = SearchEngine::new(source, config)?;
            display::print_completions(&prefix, &engine.complete(&prefix, k));
        }
        Commands::Spellcheck { needle } => {
            let engine = SearchEngine::new(source, config)?;
            display::print_words("SPELLCHECK", &engine.spellcheck(&needle));
        }
        Commands::Rank {
            term,
            page_size,
            page,
        } => {
            if let Some(page_size) = page_size {
                config.page_size = page_size;
            }
            let page_size = config.page_size;
            let engine = SearchEngine::new(source, config)?;
            match page {
                Some(page) => {
                    let count = engine
                        .page_frequency(&term, page)
                        .with_context(|| format!("cannot count {:?} on page {}", term, page))?;
                    display::print_page_frequency(&term, page, page_size, count);
                }
                None => {
                    let ranks = engine
                        .rank_pages(&term)
                        .with_context(|| format!("cannot rank pages for {:?}", term))?;
                    display::print_pages(&term, page_size, &ranks);
                }
            }
        }
        Commands::Vocab {
            command: VocabCommands::Build {
                output,
                product_names,
            },
        } => {
            let vocabulary = if product_names {
                Vocabulary::product_names(source.all())
            } else {
                Vocabulary::from_documents(source.all(), &config.index_fields)
            };
            vocabulary
                .write_to(&output)
                .with_context(|| format!("failed to write vocabulary to {}", output.display()))?;
            println!(
                "Wrote {} entries to {}",
                display::themed(display::GREEN, &[display::BOLD], &vocabulary.len().to_string()),
                output.display()
            );
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };
    let config = EngineConfig::from_file(path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

fn run_fuzzy(source: &InMemorySource, config: &EngineConfig, query: &str) {
    let candidates = FuzzyMatcher::new(config.fuzzy_field).candidates(
        source.all(),
        query,
        config.max_edit_distance,
    );
    let rows: Vec<_> = candidates
        .iter()
        .map(|candidate| (candidate.document, candidate.distance, candidate.kind))
        .collect();
    display::print_candidates("FUZZY", &rows);
}
