// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use concord::report::{compare_backends, Comparison, Lookup, Summary, WordStat};
use concord::{build_from_path, BuiltIndex, SortOrder};

mod cli;
use cli::display::{
    backend_badge, banner, field, format_count, line_list, listing_row, rule, timing_ms, word,
    word_count, Edge,
};
use cli::menu::Menu;
use cli::pager::Pager;
use cli::{Cli, Commands, SourceArgs};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Stats { source, json } => run_stats(&source, json),
        Commands::Lookup {
            source,
            words,
            max_lines,
            json,
        } => run_lookup(&source, &words, max_lines, json),
        Commands::List {
            source,
            desc,
            limit,
            page_size,
            json,
        } => run_list(&source, SortOrder::from_ascending(!desc), limit, page_size, json),
        Commands::Compare { file, json } => run_compare(&file, json),
        Commands::Menu { source, page_size } => run_menu(source, page_size),
    }
}

fn build(source: &SourceArgs) -> Result<BuiltIndex> {
    let built = build_from_path(&source.file, source.build_options())
        .with_context(|| format!("indexing {}", source.file.display()))?;
    if built.index.is_empty() {
        eprintln!("⚠️  No words found in {}", source.file.display());
    }
    Ok(built)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn interactive() -> bool {
    atty::is(atty::Stream::Stdin) && atty::is(atty::Stream::Stdout)
}

fn millis(duration: std::time::Duration) -> f64 {
    duration.as_secs_f64() * 1_000.0
}

fn run_stats(source: &SourceArgs, json: bool) -> Result<()> {
    let built = build(source)?;
    let summary = Summary::new(built.index.as_ref(), built.report);
    if json {
        return print_json(&summary);
    }

    let report = &summary.build;
    banner(&format!("CONCORD · {}", report.source));
    rule(Edge::Top, Some("Index"));
    field("Backend", &backend_badge(report.backend.name()));
    field("Lines", &format_count(report.lines));
    field("Words", &format_count(report.words_indexed));
    field("Unique words", &format_count(report.unique_words));
    field("Build time", &timing_ms(millis(report.build_time)));
    if report.lossy_lines > 0 {
        field("Lossy lines", &format_count(report.lossy_lines));
    }
    rule(Edge::Mid, Some("Tokens"));
    field("Seen", &format_count(report.tokens.seen));
    field("Not words", &format_count(report.tokens.rejected_shape));
    field("Roman numerals", &format_count(report.tokens.rejected_roman));
    rule(Edge::Mid, Some("Highlights"));
    let show = |stat: &Option<WordStat>| match stat {
        Some(stat) => word_count(&stat.word, stat.count),
        None => word_count("", 0),
    };
    field("Most frequent", &show(&summary.most_frequent));
    field("Longest", &show(&summary.longest));
    rule(Edge::Bottom, None);
    Ok(())
}

fn run_lookup(source: &SourceArgs, words: &[String], max_lines: usize, json: bool) -> Result<()> {
    let built = build(source)?;
    let lookups: Vec<Lookup> = words
        .iter()
        .map(|word| Lookup::new(built.index.as_ref(), word))
        .collect();
    if json {
        return print_json(&lookups);
    }

    for lookup in &lookups {
        println!(
            "{}  frequency {}",
            word(&lookup.word),
            format_count(lookup.frequency)
        );
        println!("  Lines: {}", line_list(&lookup.lines, max_lines));
    }
    Ok(())
}

fn run_list(
    source: &SourceArgs,
    order: SortOrder,
    limit: Option<usize>,
    page_size: usize,
    json: bool,
) -> Result<()> {
    let built = build(source)?;
    let entries = built
        .index
        .entries_sorted(order)
        .take(limit.unwrap_or(usize::MAX));

    if json {
        let stats: Vec<WordStat> = entries.filter_map(WordStat::from_result).collect();
        return print_json(&stats);
    }

    let stdout = io::stdout();
    let stdin = io::stdin();
    let mut out = stdout.lock();
    let mut input = stdin.lock();
    let rows = entries.map(|(word, count)| listing_row(word, count));
    Pager::new(&mut out, &mut input, page_size, interactive())
        .lines(rows)
        .context("writing listing")?;
    Ok(())
}

fn run_compare(path: &Path, json: bool) -> Result<()> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let comparison = compare_backends(&bytes, &path.display().to_string())?;
    if json {
        print_json(&comparison)?;
    } else {
        print_comparison(&comparison);
    }

    if !comparison.agrees() {
        bail!(
            "backends disagree on {} ({} mismatches)",
            comparison.source,
            comparison.mismatches.len()
        );
    }
    Ok(())
}

fn print_comparison(comparison: &Comparison) {
    banner(&format!("CONCORD · compare · {}", comparison.source));
    for timing in &comparison.backends {
        rule(Edge::Top, Some(timing.backend.name()));
        field("Build", &timing_ms(millis(timing.build_time)));
        field("Traversal", &timing_ms(millis(timing.traversal_time)));
        field("Unique words", &format_count(timing.unique_words));
        if let Some(height) = timing.tree_height {
            field("Tree height", &format_count(height));
        }
        rule(Edge::Bottom, None);
    }

    if comparison.agrees() {
        println!("✓ Backends agree");
    } else {
        for mismatch in &comparison.mismatches {
            eprintln!("⚠️  {}", mismatch);
        }
    }
}

fn run_menu(source: SourceArgs, page_size: usize) -> Result<()> {
    let built = build(&source)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(
        stdin.lock(),
        stdout.lock(),
        source,
        built,
        page_size,
        interactive(),
    );
    menu.run()
}
