// Colored terminal output for corpus statistics and comparisons.
//
// This module handles all terminal-specific formatting: colors, tables and
// bar charts. main.rs only decides which sections to print.

use colored::Colorize;

use super::chart::render_bars;
use super::truncate_chars;
use crate::analysis::corpus::{Comparison, Corpus};

/// Widest title shown in table rows before truncation.
const TITLE_WIDTH: usize = 24;

/// Display every section of a two-document comparison.
pub fn display_comparison(cmp: &Comparison, top_n: usize, bar_width: usize) {
    display_missing(&cmp.left);
    display_missing(&cmp.right);

    display_summary(&[&cmp.left, &cmp.right]);

    display_top_words(&cmp.left, top_n);
    display_top_words(&cmp.right, top_n);

    display_bar_chart(&cmp.left, top_n, bar_width);
    display_bar_chart(&cmp.right, top_n, bar_width);

    display_shared_terms(cmp);
    display_similarity(cmp);
}

/// Display every section for a single document.
pub fn display_corpus(corpus: &Corpus, top_n: usize, bar_width: usize) {
    display_missing(corpus);
    display_summary(&[corpus]);
    display_top_words(corpus, top_n);
    display_bar_chart(corpus, top_n, bar_width);
}

/// Warn about a document the source did not have.
pub fn display_missing(corpus: &Corpus) {
    if !corpus.found {
        println!(
            "{} Page '{}' does not exist or could not be fetched",
            "[ERROR]".red().bold(),
            corpus.title
        );
    }
}

/// Display the summary statistics table.
pub fn display_summary(corpora: &[&Corpus]) {
    println!("\n{}", "=== Summary statistics ===".bold());
    println!(
        "  {:<24}  {:>8}  {:>8}  {:>10}",
        "Document".dimmed(),
        "Total".dimmed(),
        "Unique".dimmed(),
        "Avg length".dimmed(),
    );
    println!("  {}", "-".repeat(56).dimmed());

    for corpus in corpora {
        println!(
            "  {:<24}  {:>8}  {:>8}  {:>10.2}",
            truncate_chars(&corpus.title, TITLE_WIDTH - 3),
            corpus.stats.total,
            corpus.stats.unique,
            corpus.stats.average_length,
        );
    }
}

/// Display the top-N word table for one corpus.
pub fn display_top_words(corpus: &Corpus, n: usize) {
    println!(
        "\n{}",
        format!("=== Top {} words for {} ===", n, corpus.title).bold()
    );

    let top = corpus.top_words(n);
    if top.is_empty() {
        println!("  {}", "(no words)".dimmed());
        return;
    }

    for (word, count) in &top {
        println!("  {:>15} : {}", word, count);
    }
}

/// Display a proportional ASCII bar chart of the top-N words.
pub fn display_bar_chart(corpus: &Corpus, n: usize, width: usize) {
    let top = corpus.top_words(n);
    let Some(rows) = render_bars(&top, width) else {
        println!("\n{}", format!("[No data for {}]", corpus.title).yellow());
        return;
    };

    println!(
        "\n{}",
        format!("=== ASCII bar chart for {} ===", corpus.title).bold()
    );
    for row in rows {
        println!(
            "  {:>15} | {} ({})",
            row.word,
            row.bar.bright_green(),
            row.count
        );
    }
}

/// Display the words both documents share.
pub fn display_shared_terms(cmp: &Comparison) {
    if cmp.shared.is_empty() {
        return;
    }

    println!(
        "\n{}",
        format!("=== Shared vocabulary ({} terms) ===", cmp.shared.len()).bold()
    );
    println!(
        "  {:>15}   {:>8}  {:>8}",
        "Word".dimmed(),
        truncate_chars(&cmp.left.title, 5).dimmed(),
        truncate_chars(&cmp.right.title, 5).dimmed(),
    );
    for term in &cmp.shared {
        println!("  {:>15}   {:>8}  {:>8}", term.term, term.left, term.right);
    }
}

/// Display the similarity scores.
pub fn display_similarity(cmp: &Comparison) {
    println!(
        "\nCosine similarity between {} and {}: {}",
        cmp.left.title.bold(),
        cmp.right.title.bold(),
        colorize_score(cmp.cosine),
    );
    println!(
        "  {}",
        format!("Weighted Jaccard: {:.4}", cmp.jaccard).dimmed()
    );
}

/// Colorize a similarity score by strength.
fn colorize_score(score: f64) -> colored::ColoredString {
    let text = format!("{score:.4}");
    if score >= 0.75 {
        text.green().bold()
    } else if score >= 0.4 {
        text.yellow()
    } else {
        text.normal()
    }
}
