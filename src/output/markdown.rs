// Markdown report generation for a comparison.
//
// Same sections as the terminal output, minus color, so a run can be saved
// and shared. Rendering is a pure function; `generate_report` only adds the
// timestamp and the file write.

use std::fmt::{self, Write as _};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::chart::render_bars;
use crate::analysis::corpus::{Comparison, Corpus};

/// Render a comparison as a Markdown document.
pub fn render_report(
    cmp: &Comparison,
    top_n: usize,
    bar_width: usize,
    generated_at: &str,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let left = escape_cell(&cmp.left.title);
    let right = escape_cell(&cmp.right.title);

    writeln!(out, "# {} vs {}\n", cmp.left.title, cmp.right.title)?;
    writeln!(out, "_Generated {generated_at}_\n")?;

    writeln!(out, "## Summary\n")?;
    writeln!(out, "| Document | Total words | Unique words | Avg length |")?;
    writeln!(out, "|---|---:|---:|---:|")?;
    for corpus in [&cmp.left, &cmp.right] {
        let mut title = escape_cell(&corpus.title);
        if !corpus.found {
            title.push_str(" (not found)");
        }
        writeln!(
            out,
            "| {} | {} | {} | {:.2} |",
            title, corpus.stats.total, corpus.stats.unique, corpus.stats.average_length
        )?;
    }

    writeln!(out, "\n## Similarity\n")?;
    writeln!(out, "- Cosine similarity: **{:.4}**", cmp.cosine)?;
    writeln!(out, "- Weighted Jaccard: {:.4}", cmp.jaccard)?;

    for corpus in [&cmp.left, &cmp.right] {
        write_top_words(&mut out, corpus, top_n, bar_width)?;
    }

    if !cmp.shared.is_empty() {
        writeln!(out, "\n## Shared vocabulary\n")?;
        writeln!(out, "| Word | {left} | {right} |")?;
        writeln!(out, "|---|---:|---:|")?;
        for term in &cmp.shared {
            writeln!(out, "| {} | {} | {} |", term.term, term.left, term.right)?;
        }
    }

    Ok(out)
}

fn write_top_words(
    out: &mut String,
    corpus: &Corpus,
    top_n: usize,
    bar_width: usize,
) -> fmt::Result {
    writeln!(out, "\n## Top {} words: {}\n", top_n, corpus.title)?;

    let top = corpus.top_words(top_n);
    match render_bars(&top, bar_width) {
        Some(rows) => {
            writeln!(out, "```")?;
            for row in rows {
                writeln!(out, "{:>15} | {} ({})", row.word, row.bar, row.count)?;
            }
            writeln!(out, "```")
        }
        None => writeln!(out, "_No data._"),
    }
}

/// Escape a value for use inside a Markdown table cell.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Write the report to `path`, stamped with the current UTC time.
pub fn generate_report(
    cmp: &Comparison,
    top_n: usize,
    bar_width: usize,
    path: &Path,
) -> Result<()> {
    let generated_at = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();
    let report = render_report(cmp, top_n, bar_width, &generated_at)
        .context("Failed to render report")?;

    std::fs::write(path, report)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;

    info!(path = %path.display(), "Report written");
    Ok(())
}
