// Proportional ASCII bars for a ranked word list.
//
// The most frequent word gets a bar `width` characters long; everything else
// is scaled against it and rounded down, with a floor of one character so a
// listed word never shows an empty bar.

/// One rendered row of the chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarRow {
    pub word: String,
    pub count: usize,
    pub bar: String,
}

/// Bar length for `count` when `max` maps to `width` characters.
pub fn bar_length(count: usize, max: usize, width: usize) -> usize {
    if max == 0 {
        return 0;
    }
    let scale = max as f64 / width as f64;
    ((count as f64 / scale) as usize).max(1)
}

/// Render bars for an already-ranked list (highest count first).
///
/// Returns `None` when there is nothing to draw: an empty list or a top
/// count of zero. Callers show a "no data" line instead.
pub fn render_bars(ranked: &[(String, usize)], width: usize) -> Option<Vec<BarRow>> {
    let max = ranked.first().map(|(_, c)| *c)?;
    if max == 0 {
        return None;
    }

    Some(
        ranked
            .iter()
            .map(|(word, count)| BarRow {
                word: word.clone(),
                count: *count,
                bar: "#".repeat(bar_length(*count, max, width)),
            })
            .collect(),
    )
}
