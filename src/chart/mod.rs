//! Chart and graph sinks.
//!
//! Extraction results are handed to a [`ChartSink`] as parallel label and
//! value slices. [`TextChart`] draws them as horizontal bars with
//! percentages; other renderers can be plugged in behind the same trait.

mod graph;

pub use graph::{NetworkGraph, NodeKind};

use indexmap::IndexMap;
use std::io::Write;

use crate::error::Result;

/// Something that can draw a labelled series.
pub trait ChartSink {
    fn plot(&mut self, labels: &[String], values: &[usize], title: &str) -> Result<()>;
}

/// Horizontal bar chart written as plain text.
#[derive(Debug)]
pub struct TextChart<W: Write> {
    out: W,
    width: usize,
}

impl<W: Write> TextChart<W> {
    pub fn new(out: W) -> Self {
        Self { out, width: 40 }
    }

    /// Bar length of the largest value.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ChartSink for TextChart<W> {
    fn plot(&mut self, labels: &[String], values: &[usize], title: &str) -> Result<()> {
        writeln!(self.out, "{title}")?;
        let total: usize = values.iter().sum();
        let max = values.iter().copied().max().unwrap_or(0);
        let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

        for (label, &value) in labels.iter().zip(values) {
            let bar = if max == 0 { 0 } else { value * self.width / max };
            let percent = if total == 0 {
                0.0
            } else {
                value as f64 * 100.0 / total as f64
            };
            writeln!(
                self.out,
                "{label:<label_width$} | {:<width$} {value} ({percent:.0}%)",
                "#".repeat(bar),
                width = self.width
            )?;
        }
        Ok(())
    }
}

/// Count occurrences of each category, most frequent first.
///
/// Ties keep first-seen order.
pub fn count_categories<I, S>(items: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for item in items {
        *counts.entry(item.into()).or_insert(0) += 1;
    }
    let mut sorted: Vec<_> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));
    sorted
}

/// Keep the first `n` entries and fold the rest into a trailing `"Other"`
/// entry (omitted when nothing is folded).
pub fn top_n_with_other(counts: Vec<(String, usize)>, n: usize) -> Vec<(String, usize)> {
    let mut iter = counts.into_iter();
    let mut kept: Vec<_> = iter.by_ref().take(n).collect();
    let other: usize = iter.map(|(_, c)| c).sum();
    if other > 0 {
        kept.push(("Other".to_string(), other));
    }
    kept
}

/// Histogram with one unit-wide bin per value from 1 to the maximum.
///
/// Returns `(bin, frequency)` pairs; empty input gives no bins.
pub fn histogram(values: impl IntoIterator<Item = usize>) -> Vec<(usize, usize)> {
    let values: Vec<usize> = values.into_iter().collect();
    let Some(&max) = values.iter().max() else {
        return Vec::new();
    };
    (1..=max)
        .map(|bin| (bin, values.iter().filter(|&&v| v == bin).count()))
        .collect()
}

/// Split `(label, value)` pairs into the two slices [`ChartSink::plot`] takes.
pub fn split_series<L: ToString>(pairs: &[(L, usize)]) -> (Vec<String>, Vec<usize>) {
    pairs.iter().map(|(l, v)| (l.to_string(), *v)).unzip()
}
