//! Line assembly: vertical grouping, horizontal ordering, gap-derived
//! whitespace.
//!
//! The algorithm is position-only, with no font heuristics:
//!
//! ```text
//! same line:  |a.y - line.y| <= line_tolerance
//! spacing:    gap = next.x - (prev.x + prev.width)
//!             gap > gap_threshold  =>  clamp(gap / char_width, 1, max) spaces
//! ```
//!
//! Gaps at or under the threshold concatenate directly; registrar columns
//! separated by wide gutters come back as contiguous whitespace runs, which
//! is what the downstream record patterns key on.

use std::collections::BTreeMap;

use crate::config::{ExtractionConfig, YAxis};
use crate::layout::{Line, PositionedFragment};

/// Reconstruct reading-order lines from renderer fragments.
///
/// Fragments may arrive in any order; they are bucketed by page, grouped
/// into lines by vertical proximity, and each line's fragments are ordered
/// by their left edge. Output lines are ordered by (page, vertical position
/// per the configured axis). Blank fragments and blank lines are dropped.
///
/// Empty input yields an empty sequence; that is a valid result, and the
/// caller decides whether an empty document is an error.
pub fn reconstruct_lines(
    fragments: &[PositionedFragment],
    config: &ExtractionConfig,
) -> Vec<Line> {
    let mut pages: BTreeMap<usize, Vec<&PositionedFragment>> = BTreeMap::new();
    for fragment in fragments {
        if fragment.text.trim().is_empty() {
            continue;
        }
        pages.entry(fragment.page).or_default().push(fragment);
    }

    let mut lines = Vec::new();
    for (page, page_fragments) in pages {
        for (y, group) in group_by_baseline(&page_fragments, config.line_tolerance) {
            let text = assemble_line(&group, config);
            if !text.trim().is_empty() {
                lines.push(Line { page, y, text });
            }
        }
    }

    lines.sort_by(|a, b| {
        a.page.cmp(&b.page).then_with(|| match config.y_axis {
            YAxis::TopDown => a.y.total_cmp(&b.y),
            YAxis::BottomUp => b.y.total_cmp(&a.y),
        })
    });
    lines
}

/// Group one page's fragments into lines keyed by the first-seen baseline.
///
/// First-fit assignment: a fragment joins the first existing group whose
/// anchor differs from its y by no more than the tolerance, otherwise it
/// starts a new group at its own y.
fn group_by_baseline<'a>(
    fragments: &[&'a PositionedFragment],
    tolerance: f32,
) -> Vec<(f32, Vec<&'a PositionedFragment>)> {
    let mut groups: Vec<(f32, Vec<&'a PositionedFragment>)> = Vec::new();
    for fragment in fragments {
        match groups
            .iter_mut()
            .find(|(anchor, _)| (fragment.y - *anchor).abs() <= tolerance)
        {
            Some((_, members)) => members.push(fragment),
            None => groups.push((fragment.y, vec![fragment])),
        }
    }
    groups
}

/// Order one line's fragments by x and concatenate them, inserting
/// synthetic spaces proportional to any gap wider than the threshold.
fn assemble_line(fragments: &[&PositionedFragment], config: &ExtractionConfig) -> String {
    let mut ordered: Vec<&PositionedFragment> = fragments.to_vec();
    ordered.sort_by(|a, b| a.x.total_cmp(&b.x));

    let mut text = String::new();
    let mut last_end: Option<f32> = None;
    for fragment in ordered {
        if let Some(end) = last_end {
            let gap = fragment.x - end;
            if gap > config.gap_threshold {
                let count = ((gap / config.char_width) as usize)
                    .clamp(1, config.max_gap_spaces);
                for _ in 0..count {
                    text.push(' ');
                }
            }
        }
        text.push_str(fragment.text.trim());
        last_end = Some(fragment.x + fragment.effective_width(config.char_width));
    }
    text
}
