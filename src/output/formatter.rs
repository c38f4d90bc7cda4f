use std::io::IsTerminal;

use anyhow::Result;
use clap::ValueEnum;
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};
use terminal_size::{terminal_size, Width};

use crate::scoring::AggregateRating;

/// How results are rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Table,
    Json,
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score with exactly two decimals, the precision the scoring core
/// guarantees.
pub fn format_value(value: f64) -> String {
    format!("{:.2}", value)
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate an identifier to fit available width, accounting for Unicode
fn truncate_id(id: &str, max_width: usize) -> String {
    let chars: Vec<char> = id.chars().collect();
    if chars.len() <= max_width {
        id.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format ranked summaries as a table with columns: Index, Score, Votes,
/// Item, Owner. No headers; one line per item, rank order as given.
/// Score column is right-aligned, 8 chars wide (fits "10000.00")
pub fn format_ranked_table(summaries: &[AggregateRating], use_colors: bool) -> String {
    if summaries.is_empty() {
        return "No aggregate ratings.".to_string();
    }

    let term_width = get_terminal_width();

    let index_width = 3;
    let score_width = 8;
    let separator = "  ";

    summaries
        .iter()
        .enumerate()
        .map(|(idx, summary)| {
            // 1-based rank, right-aligned with trailing dot
            let index_str = format!("{:>2}.", idx + 1);
            let score_padded = format!("{:>width$}", format_value(summary.rating_value), width = score_width);
            let votes = format!(
                "({} {})",
                summary.rating_count,
                if summary.rating_count == 1 { "vote" } else { "votes" }
            );
            let owner = format!("by {}", summary.item_reviewed.owner);

            // Leave whatever width remains for the item id
            let fixed_width =
                index_width + 1 + score_width + separator.len() * 3 + votes.len() + owner.len();
            let id = if let Some(width) = term_width {
                if width > fixed_width + 10 {
                    truncate_id(&summary.item_reviewed.id, width - fixed_width)
                } else {
                    truncate_id(&summary.item_reviewed.id, 20)
                }
            } else {
                summary.item_reviewed.id.clone()
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{} {}",
                    index_str.dimmed(),
                    score_padded.bold(),
                    separator,
                    id.cyan(),
                    separator,
                    owner.yellow(),
                    votes.dimmed()
                )
            } else {
                format!(
                    "{} {}{}{}{}{} {}",
                    index_str, score_padded, separator, id, separator, owner, votes
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render summaries as a pretty-printed JSON array.
pub fn format_json(summaries: &[AggregateRating]) -> Result<String> {
    Ok(serde_json::to_string_pretty(summaries)?)
}
