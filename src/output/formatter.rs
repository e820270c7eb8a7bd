use chrono::Utc;
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::config::LocationConfig;
use crate::reports::Report;
use crate::scoring::CompositeResult;

/// A location with its composite result, ready for display
pub struct ScoredLocation<'a> {
    pub location: &'a LocationConfig,
    pub result: &'a CompositeResult,
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// One-line factor summary for the ranked table, e.g.
/// "air 8.2 / weather 10.0 / transit 10.0"
fn factor_summary(result: &CompositeResult) -> String {
    let score_of = |name: &str| result.factor(name).map(|f| f.score).unwrap_or(0.0);
    format!(
        "air {:.1} / weather {:.1} / transit {:.1}",
        score_of("air_quality"),
        score_of("weather"),
        score_of("transit")
    )
}

/// Format locations as a ranked table: Index, Score, Name, factor summary.
/// Index column: 3 chars (fits "99."), right-aligned. Score column: 5
/// chars wide, right-aligned, always one decimal.
pub fn format_scored_table(locations: &[ScoredLocation], use_colors: bool) -> String {
    if locations.is_empty() {
        return "No locations configured.".to_string();
    }

    let term_width = get_terminal_width();

    let index_width = 3;
    let score_width = 5;
    let separator = "  ";

    locations
        .iter()
        .enumerate()
        .map(|(idx, scored)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_str = format!("{:>width$.1}", scored.result.total_score, width = score_width);
            let summary = factor_summary(scored.result);

            let fixed_width =
                index_width + 1 + score_width + separator.len() * 2 + summary.len();
            let name = if let Some(width) = term_width {
                if width > fixed_width + 10 {
                    truncate_name(&scored.location.name, width - fixed_width)
                } else {
                    truncate_name(&scored.location.name, 20)
                }
            } else {
                // No terminal (pipe), don't truncate
                scored.location.name.clone()
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}",
                    index_str.dimmed(),
                    score_str.bold(),
                    separator,
                    name,
                    separator,
                    summary.dimmed()
                )
            } else {
                format!(
                    "{} {}{}{}{}{}",
                    index_str, score_str, separator, name, separator, summary
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format one composite result as a multi-line detail card.
pub fn format_score_card(label: &str, result: &CompositeResult, use_colors: bool) -> String {
    let mut lines = Vec::new();

    if use_colors {
        lines.push(format!(
            "{}  {}",
            label.bold(),
            format!("{:.1}/10", result.total_score).bold().green()
        ));
    } else {
        lines.push(format!("{}  {:.1}/10", label, result.total_score));
    }

    for (name, factor) in &result.factors {
        lines.push(format!(
            "  {:<12} {:>4.1}  (weight {:.2})  {}",
            name, factor.score, factor.weight, factor.description
        ));
    }

    lines.join("\n")
}

/// Format locations as tab-separated values for scripting
/// Columns: score, name, lat, lng (no headers, no colors)
pub fn format_tsv(locations: &[ScoredLocation]) -> String {
    if locations.is_empty() {
        return String::new();
    }

    locations
        .iter()
        .map(|scored| {
            format!(
                "{:.1}\t{}\t{}\t{}",
                scored.result.total_score,
                scored.location.name,
                scored.location.lat,
                scored.location.lng
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the report log, newest first, 1-based indices matching
/// `report remove`.
pub fn format_report_list(reports: &[&Report], use_colors: bool) -> String {
    if reports.is_empty() {
        return "No reports yet.".to_string();
    }

    reports
        .iter()
        .enumerate()
        .map(|(idx, report)| {
            let index_str = format!("{:>2}.", idx + 1);
            let age = format_age_secs(Utc::now().timestamp() - report.timestamp);
            if use_colors {
                format!(
                    "{} [{}] {} - {} ({}, {})",
                    index_str.dimmed(),
                    report.category.cyan(),
                    report.title.bold(),
                    report.datestamp,
                    report.geolocation,
                    age
                )
            } else {
                format!(
                    "{} [{}] {} - {} ({}, {})",
                    index_str, report.category, report.title, report.datestamp, report.geolocation, age
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format an age in seconds into a human-readable string
/// "2h" for hours, "3d" for days, "1w" for weeks
fn format_age_secs(secs: i64) -> String {
    let hours = secs / 3600;
    let days = secs / 86_400;
    let weeks = days / 7;

    if weeks >= 1 {
        format!("{}w ago", weeks)
    } else if days >= 1 {
        format!("{}d ago", days)
    } else if hours >= 1 {
        format!("{}h ago", hours)
    } else {
        let minutes = secs / 60;
        if minutes >= 1 {
            format!("{}m ago", minutes)
        } else {
            "just now".to_string()
        }
    }
}
