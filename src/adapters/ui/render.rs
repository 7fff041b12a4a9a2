//! Result panel rendering. Purely derived from a state snapshot.

use crossterm::style::{Color, Stylize};

use crate::domain::{AnalysisResult, ResumeUpload, Theme};

const GAUGE_WIDTH: usize = 40;
const BREAKDOWN_WIDTH: usize = 20;

fn score_color(score: u8) -> Color {
    if score >= 80 {
        Color::Green
    } else if score >= 50 {
        Color::Yellow
    } else {
        Color::Red
    }
}

fn heading_color(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::White,
        Theme::Light => Color::Black,
    }
}

fn muted_color(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::Grey,
        Theme::Light => Color::DarkGrey,
    }
}

/// Horizontal gauge: `value` out of `max`, rendered at `width` cells.
fn bar(value: u8, max: u8, width: usize) -> String {
    let max = usize::from(max).max(1);
    let filled = (usize::from(value) * width / max).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Confirmation line after a file was accepted.
pub fn print_selection(upload: &ResumeUpload, theme: Theme) {
    println!(
        "{} {} ({})",
        "✓".with(Color::Green),
        upload.file_name.clone().with(heading_color(theme)).bold(),
        upload.size_kb().with(muted_color(theme))
    );
}

/// One-line session status shown above the menu.
pub fn print_status(upload: Option<&ResumeUpload>, job_words: usize, theme: Theme) {
    let muted = muted_color(theme);
    if let Some(upload) = upload {
        println!(
            "{}",
            format!("Resume: {} ({})", upload.file_name, upload.size_kb()).with(muted)
        );
    }
    if job_words > 0 {
        println!(
            "{}",
            format!("Job description: {} words", job_words).with(muted)
        );
    }
}

/// Inline error, shown near the input that caused it.
pub fn print_error(message: &str) {
    println!("{} {}", "✗".with(Color::Red), message.with(Color::Red));
}

pub fn print_saved(path: &std::path::Path, theme: Theme) {
    println!(
        "{} report saved to {}",
        "✓".with(Color::Green),
        path.display().to_string().with(heading_color(theme)).bold()
    );
}

/// Full results panel: gauge, breakdown, keywords, structure, suggestions.
pub fn print_result(result: &AnalysisResult, theme: Theme) {
    let accent = score_color(result.score);
    let heading = heading_color(theme);
    let muted = muted_color(theme);

    println!();
    println!(
        "  {} {}",
        bar(result.score, 100, GAUGE_WIDTH).with(accent),
        format!("{}/100", result.score).with(accent).bold()
    );
    println!("  {}", "ATS SCORE".with(muted));
    println!();

    println!("{}", "Score Breakdown".with(heading).bold());
    for (label, value, max) in [
        ("Keywords", result.score_breakdown.keyword_score, 50),
        ("Sections", result.score_breakdown.section_score, 30),
        ("Length  ", result.score_breakdown.length_score, 20),
    ] {
        println!(
            "  {} {} {}",
            label.with(muted),
            bar(value, max, BREAKDOWN_WIDTH),
            format!("{}/{}", value, max).with(heading)
        );
    }
    println!();

    println!("{}", "Keyword Analysis".with(heading).bold());
    if result.matched_keywords.is_empty() {
        println!("  {}", "No exact keyword matches found.".with(muted));
    } else {
        println!(
            "  {} {}",
            format!("Matches Found ({}):", result.matched_keywords.len()).with(Color::Green),
            result.matched_keywords.join(", ")
        );
    }
    if result.missing_keywords.is_empty() {
        println!(
            "  {}",
            "Excellent! No missing keywords.".with(Color::Green)
        );
    } else {
        println!(
            "  {} {}",
            format!("Missing Keywords ({}):", result.missing_keywords.len()).with(Color::Red),
            result.missing_keywords.join(", ")
        );
    }
    println!();

    println!("{}", "Structure Check".with(heading).bold());
    for section in &result.sections {
        let mark = if section.found {
            "✓".with(Color::Green)
        } else {
            "✗".with(Color::Red)
        };
        println!(
            "  {} {} {}",
            mark,
            section.name.clone().with(heading),
            format!("— {}", section.message).with(muted)
        );
    }
    println!();

    println!("{}", "Suggestions".with(heading).bold());
    if result.suggestions.is_empty() {
        println!(
            "  {}",
            "No major improvements detected. Good job!".with(Color::Green)
        );
    } else {
        for (i, suggestion) in result.suggestions.iter().enumerate() {
            println!("  {} {}", format!("{}.", i + 1).with(muted), suggestion);
        }
    }
    println!();
    println!(
        "{}",
        format!("Estimated resume length: {} words", result.word_count).with(muted)
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_is_always_full_width() {
        for value in [0u8, 10, 35, 50] {
            assert_eq!(bar(value, 50, 20).chars().count(), 20);
        }
    }

    #[test]
    fn bar_fills_proportionally() {
        assert_eq!(bar(0, 100, 10), "░░░░░░░░░░");
        assert_eq!(bar(100, 100, 10), "██████████");
        assert_eq!(bar(50, 100, 10), "█████░░░░░");
    }

    #[test]
    fn score_color_thresholds() {
        assert_eq!(score_color(49), Color::Red);
        assert_eq!(score_color(50), Color::Yellow);
        assert_eq!(score_color(79), Color::Yellow);
        assert_eq!(score_color(80), Color::Green);
    }
}
