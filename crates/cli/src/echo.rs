use owo_colors::OwoColorize;
use postmetric_core::ContentAnalysis;

use crate::VERSION;

/// Print a styled banner for verbose mode
pub fn print_banner() {
    eprintln!(
        "\n{} {} {}",
        "Postmetric".bold().bright_blue(),
        "v".dimmed(),
        VERSION.dimmed()
    );
    eprintln!("{}", "Statistics, SEO and readability for post content\n".dimmed());
}

/// Print a styled step message
pub fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print an info message
pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message.bright_blue());
}

/// Print timing information
pub fn print_timing(label: &str, duration: std::time::Duration) {
    let ms = duration.as_secs_f64() * 1000.0;
    eprintln!("  {} {:>8.2}ms", format!("{}:", label).dimmed(), ms);
}

/// Print a 0-100 score, green when good and red when poor
fn print_score(label: &str, score: u8) {
    let value = format!("{:>3}", score);
    let value = if score >= 80 {
        value.bright_green().to_string()
    } else if score >= 50 {
        value.bright_yellow().to_string()
    } else {
        value.bright_red().to_string()
    };
    eprintln!("  {} {}", format!("{:<18}", format!("{}:", label)).dimmed(), value);
}

/// Print the SEO breakdown of an analysis
pub fn print_score_summary(analysis: &ContentAnalysis) {
    eprintln!("\n{}", "═".repeat(60).dimmed());
    eprintln!("{}", "Score Summary".bold().cyan());
    eprintln!("{}", "═".repeat(60).dimmed());
    print_score("SEO overall", analysis.seo.overall);
    for (category, check) in analysis.seo.checks() {
        print_score(category.label(), check.score);
    }
    eprintln!(
        "  {} {}\n",
        format!("{:<18}", "Difficulty:").dimmed(),
        analysis.readability.difficulty.label().bright_white()
    );
}

/// Print timing summary
pub fn print_timing_summary(total: std::time::Duration, timings: &[(&str, std::time::Duration)]) {
    eprintln!("{}", "═".repeat(60).dimmed());
    eprintln!("{}", "Timing Summary".bold().cyan());
    eprintln!("{}", "═".repeat(60).dimmed());

    for (label, duration) in timings {
        print_timing(label, *duration);
    }

    eprintln!(
        "  {} {:>8.2}ms\n",
        format!("{}:", "Total").bold().dimmed(),
        total.as_secs_f64() * 1000.0
    );
}

/// Format file size for display
pub fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
