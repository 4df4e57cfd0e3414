//! Output formatting and progress bars for CLI

use std::fmt::Display;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{search::SearchStats, session::Scoreboard};

/// Create a progress bar for simulated games
pub fn create_game_progress(total_games: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_games);
    let style = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-");
    pb.set_style(style);
    pb
}

/// Print `title` underlined with `rule` to the title's width.
///
/// Reports use `'='` for the top heading and `'-'` below it.
pub fn print_heading(title: &str, rule: char) {
    println!("\n{title}");
    println!("{}", rule.to_string().repeat(title.chars().count()));
}

/// Print an indented, aligned `key: value` line
pub fn print_kv(key: &str, value: impl Display) {
    println!("  {:<20} {value}", format!("{key}:"));
}

/// Group the digits of a counter in threes: `549946` becomes `549,946`.
pub fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let head = digits.len() % 3;
    let mut groups: Vec<&str> = Vec::with_capacity(digits.len() / 3 + 1);
    if head > 0 {
        groups.push(&digits[..head]);
    }
    groups.extend(
        digits.as_bytes()[head..]
            .chunks(3)
            .filter_map(|chunk| std::str::from_utf8(chunk).ok()),
    );
    groups.join(",")
}

/// Print the node and cut-off counters of one search
pub fn print_search_stats(label: &str, stats: &SearchStats) {
    print_kv(&format!("Nodes{label}"), group_digits(stats.nodes));
    print_kv(&format!("Cut-offs{label}"), group_digits(stats.cutoffs));
}

/// Print a tally from the engine's side: human defeats are engine wins.
pub fn print_engine_record(scoreboard: &Scoreboard) {
    print_kv("Engine wins", scoreboard.defeats);
    print_kv("Draws", scoreboard.draws);
    print_kv("Engine losses", scoreboard.victories);
    print_kv("Draw rate", format!("{:.1}%", scoreboard.draw_rate() * 100.0));
}
