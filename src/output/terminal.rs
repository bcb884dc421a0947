//! Terminal output utilities.
//!
//! Renders result items for the command line, with colors.

use super::items::ResultItem;
use colored::Colorize;

/// Format a value as a right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A right-aligned string, never truncated
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    if value_str.len() >= width {
        value_str
    } else {
        format!("{value_str:>width$}")
    }
}

/// Render one item: headline, then one line per fact.
pub fn render_item(item: &ResultItem) -> String {
    let mut out = if item.is_advisory() {
        format!("{} {}", "NOTE".on_red(), item.text.yellow())
    } else if item.subtext.is_empty() {
        item.text.bold().to_string()
    } else {
        format!("{}  {}", item.text.bold(), item.subtext.dimmed())
    };
    let width = item.facts.iter().map(|f| f.key.len()).max().unwrap_or(0) + 2;
    for fact in &item.facts {
        out.push('\n');
        out.push_str(&format!(
            "{}  {}",
            format_field(&fact.key, width).cyan(),
            fact.label
        ));
    }
    out
}

/// Print items to stdout.
pub fn print_items(items: &[ResultItem]) {
    log::debug!("print_items() count={}", items.len());
    for item in items {
        println!("{}", render_item(item));
    }
}
