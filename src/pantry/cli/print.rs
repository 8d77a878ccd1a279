use colored::Colorize;
use pantry::api::{CmdMessage, MessageLevel, Summary};
use pantry::config::{PantryConfig, CONFIG_KEYS};
use pantry::model::{Category, InventoryItem};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 28;
const CATEGORY_WIDTH: usize = 14;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn print_items(items: &[InventoryItem]) {
    if items.is_empty() {
        println!("No items found.");
        return;
    }

    for item in items {
        let name = truncate_to_width(&item.display_name(), NAME_WIDTH);
        let padding = NAME_WIDTH.saturating_sub(name.width());
        let category = format!("{:<width$}", item.category.as_str(), width = CATEGORY_WIDTH);
        println!(
            "  {}{}  {}  {}",
            name.bold(),
            " ".repeat(padding),
            category.dimmed(),
            format!("x{}", item.quantity).cyan()
        );
    }
}

/// One-line tally shown under listings.
pub fn print_counts(shown: usize, summary: &Summary) {
    let line = if shown == summary.distinct_items {
        format!(
            "{} items, {} units",
            summary.distinct_items, summary.total_quantity
        )
    } else {
        format!(
            "{} of {} items, {} units in total",
            shown, summary.distinct_items, summary.total_quantity
        )
    };
    println!("{}", line.dimmed());
}

pub fn print_summary(summary: &Summary) {
    for category in Category::ALL {
        let count = summary.by_category.get(&category).copied().unwrap_or(0);
        if count == 0 && category == Category::Uncategorized {
            continue;
        }
        let label = format!("{:<width$}", category.as_str(), width = CATEGORY_WIDTH);
        if count == 0 {
            println!("  {}{}", label.dimmed(), "0".dimmed());
        } else {
            println!("  {}{}", label, count.to_string().cyan());
        }
    }
    println!(
        "{}",
        format!(
            "{} items, {} units",
            summary.distinct_items, summary.total_quantity
        )
        .dimmed()
    );
}

pub fn print_categories() {
    for category in Category::SELECTABLE {
        println!("{}", category);
    }
}

pub fn print_config(config: &PantryConfig) {
    for key in CONFIG_KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names_are_untouched() {
        assert_eq!(truncate_to_width("Egg", 10), "Egg");
    }

    #[test]
    fn long_names_get_an_ellipsis() {
        let out = truncate_to_width("Extra virgin olive oil", 10);
        assert_eq!(out, "Extra vir…");
        assert_eq!(out.width(), 10);
    }
}
