//! Output formatting for wish lists (table, JSON, markdown, CSV).

use crate::config::OutputFormat;
use crate::wishlist::{Item, WishList};

/// Formats wish lists for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a wish list.
    pub fn format_wishlist(&self, list: &WishList) -> String {
        match self.format {
            OutputFormat::Json => self.json(list),
            OutputFormat::Table => self.table(list),
            OutputFormat::Markdown => self.markdown(list),
            OutputFormat::Csv => self.csv(&list.items),
        }
    }

    fn owner(list: &WishList) -> &str {
        if list.owner.is_empty() {
            "Unknown owner"
        } else {
            &list.owner
        }
    }

    // JSON formatting

    fn json(&self, list: &WishList) -> String {
        serde_json::to_string_pretty(list).unwrap_or_else(|_| "{}".to_string())
    }

    // Table formatting

    fn table(&self, list: &WishList) -> String {
        let mut lines = vec![Self::owner(list).to_string()];

        if list.is_empty() {
            lines.push(String::new());
            lines.push("No items found.".to_string());
            return lines.join("\n");
        }

        for item in &list.items {
            lines.push(String::new());
            lines.push(format!("Item:   {}", item.title));
            lines.push(format!("Price:  {}", item.price));
            lines.push(format!(
                "Rating: {}",
                if item.rating.is_empty() { "N/A" } else { item.rating.as_str() }
            ));
            if !item.date_added.is_empty() {
                lines.push(item.date_added.clone());
            }
        }

        lines.push(String::new());
        lines.push(format!("Total: {} items", list.count()));

        lines.join("\n")
    }

    // Markdown formatting

    fn markdown(&self, list: &WishList) -> String {
        let mut lines = Vec::new();

        lines.push(format!("## {}", Self::owner(list)));
        lines.push(String::new());

        if list.is_empty() {
            lines.push("*No items found*".to_string());
            return lines.join("\n");
        }

        lines.push("| Title | Price | Rating | Added |".to_string());
        lines.push("|-------|-------|--------|-------|".to_string());

        for item in &list.items {
            let title = if item.title.chars().count() > 40 {
                format!("{}...", item.title.chars().take(37).collect::<String>())
            } else {
                item.title.clone()
            };

            lines.push(format!(
                "| [{}]({}) | {} | {} | {} |",
                Self::markdown_escape(&title),
                item.url,
                item.price,
                item.rating,
                item.date_added
            ));
        }

        lines.push(String::new());
        lines.push(format!("*{} items*", list.count()));

        lines.join("\n")
    }

    fn markdown_escape(s: &str) -> String {
        s.replace('|', "\\|").replace('[', "\\[").replace(']', "\\]")
    }

    // CSV formatting

    fn csv_header(&self) -> String {
        "id,title,price,rating,date_added,url".to_string()
    }

    fn csv(&self, items: &[Item]) -> String {
        let mut lines = Vec::new();
        lines.push(self.csv_header());

        for item in items {
            lines.push(format!(
                "{},{},{},{},{},{}",
                Self::csv_escape(&item.id),
                Self::csv_escape(&item.title),
                Self::csv_escape(&item.price),
                Self::csv_escape(&item.rating),
                Self::csv_escape(&item.date_added),
                Self::csv_escape(&item.url)
            ));
        }

        lines.join("\n")
    }

    fn csv_escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}
