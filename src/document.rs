//! Currency-tagged document model.
//!
//! Every node keeps its static ZAR source; the displayed text is derived from
//! it on each render, never from the previously displayed text.

use comfy_table::Cell;

use crate::config::DocumentConfig;
use crate::currency::{self, Currency};
use crate::ui;

/// A node whose display text derives from a static ZAR amount.
#[derive(Debug, Clone)]
pub struct ValueNode {
    pub name: String,
    pub zar: f64,
    pub display: String,
}

impl ValueNode {
    fn new(name: &str, zar: f64) -> Self {
        ValueNode {
            name: name.to_string(),
            zar,
            display: String::new(),
        }
    }

    pub fn render(&mut self, preference: Currency, rate: f64) {
        let amount = match preference {
            Currency::Usd => self.zar * rate,
            Currency::Zar => self.zar,
        };
        self.display = currency::format_currency(amount, preference);
    }
}

/// A pre-formatted label rewritten by symbol substitution, not numeric
/// conversion.
#[derive(Debug, Clone)]
pub struct LabelNode {
    pub source: String,
    pub display: String,
}

impl LabelNode {
    fn new(source: &str) -> Self {
        LabelNode {
            source: source.to_string(),
            display: String::new(),
        }
    }

    pub fn render(&mut self, preference: Currency) {
        self.display = match preference {
            Currency::Usd => usd_label(&self.source),
            Currency::Zar => zar_label(&self.source),
        };
    }
}

/// Replaces a leading "R" token with "$", dropping one space after it.
/// Labels without the prefix pass through unchanged.
fn usd_label(source: &str) -> String {
    match source.strip_prefix('R') {
        Some(rest) => format!("${}", rest.strip_prefix(' ').unwrap_or(rest)),
        None => source.to_string(),
    }
}

/// Ensures a leading "R", stripping any "$" characters first.
fn zar_label(source: &str) -> String {
    if source.starts_with('R') {
        source.to_string()
    } else {
        format!("R{}", source.replace('$', ""))
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    pub name: String,
    pub values: Vec<ValueNode>,
    pub table: Vec<ValueNode>,
    pub labels: Vec<LabelNode>,
}

impl Document {
    pub fn from_config(config: &DocumentConfig) -> Self {
        Document {
            name: config.name.clone(),
            values: config
                .values
                .iter()
                .map(|entry| ValueNode::new(&entry.name, entry.zar))
                .collect(),
            table: config
                .table
                .iter()
                .map(|entry| ValueNode::new(&entry.name, entry.zar))
                .collect(),
            labels: config.labels.iter().map(|s| LabelNode::new(s)).collect(),
        }
    }

    /// Recomputes the display text of every tagged node.
    pub fn render(&mut self, preference: Currency, rate: f64) {
        for value in &mut self.values {
            value.render(preference, rate);
        }
        for row in &mut self.table {
            row.render(preference, rate);
        }
        for label in &mut self.labels {
            label.render(preference);
        }
    }

    pub fn display_as_text(&self) -> String {
        let mut output = format!(
            "Document: {}\n",
            ui::style_text(&self.name, ui::StyleType::Title)
        );

        for value in &self.values {
            output.push_str(&format!("\n{}: {}", value.name, value.display));
        }

        if !self.table.is_empty() {
            let mut table = ui::new_styled_table();
            table.set_header(vec![ui::header_cell("Item"), ui::header_cell("Value")]);
            for row in &self.table {
                table.add_row(vec![Cell::new(&row.name), ui::value_cell(&row.display)]);
            }
            output.push_str(&format!("\n\n{table}"));
        }

        for label in &self.labels {
            output.push_str(&format!("\n{}", label.display));
        }

        output
    }
}
