use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;

use crate::converter::{RateSource, ToggleControl};

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Active,
    Inactive,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::Active => style(text).green().bold(),
        StyleType::Inactive => style(text).dim(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Creates a right-aligned cell for a rendered currency value.
pub fn value_cell(text: &str) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// Renders the toggle bar, highlighting the active control.
pub fn toggle_bar(controls: &[ToggleControl]) -> String {
    controls
        .iter()
        .map(|control| {
            let text = format!("[{}]", control.label);
            if control.active {
                style_text(&text, StyleType::Active)
            } else {
                style_text(&text, StyleType::Inactive)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders the exchange-rate line. Fallback rates are de-emphasized.
pub fn rate_line(rate: f64, source: RateSource) -> String {
    match source {
        RateSource::Fallback => style_text(
            &format!("(Fallback rate: 1 ZAR \u{2248} ${rate:.4})"),
            StyleType::Subtle,
        ),
        RateSource::Live | RateSource::Default => format!("1 ZAR = ${rate:.4}"),
    }
}
