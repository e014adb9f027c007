use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;

use crate::model::Card;
use crate::sources::static_table::StaticTableSource;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::Error => style(text).red(),
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

fn rate(multiplier: f64, is_percentage: bool) -> String {
    if is_percentage {
        format!("{multiplier}%")
    } else {
        format!("{multiplier}x")
    }
}

fn category_summary(card: &Card) -> String {
    if card.category_rewards.is_empty() {
        return style_text("flat rate", StyleType::Subtle);
    }
    card.category_rewards
        .iter()
        .map(|r| format!("{} {}", r.category, rate(r.multiplier, r.is_percentage)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render the assembled catalog as a terminal table, with the rotating
/// column showing the current quarter's categories.
pub fn catalog_table(cards: &[Card], source: &StaticTableSource) -> String {
    let mut table = new_styled_table();
    table.set_header(vec![
        header_cell("Card"),
        header_cell("Network"),
        header_cell("Fee"),
        header_cell("Base"),
        header_cell("Category Rewards"),
        header_cell("Rotating (this quarter)"),
    ]);

    for card in cards {
        let rotating = match &card.rotating_categories {
            Some(list) if !list.is_empty() => source.current_categories(&card.id).join(", "),
            _ => style_text("-", StyleType::Subtle),
        };

        table.add_row(vec![
            Cell::new(&card.name),
            Cell::new(format!("{:?}", card.network).to_lowercase()),
            Cell::new(format!("${:.0}", card.annual_fee)).set_alignment(CellAlignment::Right),
            Cell::new(rate(card.base_reward, card.base_is_percentage))
                .set_alignment(CellAlignment::Right),
            Cell::new(category_summary(card)),
            Cell::new(rotating),
        ]);
    }

    format!(
        "{}\n\n{}",
        style_text("Card Catalog", StyleType::Title),
        table
    )
}
