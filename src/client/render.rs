//! Text rendering of item cards

use std::fmt::Write;

use crate::model::Item;

const EMPTY_STATE: &str = "No items found\nAdd the first item to your stock!\n";

/// Price with two decimals
pub fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}

/// Render one item as a card
pub fn render_item(item: &Item) -> String {
    let mut card = String::new();
    let _ = writeln!(card, "#{} {}", item.id, item.name);
    let _ = writeln!(card, "  Quantity: {}", item.quantity);
    let _ = writeln!(card, "  Price:    {}", format_price(item.price));
    let _ = writeln!(card, "  Total:    {}", format_price(item.total_value()));
    card
}

/// Render a list of cards, or the empty state when there are none
pub fn render_items<'a>(items: impl IntoIterator<Item = &'a Item>) -> String {
    let cards: Vec<String> = items.into_iter().map(render_item).collect();
    if cards.is_empty() {
        return EMPTY_STATE.to_string();
    }
    cards.join("\n")
}
