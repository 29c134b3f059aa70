//! Text rendering of the browsing UI.

use crate::client::state::{AppState, Tab};
use crate::domain::listing::ListingItem;

pub const RATING_PLACEHOLDER: &str = "N/A";
pub const DESCRIPTION_PLACEHOLDER: &str = "No description available.";

/// One decimal place for a usable rating, `N/A` otherwise.
///
/// Ties round away from zero (`8.25` shows as `8.3`). A zero score counts as
/// "no rating", matching how the catalog reports unscored titles.
pub fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(value) if value.is_finite() && value != 0.0 => {
            format!("{:.1}", (value * 10.0).round() / 10.0)
        }
        _ => RATING_PLACEHOLDER.to_string(),
    }
}

/// `"from-your-watchlist"` becomes `"From Your Watchlist"`.
pub fn tab_label(key: &str) -> String {
    key.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn description_or_placeholder(item: &ListingItem) -> &str {
    if item.description.is_empty() {
        DESCRIPTION_PLACEHOLDER
    } else {
        &item.description
    }
}

/// Tab bar with the active tab in brackets.
pub fn render_tabs(active: Tab) -> String {
    Tab::SHOWN
        .iter()
        .map(|tab| {
            let label = tab_label(tab.key());
            if *tab == active {
                format!("[{label}]")
            } else {
                label
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn render_card(item: &ListingItem) -> String {
    let mut lines = vec![
        format!("★ {}  {}", format_rating(item.rating), item.title),
        format!("    {}", item.image),
    ];
    if !item.trailer_url.is_empty() {
        lines.push(format!("    ▶ Trailer: {}", item.trailer_url));
    }
    lines.push(String::new());
    lines.join("\n")
}

pub fn render_grid(items: &[ListingItem]) -> String {
    items.iter().map(render_card).collect()
}

/// Detail view of the selected item, or `None` when the modal is closed.
pub fn render_modal(state: &AppState) -> Option<String> {
    if !state.is_modal_open() {
        return None;
    }
    let item = state.selected()?;

    let checkbox = if state.is_watched(item.id) { "x" } else { " " };
    let mut lines = vec![
        item.title.clone(),
        format!("Rating: {}", format_rating(item.rating)),
        description_or_placeholder(item).to_string(),
        format!("[{checkbox}] Watched"),
        "Comments".to_string(),
    ];
    for comment in state.comments(item.id) {
        lines.push(format!("  {}", comment.text));
        lines.extend(
            comment
                .replies
                .iter()
                .map(|reply| format!("    ↳ {}", reply.text)),
        );
    }
    lines.push(String::new());
    Some(lines.join("\n"))
}
