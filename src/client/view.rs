//! Declarative view derivation.
//!
//! [`view`] turns a state snapshot into a render tree. It reads nothing but
//! its argument and performs no mutation, so rendering rules are testable
//! without a DOM; the embedding page just walks the tree.

use crate::models::WineFields;

use super::state::{CatalogState, ListPhase};

pub const LOADING_MESSAGE: &str = "Loading...";
pub const EMPTY_MESSAGE: &str = "No wines in the cellar yet.";
pub const SUBMIT_LABEL: &str = "Add wine";
pub const SUBMIT_BUSY_LABEL: &str = "Saving...";

const CURRENCY_SUFFIX: &str = " KRW";
const UNNAMED: &str = "Unnamed";

/// Top-level render tree for the catalog page.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    /// Number of wines currently visible, shown next to the heading
    pub count: usize,
    pub list: ListView,
    pub form: FormView,
}

/// Rendered state of the add-wine form controls.
#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    /// Star affordances, active up to the selected rating
    pub stars_active: [bool; 5],
    pub submit_disabled: bool,
    pub submit_label: &'static str,
}

/// The list region in one of its four shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Loading,
    Failed { message: String },
    Empty,
    Cards(Vec<WineCard>),
}

/// One rendered wine card. An absent optional field produces no markup.
#[derive(Debug, Clone, PartialEq)]
pub struct WineCard {
    pub id: String,
    pub badge: String,
    pub title: String,
    pub info: Vec<String>,
    pub notes: Option<String>,
    pub stars: Option<String>,
    pub price: Option<String>,
}

/// Derive the render tree from a state snapshot.
pub fn view(state: &CatalogState) -> CatalogView {
    let list = match &state.list {
        ListPhase::Loading => ListView::Loading,
        ListPhase::Failed(message) => ListView::Failed {
            message: message.clone(),
        },
        ListPhase::Ready => {
            let cards: Vec<WineCard> = state
                .wines
                .iter()
                .filter(|record| state.filter.matches(record))
                .map(|record| wine_card(&record.id, &record.fields))
                .collect();

            if cards.is_empty() {
                ListView::Empty
            } else {
                ListView::Cards(cards)
            }
        }
    };

    let count = match &list {
        ListView::Cards(cards) => cards.len(),
        _ => 0,
    };

    CatalogView {
        count,
        list,
        form: form_view(state),
    }
}

fn form_view(state: &CatalogState) -> FormView {
    let mut stars_active = [false; 5];
    for (i, active) in stars_active.iter_mut().enumerate() {
        *active = (i as u8) < state.rating;
    }

    FormView {
        stars_active,
        submit_disabled: state.submitting,
        submit_label: if state.submitting {
            SUBMIT_BUSY_LABEL
        } else {
            SUBMIT_LABEL
        },
    }
}

fn wine_card(id: &str, f: &WineFields) -> WineCard {
    let mut info = Vec::new();
    if let Some(country) = &f.country {
        info.push(country.clone());
    }
    if let Some(region) = &f.region {
        info.push(region.clone());
    }
    if let Some(grape) = &f.grape {
        info.push(grape.clone());
    }
    if let Some(vintage) = f.vintage {
        info.push(vintage.to_string());
    }
    if let Some(alcohol) = f.alcohol {
        info.push(format!("{}%", alcohol));
    }

    WineCard {
        id: id.to_string(),
        badge: if f.wine_type.is_empty() {
            "-".to_string()
        } else {
            f.wine_type.clone()
        },
        title: if f.name.is_empty() {
            UNNAMED.to_string()
        } else {
            f.name.clone()
        },
        info,
        notes: f.notes.as_ref().map(|n| format!("\"{}\"", n)),
        stars: star_display(f.rating),
        price: f.price.map(format_price),
    }
}

/// Star glyph row for a rating: filled stars up to the rating, empty up to
/// five. No rating yields no markup at all.
pub fn star_display(rating: Option<u8>) -> Option<String> {
    match rating {
        Some(r) if r > 0 => {
            let filled = r.min(5) as usize;
            Some("★".repeat(filled) + &"☆".repeat(5 - filled))
        }
        _ => None,
    }
}

/// Price with grouped thousands and the currency suffix.
pub fn format_price(price: i64) -> String {
    format!("{}{}", group_thousands(price), CURRENCY_SUFFIX)
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
