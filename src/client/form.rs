//! Form-to-record mapping.

use crate::models::WineFields;

/// Raw values from the add-wine form, exactly as the inputs hold them.
#[derive(Debug, Clone, Default)]
pub struct WineForm {
    pub name: String,
    pub wine_type: String,
    pub country: String,
    pub region: String,
    pub grape: String,
    pub vintage: String,
    pub alcohol: String,
    pub price: String,
    pub notes: String,
}

impl WineForm {
    /// Assemble the field mapping for a create request.
    ///
    /// Name and Type are always included. Every optional field is included
    /// only when its input was non-empty after trimming; a rating of 0 means
    /// "unset" and is excluded. Numeric inputs that fail to parse count as
    /// absent.
    pub fn into_fields(self, rating: u8) -> WineFields {
        WineFields {
            name: self.name.trim().to_string(),
            wine_type: self.wine_type.trim().to_string(),
            country: non_empty(self.country),
            region: non_empty(self.region),
            grape: non_empty(self.grape),
            vintage: parse_non_empty(&self.vintage),
            alcohol: parse_non_empty(&self.alcohol),
            price: parse_non_empty(&self.price),
            rating: (rating > 0).then_some(rating),
            notes: non_empty(self.notes),
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_non_empty<T: std::str::FromStr>(value: &str) -> Option<T> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        trimmed.parse().ok()
    }
}
