//! Wine record models matching the upstream record store's wire shape.

use serde::{Deserialize, Serialize};

/// Typed field mapping for a wine record.
///
/// Field names match the upstream table columns. Optional fields serialize
/// only when present, so a create request never carries empty or null values.
/// A rating is stored only when the user actually picked one; zero stars is
/// represented by the absence of the field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WineFields {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Type", default)]
    pub wine_type: String,
    #[serde(rename = "Country", default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(rename = "Region", default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(rename = "Grape", default, skip_serializing_if = "Option::is_none")]
    pub grape: Option<String>,
    #[serde(rename = "Vintage", default, skip_serializing_if = "Option::is_none")]
    pub vintage: Option<i32>,
    #[serde(rename = "Alcohol", default, skip_serializing_if = "Option::is_none")]
    pub alcohol: Option<f64>,
    #[serde(rename = "Price", default, skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(rename = "Rating", default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(rename = "Notes", default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A wine record as stored upstream. The identifier is assigned by the
/// upstream store; this crate never generates one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WineRecord {
    pub id: String,
    pub fields: WineFields,
    #[serde(
        rename = "createdTime",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_time: Option<String>,
}

/// List response shape: `{"records": [...]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordList {
    #[serde(default)]
    pub records: Vec<WineRecord>,
}

/// A record payload in a create request; no identifier yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRecord {
    pub fields: WineFields,
}

/// Create request shape: `{"records": [{"fields": {...}}]}`.
///
/// This is the single shared contract between the client controller, which
/// assembles it, and the proxy, which forwards it upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRecords {
    pub records: Vec<NewRecord>,
}

impl CreateRecords {
    /// Wrap a single field mapping in the wire shape.
    pub fn single(fields: WineFields) -> Self {
        Self {
            records: vec![NewRecord { fields }],
        }
    }
}
