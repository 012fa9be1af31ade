//! Catalog state and the command-driven controller.
//!
//! All user interactions arrive as typed commands consumed by a single
//! handler. The canonical wine list is only ever replaced wholesale by a
//! reload, never partially mutated; search and type filtering are derived
//! views over it.

use crate::models::{CreateRecords, WineRecord};

use super::api::CatalogApi;
use super::form::WineForm;

/// Load status of the canonical list.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListPhase {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// Search keyword and type filter inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    pub keyword: String,
    pub wine_type: String,
}

impl FilterSpec {
    /// Case-insensitive substring match on the name AND exact match on the
    /// type. An empty input matches everything.
    pub fn matches(&self, record: &WineRecord) -> bool {
        let keyword = self.keyword.to_lowercase();
        let match_name =
            keyword.is_empty() || record.fields.name.to_lowercase().contains(&keyword);
        let match_type = self.wine_type.is_empty() || record.fields.wine_type == self.wine_type;
        match_name && match_type
    }
}

/// The whole client-side application state.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    /// Canonical record list, replaced by every reload
    pub wines: Vec<WineRecord>,
    pub list: ListPhase,
    pub filter: FilterSpec,
    /// Hidden rating input driven by the star control
    pub rating: u8,
    /// Submit control disabled with a busy label while true
    pub submitting: bool,
}

/// A user interaction, as dispatched by the embedding UI.
#[derive(Debug, Clone)]
pub enum Command {
    Reload,
    SearchChanged(String),
    TypeFilterChanged(String),
    StarClicked(u8),
    ResetStars,
    FormSubmitted(WineForm),
    DeleteRequested { id: String, confirmed: bool },
}

/// Something the embedder must surface as a blocking alert.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Alert(String),
}

/// Drives the catalog against the proxy API.
pub struct CatalogController {
    api: CatalogApi,
    pub state: CatalogState,
}

impl CatalogController {
    pub fn new(api: CatalogApi) -> Self {
        Self {
            api,
            state: CatalogState::default(),
        }
    }

    /// Consume one command, issuing network calls and mutating state as the
    /// flow requires.
    pub async fn handle(&mut self, command: Command) -> Option<Notice> {
        match command {
            Command::Reload => {
                self.reload().await;
                None
            }
            Command::SearchChanged(keyword) => {
                self.state.filter.keyword = keyword;
                None
            }
            Command::TypeFilterChanged(wine_type) => {
                self.state.filter.wine_type = wine_type;
                None
            }
            Command::StarClicked(value) => {
                self.state.rating = value;
                None
            }
            Command::ResetStars => {
                self.state.rating = 0;
                None
            }
            Command::FormSubmitted(form) => self.submit(form).await,
            Command::DeleteRequested { id, confirmed } => self.delete(&id, confirmed).await,
        }
    }

    /// Replace the canonical list from the proxy. On failure the list stays
    /// empty and the failure message is kept for rendering.
    async fn reload(&mut self) {
        self.state.list = ListPhase::Loading;

        match self.api.list().await {
            Ok(records) => {
                self.state.wines = records;
                self.state.list = ListPhase::Ready;
            }
            Err(err) => {
                self.state.wines.clear();
                self.state.list = ListPhase::Failed(err.to_string());
            }
        }
    }

    async fn submit(&mut self, form: WineForm) -> Option<Notice> {
        self.state.submitting = true;

        let body = CreateRecords::single(form.into_fields(self.state.rating));

        let notice = match self.api.create(&body).await {
            Ok(()) => {
                self.state.rating = 0;
                self.reload().await;
                None
            }
            Err(err) => Some(Notice::Alert(format!("Create failed: {}", err))),
        };

        // Re-enabled on both outcomes.
        self.state.submitting = false;
        notice
    }

    async fn delete(&mut self, id: &str, confirmed: bool) -> Option<Notice> {
        // No confirmation, no network call.
        if !confirmed {
            return None;
        }

        match self.api.delete(id).await {
            Ok(()) => {
                self.reload().await;
                None
            }
            Err(err) => Some(Notice::Alert(format!("Delete failed: {}", err))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WineFields;

    fn record(id: &str, name: &str, wine_type: &str) -> WineRecord {
        WineRecord {
            id: id.to_string(),
            fields: WineFields {
                name: name.to_string(),
                wine_type: wine_type.to_string(),
                ..Default::default()
            },
            created_time: None,
        }
    }

    fn sample() -> Vec<WineRecord> {
        vec![
            record("r1", "Malbec Reserva", "Red"),
            record("r2", "Pinot Grigio", "White"),
            record("r3", "Malbec Rosé", "Rose"),
        ]
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let filter = FilterSpec::default();
        assert!(sample().iter().all(|r| filter.matches(r)));
    }

    #[test]
    fn test_keyword_is_case_insensitive_substring() {
        let filter = FilterSpec {
            keyword: "malbec".to_string(),
            wine_type: String::new(),
        };
        let matched: Vec<_> = sample().into_iter().filter(|r| filter.matches(r)).collect();
        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn test_type_filter_is_exact() {
        let filter = FilterSpec {
            keyword: String::new(),
            wine_type: "Red".to_string(),
        };
        let matched: Vec<_> = sample().into_iter().filter(|r| filter.matches(r)).collect();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "r1");
    }

    #[test]
    fn test_combined_filter_is_intersection() {
        let wines = sample();

        let keyword_only = FilterSpec {
            keyword: "malbec".to_string(),
            wine_type: String::new(),
        };
        let type_only = FilterSpec {
            keyword: String::new(),
            wine_type: "Rose".to_string(),
        };
        let combined = FilterSpec {
            keyword: "malbec".to_string(),
            wine_type: "Rose".to_string(),
        };

        let expected: Vec<_> = wines
            .iter()
            .filter(|r| keyword_only.matches(r) && type_only.matches(r))
            .map(|r| r.id.clone())
            .collect();
        let actual: Vec<_> = wines
            .iter()
            .filter(|r| combined.matches(r))
            .map(|r| r.id.clone())
            .collect();

        assert_eq!(actual, expected);
        assert_eq!(actual, vec!["r3".to_string()]);
    }

    #[test]
    fn test_filter_does_not_touch_the_list() {
        let wines = sample();
        let filter = FilterSpec {
            keyword: "nothing-matches-this".to_string(),
            wine_type: String::new(),
        };

        let visible: Vec<_> = wines.iter().filter(|r| filter.matches(r)).collect();
        assert!(visible.is_empty());
        assert_eq!(wines.len(), 3);
    }
}
