use crate::sort::{SortDirection, SortField, SortState};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PresentationConfig {
    /// Fall back to the credential prompt on every failure, not only on 401
    #[serde(default)]
    pub login_on_any_failure: bool,

    #[serde(default = "default_sort_field")]
    pub sort_field: SortField,

    #[serde(default = "default_sort_direction")]
    pub sort_direction: SortDirection,
}

impl PresentationConfig {
    pub fn initial_sort(&self) -> SortState {
        SortState::new(self.sort_field, self.sort_direction)
    }
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            login_on_any_failure: false,
            sort_field: default_sort_field(),
            sort_direction: default_sort_direction(),
        }
    }
}

fn default_sort_field() -> SortField {
    SortField::UpdatedAt
}

fn default_sort_direction() -> SortDirection {
    SortDirection::Desc
}
