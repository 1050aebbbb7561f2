//! Catalog state and pure selectors.

use crate::core::notify::NotificationRequest;
use std::collections::BTreeSet;
use studyhall_api_models::MaterialSummary;

/// Notification shown after resetting the filters.
pub const FILTERS_CLEARED: &str = "Filters cleared";

/// Catalog layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// One row per material.
    #[default]
    List,
    /// Card grid.
    Grid,
}

/// Sort options in the order the select lists them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    /// Name ascending.
    NameAsc,
    /// Name descending.
    NameDesc,
    /// Category, then name.
    Category,
}

impl SortOrder {
    /// All options; index 0 is the default.
    pub const ALL: [Self; 3] = [Self::NameAsc, Self::NameDesc, Self::Category];

    /// Option label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NameAsc => "Name (A-Z)",
            Self::NameDesc => "Name (Z-A)",
            Self::Category => "Category",
        }
    }
}

/// One category checkbox.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryFilter {
    /// Category label.
    pub name: String,
    /// Whether materials in this category are shown.
    pub checked: bool,
}

/// Catalog slice of the app store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogState {
    /// Every material on the page.
    pub materials: Vec<MaterialSummary>,
    /// Active layout.
    pub view: ViewMode,
    /// Category checkboxes, sorted by name.
    pub categories: Vec<CategoryFilter>,
    sort_index: usize,
}

impl CatalogState {
    /// Build the catalog with every category checked.
    #[must_use]
    pub fn from_materials(materials: Vec<MaterialSummary>) -> Self {
        let names: BTreeSet<String> = materials
            .iter()
            .filter_map(|material| material.category.clone())
            .collect();
        Self {
            materials,
            view: ViewMode::List,
            categories: names
                .into_iter()
                .map(|name| CategoryFilter {
                    name,
                    checked: true,
                })
                .collect(),
            sort_index: 0,
        }
    }

    /// Switch layout.
    pub const fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    /// Flip one category checkbox.
    pub fn toggle_category(&mut self, name: &str) {
        if let Some(filter) = self.categories.iter_mut().find(|f| f.name == name) {
            filter.checked = !filter.checked;
        }
    }

    /// Select a sort option; out-of-range indexes are ignored.
    pub const fn set_sort(&mut self, index: usize) {
        if index < SortOrder::ALL.len() {
            self.sort_index = index;
        }
    }

    /// Re-check every category and reset the sort select.
    pub fn clear_filters(&mut self) -> NotificationRequest {
        for filter in &mut self.categories {
            filter.checked = true;
        }
        self.sort_index = 0;
        NotificationRequest::info(FILTERS_CLEARED)
    }

    /// Selected index into [`SortOrder::ALL`].
    #[must_use]
    pub const fn sort_index(&self) -> usize {
        self.sort_index
    }

    /// Active sort order.
    #[must_use]
    pub fn sort_order(&self) -> SortOrder {
        SortOrder::ALL
            .get(self.sort_index)
            .copied()
            .unwrap_or(SortOrder::NameAsc)
    }
}

/// Materials passing the category filters, in the selected order.
///
/// Materials without a category are always shown.
#[must_use]
pub fn select_visible(state: &CatalogState) -> Vec<MaterialSummary> {
    let hidden: BTreeSet<&str> = state
        .categories
        .iter()
        .filter(|filter| !filter.checked)
        .map(|filter| filter.name.as_str())
        .collect();
    let mut rows: Vec<MaterialSummary> = state
        .materials
        .iter()
        .filter(|material| {
            material
                .category
                .as_deref()
                .is_none_or(|category| !hidden.contains(category))
        })
        .cloned()
        .collect();
    match state.sort_order() {
        SortOrder::NameAsc => rows.sort_by_key(|m| m.material_name.to_lowercase()),
        SortOrder::NameDesc => {
            rows.sort_by_key(|m| m.material_name.to_lowercase());
            rows.reverse();
        }
        SortOrder::Category => rows.sort_by(|a, b| {
            a.category
                .cmp(&b.category)
                .then_with(|| a.material_name.to_lowercase().cmp(&b.material_name.to_lowercase()))
        }),
    }
    rows
}

/// Parse the material list the server embeds in the page.
///
/// # Errors
/// Returns the JSON error when the block is malformed.
pub fn parse_embedded_materials(raw: &str) -> Result<Vec<MaterialSummary>, serde_json::Error> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use studyhall_api_models::MaterialId;

    fn material(id: u64, name: &str, category: Option<&str>) -> MaterialSummary {
        MaterialSummary {
            material_id: MaterialId::from(id),
            material_name: name.to_string(),
            material_link: format!("/m/{id}"),
            category: category.map(str::to_string),
            subject: None,
        }
    }

    fn sample() -> CatalogState {
        CatalogState::from_materials(vec![
            material(1, "calculus", Some("Maths")),
            material(2, "Biology Basics", Some("Science")),
            material(3, "Algebra", Some("Maths")),
            material(4, "Handbook", None),
        ])
    }

    #[test]
    fn categories_are_distinct_and_checked() {
        let state = sample();
        let names: Vec<&str> = state.categories.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["Maths", "Science"]);
        assert!(state.categories.iter().all(|f| f.checked));
    }

    #[test]
    fn unchecked_category_hides_its_rows_only() {
        let mut state = sample();
        state.toggle_category("Maths");
        let names: Vec<String> = select_visible(&state)
            .into_iter()
            .map(|m| m.material_name)
            .collect();
        assert_eq!(names, ["Biology Basics", "Handbook"]);
    }

    #[test]
    fn sort_orders_apply() {
        let mut state = sample();
        let first = |state: &CatalogState| select_visible(state)[0].material_name.clone();
        assert_eq!(first(&state), "Algebra");
        state.set_sort(1);
        assert_eq!(first(&state), "Handbook");
        state.set_sort(2);
        assert_eq!(first(&state), "Handbook");
        state.set_sort(9);
        assert_eq!(state.sort_index(), 2);
        assert_eq!(state.sort_order(), SortOrder::Category);
    }

    #[test]
    fn clear_filters_resets_everything() {
        let mut state = sample();
        state.toggle_category("Science");
        state.set_sort(2);
        state.set_view(ViewMode::Grid);
        let note = state.clear_filters();
        assert_eq!(note.message, FILTERS_CLEARED);
        assert!(state.categories.iter().all(|f| f.checked));
        assert_eq!(state.sort_index(), 0);
        assert_eq!(state.view, ViewMode::Grid);
        assert_eq!(select_visible(&state).len(), 4);
    }

    #[test]
    fn embedded_block_parses_or_reports() {
        assert!(parse_embedded_materials("  ").expect("blank").is_empty());
        let parsed = parse_embedded_materials(
            r#"[{"material_id":"BWU/MATERIAL/001","material_name":"Physics","material_link":"/m/p"}]"#,
        )
        .expect("valid block");
        assert_eq!(parsed[0].material_id.as_str(), "BWU/MATERIAL/001");
        assert!(parse_embedded_materials("{oops").is_err());
    }
}
