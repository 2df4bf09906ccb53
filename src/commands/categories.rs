use crate::catalog::CatalogOrderStore;
use crate::models::MenuItem;
use serde::Serialize;

/// Categories offered when creating a menu item. Stored items may carry any label.
pub const MENU_CATEGORIES: [&str; 10] = [
    "Curry Khausay",
    "Pav Bhaji",
    "Idli Sambhar",
    "Sandwich",
    "Fries",
    "Chowmein",
    "Chaat",
    "Dosa",
    "Sweet Corn",
    "Pasta",
];

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CategoryStats {
    pub category: String,
    pub total: usize,
    pub available: usize,
}

impl CategoryStats {
    pub fn unavailable(&self) -> usize {
        self.total - self.available
    }

    pub fn availability_percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.available as f64 / self.total as f64 * 100.0
        }
    }
}

impl CatalogOrderStore {
    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for item in self.menu_items() {
            if !categories.contains(&item.category.as_str()) {
                categories.push(&item.category);
            }
        }
        categories
    }

    pub fn menu_items_in_category(&self, category: &str) -> Vec<&MenuItem> {
        self.menu_items()
            .iter()
            .filter(|m| m.category == category)
            .collect()
    }

    pub fn category_stats(&self) -> Vec<CategoryStats> {
        let mut stats: Vec<CategoryStats> = Vec::new();

        for item in self.menu_items() {
            let index = match stats.iter().position(|s| s.category == item.category) {
                Some(index) => index,
                None => {
                    stats.push(CategoryStats {
                        category: item.category.clone(),
                        total: 0,
                        available: 0,
                    });
                    stats.len() - 1
                }
            };

            stats[index].total += 1;
            if item.available {
                stats[index].available += 1;
            }
        }

        stats
    }
}
