use crate::catalog::{CatalogAction, CatalogOrderStore};
use crate::error::Result;
use crate::ids::next_id;
use crate::models::{CreateMenuItem, EntityRef, MenuItem};
use crate::reducer::contains_id;

pub const UNKNOWN_ITEM: &str = "Unknown Item";

impl MenuItem {
    pub fn with_draft(&self, draft: CreateMenuItem) -> MenuItem {
        MenuItem {
            id: self.id,
            name: draft.name,
            category: draft.category,
            price: draft.price,
            description: draft.description,
            available: draft.available,
            image: draft.image,
        }
    }
}

impl CatalogOrderStore {
    /// Adds a menu item with a fresh id. Availability is taken as given.
    pub fn add_menu_item(&mut self, item: CreateMenuItem) -> Result<MenuItem> {
        let item = MenuItem {
            id: next_id(),
            name: item.name,
            category: item.category,
            price: item.price,
            description: item.description,
            available: item.available,
            image: item.image,
        };

        let item = item.normalized();
        self.dispatch(CatalogAction::AddMenuItem(item.clone()))?;
        tracing::info!(menu_item_id = item.id, name = %item.name, "Menu item created");

        Ok(item)
    }

    pub fn update_menu_item(&mut self, item: MenuItem) -> Result<()> {
        if !contains_id(self.menu_items(), item.id) {
            tracing::debug!(menu_item_id = item.id, "Update for unknown menu item ignored");
        }
        self.dispatch(CatalogAction::UpdateMenuItem(item))
    }

    /// Removes the item. Orders and bills that reference it keep the dangling id.
    pub fn delete_menu_item(&mut self, id: i64) -> Result<()> {
        if !contains_id(self.menu_items(), id) {
            tracing::debug!(menu_item_id = id, "Delete for unknown menu item ignored");
        }
        self.dispatch(CatalogAction::DeleteMenuItem(id))
    }

    pub fn toggle_menu_item_availability(&mut self, id: i64) -> Result<()> {
        match self.find_menu_item(&EntityRef::Id(id)).cloned() {
            Some(item) => self.update_menu_item(MenuItem {
                available: !item.available,
                ..item
            }),
            None => Ok(()),
        }
    }

    pub fn find_menu_item(&self, reference: &EntityRef) -> Option<&MenuItem> {
        let id = reference.as_id()?;
        self.menu_items().iter().find(|m| m.id == id)
    }

    pub fn menu_item_name(&self, reference: &EntityRef) -> &str {
        self.find_menu_item(reference)
            .map(|m| m.name.as_str())
            .unwrap_or(UNKNOWN_ITEM)
    }

    pub fn menu_item_price(&self, reference: &EntityRef) -> f64 {
        self.find_menu_item(reference).map(|m| m.price).unwrap_or(0.0)
    }

    pub fn available_menu_items(&self) -> Vec<&MenuItem> {
        self.menu_items().iter().filter(|m| m.available).collect()
    }
}
