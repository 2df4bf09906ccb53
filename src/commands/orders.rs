use crate::catalog::{CatalogAction, CatalogOrderStore};
use crate::error::Result;
use crate::ids::{next_id, now_timestamp};
use crate::models::{CreateOrder, EntityRef, MenuItem, Order, OrderItem, OrderStatus};
use crate::reducer::contains_id;

/// Sum of current menu price times quantity. Items whose menu entry no
/// longer exists contribute nothing.
pub fn order_total(items: &[OrderItem], menu: &[MenuItem]) -> f64 {
    items
        .iter()
        .map(|item| {
            menu_price(menu, &item.menu_item_id)
                .map(|price| price * f64::from(item.quantity))
                .unwrap_or(0.0)
        })
        .sum()
}

fn menu_price(menu: &[MenuItem], menu_item_id: &EntityRef) -> Option<f64> {
    let id = menu_item_id.as_id()?;
    menu.iter().find(|m| m.id == id).map(|m| m.price)
}

impl CreateOrder {
    /// Adds one of `item`, bumping the quantity if it is already on the order.
    pub fn add_menu_item(&mut self, item: &MenuItem, menu: &[MenuItem]) {
        match self
            .items
            .iter_mut()
            .find(|existing| existing.menu_item_id.refers_to(item.id))
        {
            Some(existing) => existing.quantity += 1,
            None => self.items.push(OrderItem {
                menu_item_id: EntityRef::Text(item.id.to_string()),
                quantity: 1,
                price: item.price,
            }),
        }
        self.recalculate_total(menu);
    }

    pub fn set_item_quantity(&mut self, index: usize, quantity: u32, menu: &[MenuItem]) {
        if let Some(item) = self.items.get_mut(index) {
            item.quantity = quantity.max(1);
            self.recalculate_total(menu);
        }
    }

    pub fn remove_item(&mut self, index: usize, menu: &[MenuItem]) {
        if index < self.items.len() {
            self.items.remove(index);
            self.recalculate_total(menu);
        }
    }

    pub fn recalculate_total(&mut self, menu: &[MenuItem]) {
        self.total_amount = order_total(&self.items, menu);
    }
}

impl From<&Order> for CreateOrder {
    fn from(order: &Order) -> Self {
        CreateOrder {
            customer_name: order.customer_name.clone(),
            customer_phone: order.customer_phone.clone(),
            items: order.items.clone(),
            total_amount: order.total_amount,
            notes: order.notes.clone(),
        }
    }
}

impl Order {
    /// The order with its editable fields taken from `draft`. Id, status and
    /// creation time are kept.
    pub fn with_draft(&self, draft: CreateOrder) -> Order {
        Order {
            customer_name: draft.customer_name,
            customer_phone: draft.customer_phone,
            items: draft.items,
            total_amount: draft.total_amount,
            notes: draft.notes,
            ..self.clone()
        }
    }
}

impl CatalogOrderStore {
    pub fn add_order(&mut self, order: CreateOrder) -> Result<Order> {
        let order = Order {
            id: next_id(),
            customer_name: order.customer_name,
            customer_phone: order.customer_phone,
            items: order.items,
            total_amount: order.total_amount,
            notes: order.notes,
            status: OrderStatus::Pending,
            created_at: now_timestamp(),
        };

        let order = order.normalized();
        self.dispatch(CatalogAction::AddOrder(order.clone()))?;
        tracing::info!(order_id = order.id, total = order.total_amount, "Order created");

        Ok(order)
    }

    /// Replaces the order with the same id. Unknown ids are ignored.
    pub fn update_order(&mut self, order: Order) -> Result<()> {
        if !contains_id(self.orders(), order.id) {
            tracing::debug!(order_id = order.id, "Update for unknown order ignored");
        }
        self.dispatch(CatalogAction::UpdateOrder(order))
    }

    pub fn delete_order(&mut self, id: i64) -> Result<()> {
        if !contains_id(self.orders(), id) {
            tracing::debug!(order_id = id, "Delete for unknown order ignored");
        }
        self.dispatch(CatalogAction::DeleteOrder(id))
    }

    pub fn find_order(&self, id: i64) -> Option<&Order> {
        self.orders().iter().find(|o| o.id == id)
    }

    /// Sets any status from any other; there is no transition table.
    pub fn set_order_status(&mut self, id: i64, status: OrderStatus) -> Result<()> {
        match self.find_order(id).cloned() {
            Some(order) => self.update_order(Order { status, ..order }),
            None => Ok(()),
        }
    }

    pub fn order_total(&self, items: &[OrderItem]) -> f64 {
        order_total(items, self.menu_items())
    }

    /// Orders whose customer name (case-insensitive), phone or id contains
    /// `search`, optionally limited to one status.
    pub fn filter_orders(&self, search: &str, status: Option<OrderStatus>) -> Vec<&Order> {
        let needle = search.to_lowercase();
        self.orders()
            .iter()
            .filter(|order| {
                let matches_search = order
                    .customer_name
                    .as_deref()
                    .is_some_and(|name| name.to_lowercase().contains(&needle))
                    || order
                        .customer_phone
                        .as_deref()
                        .is_some_and(|phone| phone.contains(search))
                    || order.id.to_string().contains(search);
                let matches_status = status.map_or(true, |s| order.status == s);
                matches_search && matches_status
            })
            .collect()
    }
}
