//! Menu, order and bill state.

use crate::error::Result;
use crate::models::{Bill, MenuItem, Order};
use crate::persistence::{PersistenceAdapter, Store};
use crate::reducer::{appended, replaced, without, RawAction, Reducer};
use crate::seed;
use crate::storage::{KeyValueStore, MemoryStorage};
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;

pub const CATALOG_KEY: &str = "restaurantData";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogState {
    pub orders: Vec<Order>,
    pub bills: Vec<Bill>,
    pub menu_items: Vec<MenuItem>,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            orders: Vec::new(),
            bills: Vec::new(),
            menu_items: seed::seed_menu(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPatch {
    pub orders: Option<Vec<Order>>,
    pub bills: Option<Vec<Bill>>,
    pub menu_items: Option<Vec<MenuItem>>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CatalogAction {
    AddOrder(Order),
    UpdateOrder(Order),
    DeleteOrder(i64),
    AddBill(Bill),
    UpdateBill(Bill),
    DeleteBill(i64),
    AddMenuItem(MenuItem),
    UpdateMenuItem(MenuItem),
    DeleteMenuItem(i64),
    LoadData(CatalogPatch),
    /// Any other `type`. Its payload, if present, is discarded.
    Unrecognized,
}

impl<'de> Deserialize<'de> for CatalogAction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawAction::deserialize(deserializer)?;
        let kind = raw.kind.clone();
        let action = match kind.as_str() {
            "ADD_ORDER" => CatalogAction::AddOrder(raw.payload()?),
            "UPDATE_ORDER" => CatalogAction::UpdateOrder(raw.payload()?),
            "DELETE_ORDER" => CatalogAction::DeleteOrder(raw.payload()?),
            "ADD_BILL" => CatalogAction::AddBill(raw.payload()?),
            "UPDATE_BILL" => CatalogAction::UpdateBill(raw.payload()?),
            "DELETE_BILL" => CatalogAction::DeleteBill(raw.payload()?),
            "ADD_MENU_ITEM" => CatalogAction::AddMenuItem(raw.payload()?),
            "UPDATE_MENU_ITEM" => CatalogAction::UpdateMenuItem(raw.payload()?),
            "DELETE_MENU_ITEM" => CatalogAction::DeleteMenuItem(raw.payload()?),
            "LOAD_DATA" => CatalogAction::LoadData(raw.payload()?),
            _ => CatalogAction::Unrecognized,
        };
        Ok(action)
    }
}

pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Patch = CatalogPatch;
    type Action = CatalogAction;

    fn reduce(state: &CatalogState, action: &CatalogAction) -> CatalogState {
        match action {
            CatalogAction::AddOrder(order) => CatalogState {
                orders: appended(&state.orders, &order.normalized()),
                ..state.clone()
            },
            CatalogAction::UpdateOrder(order) => CatalogState {
                orders: replaced(&state.orders, &order.normalized()),
                ..state.clone()
            },
            CatalogAction::DeleteOrder(id) => CatalogState {
                orders: without(&state.orders, *id),
                ..state.clone()
            },
            CatalogAction::AddBill(bill) => CatalogState {
                bills: appended(&state.bills, &bill.normalized()),
                ..state.clone()
            },
            CatalogAction::UpdateBill(bill) => CatalogState {
                bills: replaced(&state.bills, &bill.normalized()),
                ..state.clone()
            },
            CatalogAction::DeleteBill(id) => CatalogState {
                bills: without(&state.bills, *id),
                ..state.clone()
            },
            CatalogAction::AddMenuItem(item) => CatalogState {
                menu_items: appended(&state.menu_items, &item.normalized()),
                ..state.clone()
            },
            CatalogAction::UpdateMenuItem(item) => CatalogState {
                menu_items: replaced(&state.menu_items, &item.normalized()),
                ..state.clone()
            },
            CatalogAction::DeleteMenuItem(id) => CatalogState {
                menu_items: without(&state.menu_items, *id),
                ..state.clone()
            },
            // Shallow merge: keys missing from the patch keep their current value.
            CatalogAction::LoadData(patch) => CatalogState {
                orders: patch.orders.clone().unwrap_or_else(|| state.orders.clone()),
                bills: patch.bills.clone().unwrap_or_else(|| state.bills.clone()),
                menu_items: patch
                    .menu_items
                    .clone()
                    .unwrap_or_else(|| state.menu_items.clone()),
            },
            CatalogAction::Unrecognized => state.clone(),
        }
    }

    fn load_action(patch: CatalogPatch) -> CatalogAction {
        CatalogAction::LoadData(patch)
    }
}

/// Owns menu items, orders and bills, mirroring every change to storage.
///
/// Entity operations live in `commands::{menu, orders, bills, categories, reports}`.
pub struct CatalogOrderStore {
    store: Store<CatalogReducer>,
}

impl CatalogOrderStore {
    pub fn open(storage: Arc<dyn KeyValueStore>, key: &str) -> Result<Self> {
        Self::open_with(CatalogState::default(), storage, key)
    }

    /// Opens with a custom initial state in place of the seed menu.
    pub fn open_with(
        initial: CatalogState,
        storage: Arc<dyn KeyValueStore>,
        key: &str,
    ) -> Result<Self> {
        let store = Store::open(initial, PersistenceAdapter::new(storage, key))?;
        Ok(Self { store })
    }

    pub fn in_memory() -> Result<Self> {
        Self::open(Arc::new(MemoryStorage::new()), CATALOG_KEY)
    }

    pub fn state(&self) -> &CatalogState {
        self.store.state()
    }

    pub fn orders(&self) -> &[Order] {
        &self.state().orders
    }

    pub fn bills(&self) -> &[Bill] {
        &self.state().bills
    }

    pub fn menu_items(&self) -> &[MenuItem] {
        &self.state().menu_items
    }

    pub fn dispatch(&mut self, action: CatalogAction) -> Result<()> {
        self.store.dispatch(action)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        self.store.to_json_pretty()
    }

    /// Drops the persisted document; the next open starts from the seed again.
    pub fn clear_persisted(&self) -> Result<()> {
        self.store.persistence().clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderStatus;

    fn order(id: i64) -> Order {
        Order {
            id,
            customer_name: None,
            customer_phone: None,
            items: Vec::new(),
            total_amount: 0.0,
            notes: String::new(),
            status: OrderStatus::Pending,
            created_at: "2024-01-01T00:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn unrecognized_action_returns_equal_state() {
        let state = CatalogState::default();
        let next = CatalogReducer::reduce(&state, &CatalogAction::Unrecognized);
        assert_eq!(next, state);
    }

    #[test]
    fn unknown_action_type_decodes_as_unrecognized() {
        let action: CatalogAction = serde_json::from_str(r#"{"type":"CLEAR_EVERYTHING"}"#).unwrap();
        assert_eq!(action, CatalogAction::Unrecognized);

        let action: CatalogAction =
            serde_json::from_str(r#"{"type":"DELETE_ORDER","payload":7}"#).unwrap();
        assert_eq!(action, CatalogAction::DeleteOrder(7));
    }

    #[test]
    fn unknown_action_with_payload_is_a_noop() {
        let action: CatalogAction =
            serde_json::from_str(r#"{"type":"RESET","payload":{"x":1}}"#).unwrap();
        assert_eq!(action, CatalogAction::Unrecognized);

        let state = CatalogState::default();
        assert_eq!(CatalogReducer::reduce(&state, &action), state);
    }

    #[test]
    fn known_action_with_bad_payload_is_rejected() {
        let result =
            serde_json::from_str::<CatalogAction>(r#"{"type":"DELETE_ORDER","payload":"seven"}"#);
        assert!(result.is_err());

        let result = serde_json::from_str::<CatalogAction>(r#"{"payload":7}"#);
        assert!(result.is_err());
    }

    #[test]
    fn encoded_actions_decode_to_themselves() {
        for action in [
            CatalogAction::AddOrder(order(3)),
            CatalogAction::DeleteMenuItem(12),
            CatalogAction::Unrecognized,
        ] {
            let json = serde_json::to_string(&action).unwrap();
            assert_eq!(serde_json::from_str::<CatalogAction>(&json).unwrap(), action);
        }
    }

    #[test]
    fn non_finite_amounts_are_stored_as_zero() {
        let state = CatalogState::default();
        let mut broken = order(4);
        broken.total_amount = f64::NAN;

        let next = CatalogReducer::reduce(&state, &CatalogAction::AddOrder(broken));

        assert_eq!(next.orders[0].total_amount, 0.0);
    }

    #[test]
    fn reduce_leaves_input_untouched() {
        let state = CatalogState::default();
        let before = state.clone();

        let next = CatalogReducer::reduce(&state, &CatalogAction::AddOrder(order(1)));

        assert_eq!(state, before);
        assert_eq!(next.orders.len(), 1);
        assert_eq!(next.menu_items, state.menu_items);
    }

    #[test]
    fn load_keeps_seed_for_missing_keys() {
        let state = CatalogState::default();
        let patch: CatalogPatch = serde_json::from_str(r#"{"orders": []}"#).unwrap();
        let patch = CatalogPatch {
            orders: Some(vec![order(5)]),
            ..patch
        };

        let next = CatalogReducer::reduce(&state, &CatalogAction::LoadData(patch));

        assert_eq!(next.orders, vec![order(5)]);
        assert_eq!(next.menu_items.len(), 57);
        assert!(next.bills.is_empty());
    }

    #[test]
    fn load_replaces_present_keys_even_when_empty() {
        let state = CatalogState::default();
        let patch: CatalogPatch = serde_json::from_str(r#"{"menuItems": []}"#).unwrap();

        let next = CatalogReducer::reduce(&state, &CatalogAction::LoadData(patch));

        assert!(next.menu_items.is_empty());
    }
}
