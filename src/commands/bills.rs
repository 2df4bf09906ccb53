use crate::catalog::{CatalogAction, CatalogOrderStore};
use crate::commands::orders::order_total;
use crate::error::Result;
use crate::ids::{next_id, now_timestamp};
use crate::models::{Bill, BillStatus, CreateBill, EntityRef};
use crate::money::{bill_total, percent_of};
use crate::reducer::contains_id;
use serde::Serialize;

/// Amounts printed on a receipt.
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BillBreakdown {
    pub subtotal: f64,
    pub tax_amount: f64,
    pub discount_amount: f64,
    pub total: f64,
}

impl CreateBill {
    pub fn recalculate_total(&mut self) {
        self.total_amount = bill_total(self.subtotal, self.tax, self.discount);
    }
}

impl From<&Bill> for CreateBill {
    fn from(bill: &Bill) -> Self {
        CreateBill {
            order_id: bill.order_id.clone(),
            customer_name: bill.customer_name.clone(),
            items: bill.items.clone(),
            subtotal: bill.subtotal,
            tax: bill.tax,
            discount: bill.discount,
            total_amount: bill.total_amount,
            payment_method: bill.payment_method,
            notes: bill.notes.clone(),
        }
    }
}

impl Bill {
    pub fn with_draft(&self, draft: CreateBill) -> Bill {
        Bill {
            order_id: draft.order_id,
            customer_name: draft.customer_name,
            items: draft.items,
            subtotal: draft.subtotal,
            tax: draft.tax,
            discount: draft.discount,
            total_amount: draft.total_amount,
            payment_method: draft.payment_method,
            notes: draft.notes,
            ..self.clone()
        }
    }
}

impl CatalogOrderStore {
    /// Records a bill as given; the caller owns `total_amount`.
    pub fn add_bill(&mut self, bill: CreateBill) -> Result<Bill> {
        let bill = Bill {
            id: next_id(),
            order_id: bill.order_id,
            customer_name: bill.customer_name,
            items: bill.items,
            subtotal: bill.subtotal,
            tax: bill.tax,
            discount: bill.discount,
            total_amount: bill.total_amount,
            payment_method: bill.payment_method,
            notes: bill.notes,
            status: BillStatus::Pending,
            created_at: now_timestamp(),
        };

        let bill = bill.normalized();
        self.dispatch(CatalogAction::AddBill(bill.clone()))?;
        tracing::info!(bill_id = bill.id, total = bill.total_amount, "Bill created");

        Ok(bill)
    }

    pub fn update_bill(&mut self, bill: Bill) -> Result<()> {
        if !contains_id(self.bills(), bill.id) {
            tracing::debug!(bill_id = bill.id, "Update for unknown bill ignored");
        }
        self.dispatch(CatalogAction::UpdateBill(bill))
    }

    pub fn delete_bill(&mut self, id: i64) -> Result<()> {
        if !contains_id(self.bills(), id) {
            tracing::debug!(bill_id = id, "Delete for unknown bill ignored");
        }
        self.dispatch(CatalogAction::DeleteBill(id))
    }

    pub fn find_bill(&self, id: i64) -> Option<&Bill> {
        self.bills().iter().find(|b| b.id == id)
    }

    pub fn set_bill_status(&mut self, id: i64, status: BillStatus) -> Result<()> {
        match self.find_bill(id).cloned() {
            Some(bill) => self.update_bill(Bill { status, ..bill }),
            None => Ok(()),
        }
    }

    /// A bill draft prefilled from an order: customer, items and the order
    /// total as subtotal. `None` if the order does not exist.
    pub fn bill_draft_from_order(&self, order_id: i64) -> Option<CreateBill> {
        let order = self.find_order(order_id)?;

        let mut draft = CreateBill {
            order_id: EntityRef::Text(order.id.to_string()),
            customer_name: order.customer_name.clone(),
            items: order.items.clone(),
            subtotal: order.total_amount,
            ..CreateBill::default()
        };
        draft.recalculate_total();

        Some(draft)
    }

    /// Receipt amounts for `bill`. A zero subtotal falls back to pricing the
    /// referenced order's items at today's menu prices.
    pub fn bill_breakdown(&self, bill: &Bill) -> BillBreakdown {
        let subtotal = if bill.subtotal != 0.0 {
            bill.subtotal
        } else {
            bill.order_id
                .as_id()
                .and_then(|id| self.find_order(id))
                .map(|order| order_total(&order.items, self.menu_items()))
                .unwrap_or(0.0)
        };

        let tax_amount = percent_of(subtotal, bill.tax);
        let discount_amount = percent_of(subtotal, bill.discount);

        BillBreakdown {
            subtotal,
            tax_amount,
            discount_amount,
            total: subtotal + tax_amount - discount_amount,
        }
    }
}
