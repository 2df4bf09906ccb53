use crate::money::finite_or_zero;
use serde::{Deserialize, Deserializer, Serialize};

/// Reads a JSON `null` as zero. Forms that were cleared mid-edit leave
/// `null` behind for totals and quantities.
fn null_as_zero<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reference to another entity by identifier.
///
/// Forms hand references over either as numbers or as the string value of a
/// select box, so both shapes are accepted and written back unchanged.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum EntityRef {
    Id(i64),
    Text(String),
}

impl EntityRef {
    /// Resolves the reference to a numeric id. Text is read like a form field:
    /// leading whitespace, optional sign, then as many digits as are present.
    pub fn as_id(&self) -> Option<i64> {
        match self {
            EntityRef::Id(id) => Some(*id),
            EntityRef::Text(text) => {
                let text = text.trim_start();
                let (sign, rest) = match text.strip_prefix('-') {
                    Some(rest) => (-1, rest),
                    None => (1, text.strip_prefix('+').unwrap_or(text)),
                };
                let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
                digits.parse::<i64>().ok().map(|n| sign * n)
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, EntityRef::Text(text) if text.is_empty())
    }

    pub fn refers_to(&self, id: i64) -> bool {
        self.as_id() == Some(id)
    }
}

impl Default for EntityRef {
    fn default() -> Self {
        EntityRef::Text(String::new())
    }
}

impl From<i64> for EntityRef {
    fn from(id: i64) -> Self {
        EntityRef::Id(id)
    }
}

impl From<&str> for EntityRef {
    fn from(text: &str) -> Self {
        EntityRef::Text(text.to_string())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub category: String,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub price: f64,
    #[serde(default)]
    pub description: String,
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateMenuItem {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub description: String,
    pub available: bool,
    pub image: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Ready,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub menu_item_id: EntityRef,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub quantity: u32,
    /// Menu price at the time the item was added.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub price: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub total_amount: f64,
    #[serde(default)]
    pub notes: String,
    pub status: OrderStatus,
    pub created_at: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrder {
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    pub notes: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    #[default]
    Pending,
    Paid,
    Cancelled,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
    Mobile,
    Online,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: i64,
    #[serde(default)]
    pub order_id: EntityRef,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub subtotal: f64,
    /// Percentage of the subtotal.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub tax: f64,
    /// Percentage of the subtotal.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub discount: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub total_amount: f64,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub notes: String,
    pub status: BillStatus,
    pub created_at: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateBill {
    pub order_id: EntityRef,
    pub customer_name: Option<String>,
    pub items: Vec<OrderItem>,
    pub subtotal: f64,
    pub tax: f64,
    pub discount: f64,
    pub total_amount: f64,
    pub payment_method: PaymentMethod,
    pub notes: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    #[default]
    Active,
    Inactive,
    Terminated,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// Monthly salary.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub salary: f64,
    #[serde(default)]
    pub hire_date: String,
    #[serde(default)]
    pub status: EmployeeStatus,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployee {
    pub name: String,
    pub position: String,
    pub email: String,
    pub phone: String,
    pub salary: f64,
    pub hire_date: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalaryPayment {
    pub id: i64,
    pub employee_id: EntityRef,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub amount: f64,
    pub payment_date: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateSalaryPayment {
    pub employee_id: EntityRef,
    pub amount: f64,
    pub notes: String,
    /// Edits may move the payment date; new payments are always dated now.
    pub payment_date: Option<String>,
}

// Copies with every non-finite amount replaced by zero, so a stored snapshot
// always parses back.

impl MenuItem {
    pub fn normalized(&self) -> Self {
        MenuItem {
            price: finite_or_zero(self.price),
            ..self.clone()
        }
    }
}

impl OrderItem {
    pub fn normalized(&self) -> Self {
        OrderItem {
            price: finite_or_zero(self.price),
            ..self.clone()
        }
    }
}

fn normalized_items(items: &[OrderItem]) -> Vec<OrderItem> {
    items.iter().map(OrderItem::normalized).collect()
}

impl Order {
    pub fn normalized(&self) -> Self {
        Order {
            items: normalized_items(&self.items),
            total_amount: finite_or_zero(self.total_amount),
            ..self.clone()
        }
    }
}

impl Bill {
    pub fn normalized(&self) -> Self {
        Bill {
            items: normalized_items(&self.items),
            subtotal: finite_or_zero(self.subtotal),
            tax: finite_or_zero(self.tax),
            discount: finite_or_zero(self.discount),
            total_amount: finite_or_zero(self.total_amount),
            ..self.clone()
        }
    }
}

impl Employee {
    pub fn normalized(&self) -> Self {
        Employee {
            salary: finite_or_zero(self.salary),
            ..self.clone()
        }
    }
}

impl SalaryPayment {
    pub fn normalized(&self) -> Self {
        SalaryPayment {
            amount: finite_or_zero(self.amount),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_ref_reads_numbers_and_text() {
        let numeric: EntityRef = serde_json::from_str("12").unwrap();
        let text: EntityRef = serde_json::from_str("\"12\"").unwrap();

        assert_eq!(numeric, EntityRef::Id(12));
        assert_eq!(text, EntityRef::Text("12".to_string()));
        assert_eq!(numeric.as_id(), text.as_id());
        assert_eq!(serde_json::to_string(&text).unwrap(), "\"12\"");
    }

    #[test]
    fn entity_ref_text_parses_leading_integer() {
        assert_eq!(EntityRef::from(" 42abc").as_id(), Some(42));
        assert_eq!(EntityRef::from("-7").as_id(), Some(-7));
        assert_eq!(EntityRef::from("abc").as_id(), None);
        assert!(EntityRef::default().is_empty());
        assert_eq!(EntityRef::default().as_id(), None);
    }

    #[test]
    fn order_uses_camel_case_fields() {
        let json = r#"{
            "id": 1700000000000,
            "customerName": "Ali",
            "customerPhone": "0300",
            "items": [{"menuItemId": "1", "quantity": 2, "price": 450}],
            "totalAmount": 900,
            "notes": "",
            "status": "preparing",
            "createdAt": "2024-05-01T10:00:00.000Z"
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::Preparing);
        assert_eq!(order.items[0].menu_item_id.as_id(), Some(1));
        assert!((order.total_amount - 900.0).abs() < f64::EPSILON);

        let value = serde_json::to_value(&order).unwrap();
        assert!(value.get("customerName").is_some());
        assert!(value.get("createdAt").is_some());
    }

    #[test]
    fn null_amounts_read_as_zero() {
        let json = r#"{
            "id": 3,
            "items": [{"menuItemId": 1, "quantity": null, "price": null}],
            "totalAmount": null,
            "status": "pending",
            "createdAt": "2024-05-01T10:00:00.000Z"
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.total_amount, 0.0);
        assert_eq!(order.items[0].quantity, 0);
        assert_eq!(order.items[0].price, 0.0);

        let payment: SalaryPayment = serde_json::from_str(
            r#"{"id": 1, "employeeId": "2", "amount": null, "paymentDate": "2024-05-01"}"#,
        )
        .unwrap();
        assert_eq!(payment.amount, 0.0);
    }

    #[test]
    fn normalized_bill_drops_non_finite_amounts() {
        let bill = Bill {
            id: 1,
            order_id: EntityRef::default(),
            customer_name: None,
            items: vec![OrderItem {
                menu_item_id: EntityRef::Id(1),
                quantity: 1,
                price: f64::INFINITY,
            }],
            subtotal: f64::NAN,
            tax: 10.0,
            discount: f64::NEG_INFINITY,
            total_amount: f64::NAN,
            payment_method: PaymentMethod::Cash,
            notes: String::new(),
            status: BillStatus::Pending,
            created_at: "2024-05-01T10:00:00.000Z".to_string(),
        };

        let clean = bill.normalized();
        assert_eq!(clean.subtotal, 0.0);
        assert_eq!(clean.tax, 10.0);
        assert_eq!(clean.discount, 0.0);
        assert_eq!(clean.total_amount, 0.0);
        assert_eq!(clean.items[0].price, 0.0);
    }

    #[test]
    fn order_status_parse_matches_as_str() {
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(OrderStatus::parse("served"), None);
    }
}
