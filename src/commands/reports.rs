use crate::catalog::CatalogOrderStore;
use crate::employees::EmployeeStore;
use crate::models::{Bill, EmployeeStatus, Order, OrderStatus};
use chrono::{DateTime, FixedOffset};
use serde::Serialize;

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderStats {
    pub total_orders: usize,
    pub pending_orders: usize,
    pub completed_orders: usize,
    /// Sum of order totals regardless of status.
    pub total_revenue: f64,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuStats {
    pub total_items: usize,
    pub available_items: usize,
    pub average_price: f64,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalaryStats {
    pub total_employees: usize,
    pub active_employees: usize,
    pub monthly_salary_expense: f64,
    pub total_payments: f64,
    pub average_salary: f64,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub orders: OrderStats,
    pub menu: MenuStats,
    pub salary_payments: f64,
    /// Order revenue minus salary actually paid out.
    pub net_profit: f64,
    pub active_employees: usize,
}

fn parsed_time(timestamp: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(timestamp).ok()
}

fn newest_first<'a, T>(
    records: &'a [T],
    created_at: impl Fn(&T) -> &str,
    limit: usize,
) -> Vec<&'a T> {
    let mut sorted: Vec<&T> = records.iter().collect();
    sorted.sort_by(|a, b| {
        let (a, b) = (created_at(*a), created_at(*b));
        parsed_time(b).cmp(&parsed_time(a)).then_with(|| b.cmp(a))
    });
    sorted.truncate(limit);
    sorted
}

impl CatalogOrderStore {
    pub fn order_stats(&self) -> OrderStats {
        let orders = self.orders();
        OrderStats {
            total_orders: orders.len(),
            pending_orders: orders.iter().filter(|o| o.status == OrderStatus::Pending).count(),
            completed_orders: orders.iter().filter(|o| o.status == OrderStatus::Completed).count(),
            total_revenue: orders.iter().map(|o| o.total_amount).sum(),
        }
    }

    pub fn menu_stats(&self) -> MenuStats {
        let items = self.menu_items();
        let total_items = items.len();
        let average_price = if total_items == 0 {
            0.0
        } else {
            items.iter().map(|m| m.price).sum::<f64>() / total_items as f64
        };

        MenuStats {
            total_items,
            available_items: items.iter().filter(|m| m.available).count(),
            average_price,
        }
    }

    pub fn recent_orders(&self, limit: usize) -> Vec<&Order> {
        newest_first(self.orders(), |o| o.created_at.as_str(), limit)
    }

    pub fn recent_bills(&self, limit: usize) -> Vec<&Bill> {
        newest_first(self.bills(), |b| b.created_at.as_str(), limit)
    }
}

impl EmployeeStore {
    pub fn salary_stats(&self) -> SalaryStats {
        SalaryStats {
            total_employees: self.employees().len(),
            active_employees: self
                .employees()
                .iter()
                .filter(|e| e.status == EmployeeStatus::Active)
                .count(),
            monthly_salary_expense: self.get_total_salary_expense(),
            total_payments: self.total_payments(),
            average_salary: self.average_salary(),
        }
    }
}

pub fn dashboard(catalog: &CatalogOrderStore, employees: &EmployeeStore) -> DashboardSummary {
    let orders = catalog.order_stats();
    let salary_payments = employees.total_payments();

    DashboardSummary {
        net_profit: orders.total_revenue - salary_payments,
        menu: catalog.menu_stats(),
        orders,
        salary_payments,
        active_employees: employees.get_active_employees().len(),
    }
}
