//! Employee and salary payment state.

use crate::error::Result;
use crate::models::{Employee, SalaryPayment};
use crate::persistence::{PersistenceAdapter, Store};
use crate::reducer::{appended, replaced, without, RawAction, Reducer};
use crate::seed;
use crate::storage::{KeyValueStore, MemoryStorage};
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;

pub const EMPLOYEE_KEY: &str = "employeeData";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeState {
    pub employees: Vec<Employee>,
    pub salary_payments: Vec<SalaryPayment>,
}

impl Default for EmployeeState {
    fn default() -> Self {
        Self {
            employees: seed::seed_employees(),
            salary_payments: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePatch {
    pub employees: Option<Vec<Employee>>,
    pub salary_payments: Option<Vec<SalaryPayment>>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployeeAction {
    AddEmployee(Employee),
    UpdateEmployee(Employee),
    DeleteEmployee(i64),
    AddSalaryPayment(SalaryPayment),
    UpdateSalaryPayment(SalaryPayment),
    DeleteSalaryPayment(i64),
    LoadEmployeeData(EmployeePatch),
    /// Any other `type`. Its payload, if present, is discarded.
    Unrecognized,
}

impl<'de> Deserialize<'de> for EmployeeAction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawAction::deserialize(deserializer)?;
        let kind = raw.kind.clone();
        let action = match kind.as_str() {
            "ADD_EMPLOYEE" => EmployeeAction::AddEmployee(raw.payload()?),
            "UPDATE_EMPLOYEE" => EmployeeAction::UpdateEmployee(raw.payload()?),
            "DELETE_EMPLOYEE" => EmployeeAction::DeleteEmployee(raw.payload()?),
            "ADD_SALARY_PAYMENT" => EmployeeAction::AddSalaryPayment(raw.payload()?),
            "UPDATE_SALARY_PAYMENT" => EmployeeAction::UpdateSalaryPayment(raw.payload()?),
            "DELETE_SALARY_PAYMENT" => EmployeeAction::DeleteSalaryPayment(raw.payload()?),
            "LOAD_EMPLOYEE_DATA" => EmployeeAction::LoadEmployeeData(raw.payload()?),
            _ => EmployeeAction::Unrecognized,
        };
        Ok(action)
    }
}

pub struct EmployeeReducer;

impl Reducer for EmployeeReducer {
    type State = EmployeeState;
    type Patch = EmployeePatch;
    type Action = EmployeeAction;

    fn reduce(state: &EmployeeState, action: &EmployeeAction) -> EmployeeState {
        match action {
            EmployeeAction::AddEmployee(employee) => EmployeeState {
                employees: appended(&state.employees, &employee.normalized()),
                ..state.clone()
            },
            EmployeeAction::UpdateEmployee(employee) => EmployeeState {
                employees: replaced(&state.employees, &employee.normalized()),
                ..state.clone()
            },
            EmployeeAction::DeleteEmployee(id) => EmployeeState {
                employees: without(&state.employees, *id),
                ..state.clone()
            },
            EmployeeAction::AddSalaryPayment(payment) => EmployeeState {
                salary_payments: appended(&state.salary_payments, &payment.normalized()),
                ..state.clone()
            },
            EmployeeAction::UpdateSalaryPayment(payment) => EmployeeState {
                salary_payments: replaced(&state.salary_payments, &payment.normalized()),
                ..state.clone()
            },
            EmployeeAction::DeleteSalaryPayment(id) => EmployeeState {
                salary_payments: without(&state.salary_payments, *id),
                ..state.clone()
            },
            EmployeeAction::LoadEmployeeData(patch) => EmployeeState {
                employees: patch
                    .employees
                    .clone()
                    .unwrap_or_else(|| state.employees.clone()),
                salary_payments: patch
                    .salary_payments
                    .clone()
                    .unwrap_or_else(|| state.salary_payments.clone()),
            },
            EmployeeAction::Unrecognized => state.clone(),
        }
    }

    fn load_action(patch: EmployeePatch) -> EmployeeAction {
        EmployeeAction::LoadEmployeeData(patch)
    }
}

/// Owns employees and salary payments. Operations live in
/// `commands::{staff, salary}`.
pub struct EmployeeStore {
    store: Store<EmployeeReducer>,
}

impl EmployeeStore {
    pub fn open(storage: Arc<dyn KeyValueStore>, key: &str) -> Result<Self> {
        Self::open_with(EmployeeState::default(), storage, key)
    }

    pub fn open_with(
        initial: EmployeeState,
        storage: Arc<dyn KeyValueStore>,
        key: &str,
    ) -> Result<Self> {
        let store = Store::open(initial, PersistenceAdapter::new(storage, key))?;
        Ok(Self { store })
    }

    pub fn in_memory() -> Result<Self> {
        Self::open(Arc::new(MemoryStorage::new()), EMPLOYEE_KEY)
    }

    pub fn state(&self) -> &EmployeeState {
        self.store.state()
    }

    pub fn employees(&self) -> &[Employee] {
        &self.state().employees
    }

    pub fn salary_payments(&self) -> &[SalaryPayment] {
        &self.state().salary_payments
    }

    pub fn dispatch(&mut self, action: EmployeeAction) -> Result<()> {
        self.store.dispatch(action)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        self.store.to_json_pretty()
    }

    pub fn clear_persisted(&self) -> Result<()> {
        self.store.persistence().clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_action_returns_equal_state() {
        let state = EmployeeState::default();
        assert_eq!(EmployeeReducer::reduce(&state, &EmployeeAction::Unrecognized), state);
    }

    #[test]
    fn load_merges_only_present_keys() {
        let state = EmployeeState::default();
        let patch: EmployeePatch = serde_json::from_str(
            r#"{"salaryPayments": [{"id": 9, "employeeId": "1", "amount": 3500, "paymentDate": "2024-02-01T00:00:00.000Z"}]}"#,
        )
        .unwrap();

        let next = EmployeeReducer::reduce(&state, &EmployeeReducer::load_action(patch));

        assert_eq!(next.employees, state.employees);
        assert_eq!(next.salary_payments.len(), 1);
        assert_eq!(next.salary_payments[0].notes, "");
    }

    #[test]
    fn unknown_action_with_payload_is_a_noop() {
        let action: EmployeeAction =
            serde_json::from_str(r#"{"type":"PAY_EVERYONE","payload":[1,2,3]}"#).unwrap();
        assert_eq!(action, EmployeeAction::Unrecognized);

        let action: EmployeeAction =
            serde_json::from_str(r#"{"type":"DELETE_EMPLOYEE","payload":2}"#).unwrap();
        assert_eq!(action, EmployeeAction::DeleteEmployee(2));
    }

    #[test]
    fn load_action_uses_employee_tag() {
        let action = EmployeeReducer::load_action(EmployeePatch::default());
        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(value["type"], "LOAD_EMPLOYEE_DATA");
    }
}
