use crate::employees::{EmployeeAction, EmployeeStore};
use crate::error::Result;
use crate::ids::{next_id, now_timestamp};
use crate::models::{CreateSalaryPayment, SalaryPayment};
use crate::reducer::contains_id;

impl SalaryPayment {
    /// Keeps the id. The payment date moves only when the draft carries one.
    pub fn with_draft(&self, draft: CreateSalaryPayment) -> SalaryPayment {
        SalaryPayment {
            id: self.id,
            employee_id: draft.employee_id,
            amount: draft.amount,
            payment_date: draft
                .payment_date
                .unwrap_or_else(|| self.payment_date.clone()),
            notes: draft.notes,
        }
    }
}

impl EmployeeStore {
    /// Records a payment dated now. The employee reference is not checked.
    pub fn add_salary_payment(&mut self, payment: CreateSalaryPayment) -> Result<SalaryPayment> {
        let payment = SalaryPayment {
            id: next_id(),
            employee_id: payment.employee_id,
            amount: payment.amount,
            payment_date: now_timestamp(),
            notes: payment.notes,
        };

        let payment = payment.normalized();
        self.dispatch(EmployeeAction::AddSalaryPayment(payment.clone()))?;
        tracing::info!(payment_id = payment.id, amount = payment.amount, "Salary payment recorded");

        Ok(payment)
    }

    pub fn update_salary_payment(&mut self, payment: SalaryPayment) -> Result<()> {
        if !contains_id(self.salary_payments(), payment.id) {
            tracing::debug!(payment_id = payment.id, "Update for unknown salary payment ignored");
        }
        self.dispatch(EmployeeAction::UpdateSalaryPayment(payment))
    }

    pub fn delete_salary_payment(&mut self, id: i64) -> Result<()> {
        if !contains_id(self.salary_payments(), id) {
            tracing::debug!(payment_id = id, "Delete for unknown salary payment ignored");
        }
        self.dispatch(EmployeeAction::DeleteSalaryPayment(id))
    }

    pub fn payments_for_employee(&self, employee_id: i64) -> Vec<&SalaryPayment> {
        self.salary_payments()
            .iter()
            .filter(|p| p.employee_id.refers_to(employee_id))
            .collect()
    }

    /// Monthly payroll: the sum of every employee's `salary`, whatever their
    /// status. Recorded payments do not enter into it; see `total_payments`.
    pub fn get_total_salary_expense(&self) -> f64 {
        self.employees().iter().map(|e| e.salary).sum()
    }

    pub fn total_payments(&self) -> f64 {
        self.salary_payments().iter().map(|p| p.amount).sum()
    }

    pub fn average_salary(&self) -> f64 {
        let count = self.employees().len();
        if count == 0 {
            0.0
        } else {
            self.get_total_salary_expense() / count as f64
        }
    }
}
