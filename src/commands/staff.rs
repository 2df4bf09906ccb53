use crate::employees::{EmployeeAction, EmployeeStore};
use crate::error::Result;
use crate::ids::next_id;
use crate::models::{CreateEmployee, Employee, EmployeeStatus, EntityRef};
use crate::reducer::contains_id;

pub const UNKNOWN_EMPLOYEE: &str = "Unknown Employee";

impl From<&Employee> for CreateEmployee {
    fn from(employee: &Employee) -> Self {
        CreateEmployee {
            name: employee.name.clone(),
            position: employee.position.clone(),
            email: employee.email.clone(),
            phone: employee.phone.clone(),
            salary: employee.salary,
            hire_date: employee.hire_date.clone(),
        }
    }
}

impl Employee {
    pub fn with_draft(&self, draft: CreateEmployee) -> Employee {
        Employee {
            id: self.id,
            name: draft.name,
            position: draft.position,
            email: draft.email,
            phone: draft.phone,
            salary: draft.salary,
            hire_date: draft.hire_date,
            status: self.status,
        }
    }
}

impl EmployeeStore {
    /// Hires an employee; new hires always start active.
    pub fn add_employee(&mut self, employee: CreateEmployee) -> Result<Employee> {
        let employee = Employee {
            id: next_id(),
            name: employee.name,
            position: employee.position,
            email: employee.email,
            phone: employee.phone,
            salary: employee.salary,
            hire_date: employee.hire_date,
            status: EmployeeStatus::Active,
        };

        let employee = employee.normalized();
        self.dispatch(EmployeeAction::AddEmployee(employee.clone()))?;
        tracing::info!(employee_id = employee.id, name = %employee.name, "Employee added");

        Ok(employee)
    }

    pub fn update_employee(&mut self, employee: Employee) -> Result<()> {
        if !contains_id(self.employees(), employee.id) {
            tracing::debug!(employee_id = employee.id, "Update for unknown employee ignored");
        }
        self.dispatch(EmployeeAction::UpdateEmployee(employee))
    }

    /// Removes the employee. Salary payments keep their employee reference.
    pub fn delete_employee(&mut self, id: i64) -> Result<()> {
        if !contains_id(self.employees(), id) {
            tracing::debug!(employee_id = id, "Delete for unknown employee ignored");
        }
        self.dispatch(EmployeeAction::DeleteEmployee(id))
    }

    pub fn set_employee_status(&mut self, id: i64, status: EmployeeStatus) -> Result<()> {
        match self.find_employee(&EntityRef::Id(id)).cloned() {
            Some(employee) => self.update_employee(Employee { status, ..employee }),
            None => Ok(()),
        }
    }

    pub fn find_employee(&self, reference: &EntityRef) -> Option<&Employee> {
        let id = reference.as_id()?;
        self.employees().iter().find(|e| e.id == id)
    }

    pub fn employee_name(&self, reference: &EntityRef) -> &str {
        self.find_employee(reference)
            .map(|e| e.name.as_str())
            .unwrap_or(UNKNOWN_EMPLOYEE)
    }

    pub fn get_active_employees(&self) -> Vec<&Employee> {
        self.employees()
            .iter()
            .filter(|e| e.status == EmployeeStatus::Active)
            .collect()
    }
}
