pub mod bills;
pub mod categories;
pub mod menu;
pub mod orders;
pub mod reports;
pub mod salary;
pub mod staff;
