//! Initial data for a fresh install: the house menu and the founding staff.

use crate::models::{Employee, EmployeeStatus, MenuItem};

const IMAGE_BASE: &str = "https://images.unsplash.com/photo-";
const IMAGE_PARAMS: &str = "?w=300&h=200&fit=crop&crop=center";

// (id, name, category, price, description, photo)
const MENU: &[(i64, &str, &str, f64, &str, &str)] = &[
    (1, "Chicken Curry Khausa", "Curry Khausay", 450.0, "Delicious chicken curry khausa with authentic spices", "1563379091339-03246963d4a9"),
    (2, "Extra Noodles", "Curry Khausay", 100.0, "Additional noodles for curry khausa", "1569718212165-3a8278d5f624"),
    (3, "Extra Curry", "Curry Khausay", 50.0, "Extra curry sauce", "1565557623262-b51c2513a641"),
    (4, "Extra Slims/Papdi", "Curry Khausay", 40.0, "Additional slims or papdi", "1603133872878-684f208fb84b"),
    (5, "Chicken Curry Khausa Parcel", "Curry Khausay", 500.0, "Chicken curry khausa for takeaway with extra slims/papdi", "1563379091339-03246963d4a9"),
    (6, "Special Pav Bhaji", "Pav Bhaji", 400.0, "Traditional pav bhaji with butter and spices", "1603133872878-684f208fb84b"),
    (7, "Special Cheese Pav Bhaji", "Pav Bhaji", 550.0, "Pav bhaji topped with melted cheese", "1569718212165-3a8278d5f624"),
    (8, "Extra Pav (Single)", "Pav Bhaji", 40.0, "One additional pav bread", "1603133872878-684f208fb84b"),
    (9, "Extra Pav (3)", "Pav Bhaji", 100.0, "Three additional pav breads", "1603133872878-684f208fb84b"),
    (10, "Idli Sambhar (3PC)", "Idli Sambhar", 300.0, "3 pieces of idli with sambhar (Friday-Saturday-Sunday)", "1565557623262-b51c2513a641"),
    (11, "Vada Pav", "Idli Sambhar", 150.0, "Vada pav (Sunday only)", "1569718212165-3a8278d5f624"),
    (12, "Dhokri (200g)", "Idli Sambhar", 300.0, "Dhokri served with chutney (Sunday only)", "1603133872878-684f208fb84b"),
    (13, "Special Chicken Cheese Grilled Sandwich (Mega)", "Sandwich", 600.0, "Large grilled sandwich with chicken and cheese", "1528735602780-2552fd46c7af"),
    (14, "Special Chicken Grilled Sandwich (Mega)", "Sandwich", 500.0, "Large grilled chicken sandwich", "1528735602780-2552fd46c7af"),
    (15, "Chicken Cheese Grilled Sandwich (Small)", "Sandwich", 450.0, "Small grilled sandwich with chicken and cheese", "1528735602780-2552fd46c7af"),
    (16, "Chicken Grilled Sandwich (Small)", "Sandwich", 400.0, "Small grilled chicken sandwich", "1528735602780-2552fd46c7af"),
    (17, "Aalu Masala", "Sandwich", 180.0, "Potato masala sandwich", "1528735602780-2552fd46c7af"),
    (18, "Plain Fries (Small)", "Fries", 160.0, "Small portion of plain fries", "1573080496219-bb080dd4f877"),
    (19, "Plain Fries (Large)", "Fries", 280.0, "Large portion of plain fries", "1573080496219-bb080dd4f877"),
    (20, "Masala Fries (Small)", "Fries", 160.0, "Small portion of masala fries", "1573080496219-bb080dd4f877"),
    (21, "Masala Fries (Large)", "Fries", 280.0, "Large portion of masala fries", "1573080496219-bb080dd4f877"),
    (22, "BBQ Masala Fries (Small)", "Fries", 170.0, "Small portion of BBQ masala fries", "1573080496219-bb080dd4f877"),
    (23, "BBQ Masala Fries (Large)", "Fries", 290.0, "Large portion of BBQ masala fries", "1573080496219-bb080dd4f877"),
    (24, "Chipotle Masala Fries (Small)", "Fries", 170.0, "Small portion of chipotle masala fries", "1573080496219-bb080dd4f877"),
    (25, "Chipotle Masala Fries (Large)", "Fries", 290.0, "Large portion of chipotle masala fries", "1573080496219-bb080dd4f877"),
    (26, "Schezwan Chicken Chowmein", "Chowmein", 450.0, "Spicy schezwan chicken chowmein", "1569718212165-3a8278d5f624"),
    (27, "Schezwan Vegetable Chowmein", "Chowmein", 350.0, "Spicy schezwan vegetable chowmein", "1569718212165-3a8278d5f624"),
    (28, "Hakka Chicken Chowmein", "Chowmein", 450.0, "Traditional hakka chicken chowmein", "1569718212165-3a8278d5f624"),
    (29, "Hakka Vegetable Chowmein", "Chowmein", 350.0, "Traditional hakka vegetable chowmein", "1569718212165-3a8278d5f624"),
    (30, "Bhel Puri", "Chaat", 250.0, "Crispy bhel puri with chutneys", "1603133872878-684f208fb84b"),
    (31, "FS Special Chana Chaat", "Chaat", 250.0, "Freshmade special chana chaat", "1603133872878-684f208fb84b"),
    (32, "Pani Puri (6)", "Chaat", 120.0, "6 pieces of pani puri", "1603133872878-684f208fb84b"),
    (33, "Pani Puri (12)", "Chaat", 240.0, "12 pieces of pani puri", "1603133872878-684f208fb84b"),
    (34, "Pani Puri Parcel (Min 1 Dozen)", "Chaat", 250.0, "Pani puri for parcel minimum 12 pieces", "1603133872878-684f208fb84b"),
    (35, "Dahi Puri", "Chaat", 250.0, "Dahi puri with yogurt and chutneys", "1603133872878-684f208fb84b"),
    (36, "Extra Pani", "Chaat", 50.0, "Extra pani for pani puri", "1603133872878-684f208fb84b"),
    (37, "Extra Papdi", "Chaat", 20.0, "Extra papdi for chaat", "1603133872878-684f208fb84b"),
    (38, "Laal (Khatay) Aalu", "Chaat", 170.0, "Spicy red potato chaat", "1603133872878-684f208fb84b"),
    (39, "Masala Dosa", "Dosa", 350.0, "Traditional masala dosa with potato filling", "1565557623262-b51c2513a641"),
    (40, "Masala Dosa With Cheese", "Dosa", 450.0, "Masala dosa topped with cheese", "1565557623262-b51c2513a641"),
    (41, "Chicken Dosa", "Dosa", 500.0, "Dosa filled with chicken masala", "1565557623262-b51c2513a641"),
    (42, "Chicken Dosa with Cheese", "Dosa", 550.0, "Chicken dosa topped with cheese", "1565557623262-b51c2513a641"),
    (43, "Mysore Dosa", "Dosa", 400.0, "Mysore style dosa with spicy chutney", "1565557623262-b51c2513a641"),
    (44, "Mysore Dosa with Cheese", "Dosa", 500.0, "Mysore dosa topped with cheese", "1565557623262-b51c2513a641"),
    (45, "Uttapam", "Dosa", 400.0, "Thick dosa with vegetables", "1565557623262-b51c2513a641"),
    (46, "Chicken Uttapam", "Dosa", 500.0, "Uttapam with chicken", "1565557623262-b51c2513a641"),
    (47, "Chicken Cheese Uttapam", "Dosa", 550.0, "Uttapam with chicken and cheese", "1565557623262-b51c2513a641"),
    (48, "Paper Dosa", "Dosa", 250.0, "Crispy paper thin dosa", "1565557623262-b51c2513a641"),
    (49, "Butter Dosa", "Dosa", 280.0, "Dosa with butter", "1565557623262-b51c2513a641"),
    (50, "Cheese Paper Dosa", "Dosa", 320.0, "Paper dosa with cheese", "1565557623262-b51c2513a641"),
    (51, "Buttery Sweet Corn", "Sweet Corn", 250.0, "Sweet corn with butter", "1573080496219-bb080dd4f877"),
    (52, "BBQ Sweet Corn", "Sweet Corn", 250.0, "Sweet corn with BBQ seasoning", "1573080496219-bb080dd4f877"),
    (53, "Masala Sweet Corn", "Sweet Corn", 250.0, "Sweet corn with masala spices", "1573080496219-bb080dd4f877"),
    (54, "Chipotle Sweet Corn", "Sweet Corn", 250.0, "Sweet corn with chipotle seasoning", "1573080496219-bb080dd4f877"),
    (55, "Black Pepper Sweet Corn", "Sweet Corn", 250.0, "Sweet corn with black pepper", "1573080496219-bb080dd4f877"),
    (56, "Vegetable Pasta", "Pasta", 350.0, "Pasta with fresh vegetables", "1569718212165-3a8278d5f624"),
    (57, "Chicken Veg Pasta", "Pasta", 450.0, "Pasta with chicken and vegetables", "1569718212165-3a8278d5f624"),
];

pub fn seed_menu() -> Vec<MenuItem> {
    MENU.iter()
        .map(|&(id, name, category, price, description, photo)| MenuItem {
            id,
            name: name.to_string(),
            category: category.to_string(),
            price,
            description: description.to_string(),
            available: true,
            image: Some(format!("{IMAGE_BASE}{photo}{IMAGE_PARAMS}")),
        })
        .collect()
}

pub fn seed_employees() -> Vec<Employee> {
    [
        (1, "John Smith", "Chef", "john.smith@restaurant.com", "+1-555-0123", 3500.0, "2023-01-15"),
        (2, "Sarah Johnson", "Waitress", "sarah.johnson@restaurant.com", "+1-555-0124", 2200.0, "2023-02-20"),
        (3, "Mike Davis", "Manager", "mike.davis@restaurant.com", "+1-555-0125", 4500.0, "2022-11-10"),
        (4, "Lisa Wilson", "Cashier", "lisa.wilson@restaurant.com", "+1-555-0126", 2000.0, "2023-03-05"),
    ]
    .into_iter()
    .map(|(id, name, position, email, phone, salary, hire_date)| Employee {
        id,
        name: name.to_string(),
        position: position.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        salary,
        hire_date: hire_date.to_string(),
        status: EmployeeStatus::Active,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_menu_has_unique_ids_across_ten_categories() {
        let menu = seed_menu();
        assert_eq!(menu.len(), 57);

        let ids: HashSet<i64> = menu.iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), menu.len());

        let categories: HashSet<&str> = menu.iter().map(|item| item.category.as_str()).collect();
        assert_eq!(categories.len(), 10);
        assert!(menu.iter().all(|item| item.available && item.price > 0.0));
    }

    #[test]
    fn seed_employees_are_active() {
        let employees = seed_employees();
        assert_eq!(employees.len(), 4);
        assert!(employees.iter().all(|e| e.status == EmployeeStatus::Active));
    }
}
