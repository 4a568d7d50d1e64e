// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use agency_dash_domain::{
    Contact, Cost, CostFrequency, Customer, Deliverable, DeliverablePeriod, Employee, Invoice,
    InvoiceStatus, Offer, OfferStatus, Package, Project, ProjectStatus, Revenue, Subtask, Task,
    TaskPriority, TaskStatus,
};
use time::Date;

pub fn create_test_customer(id: &str, name: &str) -> Customer {
    Customer {
        id: id.to_string(),
        name: name.to_string(),
        location: String::from("Dubai"),
        industry: None,
        contacts: Vec::new(),
    }
}

pub fn create_test_contact(customer_id: &str, name: &str, email: &str, primary: bool) -> Contact {
    Contact {
        id: format!("{customer_id}-{name}"),
        customer_id: customer_id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: String::from("+971 4 000 0000"),
        is_primary: primary,
    }
}

pub fn create_test_employee(id: &str, base_salary: f64, active: bool) -> Employee {
    Employee {
        id: id.to_string(),
        full_name: format!("Employee {id}"),
        role: String::from("Designer"),
        base_salary,
        insurance: 4000.0,
        ticket_value: 2000.0,
        visa_cost: 3000.0,
        vacation_days: 30,
        active,
    }
}

pub fn create_test_project(id: &str, customer_id: &str, status: ProjectStatus) -> Project {
    Project {
        id: id.to_string(),
        customer_id: customer_id.to_string(),
        name: format!("Project {id}"),
        project_type: String::from("branding"),
        status,
        budget: None,
    }
}

pub fn create_test_task(id: &str, project_id: &str, status: TaskStatus) -> Task {
    Task {
        id: id.to_string(),
        project_id: project_id.to_string(),
        title: format!("Task {id}"),
        status,
        priority: TaskPriority::Medium,
        subtasks: Vec::new(),
        comments: Vec::new(),
    }
}

pub fn create_test_subtasks(completed: &[bool]) -> Vec<Subtask> {
    completed
        .iter()
        .enumerate()
        .map(|(idx, done)| Subtask {
            title: format!("Step {idx}"),
            completed: *done,
        })
        .collect()
}

pub fn create_test_deliverable(quantity: u32, completed_this_period: u32) -> Deliverable {
    Deliverable {
        name: String::from("Social posts"),
        quantity,
        completed_this_period,
        period: DeliverablePeriod::Monthly,
    }
}

pub fn create_test_package(id: &str, customer_id: &str, monthly_fee: f64, active: bool) -> Package {
    Package {
        id: id.to_string(),
        customer_id: customer_id.to_string(),
        name: format!("Package {id}"),
        monthly_fee,
        active,
        deliverables: Vec::new(),
    }
}

pub fn create_test_invoice(
    id: &str,
    total: f64,
    paid_amount: f64,
    due_date: Date,
    status: InvoiceStatus,
) -> Invoice {
    Invoice {
        id: id.to_string(),
        customer_id: String::from("cus-1"),
        number: format!("INV-{id}"),
        total,
        paid_amount,
        balance: total - paid_amount,
        due_date,
        status,
    }
}

pub fn create_test_offer(id: &str, total: f64, valid_until: Date, status: OfferStatus) -> Offer {
    Offer {
        id: id.to_string(),
        customer_id: String::from("cus-1"),
        number: format!("OFF-{id}"),
        line_items: Vec::new(),
        subtotal: total,
        vat_rate: 0.0,
        vat_amount: 0.0,
        total,
        valid_until,
        status,
    }
}

pub fn create_test_cost(
    category: &str,
    expected_amount: f64,
    actual_amount: Option<f64>,
    frequency: Option<CostFrequency>,
) -> Cost {
    Cost {
        id: format!("cost-{category}"),
        name: category.to_string(),
        category: category.to_string(),
        expected_amount,
        actual_amount,
        recurring: frequency.is_some(),
        frequency,
    }
}

pub fn create_test_revenue(customer_id: &str, amount: f64, date: Date) -> Revenue {
    Revenue {
        id: format!("rev-{customer_id}-{date}"),
        customer_id: customer_id.to_string(),
        amount,
        date,
        description: String::new(),
    }
}
