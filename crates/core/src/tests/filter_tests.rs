// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    create_test_contact, create_test_cost, create_test_customer, create_test_employee,
    create_test_invoice, create_test_package, create_test_project, create_test_task,
};
use crate::{CategoricalFilter, PredicateSet, Searchable, filter_entities};
use agency_dash_domain::{
    CostFrequency, Customer, Deliverable, DeliverablePeriod, InvoiceStatus, Project,
    ProjectStatus, Task, TaskPriority, TaskStatus,
};
use time::macros::date;

fn create_customers() -> Vec<Customer> {
    let mut waterfront: Customer = create_test_customer("cus-1", "Al Majaz Waterfront");
    waterfront.location = String::from("Sharjah");
    waterfront.industry = Some(String::from("hospitality"));

    let mut beeah: Customer = create_test_customer("cus-2", "Bee'ah");
    beeah.location = String::from("Sharjah");
    beeah.industry = Some(String::from("environment"));
    beeah.contacts = vec![create_test_contact(
        "cus-2",
        "Omar Khalid",
        "omar@beeah.example",
        true,
    )];

    let mut dubai: Customer = create_test_customer("cus-3", "Dubai Holding");
    dubai.industry = None;

    vec![waterfront, beeah, dubai]
}

fn create_projects() -> Vec<Project> {
    vec![
        create_test_project("prj-1", "cus-1", ProjectStatus::Active),
        create_test_project("prj-2", "cus-2", ProjectStatus::OnHold),
        create_test_project("prj-3", "cus-1", ProjectStatus::Completed),
        create_test_project("prj-4", "cus-3", ProjectStatus::Active),
    ]
}

fn ids<T, F: Fn(&T) -> &str>(items: &[&T], id: F) -> Vec<String> {
    items.iter().map(|item| id(item).to_string()).collect()
}

#[test]
fn test_text_query_matches_customer_name_case_insensitively() {
    let customers: Vec<Customer> = vec![
        create_test_customer("cus-1", "Al Majaz Waterfront"),
        create_test_customer("cus-2", "Bee'ah"),
    ];

    let matched = filter_entities(&customers, &PredicateSet::new().with_text_query("majaz"));

    assert_eq!(ids(&matched, |c: &Customer| c.id.as_str()), vec!["cus-1"]);
}

#[test]
fn test_text_query_searches_contacts() {
    let customers: Vec<Customer> = create_customers();

    let by_name = filter_entities(&customers, &PredicateSet::new().with_text_query("OMAR"));
    assert_eq!(ids(&by_name, |c: &Customer| c.id.as_str()), vec!["cus-2"]);

    let by_email =
        filter_entities(&customers, &PredicateSet::new().with_text_query("beeah.example"));
    assert_eq!(ids(&by_email, |c: &Customer| c.id.as_str()), vec!["cus-2"]);
}

#[test]
fn test_text_query_searches_location_and_industry() {
    let customers: Vec<Customer> = create_customers();

    let by_location = filter_entities(&customers, &PredicateSet::new().with_text_query("sharjah"));
    assert_eq!(
        ids(&by_location, |c: &Customer| c.id.as_str()),
        vec!["cus-1", "cus-2"]
    );

    let by_industry =
        filter_entities(&customers, &PredicateSet::new().with_text_query("hospital"));
    assert_eq!(ids(&by_industry, |c: &Customer| c.id.as_str()), vec!["cus-1"]);
}

#[test]
fn test_empty_text_query_is_identity() {
    let customers: Vec<Customer> = create_customers();

    let matched = filter_entities(&customers, &PredicateSet::new().with_text_query(""));
    assert_eq!(matched.len(), customers.len());
    assert!(matched.iter().zip(customers.iter()).all(|(a, b)| *a == b));

    let unset = filter_entities(&customers, &PredicateSet::new());
    assert_eq!(unset.len(), customers.len());
}

#[test]
fn test_all_value_bypasses_categorical_filter() {
    let projects: Vec<Project> = create_projects();

    let matched = filter_entities(&projects, &PredicateSet::new().with_filter("status", "all"));

    assert_eq!(
        ids(&matched, |p: &Project| p.id.as_str()),
        vec!["prj-1", "prj-2", "prj-3", "prj-4"]
    );
}

#[test]
fn test_categorical_filter_exact_match() {
    let projects: Vec<Project> = create_projects();

    let active = filter_entities(&projects, &PredicateSet::new().with_filter("status", "active"));
    assert_eq!(ids(&active, |p: &Project| p.id.as_str()), vec!["prj-1", "prj-4"]);

    let on_hold = filter_entities(&projects, &PredicateSet::new().with_filter("status", "on_hold"));
    assert_eq!(ids(&on_hold, |p: &Project| p.id.as_str()), vec!["prj-2"]);

    let wrong_case =
        filter_entities(&projects, &PredicateSet::new().with_filter("status", "Active"));
    assert!(wrong_case.is_empty());
}

#[test]
fn test_predicates_are_combined_with_and() {
    let projects: Vec<Project> = create_projects();

    let predicates: PredicateSet = PredicateSet::new()
        .with_filter("status", "active")
        .with_filter("customer_id", "cus-1");
    let matched = filter_entities(&projects, &predicates);
    assert_eq!(ids(&matched, |p: &Project| p.id.as_str()), vec!["prj-1"]);

    let with_text: PredicateSet = predicates.with_text_query("prj-4");
    assert!(filter_entities(&projects, &with_text).is_empty());
}

#[test]
fn test_predicate_order_does_not_matter() {
    let projects: Vec<Project> = create_projects();

    let forward: PredicateSet = PredicateSet::new()
        .with_filter("status", "active")
        .with_filter("customer_id", "cus-3");
    let backward: PredicateSet = PredicateSet::new()
        .with_filter("customer_id", "cus-3")
        .with_filter("status", "active");

    assert_eq!(
        filter_entities(&projects, &forward),
        filter_entities(&projects, &backward)
    );
}

#[test]
fn test_unknown_field_matches_nothing() {
    let projects: Vec<Project> = create_projects();

    let matched = filter_entities(&projects, &PredicateSet::new().with_filter("colour", "red"));
    assert!(matched.is_empty());

    let bypassed = filter_entities(&projects, &PredicateSet::new().with_filter("colour", "all"));
    assert_eq!(bypassed.len(), projects.len());
}

#[test]
fn test_unset_optional_field_fails_active_filter() {
    let customers: Vec<Customer> = create_customers();

    let matched = filter_entities(
        &customers,
        &PredicateSet::new().with_filter("industry", "hospitality"),
    );
    assert_eq!(ids(&matched, |c: &Customer| c.id.as_str()), vec!["cus-1"]);
}

#[test]
fn test_filter_preserves_input_order() {
    let tasks: Vec<Task> = vec![
        create_test_task("t-3", "prj-1", TaskStatus::Design),
        create_test_task("t-1", "prj-1", TaskStatus::Brief),
        create_test_task("t-2", "prj-1", TaskStatus::Design),
    ];

    let matched = filter_entities(&tasks, &PredicateSet::new().with_filter("project_id", "prj-1"));
    assert_eq!(ids(&matched, |t: &Task| t.id.as_str()), vec!["t-3", "t-1", "t-2"]);
}

#[test]
fn test_empty_collection_yields_empty_result() {
    let customers: Vec<Customer> = Vec::new();

    assert!(filter_entities(&customers, &PredicateSet::new()).is_empty());
    assert!(filter_entities(&customers, &PredicateSet::new().with_text_query("x")).is_empty());
}

#[test]
fn test_other_entities_declare_fields() {
    let mut task: Task = create_test_task("t-1", "prj-1", TaskStatus::Approval);
    task.priority = TaskPriority::Urgent;
    assert_eq!(task.field_value("priority"), Some("urgent"));
    assert_eq!(task.field_value("status"), Some("approval"));

    let employee = create_test_employee("emp-1", 10000.0, false);
    assert_eq!(employee.field_value("active"), Some("false"));
    assert!(employee.search_fields().contains(&"Designer"));

    let invoice = create_test_invoice(
        "42",
        100.0,
        0.0,
        date!(2024 - 01 - 01),
        InvoiceStatus::Unpaid,
    );
    assert_eq!(invoice.search_fields(), vec!["INV-42"]);
    assert_eq!(invoice.field_value("status"), Some("unpaid"));

    let mut package = create_test_package("pkg-1", "cus-1", 5000.0, true);
    package.deliverables = vec![Deliverable {
        name: String::from("Reels"),
        quantity: 4,
        completed_this_period: 1,
        period: DeliverablePeriod::Weekly,
    }];
    assert!(PredicateSet::new().with_text_query("reel").matches(&package));

    let cost = create_test_cost("software", 600.0, None, Some(CostFrequency::Monthly));
    assert_eq!(cost.field_value("frequency"), Some("monthly"));
    assert_eq!(cost.field_value("recurring"), Some("true"));
}

#[test]
fn test_predicate_set_is_empty() {
    assert!(PredicateSet::new().is_empty());
    assert!(PredicateSet::new().with_text_query("").is_empty());
    assert!(PredicateSet::new().with_filter("status", "all").is_empty());
    assert!(!PredicateSet::new().with_filter("status", "paid").is_empty());
    assert!(!PredicateSet::new().with_text_query("a").is_empty());
    assert!(!CategoricalFilter::new("status", "paid").matches(&create_test_task(
        "t-1",
        "prj-1",
        TaskStatus::Brief
    )));
}
