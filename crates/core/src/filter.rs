// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Compound search and filter predicates.
//!
//! A [`PredicateSet`] holds an optional free-text query and any number of
//! categorical equality filters. Every active predicate must hold for an
//! entity to match. Predicates are pure, so evaluation order never changes
//! the result, and filtering never reorders the input.

use agency_dash_domain::{
    Cost, CostFrequency, Customer, Employee, Invoice, Offer, Package, Project, Task,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Categorical filter value that disables the filter.
pub const MATCH_ALL: &str = "all";

/// An entity that can be searched and filtered.
pub trait Searchable {
    /// Text fields the free-text query is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// The canonical value of a named categorical field, or `None` when the
    /// field is unknown or unset for this entity.
    fn field_value(&self, field: &str) -> Option<&str>;
}

const fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

impl Searchable for Customer {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = vec![self.name.as_str(), self.location.as_str()];
        if let Some(industry) = &self.industry {
            fields.push(industry);
        }
        for contact in &self.contacts {
            fields.push(&contact.name);
            fields.push(&contact.email);
        }
        fields
    }

    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "industry" => self.industry.as_deref(),
            "location" => Some(self.location.as_str()),
            _ => None,
        }
    }
}

impl Searchable for Employee {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.full_name.as_str(), self.role.as_str()]
    }

    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "role" => Some(self.role.as_str()),
            "active" => Some(bool_str(self.active)),
            _ => None,
        }
    }
}

impl Searchable for Project {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.project_type.as_str()]
    }

    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "status" => Some(self.status.as_str()),
            "type" => Some(self.project_type.as_str()),
            "customer_id" => Some(self.customer_id.as_str()),
            _ => None,
        }
    }
}

impl Searchable for Task {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str()]
    }

    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "status" => Some(self.status.as_str()),
            "priority" => Some(self.priority.as_str()),
            "project_id" => Some(self.project_id.as_str()),
            _ => None,
        }
    }
}

impl Searchable for Invoice {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.number.as_str()]
    }

    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "status" => Some(self.status.as_str()),
            "customer_id" => Some(self.customer_id.as_str()),
            _ => None,
        }
    }
}

impl Searchable for Offer {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.number.as_str()]
    }

    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "status" => Some(self.status.as_str()),
            "customer_id" => Some(self.customer_id.as_str()),
            _ => None,
        }
    }
}

impl Searchable for Package {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = vec![self.name.as_str()];
        fields.extend(self.deliverables.iter().map(|d| d.name.as_str()));
        fields
    }

    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "active" => Some(bool_str(self.active)),
            "customer_id" => Some(self.customer_id.as_str()),
            _ => None,
        }
    }
}

impl Searchable for Cost {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.category.as_str()]
    }

    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "category" => Some(self.category.as_str()),
            "recurring" => Some(bool_str(self.recurring)),
            "frequency" => self.frequency.as_ref().map(CostFrequency::as_str),
            _ => None,
        }
    }
}

/// Exact-match filter on one categorical field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoricalFilter {
    /// The field name, as understood by [`Searchable::field_value`].
    pub field: String,
    /// The required value, or [`MATCH_ALL`].
    pub value: String,
}

impl CategoricalFilter {
    /// Creates a new filter.
    #[must_use]
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Returns whether this filter constrains anything.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.value != MATCH_ALL
    }

    /// Returns whether an entity passes this filter.
    ///
    /// An unknown or unset field fails an active filter.
    #[must_use]
    pub fn matches<T: Searchable>(&self, entity: &T) -> bool {
        !self.is_active() || entity.field_value(&self.field) == Some(self.value.as_str())
    }
}

/// A set of optional predicates combined with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredicateSet {
    /// Case-insensitive substring query. `None` or empty matches everything.
    #[serde(default)]
    pub text_query: Option<String>,
    /// Categorical equality filters.
    #[serde(default)]
    pub categorical: Vec<CategoricalFilter>,
}

impl PredicateSet {
    /// Creates an empty predicate set that matches everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-text query.
    #[must_use]
    pub fn with_text_query(mut self, query: impl Into<String>) -> Self {
        self.text_query = Some(query.into());
        self
    }

    /// Adds a categorical filter.
    #[must_use]
    pub fn with_filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.categorical.push(CategoricalFilter::new(field, value));
        self
    }

    /// Returns whether no predicate constrains the result.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text_query.as_deref().is_none_or(str::is_empty)
            && !self.categorical.iter().any(CategoricalFilter::is_active)
    }

    /// Returns whether an entity satisfies every active predicate.
    #[must_use]
    pub fn matches<T: Searchable>(&self, entity: &T) -> bool {
        let needle: Option<String> = self.lowercase_query();
        Self::matches_prepared(needle.as_deref(), &self.categorical, entity)
    }

    fn lowercase_query(&self) -> Option<String> {
        self.text_query
            .as_deref()
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }

    fn matches_prepared<T: Searchable>(
        needle: Option<&str>,
        categorical: &[CategoricalFilter],
        entity: &T,
    ) -> bool {
        let text_matches: bool = needle.is_none_or(|needle| {
            entity
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(needle))
        });

        text_matches && categorical.iter().all(|filter| filter.matches(entity))
    }
}

/// Returns the entities that satisfy every predicate, in input order.
///
/// # Arguments
///
/// * `collection` - The entities to filter
/// * `predicates` - The predicates to apply
///
/// # Returns
///
/// References to the matching entities. An empty collection or no matches
/// yields an empty vector.
#[must_use]
pub fn filter_entities<'a, T: Searchable>(
    collection: &'a [T],
    predicates: &PredicateSet,
) -> Vec<&'a T> {
    let needle: Option<String> = predicates.lowercase_query();

    let matched: Vec<&'a T> = collection
        .iter()
        .filter(|entity| {
            PredicateSet::matches_prepared(needle.as_deref(), &predicates.categorical, *entity)
        })
        .collect();

    debug!(
        candidates = collection.len(),
        matched = matched.len(),
        "Applied predicate set"
    );

    matched
}
