//! Trip budget model
//!
//! A budget is a list of spending categories, each with a planned allocation
//! and the individual items expected to be paid for out of it. Every numeric
//! field is optional on input; the aggregator decides what a missing value
//! means.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Booking state of a budget item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    /// Not yet booked
    #[default]
    Planned,
    /// Reserved but not paid
    Booked,
    /// Paid in full
    Paid,
    /// Dropped from the plan
    Cancelled,
}

impl ItemStatus {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Planned => "Planned",
            Self::Booked => "Booked",
            Self::Paid => "Paid",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single expected expense
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetItem {
    /// Item name
    #[serde(default)]
    pub name: String,

    /// What the item is expected to cost
    #[serde(default)]
    pub estimated_cost: Option<Money>,

    /// What the item actually cost, once known
    #[serde(default)]
    pub actual_cost: Option<Money>,

    /// Booking state
    #[serde(default)]
    pub status: ItemStatus,

    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
}

impl BudgetItem {
    /// Create an item with an estimated cost
    pub fn new(name: impl Into<String>, estimated_cost: Money) -> Self {
        Self {
            name: name.into(),
            estimated_cost: Some(estimated_cost),
            ..Self::default()
        }
    }

    /// Builder-style setter for the actual cost
    pub fn with_actual(mut self, actual_cost: Money) -> Self {
        self.actual_cost = Some(actual_cost);
        self
    }

    /// Builder-style setter for the status
    pub fn with_status(mut self, status: ItemStatus) -> Self {
        self.status = status;
        self
    }
}

/// A spending category with a planned allocation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetCategory {
    /// Category name
    #[serde(default)]
    pub name: String,

    /// Planned share of the total budget
    #[serde(default)]
    pub allocation: Option<Money>,

    /// Expected expenses in this category
    #[serde(default)]
    pub items: Vec<BudgetItem>,
}

impl BudgetCategory {
    /// Create a category with an allocation and no items
    pub fn new(name: impl Into<String>, allocation: Money) -> Self {
        Self {
            name: name.into(),
            allocation: Some(allocation),
            items: Vec::new(),
        }
    }

    /// Builder-style item append
    pub fn with_item(mut self, item: BudgetItem) -> Self {
        self.items.push(item);
        self
    }
}

/// The whole trip budget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    /// ISO 4217 currency code
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Overall spending limit
    #[serde(default)]
    pub total_budget: Option<Money>,

    /// Spending categories in display order
    #[serde(default)]
    pub categories: Vec<BudgetCategory>,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for Budget {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            total_budget: None,
            categories: Vec::new(),
        }
    }
}

impl Budget {
    /// Check if there is nothing to report
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_deserialize() {
        let budget: Budget = serde_json::from_str(
            r#"{"categories": [{"name": "Food", "items": [{"name": "Dinner"}]}]}"#,
        )
        .unwrap();

        assert_eq!(budget.currency, "USD");
        assert!(budget.total_budget.is_none());
        let category = &budget.categories[0];
        assert!(category.allocation.is_none());
        assert!(category.items[0].estimated_cost.is_none());
        assert_eq!(category.items[0].status, ItemStatus::Planned);
    }

    #[test]
    fn test_status_deserialize() {
        let item: BudgetItem =
            serde_json::from_str(r#"{"name": "Hotel", "estimated_cost": 420, "status": "booked"}"#)
                .unwrap();
        assert_eq!(item.status, ItemStatus::Booked);
        assert_eq!(item.estimated_cost, Some(Money::from_cents(42000)));
    }

    #[test]
    fn test_builders() {
        let category = BudgetCategory::new("Lodging", Money::from_cents(100000)).with_item(
            BudgetItem::new("Hotel", Money::from_cents(80000))
                .with_actual(Money::from_cents(82000))
                .with_status(ItemStatus::Paid),
        );
        assert_eq!(category.items.len(), 1);
        assert_eq!(category.items[0].status.to_string(), "Paid");
    }
}
