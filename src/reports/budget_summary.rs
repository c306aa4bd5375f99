//! Budget summary
//!
//! Flattens the nested budget into per-category rows and grand totals. This
//! is the only place that decides what a missing amount means: it counts as
//! zero. Everything downstream (charts, documents, CSV, terminal tables)
//! reads resolved `Money` values from here.

use crate::models::{Budget, BudgetCategory, ItemStatus, Money};

/// A budget item with its amounts resolved
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRow {
    pub name: String,
    pub estimated: Money,
    pub actual: Money,
    /// Whether an actual cost was recorded (a recorded zero is still shown)
    pub has_actual: bool,
    pub status: ItemStatus,
    pub notes: String,
}

/// One category with its subtotals
///
/// `allocation` is the plan and `subtotal_estimated` is what the items add
/// up to. The two are reported side by side and never reconciled.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub name: String,
    pub allocation: Money,
    pub items: Vec<ItemRow>,
    pub subtotal_estimated: Money,
    pub subtotal_actual: Money,
}

impl CategoryRow {
    /// Create an empty row
    pub fn new(name: impl Into<String>, allocation: Money) -> Self {
        Self {
            name: name.into(),
            allocation,
            items: Vec::new(),
            subtotal_estimated: Money::zero(),
            subtotal_actual: Money::zero(),
        }
    }

    /// Add an item to this category
    pub fn add_item(&mut self, item: ItemRow) {
        self.subtotal_estimated += item.estimated;
        self.subtotal_actual += item.actual;
        self.items.push(item);
    }

    /// Resolve a model category
    pub fn from_category(category: &BudgetCategory) -> Self {
        let mut row = Self::new(
            category.name.clone(),
            category.allocation.unwrap_or_default(),
        );
        for item in &category.items {
            row.add_item(ItemRow {
                name: item.name.clone(),
                estimated: item.estimated_cost.unwrap_or_default(),
                actual: item.actual_cost.unwrap_or_default(),
                has_actual: item.actual_cost.is_some(),
                status: item.status,
                notes: item.notes.clone().unwrap_or_default(),
            });
        }
        row
    }

    /// Allocation minus the item estimate (negative when items exceed the plan)
    pub fn unallocated(&self) -> Money {
        self.allocation - self.subtotal_estimated
    }
}

/// Totals for a whole budget
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSummary {
    pub currency: String,
    pub total_budget: Money,
    pub total_allocated: Money,
    pub total_estimated: Money,
    pub total_actual: Money,
    /// total budget - total actual; negative when overspent
    pub remaining: Money,
    pub categories: Vec<CategoryRow>,
}

impl BudgetSummary {
    /// Aggregate a budget
    pub fn generate(budget: &Budget) -> Self {
        let mut categories = Vec::with_capacity(budget.categories.len());
        let mut total_allocated = Money::zero();
        let mut total_estimated = Money::zero();
        let mut total_actual = Money::zero();

        for category in &budget.categories {
            let row = CategoryRow::from_category(category);
            total_allocated += row.allocation;
            total_estimated += row.subtotal_estimated;
            total_actual += row.subtotal_actual;
            categories.push(row);
        }

        let total_budget = budget.total_budget.unwrap_or_default();

        Self {
            currency: budget.currency.clone(),
            total_budget,
            total_allocated,
            total_estimated,
            total_actual,
            remaining: total_budget - total_actual,
            categories,
        }
    }

    /// Check if there are no categories to report
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of items across all categories
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    /// Check if actual spending exceeds the total budget
    pub fn is_over_budget(&self) -> bool {
        self.remaining.is_negative()
    }

    /// Percent of the total budget already spent (0 when there is no budget)
    pub fn spent_percentage(&self) -> f64 {
        if self.total_budget.is_positive() {
            self.total_actual.cents() as f64 / self.total_budget.cents() as f64 * 100.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BudgetItem;

    fn sample_budget() -> Budget {
        Budget {
            currency: "EUR".into(),
            total_budget: Some(Money::from_cents(300000)),
            categories: vec![
                BudgetCategory::new("Lodging", Money::from_cents(120000))
                    .with_item(
                        BudgetItem::new("Hotel", Money::from_cents(90000))
                            .with_actual(Money::from_cents(95000)),
                    )
                    .with_item(BudgetItem::new("Hostel", Money::from_cents(20000))),
                BudgetCategory::new("Food", Money::from_cents(60000)).with_item(
                    BudgetItem::new("Dinners", Money::from_cents(45000))
                        .with_actual(Money::from_cents(30000)),
                ),
                BudgetCategory {
                    name: "Misc".into(),
                    allocation: None,
                    items: vec![BudgetItem {
                        name: "Souvenirs".into(),
                        ..BudgetItem::default()
                    }],
                },
            ],
        }
    }

    #[test]
    fn test_generate_totals() {
        let summary = BudgetSummary::generate(&sample_budget());

        assert_eq!(summary.currency, "EUR");
        assert_eq!(summary.total_allocated.cents(), 180000);
        assert_eq!(summary.total_estimated.cents(), 155000);
        assert_eq!(summary.total_actual.cents(), 125000);
        assert_eq!(summary.remaining.cents(), 175000);
        assert_eq!(summary.item_count(), 4);
    }

    #[test]
    fn test_subtotals_add_up() {
        let summary = BudgetSummary::generate(&sample_budget());

        for row in &summary.categories {
            let items: Money = row.items.iter().map(|i| i.estimated).sum();
            assert_eq!(items, row.subtotal_estimated);
        }
        let subtotals: Money = summary.categories.iter().map(|c| c.subtotal_estimated).sum();
        assert_eq!(subtotals, summary.total_estimated);
        let actuals: Money = summary.categories.iter().map(|c| c.subtotal_actual).sum();
        assert_eq!(actuals, summary.total_actual);
    }

    #[test]
    fn test_missing_amounts_count_as_zero() {
        let summary = BudgetSummary::generate(&sample_budget());
        let misc = &summary.categories[2];

        assert!(misc.allocation.is_zero());
        assert!(misc.subtotal_estimated.is_zero());
        assert!(!misc.items[0].has_actual);
        assert_eq!(misc.items[0].notes, "");
    }

    #[test]
    fn test_allocation_not_reconciled() {
        let summary = BudgetSummary::generate(&sample_budget());
        let lodging = &summary.categories[0];

        assert_eq!(lodging.allocation.cents(), 120000);
        assert_eq!(lodging.subtotal_estimated.cents(), 110000);
        assert_eq!(lodging.unallocated().cents(), 10000);
    }

    #[test]
    fn test_remaining_can_go_negative() {
        let budget = Budget {
            total_budget: None,
            categories: vec![BudgetCategory::new("Flights", Money::zero()).with_item(
                BudgetItem::new("Return", Money::from_cents(50000))
                    .with_actual(Money::from_cents(65000)),
            )],
            ..Budget::default()
        };
        let summary = BudgetSummary::generate(&budget);

        assert_eq!(summary.remaining.cents(), -65000);
        assert!(summary.is_over_budget());
        assert_eq!(summary.spent_percentage(), 0.0);
    }

    #[test]
    fn test_empty_budget() {
        let summary = BudgetSummary::generate(&Budget::default());
        assert!(summary.is_empty());
        assert!(summary.total_estimated.is_zero());
    }
}
