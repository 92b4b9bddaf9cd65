//! Weighted scoring
//!
//! A success is worth a full point, a warning half a point, an error
//! nothing; a score is points over item count, scaled to 0-100 and rounded.
//! The overall score runs the same formula over the flattened items of all
//! categories, so categories with more checks weigh more than an average of
//! category scores would give them.

use crate::checks::{CheckItem, CheckStatus};
use crate::report::Category;

/// Score a single category's items. An empty item list scores 0.
pub fn category_score(items: &[CheckItem]) -> u32 {
    weighted_score(
        count(items, CheckStatus::Success),
        count(items, CheckStatus::Warning),
        items.len(),
    )
}

/// Score the whole report from the flattened items of every category.
pub fn overall_score(categories: &[Category]) -> u32 {
    let success = categories
        .iter()
        .map(|c| count(&c.items, CheckStatus::Success))
        .sum();
    let warning = categories
        .iter()
        .map(|c| count(&c.items, CheckStatus::Warning))
        .sum();
    let total = categories.iter().map(|c| c.items.len()).sum();
    weighted_score(success, warning, total)
}

fn count(items: &[CheckItem], status: CheckStatus) -> usize {
    items.iter().filter(|item| item.status == status).count()
}

fn weighted_score(success: usize, warning: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((success as f64 + warning as f64 * 0.5) / total as f64 * 100.0).round() as u32
}

// ============================================================================
// Tests
// ============================================================================
