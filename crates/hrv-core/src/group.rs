// File: crates/hrv-core/src/group.rs
// Summary: Subject/condition grouping with first-appearance subject ordering.

use crate::table::InputTable;

/// Fixed condition order: first label is drawn left-of-center, second
/// right-of-center, for every subject. Any other label matches no group.
pub const CATEGORY_ORDER: [&str; 2] = ["Yes", "No"];

/// Distinct subject identifiers in the order they first appear in the table.
/// Never sorted; this fixes the horizontal axis order.
pub fn subjects_in_order(table: &InputTable) -> Vec<String> {
    let mut subjects: Vec<String> = Vec::new();
    for r in &table.records {
        if !subjects.iter().any(|s| s == &r.subject) {
            subjects.push(r.subject.clone());
        }
    }
    subjects
}

/// All measurements for one (subject, condition) pair, in row order.
/// An empty result is benign; callers simply skip the group.
pub fn group_values(table: &InputTable, subject: &str, condition: &str) -> Vec<f64> {
    table
        .records
        .iter()
        .filter(|r| r.subject == subject && r.condition == condition)
        .map(|r| r.hrv_ms)
        .collect()
}
