//! Small data-shape helpers used around the pipeline's output.

use std::collections::HashMap;
use std::hash::Hash;

/// Concatenate nested lists, e.g. per-sentence tokens into one document list.
pub fn flatten<T: Clone>(nested: &[Vec<T>]) -> Vec<T> {
    nested.iter().flat_map(|inner| inner.iter().cloned()).collect()
}

/// Distinct values in order of first appearance.
pub fn unique<T: Eq + Hash + Clone>(values: &[T]) -> Vec<T> {
    let mut seen = std::collections::HashSet::with_capacity(values.len());
    values
        .iter()
        .filter(|v| seen.insert(*v))
        .cloned()
        .collect()
}

/// Count occurrences of every value under each key.
pub fn count_co_occurrence<K, V>(matches: &HashMap<K, Vec<V>>) -> HashMap<K, HashMap<V, usize>>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    matches
        .iter()
        .map(|(key, values)| {
            let mut counts = HashMap::new();
            for value in values {
                *counts.entry(value.clone()).or_insert(0) += 1;
            }
            (key.clone(), counts)
        })
        .collect()
}

/// Add one column per group holding the element-wise sum of the group's
/// columns. Missing columns are skipped; shorter columns count as zero past
/// their end.
pub fn merge_columns(
    table: &mut HashMap<String, Vec<f64>>,
    groups: &HashMap<String, Vec<String>>,
) {
    for (merged, members) in groups {
        let columns: Vec<&Vec<f64>> = members.iter().filter_map(|m| table.get(m)).collect();
        let rows = columns.iter().map(|c| c.len()).max().unwrap_or(0);
        let sums: Vec<f64> = (0..rows)
            .map(|i| columns.iter().filter_map(|c| c.get(i)).sum())
            .collect();
        table.insert(merged.clone(), sums);
    }
}
