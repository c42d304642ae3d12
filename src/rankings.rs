use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Descending,
    Ascending,
}

/// Top-N selection with ties included at the boundary: every entry matching
/// the value at rank `n` stays in, so a tie at fifth place can return more
/// than five rows. With `n` or fewer entries the whole mapping is returned.
/// Equal values order by key so output is deterministic.
pub fn top_with_ties<K: Copy + Ord>(
    stat: &HashMap<K, u32>,
    n: usize,
    direction: Direction,
) -> Vec<(K, u32)> {
    let mut rows: Vec<(K, u32)> = stat.iter().map(|(key, value)| (*key, *value)).collect();
    match direction {
        Direction::Descending => rows.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0))),
        Direction::Ascending => rows.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0))),
    }
    if rows.len() <= n {
        return rows;
    }
    let threshold = rows[n - 1].1;
    rows.into_iter()
        .take_while(|(_, value)| match direction {
            Direction::Descending => *value >= threshold,
            Direction::Ascending => *value <= threshold,
        })
        .collect()
}
