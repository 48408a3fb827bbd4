//! Dense competition ranking.

/// Assign ranks to scores already sorted in descending order.
///
/// Tied scores share the rank of their first occurrence; the next distinct
/// score's rank is its 0-based index plus one. `[10, 7, 7, 3]` ranks as
/// `[1, 2, 2, 4]`: ties do not consume extra rank numbers, and a rank
/// always equals the count of strictly-higher scores plus one.
pub fn dense_ranks(sorted_scores: &[u64]) -> Vec<u32> {
    let mut ranks = Vec::with_capacity(sorted_scores.len());
    let mut current_rank = 1u32;
    for (i, score) in sorted_scores.iter().enumerate() {
        if i > 0 && *score != sorted_scores[i - 1] {
            current_rank = (i as u32) + 1;
        }
        ranks.push(current_rank);
    }
    ranks
}
