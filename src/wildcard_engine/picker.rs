use rand::Rng;

use crate::wildcard_engine::models::OptionEntry;

/// Draw one value from `entries`, proportionally to the weights.
///
/// Entries with weight 0 carry no probability mass and are skipped by the
/// cumulative walk. When no entry carries any mass at all, the last entry
/// wins deterministically — that fallback is part of the contract, not an
/// error. Returns `None` only for an empty list.
pub fn pick_weighted<'a, R: Rng>(rng: &mut R, entries: &'a [OptionEntry]) -> Option<&'a str> {
    if entries.is_empty() {
        return None;
    }

    let total: u64 = entries
        .iter()
        .filter(|e| e.weight > 0)
        .map(|e| u64::from(e.weight))
        .sum();
    if total == 0 {
        return entries.last().map(|e| e.value.as_str());
    }

    let r = rng.gen::<f64>() * total as f64;
    Some(pick_at(entries, r))
}

/// Walk the cumulative weights and return the first value whose bucket
/// contains `r`. `r` must lie in `[0, total)`.
pub(crate) fn pick_at(entries: &[OptionEntry], mut r: f64) -> &str {
    for entry in entries {
        if entry.weight == 0 {
            continue;
        }
        let w = f64::from(entry.weight);
        if r < w {
            return &entry.value;
        }
        r -= w;
    }
    // Floating-point edge: r consumed every bucket, keep the last entry.
    &entries[entries.len() - 1].value
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn entries(pairs: &[(&str, u32)]) -> Vec<OptionEntry> {
        pairs
            .iter()
            .map(|&(v, w)| OptionEntry::new(v, w))
            .collect()
    }

    #[test]
    fn cumulative_buckets_are_half_open() {
        let list = entries(&[("a", 1), ("b", 3)]);
        assert_eq!(pick_at(&list, 0.0), "a");
        assert_eq!(pick_at(&list, 0.99), "a");
        assert_eq!(pick_at(&list, 1.0), "b");
        assert_eq!(pick_at(&list, 3.6), "b");
        assert_eq!(pick_at(&list, 3.999), "b");
    }

    #[test]
    fn zero_weight_entries_are_skipped_by_the_walk() {
        let list = entries(&[("a", 0), ("b", 2), ("c", 0), ("d", 1)]);
        assert_eq!(pick_at(&list, 0.5), "b");
        assert_eq!(pick_at(&list, 1.99), "b");
        assert_eq!(pick_at(&list, 2.0), "d");
    }

    #[test]
    fn all_zero_total_falls_back_to_last_entry() {
        let list = entries(&[("a", 0), ("b", 0)]);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick_weighted(&mut rng, &list), Some("b"));
    }

    #[test]
    fn empty_list_yields_none() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick_weighted(&mut rng, &[]), None);
    }

    #[test]
    fn single_entry_always_wins() {
        let list = entries(&[("only", 1)]);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(pick_weighted(&mut rng, &list), Some("only"));
        }
    }
}
