/// Ratcliff/Obershelp similarity between two strings, in [0, 1]
///
/// Finds the longest common block, recurses on the unmatched pieces to its
/// left and right, and returns `2 * matched / (len(a) + len(b))`.
/// Both selection and reported scores of fuzzy search go through this one
/// function. Empty input on either side scores 0.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();
    let matched = matching_chars(&a, &b);
    2.0 * matched as f64 / (a.len() + b.len()) as f64
}

/// Longest common block of a[alo..ahi] and b[blo..bhi] as (i, j, size)
/// Ties resolve to the block starting earliest in `a`, then earliest in `b`
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0usize);
    // run[j - blo + 1] = length of the common run ending at (i, j)
    let mut prev = vec![0usize; bhi - blo + 1];
    let mut curr = vec![0usize; bhi - blo + 1];

    for i in alo..ahi {
        for j in blo..bhi {
            let slot = j - blo + 1;
            curr[slot] = if a[i] == b[j] { prev[slot - 1] + 1 } else { 0 };
            if curr[slot] > best_size {
                best_size = curr[slot];
                best_i = i + 1 - best_size;
                best_j = j + 1 - best_size;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    (best_i, best_j, best_size)
}

/// Total size of all matching blocks between `a` and `b`
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let mut total = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, k) = longest_match(a, b, alo, ahi, blo, bhi);
        if k == 0 {
            continue;
        }
        total += k;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + k < ahi && j + k < bhi {
            pending.push((i + k, ahi, j + k, bhi));
        }
    }

    total
}

/// Get N highest-scored entries, keeping input order among equal scores
pub fn top_n<T>(mut rank_list: Vec<(f64, T)>, n: usize) -> Vec<(f64, T)> {
    // sort_by is stable, so ties keep store order
    rank_list.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    rank_list.truncate(n);
    rank_list
}
