//! Approximate string similarity
//!
//! `token_set_ratio` compares two strings as sets of words, so word order,
//! repeated words and extra trailing words don't count against a match:
//!
//! - "roast" vs "Roast Chicken Block" -> 100
//! - "chicken roast" vs "Roast Chicken" -> 100
//!
//! All scores are integers in 0..=100.

use smallvec::SmallVec;

type Tokens<'a> = SmallVec<[&'a str; 8]>;

/// Lowercase, turn every non-alphanumeric char into a space, trim
pub fn normalize(s: &str) -> String {
    let mapped: String = s
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    mapped.to_lowercase().trim().to_string()
}

/// Sorted, deduplicated whitespace tokens
fn token_set(s: &str) -> Tokens<'_> {
    let mut tokens: Tokens<'_> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.dedup();
    tokens
}

/// Length of the longest common subsequence, counted in chars
fn lcs_len(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                curr[j].max(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Normalized Indel similarity: 100 * (1 - indel_distance / (|a| + |b|))
///
/// Returned unrounded; two empty strings count as identical.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 100.0;
    }
    200.0 * lcs_len(&a, &b) as f64 / total as f64
}

fn join_with(prefix: &str, tokens: &[&str]) -> String {
    let rest = tokens.join(" ");
    match (prefix.is_empty(), rest.is_empty()) {
        (true, _) => rest,
        (_, true) => prefix.to_string(),
        _ => format!("{} {}", prefix, rest),
    }
}

/// Token-set similarity of two raw strings, 0..=100.
///
/// Both inputs are normalized first. Either side with no tokens scores 0.
/// If every token of one side appears in the other, the score is 100.
/// Otherwise the score is the best `ratio` among the shared tokens and each
/// side's shared-plus-unique token string.
pub fn token_set_ratio(a: &str, b: &str) -> u8 {
    let a = normalize(a);
    let b = normalize(b);
    let tokens_a = token_set(&a);
    let tokens_b = token_set(&b);
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0;
    }

    let mut shared: Tokens<'_> = SmallVec::new();
    let mut only_a: Tokens<'_> = SmallVec::new();
    let mut only_b: Tokens<'_> = SmallVec::new();
    let (mut i, mut j) = (0, 0);
    while i < tokens_a.len() && j < tokens_b.len() {
        match Ord::cmp(tokens_a[i], tokens_b[j]) {
            std::cmp::Ordering::Equal => {
                shared.push(tokens_a[i]);
                i += 1;
                j += 1;
            }
            std::cmp::Ordering::Less => {
                only_a.push(tokens_a[i]);
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                only_b.push(tokens_b[j]);
                j += 1;
            }
        }
    }
    only_a.extend_from_slice(&tokens_a[i..]);
    only_b.extend_from_slice(&tokens_b[j..]);

    if !shared.is_empty() && (only_a.is_empty() || only_b.is_empty()) {
        return 100;
    }

    let sect = shared.join(" ");
    let combined_a = join_with(&sect, &only_a);
    let combined_b = join_with(&sect, &only_b);

    let mut best = ratio(&combined_a, &combined_b);
    if !sect.is_empty() {
        best = best
            .max(ratio(&sect, &combined_a))
            .max(ratio(&sect, &combined_b));
    }
    best.round_ties_even().clamp(0.0, 100.0) as u8
}
