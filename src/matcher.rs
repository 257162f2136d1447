//! Ingredient name matching
//!
//! Decides whether two free-text ingredient names denote the same
//! ingredient. Deliberately a threshold heuristic, not a general string
//! similarity metric: short tokens ("oil", "egg") are excluded as matching
//! anchors to avoid false positives, trading recall for precision.

/// Minimum token length (in chars) for word-boundary and substring matches
const MIN_ANCHOR_LEN: usize = 4;

#[inline]
fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

#[inline]
fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Check whether two ingredient names denote the same ingredient
///
/// Cascade, first hit wins:
/// 1. Exact equality after lowercase + trim.
/// 2. Any shared whitespace-delimited word longer than 3 chars.
/// 3. One normalized name contains the other, and the contained name is
///    longer than 3 chars.
pub fn names_match(candidate: &str, target: &str) -> bool {
    let candidate = normalize(candidate);
    let target = normalize(target);

    if candidate == target {
        return true;
    }

    let candidate_words: Vec<&str> = candidate.split(' ').collect();
    let target_words: Vec<&str> = target.split(' ').collect();

    for word in &candidate_words {
        if char_len(word) >= MIN_ANCHOR_LEN && target_words.contains(word) {
            return true;
        }
    }

    (candidate.contains(&target) && char_len(&target) >= MIN_ANCHOR_LEN)
        || (target.contains(&candidate) && char_len(&candidate) >= MIN_ANCHOR_LEN)
}
