// src/services/similarity.rs

/// Lowercases and collapses whitespace so that stored prompts and user
/// input are compared on the same footing.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Edit-distance similarity in `0.0..=1.0`, rounded to two decimals.
///
/// Both inputs are expected to be normalized already.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let longest = a.len().max(b.len());
    if longest == 0 {
        return 1.0;
    }

    let distance = levenshtein(&a, &b);
    let ratio = 1.0 - distance as f64 / longest as f64;
    (ratio * 100.0).round() / 100.0
}

fn levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // single rolling row
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.iter().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(ca != cb);
            row[j + 1] = (diag + cost).min(above + 1).min(row[j] + 1);
            diag = above;
        }
    }
    row[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_collapses() {
        assert_eq!(normalize("  How DO I\tupdate   my profile? "), "how do i update my profile?");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn identical_text_scores_one() {
        let s = normalize("What's new on campus?");
        assert_eq!(similarity(&s, &s), 1.0);
        assert_eq!(similarity("", ""), 1.0);
    }

    #[test]
    fn distance_basics() {
        let k: Vec<char> = "kitten".chars().collect();
        let s: Vec<char> = "sitting".chars().collect();
        assert_eq!(levenshtein(&k, &s), 3);
        assert_eq!(levenshtein(&[], &s), 7);
    }

    #[test]
    fn score_is_symmetric_and_bounded() {
        let pairs = [("hello", "hallo"), ("abc", ""), ("good morning", "good night")];
        for (a, b) in pairs {
            let ab = similarity(a, b);
            assert_eq!(ab, similarity(b, a));
            assert!((0.0..=1.0).contains(&ab));
        }
        assert_eq!(similarity("abc", ""), 0.0);
    }

    #[test]
    fn small_typo_stays_above_threshold() {
        let stored = normalize("How do I update my profile?");
        let typed = normalize("How do I update my profile");
        assert!(similarity(&stored, &typed) >= 0.9);

        let unrelated = normalize("Explain quantum chromodynamics to me");
        assert!(similarity(&stored, &unrelated) < 0.9);
    }
}
