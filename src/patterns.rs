//! Candidate filenames for brute-force discovery.
//!
//! When no manifest is available, discovery guesses. The guesses are a fixed,
//! ordered list: probe order decides result order, so the sequence below must
//! never be reshuffled.
//!
//! ```text
//! Numeric block (i = 1..=20, 12 variants each)    240
//!   {i}.jpg {i}.png {i}.heic {i}.HEIC
//!   image-{i}.jpg ... image-{i}.HEIC
//!   img-{i}.jpg   ... img-{i}.HEIC
//! Named block (6 names × 6 extensions × 3 forms)   108
//!   {name}.{ext} {name}-1.{ext} {name}-2.{ext}
//!                                                  ---
//!                                                  348
//! ```

/// Highest index tried by the numeric block.
const NUMERIC_MAX: u32 = 20;

/// Stems combined with each index, in probe order. Empty means the bare index.
const NUMERIC_STEMS: &[&str] = &["", "image-", "img-"];

/// Extensions for the numeric block, in probe order.
const NUMERIC_EXTENSIONS: &[&str] = &["jpg", "png", "heic", "HEIC"];

/// Names tried by the named block.
const NAMES: &[&str] = &["eduardo", "alex", "david", "proyecto", "cliente", "client"];

/// Extensions for the named block, in probe order.
const NAMED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "heic", "HEIC"];

/// Suffixes appended to each name before the extension.
const NAMED_SUFFIXES: &[&str] = &["", "-1", "-2"];

/// Hand-authored expert portraits. Experts never use the generated patterns.
const EXPERT_CANDIDATES: &[&str] = &[
    "eduardo.jpg",
    "eduardo.png",
    "alex.jpg",
    "alex.png",
    "david.jpg",
    "david.png",
];

/// Number of entries [`generate_patterns`] always returns.
pub const PATTERN_COUNT: usize = 348;

/// Generate the ordered brute-force candidate list.
pub fn generate_patterns() -> Vec<String> {
    let mut patterns = Vec::with_capacity(PATTERN_COUNT);

    for i in 1..=NUMERIC_MAX {
        for stem in NUMERIC_STEMS {
            for ext in NUMERIC_EXTENSIONS {
                patterns.push(format!("{stem}{i}.{ext}"));
            }
        }
    }

    for name in NAMES {
        for ext in NAMED_EXTENSIONS {
            for suffix in NAMED_SUFFIXES {
                patterns.push(format!("{name}{suffix}.{ext}"));
            }
        }
    }

    patterns
}

/// The fixed expert candidate list.
pub fn expert_candidates() -> Vec<String> {
    EXPERT_CANDIDATES.iter().map(|s| s.to_string()).collect()
}

/// Distinct extensions the generator and expert list probe for, lowercased,
/// in first-seen order.
///
/// Used to report drift against the manifest writer's allow-list.
pub fn pattern_extensions() -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let expert_extensions = EXPERT_CANDIDATES
        .iter()
        .filter_map(|name| name.rsplit_once('.').map(|(_, ext)| ext));
    let all = NUMERIC_EXTENSIONS
        .iter()
        .copied()
        .chain(NAMED_EXTENSIONS.iter().copied())
        .chain(expert_extensions)
        .map(|e| e.to_ascii_lowercase());
    for ext in all {
        if !seen.contains(&ext) {
            seen.push(ext);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn pattern_count_is_fixed() {
        assert_eq!(generate_patterns().len(), PATTERN_COUNT);
    }

    #[test]
    fn numeric_block_leads() {
        let patterns = generate_patterns();
        assert_eq!(
            &patterns[..12],
            &[
                "1.jpg",
                "1.png",
                "1.heic",
                "1.HEIC",
                "image-1.jpg",
                "image-1.png",
                "image-1.heic",
                "image-1.HEIC",
                "img-1.jpg",
                "img-1.png",
                "img-1.heic",
                "img-1.HEIC",
            ]
        );
        assert_eq!(patterns[12], "2.jpg");
    }

    #[test]
    fn numeric_block_ends_at_twenty() {
        let patterns = generate_patterns();
        assert_eq!(patterns[228], "20.jpg");
        assert_eq!(patterns[239], "img-20.HEIC");
    }

    #[test]
    fn named_block_follows() {
        let patterns = generate_patterns();
        assert_eq!(
            &patterns[240..246],
            &[
                "eduardo.jpg",
                "eduardo-1.jpg",
                "eduardo-2.jpg",
                "eduardo.jpeg",
                "eduardo-1.jpeg",
                "eduardo-2.jpeg",
            ]
        );
        assert_eq!(patterns.last().map(String::as_str), Some("client-2.HEIC"));
    }

    #[test]
    fn patterns_are_deterministic_and_unique() {
        let a = generate_patterns();
        let b = generate_patterns();
        assert_eq!(a, b);
        let unique: HashSet<&String> = a.iter().collect();
        assert_eq!(unique.len(), a.len());
    }

    #[test]
    fn expert_candidates_fixed_list() {
        assert_eq!(
            expert_candidates(),
            vec![
                "eduardo.jpg",
                "eduardo.png",
                "alex.jpg",
                "alex.png",
                "david.jpg",
                "david.png",
            ]
        );
    }

    #[test]
    fn pattern_extensions_are_lowercased_and_distinct() {
        assert_eq!(pattern_extensions(), vec!["jpg", "png", "heic", "jpeg", "webp"]);
    }

    #[test]
    fn named_block_uses_hyphenated_suffixes() {
        let patterns = generate_patterns();
        for name in ["proyecto.jpg", "proyecto-1.jpg", "cliente-2.png", "20.HEIC"] {
            assert!(patterns.iter().any(|p| p == name), "{name}");
        }
        assert!(!patterns.iter().any(|p| p == "proyecto1.jpg"));
        assert!(!patterns.iter().any(|p| p.starts_with("logo")));
    }

    #[test]
    fn pattern_extensions_cover_expert_candidates() {
        let exts = pattern_extensions();
        for name in expert_candidates() {
            let (_, ext) = name.rsplit_once('.').unwrap();
            assert!(exts.contains(&ext.to_ascii_lowercase()), "{name}");
        }
    }
}
