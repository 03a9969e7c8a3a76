/// Fallback label for cards whose pack cannot be resolved.
pub const UNSPECIFIED_PACK: &str = "Unspecified Pack";

/// Pseudo-label selecting the full merged collection.
pub const ALL_PACKS: &str = "All";

/// Passcodes with fewer digits than this are treated as placeholders.
pub const DEFAULT_MIN_ID_DIGITS: u32 = 6;

/// Resolve a possibly-missing pack label to a displayable one.
pub fn normalize_pack(pack: Option<&str>) -> String {
    match pack {
        Some(p) if !p.trim().is_empty() => p.to_string(),
        _ => UNSPECIFIED_PACK.to_string(),
    }
}

/// Whether a stored passcode needs to be (re)resolved against the remote API.
///
/// Missing ids, non-positive ids, and ids shorter than `min_digits` (authoring
/// placeholders like `1`, `2`, ...) all qualify.
pub fn is_placeholder_id(id: Option<u64>, min_digits: u32) -> bool {
    match id {
        None => true,
        Some(0) => true,
        Some(id) => digit_count(id) < min_digits,
    }
}

fn digit_count(mut n: u64) -> u32 {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_missing_and_blank_packs_to_sentinel() {
        assert_eq!(normalize_pack(None), UNSPECIFIED_PACK);
        assert_eq!(normalize_pack(Some("")), UNSPECIFIED_PACK);
        assert_eq!(normalize_pack(Some("   ")), UNSPECIFIED_PACK);
        assert_eq!(normalize_pack(Some("Metal Raiders")), "Metal Raiders");
    }

    #[test]
    fn placeholder_detection_by_digit_count() {
        assert!(is_placeholder_id(None, DEFAULT_MIN_ID_DIGITS));
        assert!(is_placeholder_id(Some(0), DEFAULT_MIN_ID_DIGITS));
        assert!(is_placeholder_id(Some(7), DEFAULT_MIN_ID_DIGITS));
        assert!(is_placeholder_id(Some(99999), DEFAULT_MIN_ID_DIGITS));
        assert!(!is_placeholder_id(Some(100000), DEFAULT_MIN_ID_DIGITS));
        assert!(!is_placeholder_id(Some(46986414), DEFAULT_MIN_ID_DIGITS));
    }
}
