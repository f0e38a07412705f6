use std::borrow::Cow;

/// Convert a kebab-case key to camelCase.
///
/// The first segment is kept as-is. Every later segment has its first
/// character uppercased; the rest of the segment is not touched, so
/// `my-HTTP-port` becomes `myHTTPPort`. Empty segments (from leading,
/// trailing or doubled `-`) disappear.
pub fn to_camel_case(key: &str) -> String {
    let mut segments = key.split('-');
    let mut out = String::with_capacity(key.len());
    if let Some(first) = segments.next() {
        out.push_str(first);
    }
    for segment in segments {
        let mut chars = segment.chars();
        if let Some(c) = chars.next() {
            out.extend(c.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Normalize an option key for the given mode.
///
/// Borrows the input when nothing changes.
pub fn normalize(key: &str, camel_case: bool) -> Cow<'_, str> {
    if camel_case && key.contains('-') {
        Cow::Owned(to_camel_case(key))
    } else {
        Cow::Borrowed(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_basic() {
        assert_eq!(to_camel_case("my-flag"), "myFlag");
        assert_eq!(to_camel_case("output-file"), "outputFile");
        assert_eq!(to_camel_case("flag"), "flag");
        assert_eq!(to_camel_case("a-b-c"), "aBC");
    }

    #[test]
    fn camel_case_keeps_segment_tails_and_first_segment() {
        assert_eq!(to_camel_case("my-HTTP-port"), "myHTTPPort");
        assert_eq!(to_camel_case("Dry-run"), "DryRun");
        assert_eq!(to_camel_case("with-xML"), "withXML");
    }

    #[test]
    fn camel_case_empty_segments_vanish() {
        assert_eq!(to_camel_case("-leading"), "Leading");
        assert_eq!(to_camel_case("trailing-"), "trailing");
        assert_eq!(to_camel_case("double--dash"), "doubleDash");
        assert_eq!(to_camel_case("-"), "");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn normalize_is_identity_when_disabled() {
        assert_eq!(normalize("my-flag", false), "my-flag");
        assert!(matches!(normalize("my-flag", false), Cow::Borrowed(_)));
        assert!(matches!(normalize("plain", true), Cow::Borrowed(_)));
    }

    #[test]
    fn normalize_is_idempotent() {
        for key in ["my-flag", "a--b", "-x-", "already", "x-Y-z", "ümlaut-ärger"] {
            let once = normalize(key, true).into_owned();
            let twice = normalize(&once, true).into_owned();
            assert_eq!(once, twice, "key: {key}");
            assert!(!once.contains('-'));
        }
    }
}
