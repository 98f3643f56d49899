//! First-character case flips.
//!
//! Only the leading character is touched. Identifiers are assumed to already
//! follow the target convention apart from that character: `user_id` lowers to
//! itself and `HTTPRequest` lowers to `hTTPRequest`.

/// Upper-cases the first character of `s`.
pub fn upper(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Lower-cases the first character of `s`.
pub fn lower(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_flips_first_char_only() {
        assert_eq!(upper(""), "");
        assert_eq!(upper("foo"), "Foo");
        assert_eq!(upper("fooBar"), "FooBar");
        assert_eq!(upper("Foo"), "Foo");
    }

    #[test]
    fn lower_flips_first_char_only() {
        assert_eq!(lower(""), "");
        assert_eq!(lower("Foo"), "foo");
        assert_eq!(lower("FooBar"), "fooBar");
        assert_eq!(lower("HTTP"), "hTTP");
    }

    #[test]
    fn non_alphabetic_first_char_is_kept() {
        assert_eq!(upper("1x"), "1x");
        assert_eq!(upper("_x"), "_x");
        assert_eq!(lower("$X"), "$X");
    }

    #[test]
    fn multibyte_first_char() {
        assert_eq!(upper("élan"), "Élan");
        assert_eq!(lower("Über"), "über");
    }
}
