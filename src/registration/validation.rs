use std::sync::LazyLock;

use regex::Regex;

pub const MIN_PASSWORD_LENGTH: usize = 7;
pub const FIRST_NAME_MAX_LEN: usize = 10;

// Word characters are ASCII only, matching what the backend accepts.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?-u:\w)+([.-]?(?-u:\w)+)*@(?-u:\w)+([.-]?(?-u:\w)+)*(\.(?-u:\w)(?-u:\w)+)+$")
        .expect("email pattern compiles")
});

/// Basic `local@domain.tld` shape check, run on every keystroke.
pub fn is_email_valid(text: &str) -> bool {
    EMAIL_RE.is_match(text)
}

/// A password is secure when it has at least [`MIN_PASSWORD_LENGTH`]
/// characters and mixes letters with digits.
pub fn is_password_secure(text: &str) -> bool {
    if text.chars().count() < MIN_PASSWORD_LENGTH {
        return false;
    }
    text.chars().any(|c| c.is_ascii_alphabetic()) && text.chars().any(|c| c.is_ascii_digit())
}

/// Applies the first-name input limit.
pub fn clamp_first_name(text: &str) -> String {
    text.chars().take(FIRST_NAME_MAX_LEN).collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn accepts_common_addresses() {
        assert!(is_email_valid("user.name@example.com"));
        assert!(is_email_valid("a@b.co"));
        assert!(is_email_valid("first-last@mail.example.org"));
        assert!(is_email_valid("x_y@sub-domain.co.uk"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_email_valid("not-an-email"));
        assert!(!is_email_valid("a@b"));
        assert!(!is_email_valid("a@b.c"));
        assert!(!is_email_valid("@example.com"));
        assert!(!is_email_valid("user@.com"));
        assert!(!is_email_valid(""));
        assert!(!is_email_valid("user name@example.com"));
    }

    #[test]
    fn separators_must_sit_between_word_runs() {
        assert!(!is_email_valid(".user@example.com"));
        assert!(!is_email_valid("user.@example.com"));
        assert!(!is_email_valid("user..name@example.com"));
        assert!(!is_email_valid("user@example..com"));
    }

    #[test]
    fn non_ascii_word_characters_are_rejected() {
        assert!(!is_email_valid("jürgen@example.com"));
    }

    #[test]
    fn password_examples() {
        assert!(is_password_secure("abcd123"));
        assert!(!is_password_secure("1234567"));
        assert!(!is_password_secure("abcdefg"));
        assert!(!is_password_secure("ab12"));
    }

    #[test]
    fn single_class_passwords_are_rejected() {
        assert!(!is_password_secure("ABCDEFGHIJ"));
        assert!(!is_password_secure("0000000000000"));
        assert!(!is_password_secure("!!!!!!!!"));
    }

    #[test]
    fn letter_case_does_not_matter() {
        assert!(is_password_secure("ABCDEF1"));
        assert!(is_password_secure("1234567x"));
        assert!(is_password_secure("p@ss w0rd"));
    }

    #[test]
    fn length_counts_characters_not_utf16_units() {
        // Six characters, eight UTF-16 code units.
        assert!(!is_password_secure("ab12😀😀"));
        assert!(is_password_secure("ab12😀😀x"));
        assert_eq!(clamp_first_name("😀😀😀😀😀😀😀😀😀😀😀"), "😀".repeat(FIRST_NAME_MAX_LEN));
    }

    #[test]
    fn first_name_is_clamped_by_characters() {
        assert_eq!(clamp_first_name("Maximilianus"), "Maximilian");
        assert_eq!(clamp_first_name("Zoë"), "Zoë");
        assert_eq!(clamp_first_name("ÅÅÅÅÅÅÅÅÅÅÅ").chars().count(), FIRST_NAME_MAX_LEN);
    }

    proptest! {
        #[test]
        fn short_passwords_are_never_secure(s in "[a-zA-Z0-9!@#]{0,6}") {
            prop_assert!(!is_password_secure(&s));
        }

        #[test]
        fn letters_only_passwords_are_rejected(s in "[a-zA-Z]{7,24}") {
            prop_assert!(!is_password_secure(&s));
        }

        #[test]
        fn digits_only_passwords_are_rejected(s in "[0-9]{7,24}") {
            prop_assert!(!is_password_secure(&s));
        }

        #[test]
        fn mixed_passwords_of_minimum_length_are_secure(
            head in "[a-zA-Z0-9 !@#]{5,20}",
            letter in "[a-zA-Z]",
            digit in "[0-9]",
            digit_first in any::<bool>(),
        ) {
            let s = if digit_first {
                format!("{digit}{head}{letter}")
            } else {
                format!("{letter}{head}{digit}")
            };
            prop_assert!(is_password_secure(&s));
        }

        #[test]
        fn well_formed_addresses_are_accepted(
            s in "[a-z0-9_]{1,10}([.-][a-z0-9_]{1,6})?@[a-z0-9]{1,10}(-[a-z0-9]{1,6})?\\.[a-z]{2,6}(\\.[a-z]{2,3})?"
        ) {
            prop_assert!(is_email_valid(&s));
        }

        #[test]
        fn addresses_without_at_sign_are_rejected(s in "[a-z0-9_.-]{0,30}") {
            prop_assert!(!is_email_valid(&s));
        }

        #[test]
        fn single_letter_top_level_domains_are_rejected(
            local in "[a-z0-9]{1,10}",
            domain in "[a-z0-9]{1,10}",
            tld in "[a-z]",
        ) {
            let s = format!("{local}@{domain}.{tld}");
            prop_assert!(!is_email_valid(&s));
        }

        #[test]
        fn first_name_clamp_keeps_a_prefix(s in "\\PC{0,30}") {
            let clamped = clamp_first_name(&s);
            prop_assert!(s.starts_with(&clamped));
            prop_assert_eq!(clamped.chars().count(), s.chars().count().min(FIRST_NAME_MAX_LEN));
        }
    }
}
