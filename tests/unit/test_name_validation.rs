//! Unit tests for project name validation
//!
//! Names become path components beneath the root, so anything that could
//! address another location must be refused.

use texshell::validation::{is_valid_name, validate_name};
use texshell::Error;

#[cfg(test)]
mod name_validation_tests {
    use super::*;

    #[test]
    fn test_word_names_accepted() {
        for name in ["thesis", "Proj_2", "a", "_", "2024"] {
            assert!(validate_name(name).is_ok(), "{name} should pass");
        }
    }

    #[test]
    fn test_empty_name_passes() {
        assert!(is_valid_name(""));
    }

    #[test]
    fn test_path_traversal_rejected() {
        for name in ["..", "../etc", "a/b", "a\\b", "~", "/abs"] {
            assert!(!is_valid_name(name), "{name} should fail");
        }
    }

    #[test]
    fn test_punctuation_and_spaces_rejected() {
        for name in ["my thesis", "a.b", "a-b", "a|b", "a:b", "x*", "q?", "tab\there"] {
            assert!(!is_valid_name(name), "{name:?} should fail");
        }
    }

    #[test]
    fn test_non_ascii_rejected() {
        assert!(!is_valid_name("práce"));
    }

    #[test]
    fn test_error_names_the_input() {
        match validate_name("bad.name") {
            Err(Error::InvalidName { name }) => assert_eq!(name, "bad.name"),
            other => panic!("unexpected result: {:?}", other),
        }
        let message = validate_name("x y").unwrap_err().to_string();
        assert!(message.starts_with("Invalid name 'x y'"));
        assert!(message.ends_with("are disallowed!"));
    }
}
