//! Project and directory name validation
//!
//! Names typed after `im` and `mkdir` become path components directly
//! beneath the session root, so only letters, digits and underscores are
//! accepted.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Pattern matching the first character that is not allowed in a name
pub const DISALLOWED_NAME_PATTERN: &str = r"[^a-zA-Z0-9_]";

static DISALLOWED_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(DISALLOWED_NAME_PATTERN).expect("name pattern compiles"));

/// Validate a project or directory name
///
/// The empty string passes; callers decide what an empty name means.
pub fn validate_name(name: &str) -> Result<()> {
    if DISALLOWED_NAME.is_match(name) {
        debug!("Rejected name '{}'", name);
        return Err(Error::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Check whether a name passes [`validate_name`]
pub fn is_valid_name(name: &str) -> bool {
    validate_name(name).is_ok()
}
