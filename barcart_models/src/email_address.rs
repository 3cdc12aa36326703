use std::sync::LazyLock;

use nutype::nutype;
use regex::Regex;

/// `local@domain` with a dotted domain part, matching what the booking form
/// accepts. Intentionally permissive beyond that.
pub static EMAIL_ADDRESS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

#[nutype(
    sanitize(trim),
    validate(regex = EMAIL_ADDRESS_REGEX),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, FromStr, Deref, AsRef, Serialize, Deserialize)
)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn as_str(&self) -> &str {
        self
    }
}
