//! Codec for the persisted theme flag.

/// Key holding the dark-mode flag.
pub const DARK_MODE_KEY: &str = "isDarkMode";

/// Reads the flag. Only the exact string `"true"` is dark; anything else,
/// including absence, is light.
pub fn decode(raw: Option<&str>) -> bool {
	raw == Some("true")
}

/// Writes the flag as `"true"` or `"false"`.
pub fn encode(dark: bool) -> String {
	dark.to_string()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_exact_true_is_dark() {
		assert!(decode(Some("true")));
		assert!(!decode(Some("false")));
		assert!(!decode(Some("TRUE")));
		assert!(!decode(Some(" true")));
		assert!(!decode(Some("1")));
		assert!(!decode(None));
	}

	#[test]
	fn encodes_plain_booleans() {
		assert_eq!(encode(true), "true");
		assert_eq!(encode(false), "false");
	}
}
