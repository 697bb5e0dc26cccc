//! Name validation utilities
//!
//! Shared character rules for directory and file names.

/// Characters that can never appear in a single path entry name.
#[cfg(not(windows))]
const INVALID_NAME_CHARS: &[char] = &['\0', '/', '\\'];

#[cfg(windows)]
const INVALID_NAME_CHARS: &[char] = &['\0', '/', '\\', '"', '<', '>', '|', ':', '*', '?'];

/// Returns true if `c` is not allowed in a file or directory name.
pub fn is_invalid_name_char(c: char) -> bool {
    if cfg!(windows) && c.is_ascii_control() && c != '\u{7f}' {
        return true;
    }
    INVALID_NAME_CHARS.contains(&c)
}

/// Returns true if `name` contains any disallowed character
pub fn contains_invalid_chars(name: &str) -> bool {
    name.chars().any(is_invalid_name_char)
}

/// Validates a single directory entry name: non-empty, not a dot entry,
/// and free of disallowed characters.
pub fn is_valid_entry_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !contains_invalid_chars(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_null_and_separators() {
        assert!(contains_invalid_chars("Test Product 1\0"));
        assert!(contains_invalid_chars("a/b"));
        assert!(contains_invalid_chars("a\\b"));
        assert!(!contains_invalid_chars("Test Company 1"));
    }

    #[test]
    fn test_entry_names() {
        assert!(is_valid_entry_name("Test.txt"));
        assert!(is_valid_entry_name(".hidden"));
        assert!(is_valid_entry_name("..."));
        assert!(!is_valid_entry_name(""));
        assert!(!is_valid_entry_name("."));
        assert!(!is_valid_entry_name(".."));
        assert!(!is_valid_entry_name("bad\0name"));
    }

    #[cfg(windows)]
    #[test]
    fn test_windows_reserved_symbols() {
        assert!(contains_invalid_chars("a:b"));
        assert!(contains_invalid_chars("what?"));
        assert!(contains_invalid_chars("tab\tname"));
    }
}
