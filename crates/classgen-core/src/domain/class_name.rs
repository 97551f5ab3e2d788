//! Class-name classification and normalisation.
//!
//! A class name is legal when every character is an ASCII letter, digit,
//! underscore, or whitespace. Whitespace is tolerated on input but never
//! survives into a [`ClassName`]: it is stripped, not rejected.

use std::fmt;

use crate::domain::error::DomainError;

/// Shown when the candidate name is the empty string.
pub const EMPTY_MESSAGE: &str = "Class name cannot be empty";

/// Shown when the candidate name carries a character outside `[A-Za-z0-9_\s]`.
pub const ILLEGAL_CHARACTERS_MESSAGE: &str =
    "Class names can only contain a-z, A-Z, 0-9, and underscores";

/// Shown when an otherwise legal name contains whitespace.
pub const CONTAINS_SPACES_MESSAGE: &str = "The class name you provided contains spaces";

/// Structural classification of a candidate class name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassNameVerdict {
    Valid,
    Empty,
    IllegalCharacters,
    /// Legal once whitespace is removed.
    ContainsSpaces,
}

impl ClassNameVerdict {
    /// `true` only for [`ClassNameVerdict::Valid`].
    pub fn is_valid(self) -> bool {
        self == Self::Valid
    }

    /// User-facing explanation, `None` for a valid name.
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::Empty => Some(EMPTY_MESSAGE),
            Self::IllegalCharacters => Some(ILLEGAL_CHARACTERS_MESSAGE),
            Self::ContainsSpaces => Some(CONTAINS_SPACES_MESSAGE),
        }
    }
}

impl fmt::Display for ClassNameVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message().unwrap_or("valid"))
    }
}

fn is_legal_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace()
}

/// Classify a candidate class name.
///
/// Illegal characters win over whitespace: `"a b-c"` is
/// [`ClassNameVerdict::IllegalCharacters`].
pub fn validate(name: &str) -> ClassNameVerdict {
    if name.is_empty() {
        return ClassNameVerdict::Empty;
    }
    if !name.chars().all(is_legal_char) {
        return ClassNameVerdict::IllegalCharacters;
    }
    if name.chars().any(char::is_whitespace) {
        return ClassNameVerdict::ContainsSpaces;
    }
    ClassNameVerdict::Valid
}

/// Remove every whitespace character, not just leading and trailing ones.
pub fn strip_spaces(name: &str) -> String {
    name.chars().filter(|c| !c.is_whitespace()).collect()
}

/// A validated, space-free class name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassName(String);

impl ClassName {
    /// Accept `name` only if it is already [`ClassNameVerdict::Valid`].
    pub fn parse(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        match validate(&name) {
            ClassNameVerdict::Valid => Ok(Self(name)),
            verdict => Err(DomainError::InvalidClassName { name, verdict }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ClassName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legal_space_free_names_are_valid() {
        for name in ["Foo", "foo_bar", "_Private", "Vec3", "X", "ALL_CAPS_9"] {
            assert_eq!(validate(name), ClassNameVerdict::Valid, "failed for: {name}");
        }
    }

    #[test]
    fn empty_string_is_empty() {
        assert_eq!(validate(""), ClassNameVerdict::Empty);
    }

    #[test]
    fn illegal_characters_win_over_whitespace() {
        for name in ["my-class", "a b-c", "Foo!", "naïve", "x.y", " $ "] {
            assert_eq!(
                validate(name),
                ClassNameVerdict::IllegalCharacters,
                "failed for: {name}"
            );
        }
    }

    #[test]
    fn whitespace_only_names_contain_spaces() {
        assert_eq!(validate("My Class"), ClassNameVerdict::ContainsSpaces);
        assert_eq!(validate("\tTabbed"), ClassNameVerdict::ContainsSpaces);
        assert_eq!(validate("   "), ClassNameVerdict::ContainsSpaces);
    }

    #[test]
    fn strip_spaces_removes_interior_whitespace() {
        assert_eq!(strip_spaces("My Class"), "MyClass");
        assert_eq!(strip_spaces(" a \t b\nc "), "abc");
    }

    #[test]
    fn strip_spaces_is_idempotent() {
        for s in ["My Class", "  x  y ", "", "plain", "a-b c"] {
            let once = strip_spaces(s);
            assert_eq!(strip_spaces(&once), once);
        }
    }

    #[test]
    fn stripped_contains_spaces_names_become_valid() {
        for s in ["My Class", "a b c", "\tFoo_1 "] {
            assert_eq!(validate(s), ClassNameVerdict::ContainsSpaces);
            assert_eq!(validate(&strip_spaces(s)), ClassNameVerdict::Valid);
        }
    }

    #[test]
    fn parse_rejects_anything_but_valid() {
        assert!(ClassName::parse("Widget").is_ok());
        assert!(matches!(
            ClassName::parse("My Class"),
            Err(DomainError::InvalidClassName {
                verdict: ClassNameVerdict::ContainsSpaces,
                ..
            })
        ));
        assert!(ClassName::parse("").is_err());
    }

    #[test]
    fn verdict_messages() {
        assert_eq!(ClassNameVerdict::Valid.message(), None);
        assert_eq!(ClassNameVerdict::Empty.message(), Some(EMPTY_MESSAGE));
    }
}
