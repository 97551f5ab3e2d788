//! File extensions offered for generated headers and sources.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Label of the "no extension" header choice.
pub const NO_EXTENSION_LABEL: &str = "No extension";

/// Header file extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeaderExtension {
    #[default]
    #[serde(rename = ".h")]
    H,
    #[serde(rename = ".hpp")]
    Hpp,
    #[serde(rename = "")]
    None,
}

impl HeaderExtension {
    /// Choices in prompt order.
    pub const ALL: [Self; 3] = [Self::H, Self::Hpp, Self::None];

    /// Literal extension including the dot; empty for [`HeaderExtension::None`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::H => ".h",
            Self::Hpp => ".hpp",
            Self::None => "",
        }
    }

    /// Text shown in a choice list.
    pub fn label(self) -> &'static str {
        match self {
            Self::None => NO_EXTENSION_LABEL,
            other => other.as_str(),
        }
    }

    /// Extension without the leading dot, `None` when there is no extension.
    pub fn suffix(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            other => other.as_str().strip_prefix('.'),
        }
    }
}

impl fmt::Display for HeaderExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for HeaderExtension {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            ".h" | "h" => Ok(Self::H),
            ".hpp" | "hpp" => Ok(Self::Hpp),
            "" | "none" | "no extension" => Ok(Self::None),
            _ => Err(DomainError::UnknownExtension {
                kind: "header",
                value: s.to_string(),
                expected: ".h, .hpp, none",
            }),
        }
    }
}

/// Source file extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceExtension {
    #[default]
    #[serde(rename = ".cpp")]
    Cpp,
    #[serde(rename = ".cc")]
    Cc,
    #[serde(rename = ".cxx")]
    Cxx,
}

impl SourceExtension {
    /// Choices in prompt order.
    pub const ALL: [Self; 3] = [Self::Cpp, Self::Cc, Self::Cxx];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cpp => ".cpp",
            Self::Cc => ".cc",
            Self::Cxx => ".cxx",
        }
    }
}

impl fmt::Display for SourceExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceExtension {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            ".cpp" | "cpp" => Ok(Self::Cpp),
            ".cc" | "cc" => Ok(Self::Cc),
            ".cxx" | "cxx" => Ok(Self::Cxx),
            _ => Err(DomainError::UnknownExtension {
                kind: "source",
                value: s.to_string(),
                expected: ".cpp, .cc, .cxx",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_suffix_drops_the_dot() {
        assert_eq!(HeaderExtension::H.suffix(), Some("h"));
        assert_eq!(HeaderExtension::Hpp.suffix(), Some("hpp"));
        assert_eq!(HeaderExtension::None.suffix(), None);
    }

    #[test]
    fn header_parses_with_or_without_dot() {
        assert_eq!("h".parse::<HeaderExtension>().unwrap(), HeaderExtension::H);
        assert_eq!(".HPP".parse::<HeaderExtension>().unwrap(), HeaderExtension::Hpp);
        assert_eq!(
            "No extension".parse::<HeaderExtension>().unwrap(),
            HeaderExtension::None
        );
        assert!(".hxx".parse::<HeaderExtension>().is_err());
    }

    #[test]
    fn source_parses_known_extensions() {
        assert_eq!("cc".parse::<SourceExtension>().unwrap(), SourceExtension::Cc);
        assert_eq!(".cxx".parse::<SourceExtension>().unwrap(), SourceExtension::Cxx);
        assert!(".c".parse::<SourceExtension>().is_err());
    }

    #[test]
    fn labels_match_prompt_choices() {
        let labels: Vec<_> = HeaderExtension::ALL.iter().map(|e| e.label()).collect();
        assert_eq!(labels, [".h", ".hpp", "No extension"]);
    }
}
