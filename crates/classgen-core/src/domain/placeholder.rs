//! Placeholder tokens understood by the class templates.

use crate::domain::extension::HeaderExtension;

/// Include-guard identifier, header only.
pub const IDENTIFIER_TOKEN: &str = "%identifier%";
/// Class name, header and source.
pub const CLASS_NAME_TOKEN: &str = "%className%";
/// Header extension as written in the source's `#include`.
pub const HEADER_EXT_TOKEN: &str = "%headerExt%";

/// Include-guard macro name for a class.
///
/// `Foo` + `.h` gives `FOO_H`; without a header extension the suffix is
/// omitted and `Foo` gives `FOO`.
pub fn derive_guard_token(class_name: &str, header_ext: HeaderExtension) -> String {
    let mut token = class_name.to_uppercase();
    if let Some(suffix) = header_ext.suffix() {
        token.push('_');
        token.push_str(&suffix.to_uppercase());
    }
    token
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_appends_uppercased_extension() {
        assert_eq!(derive_guard_token("Foo", HeaderExtension::H), "FOO_H");
        assert_eq!(derive_guard_token("Bar", HeaderExtension::Hpp), "BAR_HPP");
    }

    #[test]
    fn guard_without_extension_has_no_suffix() {
        assert_eq!(derive_guard_token("Foo", HeaderExtension::None), "FOO");
    }

    #[test]
    fn guard_from_stripped_name() {
        let name = crate::domain::class_name::strip_spaces("My Class");
        assert_eq!(derive_guard_token(&name, HeaderExtension::H), "MYCLASS_H");
    }

    #[test]
    fn guard_keeps_underscores_and_digits() {
        assert_eq!(derive_guard_token("vec3_f", HeaderExtension::H), "VEC3_F_H");
    }
}
