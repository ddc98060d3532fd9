//! Images compiled into the executable, looked up by resource name and
//! category.

use super::constants::IMAGE_RESOURCE_CATEGORY;

static IMAGES: &[(&str, &str, &[u8])] = &[
    (
        "Image01",
        IMAGE_RESOURCE_CATEGORY,
        include_bytes!("../../resources/images/image01.png"),
    ),
    (
        "Image02",
        IMAGE_RESOURCE_CATEGORY,
        include_bytes!("../../resources/images/image02.png"),
    ),
];

/// Encoded bytes of a built-in resource. Names compare case-insensitively,
/// like Win32 resource names.
pub fn find(name: &str, category: &str) -> Option<&'static [u8]> {
    IMAGES
        .iter()
        .find(|(n, c, _)| n.eq_ignore_ascii_case(name) && c.eq_ignore_ascii_case(category))
        .map(|(_, _, bytes)| *bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

    #[test]
    fn builtins_are_png() {
        for (name, category, _) in IMAGES {
            let bytes = find(name, category).expect("listed image resolves");
            assert!(bytes.starts_with(PNG_SIGNATURE), "{name} is not a PNG");
        }
    }

    #[test]
    fn lookup_ignores_case() {
        assert!(find("image01", "IMAGE").is_some());
    }

    #[test]
    fn unknown_names_and_categories_miss() {
        assert!(find("Image03", "Image").is_none());
        assert!(find("Image01", "Icon").is_none());
    }
}
