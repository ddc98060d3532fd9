//! Where a surface takes its bitmap from.

use std::fmt;
use std::path::PathBuf;

use super::constants::IMAGE_RESOURCE_CATEGORY;

/// Image selected for a surface: a file dropped by the user or one of the
/// numbered images built into the executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    File(PathBuf),
    Resource(u32),
}

impl ImageSource {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        ImageSource::File(path.into())
    }

    /// Logical resource name and category, `None` for files.
    pub fn resource_id(&self) -> Option<(String, &'static str)> {
        match self {
            ImageSource::File(_) => None,
            ImageSource::Resource(number) => {
                Some((resource_name(*number), IMAGE_RESOURCE_CATEGORY))
            }
        }
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::File(path) => write!(f, "{}", path.display()),
            ImageSource::Resource(number) => {
                write!(f, "{} ({})", resource_name(*number), IMAGE_RESOURCE_CATEGORY)
            }
        }
    }
}

/// Name of a built-in image: `Image01`, `Image02`, ...
pub fn resource_name(number: u32) -> String {
    format!("Image{:02}", number)
}

/// Truncate a dropped path (UTF-16 units, possibly NUL padded) to the bounded
/// length Windows hands us and convert it to a `PathBuf`.
///
/// Returns `None` for an empty path.
pub fn dropped_path_from_wide(buffer: &[u16], max_len: usize) -> Option<PathBuf> {
    let bounded = &buffer[..buffer.len().min(max_len.saturating_sub(1))];
    let len = bounded.iter().position(|&c| c == 0).unwrap_or(bounded.len());
    if len == 0 {
        return None;
    }
    Some(PathBuf::from(String::from_utf16_lossy(&bounded[..len])))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_names_are_zero_padded() {
        assert_eq!(resource_name(1), "Image01");
        assert_eq!(resource_name(12), "Image12");
    }

    #[test]
    fn resource_id_only_for_builtins() {
        assert_eq!(
            ImageSource::Resource(2).resource_id(),
            Some(("Image02".to_string(), "Image"))
        );
        assert_eq!(ImageSource::file("a.png").resource_id(), None);
    }

    #[test]
    fn dropped_path_stops_at_terminator() {
        let mut wide: Vec<u16> = "C:\\img\\photo.jpg".encode_utf16().collect();
        wide.extend([0, 0, 0]);
        assert_eq!(
            dropped_path_from_wide(&wide, 260),
            Some(PathBuf::from("C:\\img\\photo.jpg"))
        );
    }

    #[test]
    fn dropped_path_is_bounded() {
        let wide: Vec<u16> = "abcdef".encode_utf16().collect();
        assert_eq!(dropped_path_from_wide(&wide, 4), Some(PathBuf::from("abc")));
    }

    #[test]
    fn empty_drop_is_ignored() {
        assert_eq!(dropped_path_from_wide(&[0, 0], 260), None);
        assert_eq!(dropped_path_from_wide(&[], 260), None);
    }
}
