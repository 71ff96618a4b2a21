use log::warn;

pub const WINDOW_WIDTH: u32 = 640;
pub const WINDOW_HEIGHT: u32 = 360;

/// Largest accepted client dimension, the GDI 16-bit coordinate range.
pub const MAX_WINDOW_EXTENT: u32 = 32767;

/// `<width>x<height>` override for the initial client area.
pub const SIZE_ENV_VAR: &str = "FLAGGEN_WINDOW_SIZE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub class_name: &'static str,
    pub title: &'static str,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            class_name: "FlagGenWClass",
            title: "Flag Generator",
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
        }
    }
}

impl WindowConfig {
    pub fn from_env() -> Self {
        Self::with_size_override(std::env::var(SIZE_ENV_VAR).ok().as_deref())
    }

    fn with_size_override(value: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(value) = value {
            match parse_size(value) {
                Some((width, height)) => {
                    config.width = width;
                    config.height = height;
                }
                None => warn!(
                    "ignoring {}={:?}, expected <width>x<height>; using {}x{}",
                    SIZE_ENV_VAR, value, config.width, config.height
                ),
            }
        }
        config
    }
}

/// Parses `640x360` (case-insensitive separator, surrounding whitespace allowed).
pub fn parse_size(value: &str) -> Option<(u32, u32)> {
    let (w, h) = value.trim().split_once(['x', 'X'])?;
    let w: u32 = w.trim().parse().ok()?;
    let h: u32 = h.trim().parse().ok()?;
    if !(1..=MAX_WINDOW_EXTENT).contains(&w) || !(1..=MAX_WINDOW_EXTENT).contains(&h) {
        return None;
    }
    Some((w, h))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sizes() {
        assert_eq!(parse_size("640x360"), Some((640, 360)));
        assert_eq!(parse_size(" 800 X 600 "), Some((800, 600)));
        assert_eq!(parse_size("0x360"), None);
        assert_eq!(parse_size("640"), None);
        assert_eq!(parse_size("wide x tall"), None);
        assert_eq!(parse_size("-1x5"), None);
    }

    #[test]
    fn rejects_sizes_past_gdi_range() {
        assert_eq!(parse_size("32767x32767"), Some((32767, 32767)));
        assert_eq!(parse_size("640x32768"), None);
        assert_eq!(parse_size("2147483647x360"), None);
        assert_eq!(parse_size("640x2147483647"), None);
    }

    #[test_log::test]
    fn override_falls_back_on_garbage() {
        assert_eq!(WindowConfig::with_size_override(None), WindowConfig::default());
        assert_eq!(WindowConfig::with_size_override(Some("nope")), WindowConfig::default());
        let config = WindowConfig::with_size_override(Some("320x200"));
        assert_eq!((config.width, config.height), (320, 200));
        assert_eq!(config.title, "Flag Generator");
    }
}
