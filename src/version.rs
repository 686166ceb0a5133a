//! Version information for sketchscape

/// The version of sketchscape, set at build time
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of the application
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

/// Name and version, e.g. for the TUI title bar
pub fn full_version() -> String {
    format!("{} v{}", APP_NAME, VERSION)
}

/// HTTP user agent sent to the retrieval endpoint
pub fn user_agent() -> String {
    format!("{}/{}", APP_NAME, VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constants() {
        assert!(!VERSION.is_empty());
        assert_eq!(APP_NAME, "sketchscape");
    }

    #[test]
    fn test_version_strings() {
        let full = full_version();
        assert!(full.contains(APP_NAME));
        assert!(full.contains(VERSION));
        assert_eq!(user_agent(), format!("sketchscape/{}", VERSION));
    }
}
