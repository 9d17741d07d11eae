use log::debug;

use super::{Navigation, NavigationMode, SessionHistory, document_pathname, split_origin};

/// Navigation through the document location path, updated with non-reloading history entries.
///
/// ## Example
/// ```rust
/// use pageshell::navigation::{HistoryNavigation, Navigation};
///
/// let mut navigation = HistoryNavigation::new("https://example.com/");
/// navigation.navigate("/second-page");
///
/// assert_eq!(navigation.current_path(), "/second-page");
/// assert_eq!(navigation.location(), "https://example.com/second-page");
/// ```
#[derive(Debug, Clone)]
pub struct HistoryNavigation {
    origin: String,
    history: SessionHistory,
}

impl HistoryNavigation {
    /// Starts at `location`, either a full URL or a path. Query and fragment are ignored,
    /// and so are a trailing `/` or `index.html`.
    pub fn new(location: &str) -> Self {
        let (origin, rest) = split_origin(location);

        Self {
            origin: origin.to_string(),
            history: SessionHistory::new(document_pathname(rest)),
        }
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }
}

impl Default for HistoryNavigation {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Navigation for HistoryNavigation {
    fn mode(&self) -> NavigationMode {
        NavigationMode::History
    }

    fn current_path(&self) -> &str {
        self.history.current()
    }

    fn navigate(&mut self, path: &str) {
        let path = document_pathname(path);

        if path == self.history.current() {
            debug!(target: "navigation", "replace {}", path);
            self.history.replace(path);
        } else {
            debug!(target: "navigation", "push {} -> {}", self.history.current(), path);
            self.history.push(path);
        }
    }

    fn back(&mut self) -> bool {
        self.history.back()
    }

    fn forward(&mut self) -> bool {
        self.history.forward()
    }

    fn href(&self, path: &str) -> String {
        path.to_string()
    }

    fn location(&self) -> String {
        format!("{}{}", self.origin, self.history.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_path_from_url() {
        let navigation = HistoryNavigation::new("https://example.com/another-page?ref=nav#top");

        assert_eq!(navigation.current_path(), "/another-page");
        assert_eq!(navigation.location(), "https://example.com/another-page");
    }

    #[test]
    fn test_initial_path_from_served_directory() {
        let navigation = HistoryNavigation::new("https://example.com/second-page/");
        assert_eq!(navigation.current_path(), "/second-page");
        assert_eq!(navigation.location(), "https://example.com/second-page");

        let navigation = HistoryNavigation::new("https://example.com/another-page/index.html");
        assert_eq!(navigation.current_path(), "/another-page");

        assert_eq!(HistoryNavigation::new("https://example.com/index.html").current_path(), "/");
    }

    #[test]
    fn test_initial_path_defaults_to_root() {
        assert_eq!(HistoryNavigation::new("https://example.com").current_path(), "/");
        assert_eq!(HistoryNavigation::new("").current_path(), "/");
        assert_eq!(HistoryNavigation::default().current_path(), "/");
    }

    #[test]
    fn test_navigate_pushes_entries() {
        let mut navigation = HistoryNavigation::new("/");
        navigation.navigate("/second-page");
        navigation.navigate("/another-page");

        assert_eq!(navigation.current_path(), "/another-page");
        assert_eq!(navigation.history().len(), 3);
    }

    #[test]
    fn test_navigate_to_current_path_replaces() {
        let mut navigation = HistoryNavigation::new("/second-page");
        navigation.navigate("/second-page");

        assert_eq!(navigation.history().len(), 1);
        assert!(!navigation.back());
    }

    #[test]
    fn test_back_and_forward() {
        let mut navigation = HistoryNavigation::new("/");
        navigation.navigate("/second-page");

        assert!(navigation.back());
        assert_eq!(navigation.current_path(), "/");
        assert!(navigation.forward());
        assert_eq!(navigation.current_path(), "/second-page");
        assert!(!navigation.forward());
    }

    #[test]
    fn test_href_is_the_path() {
        let navigation = HistoryNavigation::default();

        assert_eq!(navigation.href("/another-page"), "/another-page");
    }
}
