use log::debug;

use super::{Navigation, NavigationMode, SessionHistory, parse_pathname};

/// Navigation through the URL fragment: `https://example.com/#/second-page` renders `/second-page`.
///
/// Only the fragment is ever rewritten, so the document itself can be served from a single file.
///
/// ## Example
/// ```rust
/// use pageshell::navigation::{FragmentNavigation, Navigation};
///
/// let mut navigation = FragmentNavigation::new("https://example.com/");
/// assert_eq!(navigation.current_path(), "/");
///
/// navigation.navigate("/another-page");
/// assert_eq!(navigation.location(), "https://example.com/#/another-page");
/// ```
#[derive(Debug, Clone)]
pub struct FragmentNavigation {
    document: String,
    history: SessionHistory,
}

impl FragmentNavigation {
    /// Starts at `location`. Everything before `#` is the document and is never changed.
    pub fn new(location: &str) -> Self {
        let (document, fragment) = match location.split_once('#') {
            Some((document, fragment)) => (document, fragment),
            None => (location, ""),
        };

        Self {
            document: document.to_string(),
            history: SessionHistory::new(parse_pathname(fragment)),
        }
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }
}

impl Default for FragmentNavigation {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Navigation for FragmentNavigation {
    fn mode(&self) -> NavigationMode {
        NavigationMode::Fragment
    }

    fn current_path(&self) -> &str {
        self.history.current()
    }

    fn navigate(&mut self, path: &str) {
        let path = parse_pathname(path);

        if path == self.history.current() {
            debug!(target: "navigation", "replace #{}", path);
            self.history.replace(path);
        } else {
            debug!(target: "navigation", "push #{} -> #{}", self.history.current(), path);
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
        format!("#{}", path)
    }

    fn location(&self) -> String {
        format!("{}#{}", self.document, self.history.current())
    }
}
