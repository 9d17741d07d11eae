//! Navigation strategies: where the current path comes from and how it changes.
//!
//! A [`Shell`](crate::shell::Shell) reads the current path from its strategy to pick the view to render, and
//! asks the strategy to move whenever a link is activated. Two strategies are available:
//! - [`HistoryNavigation`], where the path is the document location path, updated without reloading the page.
//! - [`FragmentNavigation`], where the path lives in the URL fragment (`/#/second-page`), which works without any server path configuration.
use std::fmt;

mod fragment;
mod history;

pub use fragment::FragmentNavigation;
pub use history::HistoryNavigation;

/// Which navigation strategy is in use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavigationMode {
    /// Paths are document location paths, e.g. `https://example.com/second-page`.
    #[default]
    History,
    /// Paths are stored in the URL fragment, e.g. `https://example.com/#/second-page`.
    Fragment,
}

impl NavigationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavigationMode::History => "history",
            NavigationMode::Fragment => "fragment",
        }
    }
}

impl fmt::Display for NavigationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Determines and updates the current path of a shell.
pub trait Navigation {
    fn mode(&self) -> NavigationMode;

    /// The path the shell should currently render, always starting with `/`.
    fn current_path(&self) -> &str;

    /// Moves to `path` without reloading the document.
    ///
    /// Navigating to the path that is already current replaces the current session history entry instead of adding one.
    fn navigate(&mut self, path: &str);

    /// Moves one entry back in the session history. Returns `false` if already at the first entry.
    fn back(&mut self) -> bool;

    /// Moves one entry forward in the session history. Returns `false` if already at the last entry.
    fn forward(&mut self) -> bool;

    /// The `href` to emit for a link targeting `path`.
    fn href(&self, path: &str) -> String;

    /// The full document location after the last update.
    fn location(&self) -> String;
}

impl<N: Navigation + ?Sized> Navigation for Box<N> {
    fn mode(&self) -> NavigationMode {
        (**self).mode()
    }

    fn current_path(&self) -> &str {
        (**self).current_path()
    }

    fn navigate(&mut self, path: &str) {
        (**self).navigate(path)
    }

    fn back(&mut self) -> bool {
        (**self).back()
    }

    fn forward(&mut self) -> bool {
        (**self).forward()
    }

    fn href(&self, path: &str) -> String {
        (**self).href(path)
    }

    fn location(&self) -> String {
        (**self).location()
    }
}

/// Creates the strategy matching `mode`, starting at `location`.
pub fn from_mode(mode: NavigationMode, location: &str) -> Box<dyn Navigation + Send + Sync> {
    match mode {
        NavigationMode::History => Box::new(HistoryNavigation::new(location)),
        NavigationMode::Fragment => Box::new(FragmentNavigation::new(location)),
    }
}

/// Ordered list of visited paths with a cursor, as kept by a browser for back and forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionHistory {
    entries: Vec<String>,
    index: usize,
}

impl SessionHistory {
    pub fn new(initial: String) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
        }
    }

    pub fn current(&self) -> &str {
        &self.entries[self.index]
    }

    /// Adds `entry` after the cursor, dropping any forward entries.
    pub fn push(&mut self, entry: String) {
        self.entries.truncate(self.index + 1);
        self.entries.push(entry);
        self.index += 1;
    }

    pub fn replace(&mut self, entry: String) {
        self.entries[self.index] = entry;
    }

    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }

        self.index -= 1;
        true
    }

    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }

        self.index += 1;
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Splits a location into its document part (scheme and authority, if any) and the rest, starting at the path.
///
/// `https://example.com/a?b#c` gives `("https://example.com", "/a?b#c")`, `/a#c` gives `("", "/a#c")`.
pub(crate) fn split_origin(location: &str) -> (&str, &str) {
    let Some(scheme_end) = location.find("://") else {
        return ("", location);
    };

    let authority_start = scheme_end + 3;
    let rest_start = location[authority_start..]
        .find(['/', '?', '#'])
        .map(|pos| authority_start + pos)
        .unwrap_or(location.len());

    location.split_at(rest_start)
}

/// Extracts the pathname of a path-relative reference: everything before `?` or `#`, `/` when empty.
pub(crate) fn parse_pathname(reference: &str) -> String {
    let end = reference.find(['?', '#']).unwrap_or(reference.len());
    let pathname = &reference[..end];

    if pathname.is_empty() {
        "/".to_string()
    } else if pathname.starts_with('/') {
        pathname.to_string()
    } else {
        format!("/{}", pathname)
    }
}

/// Pathname of a served document, as seen by the history strategy.
///
/// Static hosts serve `second-page/index.html` at `/second-page/` or `/second-page/index.html`,
/// both of which map back to `/second-page`.
pub(crate) fn document_pathname(reference: &str) -> String {
    let pathname = parse_pathname(reference);
    let pathname = pathname.strip_suffix("/index.html").unwrap_or(&pathname);

    match pathname.trim_end_matches('/') {
        "" => "/".to_string(),
        trimmed => trimmed.to_string(),
    }
}
