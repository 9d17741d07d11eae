//! The navigation list rendered above every view.
use maud::{Markup, html};

use crate::errors::NavigationError;
use crate::navigation::Navigation;

/// A labeled link to a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

/// Ordered, static list of links. Usually built with the [`nav!`](crate::nav) macro.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavList {
    links: Vec<NavLink>,
}

impl NavList {
    pub fn new(links: Vec<NavLink>) -> Self {
        Self { links }
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Renders every link, in order, with targets suited to `navigation`.
    pub fn render<N: Navigation + ?Sized>(&self, navigation: &N) -> Markup {
        html! {
            nav {
                ul {
                    @for link in &self.links {
                        li {
                            a href=(navigation.href(link.path)) data-shell-link=(link.path) { (link.label) }
                        }
                    }
                }
            }
        }
    }

    /// Activates the link at `index`, requesting navigation to its path.
    pub fn activate<N: Navigation + ?Sized>(
        &self,
        index: usize,
        navigation: &mut N,
    ) -> Result<&NavLink, NavigationError> {
        let link = self
            .links
            .get(index)
            .ok_or(NavigationError::LinkOutOfRange {
                index,
                len: self.links.len(),
            })?;

        navigation.navigate(link.path);

        Ok(link)
    }
}

impl FromIterator<NavLink> for NavList {
    fn from_iter<I: IntoIterator<Item = NavLink>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{FragmentNavigation, HistoryNavigation};

    fn links() -> NavList {
        crate::nav![
            "Home" => "/",
            "Second Page" => "/second-page"
        ]
    }

    #[test]
    fn test_render_history_links() {
        let markup = links().render(&HistoryNavigation::default()).into_string();

        assert_eq!(
            markup,
            "<nav><ul>\
             <li><a href=\"/\" data-shell-link=\"/\">Home</a></li>\
             <li><a href=\"/second-page\" data-shell-link=\"/second-page\">Second Page</a></li>\
             </ul></nav>"
        );
    }

    #[test]
    fn test_render_fragment_links() {
        let markup = links().render(&FragmentNavigation::default()).into_string();

        assert!(markup.contains("href=\"#/second-page\""));
        assert!(markup.contains("href=\"#/\""));
    }

    #[test]
    fn test_activate_navigates() {
        let mut navigation = HistoryNavigation::default();
        let link = *links().activate(1, &mut navigation).unwrap();

        assert_eq!(link.label, "Second Page");
        assert_eq!(navigation.current_path(), "/second-page");
    }

    #[test]
    fn test_activate_out_of_range() {
        let mut navigation = HistoryNavigation::default();

        assert_eq!(
            links().activate(2, &mut navigation).err(),
            Some(NavigationError::LinkOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(navigation.current_path(), "/");
    }
}
