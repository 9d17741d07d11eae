//! The root container: resolves the current path and renders the navigation list and the matched view into a [`Mount`].
use maud::{Markup, html};

use crate::errors::ShellError;
use crate::nav::{NavLink, NavList};
use crate::navigation::Navigation;
use crate::route::{FullRoute, PageContext};
use crate::routing::RouteTable;

/// The single rendering surface of a shell. Every render replaces its previous content.
#[derive(Debug, Default)]
pub struct Mount {
    content: Option<Markup>,
    renders: usize,
}

impl Mount {
    pub fn replace(&mut self, content: Markup) -> &Markup {
        self.renders += 1;
        self.content.insert(content)
    }

    /// The current content, `None` before the first render.
    pub fn content(&self) -> Option<&Markup> {
        self.content.as_ref()
    }

    pub fn renders(&self) -> usize {
        self.renders
    }
}

/// Installs a navigation strategy and renders the view matching its current path.
///
/// ## Example
/// ```rust
/// use pageshell::route::prelude::*;
/// use pageshell::navigation::HistoryNavigation;
/// use pageshell::shell::Shell;
/// use pageshell::{nav, routes};
///
/// #[route("/")]
/// pub struct Home;
///
/// impl Route for Home {
///     fn render(&self, _ctx: &mut PageContext) -> impl Into<RenderResult> {
///         "Home"
///     }
/// }
///
/// let mut shell = Shell::new(routes![Home], nav!["Home" => "/"], HistoryNavigation::new("/")).unwrap();
/// shell.load();
///
/// assert_eq!(shell.active_route(), Some("/"));
/// ```
pub struct Shell<'a, N: Navigation> {
    routes: RouteTable<'a>,
    nav_list: NavList,
    navigation: N,
    mount: Mount,
    loads: usize,
}

impl<'a, N: Navigation> Shell<'a, N> {
    pub fn new(
        routes: &[&'a dyn FullRoute],
        nav_list: NavList,
        navigation: N,
    ) -> Result<Self, ShellError> {
        Ok(Self {
            routes: RouteTable::new(routes)?,
            nav_list,
            navigation,
            mount: Mount::default(),
            loads: 0,
        })
    }

    /// Loads the document: the only operation counted as a full page load.
    pub fn load(&mut self) -> &Markup {
        self.loads += 1;
        self.refresh()
    }

    pub fn navigate(&mut self, path: &str) -> &Markup {
        self.navigation.navigate(path);
        self.refresh()
    }

    /// Activates the link at `index` of the navigation list.
    pub fn activate_link(&mut self, index: usize) -> Result<&Markup, ShellError> {
        self.nav_list.activate(index, &mut self.navigation)?;
        Ok(self.refresh())
    }

    /// Goes back one session history entry. Nothing is re-rendered if there is no previous entry.
    pub fn back(&mut self) -> Option<&Markup> {
        if self.navigation.back() {
            Some(self.refresh())
        } else {
            None
        }
    }

    /// Goes forward one session history entry. Nothing is re-rendered if there is no next entry.
    pub fn forward(&mut self) -> Option<&Markup> {
        if self.navigation.forward() {
            Some(self.refresh())
        } else {
            None
        }
    }

    /// Renders the navigation list followed by the outlet, which holds the matched view or nothing.
    pub fn render(&self) -> Markup {
        let path = self.navigation.current_path();
        let view = self.render_view(path);

        html! {
            (self.nav_list.render(&self.navigation))
            div data-shell-outlet {
                @if let Some(view) = view {
                    (view)
                }
            }
        }
    }

    /// Renders the view bound to `path` on its own, `None` when no route matches.
    pub fn render_view(&self, path: &str) -> Option<Markup> {
        let route = self.routes.resolve(path)?;
        let mut ctx = PageContext::new(path, self.navigation.mode());

        Some(route.build(&mut ctx))
    }

    /// The path of the route matching the current path, if any.
    pub fn active_route(&self) -> Option<&'static str> {
        self.routes
            .resolve(self.navigation.current_path())
            .map(|route| route.route_raw())
    }

    pub fn links(&self) -> &[NavLink] {
        self.nav_list.links()
    }

    pub fn routes(&self) -> &RouteTable<'a> {
        &self.routes
    }

    pub fn navigation(&self) -> &N {
        &self.navigation
    }

    pub fn mount(&self) -> &Mount {
        &self.mount
    }

    /// How many times the document has been loaded.
    pub fn loads(&self) -> usize {
        self.loads
    }

    fn refresh(&mut self) -> &Markup {
        let content = self.render();
        self.mount.replace(content)
    }
}
