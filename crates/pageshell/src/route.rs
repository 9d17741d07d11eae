//! Core traits and structs to define the views of your page shell.
//!
//! Every view must implement the [`Route`] trait and be bound to a path with the [`route`](prelude::route) attribute. Views can then be passed to a [`Shell`](crate::shell::Shell) or to [`mount()`](crate::mount), through the [`routes!`](crate::routes) macro.
use maud::{Markup, Render};

use crate::navigation::NavigationMode;

/// The result of a view render, either markup or plain text.
///
/// Typically used through the [`Into<RenderResult>`](std::convert::Into) implementations for common types.
/// End users should rarely need to interact with this enum directly.
///
/// ## Example
/// ```rust
/// use pageshell::route::prelude::*;
///
/// #[route("/")]
/// pub struct Index;
///
/// impl Route for Index {
///   fn render(&self, _ctx: &mut PageContext) -> impl Into<RenderResult> {
///     "Hello, world!"
///   }
/// }
/// ```
#[derive(Debug, Clone)]
pub enum RenderResult {
    /// Markup inserted as-is into the outlet.
    Html(Markup),
    /// Text inserted escaped into the outlet.
    Text(String),
}

impl From<String> for RenderResult {
    fn from(val: String) -> Self {
        RenderResult::Text(val)
    }
}

impl From<&str> for RenderResult {
    fn from(val: &str) -> Self {
        RenderResult::Text(val.to_string())
    }
}

impl Render for RenderResult {
    fn render_to(&self, buffer: &mut String) {
        match self {
            RenderResult::Html(markup) => markup.render_to(buffer),
            RenderResult::Text(text) => text.render_to(buffer),
        }
    }
}

/// Gives a [`Route`] implementation access to where and how it is being rendered.
pub struct PageContext<'a> {
    /// The path being rendered, e.g. `/second-page`.
    pub current_path: &'a str,
    /// The navigation strategy installed in the shell.
    pub navigation: NavigationMode,
}

impl<'a> PageContext<'a> {
    pub fn new(current_path: &'a str, navigation: NavigationMode) -> Self {
        Self {
            current_path,
            navigation,
        }
    }
}

/// Must be implemented for every view of your page shell.
///
/// Views are stateless: rendering the same view twice produces the same output.
///
/// ## Example
/// ```rust
/// use pageshell::route::prelude::*;
/// use maud::html;
///
/// #[route("/second-page")]
/// pub struct SecondPage;
///
/// impl Route for SecondPage {
///    fn render(&self, _ctx: &mut PageContext) -> impl Into<RenderResult> {
///       html! { h1 { "Second Page" } }
///    }
/// }
/// ```
pub trait Route {
    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult>;
}

#[doc(hidden)]
/// Used internally by pageshell and should not be implemented by the user.
/// We expose it because [`pageshell_macros::route`] implements it for the user behind the scenes.
pub trait InternalRoute {
    fn route_raw(&self) -> &'static str;
}

/// Object-safe view of a route, implemented by [`pageshell_macros::route`].
///
/// This is the type stored in a [`RouteTable`](crate::routing::RouteTable).
pub trait FullRoute: InternalRoute + Sync + Send {
    #[doc(hidden)]
    fn render_internal(&self, ctx: &mut PageContext) -> RenderResult;

    fn build(&self, ctx: &mut PageContext) -> Markup {
        self.render_internal(ctx).render()
    }
}

pub mod prelude {
    //! Re-exports of the most commonly used types and traits for defining views.
    //!
    //! This module is meant to be glob imported in your views files.
    //!
    //! ## Example
    //! ```rust
    //! use pageshell::route::prelude::*;
    //! ```
    pub use super::{FullRoute, PageContext, RenderResult, Route};
    pub use crate::navigation::NavigationMode;
    pub use pageshell_macros::route;
}
