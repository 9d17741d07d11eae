#![cfg_attr(docsrs, feature(doc_cfg))]
//! A page shell: a navigation list above a single outlet, rendering the view bound to the current path.
//!
//! Views are declared with [`route::prelude::route`], collected in a [`routing::RouteTable`], and rendered by a
//! [`shell::Shell`] under a [`navigation::Navigation`] strategy, either history-based or fragment-based.
//! [`mount()`] exports the shell as static documents which keep routing client-side, without reloads.

// Needed so `#[route]` expansions resolve inside this crate's own tests.
extern crate self as pageshell;

// Modules the end-user will interact directly or indirectly with
pub mod errors;
pub mod nav;
pub mod navigation;
pub mod route;
pub mod routing;
pub mod shell;

// Exports for end-users
pub use build::metadata::{BuildOutput, PageOutput};
pub use build::options::BuildOptions;

mod build;
mod templating;

pub mod maud {
    //! Helpers for [Maud](https://maud.lambda.xyz), the template macro used to write views.
    pub use crate::templating::maud_ext::{document, generator};
}

// Internal modules
mod logging;

use build::execute_build;
use logging::init_logging;
use nav::NavList;
use route::FullRoute;

#[macro_export]
/// Helps to define every route of a shell.
///
/// ## Example
/// ```rust,no_run
/// use pageshell::{mount, nav, routes, BuildOptions, BuildOutput};
///
/// # mod views {
/// #   use pageshell::route::prelude::*;
/// #
/// #   #[route("/")]
/// #   pub struct Home;
/// #   impl Route for Home {
/// #      fn render(&self, _ctx: &mut PageContext) -> impl Into<RenderResult> {
/// #          "Home"
/// #      }
/// #   }
/// # }
///
/// fn main() -> Result<BuildOutput, Box<dyn std::error::Error>> {
///     mount(routes![views::Home], nav!["Home" => "/"], BuildOptions::default())
/// }
/// ```
macro_rules! routes {
    [$($route:expr),* $(,)?] => {
        &[$(&$route),*]
    };
}

/// Helps to define the navigation list of a shell, as `label => path` pairs, in display order.
///
/// ## Example
/// ```rust
/// use pageshell::nav;
///
/// let links = nav![
///     "Home" => "/",
///     "Second Page" => "/second-page",
/// ];
///
/// assert_eq!(links.len(), 2);
/// ```
#[macro_export]
macro_rules! nav {
    ($($label:expr => $path:expr),* $(,)?) => {
        $crate::nav::NavList::new(vec![$($crate::nav::NavLink { label: $label, path: $path }),*])
    };
}

/// The version of pageshell being used.
///
/// Can be used to create a generator tag in the output HTML.
pub const GENERATOR: &str = concat!("pageshell v", env!("CARGO_PKG_VERSION"));

/// Entrypoint. Sets up logging and exports the shell as static documents.
///
/// ## Example
/// Should be called from the main function of the binary crate.
/// ```rust,no_run
/// use pageshell::{mount, nav, routes, BuildOptions, BuildOutput};
///
/// fn main() -> Result<BuildOutput, Box<dyn std::error::Error>> {
///   mount(routes![], nav![], BuildOptions::default())
/// }
/// ```
pub fn mount(
    routes: &[&dyn FullRoute],
    nav_list: NavList,
    options: BuildOptions,
) -> Result<BuildOutput, Box<dyn std::error::Error>> {
    init_logging();

    Ok(execute_build(routes, &nav_list, &options)?)
}
