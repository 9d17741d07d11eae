use std::path::PathBuf;

use crate::navigation::NavigationMode;

/// Export options. Should be passed to [`mount()`](crate::mount()).
///
/// ## Examples
/// Default values:
/// ```rust,no_run
/// use pageshell::{mount, nav, routes, BuildOptions, BuildOutput};
///
/// fn main() -> Result<BuildOutput, Box<dyn std::error::Error>> {
///   mount(routes![], nav![], BuildOptions::default())
/// }
/// ```
/// Custom values:
/// ```rust,no_run
/// use pageshell::{mount, nav, routes, BuildOptions, BuildOutput};
/// use pageshell::navigation::NavigationMode;
///
/// fn main() -> Result<BuildOutput, Box<dyn std::error::Error>> {
///   mount(
///     routes![],
///     nav![],
///     BuildOptions {
///       output_dir: "public".into(),
///       navigation: NavigationMode::Fragment,
///       title: "My shell".into(),
///       ..Default::default()
///     },
///   )
/// }
/// ```
#[derive(Clone, Debug)]
pub struct BuildOptions {
    pub output_dir: PathBuf,

    /// Whether to remove the output directory before exporting.
    pub clean_output_dir: bool,

    /// Navigation strategy the exported documents route with.
    ///
    /// With [`NavigationMode::History`], one document is written per route so that every path can be loaded directly.
    /// With [`NavigationMode::Fragment`], a single `index.html` is written.
    pub navigation: NavigationMode,

    /// Content of the `<title>` element of every document.
    pub title: String,

    /// Value of the `lang` attribute of every document.
    pub lang: String,
}

/// Provides default values for [`crate::mount()`].
impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            output_dir: "dist".into(),
            clean_output_dir: true,
            navigation: NavigationMode::default(),
            title: "Page Shell".into(),
            lang: "en".into(),
        }
    }
}
