//! Error types for pageshell.
use std::fmt::{self, Debug, Formatter};
use std::path::PathBuf;
use thiserror::Error;

macro_rules! impl_debug_for_error {
    ($($t:ty),*) => {
        $(
            impl Debug for $t {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    // Errors returned from main are printed with Debug, thiserror only gives us Display.
                    write!(f, "{}", self)
                }
            }
        )*
    };
}

#[derive(Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("Route `{path}` is defined more than once. Every path in the route table must be unique.")]
    DuplicatePath { path: String },

    #[error("Route `{path}` must start with `/`.")]
    RelativePath { path: String },
}

#[derive(Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("The navigation list has no link at position {index} (it has {len} links)")]
    LinkOutOfRange { index: usize, len: usize },
}

#[derive(Error)]
pub enum BuildError {
    #[error("Failed to clean output directory: {path}")]
    CleanFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write page file: {path}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ShellError {
    #[error(transparent)]
    Route(#[from] RouteError),

    #[error(transparent)]
    Navigation(#[from] NavigationError),

    #[error(transparent)]
    Build(#[from] BuildError),
}

impl_debug_for_error!(RouteError, NavigationError, BuildError);
