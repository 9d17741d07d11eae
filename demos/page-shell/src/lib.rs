mod layout;
pub mod pages;

use pageshell::nav::NavList;
use pageshell::route::FullRoute;
use pageshell::{nav, routes};

pub use pages::{AnotherPage, Home, SecondPage};

pub static ROUTES: &[&dyn FullRoute] = routes![Home, SecondPage, AnotherPage];

pub fn nav_list() -> NavList {
    nav![
        "Home" => "/",
        "Second Page" => "/second-page",
        "Another Page" => "/another-page",
    ]
}
