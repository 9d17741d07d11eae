use maud::{Markup, html};
use pageshell::route::PageContext;

/// Placeholder content shared by every page, tagged with the view name and the path it was rendered at.
pub fn placeholder(ctx: &PageContext, view: &str, title: &str, body: &str) -> Markup {
    html! {
        div data-view=(view) data-path=(ctx.current_path) {
            h1 { (title) }
            p { (body) }
        }
    }
}
