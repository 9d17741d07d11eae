use crate::layout::placeholder;
use pageshell::route::prelude::*;

#[route("/")]
pub struct Home;

impl Route for Home {
    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        placeholder(ctx, "Home", "Home", "Welcome to the home page.")
    }
}
