use crate::layout::placeholder;
use pageshell::route::prelude::*;

#[route("/second-page")]
pub struct SecondPage;

impl Route for SecondPage {
    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        placeholder(ctx, "SecondPage", "Second Page", "This is the second page.")
    }
}
