use crate::layout::placeholder;
use pageshell::route::prelude::*;

#[route("/another-page")]
pub struct AnotherPage;

impl Route for AnotherPage {
    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        placeholder(ctx, "AnotherPage", "Another Page", "This is another page.")
    }
}
