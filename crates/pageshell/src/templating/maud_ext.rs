use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::{BuildOptions, GENERATOR, route::RenderResult};

const ROUTER_CODE: &str = include_str!("../../js/router.js");

/// Can be used to create a generator tag in the output HTML. See [`GENERATOR`](crate::GENERATOR).
pub fn generator() -> Markup {
    html! {
        meta name="generator" content=(GENERATOR);
    }
}

/// Wraps a rendered shell into a complete document.
///
/// `templates` holds one `<template data-route>` per route, which the inline router swaps into the outlet when navigating.
pub fn document(options: &BuildOptions, shell: Markup, templates: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(options.lang) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (options.title) }
                (generator())
            }
            body {
                div #root data-shell=(options.navigation.as_str()) {
                    (shell)
                }
                (templates)
                script type="module" { (PreEscaped(ROUTER_CODE)) }
            }
        }
    }
}

impl From<maud::Markup> for RenderResult {
    fn from(val: maud::Markup) -> Self {
        RenderResult::Html(val)
    }
}
