use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Instant,
};

use colored::{ColoredString, Colorize};
use log::{info, trace};
use maud::{Markup, html};
use rayon::prelude::*;

use crate::{
    BuildOptions, BuildOutput,
    errors::{BuildError, ShellError},
    logging::{FormatElapsedTimeOptions, format_elapsed_time, print_title},
    nav::NavList,
    navigation::{self, NavigationMode},
    route::FullRoute,
    routing::RouteTable,
    shell::Shell,
    templating::maud_ext::document,
};

pub mod metadata;
pub mod options;

/// Exports the shell as static documents into [`BuildOptions::output_dir`].
pub fn execute_build(
    routes: &[&dyn FullRoute],
    nav_list: &NavList,
    options: &BuildOptions,
) -> Result<BuildOutput, ShellError> {
    let build_start = Instant::now();
    let mut build_metadata = BuildOutput::new(build_start);

    let table = RouteTable::new(routes)?;

    if options.clean_output_dir {
        trace!(target: "build", "Cleaning output directory...");
        clean_output_dir(&options.output_dir)?;
    }

    info!(target: "build", "Output directory: {}", options.output_dir.display());
    info!(target: "build", "Navigation: {}", options.navigation);

    print_title("generating pages");
    let pages_start = Instant::now();

    let route_format_options = FormatElapsedTimeOptions {
        additional_fn: Some(&|msg: ColoredString| {
            let formatted_msg = format!("(+{})", msg);
            if msg.fgcolor.is_none() {
                formatted_msg.dimmed()
            } else {
                formatted_msg.into()
            }
        }),
        ..Default::default()
    };

    let templates = render_templates(&table, options.navigation);

    // History navigation needs a document at every path, fragment navigation only at the root.
    let entry_paths: Vec<&'static str> = match options.navigation {
        NavigationMode::History => table.paths().collect(),
        NavigationMode::Fragment => vec!["/"],
    };

    let written = entry_paths
        .par_iter()
        .map(|&path| -> Result<(String, String), ShellError> {
            let page_start = Instant::now();

            let shell = Shell::new(
                routes,
                nav_list.clone(),
                navigation::from_mode(options.navigation, path),
            )?;
            let output = document(options, shell.render(), templates.clone());

            let file_path = file_path_for_route(path, &options.output_dir);
            write_page_file(output.into_string().as_bytes(), &file_path)?;

            info!(target: "pages", "{} -> {} {}", path, file_path.to_string_lossy().dimmed(), format_elapsed_time(page_start.elapsed(), &route_format_options));

            Ok((path.to_string(), file_path.to_string_lossy().to_string()))
        })
        .collect::<Result<Vec<_>, ShellError>>()?;

    for (route, file_path) in written {
        build_metadata.add_page(route, file_path);
    }

    info!(target: "pages", "{}", format!("generated {} pages in {}", build_metadata.pages.len(), format_elapsed_time(pages_start.elapsed(), &FormatElapsedTimeOptions::default())).bold());

    Ok(build_metadata)
}

/// One `<template data-route>` per route, in declaration order, for the client router to swap in.
fn render_templates(table: &RouteTable, mode: NavigationMode) -> Markup {
    html! {
        @for route in table.routes() {
            template data-route=(route.route_raw()) {
                (route.build(&mut crate::route::PageContext::new(route.route_raw(), mode)))
            }
        }
    }
}

/// `/` maps to `index.html`, `/second-page` to `second-page/index.html`.
pub fn file_path_for_route(route: &str, output_dir: &Path) -> PathBuf {
    let mut path = PathBuf::from(output_dir);
    path.extend(route.split('/').filter(|s| !s.is_empty()));
    path.push("index.html");
    path
}

fn clean_output_dir(output_dir: &Path) -> Result<(), BuildError> {
    match fs::remove_dir_all(output_dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(BuildError::CleanFailed {
            path: output_dir.to_path_buf(),
            source,
        }),
    }
}

fn write_page_file(content: &[u8], file_path: &Path) -> Result<(), BuildError> {
    let write = || -> io::Result<()> {
        if let Some(parent_dir) = file_path.parent() {
            fs::create_dir_all(parent_dir)?;
        }
        fs::write(file_path, content)
    };

    write().map_err(|source| BuildError::WriteFailed {
        path: file_path.to_path_buf(),
        source,
    })
}
