use page_shell::{ROUTES, nav_list};
use pageshell::navigation::{FragmentNavigation, HistoryNavigation, Navigation};
use pageshell::shell::Shell;

const PATHS: [(&str, &str); 3] = [
    ("/", "Home"),
    ("/second-page", "SecondPage"),
    ("/another-page", "AnotherPage"),
];

fn history_shell(location: &str) -> Shell<'static, HistoryNavigation> {
    Shell::new(ROUTES, nav_list(), HistoryNavigation::new(location)).unwrap()
}

fn fragment_shell(location: &str) -> Shell<'static, FragmentNavigation> {
    Shell::new(ROUTES, nav_list(), FragmentNavigation::new(location)).unwrap()
}

fn rendered_views(html: &str) -> Vec<&str> {
    html.split("data-view=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .collect()
}

fn rendered_links(html: &str) -> usize {
    html.matches("data-shell-link=").count()
}

#[test]
fn each_path_renders_exactly_its_view() {
    for (path, view) in PATHS {
        let mut shell = history_shell("https://example.com/");
        let html = shell.navigate(path).clone().into_string();

        assert_eq!(rendered_views(&html), vec![view], "history {}", path);

        let mut shell = fragment_shell("https://example.com/");
        let html = shell.navigate(path).clone().into_string();

        assert_eq!(rendered_views(&html), vec![view], "fragment {}", path);
    }
}

#[test]
fn views_see_the_path_they_are_rendered_at() {
    for (path, _) in PATHS {
        let mut shell = history_shell("https://example.com/");
        let html = shell.navigate(path).clone().into_string();

        assert!(html.contains(&format!("data-path=\"{}\"", path)), "{}", html);
    }

    let mut shell = history_shell("https://example.com/second-page/");
    let html = shell.load().clone().into_string();

    assert!(html.contains("data-path=\"/second-page\""));
}

#[test]
fn direct_load_renders_the_view_of_the_location() {
    let mut shell = history_shell("https://example.com/another-page");
    assert_eq!(rendered_views(&shell.load().0), vec!["AnotherPage"]);

    let mut shell = fragment_shell("https://example.com/#/second-page");
    assert_eq!(rendered_views(&shell.load().0), vec!["SecondPage"]);
}

#[test]
fn navigation_list_is_fixed_regardless_of_path() {
    let mut shell = history_shell("/");
    let first = shell.load().clone().into_string();
    let first_nav = &first[..first.find("</nav>").unwrap()];

    for path in ["/second-page", "/another-page", "/nonexistent"] {
        let html = shell.navigate(path).clone().into_string();

        assert_eq!(rendered_links(&html), 3);
        assert!(html.starts_with(first_nav));
    }

    let labels: Vec<_> = shell.links().iter().map(|link| link.label).collect();
    assert_eq!(labels, vec!["Home", "Second Page", "Another Page"]);
}

#[test]
fn fragment_links_target_the_fragment() {
    let mut shell = fragment_shell("/");
    let html = shell.load().clone().into_string();

    assert!(html.contains("href=\"#/\""));
    assert!(html.contains("href=\"#/second-page\""));
    assert!(html.contains("href=\"#/another-page\""));
}

#[test]
fn activating_a_link_swaps_the_view_without_reloading() {
    let mut shell = history_shell("https://example.com/");
    shell.load();

    let html = shell.activate_link(1).unwrap().clone().into_string();
    assert_eq!(rendered_views(&html), vec!["SecondPage"]);
    assert_eq!(shell.navigation().location(), "https://example.com/second-page");

    let html = shell.activate_link(2).unwrap().clone().into_string();
    assert_eq!(rendered_views(&html), vec!["AnotherPage"]);

    assert_eq!(shell.loads(), 1);
    assert_eq!(shell.mount().renders(), 3);
}

#[test]
fn activating_a_link_rewrites_only_the_fragment() {
    let mut shell = fragment_shell("https://example.com/app/");
    shell.load();
    shell.activate_link(2).unwrap();

    assert_eq!(
        shell.navigation().location(),
        "https://example.com/app/#/another-page"
    );
    assert_eq!(shell.active_route(), Some("/another-page"));
    assert_eq!(shell.loads(), 1);
}

#[test]
fn unknown_path_renders_no_view_and_stays_blank() {
    let mut shell = history_shell("/");
    shell.load();

    let first = shell.navigate("/nonexistent").clone().into_string();
    let second = shell.navigate("/nonexistent").clone().into_string();

    assert!(rendered_views(&first).is_empty());
    assert!(first.ends_with("<div data-shell-outlet></div>"));
    assert_eq!(first, second);
    assert_eq!(rendered_links(&first), 3);
    assert_eq!(shell.active_route(), None);
}

#[test]
fn round_trip_renders_identical_output() {
    for location in ["https://example.com/", "https://example.com/#/"] {
        let (a, b, again) = if location.contains('#') {
            let mut shell = fragment_shell(location);
            let a = shell.navigate("/second-page").clone().into_string();
            let b = shell.navigate("/another-page").clone().into_string();
            let again = shell.navigate("/second-page").clone().into_string();
            (a, b, again)
        } else {
            let mut shell = history_shell(location);
            let a = shell.navigate("/second-page").clone().into_string();
            let b = shell.navigate("/another-page").clone().into_string();
            let again = shell.navigate("/second-page").clone().into_string();
            (a, b, again)
        };

        assert_ne!(a, b);
        assert_eq!(a, again);
    }
}

#[test]
fn back_and_forward_restore_views() {
    let mut shell = history_shell("/");
    let home = shell.load().clone().into_string();
    let second = shell.navigate("/second-page").clone().into_string();

    assert_eq!(shell.back().map(|markup| markup.0.clone()), Some(home));
    assert_eq!(shell.forward().map(|markup| markup.0.clone()), Some(second));
    assert!(shell.forward().is_none());
    assert_eq!(shell.loads(), 1);
}
