use page_shell::{ROUTES, nav_list};
use pageshell::navigation::NavigationMode;
use pageshell::{BuildOptions, BuildOutput, mount};

fn main() -> Result<BuildOutput, Box<dyn std::error::Error>> {
    mount(
        ROUTES,
        nav_list(),
        BuildOptions {
            output_dir: "dist-hash".into(),
            navigation: NavigationMode::Fragment,
            ..Default::default()
        },
    )
}
