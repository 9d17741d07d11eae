use page_shell::{ROUTES, nav_list};
use pageshell::{BuildOptions, BuildOutput, mount};

fn main() -> Result<BuildOutput, Box<dyn std::error::Error>> {
    mount(ROUTES, nav_list(), BuildOptions::default())
}
