use std::env;
use std::fs;
use std::path::Path;

// Build metadata shown by `genversion --version` and in the help footer.
fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let now = chrono::Utc::now();

    let build_info = format!(
        "pub const BUILD_DATE: &str = \"{date}\";\n\
         pub const BUILD_YEAR: &str = \"{year}\";\n\
         pub const LONG_VERSION: &str = \"{version} (built {date})\";\n",
        date = now.format("%Y-%m-%d"),
        year = now.format("%Y"),
        version = env!("CARGO_PKG_VERSION"),
    );

    fs::write(Path::new(&out_dir).join("build_info.rs"), build_info).unwrap();
}
