use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

const TEMPLATE_DIR: &str = "templates";
const STATIC_DIR: &str = "static";

fn main() {
    // Askama compiles templates into the binary, and the landing page links
    // static assets with the build id, so both trees must trigger rebuilds.
    watch_assets(Path::new(TEMPLATE_DIR), &["html"]);
    watch_assets(Path::new(STATIC_DIR), &["js", "css", "html"]);

    let build_id = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "dev".to_string());
    println!("cargo:rustc-env=MERGINGTON_BUILD_ID={build_id}");
}

fn watch_assets(dir: &Path, extensions: &[&str]) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            watch_assets(&path, extensions);
        } else if has_extension(&path, extensions) {
            println!("cargo:rerun-if-changed={}", path.display());
        }
    }
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.contains(&ext))
}
