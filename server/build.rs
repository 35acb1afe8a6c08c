use std::fs;
use std::path::Path;

const PLACEHOLDER_INDEX: &str = "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>Tarlac Open Data Portal</title></head>\n<body><p>The portal frontend has not been built. Run <code>trunk build --release</code> in <code>frontend/</code>.</p></body></html>\n";

fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).expect("create static dir");
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true),
        )
        .expect("copy frontend bundle");
    }

    // include_dir! needs the directory to exist even without a frontend build.
    let embedded = out_dir.join("dist");
    if !embedded.join("index.html").exists() {
        fs::create_dir_all(&embedded).expect("create static/dist");
        fs::write(embedded.join("index.html"), PLACEHOLDER_INDEX).expect("write placeholder index");
    }

    println!("cargo:rerun-if-changed=../frontend/dist");
}
