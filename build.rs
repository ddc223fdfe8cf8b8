use std::fs;

fn main() {
    // The published crate version lives in two places; refuse to build if they drift.
    let version_file = fs::read_to_string("VERSION")
        .expect("VERSION file not found - run: echo \"$CARGO_PKG_VERSION\" > VERSION");

    let version = version_file.trim();
    let cargo_version = env!("CARGO_PKG_VERSION");

    if version != cargo_version {
        panic!(
            "\n\n\
            ctrlcache version mismatch\n\
            VERSION file: {}\n\
            Cargo.toml:   {}\n\n\
            Update VERSION to {} or bump Cargo.toml.\n\n",
            version, cargo_version, cargo_version
        );
    }

    println!("cargo:rerun-if-changed=VERSION");
}
