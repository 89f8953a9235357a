use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// favpath command isolated from the user's config directory
pub fn favpath(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("favpath");
    cmd.env("FAVPATH_CONFIG_DIR", config_dir);
    cmd.env_remove("FAVPATH_LOG");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// e1 and e2 form the heavy route A -> B -> C, e3 the light shortcut A -> C
pub const TRIANGLE_TOML: &str = r#"
[[edges]]
name = "e1"
weight = 5.0
sources = ["A"]
targets = ["B"]

[[edges]]
name = "e2"
weight = 5.0
sources = ["B"]
targets = ["C"]

[[edges]]
name = "e3"
weight = 1.0
sources = ["A"]
targets = ["C"]
"#;

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write test file");
    path
}
