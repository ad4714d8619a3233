//! Layout checks tying `tests/unit` to the `src` module tree

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC_ROOT: &str = "src";
    const UNIT_ROOT: &str = "tests/unit";

    // Files that only wire modules together and hold no logic of their own
    const WIRING_FILES: [&str; 3] = ["lib.rs", "main.rs", "mod.rs"];

    fn rust_files(root: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    files.push(path);
                }
            }
        }

        files.sort();
        Ok(files)
    }

    fn is_wiring(path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| WIRING_FILES.contains(&name))
    }

    /// Module paths such as `algorithm/search` for every non-wiring file under `root`
    fn module_paths(root: &str) -> BTreeSet<String> {
        let root = Path::new(root);
        let Ok(files) = rust_files(root) else {
            unreachable!("{} should be readable", root.display());
        };

        files
            .iter()
            .filter(|path| !is_wiring(path))
            .filter_map(|path| path.strip_prefix(root).ok())
            .map(|relative| relative.with_extension("").to_string_lossy().replace('\\', "/"))
            .collect()
    }

    fn declares_module(file: &Path, name: &str) -> bool {
        let Ok(content) = fs::read_to_string(file) else {
            return false;
        };
        let private = format!("mod {name};");
        let public = format!("pub {private}");

        content
            .lines()
            .map(str::trim)
            .any(|line| line == private || line == public)
    }

    #[test]
    fn test_every_module_has_unit_tests() {
        let tested = module_paths(UNIT_ROOT);
        let untested: Vec<String> = module_paths(SRC_ROOT)
            .difference(&tested)
            .map(|module| format!("  - src/{module}.rs needs tests/unit/{module}.rs"))
            .collect();

        assert!(
            untested.is_empty(),
            "Modules without unit tests:\n{}",
            untested.join("\n")
        );
    }

    #[test]
    fn test_every_unit_test_mirrors_a_module() {
        let modules = module_paths(SRC_ROOT);
        let orphaned: Vec<String> = module_paths(UNIT_ROOT)
            .difference(&modules)
            .map(|module| format!("  - tests/unit/{module}.rs has no src/{module}.rs"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit tests for modules that do not exist:\n{}",
            orphaned.join("\n")
        );
    }

    // Cargo only compiles unit test files reachable from the harness root
    #[test]
    fn test_unit_tests_are_declared_in_harness() {
        let root = Path::new(UNIT_ROOT);
        let mut undeclared = BTreeSet::new();

        for module in module_paths(UNIT_ROOT) {
            let mut dir = root.to_path_buf();
            for segment in module.split('/') {
                let parent = if dir.as_path() == root {
                    dir.join("main.rs")
                } else {
                    dir.join("mod.rs")
                };
                if !declares_module(&parent, segment) {
                    undeclared.insert(format!("  - mod {segment}; in {}", parent.display()));
                }
                dir.push(segment);
            }
        }

        assert!(
            undeclared.is_empty(),
            "Missing module declarations:\n{}",
            undeclared.into_iter().collect::<Vec<_>>().join("\n")
        );
    }

    #[test]
    fn test_unit_tests_compile_only_under_test() {
        let root = Path::new(UNIT_ROOT);
        let unguarded: Vec<String> = module_paths(UNIT_ROOT)
            .into_iter()
            .map(|module| root.join(format!("{module}.rs")))
            .filter(|path| {
                fs::read_to_string(path).is_ok_and(|content| !content.contains("#[cfg(test)]"))
            })
            .map(|path| format!("  - {}", path.display()))
            .collect();

        assert!(
            unguarded.is_empty(),
            "Unit test files without a #[cfg(test)] module:\n{}",
            unguarded.join("\n")
        );
    }

    #[test]
    fn test_test_files_define_tests() {
        let Ok(files) = rust_files(Path::new("tests")) else {
            unreachable!("tests directory should be readable");
        };
        let empty: Vec<String> = files
            .iter()
            .filter(|path| !is_wiring(path))
            .filter(|path| {
                fs::read_to_string(path).is_ok_and(|content| !content.contains("#[test]"))
            })
            .map(|path| format!("  - {}", path.display()))
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without any #[test] function:\n{}",
            empty.join("\n")
        );
    }
}
