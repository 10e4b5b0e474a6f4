use std::path::{Component, Path, PathBuf};

/// Get the node_modules directory under a project directory
pub fn get_node_modules_path(project_dir: &Path) -> PathBuf {
    project_dir.join("node_modules")
}

/// Handle scoped package names in file paths
pub fn get_scoped_package_path(base_path: &Path, package_name: &str) -> PathBuf {
    match package_name.split_once('/') {
        Some((scope, name)) if scope.starts_with('@') => base_path.join(scope).join(name),
        _ => base_path.join(package_name),
    }
}

/// Module specifier that a file in `from_dir` would pass to `require` to load `target`.
///
/// Both paths must be absolute (or share the same base). Separators are always `/`,
/// and sibling or descendant targets get a leading `./`.
pub fn relative_module_path(from_dir: &Path, target: &Path) -> String {
    let from: Vec<Component<'_>> = from_dir.components().collect();
    let to: Vec<Component<'_>> = target.components().collect();

    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<String> = Vec::new();
    for _ in common..from.len() {
        parts.push("..".to_string());
    }
    for component in to.iter().skip(common) {
        parts.push(component.as_os_str().to_string_lossy().into_owned());
    }

    let joined = parts.join("/");
    if parts.first().is_some_and(|part| part == "..") {
        joined
    } else {
        format!("./{joined}")
    }
}
