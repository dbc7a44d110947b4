use std::path::{Component, Path, PathBuf};

/// True when `p` exists and is a directory
pub fn exists_dir(p: &Path) -> bool {
    p.is_dir()
}

/// True when `p` exists and is a regular file
pub fn exists_file(p: &Path) -> bool {
    p.is_file()
}

/// Resolve user input against `base`.
///
/// - empty input returns `base` untouched
/// - `~` and `~/...` are rooted at `home` when one is known, otherwise taken literally
/// - relative input is joined onto `base`, absolute input is used as-is
///
/// The result is weakly canonical, so it is usable for paths that do not exist yet.
pub fn normalize(base: &Path, input: &str, home: Option<&Path>) -> PathBuf {
    if input.is_empty() {
        return base.to_path_buf();
    }

    let joined = match expand_home(input, home) {
        Some(expanded) => expanded,
        None => base.join(input),
    };

    let resolved = weakly_canonical(&joined);
    log::debug!("Resolved '{}' against {} to {}", input, base.display(), resolved.display());
    resolved
}

fn expand_home(input: &str, home: Option<&Path>) -> Option<PathBuf> {
    let rest = input.strip_prefix('~')?;
    let home = match home {
        Some(home) => home,
        None => {
            log::debug!("No home directory configured, treating '{}' literally", input);
            return None;
        }
    };

    if rest.is_empty() {
        return Some(home.to_path_buf());
    }

    // Only `~/...` is a home reference; `~name` is a plain relative name
    let rest = rest.strip_prefix(std::path::is_separator)?;
    Some(home.join(rest))
}

/// Canonicalize the longest existing prefix of `path` and append the rest
/// lexically, folding `.` and `..` along the way.
pub fn weakly_canonical(path: &Path) -> PathBuf {
    let components: Vec<Component> = path.components().collect();

    for split in (1..=components.len()).rev() {
        let prefix: PathBuf = components[..split].iter().collect();
        if let Ok(canonical) = prefix.canonicalize() {
            return append_lexically(canonical, &components[split..]);
        }
    }

    append_lexically(PathBuf::new(), &components)
}

fn append_lexically(mut result: PathBuf, rest: &[Component]) -> PathBuf {
    for component in rest {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                result.pop();
            }
            other => result.push(other.as_os_str()),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn canonical_tmp() -> (TempDir, PathBuf) {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().canonicalize().unwrap();
        (tmp, root)
    }

    #[test]
    fn test_normalize_empty_returns_base() {
        let (_tmp, root) = canonical_tmp();
        assert_eq!(normalize(&root, "", None), root);
    }

    #[test]
    fn test_normalize_relative_and_parent() {
        let (_tmp, root) = canonical_tmp();
        fs::create_dir(root.join("docs")).unwrap();

        assert_eq!(normalize(&root, "docs", None), root.join("docs"));
        assert_eq!(normalize(&root, "docs/../docs/./", None), root.join("docs"));
        assert_eq!(normalize(&root.join("docs"), "..", None), root);
    }

    #[test]
    fn test_normalize_absolute_ignores_base() {
        let (_tmp, root) = canonical_tmp();
        let other = root.join("other");
        fs::create_dir(&other).unwrap();

        let resolved = normalize(Path::new("/"), other.to_str().unwrap(), None);
        assert_eq!(resolved, other);
    }

    #[test]
    fn test_normalize_tolerates_missing_suffix() {
        let (_tmp, root) = canonical_tmp();
        let resolved = normalize(&root, "missing/child/../file.txt", None);

        assert_eq!(resolved, root.join("missing").join("file.txt"));
        assert!(!resolved.exists());
    }

    #[test]
    fn test_normalize_expands_home() {
        let (_tmp, root) = canonical_tmp();
        let home = root.join("home");
        fs::create_dir_all(home.join("notes")).unwrap();

        assert_eq!(normalize(&root, "~", Some(&home)), home);
        assert_eq!(normalize(&root, "~/notes", Some(&home)), home.join("notes"));
    }

    #[test]
    fn test_normalize_without_home_is_literal() {
        let (_tmp, root) = canonical_tmp();
        assert_eq!(normalize(&root, "~/notes", None), root.join("~").join("notes"));
    }

    #[test]
    fn test_normalize_tilde_name_is_not_home() {
        let (_tmp, root) = canonical_tmp();
        let home = root.join("home");
        fs::create_dir(&home).unwrap();

        assert_eq!(normalize(&root, "~backup", Some(&home)), root.join("~backup"));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let (_tmp, root) = canonical_tmp();
        fs::create_dir_all(root.join("a/b")).unwrap();

        let once = normalize(&root, "a/./b/..", None);
        let twice = normalize(&root, once.to_str().unwrap(), None);
        assert_eq!(once, twice);
        assert_eq!(once, root.join("a"));
    }

    #[cfg(unix)]
    #[test]
    fn test_normalize_resolves_symlinks() {
        let (_tmp, root) = canonical_tmp();
        fs::create_dir(root.join("real")).unwrap();
        std::os::unix::fs::symlink(root.join("real"), root.join("link")).unwrap();

        assert_eq!(normalize(&root, "link", None), root.join("real"));
        assert_eq!(normalize(&root, "link/new.txt", None), root.join("real").join("new.txt"));
    }

    #[test]
    fn test_exists_helpers() {
        let (_tmp, root) = canonical_tmp();
        fs::write(root.join("f.txt"), b"x").unwrap();

        assert!(exists_dir(&root));
        assert!(!exists_file(&root));
        assert!(exists_file(&root.join("f.txt")));
        assert!(!exists_dir(&root.join("f.txt")));
        assert!(!exists_file(&root.join("nope")));
    }
}
