use std::fs;
use std::path::{Component, Path, PathBuf};

use tempfile::TempDir;
use treegen_scan::{MetadataStore, Scanner, TreeOptions};

/// Three levels of directories with two files each, plus hidden entries.
fn create_deep_tree() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let root = temp.path().canonicalize().unwrap();

    let mut dir = root.clone();
    for level in ["l1", "l2", "l3"] {
        fs::write(dir.join(format!("{level}-a.txt")), level).unwrap();
        fs::write(dir.join(format!("{level}-b.txt")), level).unwrap();
        dir = dir.join(level);
        fs::create_dir(&dir).unwrap();
    }
    fs::write(dir.join("leaf.txt"), "leaf").unwrap();

    fs::create_dir(root.join(".git")).unwrap();
    fs::write(root.join(".git/HEAD"), "ref").unwrap();
    fs::create_dir(root.join("l1/.cache")).unwrap();
    fs::write(root.join("l1/.cache/data"), "cached").unwrap();

    (temp, root)
}

fn scan(root: &Path, options: TreeOptions) -> MetadataStore {
    let mut store = MetadataStore::new();
    let _ = Scanner::new(options).scan(root, &mut store);
    store
}

fn segments_below(root: &Path, path: &Path) -> usize {
    path.strip_prefix(root).unwrap().components().count()
}

#[test]
fn test_every_path_is_canonical_descendant() {
    let (_temp, root) = create_deep_tree();
    let store = scan(&root, TreeOptions::default());

    assert_eq!(store.len(), 7);
    for entry in store.iter() {
        assert!(entry.is_descendant_of(&root));
        assert_eq!(entry.path.canonicalize().unwrap(), entry.path);
        assert!(entry.path.components().all(|c| !matches!(c, Component::ParentDir | Component::CurDir)));
    }
}

#[test]
fn test_scan_through_non_canonical_root() {
    let (_temp, root) = create_deep_tree();
    let indirect = root.join("l1").join("..");
    let store = scan(&indirect, TreeOptions::default());

    assert_eq!(store.len(), 7);
    assert!(store.contains(&root.join("l1-a.txt")));
}

#[test]
fn test_hidden_segments_excluded_by_default() {
    let (_temp, root) = create_deep_tree();
    let store = scan(&root, TreeOptions::default());
    assert!(!store.iter().any(|e| treegen_core::has_hidden_segment(&root, &e.path)));

    let store = scan(&root, TreeOptions { show_hidden: true, ..Default::default() });
    assert_eq!(store.len(), 9);
    assert!(store.contains(&root.join("l1/.cache/data")));
}

#[test]
fn test_max_depth_bounds_segments() {
    let (_temp, root) = create_deep_tree();
    for depth in 1..=4 {
        let store = scan(&root, TreeOptions { max_depth: Some(depth), ..Default::default() });
        assert!(store.iter().all(|e| segments_below(&root, &e.path) <= depth));
        assert_eq!(store.len(), (2 * depth).min(7));
    }
}

#[test]
fn test_max_files_exact_cap() {
    let (_temp, root) = create_deep_tree();
    for cap in 1..=7 {
        let store = scan(&root, TreeOptions { max_files: Some(cap), ..Default::default() });
        assert_eq!(store.len(), cap);
    }
    let store = scan(&root, TreeOptions { max_files: Some(100), ..Default::default() });
    assert_eq!(store.len(), 7);
}

#[test]
fn test_quota_shared_with_existing_count() {
    let (_temp, root) = create_deep_tree();
    let mut store = MetadataStore::new();
    store.set(root.join("l1-a.txt")).unwrap();

    let options = TreeOptions { max_files: Some(3), ..Default::default() };
    let recorded = Scanner::new(options).scan(&root.join("l1"), &mut store).unwrap();

    assert_eq!(recorded, 2);
    assert_eq!(store.file_count(), 3);
}

#[test]
fn test_ignore_matches_name_at_any_depth() {
    let (_temp, root) = create_deep_tree();
    let store = scan(&root, TreeOptions { ignore_dirs: vec!["l2".to_string()], ..Default::default() });

    assert_eq!(store.len(), 4);
    assert!(store.iter().all(|e| !e.path.starts_with(root.join("l1/l2"))));
}

#[test]
fn test_ignore_does_not_apply_to_files() {
    let (_temp, root) = create_deep_tree();
    let store = scan(&root, TreeOptions { ignore_dirs: vec!["l1-a.txt".to_string()], ..Default::default() });
    assert!(store.contains(&root.join("l1-a.txt")));
}

#[cfg(unix)]
#[test]
fn test_unreadable_directory_is_skipped() {
    use std::os::unix::fs::PermissionsExt;

    let (_temp, root) = create_deep_tree();
    let locked = root.join("l1/l2");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users can still read the directory.
    let readable = fs::read_dir(&locked).is_ok();
    let store = scan(&root, TreeOptions::default());
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    if !readable {
        assert_eq!(store.len(), 4);
    }
    assert!(store.contains(&root.join("l1-a.txt")));
}
