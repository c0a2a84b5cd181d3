use assert_fs::TempDir;
use assert_fs::prelude::*;
use flatsort::fs_ops::naming;
use flatsort::{RunConfig, SortError, run};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

fn cfg(sources: Vec<PathBuf>, target: &Path) -> RunConfig {
    RunConfig::new(sources, target)
}

/// Every regular file under `root`, any depth.
fn files_under(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .collect()
}

#[test]
fn single_file_moved_and_source_deleted() {
    let temp = TempDir::new().unwrap();
    let source = temp.child("in");
    let target = temp.child("out");
    source.create_dir_all().unwrap();
    target.create_dir_all().unwrap();

    let photo = source.child("photo.jpg");
    photo.write_str("jpeg bytes").unwrap();
    let size = fs::metadata(photo.path()).unwrap().len();

    let mut c = cfg(vec![source.path().to_path_buf()], target.path());
    c.delete_source = true;
    let summary = run(&c).expect("run should succeed");

    assert_eq!(summary.files_moved, 1);
    assert_eq!(summary.bytes_written, size);
    assert!(!photo.path().exists(), "original deleted");

    let moved = files_under(target.path());
    assert_eq!(moved.len(), 1);
    let name = moved[0].file_name().unwrap().to_str().unwrap();
    assert!(naming::is_safe_name(name));
    assert!(name.ends_with(".jpg"));
    assert_eq!(fs::read(&moved[0]).unwrap(), b"jpeg bytes");

    // bucket is exactly the first character of the final name
    let bucket = moved[0].parent().unwrap();
    assert_eq!(bucket.parent().unwrap(), target.path());
    assert_eq!(
        bucket.file_name().unwrap().to_str().unwrap(),
        &name[..1]
    );
}

#[test]
fn safe_named_file_keeps_its_name() {
    let temp = TempDir::new().unwrap();
    let source = temp.child("in");
    let target = temp.child("out");
    source.create_dir_all().unwrap();
    target.create_dir_all().unwrap();

    let original = source.child("11111111-1111-1111-1111-111111111111.png");
    original.write_str("png").unwrap();

    let mut c = cfg(vec![source.path().to_path_buf()], target.path());
    c.delete_source = true;
    run(&c).unwrap();

    let kept = target
        .path()
        .join("1")
        .join("11111111-1111-1111-1111-111111111111.png");
    assert!(kept.exists(), "safe name kept verbatim at {}", kept.display());
    assert!(!original.path().exists());
}

#[test]
fn nested_sources_are_fully_drained() {
    let temp = TempDir::new().unwrap();
    let src_a = temp.child("dump_a");
    let src_b = temp.child("dump_b");
    let target = temp.child("out");
    target.create_dir_all().unwrap();

    src_a.child("x/y/deep.bin").write_str("abc").unwrap();
    src_a.child("top.txt").write_str("d").unwrap();
    src_b.child("other.dat").write_str("ef").unwrap();

    let mut c = cfg(
        vec![src_a.path().to_path_buf(), src_b.path().to_path_buf()],
        target.path(),
    );
    c.delete_source = true;
    let summary = run(&c).unwrap();

    assert_eq!(summary.files_moved, 3);
    assert_eq!(summary.bytes_written, 6);
    assert_eq!(files_under(target.path()).len(), 3);
    assert!(files_under(src_a.path()).is_empty());
    assert!(files_under(src_b.path()).is_empty());
}

#[test]
fn source_equal_to_target_fails_before_any_io() {
    let temp = TempDir::new().unwrap();
    let dir = temp.child("both");
    dir.create_dir_all().unwrap();
    dir.child("file.txt").write_str("x").unwrap();

    let c = cfg(vec![dir.path().to_path_buf()], dir.path());
    let err = run(&c).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<SortError>(),
        Some(SortError::SourceEqualsTarget(_))
    ));
    // nothing scanned or moved
    assert!(dir.child("file.txt").path().exists());
    assert_eq!(files_under(dir.path()).len(), 1);
}

#[test]
fn colliding_safe_names_both_survive() {
    let temp = TempDir::new().unwrap();
    let source = temp.child("in");
    let target = temp.child("out");
    source.create_dir_all().unwrap();

    let name = "a8b8b1da-62d6-4699-989d-6d6995885c51.txt";
    source.child(name).write_str("incoming").unwrap();
    let occupied = target.path().join("a").join(name);
    fs::create_dir_all(occupied.parent().unwrap()).unwrap();
    fs::write(&occupied, b"already there").unwrap();

    let mut c = cfg(vec![source.path().to_path_buf()], target.path());
    c.delete_source = true;
    run(&c).unwrap();

    assert_eq!(fs::read(&occupied).unwrap(), b"already there");
    let all = files_under(target.path());
    assert_eq!(all.len(), 2);
    let newcomer = all.iter().find(|p| **p != occupied).unwrap();
    let new_name = newcomer.file_name().unwrap().to_str().unwrap();
    assert_ne!(new_name, name);
    assert!(naming::is_safe_name(new_name));
    assert_eq!(fs::read(newcomer).unwrap(), b"incoming");
}

#[test]
fn structural_bucket_error_aborts_the_batch() {
    let temp = TempDir::new().unwrap();
    let source = temp.child("in");
    let target = temp.child("out");
    source.create_dir_all().unwrap();
    target.create_dir_all().unwrap();

    let name = "a8b8b1da-62d6-4699-989d-6d6995885c51.txt";
    source.child(name).write_str("x").unwrap();
    // the "a" bucket path exists but is a plain file
    target.child("a").write_str("not a dir").unwrap();

    let c = cfg(vec![source.path().to_path_buf()], target.path());
    let err = run(&c).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<SortError>(),
        Some(SortError::NotADirectory(_))
    ));
    assert!(source.child(name).path().exists(), "no rollback, no deletion");
}

#[test]
fn empty_sources_complete_with_zero_counts() {
    let temp = TempDir::new().unwrap();
    let source = temp.child("in");
    let target = temp.child("out");
    source.create_dir_all().unwrap();
    target.create_dir_all().unwrap();

    let summary = run(&cfg(vec![source.path().to_path_buf()], target.path())).unwrap();
    assert_eq!(summary.files_moved, 0);
    assert_eq!(summary.bytes_written, 0);
}
