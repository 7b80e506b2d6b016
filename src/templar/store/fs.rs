use super::IgnoreSet;
use crate::error::{Result, TemplarError};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Copies the tree under `source` into `dest`, creating `dest` as needed.
///
/// Entries matched by `ignore` are skipped; ignored directories are not
/// descended into. Symlinks are followed and their targets copied; a dangling
/// link, a link loop or any entry that is neither file nor directory is an
/// error. Returns the number of files written.
pub fn copy_tree(source: &Path, dest: &Path, ignore: &IgnoreSet) -> Result<usize> {
    if !source.is_dir() {
        return Err(TemplarError::NotInitialized(source.to_path_buf()));
    }
    ensure_dir(dest)?;

    let mut copied = 0;
    let walker = WalkDir::new(source)
        .follow_links(true)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !ignore.is_ignored(e.path()));

    for entry in walker {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| TemplarError::Io(std::io::Error::other(e)))?;
        let target = dest.join(relative);

        let file_type = entry.file_type();
        if file_type.is_dir() {
            ensure_dir(&target)?;
        } else if file_type.is_file() {
            fs::copy(entry.path(), &target).map_err(TemplarError::Io)?;
            copied += 1;
        } else {
            return Err(TemplarError::Io(std::io::Error::other(format!(
                "not a regular file or directory: {}",
                entry.path().display()
            ))));
        }
    }

    Ok(copied)
}

/// Copies one file to `dest`, creating the parent directory.
pub fn copy_file(source: &Path, dest: &Path) -> Result<()> {
    if !source.is_file() {
        return Err(TemplarError::NotInitialized(source.to_path_buf()));
    }
    if let Some(parent) = dest.parent() {
        ensure_dir(parent)?;
    }
    fs::copy(source, dest).map_err(TemplarError::Io)?;
    Ok(())
}

/// Removes a previous destination, file or directory.
pub fn remove_existing(path: &Path) -> Result<()> {
    if path.is_dir() {
        fs::remove_dir_all(path).map_err(TemplarError::Io)?;
    } else if path.exists() {
        fs::remove_file(path).map_err(TemplarError::Io)?;
    }
    Ok(())
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(TemplarError::Io)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_tree(root: &Path) {
        fs::create_dir_all(root.join("figures")).unwrap();
        fs::create_dir_all(root.join(".git").join("objects")).unwrap();
        fs::write(root.join("main.tex"), "\\documentclass{article}").unwrap();
        fs::write(root.join("main.aux"), "aux").unwrap();
        fs::write(root.join("figures").join("plot.png"), [0u8, 1, 2]).unwrap();
        fs::write(root.join(".git").join("HEAD"), "ref").unwrap();
    }

    #[test]
    fn test_copy_tree_skips_ignored() {
        let src = tempdir().unwrap();
        let dst = tempdir().unwrap();
        sample_tree(src.path());
        let ignore = IgnoreSet::new(["*.aux", ".git"]).unwrap();

        let out = dst.path().join("report");
        let count = copy_tree(src.path(), &out, &ignore).unwrap();

        assert_eq!(count, 2);
        assert!(out.join("main.tex").is_file());
        assert!(out.join("figures").join("plot.png").is_file());
        assert!(!out.join("main.aux").exists());
        assert!(!out.join(".git").exists());
        assert_eq!(
            fs::read(out.join("figures").join("plot.png")).unwrap(),
            vec![0u8, 1, 2]
        );
    }

    #[test]
    fn test_copy_tree_overwrites_files() {
        let src = tempdir().unwrap();
        let dst = tempdir().unwrap();
        fs::write(src.path().join("a.md"), "new").unwrap();
        fs::write(dst.path().join("a.md"), "old").unwrap();

        copy_tree(src.path(), dst.path(), &IgnoreSet::default()).unwrap();
        assert_eq!(fs::read_to_string(dst.path().join("a.md")).unwrap(), "new");
    }

    #[test]
    fn test_copy_tree_missing_source() {
        let dst = tempdir().unwrap();
        let err = copy_tree(
            &dst.path().join("missing"),
            &dst.path().join("out"),
            &IgnoreSet::default(),
        )
        .unwrap_err();
        assert!(err.is_not_found());
        assert!(!dst.path().join("out").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_tree_follows_dir_symlink() {
        let shared = tempdir().unwrap();
        fs::write(shared.path().join("theme.sty"), "sty").unwrap();
        let src = tempdir().unwrap();
        fs::write(src.path().join("main.tex"), "tex").unwrap();
        std::os::unix::fs::symlink(shared.path(), src.path().join("theme")).unwrap();
        let dst = tempdir().unwrap();

        let out = dst.path().join("report");
        let count = copy_tree(src.path(), &out, &IgnoreSet::default()).unwrap();

        assert_eq!(count, 2);
        assert!(out.join("theme").is_dir());
        assert_eq!(
            fs::read_to_string(out.join("theme").join("theme.sty")).unwrap(),
            "sty"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_tree_dangling_symlink_is_error() {
        let src = tempdir().unwrap();
        fs::write(src.path().join("main.tex"), "tex").unwrap();
        std::os::unix::fs::symlink(src.path().join("missing"), src.path().join("dangling"))
            .unwrap();
        let dst = tempdir().unwrap();

        let err = copy_tree(src.path(), &dst.path().join("report"), &IgnoreSet::default());
        assert!(matches!(err, Err(TemplarError::WalkDir(_))));
    }

    #[test]
    fn test_copy_file_creates_parent() {
        let src = tempdir().unwrap();
        let dst = tempdir().unwrap();
        let deck = src.path().join("deck.pptx");
        fs::write(&deck, "pptx").unwrap();

        let out = dst.path().join("slide").join("talk.pptx");
        copy_file(&deck, &out).unwrap();
        assert_eq!(fs::read_to_string(out).unwrap(), "pptx");
    }

    #[test]
    fn test_remove_existing_handles_both_kinds() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("slide");
        fs::create_dir_all(sub.join("inner")).unwrap();
        let file = dir.path().join("x.pptx");
        fs::write(&file, "x").unwrap();

        remove_existing(&sub).unwrap();
        remove_existing(&file).unwrap();
        remove_existing(&dir.path().join("absent")).unwrap();
        assert!(!sub.exists());
        assert!(!file.exists());
    }
}
