//! Tree copy with optional markdown rewrite

use std::path::Path;

use crate::domain::ports::{FileSystem, FsResult};
use crate::domain::services::PathRewriter;
use crate::domain::value_objects::is_markdown;

/// Replace `dst` wholesale with a copy of `src`. Old content is deleted
/// first, never merged. Returns the number of files written.
pub(crate) fn replace_tree<F: FileSystem + ?Sized>(
    fs: &F,
    src: &Path,
    dst: &Path,
    rewriter: Option<&PathRewriter>,
) -> FsResult<usize> {
    fs.remove(dst)?;
    fs.create_dir_all(dst)?;
    copy_tree(fs, src, dst, rewriter)
}

fn copy_tree<F: FileSystem + ?Sized>(
    fs: &F,
    src: &Path,
    dst: &Path,
    rewriter: Option<&PathRewriter>,
) -> FsResult<usize> {
    let mut written = 0;
    for entry in fs.list(src)? {
        let from = src.join(&entry.name);
        let to = dst.join(&entry.name);
        if entry.is_dir {
            fs.create_dir_all(&to)?;
            written += copy_tree(fs, &from, &to, rewriter)?;
        } else {
            copy_file(fs, &from, &to, rewriter)?;
            written += 1;
        }
    }
    Ok(written)
}

/// Copy one file; markdown goes through `rewriter` when given. Non-markdown
/// and non-UTF-8 content is copied byte for byte. The permission bits follow
/// the source.
pub(crate) fn copy_file<F: FileSystem + ?Sized>(
    fs: &F,
    from: &Path,
    to: &Path,
    rewriter: Option<&PathRewriter>,
) -> FsResult<()> {
    let bytes = fs.read(from)?;
    let rewrite = rewriter.filter(|_| {
        from.file_name()
            .is_some_and(|n| is_markdown(&n.to_string_lossy()))
    });

    let content = match rewrite {
        Some(rewriter) => match String::from_utf8(bytes) {
            Ok(text) => rewriter.rewrite(&text).into_bytes(),
            Err(err) => err.into_bytes(),
        },
        None => bytes,
    };
    fs.write(to, &content)?;
    fs.copy_permissions(from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::fs::MemoryFs;

    #[test]
    fn replace_tree_rewrites_markdown_only() {
        let fs = MemoryFs::new();
        fs.add_file("/src/SKILL.md", "See _standards/GIT.md\n");
        fs.add_file("/src/scripts/run.sh", "cat _standards/GIT.md\n");
        fs.add_file("/src/logo.png", [0xffu8, 0xfe, 0x00]);

        let written =
            replace_tree(&fs, Path::new("/src"), Path::new("/dst"), Some(&PathRewriter::default()))
                .unwrap();

        assert_eq!(written, 3);
        assert_eq!(
            fs.contents("/dst/SKILL.md").as_deref(),
            Some("See .agent/rules/git.md\n")
        );
        assert_eq!(
            fs.contents("/dst/scripts/run.sh").as_deref(),
            Some("cat _standards/GIT.md\n")
        );
        assert_eq!(fs.read(Path::new("/dst/logo.png")).unwrap(), vec![0xff, 0xfe, 0x00]);
    }

    #[test]
    fn replace_tree_drops_stale_files() {
        let fs = MemoryFs::new();
        fs.add_file("/src/a.md", "a");
        fs.add_file("/dst/stale.md", "old");

        replace_tree(&fs, Path::new("/src"), Path::new("/dst"), None).unwrap();

        assert!(!fs.exists(Path::new("/dst/stale.md")));
        assert!(fs.exists(Path::new("/dst/a.md")));
    }

    #[test]
    fn plain_copy_keeps_references() {
        let fs = MemoryFs::new();
        fs.add_file("/src/SKILL.md", "See _standards/GIT.md");

        replace_tree(&fs, Path::new("/src"), Path::new("/dst"), None).unwrap();

        assert_eq!(
            fs.contents("/dst/SKILL.md").as_deref(),
            Some("See _standards/GIT.md")
        );
    }
}
