//! 文件系统遍历功能
//!
//! 本模块在 walkdir 之上提供容错的深度优先遍历：
//! 根目录本身也会被产出，每个目录之后先是它自己的文件，然后才是子目录。

use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use log::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use super::entry::Entry;
use super::options::FindOptions;
use crate::errors::FindError;

/// 基于迭代器的文件系统遍历器
pub struct FileWalkerIterator {
    inner: walkdir::IntoIter,
    root_path: PathBuf,
    skipped: usize,
}

impl FileWalkerIterator {
    /// 使用给定路径和选项创建新的 FileWalkerIterator
    pub fn new<P: AsRef<Path>>(path: P, options: &FindOptions) -> Self {
        let root_path = path.as_ref().to_path_buf();
        let mut walker = WalkDir::new(&root_path)
            .follow_links(options.follow_links)
            .sort_by(files_first);

        if let Some(depth) = options.max_depth {
            walker = walker.max_depth(depth);
        }

        Self {
            inner: walker.into_iter(),
            root_path,
            skipped: 0,
        }
    }

    /// 已跳过的遍历错误数量
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// 记录遍历错误并继续
    fn handle_error(&mut self, err: walkdir::Error) {
        self.skipped += 1;
        let err = FindError::from(err);
        warn!("{} (under {})", err, self.root_path.display());
    }
}

impl Iterator for FileWalkerIterator {
    type Item = Entry;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Ok(entry) => return Some(Entry::new(entry.into_path())),
                Err(err) => self.handle_error(err),
            }
        }
    }
}

impl Drop for FileWalkerIterator {
    fn drop(&mut self) {
        if self.skipped > 0 {
            debug!(
                "跳过了 {} 个无法访问的条目: {}",
                self.skipped,
                self.root_path.display()
            );
        }
    }
}

/// 同一目录下：文件在前，子目录在后，各自按名称排序
fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    is_dir_like(a)
        .cmp(&is_dir_like(b))
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// 与 `Entry::is_dir` 一致：指向目录的符号链接也算目录（但不跟随时不会进入）
fn is_dir_like(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}
