//! Filesystem operations on a [`Node`].
//!
//! Every method is a single call into `tokio::fs`. Errors from the
//! filesystem come back unmodified inside [`Error::Io`]; the only methods
//! that swallow errors are the boolean predicates [`Node::exists`],
//! [`Node::is_dir`] and [`Node::is_file`].

use std::borrow::Cow;
use std::fs::Metadata;
use std::io::{self, ErrorKind};
use std::path::Path;

use regex::Regex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tokio::fs;

use crate::error::{Error, Result};
use crate::node::{Lines, Node};

/// Whether `a` and `b` name the same directory entry, as happens with a
/// case-only rename on a case-insensitive filesystem.
#[cfg(unix)]
async fn same_entry(a: &Path, b: &Path) -> Result<bool> {
    use std::os::unix::fs::MetadataExt;

    let a = fs::symlink_metadata(a).await?;
    let b = fs::symlink_metadata(b).await?;
    Ok(a.dev() == b.dev() && a.ino() == b.ino())
}

#[cfg(not(unix))]
async fn same_entry(a: &Path, b: &Path) -> Result<bool> {
    Ok(fs::canonicalize(a).await? == fs::canonicalize(b).await?)
}

/// How [`Node::rename_with`] finds the part of the name to replace.
///
/// Only the first match is replaced.
///
/// # Examples
///
/// ```
/// use fsnode::RenamePattern;
/// use regex::Regex;
///
/// let literal = RenamePattern::from("draft");
/// assert_eq!(literal.replace_first("draft-draft.md", "final"), "final-draft.md");
///
/// let re = Regex::new(r"(\d+)").unwrap();
/// let pattern = RenamePattern::from(&re);
/// assert_eq!(pattern.replace_first("v12.txt", "n$1"), "vn12.txt");
/// ```
#[derive(Debug, Clone, Copy)]
pub enum RenamePattern<'a> {
    /// Match this exact substring.
    Literal(&'a str),
    /// Match a regular expression; `$1`-style groups expand in the replacement.
    Regex(&'a Regex),
}

impl RenamePattern<'_> {
    /// Replace the first match of this pattern in `haystack`.
    #[must_use]
    pub fn replace_first<'h>(&self, haystack: &'h str, replacement: &str) -> Cow<'h, str> {
        match *self {
            Self::Literal(needle) if haystack.contains(needle) => {
                Cow::Owned(haystack.replacen(needle, replacement, 1))
            }
            Self::Literal(_) => Cow::Borrowed(haystack),
            Self::Regex(re) => re.replace(haystack, replacement),
        }
    }
}

impl<'a> From<&'a str> for RenamePattern<'a> {
    fn from(needle: &'a str) -> Self {
        Self::Literal(needle)
    }
}

impl<'a> From<&'a String> for RenamePattern<'a> {
    fn from(needle: &'a String) -> Self {
        Self::Literal(needle)
    }
}

impl<'a> From<&'a Regex> for RenamePattern<'a> {
    fn from(re: &'a Regex) -> Self {
        Self::Regex(re)
    }
}

impl Node {
    /// Metadata for this path, following symlinks.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error, e.g. not-found.
    pub async fn stat(&self) -> Result<Metadata> {
        Ok(fs::metadata(&self.full_path).await?)
    }

    /// Metadata for this path without following a final symlink.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error, e.g. not-found.
    pub async fn lstat(&self) -> Result<Metadata> {
        Ok(fs::symlink_metadata(&self.full_path).await?)
    }

    /// Whether something exists at this path.
    ///
    /// # Errors
    ///
    /// A missing path is `Ok(false)`. Any other failure to check, such as a
    /// permission error on a parent directory, is returned.
    pub async fn try_exists(&self) -> Result<bool> {
        Ok(fs::try_exists(&self.full_path).await?)
    }

    /// Whether something exists at this path. Never fails; an unanswerable
    /// check counts as "does not exist".
    pub async fn exists(&self) -> bool {
        self.try_exists().await.unwrap_or_else(|err| {
            log::debug!("existence check for {self} failed, reporting false: {err}");
            false
        })
    }

    /// Metadata if the path exists, `None` if it is definitely absent.
    async fn stat_if_present(&self) -> Result<Option<Metadata>> {
        match fs::metadata(&self.full_path).await {
            Ok(meta) => Ok(Some(meta)),
            Err(err) if is_absent(&err) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Whether this path is a directory, reporting unexpected stat failures.
    ///
    /// # Errors
    ///
    /// A missing path is `Ok(false)`. Other stat failures (permission
    /// denied, I/O errors) are returned.
    pub async fn try_is_dir(&self) -> Result<bool> {
        Ok(self.stat_if_present().await?.is_some_and(|m| m.is_dir()))
    }

    /// Whether this path is a regular file, reporting unexpected stat failures.
    ///
    /// # Errors
    ///
    /// A missing path is `Ok(false)`. Other stat failures are returned.
    pub async fn try_is_file(&self) -> Result<bool> {
        Ok(self.stat_if_present().await?.is_some_and(|m| m.is_file()))
    }

    /// Whether this path is a directory. Any stat failure reads as `false`.
    pub async fn is_dir(&self) -> bool {
        self.try_is_dir().await.unwrap_or_else(|err| {
            log::debug!("stat of {self} failed, not a directory: {err}");
            false
        })
    }

    /// Whether this path is a regular file. Any stat failure reads as `false`.
    pub async fn is_file(&self) -> bool {
        self.try_is_file().await.unwrap_or_else(|err| {
            log::debug!("stat of {self} failed, not a file: {err}");
            false
        })
    }

    /// Names of the entries directly inside this directory, sorted.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if this path is not a readable directory.
    pub async fn readdir(&self) -> Result<Vec<String>> {
        let mut dir = fs::read_dir(&self.full_path).await?;
        let mut names = Vec::new();
        while let Some(entry) = dir.next_entry().await? {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        log::trace!("read {} entries from {self}", names.len());
        Ok(names)
    }

    /// One child node per entry of [`Node::readdir`].
    ///
    /// # Errors
    ///
    /// Same as [`Node::readdir`].
    pub async fn ls(&self) -> Result<Vec<Node>> {
        let names = self.readdir().await?;
        Ok(names.iter().map(|name| self.child(name)).collect())
    }

    /// Whether an entry named exactly `name` is directly inside this directory.
    ///
    /// # Errors
    ///
    /// Same as [`Node::readdir`].
    pub async fn contains(&self, name: &str) -> Result<bool> {
        Ok(self.readdir().await?.iter().any(|entry| entry == name))
    }

    /// Create or truncate the file and write `data` to it.
    ///
    /// # Errors
    ///
    /// Returns the I/O error on permission or path problems.
    pub async fn write(&self, data: impl AsRef<[u8]>) -> Result<()> {
        let data = data.as_ref();
        log::debug!("writing {} bytes to {self}", data.len());
        fs::write(&self.full_path, data).await?;
        Ok(())
    }

    /// Serialize `value` as indented JSON and [`write`](Node::write) it.
    ///
    /// The indent width is [`Node::json_indent`] (4 unless configured). An
    /// indent of zero writes compact JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if `value` cannot be serialized, or the I/O
    /// error from writing.
    pub async fn write_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let bytes = if self.json_indent == 0 {
            serde_json::to_vec(value)?
        } else {
            let indent = " ".repeat(self.json_indent);
            let mut buf = Vec::new();
            let mut ser = serde_json::Serializer::with_formatter(
                &mut buf,
                PrettyFormatter::with_indent(indent.as_bytes()),
            );
            value.serialize(&mut ser)?;
            buf
        };
        self.write(bytes).await
    }

    /// Create this directory and any missing parents.
    ///
    /// # Errors
    ///
    /// Returns the I/O error, e.g. when a path component is a file.
    pub async fn mkdirs(&self) -> Result<()> {
        log::debug!("creating directory {self}");
        fs::create_dir_all(&self.full_path).await?;
        Ok(())
    }

    /// Remove this (empty) directory.
    ///
    /// # Errors
    ///
    /// Returns the I/O error, e.g. when the directory is not empty.
    pub async fn rmdir(&self) -> Result<()> {
        log::debug!("removing directory {self}");
        fs::remove_dir(&self.full_path).await?;
        Ok(())
    }

    /// Remove this file.
    ///
    /// # Errors
    ///
    /// Returns the I/O error, e.g. not-found.
    pub async fn unlink(&self) -> Result<()> {
        log::debug!("removing file {self}");
        fs::remove_file(&self.full_path).await?;
        Ok(())
    }

    /// [`rmdir`](Node::rmdir) if this is a directory, else [`unlink`](Node::unlink).
    ///
    /// # Errors
    ///
    /// Returns the I/O error from whichever removal runs.
    pub async fn delete(&self) -> Result<()> {
        if self.is_dir().await {
            self.rmdir().await
        } else {
            self.unlink().await
        }
    }

    /// Rename to `new_name`, resolved as a sibling of this node, and update
    /// this node in place to point at the new location.
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorKind::AlreadyExists`] I/O error if the target is
    /// taken by another entry, or the underlying error if the source is
    /// missing. On error the node is left unchanged. Renaming onto the same
    /// path succeeds without touching the disk, and a target that is the
    /// source itself under different case is not treated as taken.
    pub async fn rename(&mut self, new_name: impl AsRef<Path>) -> Result<()> {
        let target = self.sibling(new_name);
        if target.full_path == self.full_path {
            fs::symlink_metadata(&self.full_path).await?;
            log::trace!("rename of {self} onto itself, nothing to do");
            return Ok(());
        }

        if fs::try_exists(&target.full_path).await?
            && !same_entry(&self.full_path, &target.full_path).await?
        {
            return Err(Error::Io(io::Error::new(
                ErrorKind::AlreadyExists,
                format!("rename target {target} already exists"),
            )));
        }

        log::debug!("renaming {self} to {target}");
        fs::rename(&self.full_path, &target.full_path).await?;
        self.set_path(target.full_path);
        Ok(())
    }

    /// Rename by replacing the first match of `pattern` in [`Node::name`]
    /// with `replacement`. See [`Node::rename`] for the in-place update.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the current name is not valid
    /// UTF-8, and otherwise the same errors as [`Node::rename`].
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn demo() -> fsnode::Result<()> {
    /// let mut node = fsnode::create("report-draft.txt")?;
    /// node.rename_with("draft", "final").await?;
    /// assert_eq!(node.name(), "report-final.txt");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn rename_with<'p>(
        &mut self,
        pattern: impl Into<RenamePattern<'p>>,
        replacement: &str,
    ) -> Result<()> {
        let name = self.utf8_name()?;
        let new_name = pattern.into().replace_first(name, replacement).into_owned();
        self.rename(new_name).await
    }

    /// Like [`Node::rename_with`], compiling `pattern` as a regular expression.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if `pattern` does not compile, and
    /// otherwise the same errors as [`Node::rename`].
    pub async fn rename_matching(&mut self, pattern: &str, replacement: &str) -> Result<()> {
        let re = Regex::new(pattern)?;
        self.rename_with(&re, replacement).await
    }

    /// The final component as UTF-8. The root has an empty name.
    fn utf8_name(&self) -> Result<&str> {
        match self.full_path.file_name() {
            Some(name) => name.to_str().ok_or_else(|| Error::InvalidPath {
                path: self.full_path.clone(),
                reason: "file name is not valid UTF-8".into(),
            }),
            None => Ok(""),
        }
    }

    /// The whole file as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the file is unreadable or not valid UTF-8.
    pub async fn read(&self) -> Result<String> {
        Ok(fs::read_to_string(&self.full_path).await?)
    }

    /// The whole file as raw bytes.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the file is unreadable.
    pub async fn read_bytes(&self) -> Result<Vec<u8>> {
        Ok(fs::read(&self.full_path).await?)
    }

    /// [`read`](Node::read) the file and parse it as JSON.
    ///
    /// # Errors
    ///
    /// Returns the I/O error from reading, or [`Error::Json`] for malformed
    /// content.
    pub async fn read_json<T: DeserializeOwned>(&self) -> Result<T> {
        let text = self.read().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Open the file for lazy, line-by-line reading.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the file cannot be opened.
    pub async fn lines(&self) -> Result<Lines> {
        let file = fs::File::open(&self.full_path).await?;
        log::trace!("opened {self} for line reading");
        Ok(Lines::new(self.full_path.clone(), file))
    }

    /// The first line of the file, or `None` if the file holds no data.
    ///
    /// The file is closed as soon as the first line is read, whether or not
    /// more lines follow.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the file cannot be opened or the first read
    /// fails.
    pub async fn head(&self) -> Result<Option<String>> {
        let mut lines = self.lines().await?;
        let first = lines.next_line().await;
        lines.close();
        first
    }
}

/// Stat failures that mean "nothing is there".
fn is_absent(err: &io::Error) -> bool {
    matches!(err.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory)
}
