//! Lazy line-by-line reading of a file.

use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_stream::wrappers::LinesStream;
use tokio_stream::{Stream, StreamExt};

use crate::error::{Error, Result};

/// A forward-only stream over the lines of one file.
///
/// Created by [`Node::lines`](crate::Node::lines). Lines are split on `\n`
/// with any trailing `\r` removed, and are read through a buffer so the
/// whole file is never held in memory. The stream owns the open file and
/// closes it when dropped. Once it has ended or failed it yields nothing
/// more; a fresh call to `Node::lines` is needed to read again.
///
/// # Examples
///
/// ```no_run
/// use tokio_stream::StreamExt;
///
/// # async fn demo() -> fsnode::Result<()> {
/// let log = fsnode::create("server.log")?;
/// let mut lines = log.lines().await?;
/// while let Some(line) = lines.next().await {
///     if line?.contains("ERROR") {
///         break;
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Lines {
    path: PathBuf,
    inner: LinesStream<BufReader<File>>,
    finished: bool,
}

impl Lines {
    pub(crate) fn new(path: PathBuf, file: File) -> Self {
        Self {
            path,
            inner: LinesStream::new(BufReader::new(file).lines()),
            finished: false,
        }
    }

    /// The file being read.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the next line, or `None` at end of file.
    ///
    /// # Errors
    ///
    /// Returns the I/O error from reading, including invalid UTF-8.
    pub async fn next_line(&mut self) -> Result<Option<String>> {
        if self.finished {
            return Ok(None);
        }
        let next = self.inner.next().await;
        self.settle(next)
    }

    /// Close the file now rather than when the stream goes out of scope.
    pub fn close(self) {
        drop(self);
    }

    /// Map an inner item to ours, marking the stream finished on end or error.
    fn settle(&mut self, item: Option<std::io::Result<String>>) -> Result<Option<String>> {
        match item {
            Some(Ok(line)) => Ok(Some(line)),
            Some(Err(err)) => {
                self.finished = true;
                Err(Error::Io(err))
            }
            None => {
                self.finished = true;
                Ok(None)
            }
        }
    }
}

impl Stream for Lines {
    type Item = Result<String>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if self.finished {
            return Poll::Ready(None);
        }
        match Pin::new(&mut self.inner).poll_next(cx) {
            Poll::Ready(item) => Poll::Ready(self.settle(item).transpose()),
            Poll::Pending => Poll::Pending,
        }
    }
}

impl Drop for Lines {
    fn drop(&mut self) {
        log::trace!("closing line reader for {}", self.path.display());
    }
}
