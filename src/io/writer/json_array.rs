//! Streaming JSON array writer.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::marker::PhantomData;
use std::path::Path;

use log::{debug, warn};
use serde::Serialize;

use super::ArticleSink;
use crate::error::Error;

/// Writes `[`, then elements separated by `,\n`, then `]` on close.
///
/// Elements are serialized before the separator is emitted and the inner writer is flushed
/// after each of them: a failing element leaves no dangling comma.
pub struct JsonArrayWriter<W: Write, T> {
    inner: W,
    nb_written: usize,
    opened: bool,
    closed: bool,
    item: PhantomData<T>,
}

impl<T: Serialize> JsonArrayWriter<BufWriter<File>, T> {
    /// Creates (or truncates) the file at `path`.
    pub fn create(path: &Path) -> Result<Self, Error> {
        debug!("creating {:?}", path);
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write, T: Serialize> JsonArrayWriter<W, T> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            nb_written: 0,
            opened: false,
            closed: false,
            item: PhantomData,
        }
    }

    /// Number of elements written so far.
    pub fn written(&self) -> usize {
        self.nb_written
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    fn open(&mut self) -> Result<(), Error> {
        if !self.opened {
            self.inner.write_all(b"[\n")?;
            self.opened = true;
        }
        Ok(())
    }
}

impl<W: Write, T: Serialize> ArticleSink for JsonArrayWriter<W, T> {
    type Item = T;

    fn write_single(&mut self, val: &T) -> Result<(), Error> {
        if self.closed {
            return Err(Error::Custom("writing to a closed array".to_string()));
        }
        let element = serde_json::to_vec_pretty(val)?;

        self.open()?;
        if self.nb_written > 0 {
            self.inner.write_all(b",\n")?;
        }
        self.inner.write_all(&element)?;
        self.inner.flush()?;
        self.nb_written += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<(), Error> {
        if self.closed {
            warn!("trying to close an already closed array");
            return Ok(());
        }
        self.open()?;
        self.inner.write_all(b"\n]")?;
        self.inner.flush()?;
        self.closed = true;
        debug!("closed array of {} elements", self.nb_written);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::JsonArrayWriter;
    use crate::article::AcceptedArticle;
    use crate::io::writer::ArticleSink;

    fn article(title: &str) -> AcceptedArticle {
        AcceptedArticle::new(title.to_string(), format!("{title}の本文"), None)
    }

    #[test]
    fn empty_array() {
        let mut w: JsonArrayWriter<Vec<u8>, AcceptedArticle> = JsonArrayWriter::new(Vec::new());
        w.close().unwrap();
        let v: Value = serde_json::from_slice(&w.into_inner()).unwrap();
        assert_eq!(v, Value::Array(vec![]));
    }

    #[test]
    fn separators() {
        let mut w = JsonArrayWriter::new(Vec::new());
        w.write(vec![article("東京"), article("大阪")]).unwrap();
        w.write_single(&article("京都")).unwrap();
        w.close().unwrap();
        assert_eq!(w.written(), 3);

        let raw = String::from_utf8(w.into_inner()).unwrap();
        assert!(raw.starts_with("[\n"));
        assert!(raw.ends_with("\n]"));
        assert_eq!(raw.matches("},\n{").count(), 2);

        let v: Vec<AcceptedArticle> = serde_json::from_str(&raw).unwrap();
        assert_eq!(v[2].title(), "京都");
    }

    #[test]
    fn unclosed_prefix_is_repairable() {
        let mut w = JsonArrayWriter::new(Vec::new());
        w.write_single(&article("東京")).unwrap();
        w.write_single(&article("大阪")).unwrap();

        let mut raw = String::from_utf8(w.into_inner()).unwrap();
        assert!(!raw.ends_with(','));
        raw.push_str("\n]");
        let v: Vec<AcceptedArticle> = serde_json::from_str(&raw).unwrap();
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn closed_rejects_writes() {
        let mut w = JsonArrayWriter::new(Vec::new());
        w.close().unwrap();
        assert!(w.write_single(&article("東京")).is_err());
        assert!(w.close().is_ok());
    }
}
