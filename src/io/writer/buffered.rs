//! Whole-array writer, for small runs.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Serialize;
use serde_json::Value;

use super::ArticleSink;
use crate::error::Error;

/// Collects items and writes them as a pretty-printed array on close.
///
/// Nothing is written to disk before [ArticleSink::close] is called.
pub struct BufferedJsonWriter<T> {
    dst: PathBuf,
    items: Vec<Value>,
    closed: bool,
    item: PhantomData<T>,
}

impl<T: Serialize> BufferedJsonWriter<T> {
    pub fn new(dst: &Path) -> Self {
        Self {
            dst: dst.to_path_buf(),
            items: Vec::new(),
            closed: false,
            item: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Serialize> ArticleSink for BufferedJsonWriter<T> {
    type Item = T;

    fn write_single(&mut self, val: &T) -> Result<(), Error> {
        if self.closed {
            return Err(Error::Custom("writing to a closed array".to_string()));
        }
        self.items.push(serde_json::to_value(val)?);
        Ok(())
    }

    fn close(&mut self) -> Result<(), Error> {
        if self.closed {
            warn!("{:?}: trying to close an already closed writer", self.dst);
            return Ok(());
        }
        let mut w = BufWriter::new(File::create(&self.dst)?);
        serde_json::to_writer_pretty(&mut w, &self.items)?;
        w.flush()?;
        self.closed = true;
        info!("wrote {} items to {:?}", self.items.len(), self.dst);
        Ok(())
    }
}
