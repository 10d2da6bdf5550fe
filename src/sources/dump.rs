//! MediaWiki XML dump reader.
//!
//! Dumps (`*-pages-articles.xml[.gz]`) are streamed with [quick_xml] events,
//! one `<page>` at a time, so that memory is released after each page.
//! Only main namespace pages that are not redirects are yielded.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use log::debug;
use quick_xml::events::Event;
use quick_xml::Reader;

use super::categories_of;
use crate::article::RawArticle;
use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Ns,
    Text,
}

/// `<page>` element being read.
#[derive(Debug, Default)]
struct Page {
    title: Option<String>,
    ns: Option<String>,
    text: Option<String>,
    redirect: bool,
}

impl Page {
    fn push(&mut self, field: Field, content: &str) {
        let slot = match field {
            Field::Title => &mut self.title,
            Field::Ns => &mut self.ns,
            Field::Text => &mut self.text,
        };
        slot.get_or_insert_with(String::new).push_str(content);
    }

    /// `Ok(None)` for pages we are not interested in.
    fn into_article(self) -> Result<Option<RawArticle>, Error> {
        if self.redirect {
            return Ok(None);
        }
        match (&self.ns, &self.title) {
            (Some(ns), _) if ns.trim() != "0" => return Ok(None),
            // namespace is absent from some old dumps, prefixed titles are not articles
            (None, Some(title)) if title.contains(':') => {
                debug!("skipping prefixed title {:?}", title);
                return Ok(None);
            }
            _ => (),
        }

        match (self.title, self.text) {
            (Some(title), Some(text)) if !title.is_empty() && !text.is_empty() => {
                let categories = categories_of(&text);
                Ok(Some(RawArticle::new(title, text, categories)))
            }
            (title, _) => Err(Error::MalformedPage(format!(
                "page {:?} has no title or text",
                title.unwrap_or_default()
            ))),
        }
    }
}

/// Dump reader, generic over the underlying reader so that
/// both plain and gzipped dumps can be read.
pub struct DumpReader<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
    done: bool,
}

impl DumpReader<Box<dyn BufRead + Send>> {
    /// Opens a dump, decompressing it if its extension is `.gz`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let reader: Box<dyn BufRead + Send> = match path.extension() {
            Some(ext) if ext == "gz" => Box::new(BufReader::new(MultiGzDecoder::new(file))),
            _ => Box::new(BufReader::new(file)),
        };
        debug!("reading dump {:?}", path);
        Ok(Self::new(reader))
    }
}

impl<R: BufRead> DumpReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: Reader::from_reader(reader),
            buf: Vec::new(),
            done: false,
        }
    }

    /// Reads events until the end of the next `<page>`.
    fn next_page(&mut self) -> Result<Option<Page>, Error> {
        let mut page: Option<Page> = None;
        let mut field: Option<Field> = None;

        loop {
            self.buf.clear();
            match self.reader.read_event_into(&mut self.buf)? {
                Event::Start(e) => match e.local_name().as_ref() {
                    b"page" => page = Some(Page::default()),
                    b"title" if page.is_some() => field = Some(Field::Title),
                    b"ns" if page.is_some() => field = Some(Field::Ns),
                    b"text" if page.is_some() => field = Some(Field::Text),
                    _ => (),
                },
                Event::Empty(e) => {
                    if let (b"redirect", Some(p)) = (e.local_name().as_ref(), page.as_mut()) {
                        p.redirect = true;
                    }
                }
                Event::Text(t) => {
                    if let (Some(f), Some(p)) = (field, page.as_mut()) {
                        p.push(f, &t.unescape()?);
                    }
                }
                Event::CData(t) => {
                    if let (Some(f), Some(p)) = (field, page.as_mut()) {
                        p.push(f, &String::from_utf8_lossy(&t.into_inner()));
                    }
                }
                Event::End(e) => match e.local_name().as_ref() {
                    b"page" => {
                        if let Some(p) = page.take() {
                            return Ok(Some(p));
                        }
                    }
                    b"title" | b"ns" | b"text" => field = None,
                    _ => (),
                },
                Event::Eof => return Ok(None),
                _ => (),
            }
        }
    }
}

impl<R: BufRead> Iterator for DumpReader<R> {
    type Item = Result<RawArticle, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            match self.next_page() {
                Ok(Some(page)) => match page.into_article() {
                    Ok(Some(article)) => return Some(Ok(article)),
                    Ok(None) => continue,
                    Err(e) => return Some(Err(e)),
                },
                Ok(None) => self.done = true,
                Err(e) => {
                    // xml errors leave the reader in an unknown state
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
        None
    }
}
