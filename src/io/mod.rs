/*!
# IO utilities

Article saving and loading.

Accepted articles are saved as JSON arrays, either streamed element by element ([writer::JsonArrayWriter])
or buffered and written once ([writer::BufferedJsonWriter]).
Saved arrays can be read back with [reader::read_articles].
!*/
pub mod reader;
pub mod writer;
