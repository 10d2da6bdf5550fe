/*!
# JSON array writing

Both writers implement [ArticleSink], and produce a JSON array of the written items.

[JsonArrayWriter] writes each element as soon as it is received, so that a crash leaves a valid prefix of the array
(only missing the closing bracket).
[BufferedJsonWriter] keeps everything in memory and writes the whole array on close.
!*/
mod buffered;
mod json_array;
mod sink;

pub use buffered::BufferedJsonWriter;
pub use json_array::JsonArrayWriter;
pub use sink::ArticleSink;
