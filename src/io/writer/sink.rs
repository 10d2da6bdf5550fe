use serde::Serialize;

use crate::error::Error;

/// Destination of pipeline results.
pub trait ArticleSink {
    type Item: Serialize;

    fn write(&mut self, vals: Vec<Self::Item>) -> Result<(), Error> {
        for val in &vals {
            self.write_single(val)?;
        }
        Ok(())
    }
    fn write_single(&mut self, val: &Self::Item) -> Result<(), Error>;

    /// Ends the array. Items written afterwards are an error.
    fn close(&mut self) -> Result<(), Error>;
}
