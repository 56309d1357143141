use std::io;

/// Opens a URL outside the workflow, in a new browsing context.
pub trait Navigator: Send + Sync {
    fn open_in_new_context(&self, url: &str) -> io::Result<()>;
}
