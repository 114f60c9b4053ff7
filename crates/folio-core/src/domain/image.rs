/// An uploaded image waiting to be stored for a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// Filename as sent by the client.
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }

    /// Zero-length uploads are what a browser sends for an empty file input.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
