//! Hardcoded fallback lists.
//!
//! Used by the generator when its inputs are unreadable and by the loader
//! when neither metadata nor probing produced anything.

use super::entry::{pad2, CatalogEntry, StreamEntry};

/// Size of the default document list (`pdf01.pdf` … `pdf11.pdf`)
pub const DEFAULT_DOCUMENT_COUNT: usize = 11;

/// Id, title and description of each default stream
const DEFAULT_STREAMS: [(&str, &str, &str); 5] = [
    ("dQw4w9WgXcQ", "YouTube 音樂 01", "第一個 YouTube 音訊"),
    ("9bZkp7q19f0", "YouTube 音樂 02", "第二個 YouTube 音訊"),
    ("kJQP7kiw5Fk", "YouTube 音樂 03", "第三個 YouTube 音訊"),
    ("JGwWNGJdvx8", "YouTube 音樂 04", "第四個 YouTube 音訊"),
    ("OPf0YbXqDm0", "YouTube 音樂 05", "第五個 YouTube 音訊"),
];

/// Sequential document entries `<prefix>01.<ext>` … `<prefix>NN.<ext>`
pub fn default_documents(prefix: &str, extension: &str, directory: &str) -> Vec<CatalogEntry> {
    (1..=DEFAULT_DOCUMENT_COUNT)
        .map(|n| {
            let token = pad2(n);
            let filename = format!("{}{}.{}", prefix, token, extension);
            CatalogEntry::new(n as u32, filename, &token, directory)
        })
        .collect()
}

/// The fixed five-entry stream list
pub fn default_streams() -> Vec<StreamEntry> {
    DEFAULT_STREAMS
        .iter()
        .map(|(id, title, description)| StreamEntry::new(*id, *title, *description))
        .collect()
}
