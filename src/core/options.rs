//! Dropdown rendering for a loaded list.

use crate::domain::{Library, MediaKind};

/// One option of a selection control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Index into the list; `None` for the placeholder
    pub value: Option<usize>,
    pub label: String,
}

/// Label of the leading "nothing selected" option
pub fn placeholder(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Document => "請選擇 PDF 文件",
        MediaKind::Stream => "請選擇 YouTube 音訊",
    }
}

/// Placeholder followed by every title in display order
pub fn dropdown_options(library: &Library, kind: MediaKind) -> Vec<SelectOption> {
    std::iter::once(SelectOption {
        value: None,
        label: placeholder(kind).to_string(),
    })
    .chain(
        library
            .titles(kind)
            .into_iter()
            .enumerate()
            .map(|(index, title)| SelectOption {
                value: Some(index),
                label: title.to_string(),
            }),
    )
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{default_streams, StreamEntry};

    #[test]
    fn test_placeholder_leads() {
        let library = Library::new(Vec::new(), default_streams());
        let options = dropdown_options(&library, MediaKind::Stream);

        assert_eq!(options.len(), 6);
        assert_eq!(options[0].value, None);
        assert_eq!(options[0].label, "請選擇 YouTube 音訊");
        assert_eq!(options[1].value, Some(0));
        assert_eq!(options[5].label, "YouTube 音樂 05");
    }

    #[test]
    fn test_empty_list_has_only_placeholder() {
        let library = Library::default();
        let options = dropdown_options(&library, MediaKind::Document);

        assert_eq!(options.len(), 1);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let library = Library::new(
            Vec::new(),
            vec![StreamEntry::new("a", "Same", ""), StreamEntry::new("a", "Same", "")],
        );

        assert_eq!(dropdown_options(&library, MediaKind::Stream).len(), 3);
    }
}
