/// Result of feeding an edit or blur event to a [`crate::TransliteratedInput`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputResponse {
    /// Value the host should display and propagate to its form state.
    pub value: String,
    /// True when conversion ran and changed the text.
    pub transliterated: bool,
}

impl InputResponse {
    pub(crate) fn unchanged(value: &str) -> Self {
        Self {
            value: value.to_string(),
            transliterated: false,
        }
    }
}
