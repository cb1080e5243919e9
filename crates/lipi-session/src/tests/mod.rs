
use super::{InputLanguage, InputResponse, TransliteratedInput};

// Helper: simulate typing a string one character at a time, the way a
// text field reports each edit as the full new value.
pub(super) fn type_string(input: &mut TransliteratedInput, s: &str) -> Vec<InputResponse> {
    let mut responses = Vec::new();
    for ch in s.chars() {
        let mut next = input.value().to_string();
        next.push(ch);
        responses.push(input.handle_change(&next));
    }
    responses
}

pub(super) fn hindi() -> TransliteratedInput {
    TransliteratedInput::new(InputLanguage::Hindi)
}
