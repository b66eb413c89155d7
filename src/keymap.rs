//! Keyboard shortcuts for the active game panel.

use crate::quiz::{ChallengeItem, Selection};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    Answer(Selection),
    Advance,
}

/// Translate a `KeyboardEvent.key` value for the item currently on screen.
///
/// Digits pick the n-th option of a multiple-choice item, `t`/`f` answer a
/// true/false item, `Enter` advances. Anything else maps to nothing.
pub fn map_key(key: &str, item: Option<&ChallengeItem>) -> Option<KeyCommand> {
    if key == "Enter" {
        return Some(KeyCommand::Advance);
    }
    match item? {
        ChallengeItem::MultipleChoice(mc) => {
            let n: usize = key.parse().ok()?;
            n.checked_sub(1)
                .filter(|i| *i < mc.options.len())
                .map(|i| KeyCommand::Answer(Selection::Option(i)))
        }
        ChallengeItem::Boolean(_) => match key.to_ascii_lowercase().as_str() {
            "t" => Some(KeyCommand::Answer(Selection::Boolean(true))),
            "f" => Some(KeyCommand::Answer(Selection::Boolean(false))),
            _ => None,
        },
    }
}

/// Whether a key press aimed at an element with this tag name is the user
/// typing into a form field. Shortcuts stay off for those.
pub fn is_text_entry(tag_name: &str) -> bool {
    ["input", "textarea", "select"]
        .iter()
        .any(|t| tag_name.eq_ignore_ascii_case(t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{bug_hunt, web_myths};

    #[test]
    fn test_digits_select_options() {
        let def = bug_hunt();
        let item = def.items.first();
        assert_eq!(
            map_key("1", item),
            Some(KeyCommand::Answer(Selection::Option(0)))
        );
        assert_eq!(
            map_key("3", item),
            Some(KeyCommand::Answer(Selection::Option(2)))
        );
        assert_eq!(map_key("4", item), None);
        assert_eq!(map_key("0", item), None);
        assert_eq!(map_key("t", item), None);
    }

    #[test]
    fn test_out_of_range_digits_do_not_panic() {
        let def = bug_hunt();
        let item = def.items.first();
        for key in ["0", "00", "9", "18446744073709551615"] {
            assert_eq!(map_key(key, item), None, "key {key:?}");
        }
    }

    #[test]
    fn test_letters_answer_statements() {
        let def = web_myths();
        let item = def.items.first();
        assert_eq!(
            map_key("T", item),
            Some(KeyCommand::Answer(Selection::Boolean(true)))
        );
        assert_eq!(
            map_key("f", item),
            Some(KeyCommand::Answer(Selection::Boolean(false)))
        );
        assert_eq!(map_key("1", item), None);
    }

    #[test]
    fn test_enter_advances_even_when_complete() {
        assert_eq!(map_key("Enter", None), Some(KeyCommand::Advance));
        assert_eq!(map_key("t", None), None);
    }

    #[test]
    fn test_form_fields_count_as_text_entry() {
        assert!(is_text_entry("INPUT"));
        assert!(is_text_entry("textarea"));
        assert!(is_text_entry("SELECT"));
        assert!(!is_text_entry("BUTTON"));
        assert!(!is_text_entry("BODY"));
    }
}
