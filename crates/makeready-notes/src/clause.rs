//! Height clause extraction by token position around the anchor word
//!
//! A clause reads `<type> at <feet-inches> <action> [<inches>]`, e.g.
//! `Com at 20-6 Raise 18`. Only the first anchor on a line is used.

use crate::config::Vocabulary;
use crate::error::NotesError;
use crate::types::HeightClause;
use makeready_domain::{format_raw, HeightError, HeightValue};

/// Action token that adds the magnitude to the existing height
pub const RAISE: &str = "Raise";

/// Action token that subtracts the magnitude from the existing height
pub const LOWER: &str = "Lower";

/// Remove every character of `punctuation` from `text`
pub fn strip_punctuation(text: &str, punctuation: &str) -> String {
    text.chars().filter(|c| !punctuation.contains(*c)).collect()
}

/// Extracts the height clause from the remainder of a classified line
#[derive(Debug, Clone, Copy)]
pub struct HeightClauseExtractor<'v> {
    vocabulary: &'v Vocabulary,
}

impl<'v> HeightClauseExtractor<'v> {
    /// Create an extractor over the given vocabulary
    pub fn new(vocabulary: &'v Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Extract the clause from `text`
    ///
    /// `pole` is only used to label errors.
    pub fn extract(&self, pole: &str, text: &str) -> Result<HeightClause, NotesError> {
        let stripped = strip_punctuation(text, &self.vocabulary.punctuation);
        let tokens: Vec<&str> = stripped.split_whitespace().collect();
        let missing = || NotesError::MissingHeightClause {
            pole: pole.to_string(),
            line: text.trim().to_string(),
        };

        let anchor = tokens
            .iter()
            .position(|t| *t == self.vocabulary.anchor)
            .ok_or_else(missing)?;
        let type_raw = anchor
            .checked_sub(1)
            .and_then(|i| tokens.get(i))
            .ok_or_else(missing)?;
        let existing_raw = tokens.get(anchor + 1).ok_or_else(missing)?;
        let action_raw = tokens.get(anchor + 2).ok_or_else(missing)?;

        let (existing_height, new_height) = match *action_raw {
            RAISE | LOWER => {
                let magnitude_raw = tokens.get(anchor + 3).ok_or_else(missing)?;
                let magnitude: i32 = magnitude_raw.parse().map_err(|_| {
                    NotesError::height(
                        pole,
                        HeightError::malformed(magnitude_raw, "magnitude is not an integer"),
                    )
                })?;
                let existing =
                    HeightValue::decode(existing_raw).map_err(|e| NotesError::height(pole, e))?;
                let new = if *action_raw == RAISE {
                    existing.raise(magnitude)
                } else {
                    existing.lower(magnitude)
                };
                let existing_height =
                    format_raw(existing_raw).map_err(|e| NotesError::height(pole, e))?;
                (existing_height, new.encode())
            }
            _ => {
                let existing_height =
                    format_raw(existing_raw).map_err(|e| NotesError::height(pole, e))?;
                (existing_height.clone(), existing_height)
            }
        };

        let attachment_type = self
            .vocabulary
            .attachment_label(type_raw)
            .ok_or_else(|| NotesError::UnknownAttachmentType {
                pole: pole.to_string(),
                token: type_raw.to_string(),
            })?;
        let action = self
            .vocabulary
            .action_label(action_raw)
            .ok_or_else(|| NotesError::UnknownAction {
                pole: pole.to_string(),
                token: action_raw.to_string(),
            })?;

        Ok(HeightClause {
            attachment_type: attachment_type.to_string(),
            action: action.to_string(),
            existing_height,
            new_height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Result<HeightClause, NotesError> {
        let vocabulary = Vocabulary::default();
        HeightClauseExtractor::new(&vocabulary).extract("100", text)
    }

    #[test]
    fn test_attach_keeps_height() {
        let clause = extract(" Com at 20-6 Attach .").unwrap();
        assert_eq!(clause.attachment_type, "Cable/Strand");
        assert_eq!(clause.action, "No Make Ready");
        assert_eq!(clause.existing_height, "20'-6\"");
        assert_eq!(clause.new_height, "20'-6\"");
    }

    #[test]
    fn test_raise_adds_inches() {
        let clause = extract(" Strand at 20-6 Raise 18").unwrap();
        assert_eq!(clause.action, "Raise");
        assert_eq!(clause.existing_height, "20'-6\"");
        assert_eq!(clause.new_height, "22'-0\"");
    }

    #[test]
    fn test_lower_subtracts_inches() {
        let clause = extract(" Guy at 22-0 Lower 6;").unwrap();
        assert_eq!(clause.attachment_type, "Down Guy");
        assert_eq!(clause.action, "Lower");
        assert_eq!(clause.existing_height, "22'-0\"");
        assert_eq!(clause.new_height, "21'-6\"");
    }

    #[test]
    fn test_punctuation_is_stripped_before_tokenizing() {
        let clause = extract(": Com at 19'-4\" Raise 8.").unwrap();
        assert_eq!(clause.existing_height, "19'-4\"");
        assert_eq!(clause.new_height, "20'-0\"");
    }

    #[test]
    fn test_only_first_anchor_is_used() {
        let clause = extract(" Com at 20-0 Attach and Guy at 15-0 Lower 12").unwrap();
        assert_eq!(clause.attachment_type, "Cable/Strand");
        assert_eq!(clause.new_height, "20'-0\"");
    }

    #[test]
    fn test_anchor_is_case_sensitive() {
        let result = extract(" Com AT 20-0 Attach");
        assert!(matches!(result, Err(NotesError::MissingHeightClause { .. })));
    }

    #[test]
    fn test_missing_anchor() {
        let result = extract(" Com 20-0 Attach");
        assert!(matches!(result, Err(NotesError::MissingHeightClause { .. })));
    }

    #[test]
    fn test_truncated_clause() {
        assert!(matches!(
            extract("at 20-0 Attach"),
            Err(NotesError::MissingHeightClause { .. })
        ));
        assert!(matches!(
            extract(" Com at 20-0"),
            Err(NotesError::MissingHeightClause { .. })
        ));
        assert!(matches!(
            extract(" Com at 20-0 Raise"),
            Err(NotesError::MissingHeightClause { .. })
        ));
    }

    #[test]
    fn test_malformed_existing_height_on_raise() {
        let result = extract(" Com at 20-13 Raise 6");
        assert!(matches!(result, Err(NotesError::MalformedHeight { .. })));
    }

    #[test]
    fn test_malformed_magnitude() {
        let result = extract(" Com at 20-1 Raise six");
        assert!(matches!(result, Err(NotesError::MalformedHeight { .. })));
    }

    #[test]
    fn test_attach_does_not_validate_numbers() {
        let clause = extract(" Com at 20-x Attach").unwrap();
        assert_eq!(clause.existing_height, "20'-x\"");
    }

    #[test]
    fn test_attach_requires_separator() {
        let result = extract(" Com at 206 Attach");
        assert!(matches!(result, Err(NotesError::MalformedHeight { .. })));
    }

    #[test]
    fn test_unknown_attachment_type() {
        let result = extract(" Fiber at 20-0 Attach");
        assert!(matches!(
            result,
            Err(NotesError::UnknownAttachmentType { ref token, .. }) if token == "Fiber"
        ));
    }

    #[test]
    fn test_unknown_action() {
        let result = extract(" Com at 20-0 Transfer");
        assert!(matches!(
            result,
            Err(NotesError::UnknownAction { ref token, .. }) if token == "Transfer"
        ));
    }

    #[test]
    fn test_height_error_precedes_vocabulary_error() {
        let result = extract(" Fiber at 206 Transfer");
        assert!(matches!(result, Err(NotesError::MalformedHeight { .. })));
    }
}
