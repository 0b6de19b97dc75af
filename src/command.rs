//! In-chat training commands: `train: question | answer`.

/// Case-insensitive prefix that marks a training command.
pub const TRAIN_PREFIX: &str = "train:";

/// Whether the text starts with the training prefix (any case).
pub fn is_training_command(text: &str) -> bool {
    text.get(..TRAIN_PREFIX.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(TRAIN_PREFIX))
}

/// Split a training command into trimmed `(question, answer)`.
///
/// Returns `None` when the prefix is missing, the body does not contain
/// exactly one `|`, or either side is blank.
pub fn parse_training_command(text: &str) -> Option<(String, String)> {
    if !is_training_command(text) {
        return None;
    }
    let body = text[TRAIN_PREFIX.len()..].trim();
    let mut parts = body.split('|');
    let (Some(question), Some(answer), None) = (parts.next(), parts.next(), parts.next()) else {
        return None;
    };
    let (question, answer) = (question.trim(), answer.trim());
    if question.is_empty() || answer.is_empty() {
        return None;
    }
    Some((question.to_string(), answer.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_is_case_insensitive() {
        assert!(is_training_command("TRAIN: a | b"));
        assert!(is_training_command("Train:a|b"));
        assert!(!is_training_command("trains: a | b"));
        assert!(!is_training_command("tr"));
        assert!(!is_training_command(" train: a | b"));
    }

    #[test]
    fn parses_question_and_answer() {
        assert_eq!(
            parse_training_command("train:  Favorite Editor | Helix  "),
            Some(("Favorite Editor".to_string(), "Helix".to_string()))
        );
    }

    #[test]
    fn wrong_part_count_is_ignored() {
        assert!(parse_training_command("train: no separator").is_none());
        assert!(parse_training_command("train: a | b | c").is_none());
        assert!(parse_training_command("hello | world").is_none());
    }

    #[test]
    fn blank_sides_are_ignored() {
        assert!(parse_training_command("train: | answer").is_none());
        assert!(parse_training_command("train: question |   ").is_none());
    }

    #[test]
    fn multibyte_input_does_not_panic() {
        assert!(!is_training_command("träin: a | b"));
        assert!(parse_training_command("日本語").is_none());
    }
}
