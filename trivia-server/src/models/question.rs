//! Question input validation
//!
//! Two input shapes over the same entity: `NewQuestion` (create, all
//! fields required) and `QuestionPatch` (update, all fields optional).
//! Both are built through validating constructors; a constructed value
//! is safe to bind into a query as-is.

use super::ValidationError;

/// Minimum length for the question text
const MIN_QUESTION_LEN: usize = 5;

/// Maximum length for options and tags (VARCHAR(255) columns)
const MAX_FIELD_LEN: usize = 255;

/// The correct-answer marker, one of the four option slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    A,
    B,
    C,
    D,
}

impl Answer {
    /// Parse a single letter A-D.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            other => Err(ValidationError::InvalidVariant {
                field: "correct_answer",
                value: other.to_owned(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

// Lengths count characters, not bytes, matching the VARCHAR(255)
// column width. Options carry no constraint beyond the column width;
// the empty string is a valid option.
fn check_option(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.chars().count() > MAX_FIELD_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_FIELD_LEN,
        });
    }
    Ok(())
}

fn check_question_text(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() < MIN_QUESTION_LEN {
        return Err(ValidationError::TooShort {
            field: "question",
            min: MIN_QUESTION_LEN,
        });
    }
    Ok(())
}

/// Validated create input. All fields present.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct_answer: Answer,
    pub tags: String,
}

impl NewQuestion {
    /// Validate raw input into a `NewQuestion`.
    ///
    /// # Rules
    /// - question: at least 5 characters
    /// - options and tags: at most 255 characters
    /// - correct_answer: one of A/B/C/D
    /// - tags: optional, defaults to ""
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        question: &str,
        option_a: &str,
        option_b: &str,
        option_c: &str,
        option_d: &str,
        correct_answer: &str,
        tags: Option<&str>,
    ) -> Result<Self, ValidationError> {
        check_question_text(question)?;
        check_option("option_a", option_a)?;
        check_option("option_b", option_b)?;
        check_option("option_c", option_c)?;
        check_option("option_d", option_d)?;
        let correct_answer = Answer::parse(correct_answer)?;
        let tags = tags.unwrap_or_default();
        check_option("tags", tags)?;

        Ok(Self {
            question: question.to_owned(),
            option_a: option_a.to_owned(),
            option_b: option_b.to_owned(),
            option_c: option_c.to_owned(),
            option_d: option_d.to_owned(),
            correct_answer,
            tags: tags.to_owned(),
        })
    }
}

/// Validated partial-update input. Absent fields are left untouched
/// by the update; present fields obey the same rules as create.
#[derive(Debug, Clone, Default)]
pub struct QuestionPatch {
    pub question: Option<String>,
    pub option_a: Option<String>,
    pub option_b: Option<String>,
    pub option_c: Option<String>,
    pub option_d: Option<String>,
    pub correct_answer: Option<Answer>,
    pub tags: Option<String>,
}

impl QuestionPatch {
    /// Validate raw optional input into a `QuestionPatch`.
    pub fn new(
        question: Option<&str>,
        option_a: Option<&str>,
        option_b: Option<&str>,
        option_c: Option<&str>,
        option_d: Option<&str>,
        correct_answer: Option<&str>,
        tags: Option<&str>,
    ) -> Result<Self, ValidationError> {
        if let Some(q) = question {
            check_question_text(q)?;
        }
        for (field, value) in [
            ("option_a", option_a),
            ("option_b", option_b),
            ("option_c", option_c),
            ("option_d", option_d),
        ] {
            if let Some(v) = value {
                check_option(field, v)?;
            }
        }
        let correct_answer = correct_answer.map(Answer::parse).transpose()?;
        if let Some(t) = tags {
            check_option("tags", t)?;
        }

        Ok(Self {
            question: question.map(str::to_owned),
            option_a: option_a.map(str::to_owned),
            option_b: option_b.map(str::to_owned),
            option_c: option_c.map(str::to_owned),
            option_d: option_d.map(str::to_owned),
            correct_answer,
            tags: tags.map(str::to_owned),
        })
    }

    /// True when no field is supplied (a no-op patch).
    pub fn is_empty(&self) -> bool {
        self.question.is_none()
            && self.option_a.is_none()
            && self.option_b.is_none()
            && self.option_c.is_none()
            && self.option_d.is_none()
            && self.correct_answer.is_none()
            && self.tags.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Result<NewQuestion, ValidationError> {
        NewQuestion::new(
            "What is the boiling point of water at sea level?",
            "90C",
            "100C",
            "110C",
            "120C",
            "B",
            Some("science"),
        )
    }

    #[test]
    fn accepts_valid_input() {
        let q = valid().unwrap();
        assert_eq!(q.correct_answer, Answer::B);
        assert_eq!(q.tags, "science");
    }

    #[test]
    fn tags_default_to_empty() {
        let q = NewQuestion::new("Valid question?", "a", "b", "c", "d", "A", None).unwrap();
        assert_eq!(q.tags, "");
    }

    #[test]
    fn rejects_short_question() {
        let err = NewQuestion::new("Hi?", "a", "b", "c", "d", "A", None).unwrap_err();
        assert!(matches!(err, ValidationError::TooShort { min: 5, .. }));
    }

    #[test]
    fn accepts_empty_option() {
        // Options are required fields but carry no content constraint
        let q = NewQuestion::new("Valid question?", "a", "", "c", "d", "A", None).unwrap();
        assert_eq!(q.option_b, "");
    }

    #[test]
    fn question_length_counts_characters_not_bytes() {
        // 3 characters, 9 bytes: still under the minimum
        let err = NewQuestion::new("日本語", "a", "b", "c", "d", "A", None).unwrap_err();
        assert!(matches!(err, ValidationError::TooShort { min: 5, .. }));

        // 5 characters, 15 bytes: passes
        assert!(NewQuestion::new("日本語です", "a", "b", "c", "d", "A", None).is_ok());
    }

    #[test]
    fn option_length_counts_characters_not_bytes() {
        // 200 characters, 400 bytes: fits VARCHAR(255)
        let accented = "é".repeat(200);
        assert!(NewQuestion::new("Valid question?", &accented, "b", "c", "d", "A", None).is_ok());

        let too_long = "é".repeat(256);
        let err = NewQuestion::new("Valid question?", &too_long, "b", "c", "d", "A", None)
            .unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 255, .. }));
    }

    #[test]
    fn rejects_bad_answer_letter() {
        for bad in ["E", "a", "AB", ""] {
            let err = NewQuestion::new("Valid question?", "a", "b", "c", "d", bad, None)
                .unwrap_err();
            assert!(matches!(err, ValidationError::InvalidVariant { .. }), "{bad:?}");
        }
    }

    #[test]
    fn rejects_overlong_option() {
        let long = "x".repeat(256);
        let err = NewQuestion::new("Valid question?", &long, "b", "c", "d", "A", None)
            .unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 255, .. }));
    }

    #[test]
    fn answer_parse_roundtrip() {
        for letter in ["A", "B", "C", "D"] {
            assert_eq!(Answer::parse(letter).unwrap().as_str(), letter);
        }
    }

    #[test]
    fn patch_allows_absent_fields() {
        let p = QuestionPatch::new(None, None, None, None, None, None, Some("history")).unwrap();
        assert!(p.question.is_none());
        assert_eq!(p.tags.as_deref(), Some("history"));
        assert!(!p.is_empty());
    }

    #[test]
    fn patch_validates_present_fields() {
        let err = QuestionPatch::new(Some("Hi?"), None, None, None, None, None, None).unwrap_err();
        assert!(matches!(err, ValidationError::TooShort { .. }));

        let err =
            QuestionPatch::new(None, None, None, None, None, Some("Z"), None).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidVariant { .. }));
    }

    #[test]
    fn empty_patch_detected() {
        let p = QuestionPatch::new(None, None, None, None, None, None, None).unwrap();
        assert!(p.is_empty());
    }
}
