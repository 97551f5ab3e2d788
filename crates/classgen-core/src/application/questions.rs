//! Question selection for the interactive resolver.
//!
//! [`select_questions`] is a pure function of the supplied options and the
//! answers collected so far. The resolver calls it once per round and asks
//! the first question it returns; each round therefore sees the effect of
//! every earlier answer without any shared mutable flags.

use std::collections::BTreeMap;

use crate::domain::{
    HeaderExtension, RawOptions, ResolverDefaults, SourceExtension,
    class_name::{self, ClassNameVerdict},
};

/// Prompt used whenever a fresh class name is needed.
pub const CLASS_NAME_PROMPT: &str = "Please enter a class name (spaces will be ignored)";

/// Identifies a question and the answer it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QuestionKey {
    Disclaimer,
    ClassName,
    ReplaceWithStripped,
    NewClassName,
    HeaderDir,
    HeaderExt,
    SourceDir,
    SourceExt,
    Proceed,
}

/// Checks a transformed free-text answer; `Err` carries the message shown
/// before the question is asked again.
pub type Validator = fn(&str) -> Result<(), String>;

/// Rewrites a free-text answer before validation.
pub type Transform = fn(&str) -> String;

/// One question, tagged by the kind of answer it expects.
#[derive(Debug, Clone)]
pub enum QuestionSpec {
    FreeText {
        key: QuestionKey,
        message: String,
        default: Option<String>,
        validate: Option<Validator>,
        transform: Option<Transform>,
    },
    Confirm {
        key: QuestionKey,
        message: String,
        default: bool,
    },
    Choice {
        key: QuestionKey,
        message: String,
        choices: Vec<String>,
        default: usize,
    },
}

/// Raw answer as returned by a prompter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Confirm(bool),
    Choice(usize),
}

/// Why an answer was not recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Failed validation; ask again.
    Invalid(String),
    /// The answer kind does not match the question kind.
    WrongShape,
}

impl QuestionSpec {
    pub fn key(&self) -> QuestionKey {
        match self {
            Self::FreeText { key, .. } | Self::Confirm { key, .. } | Self::Choice { key, .. } => {
                *key
            }
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::FreeText { message, .. }
            | Self::Confirm { message, .. }
            | Self::Choice { message, .. } => message,
        }
    }

    /// Normalise and check an answer.
    ///
    /// Free text is transformed first, an empty result falls back to the
    /// question's default, and only then is it validated.
    pub fn accept(&self, answer: Answer) -> Result<Answer, Rejection> {
        match (self, answer) {
            (
                Self::FreeText {
                    default,
                    validate,
                    transform,
                    ..
                },
                Answer::Text(raw),
            ) => {
                let mut text = match transform {
                    Some(transform) => transform(&raw),
                    None => raw,
                };
                if text.is_empty() {
                    if let Some(default) = default {
                        text.clone_from(default);
                    }
                }
                if let Some(validate) = validate {
                    validate(&text).map_err(Rejection::Invalid)?;
                }
                Ok(Answer::Text(text))
            }
            (Self::Confirm { .. }, answer @ Answer::Confirm(_)) => Ok(answer),
            (Self::Choice { choices, .. }, Answer::Choice(index)) if index < choices.len() => {
                Ok(Answer::Choice(index))
            }
            _ => Err(Rejection::WrongShape),
        }
    }
}

/// Answers recorded so far, keyed by question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers(BTreeMap<QuestionKey, Answer>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, key: QuestionKey, answer: Answer) {
        self.0.insert(key, answer);
    }

    pub fn contains(&self, key: QuestionKey) -> bool {
        self.0.contains_key(&key)
    }

    pub fn text(&self, key: QuestionKey) -> Option<&str> {
        match self.0.get(&key) {
            Some(Answer::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn confirmed(&self, key: QuestionKey) -> Option<bool> {
        match self.0.get(&key) {
            Some(Answer::Confirm(yes)) => Some(*yes),
            _ => None,
        }
    }

    pub fn choice(&self, key: QuestionKey) -> Option<usize> {
        match self.0.get(&key) {
            Some(Answer::Choice(index)) => Some(*index),
            _ => None,
        }
    }

}

/// Accept a free-text class name once spaces are stripped.
pub fn validate_class_name_answer(input: &str) -> Result<(), String> {
    match class_name::validate(input).message() {
        None => Ok(()),
        Some(message) => Err(message.to_string()),
    }
}

fn trim_answer(input: &str) -> String {
    input.trim().to_string()
}

fn class_name_question(key: QuestionKey, message: String) -> QuestionSpec {
    QuestionSpec::FreeText {
        key,
        message,
        default: None,
        validate: Some(validate_class_name_answer),
        transform: Some(class_name::strip_spaces),
    }
}

/// Questions still to be asked, in asking order.
///
/// The class-name branch depends on the verdict for the supplied name:
/// a valid name asks nothing, a name with spaces offers the stripped form
/// (and asks for a new name if that is declined), anything else asks for a
/// name with the reason prefixed. Directory and extension questions are
/// only asked without `skip_prompts`, and the source ones only when a
/// source file is being created.
pub fn select_questions(
    options: &RawOptions,
    defaults: &ResolverDefaults,
    answers: &Answers,
) -> Vec<QuestionSpec> {
    let mut questions = Vec::new();

    match options.class_name.as_deref() {
        Some(supplied) => match class_name::validate(supplied) {
            ClassNameVerdict::Valid => {}
            ClassNameVerdict::ContainsSpaces => match answers.confirmed(QuestionKey::ReplaceWithStripped) {
                None => questions.push(QuestionSpec::Confirm {
                    key: QuestionKey::ReplaceWithStripped,
                    message: format!(
                        "{}. Replace with \"{}\"?",
                        class_name::CONTAINS_SPACES_MESSAGE,
                        class_name::strip_spaces(supplied)
                    ),
                    default: true,
                }),
                Some(false) if !answers.contains(QuestionKey::NewClassName) => questions.push(
                    class_name_question(QuestionKey::NewClassName, CLASS_NAME_PROMPT.to_string()),
                ),
                Some(_) => {}
            },
            verdict @ (ClassNameVerdict::Empty | ClassNameVerdict::IllegalCharacters) => {
                if !answers.contains(QuestionKey::ClassName) {
                    let reason = verdict.message().unwrap_or_default();
                    questions.push(class_name_question(
                        QuestionKey::ClassName,
                        format!("{reason}. {CLASS_NAME_PROMPT}"),
                    ));
                }
            }
        },
        None => {
            if !answers.contains(QuestionKey::ClassName) {
                questions.push(class_name_question(
                    QuestionKey::ClassName,
                    CLASS_NAME_PROMPT.to_string(),
                ));
            }
        }
    }

    if options.skip_prompts {
        return questions;
    }

    if !answers.contains(QuestionKey::HeaderDir) {
        questions.push(QuestionSpec::FreeText {
            key: QuestionKey::HeaderDir,
            message: "Where would you like to put your header file?".into(),
            default: Some(defaults.header_dir.display().to_string()),
            validate: None,
            transform: Some(trim_answer),
        });
    }

    if !answers.contains(QuestionKey::HeaderExt) {
        questions.push(QuestionSpec::Choice {
            key: QuestionKey::HeaderExt,
            message: "What would you like the file extension of your header file to be?".into(),
            choices: HeaderExtension::ALL.iter().map(|e| e.label().to_string()).collect(),
            default: HeaderExtension::ALL
                .iter()
                .position(|e| *e == defaults.header_ext)
                .unwrap_or_default(),
        });
    }

    if !options.create_source {
        return questions;
    }

    if !answers.contains(QuestionKey::SourceDir) {
        questions.push(QuestionSpec::FreeText {
            key: QuestionKey::SourceDir,
            message: "Where would you like to put your source file?".into(),
            default: Some(defaults.source_dir.display().to_string()),
            validate: None,
            transform: Some(trim_answer),
        });
    }

    if !answers.contains(QuestionKey::SourceExt) {
        questions.push(QuestionSpec::Choice {
            key: QuestionKey::SourceExt,
            message: "What would you like the file extension of your source file to be?".into(),
            choices: SourceExtension::ALL.iter().map(|e| e.as_str().to_string()).collect(),
            default: SourceExtension::ALL
                .iter()
                .position(|e| *e == defaults.source_ext)
                .unwrap_or_default(),
        });
    }

    questions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(class_name: Option<&str>, skip_prompts: bool, create_source: bool) -> RawOptions {
        RawOptions {
            skip_prompts,
            create_source,
            dry_run: false,
            class_name: class_name.map(str::to_string),
        }
    }

    fn keys(questions: &[QuestionSpec]) -> Vec<QuestionKey> {
        questions.iter().map(QuestionSpec::key).collect()
    }

    fn select(opts: &RawOptions, answers: &Answers) -> Vec<QuestionSpec> {
        select_questions(opts, &ResolverDefaults::default(), answers)
    }

    #[test]
    fn valid_supplied_name_asks_no_class_name_question() {
        let qs = select(&options(Some("Foo"), true, true), &Answers::new());
        assert!(qs.is_empty());
    }

    #[test]
    fn full_interactive_order() {
        let qs = select(&options(None, false, true), &Answers::new());
        assert_eq!(
            keys(&qs),
            [
                QuestionKey::ClassName,
                QuestionKey::HeaderDir,
                QuestionKey::HeaderExt,
                QuestionKey::SourceDir,
                QuestionKey::SourceExt,
            ]
        );
    }

    #[test]
    fn no_source_skips_source_questions() {
        let qs = select(&options(Some("Foo"), false, false), &Answers::new());
        assert_eq!(keys(&qs), [QuestionKey::HeaderDir, QuestionKey::HeaderExt]);
    }

    #[test]
    fn spaces_offer_stripped_replacement() {
        let qs = select(&options(Some("My Class"), true, true), &Answers::new());
        assert_eq!(keys(&qs), [QuestionKey::ReplaceWithStripped]);
        assert!(qs[0].message().contains("\"MyClass\""));
        assert!(matches!(qs[0], QuestionSpec::Confirm { .. }));
    }

    #[test]
    fn declined_replacement_asks_for_new_name() {
        let mut answers = Answers::new();
        answers.record(QuestionKey::ReplaceWithStripped, Answer::Confirm(false));
        let qs = select(&options(Some("My Class"), true, true), &answers);
        assert_eq!(keys(&qs), [QuestionKey::NewClassName]);
    }

    #[test]
    fn accepted_replacement_asks_nothing_more() {
        let mut answers = Answers::new();
        answers.record(QuestionKey::ReplaceWithStripped, Answer::Confirm(true));
        let qs = select(&options(Some("My Class"), true, true), &answers);
        assert!(qs.is_empty());
    }

    #[test]
    fn illegal_name_prefixes_reason() {
        let qs = select(&options(Some("my-class"), true, true), &Answers::new());
        assert_eq!(keys(&qs), [QuestionKey::ClassName]);
        assert!(qs[0].message().starts_with(class_name::ILLEGAL_CHARACTERS_MESSAGE));
        assert!(qs[0].message().ends_with(CLASS_NAME_PROMPT));
    }

    #[test]
    fn empty_name_prefixes_reason() {
        let qs = select(&options(Some(""), true, true), &Answers::new());
        assert!(qs[0].message().starts_with(class_name::EMPTY_MESSAGE));
    }

    #[test]
    fn answered_questions_drop_out() {
        let mut answers = Answers::new();
        answers.record(QuestionKey::ClassName, Answer::Text("Foo".into()));
        answers.record(QuestionKey::HeaderDir, Answer::Text("inc".into()));
        let qs = select(&options(None, false, false), &answers);
        assert_eq!(keys(&qs), [QuestionKey::HeaderExt]);
    }

    #[test]
    fn choice_defaults_follow_configured_defaults() {
        let defaults = ResolverDefaults {
            header_ext: HeaderExtension::Hpp,
            source_ext: SourceExtension::Cxx,
            ..ResolverDefaults::default()
        };
        let qs = select_questions(&options(Some("Foo"), false, true), &defaults, &Answers::new());
        let defaults: Vec<usize> = qs
            .iter()
            .filter_map(|q| match q {
                QuestionSpec::Choice { default, .. } => Some(*default),
                _ => None,
            })
            .collect();
        assert_eq!(defaults, [1, 2]);
    }

    #[test]
    fn class_name_answer_is_stripped_then_validated() {
        let q = class_name_question(QuestionKey::ClassName, CLASS_NAME_PROMPT.into());
        assert_eq!(
            q.accept(Answer::Text("My Class".into())),
            Ok(Answer::Text("MyClass".into()))
        );
        assert_eq!(
            q.accept(Answer::Text("  ".into())),
            Err(Rejection::Invalid(class_name::EMPTY_MESSAGE.into()))
        );
        assert_eq!(
            q.accept(Answer::Text("a-b".into())),
            Err(Rejection::Invalid(class_name::ILLEGAL_CHARACTERS_MESSAGE.into()))
        );
    }

    #[test]
    fn empty_directory_answer_takes_default() {
        let qs = select(&options(Some("Foo"), false, false), &Answers::new());
        assert_eq!(
            qs[0].accept(Answer::Text("   ".into())),
            Ok(Answer::Text("include".into()))
        );
    }

    #[test]
    fn mismatched_answers_are_wrong_shape() {
        let qs = select(&options(Some("Foo"), false, false), &Answers::new());
        assert_eq!(qs[0].accept(Answer::Confirm(true)), Err(Rejection::WrongShape));
        assert_eq!(qs[1].accept(Answer::Choice(7)), Err(Rejection::WrongShape));
    }
}
