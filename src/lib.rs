mod common;
mod error;
mod limits;
pub mod message;
pub mod parse;
pub mod roll;

pub use common::{BinaryOperator, Faces, Float, Int, Separator, UInt, MAX_SAFE_INTEGER};
pub use error::{Error, Result};
pub use limits::Limits;
pub use message::Locale;

use roll::{Number, Roll, RollRecord, Roller, SecureRoller, SimpleStringifier, Stringify};
use tracing::debug;

/// Evaluates dice expressions with a fixed roller, limits and locale.
///
/// Every call to [`Engine::evaluate`] starts from a fresh roll counter, so
/// one engine can serve any number of independent expressions.
#[derive(Debug, Clone)]
pub struct Engine<R = SecureRoller> {
    roller: R,
    limits: Limits,
    locale: Locale,
}

impl<R: Roller> Engine<R> {
    pub fn new(roller: R) -> Self {
        Self {
            roller,
            limits: Limits::default(),
            locale: Locale::default(),
        }
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Lexes, parses and rolls `input`.
    pub fn evaluate(&mut self, input: &str) -> Result<Evaluation> {
        debug!(input, "evaluating");
        let max = self.limits.max_input_len;
        if input.len() > max {
            debug!(len = input.len(), max, "input too long");
            return Err(parse::ParseError::input_too_long(input.len(), max).into());
        }

        let tokens = parse::tokenize(input)?;
        debug!(tokens = tokens.len(), "tokenized");
        let ast = parse::parse(input, tokens, self.limits.max_depth)?;
        let roll = roll::eval(&ast, &mut self.roller, self.limits)?;
        Ok(Evaluation { roll })
    }

    /// Like [`Engine::evaluate`], with failures turned into a localized
    /// message instead of an error.
    pub fn roll(&mut self, input: &str) -> Outcome {
        match self.evaluate(input) {
            Ok(evaluation) => Outcome {
                display: evaluation.display(),
                value: Some(evaluation.total()),
                rolls: Some(evaluation.rolls().into_iter().cloned().collect()),
            },
            Err(err) => {
                debug!(error = %err, "rejected");
                Outcome {
                    display: message::describe(self.locale, input, &err),
                    value: None,
                    rolls: None,
                }
            }
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(SecureRoller::default())
    }
}

/// A successfully rolled expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    roll: Roll,
}

impl Evaluation {
    pub fn display(&self) -> String {
        self.display_with::<SimpleStringifier>()
    }

    pub fn display_with<S: Stringify + Default>(&self) -> String {
        S::default().stringify(&self.roll)
    }

    pub fn total(&self) -> Number {
        self.roll.total()
    }

    /// Every die rolled, in rolling order.
    pub fn rolls(&self) -> Vec<&RollRecord> {
        self.roll.records()
    }

    /// The input in normalized notation, e.g. `1d6` for `d6`.
    pub fn expression(&self) -> &str {
        self.roll.expression()
    }

    pub fn roll(&self) -> &Roll {
        &self.roll
    }
}

/// What a chat command replies with. On failure `display` carries the
/// error message and the other fields are empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub display: String,
    pub value: Option<Number>,
    pub rolls: Option<Vec<RollRecord>>,
}

/// Rolls `input` with a secure roller and default settings.
///
/// # Examples
/// ```
/// let outcome = dice_notation::roll("2 + 3");
/// assert_eq!(outcome.display, "2+3 --> 5");
///
/// let outcome = dice_notation::roll("1d1");
/// assert_eq!(outcome.display, "1d1 --> 1 --> 1");
/// ```
pub fn roll(input: &str) -> Outcome {
    let mut engine: Engine = Engine::default();
    engine.roll(input)
}

/// Whether `text` contains a dice term such as `2d6`, `d20` or `3R10`,
/// i.e. a `d` or `r` directly followed by a digit.
pub fn is_dice_command(text: &str) -> bool {
    text.as_bytes()
        .windows(2)
        .any(|w| matches!(w[0], b'd' | b'D' | b'r' | b'R') && w[1].is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::ParseErrorKind;
    use crate::roll::{StepRoller, ValidationError};

    fn engine() -> Engine<StepRoller> {
        Engine::new(StepRoller::new(1, 1))
    }

    #[test]
    fn test_evaluate() {
        let evaluation = engine().evaluate("2 d 6 + 3").unwrap();
        assert_eq!(evaluation.expression(), "2d6+3");
        assert_eq!(evaluation.display(), "2d6+3 --> 3[1,2] +3 --> 6");
        assert_eq!(evaluation.total(), Number::Int(6));
        assert_eq!(evaluation.rolls().len(), 1);
        assert_eq!(evaluation.rolls()[0].values(), &[1, 2]);
    }

    #[test]
    fn test_roll_outcome() {
        let outcome = engine().roll("(1+2)d6");
        assert_eq!(outcome.display, "(1+2)d6 --> 6[1,2,3] --> 6");
        assert_eq!(outcome.value, Some(Number::Int(6)));
        let rolls = outcome.rolls.unwrap();
        assert_eq!(rolls.len(), 1);
        assert_eq!(rolls[0].values(), &[1, 2, 3]);
    }

    #[test]
    fn test_roll_outcome_error() {
        let outcome = engine().roll("abc");
        assert_eq!(outcome.display, "無効なコマンド形式です。");
        assert_eq!(outcome.value, None);
        assert_eq!(outcome.rolls, None);

        let outcome = engine().with_locale(Locale::En).roll("0d6");
        assert_eq!(
            outcome.display,
            "0d6\n-->x error: dice count must be at least 1, found 0"
        );
        assert_eq!(outcome.value, None);
    }

    #[test]
    fn test_input_too_long() {
        let mut engine = engine().with_limits(Limits::default().with_max_input_len(5));
        assert!(engine.evaluate("1+1+1").is_ok());
        match engine.evaluate("1+1+1+1") {
            Err(Error::Parse(e)) => assert_eq!(e.kind, ParseErrorKind::InputTooLong { max: 5 }),
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_nesting_too_deep() {
        let mut engine = engine().with_limits(Limits::default().with_max_depth(2));
        assert!(engine.evaluate("((1))").is_ok());
        match engine.evaluate("(((1)))") {
            Err(Error::Parse(e)) => assert_eq!(e.kind, ParseErrorKind::TooDeep { max: 2 }),
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_roll_counter_is_per_call() {
        let mut engine = engine().with_limits(Limits::default().with_max_rolls(3));
        assert!(engine.evaluate("3d6").is_ok());
        assert!(engine.evaluate("3d6").is_ok());
        assert_eq!(
            engine.evaluate("4d6").unwrap_err(),
            Error::Validation(ValidationError::TooManyRolls { max: 3 })
        );
    }

    #[test]
    fn test_error_kinds() {
        let mut engine = engine();
        assert!(matches!(engine.evaluate("1 % 2"), Err(Error::Lex(_))));
        assert!(matches!(engine.evaluate("1 +"), Err(Error::Parse(_))));
        assert!(matches!(engine.evaluate("1d0"), Err(Error::Validation(_))));
        assert_eq!(engine.evaluate("5/0").unwrap_err(), Error::DivisionByZero);
    }

    #[test]
    fn test_is_dice_command() {
        assert!(is_dice_command("1d6"));
        assert!(is_dice_command("d20"));
        assert!(is_dice_command("roll 2R10 please"));
        assert!(is_dice_command("(1+2)D6"));
        assert!(!is_dice_command("hello"));
        assert!(!is_dice_command("2d"));
        assert!(!is_dice_command("d"));
        assert!(!is_dice_command("1 + 2"));
    }
}
