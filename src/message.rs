//! Human-readable error text for chat output.

use crate::error::Error;
use crate::roll::{DiceArg, ValidationError};
use std::str::FromStr;

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Locale {
    #[default]
    Ja,
    En,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown locale {0:?}, expected \"ja\" or \"en\"")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ja" => Ok(Self::Ja),
            "en" => Ok(Self::En),
            _ => Err(UnknownLocale(s.to_owned())),
        }
    }
}

/// Formats `err`, raised while evaluating `input`, for display.
///
/// Malformed notation gets a fixed message. Anything rejected after parsing
/// echoes the input followed by `-->x error: ` and the reason.
pub fn describe(locale: Locale, input: &str, err: &Error) -> String {
    if err.is_syntax_error() {
        return invalid_format(locale).to_owned();
    }
    let detail = match locale {
        Locale::Ja => detail_ja(err),
        Locale::En => err.to_string(),
    };
    format!("{}\n-->x error: {}", input, detail)
}

fn invalid_format(locale: Locale) -> &'static str {
    match locale {
        Locale::Ja => "無効なコマンド形式です。",
        Locale::En => "Invalid dice format.",
    }
}

fn detail_ja(err: &Error) -> String {
    use ValidationError::*;

    let v = match err {
        Error::Validation(v) => v,
        Error::DivisionByZero => return "0で割ることはできません。".to_owned(),
        Error::Lex(_) | Error::Parse(_) => return invalid_format(Locale::Ja).to_owned(),
    };
    match v {
        CountTooSmall(_) => "<number>d は1以上にしてください。".to_owned(),
        CountTooLarge { max, .. } => format!("<number>d は{}以下にしてください。", max),
        FacesTooSmall(_) => "d<number> は1以上にしてください。".to_owned(),
        FacesTooLarge { max, .. } => format!("d<number> は{}以下にしてください。", max),
        NotAnInteger { arg, .. } => {
            let arg = match arg {
                DiceArg::Count => "<number>d",
                DiceArg::Faces => "d<number>",
            };
            format!("{} は整数にしてください。", arg)
        }
        NumberTooLarge { max, .. } => format!("数値は{}以下にしてください。", max),
        TooManyRolls { max } => format!("一度に振れるダイスは合計{}個までです。", max),
        Overflow => "計算結果が大きすぎます。".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::LexError;
    use crate::roll::Number;

    fn lex_error() -> Error {
        LexError {
            offset: 0,
            slice: "a".to_owned(),
        }
        .into()
    }

    #[test]
    fn test_parse_locale() {
        assert_eq!("ja".parse::<Locale>(), Ok(Locale::Ja));
        assert_eq!(" EN ".parse::<Locale>(), Ok(Locale::En));
        assert_eq!(
            "fr".parse::<Locale>(),
            Err(UnknownLocale("fr".to_owned()))
        );
        assert_eq!(Locale::default(), Locale::Ja);
    }

    #[test]
    fn test_describe_syntax_error() {
        assert_eq!(describe(Locale::Ja, "abc", &lex_error()), "無効なコマンド形式です。");
        assert_eq!(describe(Locale::En, "abc", &lex_error()), "Invalid dice format.");
    }

    #[test]
    fn test_describe_validation_error() {
        let err = Error::Validation(ValidationError::FacesTooSmall(Number::Int(0)));
        assert_eq!(
            describe(Locale::Ja, "1d0", &err),
            "1d0\n-->x error: d<number> は1以上にしてください。"
        );
        assert_eq!(
            describe(Locale::En, "1d0", &err),
            "1d0\n-->x error: dice must have at least 1 face, found 0"
        );

        let err = Error::Validation(ValidationError::TooManyRolls { max: 1000 });
        assert_eq!(
            describe(Locale::Ja, "600d6+600d6", &err),
            "600d6+600d6\n-->x error: 一度に振れるダイスは合計1000個までです。"
        );
    }

    #[test]
    fn test_describe_division_by_zero() {
        assert_eq!(
            describe(Locale::Ja, "5/0", &Error::DivisionByZero),
            "5/0\n-->x error: 0で割ることはできません。"
        );
        assert_eq!(
            describe(Locale::En, "5/0", &Error::DivisionByZero),
            "5/0\n-->x error: cannot divide by zero"
        );
    }
}
