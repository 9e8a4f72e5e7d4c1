use dice_notation::roll::{Number, ValidationError};
use dice_notation::{is_dice_command, Engine, Error, Locale};
use rand::{rngs::StdRng, SeedableRng};

fn engine(seed: u64) -> Engine<StdRng> {
    Engine::new(StdRng::seed_from_u64(seed))
}

fn int(n: i64) -> Number {
    Number::Int(n)
}

#[test]
fn one_sided_die() {
    let outcome = engine(1).roll("1d1");
    assert_eq!(outcome.display, "1d1 --> 1 --> 1");
    assert_eq!(outcome.value, Some(int(1)));
    let rolls = outcome.rolls.unwrap();
    assert_eq!(rolls.len(), 1);
    assert_eq!(rolls[0].values(), &[1]);
}

#[test]
fn zero_dice_is_rejected() {
    let err = engine(1).evaluate("0d6").unwrap_err();
    assert_eq!(err, Error::Validation(ValidationError::CountTooSmall(Number::Int(0))));

    let outcome = engine(1).roll("0d6");
    assert_eq!(outcome.display, "0d6\n-->x error: <number>d は1以上にしてください。");
    assert_eq!(outcome.value, None);
    assert_eq!(outcome.rolls, None);
}

#[test]
fn zero_faces_is_rejected() {
    let err = engine(1).evaluate("1d0").unwrap_err();
    assert_eq!(err, Error::Validation(ValidationError::FacesTooSmall(Number::Int(0))));
}

#[test]
fn division_by_zero() {
    assert_eq!(engine(1).evaluate("5/0").unwrap_err(), Error::DivisionByZero);
    let outcome = engine(1).with_locale(Locale::En).roll("5/0");
    assert_eq!(outcome.display, "5/0\n-->x error: cannot divide by zero");
}

#[test]
fn dice_plus_modifier() {
    for seed in 0..20 {
        let evaluation = engine(seed).evaluate("2d6+3").unwrap();
        let rolls = evaluation.rolls();
        assert_eq!(rolls.len(), 1);
        let values = rolls[0].values();
        assert_eq!(values.len(), 2);
        assert!(values.iter().all(|v| (1..=6).contains(v)));

        let sum = (values[0] + values[1]) as i64;
        assert_eq!(evaluation.total(), int(sum + 3));
        assert_eq!(
            evaluation.display(),
            format!(
                "2d6+3 --> {}[{},{}] +3 --> {}",
                sum,
                values[0],
                values[1],
                sum + 3
            )
        );
    }
}

#[test]
fn implicit_count() {
    let evaluation = engine(3).evaluate("d6").unwrap();
    let r = evaluation.rolls()[0].values()[0];
    assert!((1..=6).contains(&r));
    assert_eq!(evaluation.display(), format!("1d6 --> {} --> {}", r, r));
}

#[test]
fn computed_count() {
    let evaluation = engine(5).evaluate("(1+2)d6").unwrap();
    let rolls = evaluation.rolls();
    assert_eq!(rolls.len(), 1);
    assert_eq!(rolls[0].values().len(), 3);
    assert_eq!(rolls[0].faces().get(), 6);
}

#[test]
fn plain_number() {
    let outcome = engine(1).roll("10");
    assert_eq!(outcome.display, "10 --> 10");
    assert_eq!(outcome.value, Some(int(10)));
    assert_eq!(outcome.rolls, Some(vec![]));
}

#[test]
fn not_dice_notation() {
    assert!(matches!(engine(1).evaluate("abc"), Err(Error::Lex(_))));

    let outcome = engine(1).roll("abc");
    assert_eq!(outcome.display, "無効なコマンド形式です。");
    assert_eq!(outcome.value, None);

    let outcome = engine(1).with_locale(Locale::En).roll("abc");
    assert_eq!(outcome.display, "Invalid dice format.");
}

#[test]
fn secure_roller_end_to_end() {
    let mut engine: Engine = Engine::default();
    for _ in 0..100 {
        let evaluation = engine.evaluate("3d20").unwrap();
        let values = evaluation.rolls()[0].values().to_vec();
        assert!(values.iter().all(|v| (1..=20).contains(v)));
        let sum: u64 = values.iter().sum();
        assert_eq!(evaluation.total(), int(sum as i64));
    }
}

#[test]
fn default_roll_function() {
    let outcome = dice_notation::roll("4d1*2");
    assert_eq!(outcome.display, "4d1*2 --> 4[1,1,1,1] *2 --> 8");
}

#[test]
fn trigger_pattern() {
    assert!(is_dice_command("1d100"));
    assert!(is_dice_command("attack: d20+5"));
    assert!(!is_dice_command("good morning"));
}

#[test]
fn overflowing_arithmetic_is_rejected() {
    let huge = vec!["9007199254740991"; 30].join("*");
    let input = format!("{}-{}", huge, huge);
    assert_eq!(
        engine(1).evaluate(&input).unwrap_err(),
        Error::Validation(ValidationError::Overflow)
    );

    let outcome = engine(1).roll(&input);
    assert_eq!(outcome.display, format!("{}\n-->x error: 計算結果が大きすぎます。", input));
    assert_eq!(outcome.value, None);
}

#[test]
fn nested_rolls_are_shown() {
    let evaluation = engine(9).evaluate("(1d3)d6").unwrap();
    let rolls = evaluation.rolls();
    let count = rolls[0].values()[0];
    assert_eq!(rolls[1].values().len() as u64, count);
    let display = evaluation.display();
    assert!(display.starts_with(&format!("(1d3)d6 --> ({})d6:", count)), "{}", display);
}
