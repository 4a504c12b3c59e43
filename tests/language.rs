use std::{
    fs,
    thread,
    time::{Duration, Instant},
};

use pretty_assertions::assert_eq;
use ratcalc::{
    Calculator, Config, Error, FormattedResult, FunctionDefinition, FunctionTable, Outcome,
    error::{LexError, ParseError, TimeoutError, ValueError},
    evaluate,
    interpreter::value::core::Number,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (expression, expected) in extract_calc_examples(&content) {
            count += 1;
            match evaluate(&expression) {
                Ok(outcome) => assert_eq!(outcome.to_string(),
                                          expected,
                                          "example `{expression}` in {path:?}"),
                Err(e) => panic!("Example `{expression}` in {path:?} failed: {e}"),
            }
        }
    }

    assert!(count > 0, "No calc examples found in book/src");
}

/// Collects `expression => expected` lines from ```` ```calc ```` blocks.
fn extract_calc_examples(content: &str) -> Vec<(String, String)> {
    let mut examples = Vec::new();
    let mut inside = false;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("```calc") {
            inside = true;
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            continue;
        }
        if inside && let Some((expression, expected)) = trimmed.split_once("=>") {
            examples.push((expression.trim().to_string(), expected.trim().to_string()));
        }
    }

    examples
}

fn answer(src: &str) -> FormattedResult {
    match evaluate(src) {
        Ok(Outcome::Answer(answer)) => answer,
        Ok(Outcome::Debug(signal)) => panic!("`{src}` returned a debug signal: {signal}"),
        Err(e) => panic!("`{src}` failed: {e}"),
    }
}

fn assert_fraction(src: &str, expected: &str) {
    assert_eq!(answer(src).fraction(), expected, "evaluating `{src}`");
}

fn assert_failure(src: &str) -> Error {
    match evaluate(src) {
        Ok(outcome) => panic!("`{src}` succeeded with {outcome} but was expected to fail"),
        Err(e) => e,
    }
}

fn calculator_with(function: FunctionDefinition, budget: Duration) -> Calculator {
    Calculator::new(FunctionTable::standard().with_function(function),
                    Config::default().with_time_budget(budget))
}

#[test]
fn precedence_and_parentheses() {
    assert_fraction("2 + 3 * 4", "14");
    assert_fraction("(2 + 3) * 4", "20");
    assert_fraction("10 - 4 - 3", "3");
    assert_fraction("24 / 4 / 3", "2");
    assert_fraction("2 + 3 * sqrt(16)", "14");
}

#[test]
fn fraction_and_decimal_duality() {
    let third = answer("1 / 3");
    assert_eq!(third.fraction(), "1/3");
    assert!(third.approximation.is_some_and(|x| (x - 1.0 / 3.0).abs() < 1e-15));

    let two = answer("4 / 2");
    assert_eq!(two.fraction(), "2");
    assert_eq!(two.approximation, None);
}

#[test]
fn decimal_literals_are_exact() {
    assert_fraction("0.1 + 0.2", "3/10");
    assert_fraction("0.1 + 0.2 - 0.3", "0");
    assert_fraction("1.5e3 * 2", "3000");
    assert_fraction(".25 * 4", "1");
}

#[test]
fn negative_values_show_only_the_fraction() {
    let r = answer("-5 / 2");
    assert_eq!(r.fraction(), "-5/2");
    assert_eq!(r.decimal(), None);

    assert_eq!(answer("-1 / 3").approximation, None);
    assert_fraction("(-1 / 3) % 1", "-1/3");
    assert!(answer("1 - 1 / 3").approximation.is_some());
}

#[test]
fn power_associates_right_and_binds_below_sign() {
    assert_fraction("2 ^ 3 ^ 2", "512");
    assert_fraction("-2 ^ 2", "4");
    assert_fraction("2 ^ -1", "1/2");
    assert_fraction("(2/3) ^ 3", "8/27");
    assert_fraction("2 * 3 ^ 2", "18");
}

#[test]
fn power_edge_cases() {
    assert_eq!(assert_failure("0 ^ -1"), Error::Value(ValueError::DivisionByZero));
    assert!(matches!(assert_failure("2 ^ 1000000"),
                     Error::Value(ValueError::ExponentTooLarge { .. })));
    assert_fraction("1 ^ 1000000", "1");
    assert_fraction("(-1) ^ 1000001", "-1");
    assert!(answer("2 ^ 0.5").approximation
                             .is_some_and(|x| (x - 2f64.sqrt()).abs() < 1e-15));
    assert!(matches!(assert_failure("(-8) ^ 0.5"),
                     Error::Value(ValueError::NotRepresentable { .. })));
}

#[test]
fn oversized_powers_fail_fast() {
    for src in ["(10 ^ 100000) ^ 100000", "1e10000 ^ 100000", "(2 ^ 100000) ^ 100"] {
        let start = Instant::now();
        assert!(matches!(assert_failure(src), Error::Value(ValueError::ExponentTooLarge { .. })),
                "evaluating `{src}`");
        assert!(start.elapsed() < Duration::from_secs(5), "`{src}` took too long");
    }
}

#[test]
fn growing_chains_are_bounded() {
    // Each factor is within the power limit; their product is not.
    let chain = vec!["(2 ^ 100000) ^ 40"; 3].join(" * ");
    let start = Instant::now();
    assert!(matches!(assert_failure(&chain),
                     Error::Value(ValueError::ValueTooLarge { .. })));
    assert!(start.elapsed() < Duration::from_secs(30));
}

#[test]
fn remainder_follows_the_dividend() {
    assert_fraction("7 % 3", "1");
    assert_fraction("-7 % 3", "-1");
    assert_fraction("7 % -3", "1");
    assert_fraction("5.5 % 2", "3/2");
    assert_eq!(assert_failure("1 % 0"), Error::Value(ValueError::ModuloByZero));
}

#[test]
fn single_argument_functions_enforce_arity() {
    for f in ["abs", "sin", "cos", "tan", "deg_to_rad", "rad_to_deg", "sqrt", "fact"] {
        assert_eq!(assert_failure(&format!("{f}(1,2)")),
                   Error::Value(ValueError::ArityMismatch { function: f.to_string(),
                                                            expected: 1,
                                                            found:    2, }));
    }
    assert_eq!(assert_failure("log(8)"),
               Error::Value(ValueError::ArityMismatch { function: "log".to_string(),
                                                        expected: 2,
                                                        found:    1, }));
    assert!(matches!(assert_failure("sqrt()"),
                     Error::Value(ValueError::ArityMismatch { found: 0, .. })));
}

#[test]
fn domain_enforcement() {
    assert!(matches!(assert_failure("fact(-1)"),
                     Error::Value(ValueError::Domain { function, .. }) if function == "fact"));
    assert!(matches!(assert_failure("fact(2.5)"), Error::Value(ValueError::Domain { .. })));
    assert_eq!(assert_failure("1 / 0"), Error::Value(ValueError::DivisionByZero));
    assert!(matches!(assert_failure("sqrt(-4)"), Error::Value(ValueError::Domain { .. })));
    assert!(matches!(assert_failure("log(0, 2)"), Error::Value(ValueError::Domain { .. })));
    assert!(matches!(assert_failure("log(8, 1)"), Error::Value(ValueError::Domain { .. })));
}

#[test]
fn function_results() {
    assert_fraction("sqrt(16)", "4");
    assert_fraction("log(8, 2)", "3");
    assert_fraction("fact(5)", "120");
    assert_fraction("fact(0)", "1");
    assert_fraction("fact(22)", "1124000727777607680000");
    assert_fraction("abs(-7/2)", "7/2");
    assert_fraction("sin(0)", "0");
    assert_fraction("cos(0)", "1");
    assert_fraction("sqrt(abs(-9)) + 1", "4");
    assert!(answer("rad_to_deg(deg_to_rad(45))").approximation
                                                   .is_none_or(|x| (x - 45.0).abs() < 1e-9));
}

#[test]
fn unknown_function_names_the_call() {
    assert_eq!(assert_failure("foo(1 + 1, 2)"),
               Error::Value(ValueError::UnknownFunction { name:      "foo".to_string(),
                                                          arguments: "1 + 1, 2".to_string(), }));
    // Arguments are reduced before the name is looked up.
    assert_eq!(assert_failure("foo(1 / 0)"), Error::Value(ValueError::DivisionByZero));
}

#[test]
fn debug_returns_raw_arguments() {
    let Ok(Outcome::Debug(signal)) = evaluate("debug(3,4)") else {
        panic!("expected a debug signal");
    };
    assert_eq!(signal.arguments, ["3", "4"]);

    let Ok(Outcome::Debug(signal)) = evaluate("1 + debug( 1 / 0 , sqrt(-1) )") else {
        panic!("expected a debug signal");
    };
    assert_eq!(signal.arguments, ["1 / 0", "sqrt(-1)"]);

    let Ok(Outcome::Debug(signal)) = evaluate("debug()") else {
        panic!("expected a debug signal");
    };
    assert!(signal.arguments.is_empty());
}

#[test]
fn failures_before_debug_win() {
    assert_eq!(assert_failure("1 / 0 + debug(3)"),
               Error::Value(ValueError::DivisionByZero));
}

#[test]
fn lexical_rejection() {
    assert_eq!(assert_failure("5 $ 3"),
               Error::Lex(LexError::UnexpectedCharacter { character: '$',
                                                          position:  2, }));
    assert!(matches!(assert_failure("1e99999"), Error::Lex(LexError::LiteralTooLarge { .. })));
}

#[test]
fn syntax_errors() {
    assert_eq!(assert_failure("--2"),
               Error::Parse(ParseError::UnexpectedToken { token:    "-".to_string(),
                                                          position: 1, }));
    assert_eq!(assert_failure("2 +"), Error::Parse(ParseError::UnexpectedEnd { position: 3 }));
    assert_eq!(assert_failure("(1 + 2"),
               Error::Parse(ParseError::UnexpectedEnd { position: 6 }));
    assert_eq!(assert_failure("1 2"),
               Error::Parse(ParseError::TrailingInput { token:    "2".to_string(),
                                                        position: 2, }));
    assert!(matches!(assert_failure(""), Error::Parse(ParseError::UnexpectedEnd { .. })));
    assert!(matches!(assert_failure("sqrt"), Error::Parse(_)));
    assert!(matches!(assert_failure("sqrt(1,)"), Error::Parse(_)));
}

#[test]
fn deep_nesting_is_rejected() {
    let deep = format!("{}1{}", "(".repeat(1000), ")".repeat(1000));
    assert!(matches!(assert_failure(&deep), Error::Parse(ParseError::TooDeep { .. })));

    let shallow = format!("{}1{}", "(".repeat(100), ")".repeat(100));
    assert_fraction(&shallow, "1");

    let long = vec!["1"; 5000].join(" + ");
    assert!(matches!(assert_failure(&long), Error::Parse(ParseError::TooLong { .. })));
}

#[test]
fn slow_function_times_out() {
    let spin = FunctionDefinition::numeric("spin", 1, |_, token| {
        while !token.is_cancelled() {
            thread::yield_now();
        }
        Ok(Number::from(0))
    });
    let calc = calculator_with(spin, Duration::from_millis(200));

    let start = Instant::now();
    assert_eq!(calc.evaluate("1 + spin(1)"),
               Err(Error::Timeout(TimeoutError { function: "spin".to_string() })));
    assert!(start.elapsed() < Duration::from_secs(2));
}

#[test]
fn stuck_function_does_not_block_the_caller() {
    let stuck = FunctionDefinition::numeric("stuck", 0, |_, _| {
        thread::sleep(Duration::from_secs(30));
        Ok(Number::from(0))
    });
    let calc = calculator_with(stuck, Duration::from_millis(100));

    let start = Instant::now();
    assert!(matches!(calc.evaluate("stuck()"), Err(Error::Timeout(_))));
    assert!(start.elapsed() < Duration::from_secs(2));
}

#[test]
fn huge_factorial_times_out() {
    let calc = Calculator::new(FunctionTable::standard(),
                               Config::default().with_time_budget(Duration::from_millis(100)));

    let start = Instant::now();
    assert_eq!(calc.evaluate("fact(1000000)"),
               Err(Error::Timeout(TimeoutError { function: "fact".to_string() })));
    assert!(start.elapsed() < Duration::from_secs(2));
}

#[test]
fn panicking_function_is_a_worker_error() {
    let boom = FunctionDefinition::numeric("boom", 1, |_, _| panic!("boom"));
    let calc = calculator_with(boom, Duration::from_secs(5));
    assert!(matches!(calc.evaluate("boom(1)"), Err(Error::Worker(_))));
}

#[test]
fn custom_functions_can_replace_builtins() {
    let calc = calculator_with(FunctionDefinition::numeric("abs", 2, |args, _| {
                                   Ok(Number::from_f64(args[0] + args[1]).unwrap_or(Number::from(0)))
                               }),
                               Duration::from_secs(5));
    let Ok(Outcome::Answer(r)) = calc.evaluate("abs(1, 2)") else {
        panic!("expected an answer");
    };
    assert_eq!(r.fraction(), "3");
}

#[test]
fn evaluation_is_deterministic_across_threads() {
    let expressions = ["1 / 3", "2 ^ 64 / 7", "sin(1) + cos(1)", "log(100, 10)"];
    let expected = expressions.map(answer);

    let handles = (0..8).map(|_| thread::spawn(move || expressions.map(answer)))
                        .collect::<Vec<_>>();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
