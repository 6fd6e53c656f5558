use abakus::{Calculator, CalculatorConfig, Error, Operation, Strictness};

fn calculator() -> Calculator {
    let _ = pretty_env_logger::try_init();
    Calculator::new()
}

#[test]
fn test_operations() {
    let cases = [
        ("add", 2.0, 3.0, 5.0),
        ("subtract", 10.0, 4.0, 6.0),
        ("multiply", 3.0, 5.0, 15.0),
        ("divide", 20.0, 4.0, 5.0),
    ];

    let calculator = calculator();
    for (count, &(operation, a, b, expected)) in cases.iter().enumerate() {
        assert_eq!(calculator.perform(operation, a, b), Ok(expected));
        assert_eq!(calculator.last().unwrap().result(), expected);
        assert_eq!(calculator.history().len(), count + 1);
    }
}

#[test]
fn test_last_record() {
    let calculator = calculator();
    calculator.perform("add", 2.0, 3.0).unwrap();

    let last = calculator.last().unwrap();
    assert_eq!(last.operation(), Operation::Add);
    assert_eq!(last.operation().name(), "add");
    assert_eq!(last.a(), 2.0);
    assert_eq!(last.b(), 3.0);
    assert_eq!(last.result(), 5.0);
}

#[test]
fn test_last_follows_latest_calculation() {
    let calculator = calculator();
    calculator.perform("add", 2.0, 3.0).unwrap();
    calculator.perform("multiply", 4.0, 5.0).unwrap();

    let last = calculator.last().unwrap();
    assert_eq!(last.result(), 20.0);
    assert_eq!(last.operation().name(), "multiply");
}

#[test]
fn test_division_by_zero() {
    let calculator = calculator();
    assert_eq!(
        calculator.perform("divide", 5.0, 0.0),
        Err(Error::DivisionByZero)
    );
    assert_eq!(
        calculator.perform("divide", 5.0, -0.0),
        Err(Error::DivisionByZero)
    );
    assert!(calculator.last().is_none());
}

#[test]
fn test_invalid_operation() {
    let calculator = calculator();
    assert_eq!(
        calculator.perform("invalid_op", 2.0, 3.0),
        Err(Error::InvalidOperation("invalid_op".to_string()))
    );
    assert!(matches!(
        calculator.perform("foo", 1.0, 2.0),
        Err(Error::InvalidOperation(name)) if name == "foo"
    ));
    assert!(calculator.history().is_empty());
}

#[test]
fn test_failure_keeps_previous_last() {
    let calculator = calculator();
    calculator.perform("subtract", 10.0, 4.0).unwrap();
    assert!(calculator.perform("divide", 1.0, 0.0).is_err());
    assert!(calculator.perform("Add", 1.0, 0.0).is_err());

    assert_eq!(calculator.history().len(), 1);
    assert_eq!(calculator.last().unwrap().operation(), Operation::Subtract);
}

#[test]
fn test_clear_history() {
    let calculator = calculator();
    calculator.perform("add", 2.0, 3.0).unwrap();
    calculator.clear_history();
    assert!(calculator.last().is_none());

    calculator.perform("divide", 6.0, 2.0).unwrap();
    assert_eq!(calculator.last().unwrap().result(), 3.0);
}

#[test]
fn test_strict_rejects_non_finite_operands() {
    let _ = pretty_env_logger::try_init();
    let config = CalculatorConfig {
        strictness: Strictness::Strict,
    };
    let calculator = Calculator::with_config(&config);

    assert!(matches!(
        calculator.perform("add", f64::NAN, 1.0),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        calculator.perform("multiply", 1.0, f64::INFINITY),
        Err(Error::InvalidArgument(_))
    ));
    assert!(calculator.last().is_none());

    assert_eq!(calculator.perform("add", 1.5, 1.0), Ok(2.5));
}

#[test]
fn test_operation_is_resolved_before_validation() {
    let calculator = Calculator::with_config(&CalculatorConfig {
        strictness: Strictness::Strict,
    });
    assert!(matches!(
        calculator.perform("power", f64::NAN, 1.0),
        Err(Error::InvalidOperation(_))
    ));
}

#[test]
fn test_lenient_accepts_non_finite_operands() {
    let calculator = calculator();
    assert_eq!(calculator.strictness(), Strictness::Lenient);

    let result = calculator.perform("add", f64::INFINITY, 1.0).unwrap();
    assert!(result.is_infinite());
    assert!(calculator.perform("add", f64::NAN, 1.0).unwrap().is_nan());
    assert_eq!(calculator.history().len(), 2);
}

#[test]
fn test_clones_share_history() {
    let calculator = calculator();
    let clone = calculator.clone();

    clone.perform("add", 1.0, 1.0).unwrap();
    assert_eq!(calculator.last().unwrap().result(), 2.0);

    calculator.clear_history();
    assert!(clone.last().is_none());
}

#[test]
fn test_config_from_toml() {
    let config: CalculatorConfig = toml::from_str(r#"strictness = "strict""#).unwrap();
    assert_eq!(config.strictness, Strictness::Strict);

    let result = toml::from_str::<CalculatorConfig>(r#"strictness = "paranoid""#);
    assert!(result.is_err());
}
