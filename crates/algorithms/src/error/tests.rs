use super::*;

#[test]
fn test_error_display() {
    let err = Error::InvalidPolynomial {
        reason: "missing constant term",
    };
    assert_eq!(
        err.to_string(),
        "Invalid reduction polynomial: missing constant term"
    );

    let err = Error::DivisionByZero;
    assert_eq!(
        err.to_string(),
        "Division by zero: the zero element has no inverse"
    );

    let err = Error::Length {
        context: "field element",
        expected: 52,
        actual: 16,
    };
    assert_eq!(
        err.to_string(),
        "Invalid length for field element: expected 52, got 16"
    );
}

#[test]
fn test_validation_functions() {
    // Polynomial validation
    assert!(validate::polynomial(true, "should pass").is_ok());
    let err = validate::polynomial(false, "should fail").unwrap_err();

    match err {
        Error::InvalidPolynomial { reason } => {
            assert_eq!(reason, "should fail");
        }
        _ => panic!("Expected InvalidPolynomial error"),
    }

    // Encoding validation
    assert!(validate::encoding(true, "bit string", "should pass").is_ok());
    let err = validate::encoding(false, "bit string", "should fail").unwrap_err();

    match err {
        Error::InvalidEncoding { context, reason } => {
            assert_eq!(context, "bit string");
            assert_eq!(reason, "should fail");
        }
        _ => panic!("Expected InvalidEncoding error"),
    }

    // Range validation
    let err = validate::range(false, "field element").unwrap_err();
    match err {
        Error::OutOfRange { context } => {
            assert_eq!(context, "field element");
        }
        _ => panic!("Expected OutOfRange error"),
    }

    // Length validation
    assert!(validate::length("buffer", 32, 32).is_ok());
    let err = validate::length("buffer", 16, 32).unwrap_err();

    match err {
        Error::Length {
            context,
            expected,
            actual,
        } => {
            assert_eq!(context, "buffer");
            assert_eq!(expected, 32);
            assert_eq!(actual, 16);
        }
        _ => panic!("Expected Length error"),
    }
}
