use pretty_assertions::assert_eq;
use rpnc_infix::{
    to_postfix, ConversionError, InfixConverter, Operator, ParenthesisMismatch, Token,
};

fn convert(expression: &str) -> Result<String, ConversionError> {
    InfixConverter::new()
        .convert(expression)
        .map(|postfix| postfix.to_string())
}

#[test]
fn test_operator_precedence() {
    assert_eq!(convert("3+4*2").as_deref(), Ok("342*+"));
    assert_eq!(convert("1+2*3-4/2").as_deref(), Ok("123*+42/-"));
}

#[test]
fn test_parenthesized_group() {
    assert_eq!(convert("(1+2)*3").as_deref(), Ok("12+3*"));
}

#[test]
fn test_right_associative_power() {
    assert_eq!(convert("2^3^2").as_deref(), Ok("232^^"));
    // Parentheses can still force left grouping
    assert_eq!(convert("(2^3)^2").as_deref(), Ok("23^2^"));
}

#[test]
fn test_unclosed_parenthesis() {
    assert!(matches!(
        convert("(1+2"),
        Err(ConversionError::MismatchedParenthesis {
            kind: ParenthesisMismatch::Unclosed,
            ..
        })
    ));
}

#[test]
fn test_unopened_parenthesis() {
    assert!(matches!(
        convert("1+2)"),
        Err(ConversionError::MismatchedParenthesis {
            kind: ParenthesisMismatch::Unopened,
            position: 3,
        })
    ));
}

#[test]
fn test_empty_input() {
    let postfix = InfixConverter::new().convert("").unwrap();
    assert!(postfix.is_empty());
    assert_eq!(postfix.to_string(), "");
}

#[test]
fn test_deeply_nested_groups() {
    let depth = 500;
    let expression = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(convert(&expression).as_deref(), Ok("x"));

    let unbalanced = format!("{}x{}", "(".repeat(depth), ")".repeat(depth - 1));
    assert_eq!(
        convert(&unbalanced),
        Err(ConversionError::MismatchedParenthesis {
            kind: ParenthesisMismatch::Unclosed,
            position: 2 * depth,
        })
    );
}

#[test]
fn test_every_non_operator_is_an_operand() {
    assert_eq!(convert("x.y").as_deref(), Ok("x.y"));
    assert_eq!(convert("α+β*γ").as_deref(), Ok("αβγ*+"));
    // Multi-digit numbers are not merged
    assert_eq!(convert("12+3").as_deref(), Ok("123+"));
}

#[test]
fn test_positions_count_characters() {
    // The stray `)` is the third character even though `α` is two bytes
    assert_eq!(
        convert("α+)"),
        Err(ConversionError::MismatchedParenthesis {
            kind: ParenthesisMismatch::Unopened,
            position: 2,
        })
    );
}

#[test]
fn test_output_tokens_are_classified() {
    let tokens = InfixConverter::new()
        .convert("a - b ^ c")
        .unwrap()
        .into_tokens();
    assert_eq!(
        tokens,
        vec![
            Token::Operand('a'),
            Token::Operand('b'),
            Token::Operand('c'),
            Token::Operator(Operator::Pow),
            Token::Operator(Operator::Sub),
        ]
    );
}

#[test]
fn test_independent_calls_share_nothing() {
    let converter = InfixConverter::new();
    assert!(converter.convert("(a+b").is_err());
    assert_eq!(converter.convert("c").unwrap().to_string(), "c");
    assert_eq!(to_postfix("d*e").as_deref(), Ok("de*"));
}
