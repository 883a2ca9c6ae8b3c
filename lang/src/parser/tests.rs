use super::*;
use crate::lexer::tokenize;
use expect_test::expect;

fn parse_source(source: &str) -> Result<Program, ParseError> {
    let tokens = tokenize(source);
    parse(&tokens)
}

fn parse_error(source: &str) -> ParseError {
    parse_source(source).unwrap_err()
}

#[test]
fn parse_declaration_with_initializer() {
    let program = parse_source("int x1 = 42;").unwrap();
    expect![[r#"
        [
            Declaration {
                ty: Int,
                name: "x1",
                init: Some(
                    Literal {
                        value: "42",
                        ty: Int,
                    },
                ),
            },
        ]
    "#]]
    .assert_debug_eq(&program);
}

#[test]
fn parse_matching_literals_for_each_type() {
    let cases = [
        ("int a = 1;", Type::Int, "a", "1"),
        ("float b = 2.5;", Type::Float, "b", "2.5"),
        ("string c = \"hi\";", Type::String, "c", "hi"),
        ("bool d = true;", Type::Bool, "d", "true"),
    ];

    for (source, ty, name, value) in cases {
        let program = parse_source(source).unwrap();
        assert_eq!(
            program,
            vec![Declaration {
                ty,
                name: name.to_string(),
                init: Some(Expr::Literal {
                    value: value.to_string(),
                    ty,
                }),
            }],
            "source: {source:?}"
        );
    }
}

#[test]
fn parse_declaration_without_initializer() {
    let program = parse_source("float f;").unwrap();
    assert_eq!(
        program,
        vec![Declaration {
            ty: Type::Float,
            name: "f".to_string(),
            init: None,
        }]
    );
}

#[test]
fn identifier_initializers_skip_type_checking() {
    // There is no symbol table, so an identifier satisfies any declared type
    let program = parse_source("bool flag = other;").unwrap();
    assert_eq!(
        program,
        vec![Declaration {
            ty: Type::Bool,
            name: "flag".to_string(),
            init: Some(Expr::Identifier("other".to_string())),
        }]
    );
}

#[test]
fn parse_multiple_declarations_in_order() {
    let program = parse_source("int x = 1;\nfloat y;\nstring z = x;").unwrap();
    let names: Vec<_> = program.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["x", "y", "z"]);
    assert_eq!(program[1].init, None);
    assert_eq!(program[2].init, Some(Expr::Identifier("x".to_string())));
}

#[test]
fn parse_empty_input() {
    assert_eq!(parse_source("").unwrap(), vec![]);
}

#[test]
fn missing_semicolon_fails_at_eof_token() {
    let err = parse_error("int x = 42");
    assert_eq!(err.kind, ParseErrorKind::FailedToFindToken);
    assert_eq!(err.token.kind, TokenKind::Eof);
    assert_eq!(err.token.position, Position::new(1, 11));
    assert_eq!(err.message, "Expected ';' after variable declaration");
}

#[test]
fn missing_type_keyword() {
    let err = parse_error("x = 42;");
    assert_eq!(err.kind, ParseErrorKind::ExpectedTypeToken);
    assert_eq!(err.token.kind, TokenKind::Identifier);
    assert_eq!(err.token.text, "x");
    assert_eq!(err.token.position, Position::new(1, 1));
}

#[test]
fn missing_variable_name() {
    let err = parse_error("int = 42;");
    assert_eq!(err.kind, ParseErrorKind::ExpectedIdentifier);
    assert_eq!(err.token.kind, TokenKind::Assign);
    assert_eq!(err.token.position, Position::new(1, 5));
}

#[test]
fn number_used_as_variable_name() {
    let err = parse_error("int 123 = 5;");
    assert_eq!(err.kind, ParseErrorKind::ExpectedIdentifier);
    assert_eq!(err.token.kind, TokenKind::IntLit);
    assert_eq!(err.token.text, "123");
}

#[test]
fn literal_type_mismatches_carry_the_offending_token() {
    let err = parse_error("int x = \"Rahim\";");
    assert_eq!(err.kind, ParseErrorKind::ExpectedIntLit);
    assert_eq!(err.token.kind, TokenKind::StringLit);
    assert_eq!(err.token.text, "Rahim");

    let err = parse_error("float pi = true;");
    assert_eq!(err.kind, ParseErrorKind::ExpectedFloatLit);
    assert_eq!(err.token.kind, TokenKind::BoolLit);

    let err = parse_error("string name = 42;");
    assert_eq!(err.kind, ParseErrorKind::ExpectedStringLit);
    assert_eq!(err.token.kind, TokenKind::IntLit);

    let err = parse_error("bool flag = 123;");
    assert_eq!(err.kind, ParseErrorKind::ExpectedBoolLit);
    assert_eq!(err.token.kind, TokenKind::IntLit);
}

#[test]
fn missing_expression_after_assign() {
    let err = parse_error("int x = ;");
    assert_eq!(err.kind, ParseErrorKind::ExpectedExpr);
    assert_eq!(err.token.kind, TokenKind::Semicolon);
}

#[test]
fn eof_inside_initializer_fails_the_expression_rule() {
    // The end-of-input token is the current token and fails the expression
    // rule's kind check; there is no separate unexpected-eof path.
    let err = parse_error("int y = 5; int z =");
    assert_eq!(err.kind, ParseErrorKind::ExpectedExpr);
    assert_eq!(err.token.kind, TokenKind::Eof);
}

#[test]
fn missing_assign_before_literal() {
    let err = parse_error("int x 42;");
    assert_eq!(err.kind, ParseErrorKind::FailedToFindToken);
    assert_eq!(err.token.kind, TokenKind::IntLit);
    assert_eq!(err.token.text, "42");
}

#[test]
fn invalid_identifier_token_fails_the_expression_rule() {
    // Truncated sequence from a second decimal point: no Eof token at all
    let err = parse_error("int x = 1.2.3;");
    assert_eq!(err.kind, ParseErrorKind::ExpectedExpr);
    assert_eq!(err.token.kind, TokenKind::InvalidIdentifier);
    assert_eq!(err.token.text, "1.2");
}

#[test]
fn cursor_past_truncated_sequence_reads_synthetic_eof() {
    let tokens = vec![Token::new(TokenKind::Int, "int", Position::new(1, 1))];
    let err = parse(&tokens).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::ExpectedIdentifier);
    assert_eq!(err.token.kind, TokenKind::Eof);
}

#[test]
fn parse_error_display() {
    let err = parse_error("int x = 42");
    assert_eq!(
        err.to_string(),
        "FailedToFindToken at 1:11: Expected ';' after variable declaration (found T_EOF \"\")"
    );

    let err = parse_error("int x = \"Rahim\";");
    assert_eq!(
        err.to_string(),
        "ExpectedIntLit at 1:9: Expected integer literal (found T_STRINGLIT \"Rahim\")"
    );
}

#[test]
fn error_kind_names_are_stable() {
    let kinds = [
        (ParseErrorKind::UnexpectedEOF, "UnexpectedEOF"),
        (ParseErrorKind::FailedToFindToken, "FailedToFindToken"),
        (ParseErrorKind::ExpectedTypeToken, "ExpectedTypeToken"),
        (ParseErrorKind::ExpectedIdentifier, "ExpectedIdentifier"),
        (ParseErrorKind::UnexpectedToken, "UnexpectedToken"),
        (ParseErrorKind::ExpectedFloatLit, "ExpectedFloatLit"),
        (ParseErrorKind::ExpectedIntLit, "ExpectedIntLit"),
        (ParseErrorKind::ExpectedStringLit, "ExpectedStringLit"),
        (ParseErrorKind::ExpectedBoolLit, "ExpectedBoolLit"),
        (ParseErrorKind::ExpectedExpr, "ExpectedExpr"),
    ];
    for (kind, name) in kinds {
        assert_eq!(kind.name(), name);
    }
}
