use reckon::{
    error::ParseError,
    interpreter::lexer::{Scanner, TokenKind},
};

fn kinds_and_texts(src: &str) -> Vec<(TokenKind, String)> {
    Scanner::new(src).map(|token| {
                         let token = token.unwrap_or_else(|e| panic!("{src}: {e}"));
                         (token.kind, token.text.to_string())
                     })
                     .collect()
}

#[test]
fn scans_every_symbol() {
    let kinds: Vec<TokenKind> = kinds_and_texts("+ - * / ^ % & | ( ) ,").into_iter()
                                                                       .map(|(kind, _)| kind)
                                                                       .collect();
    assert_eq!(kinds,
               vec![TokenKind::Plus,
                    TokenKind::Minus,
                    TokenKind::Star,
                    TokenKind::Slash,
                    TokenKind::Caret,
                    TokenKind::Percent,
                    TokenKind::Amp,
                    TokenKind::Pipe,
                    TokenKind::LParen,
                    TokenKind::RParen,
                    TokenKind::Comma]);
}

#[test]
fn literal_tokens_keep_their_exact_text() {
    assert_eq!(kinds_and_texts("42 3.25 0x1fA 0b1011 007"),
               vec![(TokenKind::IntLiteral, "42".to_string()),
                    (TokenKind::FloatLiteral, "3.25".to_string()),
                    (TokenKind::HexLiteral, "0x1fA".to_string()),
                    (TokenKind::BinLiteral, "0b1011".to_string()),
                    (TokenKind::IntLiteral, "007".to_string())]);
}

#[test]
fn prefixes_without_digits_are_still_literals() {
    assert_eq!(kinds_and_texts("0x 0b"),
               vec![(TokenKind::HexLiteral, "0x".to_string()),
                    (TokenKind::BinLiteral, "0b".to_string())]);
}

#[test]
fn identifiers_take_letters_then_digits() {
    assert_eq!(kinds_and_texts("log10(x) π 2pi"),
               vec![(TokenKind::Identifier, "log10".to_string()),
                    (TokenKind::LParen, "(".to_string()),
                    (TokenKind::Identifier, "x".to_string()),
                    (TokenKind::RParen, ")".to_string()),
                    (TokenKind::Identifier, "π".to_string()),
                    (TokenKind::IntLiteral, "2".to_string()),
                    (TokenKind::Identifier, "pi".to_string())]);
}

#[test]
fn comments_run_to_the_end_of_the_line() {
    assert_eq!(kinds_and_texts("1 // ignored * (\n+ 2 // trailing"),
               vec![(TokenKind::IntLiteral, "1".to_string()),
                    (TokenKind::Plus, "+".to_string()),
                    (TokenKind::IntLiteral, "2".to_string())]);
}

#[test]
fn tokens_carry_line_and_column() {
    let mut scanner = Scanner::new("1 +\n  foo");

    let one = scanner.next_token().unwrap();
    assert_eq!((one.line, one.column), (1, 1));
    let plus = scanner.next_token().unwrap();
    assert_eq!((plus.line, plus.column), (1, 3));
    let foo = scanner.next_token().unwrap();
    assert_eq!((foo.line, foo.column), (2, 3));
}

#[test]
fn end_of_input_repeats() {
    let mut scanner = Scanner::new("  7 ");

    assert_eq!(scanner.next_token().unwrap().kind, TokenKind::IntLiteral);
    for _ in 0..3 {
        let token = scanner.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::EndOfInput);
        assert_eq!(token.text, "");
    }
}

#[test]
fn unknown_character_reports_its_position() {
    let mut scanner = Scanner::new("1 +\n 2 # 3");

    for _ in 0..3 {
        scanner.next_token().unwrap();
    }
    assert_eq!(scanner.next_token(),
               Err(ParseError::UnknownCharacter { character: '#',
                                                  line:      2,
                                                  column:    4, }));
}

#[test]
fn a_dot_needs_digits_on_both_sides() {
    let mut scanner = Scanner::new("3.");

    assert_eq!(scanner.next_token().unwrap().kind, TokenKind::IntLiteral);
    assert!(matches!(scanner.next_token(),
                     Err(ParseError::UnknownCharacter { character: '.', .. })));
}
