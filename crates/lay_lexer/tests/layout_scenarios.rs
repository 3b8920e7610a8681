use lay_lexer::{LexErrorKind, Lexer, lex, normalize_source};
use lay_syntax::{Literal, Position, Token};

fn ident(s: &str) -> Token {
    Token::Ident(s.to_string())
}

fn kw(s: &str) -> Token {
    Token::Keyword(s.to_string())
}

fn sym(s: &str) -> Token {
    Token::symbol(s)
}

fn num(s: &str) -> Token {
    Token::Lit(Literal::Number(s.to_string()))
}

fn tokens(input: &str) -> Vec<Token> {
    match lex(input) {
        Ok(tokens) => tokens.into_iter().map(|t| t.token).collect(),
        Err(err) => panic!("lexing {input:?} failed: {err}"),
    }
}

#[test]
fn multi_line_assignment_opens_a_statement() {
    assert_eq!(
        tokens("x =\n  1\n"),
        vec![ident("x"), sym("="), Token::StmtOpen, num("1"), Token::StmtClose]
    );
}

#[test]
fn line_break_inside_parens_emits_nothing() {
    assert_eq!(
        tokens("f (a,\n   b)"),
        vec![
            ident("f"),
            sym("("),
            ident("a"),
            sym(","),
            ident("b"),
            sym(")")
        ]
    );
}

#[test]
fn where_block_separates_aligned_lines() {
    let src = "f = g where\n  a = 1\n  b = 2\nh = 3\n";
    assert_eq!(
        tokens(src),
        vec![
            ident("f"),
            sym("="),
            ident("g"),
            kw("where"),
            Token::BlockOpen,
            ident("a"),
            sym("="),
            num("1"),
            Token::LineSep,
            ident("b"),
            sym("="),
            num("2"),
            Token::BlockClose,
            ident("h"),
            sym("="),
            num("3"),
        ]
    );
}

#[test]
fn close_paren_closes_an_open_statement_first() {
    assert_eq!(
        tokens("f (x =\n  1)"),
        vec![
            ident("f"),
            sym("("),
            ident("x"),
            sym("="),
            Token::StmtOpen,
            num("1"),
            Token::StmtClose,
            sym(")"),
        ]
    );
}

#[test]
fn dedent_into_a_gap_stops_the_run() {
    let result = Lexer::new("main = do\n    a\n  b\nc\n").lex();
    let err = result.error.expect("indentation error");
    assert_eq!(err.kind, LexErrorKind::Indentation);
    assert_eq!(err.pos, Position::new(3, 3));
    let emitted: Vec<Token> = result.tokens.into_iter().map(|t| t.token).collect();
    assert_eq!(
        emitted,
        vec![ident("main"), sym("="), kw("do"), Token::BlockOpen, ident("a")]
    );
}

#[test]
fn same_line_block_aligns_with_its_first_token() {
    let src = "f = case x of Just y -> y\n              None -> 0\n";
    assert_eq!(
        tokens(src),
        vec![
            ident("f"),
            sym("="),
            kw("case"),
            ident("x"),
            kw("of"),
            Token::BlockOpen,
            ident("Just"),
            ident("y"),
            sym("->"),
            ident("y"),
            Token::LineSep,
            ident("None"),
            sym("->"),
            num("0"),
            Token::BlockClose,
        ]
    );
}

#[test]
fn one_line_break_closes_several_levels() {
    let src = "main = do\n  x =\n    y where\n      z\n  w\n";
    assert_eq!(
        tokens(src),
        vec![
            ident("main"),
            sym("="),
            kw("do"),
            Token::BlockOpen,
            ident("x"),
            sym("="),
            Token::StmtOpen,
            ident("y"),
            kw("where"),
            Token::BlockOpen,
            ident("z"),
            Token::BlockClose,
            Token::StmtClose,
            Token::LineSep,
            ident("w"),
            Token::BlockClose,
        ]
    );
}

#[test]
fn deeper_line_in_a_statement_nests_another_statement() {
    let src = "x =\n  a\n    b\n  c\n";
    assert_eq!(
        tokens(src),
        vec![
            ident("x"),
            sym("="),
            Token::StmtOpen,
            ident("a"),
            Token::StmtOpen,
            ident("b"),
            Token::StmtClose,
            Token::LineSep,
            ident("c"),
            Token::StmtClose,
        ]
    );
}

#[test]
fn deeper_line_in_a_block_is_a_continuation() {
    let src = "main = do\n  f a\n      b\n";
    assert_eq!(
        tokens(src),
        vec![
            ident("main"),
            sym("="),
            kw("do"),
            Token::BlockOpen,
            ident("f"),
            ident("a"),
            ident("b"),
            Token::BlockClose,
        ]
    );
}

#[test]
fn empty_block_when_next_line_is_not_indented() {
    let src = "f = g where\nh = 1\n";
    assert_eq!(
        tokens(src),
        vec![
            ident("f"),
            sym("="),
            ident("g"),
            kw("where"),
            Token::BlockOpen,
            Token::BlockClose,
            ident("h"),
            sym("="),
            num("1"),
        ]
    );
    assert_eq!(
        tokens("x = do"),
        vec![ident("x"), sym("="), kw("do"), Token::BlockOpen, Token::BlockClose]
    );
}

#[test]
fn blank_and_comment_lines_do_not_separate() {
    let src = "main = do\n  a\n\n  # note\n     \n  b\n";
    assert_eq!(
        tokens(src),
        vec![
            ident("main"),
            sym("="),
            kw("do"),
            Token::BlockOpen,
            ident("a"),
            Token::LineSep,
            ident("b"),
            Token::BlockClose,
        ]
    );
}

#[test]
fn bracket_closes_a_block_opened_inside_it() {
    let src = "xs = [do\n  a\n  b]\n";
    assert_eq!(
        tokens(src),
        vec![
            ident("xs"),
            sym("="),
            sym("["),
            kw("do"),
            Token::BlockOpen,
            ident("a"),
            Token::LineSep,
            ident("b"),
            Token::BlockClose,
            sym("]"),
        ]
    );
}

#[test]
fn lines_inside_brackets_must_pass_the_inherited_threshold() {
    let err = lex("main = do\n  f (a,\n  b)\n").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::Indentation);
    assert_eq!(err.pos, Position::new(3, 3));
    assert!(lex("main = do\n  f (a,\n   b)\n").is_ok());
}

#[test]
fn bracket_errors() {
    let err = lex("f (a]").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::Bracket);
    assert_eq!(err.pos, Position::new(1, 5));

    let err = lex("a)").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::Bracket);
    assert!(err.message.contains("unbalanced"));
}

#[test]
fn unclosed_bracket_at_end_of_input() {
    let result = Lexer::new("f (a\n").lex();
    let err = result.error.expect("fails");
    assert_eq!(err.kind, LexErrorKind::Indentation);
    assert!(err.message.contains("unclosed '('"));
}

#[test]
fn unclosed_bracket_under_a_block() {
    let err = lex("f (do\n  a").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::Indentation);
    assert!(err.message.contains("unclosed '('"), "{}", err.message);
    assert_eq!(err.pos, Position::new(2, 4));
}

#[test]
fn failing_bracket_drops_the_closes_it_generated() {
    let result = Lexer::new("f (do\n  a]").lex();
    let err = result.error.expect("fails");
    assert_eq!(err.kind, LexErrorKind::Bracket);
    assert_eq!(err.pos, Position::new(2, 4));
    let emitted: Vec<Token> = result.tokens.into_iter().map(|t| t.token).collect();
    assert_eq!(
        emitted,
        vec![ident("f"), sym("("), kw("do"), Token::BlockOpen, ident("a")]
    );
}

#[test]
fn assignment_before_a_trailing_comment_opens_a_statement() {
    let tokens = lex("x =  # c\n  1").expect("lexes");
    let positions: Vec<(Position, Token)> =
        tokens.into_iter().map(|t| (t.pos, t.token)).collect();
    assert_eq!(
        positions,
        vec![
            (Position::new(1, 1), ident("x")),
            (Position::new(1, 3), sym("=")),
            (Position::new(1, 4), Token::StmtOpen),
            (Position::new(2, 3), num("1")),
            (Position::new(2, 4), Token::StmtClose),
        ]
    );
}

#[test]
fn top_level_indentation_is_an_error() {
    let err = lex("  x").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::Indentation);
    assert_eq!(err.pos, Position::new(1, 3));
    let err = lex("x\n  y").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::Indentation);
}

#[test]
fn layout_tokens_carry_the_run_start_position() {
    let tokens = lex("x =\n  1\n").expect("lexes");
    let positions: Vec<(Position, Token)> =
        tokens.into_iter().map(|t| (t.pos, t.token)).collect();
    assert_eq!(
        positions,
        vec![
            (Position::new(1, 1), ident("x")),
            (Position::new(1, 3), sym("=")),
            (Position::new(1, 4), Token::StmtOpen),
            (Position::new(2, 3), num("1")),
            (Position::new(2, 4), Token::StmtClose),
        ]
    );
}

#[test]
fn literals_do_not_trigger_layout() {
    let src = "s = ```a\nb```\nt = \"q\\\"x\" 'c' 0x1F 2.5\n";
    assert_eq!(
        tokens(src),
        vec![
            ident("s"),
            sym("="),
            Token::RawLit("a\nb".to_string()),
            ident("t"),
            sym("="),
            Token::Lit(Literal::Str("q\\\"x".to_string())),
            Token::Lit(Literal::Str("c".to_string())),
            num("0x1F"),
            num("2.5"),
        ]
    );
}

#[test]
fn crlf_input_lexes_like_lf() {
    let crlf = "main = do\r\n  a\r\n  b\r\n";
    assert_eq!(tokens(crlf), tokens(&normalize_source(crlf)));
    assert_eq!(tokens(crlf), tokens("main = do\n  a\n  b\n"));
}

#[test]
fn empty_input_has_no_tokens() {
    assert!(tokens("").is_empty());
    assert!(tokens("\n\n# only a comment\n").is_empty());
}
