use lay_lexer::{Lexer, normalize_source};
use lay_syntax::Token;
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

fn any_lay_like() -> impl Strategy<Value = String> {
    let ascii =
        proptest::collection::vec(any::<char>().prop_filter("ascii", |c| c.is_ascii()), 0..40)
            .prop_map(|v| v.into_iter().collect::<String>());
    let unicode = proptest::collection::vec(
        any::<char>().prop_filter("non-ascii", |c| !c.is_ascii()),
        0..40,
    )
    .prop_map(|v| v.into_iter().collect::<String>());
    let sym = "€ Ω … ,;()[]{} ``` # \"\\ \n \t \r\n  . = where of do case let in = /x/g 0x1F 1.5 'q'"
        .to_string();
    (ascii, unicode, any::<bool>(), any::<bool>()).prop_map(move |(a, b, f1, f2)| {
        let mut s = String::new();
        if f1 {
            s.push_str(&sym);
        }
        s.push_str(&a);
        s.push_str(&b);
        if f2 {
            s.push_str(&sym);
        }
        s.chars().take(200).collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64, max_shrink_iters: 200, .. ProptestConfig::default()
    })]
    #[ignore]
    #[test]
    fn lex_random_input_should_not_panic(s in any_lay_like()) {
        let normalized = normalize_source(&s);
        let result = Lexer::new(&normalized).lex();
        // A successful run never ends inside a layout context.
        if result.is_ok() {
            let opens = result.tokens.iter().filter(|t| matches!(t.token, Token::BlockOpen | Token::StmtOpen)).count();
            let closes = result.tokens.iter().filter(|t| matches!(t.token, Token::BlockClose | Token::StmtClose)).count();
            assert_eq!(opens, closes);
        }
    }
}
