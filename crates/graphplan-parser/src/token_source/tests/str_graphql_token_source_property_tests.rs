use proptest::prelude::*;

use crate::token::GraphQLTokenKind;
use crate::token_source::StrGraphQLTokenSource;

proptest! {
    /// The lexer terminates on arbitrary input, ends with exactly one `Eof`
    /// and produces spans that cover valid, increasing source ranges.
    #[test]
    fn arbitrary_input_lexes_to_ordered_spans(source in "\\PC{0,64}") {
        let tokens: Vec<_> = StrGraphQLTokenSource::new(&source).collect();
        prop_assert!(matches!(tokens.last().map(|t| &t.kind), Some(GraphQLTokenKind::Eof)));
        prop_assert_eq!(
            tokens.iter().filter(|t| matches!(t.kind, GraphQLTokenKind::Eof)).count(),
            1
        );

        let mut previous_end = 0;
        for token in &tokens {
            let span = token.byte_span();
            prop_assert!(span.start as usize >= previous_end);
            prop_assert!(span.end >= span.start);
            prop_assert!(source.get(span.start as usize..span.end as usize).is_some());
            previous_end = span.end as usize;
        }
    }

    /// Every name token's text is exactly the source text of its span.
    #[test]
    fn name_text_matches_span(names in prop::collection::vec("[_a-zA-Z][_a-zA-Z0-9]{0,8}", 1..8)) {
        let source = names.join(" , ");
        for token in StrGraphQLTokenSource::new(&source) {
            match token.kind {
                GraphQLTokenKind::Name(text) => {
                    prop_assert_eq!(text, token.byte_span().slice(&source));
                },
                GraphQLTokenKind::True | GraphQLTokenKind::False | GraphQLTokenKind::Null => {},
                GraphQLTokenKind::Eof => {},
                other => prop_assert!(false, "unexpected token {:?}", other),
            }
        }
    }

    /// Valid integers lex to a single `IntValue` holding their text.
    #[test]
    fn integers_roundtrip_text(value in any::<i64>()) {
        let source = value.to_string();
        let kinds: Vec<_> = StrGraphQLTokenSource::new(&source).map(|t| t.kind).collect();
        prop_assert_eq!(kinds, vec![GraphQLTokenKind::IntValue(&source), GraphQLTokenKind::Eof]);
    }
}
