use crate::SyntaxKind;
use crate::parser::recognize;
use crate::parser::tests::{expect_valid_tree, expect_valid_tree_raw};

#[test]
fn and_binds_tighter_than_or() {
    insta::assert_snapshot!(expect_valid_tree("a AND b OR c"), @r#"
    Query
      OrTerm
        AndTerm
          Term
            PhraseOrWords
              WordSequence
                Word "a"
          KwAnd "AND"
          Term
            PhraseOrWords
              WordSequence
                Word "b"
        KwOr "OR"
        AndTerm
          Term
            PhraseOrWords
              WordSequence
                Word "c"
    "#);
}

#[test]
fn and_binds_tighter_than_or_on_the_right() {
    insta::assert_snapshot!(expect_valid_tree("a OR b AND c"), @r#"
    Query
      OrTerm
        AndTerm
          Term
            PhraseOrWords
              WordSequence
                Word "a"
        KwOr "OR"
        AndTerm
          Term
            PhraseOrWords
              WordSequence
                Word "b"
          KwAnd "AND"
          Term
            PhraseOrWords
              WordSequence
                Word "c"
    "#);
}

#[test]
fn chained_and_is_flat() {
    insta::assert_snapshot!(expect_valid_tree("a AND b AND c"), @r#"
    Query
      OrTerm
        AndTerm
          Term
            PhraseOrWords
              WordSequence
                Word "a"
          KwAnd "AND"
          Term
            PhraseOrWords
              WordSequence
                Word "b"
          KwAnd "AND"
          Term
            PhraseOrWords
              WordSequence
                Word "c"
    "#);
}

#[test]
fn connective_whitespace() {
    insta::assert_snapshot!(expect_valid_tree_raw("x OR\ty"), @r#"
    Query
      OrTerm
        AndTerm
          Term
            PhraseOrWords
              WordSequence
                Word "x"
        Whitespace " "
        KwOr "OR"
        Whitespace "\t"
        AndTerm
          Term
            PhraseOrWords
              WordSequence
                Word "y"
    "#);
}

#[test]
fn mixed_operands() {
    insta::assert_snapshot!(expect_valid_tree(r#"-spam AND "a b" OR c*"#), @r#"
    Query
      OrTerm
        AndTerm
          Term
            Exclusion
              ExcludeOp "-"
              Word "spam"
          KwAnd "AND"
          Term
            PhraseOrWords
              Phrase "\"a b\""
        KwOr "OR"
        AndTerm
          Term
            PrefixTerm
              Word "c"
              StarOp "*"
    "#);
}

#[test]
fn word_sequences_stop_at_connectives() {
    let parse = recognize("red fox OR blue whale").unwrap();
    let or_term = parse.root().child_nodes(SyntaxKind::OrTerm).next().unwrap();
    let operands: Vec<String> = or_term
        .child_nodes(SyntaxKind::AndTerm)
        .map(|n| n.tokens().iter().map(|t| t.text).collect())
        .collect();
    assert_eq!(operands, ["red fox", "blue whale"]);
}

#[test]
fn lowercase_connectives_are_words() {
    let parse = recognize("cats and dogs").unwrap();
    let or_term = parse.root().child_nodes(SyntaxKind::OrTerm).next().unwrap();
    assert_eq!(or_term.child_nodes(SyntaxKind::AndTerm).count(), 1);
    assert!(
        parse
            .tokens()
            .iter()
            .all(|t| !matches!(t.kind, SyntaxKind::KwAnd | SyntaxKind::KwOr))
    );
}
