use crate::parser::tests::{expect_valid_tree, expect_valid_tree_raw};

#[test]
fn single_word() {
    insta::assert_snapshot!(expect_valid_tree("word"), @r#"
    Query
      OrTerm
        AndTerm
          Term
            PhraseOrWords
              WordSequence
                Word "word"
    "#);
}

#[test]
fn word_sequence() {
    insta::assert_snapshot!(expect_valid_tree_raw("big  red dog"), @r#"
    Query
      OrTerm
        AndTerm
          Term
            PhraseOrWords
              WordSequence
                Word "big"
                Whitespace "  "
                Word "red"
                Whitespace " "
                Word "dog"
    "#);
}

#[test]
fn phrase() {
    insta::assert_snapshot!(expect_valid_tree(r#""hello world""#), @r#"
    Query
      OrTerm
        AndTerm
          Term
            PhraseOrWords
              Phrase "\"hello world\""
    "#);
}

#[test]
fn exclusion_of_word() {
    insta::assert_snapshot!(expect_valid_tree("-spam"), @r#"
    Query
      OrTerm
        AndTerm
          Term
            Exclusion
              ExcludeOp "-"
              Word "spam"
    "#);
}

#[test]
fn exclusion_of_phrase() {
    insta::assert_snapshot!(expect_valid_tree(r#"-"bad idea""#), @r#"
    Query
      OrTerm
        AndTerm
          Term
            Exclusion
              ExcludeOp "-"
              Phrase "\"bad idea\""
    "#);
}

#[test]
fn inclusion_of_phrase() {
    insta::assert_snapshot!(expect_valid_tree(r#"+"exact match""#), @r#"
    Query
      OrTerm
        AndTerm
          Term
            Inclusion
              IncludeOp "+"
              Phrase "\"exact match\""
    "#);
}

#[test]
fn inclusion_of_word() {
    insta::assert_snapshot!(expect_valid_tree("+must"), @r#"
    Query
      OrTerm
        AndTerm
          Term
            Inclusion
              IncludeOp "+"
              Word "must"
    "#);
}

#[test]
fn prefix_term() {
    insta::assert_snapshot!(expect_valid_tree("abc*"), @r#"
    Query
      OrTerm
        AndTerm
          Term
            PrefixTerm
              Word "abc"
              StarOp "*"
    "#);
}

#[test]
fn keyword_lookalikes_are_words() {
    insta::assert_snapshot!(expect_valid_tree("ANDROID ORACLE"), @r#"
    Query
      OrTerm
        AndTerm
          Term
            PhraseOrWords
              WordSequence
                Word "ANDROID"
                Word "ORACLE"
    "#);
}

#[test]
fn edge_whitespace_belongs_to_query() {
    insta::assert_snapshot!(expect_valid_tree_raw("  rust  "), @r#"
    Query
      Whitespace "  "
      OrTerm
        AndTerm
          Term
            PhraseOrWords
              WordSequence
                Word "rust"
      Whitespace "  "
    "#);
}

#[test]
fn spans() {
    let parse = crate::recognize(" -a").unwrap();
    insta::assert_snapshot!(parse.printer().with_spans(true).dump(), @r#"
    Query [0..3]
      OrTerm [1..3]
        AndTerm [1..3]
          Term [1..3]
            Exclusion [1..3]
              ExcludeOp [1..2] "-"
              Word [2..3] "a"
    "#);
}

#[test]
fn spans_with_trivia() {
    let parse = crate::recognize(" a").unwrap();
    insta::assert_snapshot!(parse.printer().with_trivia(true).with_spans(true).dump(), @r#"
    Query [0..2]
      Whitespace [0..1] " "
      OrTerm [1..2]
        AndTerm [1..2]
          Term [1..2]
            PhraseOrWords [1..2]
              WordSequence [1..2]
                Word [1..2] "a"
    "#);
}
