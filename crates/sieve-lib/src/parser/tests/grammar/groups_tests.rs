use crate::parser::tests::{expect_valid_tree, expect_valid_tree_raw};

#[test]
fn group_overrides_precedence() {
    insta::assert_snapshot!(expect_valid_tree("(a AND b) OR c"), @r#"
    Query
      OrTerm
        AndTerm
          Term
            ParenOpen "("
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
            ParenClose ")"
        KwOr "OR"
        AndTerm
          Term
            PhraseOrWords
              WordSequence
                Word "c"
    "#);
}

#[test]
fn group_edge_whitespace() {
    // The inner Query takes the closing whitespace before the group can.
    insta::assert_snapshot!(expect_valid_tree_raw("( a )"), @r#"
    Query
      OrTerm
        AndTerm
          Term
            ParenOpen "("
            Whitespace " "
            Query
              OrTerm
                AndTerm
                  Term
                    PhraseOrWords
                      WordSequence
                        Word "a"
              Whitespace " "
            ParenClose ")"
    "#);
}

#[test]
fn nested_groups() {
    insta::assert_snapshot!(expect_valid_tree("((x))"), @r#"
    Query
      OrTerm
        AndTerm
          Term
            ParenOpen "("
            Query
              OrTerm
                AndTerm
                  Term
                    ParenOpen "("
                    Query
                      OrTerm
                        AndTerm
                          Term
                            PhraseOrWords
                              WordSequence
                                Word "x"
                    ParenClose ")"
            ParenClose ")"
    "#);
}

#[test]
fn group_as_and_operand() {
    insta::assert_snapshot!(expect_valid_tree("+rust AND (async OR -blocking)"), @r#"
    Query
      OrTerm
        AndTerm
          Term
            Inclusion
              IncludeOp "+"
              Word "rust"
          KwAnd "AND"
          Term
            ParenOpen "("
            Query
              OrTerm
                AndTerm
                  Term
                    PhraseOrWords
                      WordSequence
                        Word "async"
                KwOr "OR"
                AndTerm
                  Term
                    Exclusion
                      ExcludeOp "-"
                      Word "blocking"
            ParenClose ")"
    "#);
}
