//! Grammar productions for the search query language.
//!
//! ```text
//! WordSequence  := word (whitespace word)*
//! PhraseOrWords := phrase | WordSequence
//! Exclusion     := exclude_op word | exclude_op phrase
//! Inclusion     := include_op word | include_op phrase
//! PrefixTerm    := word star_op
//! Term          := Exclusion | Inclusion | PrefixTerm | PhraseOrWords
//!                | lparen whitespace? Query whitespace? rparen
//! AndTerm       := Term (whitespace and whitespace Term)*
//! OrTerm        := AndTerm (whitespace or whitespace AndTerm)*
//! Query         := whitespace? OrTerm whitespace?
//! ```
//!
//! Alternatives are ordered: the first one that matches wins. A bare word reaches
//! `WordSequence` only after `Exclusion`, `Inclusion` and `PrefixTerm` have failed.
//! Every production is a table of designators; none of them reads the lexer itself.

use super::combinators::{Designator, Element, Node};
use super::core::Parser;
use super::cst::SyntaxKind::{self, *};
use super::trace::Tracer;

use Designator::{Optional, Rule, Terminal};

const WHITESPACE_OPT: Designator = Optional(&[Terminal(Whitespace)]);

const WORD_SEQUENCE_HEAD: &[Designator] = &[Terminal(Word)];
const WORD_SEQUENCE_TAIL: &[Designator] = &[Terminal(Whitespace), Terminal(Word)];

const PHRASE_OR_WORDS: &[&[Designator]] = &[&[Terminal(Phrase)], &[Rule(WordSequence)]];

const EXCLUSION: &[&[Designator]] = &[
    &[Terminal(ExcludeOp), Terminal(Word)],
    &[Terminal(ExcludeOp), Terminal(Phrase)],
];

const INCLUSION: &[&[Designator]] = &[
    &[Terminal(IncludeOp), Terminal(Word)],
    &[Terminal(IncludeOp), Terminal(Phrase)],
];

const PREFIX_TERM: &[Designator] = &[Terminal(Word), Terminal(StarOp)];

const TERM: &[&[Designator]] = &[
    &[Rule(Exclusion)],
    &[Rule(Inclusion)],
    &[Rule(PrefixTerm)],
    &[Rule(PhraseOrWords)],
    // Group recurses into Query for its optional edge whitespace.
    &[
        Terminal(ParenOpen),
        WHITESPACE_OPT,
        Rule(Query),
        WHITESPACE_OPT,
        Terminal(ParenClose),
    ],
];

const AND_TERM_HEAD: &[Designator] = &[Rule(Term)];
const AND_TERM_TAIL: &[Designator] = &[
    Terminal(Whitespace),
    Terminal(KwAnd),
    Terminal(Whitespace),
    Rule(Term),
];

const OR_TERM_HEAD: &[Designator] = &[Rule(AndTerm)];
const OR_TERM_TAIL: &[Designator] = &[
    Terminal(Whitespace),
    Terminal(KwOr),
    Terminal(Whitespace),
    Rule(AndTerm),
];

const QUERY: &[Designator] = &[WHITESPACE_OPT, Rule(OrTerm), WHITESPACE_OPT];

impl<'src, T: Tracer> Parser<'src, '_, T> {
    /// Single entry point for every production. `kind` must be a node kind.
    pub(super) fn parse_rule(&mut self, kind: SyntaxKind) -> Option<Node<'src>> {
        if !self.enter_recursion() {
            return None;
        }
        self.tracer.trace_enter(kind);

        let children = match kind {
            WordSequence => self.repetition(WORD_SEQUENCE_HEAD, WORD_SEQUENCE_TAIL),
            PhraseOrWords => self.choice(PHRASE_OR_WORDS),
            Exclusion => self.choice(EXCLUSION),
            Inclusion => self.choice(INCLUSION),
            PrefixTerm => self.sequence(PREFIX_TERM),
            Term => self.choice(TERM),
            AndTerm => self.repetition(AND_TERM_HEAD, AND_TERM_TAIL),
            OrTerm => self.repetition(OR_TERM_HEAD, OR_TERM_TAIL),
            Query => self.sequence(QUERY),
            _ => Self::unsupported_designator(Rule(kind)),
        };

        self.exit_recursion();

        match children {
            Some(children) => {
                let node = Node::new(kind, children);
                self.tracer.trace_match(&node);
                Some(node)
            }
            None => {
                self.tracer.trace_fail(kind);
                None
            }
        }
    }

    /// `head tail*`: zero or more `tail` matches after `head`, stopping at the first miss
    /// or once recursion fuel is exhausted.
    pub(super) fn repetition(
        &mut self,
        head: &[Designator],
        tail: &[Designator],
    ) -> Option<Vec<Element<'src>>> {
        let mut elements = self.sequence(head)?;
        while !self.has_fatal_error()
            && let Some(more) = self.sequence(tail)
        {
            elements.extend(more);
        }
        Some(elements)
    }
}
