//! Engine-facing query artifacts produced by the standard builders.

use std::fmt::{self, Write};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Term {
    pub field: String,
    pub text: String,
}

impl Term {
    pub fn new(field: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            text: text.into(),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field, self.text)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Occur {
    Must,
    Should,
    MustNot,
}

impl Occur {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Must => "MUST",
            Self::Should => "SHOULD",
            Self::MustNot => "MUST_NOT",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Clause {
    pub occur: Occur,
    pub query: Query,
}

/// Alternatives sharing one phrase position.
#[derive(Clone, Debug, PartialEq)]
pub struct PhraseStep {
    pub position: u32,
    pub terms: Vec<Term>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Within {
    Terms(u32),
    Sentence,
    Paragraph,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Query {
    Term(Term),
    Boolean {
        clauses: Vec<Clause>,
    },
    /// Terms paired with their absolute positions.
    Phrase {
        terms: Vec<(Term, u32)>,
        slop: u32,
    },
    MultiPhrase {
        steps: Vec<PhraseStep>,
        slop: u32,
    },
    Fuzzy {
        term: Term,
        max_edits: u32,
        prefix_length: u32,
    },
    Near {
        clauses: Vec<Query>,
        within: Within,
        in_order: bool,
    },
    Boost {
        query: Box<Query>,
        boost: f32,
    },
    MatchAll,
    MatchNone,
}

impl Query {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Term(_) => "term",
            Self::Boolean { .. } => "boolean",
            Self::Phrase { .. } => "phrase",
            Self::MultiPhrase { .. } => "multi-phrase",
            Self::Fuzzy { .. } => "fuzzy",
            Self::Near { .. } => "near",
            Self::Boost { .. } => "boost",
            Self::MatchAll => "match-all",
            Self::MatchNone => "match-none",
        }
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(0, None, &mut out)
            .expect("String write never fails");
        out
    }

    fn format(&self, indent: usize, label: Option<&str>, w: &mut impl Write) -> fmt::Result {
        let prefix = "  ".repeat(indent);
        write!(w, "{prefix}")?;
        if let Some(label) = label {
            write!(w, "{label} ")?;
        }

        match self {
            Self::Term(term) => writeln!(w, "Term {term}"),
            Self::Boolean { clauses } => {
                writeln!(w, "Boolean")?;
                for clause in clauses {
                    clause
                        .query
                        .format(indent + 1, Some(clause.occur.as_str()), w)?;
                }
                Ok(())
            }
            Self::Phrase { terms, slop } => {
                writeln!(w, "Phrase slop={slop}")?;
                for (term, position) in terms {
                    writeln!(w, "{prefix}  @{position} {term}")?;
                }
                Ok(())
            }
            Self::MultiPhrase { steps, slop } => {
                writeln!(w, "MultiPhrase slop={slop}")?;
                for step in steps {
                    write!(w, "{prefix}  @{}", step.position)?;
                    for (i, term) in step.terms.iter().enumerate() {
                        let sep = if i == 0 { " " } else { " | " };
                        write!(w, "{sep}{term}")?;
                    }
                    writeln!(w)?;
                }
                Ok(())
            }
            Self::Fuzzy {
                term,
                max_edits,
                prefix_length,
            } => writeln!(w, "Fuzzy {term} edits={max_edits} prefix={prefix_length}"),
            Self::Near {
                clauses,
                within,
                in_order,
            } => {
                let within = match within {
                    Within::Terms(n) => n.to_string(),
                    Within::Sentence => "sentence".to_owned(),
                    Within::Paragraph => "paragraph".to_owned(),
                };
                writeln!(w, "Near within={within} in_order={in_order}")?;
                for clause in clauses {
                    clause.format(indent + 1, None, w)?;
                }
                Ok(())
            }
            Self::Boost { query, boost } => {
                writeln!(w, "Boost {boost}")?;
                query.format(indent + 1, None, w)
            }
            Self::MatchAll => writeln!(w, "MatchAll"),
            Self::MatchNone => writeln!(w, "MatchNone"),
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.format(0, None, f)
    }
}
