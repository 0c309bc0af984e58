/*!

Minimal lexer. A single regular expression recognizes parentheses, operators, variables, numbers, and whitespace.
Whatever lies between two recognized lexemes is passed through as one `Unrecognized` lexeme, so the lexer never fails.
Deciding whether a lexeme is acceptable is left to validation.

The lexer is an iterator. Cloning it yields an independent iterator starting from the same position, which is how a
caller restarts it.

*/

use lazy_static::lazy_static;
use regex::Regex;
use strum_macros::{Display, IntoStaticStr};


// Alternatives are tried in order at each position. Variables precede numbers so that `x5` is not split.
const TOKEN_PATTERN_SOURCE: &str = concat!(
  r"\(",
  r"|\)",
  r"|[-+*/]",
  r"|[a-zA-Z]+[0-9]+",
  r"|(?:[0-9]+\.[0-9]*|[0-9]*\.[0-9]+|[0-9]+)(?:[eE][+-]?[0-9]+)?",
  r"|[ \t\n\r\x0B\x0C]+",
);

lazy_static! {
  static ref TOKEN_PATTERN: Regex = Regex::new(TOKEN_PATTERN_SOURCE).expect("token pattern is a valid regex");
}


#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Display, IntoStaticStr)]
pub enum LexemeKind {
  LeftParen,
  RightParen,
  Operator,
  Variable,
  Number,
  Unrecognized,
}

/// A slice of the source together with what the lexer took it to be. `offset` is the byte offset of `text` in the
/// source.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Lexeme<'s> {
  pub kind  : LexemeKind,
  pub text  : &'s str,
  pub offset: usize,
}


#[derive(Clone, Debug)]
pub struct Lexer<'s> {
  source : &'s str,
  cursor : usize,
  // A recognized lexeme found just after an unrecognized stretch that has already been returned.
  pending: Option<Lexeme<'s>>,
}

impl<'s> Lexer<'s> {
  pub fn new(source: &'s str) -> Lexer<'s> {
    Lexer {
      source,
      cursor: 0,
      pending: None,
    }
  }

  pub fn source(&self) -> &'s str {
    self.source
  }

  /// Text between recognized lexemes. Stretches of non-ASCII whitespace are dropped like ordinary whitespace.
  fn unrecognized(&self, start: usize, end: usize) -> Option<Lexeme<'s>> {
    let text = &self.source[start..end];
    if text.trim().is_empty() {
      return None;
    }
    Some(Lexeme {
      kind: LexemeKind::Unrecognized,
      text,
      offset: start,
    })
  }
}

/// Classifies a match of `TOKEN_PATTERN`. Returns `None` for whitespace.
fn classify(text: &str) -> Option<LexemeKind> {
  match *text.as_bytes().first()? {
    b'('                         => Some(LexemeKind::LeftParen),
    b')'                         => Some(LexemeKind::RightParen),
    b'+' | b'-' | b'*' | b'/'    => Some(LexemeKind::Operator),
    // The same set as the whitespace alternative of `TOKEN_PATTERN`.
    b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C => None,
    c if c.is_ascii_alphabetic() => Some(LexemeKind::Variable),
    _                            => Some(LexemeKind::Number),
  }
}

impl<'s> Iterator for Lexer<'s> {
  type Item = Lexeme<'s>;

  fn next(&mut self) -> Option<Lexeme<'s>> {
    loop {
      if let Some(lexeme) = self.pending.take() {
        return Some(lexeme);
      }
      if self.cursor >= self.source.len() {
        return None;
      }

      let start = self.cursor;
      let found = match TOKEN_PATTERN.find_at(self.source, start) {
        Some(found) => found,
        None => {
          // Nothing recognizable remains.
          self.cursor = self.source.len();
          return self.unrecognized(start, self.source.len());
        }
      };
      self.cursor = found.end();

      let recognized = classify(found.as_str()).map(
        |kind| Lexeme {
          kind,
          text: found.as_str(),
          offset: found.start(),
        }
      );

      match self.unrecognized(start, found.start()) {
        Some(gap) => {
          self.pending = recognized;
          return Some(gap);
        }
        None => {
          if recognized.is_some() {
            return recognized;
          }
          // Whitespace only. Keep scanning.
        }
      }
    } // end loop
  }
}
