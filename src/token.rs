/*!

The validated tokens a `Formula` is made of.

*/

use std::fmt::{Display, Formatter};

use crate::operator::Operator;


#[derive(Clone, PartialEq, Debug)]
pub enum Token {
  Number(f64),
  Variable(String),
  Operator(Operator),
  LeftParen,
  RightParen,
}

impl Token {
  /// Can this token begin an operand? These are the tokens allowed after `(` or an operator, and at the start of a
  /// formula.
  pub fn begins_operand(&self) -> bool {
    matches!(self, Token::LeftParen | Token::Number(_) | Token::Variable(_))
  }

  /// Can this token end an operand? These are the tokens allowed at the end of a formula.
  pub fn ends_operand(&self) -> bool {
    matches!(self, Token::RightParen | Token::Number(_) | Token::Variable(_))
  }

  /// Must the next token begin an operand?
  pub fn expects_operand(&self) -> bool {
    matches!(self, Token::LeftParen | Token::Operator(_))
  }

  /// Can this token directly follow the end of an operand?
  pub fn follows_operand(&self) -> bool {
    matches!(self, Token::RightParen | Token::Operator(_))
  }

  pub fn variable_name(&self) -> Option<&str> {
    match self {
      Token::Variable(name) => Some(name.as_str()),
      _ => None
    }
  }
}

impl Display for Token {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Token::Number(n)   => write!(f, "{}", n),
      Token::Variable(v) => write!(f, "{}", v),
      Token::Operator(o) => write!(f, "{}", o),
      Token::LeftParen   => write!(f, "("),
      Token::RightParen  => write!(f, ")"),
    }
  }
}
