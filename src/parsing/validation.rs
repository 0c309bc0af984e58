/*!

Turns lexemes into tokens and checks that they form a well formed formula. The checks run in a fixed order and the
first failure is reported:

  1. The formula has at least one token.
  2. Every lexeme is a non-negative finite number, an operator, a parenthesis, or a variable.
  3. Scanning left to right, and for each token in turn:
     a. no `)` closes more parentheses than have been opened so far;
     b. a token after `(` or an operator begins an operand;
     c. a token after `)`, a number, or a variable is `)` or an operator;
     d. the token after `/` is not the literal text `0`.
  4. The numbers of `(` and `)` agree.
  5. The first token begins an operand and the last token ends one.

The literal `0` check is textual. `5/0.0` and `5/(1-1)` pass here and fail when evaluated.

*/

use std::str::FromStr;

use crate::{
  error::{FormulaFormatError, SyntaxViolation},
  operator::Operator,
  parsing::lexer::{Lexeme, LexemeKind},
  token::Token,
};


/// Validates the lexemes of `formula`, returning the tokens they stand for.
pub(crate) fn validate(formula: &str, lexemes: &[Lexeme]) -> Result<Vec<Token>, FormulaFormatError> {
  check(lexemes).map_err(|violation| FormulaFormatError::new(formula, violation))
}

fn check(lexemes: &[Lexeme]) -> Result<Vec<Token>, SyntaxViolation> {
  if lexemes.is_empty() {
    return Err(SyntaxViolation::Empty);
  }

  let tokens = lexemes.iter().map(to_token).collect::<Result<Vec<Token>, SyntaxViolation>>()?;

  check_sequence(&tokens, lexemes)?;

  // Both are present because `lexemes` is non-empty.
  if let (Some(first), Some(last)) = (tokens.first(), tokens.last()) {
    if !first.begins_operand() {
      return Err(SyntaxViolation::InvalidStart { token: lexemes[0].text.to_string() });
    }
    if !last.ends_operand() {
      return Err(SyntaxViolation::InvalidEnd { token: lexemes[lexemes.len() - 1].text.to_string() });
    }
  }

  Ok(tokens)
}

fn to_token(lexeme: &Lexeme) -> Result<Token, SyntaxViolation> {
  let invalid = || SyntaxViolation::InvalidToken {
    token : lexeme.text.to_string(),
    offset: lexeme.offset
  };

  match lexeme.kind {
    LexemeKind::LeftParen  => Ok(Token::LeftParen),
    LexemeKind::RightParen => Ok(Token::RightParen),
    LexemeKind::Operator   => Operator::from_str(lexeme.text).map(Token::Operator).map_err(|_| invalid()),
    LexemeKind::Variable   => Ok(Token::Variable(lexeme.text.to_string())),

    LexemeKind::Number => {
      match lexeme.text.parse::<f64>() {
        // A literal too large for `f64` would become an infinity with no textual form.
        Ok(value) if value >= 0.0 && value.is_finite() => Ok(Token::Number(value)),
        _ => Err(invalid())
      }
    }

    LexemeKind::Unrecognized => Err(invalid()),
  }
}

/// The checks that look at each token together with the one before it, followed by the parenthesis count.
fn check_sequence(tokens: &[Token], lexemes: &[Lexeme]) -> Result<(), SyntaxViolation> {
  let mut open : usize = 0;
  let mut close: usize = 0;
  let mut previous: Option<(&Token, &Lexeme)> = None;

  for (token, lexeme) in tokens.iter().zip(lexemes) {
    match token {
      Token::LeftParen  => open  += 1,
      Token::RightParen => close += 1,
      _ => {}
    }
    if close > open {
      return Err(SyntaxViolation::UnopenedParenthesis { offset: lexeme.offset });
    }

    if let Some((previous_token, previous_lexeme)) = previous {
      if previous_token.expects_operand() && !token.begins_operand() {
        return Err(SyntaxViolation::InvalidFollower {
          token   : previous_lexeme.text.to_string(),
          follower: lexeme.text.to_string(),
          offset  : lexeme.offset,
        });
      }

      if previous_token.ends_operand() && !token.follows_operand() {
        return Err(SyntaxViolation::InvalidOperandFollower {
          token   : previous_lexeme.text.to_string(),
          follower: lexeme.text.to_string(),
          offset  : lexeme.offset,
        });
      }

      if *previous_token == Token::Operator(Operator::Divide) && lexeme.text == "0" {
        return Err(SyntaxViolation::LiteralZeroDivisor { offset: lexeme.offset });
      }
    }

    previous = Some((token, lexeme));
  }

  if open != close {
    return Err(SyntaxViolation::UnbalancedParentheses { open, close });
  }

  Ok(())
}
