/*!

The four binary operators a formula may contain. Only two precedence levels exist: `*` and `/` bind tighter than
`+` and `-`, and all four associate to the left.

*/

use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::FormulaEvaluationError;


#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Display, EnumString, EnumIter, IntoStaticStr)]
pub enum Operator {
  #[strum(serialize = "+")]
  Plus,
  #[strum(serialize = "-")]
  Minus,
  #[strum(serialize = "*")]
  Times,
  #[strum(serialize = "/")]
  Divide,
}

impl Operator {
  pub fn symbol(&self) -> &'static str {
    self.into()
  }

  /// `+` and `-`
  pub fn is_additive(&self) -> bool {
    matches!(self, Operator::Plus | Operator::Minus)
  }

  /// `*` and `/`
  pub fn is_multiplicative(&self) -> bool {
    matches!(self, Operator::Times | Operator::Divide)
  }

  /// Applies the operator with `left` as the left operand. Dividing by zero, positive or negative, is an error;
  /// every other non-finite result is returned as is.
  pub fn apply(&self, left: f64, right: f64) -> Result<f64, FormulaEvaluationError> {
    match self {
      Operator::Plus   => Ok(left + right),
      Operator::Minus  => Ok(left - right),
      Operator::Times  => Ok(left * right),
      Operator::Divide => {
        if right == 0.0 {
          Err(FormulaEvaluationError::DivisionByZero { dividend: left })
        } else {
          Ok(left / right)
        }
      }
    }
  }
}
