/*!

Error types for the three places a formula can fail: construction (`FormulaFormatError`), evaluation
(`FormulaEvaluationError`), and variable lookup (`LookupError`, returned by resolvers).

*/

use thiserror::Error;


/// The syntax rule a rejected formula broke. Offsets are byte offsets into the source string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxViolation {
  #[error("it contains no tokens")]
  Empty,

  #[error("`{token}` at offset {offset} is not a finite number, variable, operator, or parenthesis")]
  InvalidToken { token: String, offset: usize },

  #[error("`)` at offset {offset} closes a parenthesis that was never opened")]
  UnopenedParenthesis { offset: usize },

  #[error("`{token}` must be followed by `(`, a number, or a variable, found `{follower}` at offset {offset}")]
  InvalidFollower { token: String, follower: String, offset: usize },

  #[error("`{token}` must be followed by `)`, an operator, or the end of the formula, found `{follower}` at offset {offset}")]
  InvalidOperandFollower { token: String, follower: String, offset: usize },

  #[error("the divisor at offset {offset} is the literal `0`")]
  LiteralZeroDivisor { offset: usize },

  #[error("it opens {open} parentheses but closes {close}")]
  UnbalancedParentheses { open: usize, close: usize },

  #[error("it cannot start with `{token}`")]
  InvalidStart { token: String },

  #[error("it cannot end with `{token}`")]
  InvalidEnd { token: String },
}

impl SyntaxViolation {
  /// The number of the syntax rule, 1 through 7, this violation belongs to.
  pub fn rule(&self) -> u8 {
    match self {
      SyntaxViolation::Empty                         => 1,
      SyntaxViolation::InvalidToken { .. }           => 2,
      | SyntaxViolation::UnopenedParenthesis { .. }
      | SyntaxViolation::UnbalancedParentheses { .. } => 3,
      SyntaxViolation::InvalidFollower { .. }        => 4,
      SyntaxViolation::InvalidOperandFollower { .. } => 5,
      SyntaxViolation::LiteralZeroDivisor { .. }     => 6,
      | SyntaxViolation::InvalidStart { .. }
      | SyntaxViolation::InvalidEnd { .. }           => 7,
    }
  }
}


/// Returned by `Formula::new` when the source string is not a well formed formula.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("The formula \"{formula}\" is syntactically invalid: {violation}")]
pub struct FormulaFormatError {
  pub formula  : String,
  pub violation: SyntaxViolation,
}

impl FormulaFormatError {
  pub fn new(formula: &str, violation: SyntaxViolation) -> FormulaFormatError {
    FormulaFormatError {
      formula: formula.to_string(),
      violation
    }
  }
}


/// Returned by a resolver that cannot supply a value for a variable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
  /// The name has no value at all.
  #[error("no value is defined for `{0}`")]
  Undefined(String),

  /// The name exists, but its value cannot be produced right now.
  #[error("the value of `{name}` cannot be computed: {reason}")]
  Unavailable { name: String, reason: String },
}


/// Returned by `Formula::evaluate`. The formula itself stays valid and may be evaluated again.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormulaEvaluationError {
  #[error("Variable `{name}` is undefined: {cause}")]
  UndefinedVariable {
    name: String,
    #[source]
    cause: LookupError,
  },

  #[error("Division by zero: {dividend} / 0")]
  DivisionByZero { dividend: f64 },

  /// The evaluator's stacks did not line up with the token sequence. Unreachable for formulas built by
  /// `Formula::new`.
  #[error("Operand and operator stacks are inconsistent with the formula")]
  InconsistentStacks,
}
