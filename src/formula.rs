/*!

A `Formula` is an infix arithmetic expression over non-negative numbers, variables, parentheses, and the binary
operators `+`, `-`, `*`, and `/`, with the usual precedence. Unary `+` and `-` are not allowed. A variable is one or
more ASCII letters followed by one or more digits, such as `x5` or `cc4`. Whitespace between tokens is ignored.

A formula is validated once, when it is constructed, and is read-only afterward. Evaluation asks a caller-supplied
resolver for the value of each variable it meets, so the same formula can be evaluated against different sets of
values.

```
# use formulalib::{Formula, LookupError};
# fn main() -> Result<(), Box<dyn std::error::Error>> {
let formula = Formula::new("2.5e9 + x5 / 17")?;
let value   = formula.evaluate(|name| match name {
  "x5" => Ok(17.0),
  _    => Err(LookupError::Undefined(name.to_string())),
})?;
assert_eq!(value, 2.5e9 + 1.0);
# Ok(())
# }
```

Arithmetic is in `f64`. Overflow produces an infinity, which is returned rather than reported.

*/

use std::{
  fmt::{Display, Formatter},
  str::FromStr,
};

use crate::{
  error::{FormulaEvaluationError, FormulaFormatError, LookupError},
  evaluate::evaluate,
  logging::{log, Channel},
  parsing::{validate, Lexeme, Lexer},
  token::Token,
};


#[derive(Clone, PartialEq, Debug)]
pub struct Formula {
  source: String,
  tokens: Vec<Token>,
}

impl Formula {

  /// Tokenizes and validates `source`. Fails with the first syntax rule the formula breaks.
  pub fn new(source: &str) -> Result<Formula, FormulaFormatError> {
    let lexemes: Vec<Lexeme> = Lexer::new(source).collect();

    match validate(source, &lexemes) {

      Ok(tokens) => {
        log(Channel::Debug, 5, format!("Validated formula \"{}\" with {} tokens.", source, tokens.len()).as_str());
        Ok(Formula {
          source: source.to_string(),
          tokens
        })
      }

      Err(error) => {
        log(Channel::Notice, 3, format!("Rule {} rejected: {}", error.violation.rule(), error).as_str());
        Err(error)
      }

    }
  }

  /// Evaluates the formula, calling `resolver` for the value of each variable in the order the variables appear.
  /// A variable that occurs more than once is looked up each time.
  pub fn evaluate<F>(&self, resolver: F) -> Result<f64, FormulaEvaluationError>
    where F: Fn(&str) -> Result<f64, LookupError>
  {
    let result = evaluate(&self.tokens, resolver);
    log(Channel::Debug, 5, format!("Evaluated \"{}\": {:?}", self.source, result).as_str());
    result
  }

  /// The string the formula was constructed from.
  pub fn source(&self) -> &str {
    &self.source
  }

  pub fn tokens(&self) -> &[Token] {
    &self.tokens
  }

  /// The distinct variables of the formula in order of first appearance.
  pub fn variables(&self) -> Vec<&str> {
    let mut variables: Vec<&str> = Vec::new();
    for name in self.tokens.iter().filter_map(Token::variable_name) {
      if !variables.contains(&name) {
        variables.push(name);
      }
    }
    variables
  }

}

/// Writes the tokens with no whitespace between them. Every literal is finite, so the output parses back to the same
/// tokens.
impl Display for Formula {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    for token in &self.tokens {
      write!(f, "{}", token)?;
    }
    Ok(())
  }
}

impl FromStr for Formula {
  type Err = FormulaFormatError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Formula::new(s)
  }
}


#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::SyntaxViolation;

  fn assert_near(actual: Result<f64, FormulaEvaluationError>, expected: f64) {
    match actual {
      Ok(value) => assert!((value - expected).abs() < 1e-6, "expected {}, found {}", expected, value),
      Err(error) => panic!("expected {}, found error: {}", expected, error),
    }
  }

  fn formula(text: &str) -> Formula {
    match Formula::new(text) {
      Ok(formula) => formula,
      Err(error) => panic!("{}", error),
    }
  }

  /// A small fixed table of cell values.
  fn look(name: &str) -> Result<f64, LookupError> {
    match name {
      "x5"  => Ok(4.0),
      "cc4" => Ok(38.0),
      "z98" => Ok(12.0),
      "r6"  => Ok(20.5),
      _     => Err(LookupError::Undefined(name.to_string())),
    }
  }

  fn undefined(name: &str) -> Result<f64, LookupError> {
    Err(LookupError::Undefined(name.to_string()))
  }

  #[test]
  fn construct_rejects_malformed() {
    for text in [
      "x",
      "2++3",
      "2 3",
      "((cc4) + 7) * 8 ++",
      "*",
      "(9 * cc4) *x5 6",
      "(9 * 8) *x5 + 6 -",
      "-5.3",
      "2 5 + 3",
      "x5 y6",
      "*2",
      "2+",
      "5/0",
      "",
    ] {
      assert!(Formula::new(text).is_err(), "`{}` was accepted", text);
    }
  }

  #[test]
  fn format_error_identifies_source() {
    let error = Formula::new("x").unwrap_err();
    assert_eq!(error.formula, "x");
    assert!(error.to_string().contains("\"x\""));
    assert!(matches!(error.violation, SyntaxViolation::InvalidToken { .. }));
  }

  #[test]
  fn evaluate_constants() {
    assert_near(formula("2+3").evaluate(|_| Ok(0.0)), 5.0);
    assert_near(formula("2+3").evaluate(undefined), 5.0);
    assert_near(formula("2.5e9 + 1").evaluate(undefined), 2.5e9 + 1.0);
    assert_near(formula(" 7 ").evaluate(undefined), 7.0);
  }

  #[test]
  fn evaluate_variables() {
    assert_near(formula("x5").evaluate(|_| Ok(22.5)), 22.5);
    assert_near(formula("x5").evaluate(look), 4.0);
    assert_near(formula("(cc4 + 7) * 8").evaluate(look), 360.0);
    assert_near(formula("((cc4 * x5) / 5 + 3) * r6").evaluate(look), 684.7);
    assert_near(formula("cc4 * 5 / (x5 + 3 - 9) ").evaluate(look), -95.0);
    assert_near(formula("cc4 / 5").evaluate(look), 7.6);
    assert_near(formula("(x5 + 99 * (8 + z98) - 9) / 3").evaluate(look), 658.333333);
  }

  #[test]
  fn parenthesized_operand() {
    assert_near(formula("((cc4) + 7) * 8").evaluate(look), 360.0);
    assert_near(formula("((((2))))").evaluate(look), 2.0);
  }

  #[test]
  fn left_to_right_order() {
    assert_near(formula("10-(4-1)").evaluate(undefined), 7.0);
    assert_near(formula("8/(4/2)").evaluate(undefined), 4.0);
    assert_near(formula("10-4-1").evaluate(undefined), 5.0);
    assert_near(formula("16/4/2").evaluate(undefined), 2.0);
    assert_near(formula("2*(9-3)/4").evaluate(undefined), 3.0);
    assert_near(formula("(1+2)-(3+4)").evaluate(undefined), -4.0);
    assert_near(formula("100-(10-(5-2))").evaluate(undefined), 93.0);
  }

  #[test]
  fn undefined_variable() {
    let result = formula("x5 + y6").evaluate(undefined);
    assert_eq!(
      result,
      Err(FormulaEvaluationError::UndefinedVariable {
        name : "x5".to_string(),
        cause: LookupError::Undefined("x5".to_string()),
      })
    );

    let result = formula("(c4 + 7) * 8").evaluate(look);
    assert!(matches!(result, Err(FormulaEvaluationError::UndefinedVariable { name, .. }) if name == "c4"));
  }

  #[test]
  fn division_by_zero() {
    assert!(Formula::new("5/0").is_err());

    let at_zero = formula("5/0.0");
    assert_eq!(at_zero.evaluate(undefined), Err(FormulaEvaluationError::DivisionByZero { dividend: 5.0 }));

    let by_variable = formula("cc4 / (x5 - 4)");
    assert_eq!(by_variable.evaluate(look), Err(FormulaEvaluationError::DivisionByZero { dividend: 38.0 }));
  }

  #[test]
  fn reevaluate_after_failure() {
    let f = formula("a1 * 2");
    assert!(f.evaluate(undefined).is_err());
    assert_near(f.evaluate(|_| Ok(3.0)), 6.0);
  }

  #[test]
  fn overflow_is_not_an_error() {
    let result = formula("1e308 * 10").evaluate(undefined);
    assert_eq!(result, Ok(f64::INFINITY));
  }

  #[test]
  fn accessors() {
    let f = formula("( cc4 + 7 )*8 - cc4 / x5");
    assert_eq!(f.source(), "( cc4 + 7 )*8 - cc4 / x5");
    assert_eq!(f.tokens().len(), 11);
    assert_eq!(f.variables(), vec!["cc4", "x5"]);
    assert_eq!(f.to_string(), "(cc4+7)*8-cc4/x5");
    assert_eq!(formula("2.50 + 1e3").to_string(), "2.5+1000");
  }

  #[test]
  fn vertical_whitespace_is_accepted() {
    assert_near(formula("2\x0B+\x0C3").evaluate(undefined), 5.0);
    assert_near(formula("(cc4\r\n+ 7)\x0C* 8").evaluate(look), 360.0);
  }

  #[test]
  fn overflowing_literal_is_rejected() {
    let error = Formula::new("1e999 + 1").unwrap_err();
    assert!(matches!(error.violation, SyntaxViolation::InvalidToken { ref token, .. } if token == "1e999"));

    let large = formula("1.5e308 + 1");
    let reparsed: Formula = large.to_string().parse().unwrap();
    assert_eq!(reparsed.tokens(), large.tokens());
  }

  #[test]
  fn display_parses_back() {
    let f = formula("((cc4 * x5) / 5 + 3) * r6");
    let reparsed: Formula = f.to_string().parse().unwrap();
    assert_eq!(reparsed.tokens(), f.tokens());
  }

  #[test]
  fn formulas_cross_threads() {
    let f = formula("(cc4 + 7) * 8");
    let handles: Vec<_> = (0..4)
      .map(|i| {
        let f = f.clone();
        std::thread::spawn(move || f.evaluate(|_| Ok(i as f64)))
      })
      .collect();

    for (i, handle) in handles.into_iter().enumerate() {
      assert_near(handle.join().unwrap(), (i as f64 + 7.0) * 8.0);
    }
  }
}
