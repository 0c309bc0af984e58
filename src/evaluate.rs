/*!

Evaluation of a validated token sequence with an operand stack and an operator stack.

Multiplication and division are folded as soon as their right operand is known. Addition and subtraction are folded
when the next `+`/`-` arrives, at the closing parenthesis of their group, or at the end of the formula. Every fold
takes its left operand from deeper in the stack than its right operand, so operands combine in the order they appear
in the text: `10-(4-1)` is `7` and `8/(4/2)` is `4`.

*/

use smallvec::SmallVec;

use crate::{
  error::{FormulaEvaluationError, LookupError},
  logging::{log, Channel},
  operator::Operator,
  token::Token,
};


/// An entry on the operator stack.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Pending {
  Open,
  Apply(Operator),
}

type OperandStack  = SmallVec<[f64; 8]>;
type OperatorStack = SmallVec<[Pending; 8]>;


/// Evaluates `tokens`, which must satisfy the syntax rules enforced by `Formula::new`, using `resolver` to look up
/// the value of each variable.
pub(crate) fn evaluate<F>(tokens: &[Token], resolver: F) -> Result<f64, FormulaEvaluationError>
  where F: Fn(&str) -> Result<f64, LookupError>
{
  let mut operands : OperandStack  = SmallVec::new();
  let mut operators: OperatorStack = SmallVec::new();

  for token in tokens {
    match token {
      Token::Number(value) => push_operand(*value, &mut operands, &mut operators)?,

      Token::Variable(name) => {
        let value = resolver(name.as_str()).map_err(
          |cause| {
            log(Channel::Notice, 3, format!("Lookup of `{}` failed: {}", name, cause).as_str());
            FormulaEvaluationError::UndefinedVariable {
              name: name.clone(),
              cause
            }
          }
        )?;
        log(Channel::Debug, 5, format!("Resolved {} = {}", name, value).as_str());
        push_operand(value, &mut operands, &mut operators)?;
      }

      Token::Operator(operator) if operator.is_additive() => {
        if top_is(&operators, Operator::is_additive) {
          fold(&mut operands, &mut operators)?;
        }
        operators.push(Pending::Apply(*operator));
      }

      Token::Operator(operator) => operators.push(Pending::Apply(*operator)),

      Token::LeftParen => operators.push(Pending::Open),

      Token::RightParen => {
        if top_is(&operators, Operator::is_additive) {
          fold(&mut operands, &mut operators)?;
        }
        match operators.pop() {
          Some(Pending::Open) => {}
          _ => return Err(FormulaEvaluationError::InconsistentStacks),
        }
        if top_is(&operators, Operator::is_multiplicative) {
          fold(&mut operands, &mut operators)?;
        }
      }
    } // end match on token
  }

  // At most one `+` or `-` is still waiting for its right operand.
  if !operators.is_empty() {
    fold(&mut operands, &mut operators)?;
  }

  match (operands.pop(), operands.is_empty() && operators.is_empty()) {
    (Some(result), true) => Ok(result),
    _ => Err(FormulaEvaluationError::InconsistentStacks),
  }
}

fn top_is(operators: &OperatorStack, class: fn(&Operator) -> bool) -> bool {
  match operators.last() {
    Some(Pending::Apply(operator)) => class(operator),
    _ => false
  }
}

/// Pushes an operand and folds it into a pending `*` or `/`.
fn push_operand(value: f64, operands: &mut OperandStack, operators: &mut OperatorStack)
  -> Result<(), FormulaEvaluationError>
{
  operands.push(value);
  if top_is(operators, Operator::is_multiplicative) {
    fold(operands, operators)
  } else {
    Ok(())
  }
}

/// Pops an operator and two operands, and pushes the result of applying the operator to them.
fn fold(operands: &mut OperandStack, operators: &mut OperatorStack) -> Result<(), FormulaEvaluationError> {
  let operator = match operators.pop() {
    Some(Pending::Apply(operator)) => operator,
    _ => return Err(FormulaEvaluationError::InconsistentStacks),
  };
  let (left, right) = match (operands.pop(), operands.pop()) {
    (Some(right), Some(left)) => (left, right),
    _ => return Err(FormulaEvaluationError::InconsistentStacks),
  };

  let result = operator.apply(left, right)?;
  log(Channel::Debug, 5, format!("{} {} {} = {}", left, operator, right, result).as_str());
  operands.push(result);
  Ok(())
}
