/*!

Tokenizes, validates, and evaluates infix arithmetic formulas such as `(cc4 + 7) * 8`. Variables are resolved by a
function the caller passes to each evaluation, so the library stores no values of its own.

*/

mod error;
mod evaluate;
mod formula;
mod operator;
mod parsing;
mod token;
pub mod logging;
pub mod lookup;

pub use error::{FormulaEvaluationError, FormulaFormatError, LookupError, SyntaxViolation};
pub use formula::Formula;
pub use operator::Operator;
pub use parsing::{Lexeme, LexemeKind, Lexer};
pub use token::Token;
