/*!

Lexing and validation of formula source text. The lexer splits text into lexemes without judging them; validation
turns the lexemes into tokens and enforces the syntax rules.

 */
mod lexer;
mod validation;

pub use lexer::{Lexeme, LexemeKind, Lexer};
pub(crate) use validation::validate;
