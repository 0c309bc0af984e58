/*!

Ready-made resolvers for `Formula::evaluate`.

*/

use std::collections::HashMap;

use crate::error::LookupError;


/// A resolver backed by a table of values. Names missing from the table are `LookupError::Undefined`.
pub fn table<'t>(values: &'t HashMap<String, f64>) -> impl Fn(&str) -> Result<f64, LookupError> + 't {
  move |name: &str| {
    values.get(name)
          .copied()
          .ok_or_else(|| LookupError::Undefined(name.to_string()))
  }
}

/// A resolver that defines no variables, for formulas made only of numbers.
pub fn none(name: &str) -> Result<f64, LookupError> {
  Err(LookupError::Undefined(name.to_string()))
}
