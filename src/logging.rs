/*!

Global control over diagnostic messages.

A message is emitted on a `Channel` at a numeric level. It is written only if the global verbosity is at least that
level, so the default verbosity of 0 keeps the library silent. By convention:

  1  errors
  2  warnings
  3  notices (rejected formulas, failed lookups)
  5  debug traces of construction and evaluation

*/

use strum_macros::{Display, IntoStaticStr};
use yansi::Paint;

pub use verbosity::{get_verbosity, set_verbosity};


#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Display, IntoStaticStr)]
pub enum Channel {
  Error,
  Warning,
  Notice,
  Debug,
}

impl Channel {
  fn painted(&self) -> Paint<&'static str> {
    let name: &'static str = self.into();
    match self {
      Channel::Error   => Paint::red(name).bold(),
      Channel::Warning => Paint::yellow(name).bold(),
      Channel::Notice  => Paint::cyan(name),
      Channel::Debug   => Paint::magenta(name),
    }
  }
}

/// Emits `msg` on `channel` if the verbosity is at least `level`.
pub fn log(channel: Channel, level: i32, msg: &str) {
  if verbosity::verbosity_is_at_least(level) {
    verbosity::verbose_emit(format!("{}: {}", channel.painted(), msg).as_str());
  }
}


pub(crate) mod verbosity {
  use std::{
    io::{Stdout, stdout, Write},
    sync::{
      Mutex,
      atomic::{AtomicI32, Ordering}
    }
  };
  use lazy_static::lazy_static;

  static VERBOSITY: AtomicI32 = AtomicI32::new(0);
  lazy_static! {
    static ref VERBOSE_STREAM: Mutex<Stdout> = Mutex::new(stdout());
  }

  pub(crate) fn verbosity_is_at_least(lvl: i32) -> bool {
    VERBOSITY.load(Ordering::Relaxed) >= lvl
  }

  pub fn set_verbosity(new_value: i32) {
    VERBOSITY.store(new_value, Ordering::Relaxed);
  }

  pub fn get_verbosity() -> i32 {
    VERBOSITY.load(Ordering::Relaxed)
  }

  pub(crate) fn verbose_emit(msg: &str) {
    // A writer that panicked mid-message leaves the stream usable.
    let mut stream = match VERBOSE_STREAM.lock() {
      Ok(stream)    => stream,
      Err(poisoned) => poisoned.into_inner(),
    };
    let _ = stream.write_all(msg.as_bytes());
    let _ = stream.write_all("\n".as_bytes());
  }
}
