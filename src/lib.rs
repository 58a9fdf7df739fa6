pub mod classify;
pub mod config;
pub mod debug;
pub mod demo;
pub mod error;
pub mod loops;

pub use classify::*;
pub use config::*;
pub use demo::*;
pub use error::{DemoError, ErrorFormatter, ErrorKind};

use std::io;

/// Run the default demo against stdout.
pub fn run() -> error::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    CounterDemo::new().run(&mut out)
}
