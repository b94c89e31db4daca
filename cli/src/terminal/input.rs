use std::io::{self, BufRead};

use tracing::debug;

/// Keeps the console window open until the operator presses Enter.
///
/// A closed stdin is not an error; the tool simply exits.
pub fn wait_for_enter() {
    let mut line: String = String::new();
    if let Err(err) = io::stdin().lock().read_line(&mut line) {
        debug!("stdin closed before Enter: {err}");
    }
}
