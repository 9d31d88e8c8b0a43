//! Binary entrypoint that serves the chat clone.

use std::process::ExitCode;

use chat_clone::start_chat_clone;

/// Start the server with configuration from the environment.
fn main() -> ExitCode {
    start_chat_clone::run()
}
