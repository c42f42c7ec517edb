// Shared plumbing for the curio binaries: logging setup, flag parsing, and
// the JSON failure contract (error object on stderr, exit code 1).

use serde_json::json;
use tracing_subscriber::EnvFilter;

/// Initialize tracing to stderr. Stdout is reserved for the single JSON
/// result object each binary prints.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Render a failure as JSON on stderr and exit non-zero.
pub fn exit_with_error(message: &str) -> ! {
    eprintln!("{}", json!({ "success": false, "error": message }));
    std::process::exit(1);
}

/// Parse CLI flags. A parse failure follows the JSON failure contract
/// instead of clap's usage exit; --help and --version keep their normal
/// behavior.
pub fn parse_args<T: clap::Parser>() -> T {
    match T::try_parse() {
        Ok(args) => args,
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                let _ = err.print();
                std::process::exit(0);
            }
            _ => exit_with_error(&err.to_string()),
        },
    }
}
