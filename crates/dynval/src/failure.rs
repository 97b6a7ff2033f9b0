//! Fail-fast policy for callers that do not want to inspect every result

use std::io::Write;

use crate::error::{render_error, OpsResult};

/// What to do when an unwrapped operation failed.
///
/// Receives the rendered diagnostic, e.g. `{error: "invalid integer"}`,
/// and never returns.
pub trait FailureHandler {
    /// Handle the failure described by `report`.
    fn fail(&self, report: &str) -> !;
}

/// Built-in failure handlers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Print the report and a newline to stdout, flush, abort the process
    #[default]
    Abort,
    /// Print the report to stderr and exit with status 1
    Exit,
    /// Panic with the report as message
    Panic,
}

impl FailureHandler for FailurePolicy {
    fn fail(&self, report: &str) -> ! {
        match self {
            FailurePolicy::Abort => {
                let mut stdout = std::io::stdout().lock();
                // The process is going down either way
                let _ = writeln!(stdout, "{}", report);
                let _ = stdout.flush();
                std::process::abort()
            }
            FailurePolicy::Exit => {
                eprintln!("{}", report);
                std::process::exit(1)
            }
            FailurePolicy::Panic => panic!("{}", report),
        }
    }
}

/// Return the payload of `result`, or hand its diagnostic to `handler`.
pub fn unwrap<T>(result: OpsResult<T>, handler: &dyn FailureHandler) -> T {
    match result {
        Ok(value) => value,
        Err(err) => handler.fail(&render_error(err)),
    }
}
