//! Command line configuration

use clap::{Parser, ValueEnum};
use dynval::{DriverContext, FailurePolicy, ValueType};

/// Key type selectable from the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum KeyType {
    /// Keys are stored as given and rendered quoted
    String,
    /// Keys are parsed as 32-bit integers (0x and 0 prefixes honored)
    Int32,
}

/// Failure handling selectable from the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OnFailure {
    /// Print the diagnostic to stdout and abort
    Abort,
    /// Print the diagnostic to stderr and exit with status 1
    Exit,
    /// Panic with the diagnostic
    Panic,
}

#[derive(Parser, Debug)]
#[command(
    name = "dynval",
    version,
    about = "Build an object from KEY VALUE pairs and print it",
    after_help = "Keys that look like options (e.g. --version) must follow `--`: dynval -- --version v"
)]
pub struct Cli {
    /// How keys are typed before being assigned from their argument
    #[arg(long, value_enum, default_value_t = KeyType::String)]
    pub key_type: KeyType,

    /// What happens when an operation fails
    #[arg(long, value_enum, default_value_t = OnFailure::Abort)]
    pub on_failure: OnFailure,

    /// Log level for diagnostics written to stderr
    #[arg(long, default_value = "warn")]
    pub log_level: tracing::Level,

    /// Alternating keys and values; a trailing unpaired key is ignored.
    /// Everything after `--` is taken as a pair element, even `--version`
    #[arg(
        value_name = "KEY VALUE",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

impl Cli {
    /// Driver configuration for this invocation
    pub fn driver_context(&self) -> DriverContext {
        let key_type = match self.key_type {
            KeyType::String => ValueType::String,
            KeyType::Int32 => ValueType::Int32,
        };
        let failure = match self.on_failure {
            OnFailure::Abort => FailurePolicy::Abort,
            OnFailure::Exit => FailurePolicy::Exit,
            OnFailure::Panic => FailurePolicy::Panic,
        };
        DriverContext { key_type, failure }
    }
}
