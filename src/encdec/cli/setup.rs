use clap::{Args, Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

/// Flags that take a value. The legacy command line spelled them with a
/// single dash (`-key 5`), which clap would read as a cluster of short flags.
const VALUE_FLAGS: [&str; 6] = ["mode", "key", "data", "in", "out", "alg"];

const SUBCOMMANDS: [&str; 1] = ["config"];

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "encdec", bin_name = "encdec", version = get_version())]
#[command(
    about = "Encrypt and decrypt text with a shift or unicode cipher",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub cipher: CipherArgs,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Args, Debug)]
pub struct CipherArgs {
    /// Direction: enc or dec (unknown values keep enc)
    #[arg(long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Integer key, may be negative
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub key: i64,

    /// Literal text to transform (takes precedence over --in)
    #[arg(long, allow_hyphen_values = true)]
    pub data: Option<String>,

    /// Read the text from a file
    #[arg(long = "in", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Write the result to a file instead of the console
    #[arg(long = "out", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Algorithm: shift or unicode (unknown values fall back to shift)
    #[arg(long = "alg", value_name = "ALGORITHM")]
    pub algorithm: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Get or set configuration
    Config {
        /// Configuration key (default-alg, strict-alg, line-sep)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,
    },
}

/// Rewrites the single-dash spelling of the value flags (`-key`) to the long
/// form clap understands (`--key`).
///
/// Only arguments in flag position are rewritten: the value following a value
/// flag is passed through untouched, as is everything after a subcommand.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut normalized: Vec<OsString> = args.next().into_iter().collect();
    let mut expecting_value = false;
    let mut passthrough = false;

    for arg in args {
        if passthrough || expecting_value {
            expecting_value = false;
            normalized.push(arg);
            continue;
        }

        let Some(s) = arg.to_str() else {
            normalized.push(arg);
            continue;
        };

        if let Some(name) = s.strip_prefix("--") {
            expecting_value = VALUE_FLAGS.contains(&name);
            passthrough = name.is_empty();
            normalized.push(arg);
        } else if let Some(name) = s.strip_prefix('-').filter(|n| VALUE_FLAGS.contains(n)) {
            expecting_value = true;
            normalized.push(OsString::from(format!("--{}", name)));
        } else {
            passthrough = SUBCOMMANDS.contains(&s);
            normalized.push(arg);
        }
    }

    normalized
}
