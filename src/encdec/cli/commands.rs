use super::print::{print_config_entries, print_messages};
use super::setup::{normalize_args, CipherArgs, Cli, Commands};
use clap::Parser;
use encdec::api::{CipherApi, CipherJob, ConfigAction};
use encdec::config::{self, EncdecConfig};
use encdec::error::Result;
use encdec::io::{InputSource, OutputTarget};
use encdec::model::Direction;
use log::{info, LevelFilter};

pub fn run() -> Result<()> {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    init_logging(cli.verbose);

    let mut api = init_api()?;

    match cli.command {
        Some(Commands::Config { key, value }) => handle_config(&mut api, key, value),
        None => handle_cipher(&api, cli.cipher),
    }
}

/// Logs go to stderr so stdout carries only the cipher output. `RUST_LOG`
/// takes precedence over the verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn init_api() -> Result<CipherApi> {
    let config_dir = config::config_dir()?;
    let config = EncdecConfig::load(&config_dir)?;
    Ok(CipherApi::new(config, config_dir))
}

fn handle_cipher(api: &CipherApi, args: CipherArgs) -> Result<()> {
    let algorithm = api.resolve_algorithm(args.algorithm.as_deref())?;
    let job = CipherJob {
        input: InputSource::resolve(args.data, args.input),
        output: OutputTarget::from_path(args.output),
        key: args.key,
        direction: args
            .mode
            .as_deref()
            .map_or(Direction::Encrypt, Direction::from_token),
        algorithm,
    };

    let result = api.run(&job)?;
    if let Some(output) = &result.output {
        println!("{}", output);
    }
    if let Some(path) = &result.written_to {
        info!("Wrote result to {}", path.display());
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(api: &mut CipherApi, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = api.config(action)?;
    print_config_entries(&result.config_entries);
    print_messages(&result.messages);
    Ok(())
}
