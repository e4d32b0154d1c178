#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod output;
mod protocol_runtime;

use cli::{
    cli_command_to_request, extract_global_flags, parse_cli_args, suggest_commands, CliAction,
    CliError, USAGE,
};
use config::{load_config, Config};
use output::{render_envelope, OutputFormat};
use protocol_runtime::{handle_line, run_protocol_loop, RuntimeContext};
use serde_json::json;
use splits::protocol_envelope::ProtocolEnvelope;
use splits::{code, SplitsError};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenv::dotenv();
    let args: Vec<String> = std::env::args().skip(1).collect();
    std::process::exit(run(&args).await);
}

async fn run(args: &[String]) -> i32 {
    let flags = match extract_global_flags(args) {
        Ok(flags) => flags,
        Err(err) => return report_cli_error(&err),
    };

    let config = match load_config(flags.config.clone()).await {
        Ok(config) => config,
        Err(err) => {
            init_tracing(&Config::default().log_filter);
            return report_error(&err);
        }
    };
    init_tracing(&config.log_filter);

    let output = match flags.output.as_deref().map(str::parse::<OutputFormat>) {
        None => config.output,
        Some(Ok(format)) => format,
        Some(Err(_)) => {
            return report_cli_error(&CliError::InvalidArgValue {
                arg: "output".to_string(),
                error: "expected json or text".to_string(),
            })
        }
    };

    let ctx = RuntimeContext {
        default_role: config.default_role,
    };

    match parse_cli_args(&flags.rest) {
        Ok(CliAction::ShowHelp) => {
            print!("{USAGE}");
            0
        }
        Ok(CliAction::ShowVersion) => {
            println!("splits {}", env!("CARGO_PKG_VERSION"));
            0
        }
        Ok(CliAction::RunProtocol) => match run_protocol_loop(ctx).await {
            Ok(()) => 0,
            Err(err) => {
                debug!(error = %err, "protocol loop finished with failures");
                err.exit_code()
            }
        },
        Ok(CliAction::Command(command)) => {
            let request = cli_command_to_request(command);
            let envelope = handle_line(&request, ctx);
            emit(output, &envelope);
            if envelope.ok {
                0
            } else {
                envelope_exit_code(&envelope)
            }
        }
        Err(err) => report_cli_error(&err),
    }
}

fn init_tracing(config_filter: &str) {
    let filter = EnvFilter::try_from_env("SPLITS_LOG")
        .or_else(|_| EnvFilter::try_new(config_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn emit(output: OutputFormat, envelope: &ProtocolEnvelope) {
    match render_envelope(output, envelope) {
        Ok(text) => println!("{text}"),
        Err(err) => error!(error = %err, "failed to render envelope"),
    }
}

fn envelope_exit_code(envelope: &ProtocolEnvelope) -> i32 {
    match envelope.error_code() {
        Some(code::NOTFOUND) => 5,
        Some(code::UNAUTHORIZED) => 6,
        Some(code::DEPENDENCY) => 7,
        Some(code::INTERNAL) => 9,
        Some(code::CLI_ERROR) => 1,
        _ => 3,
    }
}

fn report_error(err: &SplitsError) -> i32 {
    error!(error = %err, "splits failed");
    let envelope = ProtocolEnvelope::from_error(None, err);
    emit(OutputFormat::Json, &envelope);
    err.exit_code()
}

fn report_cli_error(err: &CliError) -> i32 {
    let mut envelope =
        ProtocolEnvelope::error(None, code::CLI_ERROR.to_string(), err.to_string())
            .with_fix("Run 'splits --help' for valid options".to_string());

    if let CliError::UnknownCommand { cmd } = err {
        let suggestions = suggest_commands(cmd);
        if !suggestions.is_empty() {
            envelope = envelope
                .with_fix(format!("Did you mean: {}?", suggestions.join(", ")))
                .with_ctx(json!({"suggestions": suggestions}));
        }
    }

    emit(OutputFormat::Json, &envelope);
    1
}
