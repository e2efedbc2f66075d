use ::clap::Parser;
use ::keyscribe::cli::{run, Args};
use ::std::{error::Error as _, io, process::ExitCode};
use ::tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

pub fn main() -> ExitCode {
    // Logs go to stderr so the report on stdout stays clean. Silent unless
    // RUST_LOG is set.
    ::tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::OFF.into())
                .from_env_lossy(),
        )
        .init();

    let args = Args::parse();
    match run(args, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ::tracing::error!(error = %err);
            eprintln!("Error: {err}");
            if let Some(source) = err.source() {
                eprintln!("Caused by:\n    {source}");
            }
            ExitCode::FAILURE
        }
    }
}
