//! Host identification CLI
//!
//! Prints the host identity snapshot as pretty JSON to stdout.
//! Logs go to stderr; set `RUST_LOG` to adjust verbosity.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::from_default_env().add_directive("os_ident=info".parse()?);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .init();

    let info = os_ident::host_info();
    println!("{}", serde_json::to_string_pretty(info)?);

    Ok(())
}
