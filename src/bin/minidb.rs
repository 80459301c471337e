use std::io::{BufRead, Write, stdin, stdout};

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use minidb::{Config, Database, JsonSnapshot, SnapshotStore};

fn main() -> Result<()> {
    let config = Config::parse();

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(false)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .build(),
        )
    }))
    .into_diagnostic()?;
    miette::set_panic_hook();

    init_tracing(&config.log_level);

    let snapshot = JsonSnapshot::new(&config.snapshot);
    let mut db = if config.fresh {
        Database::new()
    } else {
        snapshot.restore()?
    };

    println!("MiniDB v{} - type SQL-like commands below:", env!("CARGO_PKG_VERSION"));

    let mut buf = String::new();

    let mut stdin = stdin().lock();
    let mut stdout = stdout().lock();

    loop {
        stdout.write_all(b">> ").into_diagnostic()?;
        stdout.flush().into_diagnostic()?;

        buf.clear();
        if stdin.read_line(&mut buf).into_diagnostic()? == 0 {
            // EOF
            stdout.write_all(b"\n").into_diagnostic()?;
            break;
        }

        let input = buf.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") {
            break;
        }

        match db.execute(input) {
            Ok(outcome) => writeln!(stdout, "{outcome}").into_diagnostic()?,
            Err(err) => {
                let report = miette::Report::new(err).with_source_code(input.to_string());
                writeln!(stdout, "{report:?}").into_diagnostic()?;
            }
        }
    }

    if config.no_persist {
        warn!(path = %snapshot.path().display(), "snapshot not written (--no-persist)");
    } else {
        snapshot.persist(&db)?;
    }

    println!("Exiting MiniDB");

    Ok(())
}

fn init_tracing(default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
