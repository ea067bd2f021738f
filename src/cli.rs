use {
    crate::common::{debug_eprintln, DEBUG},
    clap::Parser,
    std::sync::atomic::Ordering,
};

/// Print the Fibonacci number at a position read from stdin
#[derive(Debug, Parser)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long)]
    debug: bool,
}

pub(crate) fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    DEBUG.store(cli.debug, Ordering::Relaxed);
    let (mut stdin, mut stdout) = (std::io::stdin().lock(), std::io::stdout().lock());
    let outcome = if cli.debug {
        session::run_counted(&mut stdin, &mut stdout)?
    } else {
        session::run(&mut stdin, &mut stdout)?
    };
    debug_eprintln!();
    debug_eprintln!("{outcome:#?}");
    if let Some(calls) = outcome.calls {
        debug_eprintln!("recursive calls: {calls}");
    }
    Ok(())
}
