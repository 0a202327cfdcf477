use minilisp::{Config, Mode, Output, Repl, Step, USAGE};
use std::io::{self, IsTerminal};

// logging stays off unless RUST_LOG is set, eg: RUST_LOG=minilisp=trace
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn interactive(repl: &Repl, config: &Config) -> Result<(), String> {
    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    if let Some(ref path) = config.history {
        if rl.load_history(path).is_err() {
            tracing::debug!(path = %path.display(), "no history yet");
        }
    }
    loop {
        match rl.readline(&config.prompt) {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => {
                if let Err(e) = rl.add_history_entry(line.as_str()) {
                    tracing::debug!(error = %e, "history entry not added");
                }
                match repl.handle(&line) {
                    Step::Print(text) => println!("{}", text),
                    Step::Quiet => (),
                    Step::Quit => {
                        println!("{}", minilisp::FAREWELL);
                        break;
                    }
                }
            }
        }
    }
    if let Some(ref path) = config.history {
        if let Err(e) = rl.save_history(path) {
            tracing::warn!(path = %path.display(), error = %e, "failed to save history");
        }
    }
    Ok(())
}

fn main() -> Result<(), String> {
    init_tracing();
    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("minilisp: {}\n{}", e, USAGE);
            std::process::exit(2);
        }
    };
    // the line driven modes collect print output, the others print directly
    let repl = match config.mode {
        Mode::Interactive => Repl::new(),
        _ => Repl::with_output(Output::Stdout),
    };
    match config.mode {
        Mode::Expr(ref expr) => match repl.eval_line(expr) {
            Ok(Some(value)) => println!("{}", value),
            Ok(None) => (),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        },
        Mode::Script(ref path) => {
            let source = std::fs::read_to_string(path)
                .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
            if let Err(e) = repl.run_script(&source) {
                eprintln!("{}: error: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        Mode::Interactive if io::stdin().is_terminal() => interactive(&repl, &config)?,
        Mode::Interactive => repl.run(io::stdin().lock(), &mut io::stdout(), &config.prompt)
            .map_err(|e| format!("read error: {}", e))?,
    }
    Ok(())
}
