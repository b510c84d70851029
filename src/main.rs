use clap::Parser;
use std::io::Read;
use thiserror::Error;

use picol::{Interp, Status};

/// Errors from the CLI's own input handling, distinct from the
/// interpreter's `Status::Err` (which carries its own message in
/// `Interp::result`).
#[derive(Error, Debug)]
enum CliError {
    #[error("cannot read script file '{path}': {source}")]
    ScriptFile { path: String, #[source] source: std::io::Error },

    #[error("cannot read script from stdin: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("no script provided; use -c '<script>', provide a script file, or pipe via stdin")]
    NoScript,
}

#[derive(Parser)]
#[command(name = "picol")]
#[command(about = "A small Tcl-style command interpreter")]
#[command(version)]
struct Cli {
    /// Execute the script given on the command line
    #[arg(short = 'c')]
    script: Option<String>,

    /// Output the result as JSON ({"result", "status", "exitCode"})
    #[arg(long = "json")]
    json: bool,

    /// Script file to execute
    #[arg()]
    script_file: Option<String>,
}

fn read_script(cli: Cli) -> Result<String, CliError> {
    if let Some(s) = cli.script {
        return Ok(s);
    }
    if let Some(file) = cli.script_file {
        return std::fs::read_to_string(&file)
            .map_err(|source| CliError::ScriptFile { path: file, source });
    }
    use std::io::IsTerminal;
    if std::io::stdin().is_terminal() {
        return Err(CliError::NoScript);
    }
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf).map_err(CliError::Stdin)?;
    Ok(buf)
}

fn main() {
    let cli = Cli::parse();

    let script = match read_script(cli) {
        Ok(script) => script,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut interp = Interp::default();
    let status = picol::interp::eval(&mut interp, &script, "top level");
    let exit_code = if status == Status::Err { 1 } else { 0 };

    if cli.json {
        println!(
            "{}",
            serde_json::json!({
                "result": interp.result,
                "status": status.code(),
                "exitCode": exit_code,
            })
        );
    } else if status == Status::Err {
        eprintln!("{}", interp.result);
    } else if !interp.result.is_empty() {
        println!("{}", interp.result);
    }

    std::process::exit(exit_code);
}
