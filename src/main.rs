use cidr_optimizer::logging::init_logging;
use cidr_optimizer::output::{colorize_stderr, write_diagnostic};
use cidr_optimizer::run;
use std::error::Error;
use std::io::{self, IsTerminal};

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let stderr = io::stderr();
    colored::control::set_override(colorize_stderr(
        stderr.is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
    ));

    // Logging is optional; a broken config must not change the result.
    if let Err(e) = init_logging() {
        write_diagnostic(&mut stderr.lock(), &format!("logging disabled: {e}"))?;
    }
    log::debug!("#Start main()");

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(stdin.lock(), &mut stdout.lock(), &mut stderr.lock())?;

    Ok(())
}
