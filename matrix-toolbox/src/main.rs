use std::io;

mod command;
mod error;
mod render;
mod session;

use session::Session;

fn main() -> error::Result<()> {
    // Initialize logging based on RUST_LOG environment variable
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), fastrand::Rng::new());
    session.run()?;

    if let Some(matrix) = session.current() {
        log::debug!(
            "Session finished with a {}x{} matrix",
            matrix.rows(),
            matrix.cols()
        );
    }
    Ok(())
}
