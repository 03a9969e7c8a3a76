use clap::Parser;
use ygorate::{run, Cli};

fn main() {
    // Reset SIGPIPE to default behavior to prevent panic on broken pipe
    // (e.g., when piping to `head` or `less` that exits early)
    #[cfg(unix)]
    reset_sigpipe();

    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
