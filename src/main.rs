use anyhow::Result;

use vscode_installer::{commands, core::platform::Host};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let result = Host::current().and_then(|host| commands::run(std::env::args().skip(1), &host));

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}
