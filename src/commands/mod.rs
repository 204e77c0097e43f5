pub mod download;
pub mod help;
pub mod install;
pub mod link;

use log::debug;

use crate::core::action::Action;
use crate::core::args::ParsedArgs;
use crate::core::config::Config;
use crate::core::platform::Host;
use crate::error::Result;

/// Parse `tokens`, resolve the action and run it to completion.
pub fn run<I, S>(tokens: I, host: &Host) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args = ParsedArgs::parse(tokens);
    let action = Action::resolve(&args)?;
    debug!("resolved action {action:?} for {:?} on {}", host.os, host.arch);

    // Settings are read lazily so help never touches the filesystem.
    match action {
        Action::Help => help::show_help(&args, host),
        Action::Download => download::download(&args, host, &Config::load()?),
        Action::Install => install::install(&args, host, &Config::load()?),
        Action::Link => link::link(&args, host, &Config::load()?),
    }
}
