use crate::core::action::LinkConfig;
use crate::core::args::ParsedArgs;
use crate::core::config::Config;
use crate::core::link::create_link;
use crate::core::platform::Host;
use crate::error::{InstallerError, Result};
use crate::utils::fs;

pub fn link(args: &ParsedArgs, host: &Host, settings: &Config) -> Result<()> {
    let resolved = LinkConfig::resolve(args, host, settings)?;
    link_binary(&resolved, host)
}

/// Symlink the launcher from `<install>/bin` into the symlink directory.
/// Neither directory is created here.
pub fn link_binary(resolved: &LinkConfig, host: &Host) -> Result<()> {
    let bin_dir = resolved.bin_dir();
    if !bin_dir.is_dir() {
        return Err(InstallerError::NotFound {
            kind: "Directory",
            path: bin_dir,
        });
    }

    let symlink_dir = &resolved.symlink_dir;
    if !symlink_dir.is_dir() {
        return Err(InstallerError::NotFound {
            kind: "Directory",
            path: symlink_dir.clone(),
        });
    }

    println!("Linking {} to {}", bin_dir.display(), symlink_dir.display());

    if LinkConfig::is_noop(host) {
        println!("Link not needed on Windows");
        return Ok(());
    }

    fs::ensure_writable(&bin_dir)?;

    let binary = resolved.build.binary_name();
    if !fs::dir_contains(&bin_dir, binary)? {
        return Err(InstallerError::BinaryNotFound {
            name: binary.to_string(),
        });
    }

    let target = bin_dir.join(binary);
    let link = symlink_dir.join(binary);
    create_link(&target, &link)?;

    println!("✅ Linked {} to {}", link.display(), target.display());
    Ok(())
}
