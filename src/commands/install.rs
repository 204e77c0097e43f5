use crate::core::action::InstallConfig;
use crate::core::args::ParsedArgs;
use crate::core::config::Config;
use crate::core::extract;
use crate::core::platform::{Host, Os};
use crate::error::Result;
use crate::utils::fs;

pub fn install(args: &ParsedArgs, host: &Host, settings: &Config) -> Result<()> {
    let resolved = InstallConfig::resolve(args, host, settings)?;
    install_archive(&resolved, host)
}

/// Linux archives are tarballs with a top-level folder; other platforms ship
/// zips that unpack in place.
pub fn install_archive(resolved: &InstallConfig, host: &Host) -> Result<()> {
    let file = &resolved.file;
    let dir = &resolved.install_dir;

    fs::ensure_dir_exists(dir)?;

    if host.os == Os::Linux {
        fs::ensure_writable(dir)?;
        println!("Installing {} to {}", file.display(), dir.display());
        extract::extract_tar_gz(file, dir, 1)?;
    } else {
        println!("Installing {} to {}", file.display(), dir.display());
        extract::extract_zip(file, dir)?;
    }

    println!("✅ Installed {} to {}", file.display(), dir.display());
    Ok(())
}
