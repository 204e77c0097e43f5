//! Declarative description of every option the CLI accepts.
//!
//! The same table drives value lookup in the action resolver and the help
//! output, so aliases, defaults and descriptions are declared once.

use clap::ValueEnum;

use crate::core::build::Build;
use crate::core::platform::Host;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Switch,
}

/// Help text that is either fixed or computed from the host at render time.
#[derive(Clone, Copy)]
pub enum HelpText {
    Static(&'static str),
    Computed(fn(&Host) -> String),
}

impl HelpText {
    pub fn render(&self, host: &Host) -> String {
        match self {
            HelpText::Static(text) => text.to_string(),
            HelpText::Computed(compute) => compute(host),
        }
    }
}

#[derive(Clone, Copy)]
pub struct OptionSpec {
    pub long: &'static str,
    pub short: Option<&'static str>,
    pub kind: ValueKind,
    pub required: bool,
    pub default: Option<HelpText>,
    pub description: HelpText,
}

impl OptionSpec {
    const fn text(long: &'static str, short: &'static str, description: &'static str) -> Self {
        OptionSpec {
            long,
            short: Some(short),
            kind: ValueKind::Text,
            required: false,
            default: None,
            description: HelpText::Static(description),
        }
    }

    const fn switch(long: &'static str, short: Option<&'static str>, description: &'static str) -> Self {
        OptionSpec {
            long,
            short,
            kind: ValueKind::Switch,
            required: false,
            default: None,
            description: HelpText::Static(description),
        }
    }

    const fn with_default(mut self, default: HelpText) -> Self {
        self.default = Some(default);
        self
    }

    const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Human label used in diagnostics, e.g. `download directory`.
    pub fn name(&self) -> String {
        self.long.replace('-', " ")
    }

    /// All accepted spellings, e.g. `--build, -b`.
    pub fn aliases(&self) -> String {
        match self.short {
            Some(short) => format!("--{}, -{}", self.long, short),
            None => format!("--{}", self.long),
        }
    }
}

/// Help sections, in the order `all` prints them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    Sections,
    Main,
    Download,
    Install,
    Link,
    All,
}

impl Section {
    pub const ORDERED: [Section; 5] = [
        Section::Sections,
        Section::Main,
        Section::Download,
        Section::Install,
        Section::Link,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Section::Sections => "sections",
            Section::Main => "main",
            Section::Download => "download",
            Section::Install => "install",
            Section::Link => "link",
            Section::All => "all",
        }
    }

    pub fn options(&self) -> &'static [OptionSpec] {
        match self {
            Section::Sections => options::SECTIONS_GROUP,
            Section::Main => options::MAIN_GROUP,
            Section::Download => options::DOWNLOAD_GROUP,
            Section::Install => options::INSTALL_GROUP,
            Section::Link => options::LINK_GROUP,
            Section::All => &[],
        }
    }
}

pub mod options {
    use super::*;

    pub const DOWNLOAD: OptionSpec = OptionSpec::switch("download", None, "Run the download action");
    pub const INSTALL: OptionSpec = OptionSpec::switch("install", None, "Run the install action");
    pub const LINK: OptionSpec = OptionSpec::switch("link", None, "Run the link action");

    pub const HELP: OptionSpec = OptionSpec::switch("help", Some("h"), "Show this help message");

    pub const SECTION: OptionSpec = OptionSpec {
        description: HelpText::Computed(section_description),
        ..OptionSpec::text("section", "s", "")
    }
    .with_default(HelpText::Static("all"));

    pub const ACTION: OptionSpec = OptionSpec::text(
        "action",
        "a",
        "The action to perform. Can be one of download, install, link, or help",
    )
    .with_default(HelpText::Static("download"));

    pub const DOWNLOAD_BUILD: OptionSpec = OptionSpec::text(
        "build",
        "b",
        "The build to download. Can either be stable or insiders",
    )
    .with_default(HelpText::Static("stable"));

    pub const FILENAME: OptionSpec =
        OptionSpec::text("filename", "f", "The filename to download to")
            .with_default(HelpText::Computed(default_filename_description));

    pub const DOWNLOAD_DIRECTORY: OptionSpec = OptionSpec::text(
        "download-directory",
        "d",
        "The directory the file will be downloaded to",
    )
    .with_default(HelpText::Computed(download_dir_description));

    pub const FILE: OptionSpec = OptionSpec::text("file", "f", "The file to install from").required();

    pub const INSIDERS: OptionSpec = OptionSpec::switch(
        "insiders",
        Some("i"),
        "Install as insiders build (this option overrides --build or -b)",
    );

    pub const STABLE: OptionSpec = OptionSpec::switch(
        "stable",
        Some("s"),
        "Install as stable build (this option overrides --build or -b)",
    );

    pub const INSTALL_BUILD: OptionSpec = OptionSpec::text(
        "build",
        "b",
        "The build to install. Can either be stable or insiders",
    )
    .with_default(HelpText::Static("stable"));

    pub const INSTALL_DIRECTORY: OptionSpec =
        OptionSpec::text("install-directory", "d", "The directory to install to")
            .with_default(HelpText::Computed(install_dir_description));

    pub const LINK_BUILD: OptionSpec = OptionSpec::text(
        "build",
        "b",
        "The build to link. Can either be stable or insiders",
    )
    .with_default(HelpText::Static("stable"));

    pub const LINK_INSTALL_DIRECTORY: OptionSpec =
        OptionSpec::text("install-directory", "d", "The directory to link from")
            .with_default(HelpText::Computed(install_dir_description));

    pub const SYMLINK_DIRECTORY: OptionSpec =
        OptionSpec::text("symlink-directory", "s", "The directory to link to")
            .with_default(HelpText::Computed(symlink_dir_description));

    pub const SECTIONS_GROUP: &[OptionSpec] = &[HELP, SECTION];
    pub const MAIN_GROUP: &[OptionSpec] = &[ACTION];
    pub const DOWNLOAD_GROUP: &[OptionSpec] = &[DOWNLOAD_BUILD, FILENAME, DOWNLOAD_DIRECTORY];
    pub const INSTALL_GROUP: &[OptionSpec] =
        &[FILE, INSIDERS, STABLE, INSTALL_BUILD, INSTALL_DIRECTORY];
    pub const LINK_GROUP: &[OptionSpec] = &[LINK_BUILD, LINK_INSTALL_DIRECTORY, SYMLINK_DIRECTORY];
}

fn section_description(_host: &Host) -> String {
    let names: Vec<&str> = Section::value_variants().iter().map(Section::name).collect();
    format!("Show a specific section. Can be one of: {}", names.join(", "))
}

fn default_filename_description(host: &Host) -> String {
    let platform = host
        .platform_id()
        .unwrap_or_else(|_| "{platform}".to_string());
    format!(
        "vscode-{{build}}-{platform}-{{timestamp}}.{}",
        host.archive_extension()
    )
}

fn download_dir_description(host: &Host) -> String {
    host.default_download_dir().display().to_string()
}

fn install_dir_description(host: &Host) -> String {
    let describe = |build| {
        host.default_install_dir(build)
            .map(|dir| dir.display().to_string())
            .unwrap_or_else(|_| "(home directory not found)".to_string())
    };
    format!("{} or {}", describe(Build::Stable), describe(Build::Insiders))
}

fn symlink_dir_description(host: &Host) -> String {
    host.default_symlink_dir()
        .map(|dir| dir.display().to_string())
        .unwrap_or_else(|_| "(home directory not found)".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::platform::tests::host;
    use crate::core::platform::Os;

    #[test]
    fn test_aliases() {
        assert_eq!(options::DOWNLOAD_DIRECTORY.aliases(), "--download-directory, -d");
        assert_eq!(options::DOWNLOAD.aliases(), "--download");
        assert_eq!(options::DOWNLOAD_DIRECTORY.name(), "download directory");
    }

    #[test]
    fn test_computed_defaults_follow_host() {
        let linux = host(Os::Linux, "x86_64");
        let default = options::FILENAME.default.unwrap().render(&linux);
        assert_eq!(default, "vscode-{build}-linux-x64-{timestamp}.tar.gz");

        let install = options::INSTALL_DIRECTORY.default.unwrap().render(&linux);
        assert_eq!(install, "/usr/share/code or /usr/share/code-insiders");

        let mac = host(Os::MacOs, "aarch64");
        let symlink = options::SYMLINK_DIRECTORY.default.unwrap().render(&mac);
        assert_eq!(symlink, "/home/dev/bin");
    }

    #[test]
    fn test_section_description_lists_every_section() {
        let text = options::SECTION.description.render(&host(Os::Linux, "x86_64"));
        assert_eq!(
            text,
            "Show a specific section. Can be one of: sections, main, download, install, link, all"
        );
    }

    #[test]
    fn test_only_file_is_required() {
        let required: Vec<&str> = Section::ORDERED
            .iter()
            .flat_map(|s| s.options())
            .filter(|o| o.required)
            .map(|o| o.long)
            .collect();
        assert_eq!(required, vec!["file"]);
    }
}
