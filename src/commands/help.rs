use std::io::Write;

use crate::core::action::resolve_section;
use crate::core::args::ParsedArgs;
use crate::core::platform::Host;
use crate::core::schema::Section;
use crate::error::Result;

pub fn show_help(args: &ParsedArgs, host: &Host) -> Result<()> {
    let section = resolve_section(args)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(section, host, &mut out)?;
    Ok(())
}

pub fn render<W: Write>(section: Section, host: &Host, out: &mut W) -> std::io::Result<()> {
    if section == Section::All {
        writeln!(out, "All sections:")?;
        writeln!(out)?;
        for section in Section::ORDERED {
            render_section(section, host, out)?;
        }
        return Ok(());
    }

    render_section(section, host, out)
}

fn render_section<W: Write>(section: Section, host: &Host, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{}", section.name())?;

    for option in section.options() {
        let required = if option.required { " (required)" } else { "" };
        let default = option
            .default
            .map(|default| format!(" (default: {})", default.render(host)))
            .unwrap_or_default();
        writeln!(out, "  {}:{required}{default}", option.aliases())?;

        for line in option.description.render(host).lines() {
            writeln!(out, "    {line}")?;
        }
    }

    writeln!(out)
}
