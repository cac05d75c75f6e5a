//! `generate` subcommand.
use anyhow::{Context, Result};
use clap_complete::Shell;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Write the shell completion script for `shell` to `writer`.
pub fn generate_completions<W: Write>(
    shell: Shell,
    cmd: &mut clap::Command,
    writer: &mut W,
) {
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, cmd, name, writer);
}

/// Render the man page for `cmd` and for each of its subcommands into
/// `output_dir`, or the current directory when none is given. Subcommand pages
/// are named `<parent>-<sub>.1`.
///
/// Returns the paths written, in generation order.
///
/// # Errors
///
/// Returns an [`anyhow::Error`] if the output directory or a page file could
/// not be created or written.
pub fn generate_man_pages(
    cmd: &clap::Command,
    output_dir: Option<PathBuf>,
) -> Result<Vec<PathBuf>> {
    let output_dir = match output_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Opening current directory")?,
    };
    std::fs::create_dir_all(&output_dir)
        .context("create output Man directories")?;

    let mut written = vec![];
    let name = cmd.get_name().to_string();
    render_page(cmd.clone(), &output_dir, &name, &mut written)?;

    for subcmd in cmd.get_subcommands() {
        let page_name = format!("{name}-{}", subcmd.get_name());
        // clap_mangen reads the page title from the command name, which must
        // be 'static; generation runs once per process.
        let leaked: &'static str = Box::leak(page_name.clone().into_boxed_str());
        let renamed = subcmd.clone().name(leaked).disable_help_subcommand(true);
        render_page(renamed, &output_dir, &page_name, &mut written)?;
    }

    Ok(written)
}

fn render_page(
    cmd: clap::Command,
    output_dir: &Path,
    page_name: &str,
    written: &mut Vec<PathBuf>,
) -> Result<()> {
    let path = output_dir.join(format!("{page_name}.1"));
    let mut file = File::create(&path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    clap_mangen::Man::new(cmd)
        .render(&mut file)
        .with_context(|| format!("failed to render {}", path.display()))?;
    written.push(path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_command() -> clap::Command {
        clap::Command::new("jlex")
            .about("lex JSON")
            .subcommand(clap::Command::new("generate").about("generate docs"))
    }

    #[test]
    fn man_pages_for_command_and_subcommands() {
        let dir = tempfile::tempdir().expect("temp dir");
        let written =
            generate_man_pages(&sample_command(), Some(dir.path().to_path_buf()))
                .expect("man pages render");

        assert_eq!(
            written,
            vec![dir.path().join("jlex.1"), dir.path().join("jlex-generate.1")]
        );
        for path in &written {
            let page = std::fs::read_to_string(path).expect("page readable");
            assert!(page.contains(".TH"), "not a man page: {}", path.display());
        }
    }

    #[test]
    fn completions_mention_binary() {
        let mut out = Vec::new();
        generate_completions(Shell::Bash, &mut sample_command(), &mut out);
        let script = String::from_utf8(out).expect("utf-8 script");
        assert!(script.contains("jlex"));
    }
}
