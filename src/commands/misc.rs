use crate::config::Config;
use crate::error::{AppError, ConfigError};
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::{self, Write};
use std::path::Path;

pub fn generate_completions(shell: Shell) {
    let mut cmd = crate::Cli::command();
    generate(shell, &mut cmd, "ghprofile", &mut io::stdout());

    eprintln!();
    eprintln!("Save the output to the appropriate location for your shell:");
    match shell {
        Shell::Bash => {
            eprintln!("  ghprofile completions bash > ~/.local/share/bash-completion/completions/ghprofile");
        }
        Shell::Zsh => {
            eprintln!("  ghprofile completions zsh > ~/.zsh/completions/_ghprofile");
            eprintln!("  # (Add 'fpath=(~/.zsh/completions $fpath)' before 'compinit' in .zshrc)");
        }
        Shell::Fish => {
            eprintln!("  ghprofile completions fish > ~/.config/fish/completions/ghprofile.fish");
        }
        _ => {}
    }
}

/// Prints where the config lives and what is in effect after `overrides`.
/// With `init`, writes the defaults first unless a file is already there.
/// A config that fails to load is reported here rather than aborting, and
/// `false` is returned.
pub fn config_command<W: Write>(
    path: &Path,
    init: bool,
    overrides: impl FnOnce(&mut Config),
    out: &mut W,
) -> Result<bool, AppError> {
    if init {
        if path.exists() {
            writeln!(out, "Config already exists, leaving it alone.")?;
        } else {
            Config::default().save_to(path)?;
            writeln!(out, "✓ Wrote default config")?;
        }
    }

    writeln!(out, "Config file: {}", path.display())?;
    let mut config = match Config::load_from(path) {
        Ok(config) => config,
        Err(e) => {
            writeln!(out, "{}", e)?;
            return Ok(false);
        }
    };
    overrides(&mut config);

    let effective = serde_json::to_string_pretty(&config).map_err(ConfigError::from)?;
    writeln!(out, "{}", effective)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn run(path: &Path, init: bool, overrides: impl FnOnce(&mut Config)) -> (bool, String) {
        let mut out = Vec::new();
        let ok = config_command(path, init, overrides, &mut out).unwrap();
        (ok, String::from_utf8(out).unwrap())
    }

    #[test]
    fn init_writes_defaults_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ghprofile").join("config.json");

        let (ok, out) = run(&path, true, |_| {});
        assert!(ok);
        assert!(path.exists());
        assert!(out.contains("Wrote default config"));

        let (_, out) = run(&path, true, |_| {});
        assert!(out.contains("already exists"));
    }

    #[test]
    fn shows_effective_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let (ok, out) = run(&path, false, |c| c.timeout_secs = Some(5));

        assert!(ok);
        assert!(out.contains("\"timeout_secs\": 5"));
        assert!(!path.exists());
    }

    #[test]
    fn malformed_file_is_reported_with_its_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let (ok, out) = run(&path, false, |_| {});

        assert!(!ok);
        assert!(out.contains(&format!("Config file: {}", path.display())));
        assert!(out.contains(&format!("Malformed config {}", path.display())));
    }
}
