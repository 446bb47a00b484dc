use std::io::{BufRead, Write};
use std::path::Path;

use crate::commands::prompt::Prompter;
use crate::config::{parse_base_url, Config, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use crate::error::{EmployeeError, Result};

pub async fn run() -> Result<()> {
    let config_path = Config::config_path()?;
    let mut prompter = Prompter::stdio();

    if config_path.exists() {
        let question = format!(
            "Config file already exists at {}. Overwrite?",
            config_path.display()
        );
        if !prompter.confirm(&question, false)? {
            prompter.say("Aborted.")?;
            return Ok(());
        }
    }

    let Some(config) = collect(&mut prompter)? else {
        prompter.say("Aborted.")?;
        return Ok(());
    };

    write_config(&config_path, &config)?;

    prompter.say(&format!("\nConfig saved to {}", config_path.display()))?;
    prompter.say("You can now use 'employees' commands!")?;

    Ok(())
}

/// Ask for each setting; `None` if input ended early.
fn collect<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<Option<Config>> {
    prompter.say("Employee Directory CLI Configuration")?;
    prompter.say("====================================\n")?;

    let api_url = loop {
        let Some(raw) = prompter.ask(&format!("Backend URL [{DEFAULT_API_URL}]: "))? else {
            return Ok(None);
        };
        let raw = raw.trim();
        if raw.is_empty() {
            break None;
        }
        match parse_base_url(raw) {
            Ok(_) => break Some(raw.to_string()),
            Err(e) => prompter.say(&e.to_string())?,
        }
    };

    let timeout_secs = loop {
        let Some(raw) = prompter.ask(&format!("Request timeout in seconds [{DEFAULT_TIMEOUT_SECS}]: "))?
        else {
            return Ok(None);
        };
        let raw = raw.trim();
        if raw.is_empty() {
            break None;
        }
        match raw.parse::<u64>() {
            Ok(secs) if secs > 0 => break Some(secs),
            _ => prompter.say("Enter a whole number of seconds greater than zero.")?,
        }
    };

    Ok(Some(Config {
        api_url,
        timeout_secs,
    }))
}

fn write_config(path: &Path, config: &Config) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| EmployeeError::ConfigWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    let contents = toml::to_string(config)?;
    std::fs::write(path, contents).map_err(|e| EmployeeError::ConfigWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
