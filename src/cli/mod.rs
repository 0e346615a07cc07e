use std::path::PathBuf;

use clap::Parser;

use venn_lib::config::{self, ConflictCheck, Config};

pub mod display;

#[cfg(feature = "log")]
pub mod logging;

/// Checks categorical syllogisms over two or three categories with a Venn diagram.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// File of premises, one per line or separated by semicolons.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// A premise, e.g. "All A's are B's" (may be repeated).
    #[arg(short, long = "premise", value_name = "PREMISE")]
    pub premises: Vec<String>,

    /// A conclusion to evaluate, e.g. "Some A's are not C's" (may be repeated).
    #[arg(short = 'e', long = "eval", value_name = "CONCLUSION")]
    pub conclusions: Vec<String>,

    /// Do not assume the subject of a universal statement is inhabited.
    #[arg(long)]
    pub no_existential_import: bool,

    /// When to report premises which cannot hold together: eager, deferred, or off.
    #[arg(long, value_name = "WHEN", default_value_t = config::defaults::CONFLICT_CHECK)]
    pub conflict_check: ConflictCheck,

    /// Write the diagram, and any evaluations, as JSON.
    #[arg(long)]
    pub json: bool,

    /// Level of logs written to stderr (requires the 'log' feature).
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    #[cfg_attr(not(feature = "log"), allow(dead_code))]
    pub log_level: log::LevelFilter,
}

impl Args {
    pub fn config(&self) -> Config {
        Config {
            existential_import: !self.no_existential_import,
            conflict_check: self.conflict_check,
            ..Config::default()
        }
    }

    /// The premises of the file, if any, followed by each premise given directly.
    pub fn premises_text(&self) -> Result<String, String> {
        let mut text = match &self.file {
            None => String::default(),
            Some(path) => match std::fs::read_to_string(path) {
                Ok(contents) => contents,
                Err(e) => return Err(format!("Failed to read {path:?}: {e}")),
            },
        };

        for premise in &self.premises {
            text.push('\n');
            text.push_str(premise);
        }

        Ok(text)
    }
}
