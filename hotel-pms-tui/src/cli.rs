//! 命令行参数与非交互子命令

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use hotel_pms_core::{Destination, RouteTable, SettingsCatalog, SettingsResolver};

#[derive(Parser, Debug)]
#[command(name = "hotel-pms-tui")]
#[command(version, about = "Hotel PMS settings console", long_about = None)]
pub struct Cli {
    /// Preferences file path (defaults to <config_dir>/hotel-pms/config.json)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Keep preferences in memory only
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Resolve a settings item and print the action as JSON
    Resolve {
        /// Section id, e.g. "security"
        section: String,
        /// Item title, e.g. "User Roles"
        item: String,
    },

    /// List the route table
    Routes,

    /// Validate the settings catalog against the route table
    Check,
}

/// 执行子命令，返回是否成功
pub fn run_command(command: &Command, out: &mut impl Write) -> Result<bool> {
    match command {
        Command::Resolve { section, item } => {
            let action = SettingsResolver::builtin().resolve(section, item);
            writeln!(out, "{}", serde_json::to_string_pretty(&action)?)?;
            Ok(true)
        }

        Command::Routes => {
            for entry in RouteTable::builtin().entries() {
                let target = match entry.destination {
                    Destination::Page(path) => path,
                    Destination::NoDedicatedPage => "(dialog)",
                };
                writeln!(out, "{}\t{}\t{target}", entry.section_id, entry.item_title)?;
            }
            Ok(true)
        }

        Command::Check => {
            let mut defects = RouteTable::builtin_defects();
            defects.extend(SettingsCatalog::builtin().audit(RouteTable::builtin()));

            for defect in &defects {
                log::error!("{defect}");
                writeln!(out, "{}: {defect}", defect.code())?;
            }
            if defects.is_empty() {
                writeln!(out, "ok")?;
            }
            Ok(defects.is_empty())
        }
    }
}
