// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Promptbox-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Promptbox and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Promptbox CLI entrypoint.
//!
//! By default this opens the prompt store in the platform data directory and runs the TUI.
//! `--list` prints the (optionally filtered) prompt list instead, and `--demo` runs against an
//! in-memory store seeded with sample prompts.

use std::error::Error;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use promptbox::model::sample_prompts;
use promptbox::render::project_rows;
use promptbox::store::{
    DirectoryStore, MemoryStore, PromptStore, StorageAdapter, WriteDurability,
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "promptbox.log";

#[derive(Debug, Parser)]
#[command(name = "promptbox", version, about = "Terminal prompt manager")]
struct Cli {
    /// Directory holding the prompt store. Takes precedence over --storage.
    #[arg(value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Directory holding the prompt store (same as DIR).
    #[arg(long, value_name = "DIR", env = "PROMPTBOX_HOME")]
    storage: Option<PathBuf>,

    /// Sync every write to disk before returning (slower).
    #[arg(long)]
    durable_writes: bool,

    /// Reject writes whose serialized size exceeds this many bytes.
    #[arg(long, value_name = "BYTES")]
    quota_bytes: Option<usize>,

    /// Log file; defaults to promptbox.log inside the storage directory.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Use an in-memory store seeded with sample prompts. Nothing is saved.
    #[arg(long, conflicts_with = "dir")]
    demo: bool,

    /// Print `id<TAB>title<TAB>description` for prompts matching FILTER and exit.
    ///
    /// The filter must be attached with `=`; `--list notes` lists every prompt stored in `notes`.
    #[arg(
        long,
        value_name = "FILTER",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = ""
    )]
    list: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum StorageChoice {
    Directory(PathBuf),
    Demo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Config {
    storage: StorageChoice,
    durability: WriteDurability,
    quota_bytes: Option<usize>,
    log_file: Option<PathBuf>,
    list: Option<String>,
}

impl Cli {
    fn into_config(self) -> Config {
        let storage = if self.demo {
            StorageChoice::Demo
        } else {
            StorageChoice::Directory(
                self.dir.or(self.storage).unwrap_or_else(default_storage_dir),
            )
        };
        let log_file = self.log_file.or_else(|| match &storage {
            StorageChoice::Directory(dir) => Some(dir.join(LOG_FILE_NAME)),
            StorageChoice::Demo => None,
        });
        let durability = if self.durable_writes {
            WriteDurability::Durable
        } else {
            WriteDurability::BestEffort
        };

        Config {
            storage,
            durability,
            quota_bytes: self.quota_bytes,
            log_file,
            list: self.list,
        }
    }
}

fn default_storage_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("promptbox"))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Routes `tracing` events to `path`. Returns `None` (logging off) when the file can't be opened.
fn init_logging(path: Option<&Path>) -> Option<WorkerGuard> {
    let path = path?;
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        let _ = fs::create_dir_all(parent);
    }
    let file = OpenOptions::new().create(true).append(true).open(path).ok()?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .ok()?;
    Some(guard)
}

fn open_store(config: &Config) -> (PromptStore, String) {
    match &config.storage {
        StorageChoice::Directory(dir) => {
            let backend = DirectoryStore::new(dir)
                .with_durability(config.durability)
                .with_quota(config.quota_bytes);
            let label = backend.slot_path(promptbox::store::STORAGE_KEY).display().to_string();
            tracing::info!(storage = %dir.display(), durability = ?config.durability, "opening prompt store");
            (PromptStore::load(StorageAdapter::new(backend)), label)
        }
        StorageChoice::Demo => {
            let memory = MemoryStore::new().with_quota(config.quota_bytes);
            let mut seed = StorageAdapter::new(memory.clone());
            seed.save_all(&sample_prompts());
            tracing::info!("opening demo prompt store");
            (
                PromptStore::load(StorageAdapter::new(memory)),
                "memory (demo mode, discarded on exit)".to_owned(),
            )
        }
    }
}

fn print_list(store: &PromptStore, filter: &str, out: &mut impl Write) -> io::Result<()> {
    for row in project_rows(store.filtered(filter)) {
        writeln!(out, "{}", row.tab_separated())?;
    }
    out.flush()
}

fn run(config: Config) -> Result<(), Box<dyn Error>> {
    let (store, label) = open_store(&config);

    if let Some(filter) = &config.list {
        let stdout = io::stdout();
        print_list(&store, filter, &mut stdout.lock())?;
        return Ok(());
    }

    promptbox::tui::run(store, label)
}

fn main() {
    let config = Cli::parse().into_config();
    let _log_guard = init_logging(config.log_file.as_deref());

    if let Err(err) = run(config) {
        tracing::error!(%err, "promptbox exited with an error");
        eprintln!("promptbox: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;
    use promptbox::store::{MemoryStore, PromptStore, StorageAdapter, WriteDurability};

    use super::{print_list, Cli, Config, StorageChoice, LOG_FILE_NAME};

    fn parse(args: &[&str]) -> Result<Config, clap::Error> {
        let argv = std::iter::once("promptbox").chain(args.iter().copied());
        Cli::try_parse_from(argv).map(Cli::into_config)
    }

    #[test]
    fn parses_positional_storage_dir() {
        let config = parse(&["notes"]).expect("config");
        assert_eq!(config.storage, StorageChoice::Directory(PathBuf::from("notes")));
        assert_eq!(config.log_file, Some(PathBuf::from("notes").join(LOG_FILE_NAME)));
        assert_eq!(config.durability, WriteDurability::BestEffort);
        assert_eq!(config.list, None);
    }

    #[test]
    fn parses_storage_flag_and_write_options() {
        let config = parse(&["--storage", "s", "--durable-writes", "--quota-bytes", "5242880"])
            .expect("config");
        assert_eq!(config.storage, StorageChoice::Directory(PathBuf::from("s")));
        assert_eq!(config.durability, WriteDurability::Durable);
        assert_eq!(config.quota_bytes, Some(5_242_880));
    }

    #[test]
    fn explicit_log_file_wins() {
        let config = parse(&["d", "--log-file", "/tmp/p.log"]).expect("config");
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/p.log")));
    }

    #[test]
    fn demo_has_no_default_log_file() {
        let config = parse(&["--demo"]).expect("config");
        assert_eq!(config.storage, StorageChoice::Demo);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn list_takes_an_optional_filter() {
        assert_eq!(parse(&["d", "--list"]).expect("config").list, Some(String::new()));
        assert_eq!(
            parse(&["d", "--list=task"]).expect("config").list,
            Some("task".to_owned())
        );
    }

    #[test]
    fn list_without_equals_leaves_the_next_word_as_storage_dir() {
        let config = parse(&["--list", "notes"]).expect("config");
        assert_eq!(config.list, Some(String::new()));
        assert_eq!(config.storage, StorageChoice::Directory(PathBuf::from("notes")));
    }

    #[test]
    fn rejects_demo_with_storage_dir() {
        assert!(parse(&["--demo", "dir"]).is_err());
    }

    #[test]
    fn positional_dir_wins_over_storage_flag() {
        let config = parse(&["a", "--storage", "b"]).expect("config");
        assert_eq!(config.storage, StorageChoice::Directory(PathBuf::from("a")));
    }

    #[test]
    fn env_storage_applies_until_a_dir_is_given() {
        std::env::set_var("PROMPTBOX_HOME", "/tmp/promptbox-from-env");

        let from_env = parse(&[]).expect("config");
        let explicit = parse(&["explicit_dir"]).expect("config");
        let demo = parse(&["--demo"]).expect("config");

        std::env::remove_var("PROMPTBOX_HOME");
        assert_eq!(
            from_env.storage,
            StorageChoice::Directory(PathBuf::from("/tmp/promptbox-from-env"))
        );
        assert_eq!(explicit.storage, StorageChoice::Directory(PathBuf::from("explicit_dir")));
        assert_eq!(demo.storage, StorageChoice::Demo);
    }

    #[test]
    fn rejects_unknown_args_and_bad_quota() {
        assert!(parse(&["--nope"]).is_err());
        assert!(parse(&["--quota-bytes", "lots"]).is_err());
    }

    #[test]
    fn print_list_writes_filtered_rows() {
        let memory = MemoryStore::new();
        memory.insert_raw(
            promptbox::store::STORAGE_KEY,
            r#"[{"id":"a1","title":"Alpha Task","content":"<p>first</p>"},
                {"id":"b2","title":"Beta Task","content":"<p>second</p>"}]"#,
        );
        let store = PromptStore::load(StorageAdapter::new(memory));

        let mut out = Vec::new();
        print_list(&store, "beta", &mut out).expect("print");

        assert_eq!(String::from_utf8(out).expect("utf8"), "b2\tBeta Task\tsecond\n");
    }
}
