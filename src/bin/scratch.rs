use std::env;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{anyhow, bail, Context, Result};
use scratchpads::store::format_size;
use scratchpads::{
    EditorHost, InputOptions, PickEntry, ScratchpadsManager, SettingsStore, SortKey, UserInterface,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("help");

    let workspace = env::current_dir().ok();
    let settings = SettingsStore::load(workspace.as_deref())?;
    let mut manager = ScratchpadsManager::new(settings, workspace, TerminalUi, ShellEditor)?;

    match command {
        "new" => {
            let filetype = match args.get(1) {
                Some(ext) => Some(
                    manager
                        .catalog()
                        .find(ext)
                        .cloned()
                        .ok_or_else(|| anyhow!("Unknown filetype extension: {ext}"))?,
                ),
                None => None,
            };
            manager.new_scratchpad(filetype)?;
        }
        "new-default" => {
            manager.new_scratchpad_default()?;
        }
        "list" => {
            let key = match args.get(1).map(String::as_str) {
                None | Some("name") => SortKey::Name,
                Some("date") => SortKey::Date,
                Some("type") => SortKey::Type,
                Some(other) => bail!("Unknown sort key: {other} (name|date|type)"),
            };
            for file in manager.store().list(key, true)? {
                println!(
                    "{:<30} {:>10}  {}",
                    file.name,
                    format_size(file.size_bytes),
                    file.modified_at.format("%Y-%m-%d %H:%M")
                );
            }
        }
        "open" => {
            manager.open_scratchpad()?;
        }
        "latest" => {
            manager.open_latest_scratchpad()?;
        }
        "rename" => {
            manager.rename_scratchpad()?;
        }
        "remove" => {
            manager.remove_scratchpad()?;
        }
        "remove-all" => {
            manager.remove_all_scratchpads()?;
        }
        "add-type" => {
            manager.new_filetype()?;
        }
        "remove-type" => {
            manager.remove_filetype()?;
        }
        "folder" => {
            manager.open_scratchpads_folder()?;
        }
        "help" | "--help" | "-h" => print_usage(),
        other => {
            print_usage();
            bail!("Unknown command: {other}");
        }
    }

    Ok(())
}

fn print_usage() {
    println!(
        "scratch <command>\n\n\
         Commands:\n\
         \x20 new [ext]     create a scratchpad (prompting for a filetype)\n\
         \x20 new-default   create a scratchpad of the default filetype\n\
         \x20 list [key]    list scratchpads sorted by name|date|type\n\
         \x20 open          pick a scratchpad and open it\n\
         \x20 latest        open the most recently modified scratchpad\n\
         \x20 rename        rename the active scratchpad\n\
         \x20 remove        pick a scratchpad and delete it\n\
         \x20 remove-all    delete every scratchpad\n\
         \x20 add-type      add a custom filetype and create a scratchpad\n\
         \x20 remove-type   remove a custom filetype\n\
         \x20 folder        reveal the scratch folder in the file browser"
    );
}

/// Line-oriented prompts over stdin/stdout.
struct TerminalUi;

impl TerminalUi {
    fn read_line(&self) -> Option<String> {
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(_) => None,
        }
    }
}

impl UserInterface for TerminalUi {
    fn pick(&self, placeholder: &str, entries: &[PickEntry]) -> Option<usize> {
        println!("{placeholder}:");
        let mut number = 0usize;
        let mut numbered: Vec<usize> = Vec::new();
        for (index, entry) in entries.iter().enumerate() {
            match entry {
                PickEntry::Separator(label) => println!("-- {label} --"),
                PickEntry::Item(label) => {
                    number += 1;
                    numbered.push(index);
                    println!("{number:>3}. {label}");
                }
            }
        }
        print!("> ");
        let _ = io::stdout().flush();
        let line = self.read_line()?;
        let choice: usize = line.trim().parse().ok()?;
        numbered.get(choice.checked_sub(1)?).copied()
    }

    fn input(&self, options: &InputOptions) -> Option<String> {
        if options.initial_value.is_empty() {
            print!("{}: ", options.placeholder);
        } else {
            print!("{} [{}]: ", options.placeholder, options.initial_value);
        }
        let _ = io::stdout().flush();
        let line = self.read_line()?;
        if line.is_empty() && !options.initial_value.is_empty() {
            return Some(options.initial_value.clone());
        }
        Some(line)
    }

    fn choose(&self, message: &str, buttons: &[&str]) -> Option<usize> {
        println!("{message}");
        for (index, button) in buttons.iter().enumerate() {
            println!("{:>3}. {button}", index + 1);
        }
        print!("> ");
        let _ = io::stdout().flush();
        let line = self.read_line()?;
        let choice: usize = line.trim().parse().ok()?;
        let index = choice.checked_sub(1)?;
        (index < buttons.len()).then_some(index)
    }

    fn info(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("error: {message}");
    }
}

/// Editor port for a shell session: documents open in `$EDITOR`, there is no
/// tab ring, and the clipboard is unavailable.
struct ShellEditor;

impl EditorHost for ShellEditor {
    fn open_document(&self, path: &Path) -> Result<()> {
        match env::var("EDITOR") {
            Ok(editor) if !editor.is_empty() => {
                Command::new(editor)
                    .arg(path)
                    .status()
                    .with_context(|| format!("Failed launching $EDITOR for {:?}", path))?;
            }
            _ => println!("{}", path.display()),
        }
        Ok(())
    }

    fn active_document(&self) -> Result<Option<PathBuf>> {
        Ok(None)
    }

    fn close_active_document(&self) -> Result<()> {
        Ok(())
    }

    fn next_document(&self) -> Result<()> {
        Ok(())
    }

    fn open_tabs(&self) -> Option<Vec<PathBuf>> {
        Some(Vec::new())
    }

    fn close_tab(&self, _path: &Path) -> Result<()> {
        Ok(())
    }

    fn save_document(&self, _path: &Path) -> Result<()> {
        Ok(())
    }

    fn format_document(&self, _path: &Path) -> Result<()> {
        Ok(())
    }

    fn clipboard_text(&self) -> Result<String> {
        bail!("clipboard is not available in the terminal host")
    }

    fn reveal_in_file_browser(&self, path: &Path) -> Result<()> {
        let opener = if cfg!(target_os = "macos") {
            "open"
        } else if cfg!(target_os = "windows") {
            "explorer"
        } else {
            "xdg-open"
        };
        Command::new(opener)
            .arg(path)
            .status()
            .with_context(|| format!("Failed revealing {:?}", path))?;
        Ok(())
    }
}
