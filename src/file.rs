// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
    thread::{self, JoinHandle},
};

use crate::config::consts::STORE_SEP;
use crate::csv::rows_to_string;
use crate::error::{Error, Result};
use crate::table::DialogueTable;

/// Write a table as CSV (header row first), creating parent directories.
/// Output depends only on the table, so identical tables give identical bytes.
pub fn write_table(path: &Path, table: &DialogueTable) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let headers = table.headers();
    let contents = rows_to_string(Some(&headers), &table.to_rows(), STORE_SEP);

    fs::write(path, contents)?;
    Ok(path.to_path_buf())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::Io(std::io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        ))));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Hand a URL or folder to the platform's default handler.
pub fn open_in_system(target: &str) -> std::result::Result<(), String> {
    #[cfg(target_os = "windows")]
    let opener = "explorer";
    #[cfg(target_os = "macos")]
    let opener = "open";
    #[cfg(target_os = "linux")]
    let opener = "xdg-open";

    #[cfg(any(target_os = "windows", target_os = "macos", target_os = "linux"))]
    {
        spawn_detached(opener, target).map(|_| ())
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
    {
        let _ = target;
        Err("Opening URLs not supported on this platform".to_string())
    }
}

/// Spawn `program target` and wait for it on a background thread so the
/// exited child is reaped instead of lingering as a zombie.
fn spawn_detached(program: &str, target: &str) -> std::result::Result<JoinHandle<()>, String> {
    let mut child = Command::new(program)
        .arg(target)
        .spawn()
        .map_err(|e| format!("Failed to spawn {program}: {e}"))?;

    let program = program.to_string();
    Ok(thread::spawn(move || match child.wait() {
        Ok(status) if !status.success() => log::debug!("Open: {program} exited with {status}"),
        Ok(_) => {}
        Err(e) => log::debug!("Open: waiting on {program} failed: {e}"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_file_as_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain");
        fs::write(&file, "x").unwrap();
        assert!(ensure_directory(&file).is_err());
        assert!(ensure_directory(&dir.path().join("a/b")).is_ok());
        assert!(dir.path().join("a/b").is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn opener_child_is_waited_on() {
        let waiter = spawn_detached("true", "x").unwrap();
        assert!(waiter.join().is_ok());
        // the waiter owned the child; it has exited and been reaped
    }

    #[test]
    fn missing_opener_is_an_error() {
        let err = spawn_detached("wiki-dialogue-no-such-opener", "x").unwrap_err();
        assert!(err.contains("wiki-dialogue-no-such-opener"));
    }
}
