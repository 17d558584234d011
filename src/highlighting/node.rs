//! Running shiki.js under Node

use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, info};

use super::wire::{language_ids, LanguageProperties, Reply};
use super::TokenSource;
use crate::highlighter::Options;
use crate::language::*;

/// Places Node commonly lives that are not always on PATH, notably when
/// running under a GUI or a web server.
pub const SEARCH_PATHS: [&str; 2] = ["/usr/local/bin", "/opt/homebrew/bin"];

const SCRIPT: &str = "shiki.js";

/// Token source backed by a `node shiki.js` child process per call.
#[derive(Debug, Clone, Default)]
pub struct Node {
    working_directory: Option<PathBuf>,
}

impl Node {
    pub fn new() -> Node {
        Node::default()
    }

    /// Run shiki.js from somewhere other than the bin/ directory shipped
    /// with this crate. Ignored if the directory doesn't exist.
    pub fn with_working_directory(mut self, path: impl Into<PathBuf>) -> Node {
        self.working_directory = Some(path.into());
        self
    }

    pub fn working_directory(&self) -> Result<PathBuf> {
        if let Some(custom) = &self.working_directory {
            if let Ok(path) = custom.canonicalize() {
                return Ok(path);
            }
            debug!("Custom working directory unusable: {}", custom.display());
        }

        let bundled = Path::new(env!("CARGO_MANIFEST_DIR")).join("bin");
        bundled
            .canonicalize()
            .map_err(|_| HighlightError::WorkingDirectory(bundled))
    }

    fn call<T: DeserializeOwned>(&self, arguments: Value) -> Result<T> {
        let node = find_executable("node", &SEARCH_PATHS).ok_or(HighlightError::NodeNotFound)?;
        let directory = self.working_directory()?;

        info!("Running {} in {}", SCRIPT, directory.display());

        let output = Command::new(&node)
            .arg(SCRIPT)
            .arg(arguments.to_string())
            .current_dir(&directory)
            .output()?;

        if !output
            .status
            .success()
        {
            return Err(HighlightError::ProcessFailed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
                stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            });
        }

        debug!("Received {} bytes from {}", output.stdout.len(), SCRIPT);

        let result = serde_json::from_slice(&output.stdout)?;
        Ok(result)
    }
}

impl TokenSource for Node {
    fn tokenize(
        &self,
        code: &str,
        language: &str,
        theme: &str,
        options: &Options,
    ) -> Result<TokenizeResult> {
        let reply: Reply = self.call(json!([code, language, theme, options]))?;
        Ok(TokenizeResult::from(reply))
    }

    fn languages(&self) -> Result<Vec<String>> {
        let properties: Vec<LanguageProperties> = self.call(json!(["languages"]))?;
        Ok(language_ids(properties))
    }

    fn themes(&self) -> Result<Vec<String>> {
        self.call(json!(["themes"]))
    }
}

/// Look for an executable by name along PATH and then in the extra
/// directories given. Only absolute directories are searched, so the path
/// found is the program that runs whatever directory the child starts in.
pub fn find_executable(name: &str, extra: &[&str]) -> Option<PathBuf> {
    let path = env::var_os("PATH").unwrap_or_default();
    find_executable_in(name, &path, extra)
}

fn find_executable_in(name: &str, path: &OsStr, extra: &[&str]) -> Option<PathBuf> {
    let directories = env::join_paths(search_paths(path, extra)).ok()?;

    match which::which_in_global(name, Some(directories)) {
        Ok(mut found) => found.next(),
        Err(error) => {
            debug!("Unable to find {}: {}", name, error);
            None
        }
    }
}

fn search_paths(path: &OsStr, extra: &[&str]) -> Vec<PathBuf> {
    env::split_paths(path)
        .chain(
            extra
                .iter()
                .map(PathBuf::from),
        )
        .filter(|directory| directory.is_absolute())
        .collect()
}
