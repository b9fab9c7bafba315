use crate::error::{AutoverError, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads and writes the project's declared version in a TOML build file.
///
/// The version is located by a dotted key path (e.g. `package.version` in a
/// `Cargo.toml`). Reading parses the whole file; writing replaces only the
/// single line declaring the current version, leaving the rest of the file
/// untouched.
pub struct VersionStore {
    path: PathBuf,
    key: String,
}

impl VersionStore {
    /// Create a store for `path`, locating the version under `key`
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        VersionStore {
            path: path.into(),
            key: key.into(),
        }
    }

    /// The file this store reads from and writes to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the declared version string
    pub fn read(&self) -> Result<String> {
        let text = fs::read_to_string(&self.path)?;
        let value: toml::Value = toml::from_str(&text).map_err(|e| {
            AutoverError::store(format!("Cannot parse {}: {}", self.path.display(), e))
        })?;

        let mut current = &value;
        for part in self.key.split('.') {
            current = current.get(part).ok_or_else(|| {
                AutoverError::store(format!(
                    "Key '{}' not found in {}",
                    self.key,
                    self.path.display()
                ))
            })?;
        }

        current
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| {
                AutoverError::store(format!(
                    "Key '{}' in {} is not a string",
                    self.key,
                    self.path.display()
                ))
            })
    }

    /// Replace the declared version `current` with `next`.
    ///
    /// Scans line by line, tracking the enclosing `[table]` header, and
    /// rewrites the one assignment of `current` to the leaf key inside the
    /// key's own table. Identical leaf keys in other tables (a dependency's
    /// `version`, say) are left alone, and the rest of the file keeps its
    /// formatting and comments. Fails if no such line exists, which usually
    /// means the file changed under us.
    pub fn write(&self, current: &str, next: &str) -> Result<()> {
        let text = fs::read_to_string(&self.path)?;
        let (table, leaf) = match self.key.rsplit_once('.') {
            Some((table, leaf)) => (table, leaf),
            None => ("", self.key.as_str()),
        };

        let assign_re = Regex::new(&format!(
            r#"^(\s*{}\s*=\s*)"{}""#,
            regex::escape(leaf),
            regex::escape(current)
        ))
        .map_err(|e| AutoverError::store(format!("Invalid store pattern: {}", e)))?;
        let header_re = Regex::new(r"^\s*\[\[?\s*([^\]]*?)\s*\]\]?")
            .map_err(|e| AutoverError::store(format!("Invalid store pattern: {}", e)))?;

        // Top-level keys live before the first table header
        let mut in_table = table.is_empty();
        let mut replaced = false;
        let mut lines: Vec<String> = Vec::with_capacity(text.lines().count());

        for line in text.lines() {
            if let Some(caps) = header_re.captures(line) {
                in_table = &caps[1] == table;
                lines.push(line.to_string());
                continue;
            }

            if !replaced && in_table {
                if let Some(caps) = assign_re.captures(line) {
                    let end = caps.get(0).map(|m| m.end()).unwrap_or(line.len());
                    lines.push(format!("{}\"{}\"{}", &caps[1], next, &line[end..]));
                    replaced = true;
                    continue;
                }
            }

            lines.push(line.to_string());
        }

        if !replaced {
            return Err(AutoverError::store(format!(
                "Could not find {} = \"{}\" under [{}] in {}",
                leaf,
                current,
                table,
                self.path.display()
            )));
        }

        let mut output = lines.join("\n");
        if text.ends_with('\n') {
            output.push('\n');
        }
        fs::write(&self.path, output)?;
        Ok(())
    }
}
