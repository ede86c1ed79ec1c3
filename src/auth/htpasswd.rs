//! htpasswd-style credential files: `user:bcrypt-hash` per line.
//!
//! Blank lines, comments (`#`) and malformed lines are skipped when
//! loading. The `htpasswd` subcommand creates or updates a file,
//! prompting for the password twice.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use super::store::CredentialStore;

/// Load a credential file into a [`CredentialStore`].
pub fn load(path: &Path) -> io::Result<CredentialStore> {
    let contents = fs::read_to_string(path)?;
    let mut store = CredentialStore::new();

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((user, hash)) = line.split_once(':') else {
            debug!("skipping malformed htpasswd line");
            continue;
        };
        store.insert(user, hash);
    }

    Ok(store)
}

/// Add or replace `username`'s line in the file, creating it if missing.
///
/// Returns `true` when an existing entry was replaced. The file is
/// written with owner-only permissions.
pub fn update_file(path: &Path, username: &str, hash: &str) -> io::Result<bool> {
    let existing = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e),
    };

    let (contents, replaced) = upsert_line(&existing, username, hash);
    fs::write(path, contents)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }

    Ok(replaced)
}

/// Replace `username`'s line in `contents`, or append a new one.
fn upsert_line(contents: &str, username: &str, hash: &str) -> (String, bool) {
    let new_line = format!("{username}:{hash}");
    let mut lines = Vec::new();
    let mut replaced = false;

    for line in contents.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match trimmed.split_once(':') {
            Some((user, _)) if user == username => {
                lines.push(new_line.clone());
                replaced = true;
            }
            _ => lines.push(trimmed.to_string()),
        }
    }

    if !replaced {
        lines.push(new_line);
    }

    (lines.join("\n") + "\n", replaced)
}

/// Interactive `htpasswd` subcommand: prompt for a password twice, hash
/// it, and add or replace the user's entry.
pub fn run(file: &Path, username: &str) -> Result<(), String> {
    let password = rpassword::prompt_password("Password: ")
        .map_err(|e| format!("reading password: {e}"))?;
    let confirm = rpassword::prompt_password("Confirm password: ")
        .map_err(|e| format!("reading password: {e}"))?;

    if password != confirm {
        return Err("passwords do not match".to_string());
    }

    let hash = bcrypt::hash(&password, bcrypt::DEFAULT_COST)
        .map_err(|e| format!("hashing password: {e}"))?;

    let replaced =
        update_file(file, username, &hash).map_err(|e| format!("writing file: {e}"))?;

    if replaced {
        println!("Updated user {:?} in {}", username, file.display());
    } else {
        println!("Added user {:?} to {}", username, file.display());
    }
    Ok(())
}
