//! CLI and configuration types.
//!
//! All serve options can also be set via environment variables with the
//! `SRVDIR_` prefix:
//!
//! - `SRVDIR_HOST` - Bind address (default: 0.0.0.0)
//! - `SRVDIR_PORT` - Port (default: 8080)
//! - `SRVDIR_THEME` - Listing color theme (default: auto)
//! - `SRVDIR_AUTH` - Inline Basic auth credentials (user:password)
//! - `SRVDIR_AUTH_FILE` - Path to an htpasswd file with bcrypt hashes

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::server::views::THEMES;

// =============================================================================
// Default Values
// =============================================================================

/// Default bind address.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default listing theme.
pub const DEFAULT_THEME: &str = "auto";

// =============================================================================
// CLI
// =============================================================================

/// srvdir - a themed directory server with optional Basic auth.
#[derive(Parser, Debug, Clone)]
#[command(name = "srvdir")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    serve: ServeConfig,
}

impl Cli {
    /// Resolve the invoked command; bare arguments mean `serve`.
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Serve(self.serve))
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Serve a directory over HTTP (the default).
    Serve(ServeConfig),

    /// Create or update an htpasswd credential file.
    Htpasswd(HtpasswdConfig),
}

/// Options for the `serve` command.
#[derive(Args, Debug, Clone)]
pub struct ServeConfig {
    /// Directory to serve.
    #[arg(value_name = "DIRECTORY", default_value = ".")]
    pub directory: PathBuf,

    /// Host/interface to bind.
    #[arg(long, default_value = DEFAULT_HOST, env = "SRVDIR_HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "SRVDIR_PORT")]
    pub port: u16,

    /// Color theme (auto, nord, squirrel, archlinux, monokai, zenburn).
    #[arg(long, default_value = DEFAULT_THEME, env = "SRVDIR_THEME")]
    pub theme: String,

    /// Basic auth credentials (user:password); the password is bcrypt
    /// hashed at startup.
    #[arg(long, env = "SRVDIR_AUTH")]
    pub auth: Option<String>,

    /// Path to an htpasswd file with bcrypt hashes.
    #[arg(long, env = "SRVDIR_AUTH_FILE")]
    pub auth_file: Option<PathBuf>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Disable request tracing.
    #[arg(long, default_value_t = false)]
    pub no_tracing: bool,
}

impl ServeConfig {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.auth.is_some() && self.auth_file.is_some() {
            return Err("--auth and --auth-file are mutually exclusive".to_string());
        }

        if let Some(ref auth) = self.auth {
            match auth.split_once(':') {
                Some((user, _)) if !user.is_empty() => {}
                _ => return Err("invalid --auth format, expected user:password".to_string()),
            }
        }

        if !THEMES.contains(&self.theme.as_str()) {
            return Err(format!(
                "unknown theme {:?}, expected one of: {}",
                self.theme,
                THEMES.join(", ")
            ));
        }

        match std::fs::metadata(&self.directory) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                return Err(format!("{} is not a directory", self.directory.display()));
            }
            Err(e) => {
                return Err(format!(
                    "cannot access {}: {e}",
                    self.directory.display()
                ));
            }
        }

        Ok(())
    }

    /// The server bind address as "host:port".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Options for the `htpasswd` command.
#[derive(Args, Debug, Clone)]
pub struct HtpasswdConfig {
    /// Credential file to create or update.
    pub file: PathBuf,

    /// Username to add or replace.
    pub username: String,
}

// =============================================================================
// Tests
// =============================================================================
