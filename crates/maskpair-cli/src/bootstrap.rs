//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter: the database pool is opened, the schema checked,
//! and the `SQLite` repository injected into `ImagePairService`.

use std::path::PathBuf;

use maskpair_core::ImagePairService;
use maskpair_core::paths::database_path;
use maskpair_db::{CoreFactory, setup_database};

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Database file to open (created if missing).
    pub database_path: PathBuf,
}

impl CliConfig {
    /// Create config from an optional `--db` override, falling back to the
    /// default database location.
    pub fn resolve(db_override: Option<PathBuf>) -> Result<Self, CliError> {
        let database_path = match db_override {
            Some(path) if path.as_os_str().is_empty() => {
                return Err(CliError::Arguments("--db cannot be empty".to_string()));
            }
            Some(path) => path,
            None => database_path()?,
        };
        Ok(Self { database_path })
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    service: ImagePairService,
    database_path: PathBuf,
}

impl CliContext {
    /// Access the image pair service.
    pub const fn service(&self) -> &ImagePairService {
        &self.service
    }

    /// Database file backing this context.
    pub const fn database_path(&self) -> &PathBuf {
        &self.database_path
    }
}

/// Bootstrap the CLI application.
///
/// Opens (or creates) the database, ensures and verifies the schema, then
/// builds the service.
pub async fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    let pool = setup_database(&config.database_path)
        .await
        .map_err(|e| {
            CliError::Database(format!(
                "failed to open {}: {e:#}",
                config.database_path.display()
            ))
        })?;

    tracing::debug!(path = %config.database_path.display(), "Bootstrapped CLI context");

    Ok(CliContext {
        service: CoreFactory::build_service(pool),
        database_path: config.database_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_explicit_db_is_used_verbatim() {
        let config = CliConfig::resolve(Some(PathBuf::from("/tmp/x/pairs.db"))).unwrap();
        assert_eq!(config.database_path, PathBuf::from("/tmp/x/pairs.db"));
    }

    #[test]
    fn test_empty_db_is_rejected() {
        assert!(matches!(
            CliConfig::resolve(Some(PathBuf::new())),
            Err(CliError::Arguments(_))
        ));
    }

    #[tokio::test]
    async fn test_bootstrap_creates_database() {
        let temp = tempdir().unwrap();
        let db_path = temp.path().join("data").join("maskpair.db");

        let ctx = bootstrap(CliConfig {
            database_path: db_path.clone(),
        })
        .await
        .unwrap();

        assert!(db_path.exists());
        assert_eq!(ctx.database_path(), &db_path);
        assert_eq!(ctx.service().count().await.unwrap(), 0);
    }
}
