//! Persistence for recently opened projects.
//!
//! A small JSON-backed most-recently-used list pairing each project path
//! with the configuration detected for it, so reopening a project skips
//! re-detection. Loading tolerates a missing or corrupt store file by
//! starting empty; nothing is written until [`ProjectStore::save`].

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::{detect::ProjectConfig, error::Error};

/// Upper bound on remembered projects.
pub const MAX_RECENT_PROJECTS: usize = 10;

/// One remembered project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentProject {
    pub project_path: PathBuf,
    pub project_name: String,
    pub config: ProjectConfig,
    /// Seconds since the Unix epoch.
    pub last_opened: u64,
}

/// The most-recently-used project list, held in memory and saved explicitly.
#[derive(Debug)]
pub struct ProjectStore {
    path: PathBuf,
    projects: Vec<RecentProject>,
}

impl ProjectStore {
    /// Loads the store at `path`, most recent first. A missing or unparsable
    /// file yields an empty store.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut projects: Vec<RecentProject> = fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default();
        projects.sort_by(|a, b| b.last_opened.cmp(&a.last_opened));
        projects.truncate(MAX_RECENT_PROJECTS);
        ProjectStore { path, projects }
    }

    /// The remembered projects, most recent first.
    pub fn projects(&self) -> &[RecentProject] {
        &self.projects
    }

    /// Remembers a project, moving an already-known path to the front with a
    /// fresh timestamp and the new configuration.
    pub fn record(
        &mut self,
        project_path: impl Into<PathBuf>,
        project_name: impl Into<String>,
        config: ProjectConfig,
    ) {
        let project_path = project_path.into();
        self.projects
            .retain(|project| project.project_path != project_path);
        self.projects.insert(
            0,
            RecentProject {
                project_path,
                project_name: project_name.into(),
                config,
                last_opened: epoch_seconds(),
            },
        );
        self.projects.truncate(MAX_RECENT_PROJECTS);
    }

    /// Forgets a project by path. Returns whether anything was removed.
    pub fn remove(&mut self, project_path: &Path) -> bool {
        let before = self.projects.len();
        self.projects
            .retain(|project| project.project_path != project_path);
        self.projects.len() != before
    }

    /// Forgets every project.
    pub fn clear(&mut self) {
        self.projects.clear();
    }

    /// Writes the store back to its file, creating parent directories.
    pub fn save(&self) -> Result<(), Error> {
        if let Some(parent) = self
            .path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.projects)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

fn epoch_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
