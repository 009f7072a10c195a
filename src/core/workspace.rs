//! Workspace discovery and the file-backed entity store
//!
//! A workspace is a directory tree marked by `.crew/config.yaml`, with one
//! YAML file per entity under typed subdirectories. The store owns all disk
//! access; the rule functions only ever see loaded collections.

use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use crate::core::config::Config;
use crate::core::entity::Entity;
use crate::core::identity::{EntityId, EntityPrefix};
use crate::entities::audit::AuditLogEntry;
use crate::yaml::{parse_yaml_file, YamlError};

/// Marker directory for workspace discovery
const MARKER_DIR: &str = ".crew";
const CONFIG_FILE: &str = "config.yaml";

/// File suffix for entity records
pub const ENTITY_SUFFIX: &str = ".crew.yaml";

/// Errors from workspace operations
#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("Not inside a crew workspace (no .crew/ found). Run 'crew init' first")]
    NotInWorkspace,

    #[error("Workspace already initialized at {0}")]
    AlreadyInitialized(PathBuf),

    #[error("No {kind} found with ID: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Ambiguous ID '{id}': matches {count} entities")]
    Ambiguous { id: String, count: usize },

    #[error(transparent)]
    Yaml(#[from] YamlError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A discovered workspace root
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// Walk up from the current directory to find the workspace root
    pub fn discover() -> Result<Self, WorkspaceError> {
        let cwd = std::env::current_dir()?;
        Self::discover_from(&cwd)
    }

    /// Walk up from a given directory to find the workspace root
    pub fn discover_from(start: &Path) -> Result<Self, WorkspaceError> {
        let mut dir = start;
        loop {
            if dir.join(MARKER_DIR).join(CONFIG_FILE).is_file() {
                return Ok(Self {
                    root: dir.to_path_buf(),
                });
            }
            match dir.parent() {
                Some(parent) => dir = parent,
                None => return Err(WorkspaceError::NotInWorkspace),
            }
        }
    }

    /// Initialize a new workspace in the given directory
    pub fn init(root: &Path) -> Result<Self, WorkspaceError> {
        let marker = root.join(MARKER_DIR);
        if marker.join(CONFIG_FILE).is_file() {
            return Err(WorkspaceError::AlreadyInitialized(root.to_path_buf()));
        }

        std::fs::create_dir_all(&marker)?;
        Config::default().save(&marker.join(CONFIG_FILE))?;

        for prefix in EntityPrefix::all() {
            std::fs::create_dir_all(root.join(prefix.directory()))?;
        }

        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load the workspace config
    pub fn config(&self) -> Config {
        Config::load(&self.root.join(MARKER_DIR).join(CONFIG_FILE))
    }

    /// Persist the workspace config
    pub fn save_config(&self, config: &Config) -> Result<(), WorkspaceError> {
        config.save(&self.root.join(MARKER_DIR).join(CONFIG_FILE))?;
        Ok(())
    }

    fn entity_dir(&self, prefix: EntityPrefix) -> PathBuf {
        self.root.join(prefix.directory())
    }

    fn entity_path(&self, id: &EntityId) -> PathBuf {
        self.entity_dir(id.prefix())
            .join(format!("{}{}", id, ENTITY_SUFFIX))
    }

    /// All entity files of a given type, sorted by file name (and therefore
    /// by ULID, i.e. creation order)
    pub fn iter_entity_files(&self, prefix: EntityPrefix) -> Vec<PathBuf> {
        let dir = self.entity_dir(prefix);
        let mut files: Vec<PathBuf> = WalkDir::new(&dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| e.path().to_string_lossy().ends_with(ENTITY_SUFFIX))
            .map(|e| e.path().to_path_buf())
            .collect();
        files.sort();
        files
    }

    /// Load every entity of a type, in creation order
    pub fn load_all<T: Entity + 'static>(&self, prefix: EntityPrefix) -> Result<Vec<T>, WorkspaceError> {
        let mut entities = Vec::new();
        for path in self.iter_entity_files(prefix) {
            entities.push(parse_yaml_file(&path)?);
        }
        Ok(entities)
    }

    /// Load a single entity by full ID or unique ID prefix
    pub fn load<T: Entity + 'static>(
        &self,
        prefix: EntityPrefix,
        id: &str,
        kind: &'static str,
    ) -> Result<T, WorkspaceError> {
        let path = self.resolve_entity_file(prefix, id, kind)?;
        Ok(parse_yaml_file(&path)?)
    }

    /// Write an entity to its canonical file
    pub fn save<T: Entity>(&self, entity: &T) -> Result<(), WorkspaceError> {
        let path = self.entity_path(entity.id());
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_yml::to_string(entity)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Append an audit log entry
    ///
    /// Entries are write-once; nothing in the toolkit ever rewrites one.
    pub fn append_audit(&self, entry: &AuditLogEntry) -> Result<(), WorkspaceError> {
        self.save(entry)
    }

    /// Resolve a full ID or unique ID prefix to an entity file
    ///
    /// Accepts the short display form (`PRJ-01J9AVJM`) as long as it is
    /// unambiguous.
    fn resolve_entity_file(
        &self,
        prefix: EntityPrefix,
        id: &str,
        kind: &'static str,
    ) -> Result<PathBuf, WorkspaceError> {
        let matches: Vec<PathBuf> = self
            .iter_entity_files(prefix)
            .into_iter()
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(id))
            })
            .collect();

        match matches.len() {
            0 => Err(WorkspaceError::NotFound {
                kind,
                id: id.to_string(),
            }),
            1 => Ok(matches.into_iter().next().unwrap()),
            n => Err(WorkspaceError::Ambiguous {
                id: id.to_string(),
                count: n,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::project::Project;
    use chrono::Utc;

    fn init_workspace() -> (tempfile::TempDir, Workspace) {
        let tmp = tempfile::tempdir().unwrap();
        let ws = Workspace::init(tmp.path()).unwrap();
        (tmp, ws)
    }

    #[test]
    fn test_init_creates_directories() {
        let (_tmp, ws) = init_workspace();
        for prefix in EntityPrefix::all() {
            assert!(ws.root().join(prefix.directory()).is_dir());
        }
        assert!(ws.root().join(".crew/config.yaml").is_file());
    }

    #[test]
    fn test_init_twice_fails() {
        let (tmp, _ws) = init_workspace();
        assert!(matches!(
            Workspace::init(tmp.path()),
            Err(WorkspaceError::AlreadyInitialized(_))
        ));
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let (tmp, _ws) = init_workspace();
        let sub = tmp.path().join("projects/deep/nested");
        std::fs::create_dir_all(&sub).unwrap();

        let found = Workspace::discover_from(&sub).unwrap();
        assert_eq!(found.root(), tmp.path());
    }

    #[test]
    fn test_discover_outside_workspace_fails() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(matches!(
            Workspace::discover_from(tmp.path()),
            Err(WorkspaceError::NotInWorkspace)
        ));
    }

    #[test]
    fn test_save_load_roundtrip() {
        let (_tmp, ws) = init_workspace();
        let project = Project::new("Portal".to_string(), 4, "test".to_string(), Utc::now());
        ws.save(&project).unwrap();

        let loaded: Project = ws
            .load(EntityPrefix::Prj, project.id.as_str(), "project")
            .unwrap();
        assert_eq!(loaded.id, project.id);
        assert_eq!(loaded.name, "Portal");

        let all: Vec<Project> = ws.load_all(EntityPrefix::Prj).unwrap();
        assert_eq!(all.len(), 1);
    }

    #[test]
    fn test_load_by_short_prefix() {
        let (_tmp, ws) = init_workspace();
        let project = Project::new("Portal".to_string(), 4, "test".to_string(), Utc::now());
        ws.save(&project).unwrap();

        let loaded: Project = ws
            .load(EntityPrefix::Prj, &project.id.short(), "project")
            .unwrap();
        assert_eq!(loaded.id, project.id);
    }

    #[test]
    fn test_load_missing_is_not_found() {
        let (_tmp, ws) = init_workspace();
        let err = ws
            .load::<Project>(EntityPrefix::Prj, "PRJ-01J9AVJMS8WQJN4WM2J0K3Y8ZD", "project")
            .unwrap_err();
        assert!(matches!(err, WorkspaceError::NotFound { .. }));
    }
}
