// Filesystem storage for the task list
// tasks.json holds a versioned task document, config.md holds settings as YAML frontmatter

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Result, TaskError};
use crate::models::{Settings, Task};

// ============================================
// PATH HELPERS
// ============================================

/// Config directory (~/.tasklist/), current directory when there is no home
pub fn configDir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".tasklist")
}

/// Config file path inside a config directory
pub fn configPath(dir: &Path) -> PathBuf {
    dir.join("config.md")
}

/// Tasks file: settings override, else tasks.json next to the config.
/// A relative override is taken relative to the config directory.
pub fn tasksPath(dir: &Path, settings: &Settings) -> PathBuf {
    match settings.dataFile.as_deref().map(str::trim) {
        Some(p) if !p.is_empty() => dir.join(p),
        _ => dir.join("tasks.json"),
    }
}

/// Free name to move an unreadable tasks file to.
/// tasks.json -> tasks.json.bak, then tasks.json.1.bak, tasks.json.2.bak, ...
pub fn quarantinePath(path: &Path) -> PathBuf {
    let baseName = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    let mut counter = 0u32;
    loop {
        let mut name = baseName.clone();
        if counter > 0 {
            name.push(format!(".{}", counter));
        }
        name.push(".bak");
        let candidate = path.with_file_name(name);
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

// ============================================
// ATOMIC WRITE
// ============================================

/// Replace `path` with `bytes` via temp file + fsync + rename in the same directory
pub fn atomicWrite(path: &Path, bytes: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent).map_err(|e| TaskError::persistence(&parent, e))?;

    let mut tmpName = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    tmpName.push(format!(".tmp.{}", std::process::id()));
    let tmpPath = parent.join(tmpName);

    let written = (|| -> std::io::Result<()> {
        let mut file = fs::File::create(&tmpPath)?;
        file.write_all(bytes)?;
        file.sync_all()?;
        drop(file);
        fs::rename(&tmpPath, path)
    })();

    if let Err(e) = written {
        let _ = fs::remove_file(&tmpPath);
        return Err(TaskError::persistence(path, e));
    }
    Ok(())
}

// ============================================
// TASK DOCUMENT
// ============================================

pub const DOCUMENT_VERSION: u32 = 1;

/// On-disk layout of tasks.json
#[derive(Debug, Serialize, Deserialize)]
pub struct TaskDocument {
    pub version: u32,
    #[serde(default)]
    pub savedAt: i64,
    pub tasks: Vec<Task>,
}

/// Pre-versioned layout: a bare array without ids
#[derive(Debug, Deserialize)]
struct LegacyTask {
    description: String,
    #[serde(default)]
    complete: bool,
}

/// Parse tasks.json content, migrating older layouts
pub fn parseTaskDocument(path: &Path, content: &str) -> Result<Vec<Task>> {
    let raw: serde_json::Value =
        serde_json::from_str(content).map_err(|e| TaskError::persistence(path, e))?;

    if raw.is_array() {
        let legacy: Vec<LegacyTask> =
            serde_json::from_value(raw).map_err(|e| TaskError::persistence(path, e))?;
        tracing::info!(count = legacy.len(), "Migrating unversioned task list");
        let tasks: Vec<Task> = legacy
            .into_iter()
            .map(|t| Task {
                id: uuid::Uuid::new_v4().to_string(),
                description: t.description,
                complete: t.complete,
            })
            .collect();
        validateTasks(path, &tasks)?;
        return Ok(tasks);
    }

    let doc: TaskDocument =
        serde_json::from_value(raw).map_err(|e| TaskError::persistence(path, e))?;
    if doc.version > DOCUMENT_VERSION {
        return Err(TaskError::persistence(
            path,
            format!("unsupported document version {} (newest known is {})", doc.version, DOCUMENT_VERSION),
        ));
    }
    validateTasks(path, &doc.tasks)?;
    Ok(doc.tasks)
}

/// Loaded tasks must have unique, non-blank ids and non-blank descriptions
fn validateTasks(path: &Path, tasks: &[Task]) -> Result<()> {
    let mut seen = HashSet::new();
    for (index, task) in tasks.iter().enumerate() {
        if task.id.trim().is_empty() {
            return Err(TaskError::persistence(path, format!("task {} has an empty id", index)));
        }
        if !seen.insert(task.id.as_str()) {
            return Err(TaskError::persistence(path, format!("duplicate task id '{}'", task.id)));
        }
        if task.description.trim().is_empty() {
            return Err(TaskError::persistence(
                path,
                format!("task '{}' has an empty description", task.id),
            ));
        }
    }
    Ok(())
}

/// Load tasks from disk. A missing file is an empty list.
pub fn readTasks(path: &Path) -> Result<Vec<Task>> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No tasks file yet");
            return Ok(Vec::new());
        }
        Err(e) => return Err(TaskError::persistence(path, e)),
    };
    parseTaskDocument(path, &content)
}

/// Write the whole task list as the current document version
pub fn writeTasks(path: &Path, tasks: &[Task]) -> Result<()> {
    let doc = TaskDocument {
        version: DOCUMENT_VERSION,
        savedAt: chrono::Utc::now().timestamp_millis(),
        tasks: tasks.to_vec(),
    };
    let json = serde_json::to_vec_pretty(&doc).map_err(|e| TaskError::persistence(path, e))?;
    atomicWrite(path, &json)
}

// ============================================
// FRONTMATTER PARSING
// ============================================

/// Parse YAML frontmatter from markdown content
pub fn parseFrontmatter<T: serde::de::DeserializeOwned>(content: &str) -> Option<(T, String)> {
    let content = content.trim();
    let rest = content.strip_prefix("---")?;
    let end = rest.find("\n---")?;
    let yaml = rest[..end].trim();
    let body = rest[end + 4..].trim().to_string();

    let frontmatter: T = serde_yaml::from_str(yaml).ok()?;
    Some((frontmatter, body))
}

/// Serialize frontmatter + body to markdown
pub fn toMarkdown<T: serde::Serialize>(frontmatter: &T, body: &str) -> std::result::Result<String, String> {
    let yaml = serde_yaml::to_string(frontmatter)
        .map_err(|e| format!("YAML error: {}", e))?;
    Ok(format!("---\n{}---\n\n{}\n", yaml, body))
}

// ============================================
// CONFIG
// ============================================

const CONFIG_BODY: &str = "# Task List\n\nSettings for the task list app. `dataFile` overrides where tasks are stored.";

/// Load settings; missing or unreadable config falls back to defaults
pub fn loadSettings(path: &Path) -> Settings {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Config file does not exist, using defaults");
            return Settings::default();
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read config, using defaults");
            return Settings::default();
        }
    };

    match parseFrontmatter::<Settings>(&content) {
        Some((settings, _)) => settings,
        None => {
            tracing::warn!(path = %path.display(), "Failed to parse config frontmatter, using defaults");
            Settings::default()
        }
    }
}

pub fn saveSettings(path: &Path, settings: &Settings) -> Result<()> {
    let content = toMarkdown(settings, CONFIG_BODY).map_err(|e| TaskError::persistence(path, e))?;
    atomicWrite(path, content.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ViewMode;
    use tempfile::TempDir;

    fn task(description: &str, complete: bool) -> Task {
        Task {
            id: uuid::Uuid::new_v4().to_string(),
            description: description.to_string(),
            complete,
        }
    }

    #[test]
    fn test_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let tasks = readTasks(&temp.path().join("tasks.json")).unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("tasks.json");
        let tasks = vec![task("buy milk", true), task("call mom", false)];

        writeTasks(&path, &tasks).unwrap();
        assert_eq!(readTasks(&path).unwrap(), tasks);
    }

    #[test]
    fn test_written_document_is_versioned() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");
        writeTasks(&path, &[task("x", false)]).unwrap();

        let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["version"], DOCUMENT_VERSION);
        assert!(raw["savedAt"].as_i64().unwrap() > 0);
        assert_eq!(raw["tasks"][0]["description"], "x");
        assert_eq!(raw["tasks"][0]["complete"], false);
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_files() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");
        writeTasks(&path, &[task("first", false)]).unwrap();
        writeTasks(&path, &[task("second", false)]).unwrap();

        let names: Vec<String> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["tasks.json".to_string()]);
        assert_eq!(readTasks(&path).unwrap()[0].description, "second");
    }

    #[test]
    fn test_corrupt_file_is_persistence_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");
        fs::write(&path, "{ not json").unwrap();

        let err = readTasks(&path).unwrap_err();
        assert_eq!(err.kind(), "persistence");
    }

    #[test]
    fn test_newer_version_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");
        fs::write(&path, r#"{"version": 99, "tasks": []}"#).unwrap();

        let err = readTasks(&path).unwrap_err();
        assert!(err.to_string().contains("unsupported document version 99"));
    }

    #[test]
    fn test_legacy_array_migrates_with_fresh_ids() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");
        fs::write(
            &path,
            r#"[{"description": "buy milk", "complete": true}, {"description": "call mom"}]"#,
        )
        .unwrap();

        let tasks = readTasks(&path).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].description, "buy milk");
        assert!(tasks[0].complete);
        assert!(!tasks[1].complete);
        assert_ne!(tasks[0].id, tasks[1].id);
    }

    #[test]
    fn test_quarantine_path_appends_bak() {
        assert_eq!(
            quarantinePath(Path::new("/data/tasks.json")),
            PathBuf::from("/data/tasks.json.bak")
        );
    }

    #[test]
    fn test_quarantine_path_skips_existing_backups() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");
        fs::write(temp.path().join("tasks.json.bak"), "old").unwrap();
        assert_eq!(quarantinePath(&path), temp.path().join("tasks.json.1.bak"));

        fs::write(temp.path().join("tasks.json.1.bak"), "older").unwrap();
        assert_eq!(quarantinePath(&path), temp.path().join("tasks.json.2.bak"));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");
        fs::write(
            &path,
            r#"{"version": 1, "tasks": [{"id": "x", "description": "one"}, {"id": "x", "description": "two"}]}"#,
        )
        .unwrap();

        let err = readTasks(&path).unwrap_err();
        assert_eq!(err.kind(), "persistence");
        assert!(err.to_string().contains("duplicate task id 'x'"));
    }

    #[test]
    fn test_blank_descriptions_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");
        fs::write(&path, r#"{"version": 1, "tasks": [{"id": "x", "description": "  "}]}"#).unwrap();
        let err = readTasks(&path).unwrap_err();
        assert!(err.to_string().contains("empty description"));

        fs::write(&path, r#"[{"description": "ok"}, {"description": ""}]"#).unwrap();
        let err = readTasks(&path).unwrap_err();
        assert!(err.to_string().contains("empty description"));
    }

    #[test]
    fn test_tasks_path_override() {
        let dir = Path::new("/cfg");
        assert_eq!(tasksPath(dir, &Settings::default()), PathBuf::from("/cfg/tasks.json"));

        let settings = Settings {
            dataFile: Some("/elsewhere/todo.json".to_string()),
            ..Default::default()
        };
        assert_eq!(tasksPath(dir, &settings), PathBuf::from("/elsewhere/todo.json"));

        let relative = Settings {
            dataFile: Some("lists/todo.json".to_string()),
            ..Default::default()
        };
        assert_eq!(tasksPath(dir, &relative), PathBuf::from("/cfg/lists/todo.json"));

        let blank = Settings {
            dataFile: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(tasksPath(dir, &blank), PathBuf::from("/cfg/tasks.json"));
    }

    #[test]
    fn test_settings_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = configPath(temp.path());
        let settings = Settings {
            dataFile: None,
            lastView: ViewMode::Completed,
        };

        saveSettings(&path, &settings).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("---\n"));
        assert!(content.contains("lastView: completed"));
        assert_eq!(loadSettings(&path), settings);
    }

    #[test]
    fn test_settings_defaults_when_missing_or_garbled() {
        let temp = TempDir::new().unwrap();
        let path = configPath(temp.path());
        assert_eq!(loadSettings(&path), Settings::default());

        fs::write(&path, "no frontmatter here").unwrap();
        assert_eq!(loadSettings(&path), Settings::default());
    }

    #[test]
    fn test_parse_frontmatter_splits_body() {
        let (settings, body) =
            parseFrontmatter::<Settings>("---\nlastView: incomplete\n---\n\nhello").unwrap();
        assert_eq!(settings.lastView, ViewMode::Incomplete);
        assert_eq!(body, "hello");
    }
}
