// Task commands
// Mutations address tasks by id; the UI never sends a list position

#[cfg(feature = "app")]
use tauri::State;

use crate::error::Result;
use crate::models::{Task, ViewMode};
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TaskInfo {
    pub id: String,
    pub description: String,
    pub complete: bool,
}

impl From<&Task> for TaskInfo {
    fn from(t: &Task) -> Self {
        Self {
            id: t.id.clone(),
            description: t.description.clone(),
            complete: t.complete,
        }
    }
}

/// Tasks for a view; defaults to the last selected one
pub fn getTasksImpl(state: &AppState, view: Option<ViewMode>) -> Vec<TaskInfo> {
    let view = view.unwrap_or_else(|| state.currentView());
    let store = state.store.lock();
    store.view(view).iter().map(TaskInfo::from).collect()
}

pub fn addTaskImpl(state: &AppState, description: &str) -> Result<TaskInfo> {
    let task = state.store.lock().add(description)?;
    Ok(TaskInfo::from(&task))
}

pub fn updateTaskImpl(state: &AppState, id: &str, description: &str) -> Result<TaskInfo> {
    let task = state.store.lock().update(id, description)?;
    Ok(TaskInfo::from(&task))
}

pub fn toggleTaskImpl(state: &AppState, id: &str) -> Result<TaskInfo> {
    let task = state.store.lock().toggleComplete(id)?;
    Ok(TaskInfo::from(&task))
}

pub fn deleteTaskImpl(state: &AppState, id: &str) -> Result<()> {
    state.store.lock().delete(id)?;
    Ok(())
}

#[cfg(feature = "app")]
#[tauri::command]
pub fn getTasks(state: State<'_, AppState>, view: Option<ViewMode>) -> Vec<TaskInfo> {
    getTasksImpl(&state, view)
}

#[cfg(feature = "app")]
#[tauri::command]
pub fn addTask(state: State<'_, AppState>, description: String) -> Result<TaskInfo> {
    addTaskImpl(&state, &description)
}

#[cfg(feature = "app")]
#[tauri::command]
pub fn updateTask(state: State<'_, AppState>, id: String, description: String) -> Result<TaskInfo> {
    updateTaskImpl(&state, &id, &description)
}

#[cfg(feature = "app")]
#[tauri::command]
pub fn toggleTask(state: State<'_, AppState>, id: String) -> Result<TaskInfo> {
    toggleTaskImpl(&state, &id)
}

#[cfg(feature = "app")]
#[tauri::command]
pub fn deleteTask(state: State<'_, AppState>, id: String) -> Result<()> {
    deleteTaskImpl(&state, &id)
}
