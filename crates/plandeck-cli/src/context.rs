use crate::config::Config;
use anyhow::Result;
use once_cell::sync::OnceCell;
use plandeck_store::TaskStore;
use std::path::{Path, PathBuf};

pub struct ExecutionContext {
    data_dir: PathBuf,
    store: OnceCell<TaskStore>,
    config: OnceCell<Config>,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            store: OnceCell::new(),
            config: OnceCell::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> Result<&Config> {
        self.config.get_or_try_init(|| {
            let config_path = self.data_dir.join("config.toml");
            Config::load_from(&config_path)
        })
    }

    pub fn store(&self) -> Result<&TaskStore> {
        self.store.get_or_try_init(|| {
            let config = self.config()?;
            Ok(TaskStore::new(config.tasks_path(&self.data_dir)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup_test_context() -> (TempDir, ExecutionContext) {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().to_path_buf();
        let ctx = ExecutionContext::new(data_dir);
        (temp_dir, ctx)
    }

    #[test]
    fn test_execution_context_lazy_loading() {
        let (_temp_dir, ctx) = setup_test_context();

        assert!(
            ctx.config.get().is_none(),
            "Config should not be loaded initially"
        );
        assert!(
            ctx.store.get().is_none(),
            "Store should not be loaded initially"
        );

        let config_result = ctx.config();
        assert!(config_result.is_ok(), "Config should load successfully");
        assert!(
            ctx.config.get().is_some(),
            "Config should be loaded after access"
        );

        assert!(
            ctx.store.get().is_none(),
            "Store should remain unloaded until accessed"
        );
    }

    #[test]
    fn test_store_path_defaults_to_tasks_json() {
        let (_temp_dir, ctx) = setup_test_context();

        let store = ctx.store().unwrap();
        assert_eq!(store.path(), ctx.data_dir().join("tasks.json"));
    }

    #[test]
    fn test_store_path_respects_config_override() {
        let (temp_dir, ctx) = setup_test_context();

        let override_path = temp_dir.path().join("elsewhere").join("todo.json");
        let config_content = format!("tasks_file = {:?}\n", override_path);
        fs::write(ctx.data_dir().join("config.toml"), config_content).unwrap();

        let store = ctx.store().unwrap();
        assert_eq!(store.path(), override_path);
    }

    #[test]
    fn test_data_dir_access() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().to_path_buf();
        let ctx = ExecutionContext::new(data_dir.clone());

        assert_eq!(
            ctx.data_dir(),
            data_dir.as_path(),
            "data_dir() should return correct path"
        );
    }
}
