//! Test context for unified test setup
//!
//! Every context owns its own temporary data directory, so tests never see
//! each other's record files.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use EventDesk::config::{Settings, StorageConfig};
use EventDesk::handlers::{run_session, Console, SessionOutcome};
use EventDesk::ServiceFactory;

use super::init_test_env;

pub struct TestContext {
    pub temp_dir: TempDir,
    pub settings: Settings,
    pub services: ServiceFactory,
}

impl TestContext {
    /// Empty data directory with default file names
    pub fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        init_test_env();

        let temp_dir = tempfile::tempdir()?;
        let settings = Settings {
            storage: StorageConfig::in_dir(temp_dir.path().join("data")),
            ..Settings::default()
        };
        let services = ServiceFactory::new(&settings);

        Ok(Self {
            temp_dir,
            settings,
            services,
        })
    }

    /// Context with event and registration files already written
    pub fn with_records(events: &[&str], registrations: &[&str]) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let ctx = Self::new()?;
        ctx.write_events(events);
        ctx.write_registrations(registrations);
        Ok(ctx)
    }

    pub fn storage(&self) -> &StorageConfig {
        &self.settings.storage
    }

    fn write(path: PathBuf, lines: &[&str]) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create data dir");
        }
        let mut content = lines.join("\n");
        if !lines.is_empty() {
            content.push('\n');
        }
        fs::write(path, content).expect("write fixture");
    }

    pub fn write_events(&self, lines: &[&str]) {
        Self::write(self.storage().events_path(), lines);
    }

    pub fn write_registrations(&self, lines: &[&str]) {
        Self::write(self.storage().registrations_path(), lines);
    }

    pub fn write_users(&self, lines: &[&str]) {
        Self::write(self.storage().users_path(), lines);
    }

    fn read(path: PathBuf) -> Vec<String> {
        match fs::read_to_string(path) {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn event_lines(&self) -> Vec<String> {
        Self::read(self.storage().events_path())
    }

    pub fn registration_lines(&self) -> Vec<String> {
        Self::read(self.storage().registrations_path())
    }

    pub fn user_lines(&self) -> Vec<String> {
        Self::read(self.storage().users_path())
    }

    /// Run a scripted console session, returning its outcome and everything
    /// it printed
    pub fn run_script(&self, input: &str) -> (SessionOutcome, String) {
        let mut console = Console::new(input.as_bytes(), Vec::new());
        let outcome = run_session(&mut console, &self.services).expect("session failed");
        let output = String::from_utf8(console.into_output()).expect("utf-8 output");
        (outcome, output)
    }
}
