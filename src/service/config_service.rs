use std::io;
use std::path::PathBuf;
use crate::config::config::OutputFormat;
use crate::config::ports::{AppConfig, ConfigPort, RunMode};

// 配置服務，負責選擇適當的配置適配器
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> io::Result<AppConfig> {
        self.config_port.get_config()
    }
}

// 預設配置適配器：未提供任何參數時，轉換目前目錄為 jpg
pub struct DefaultConfigAdapter {
    input: PathBuf,
}

impl DefaultConfigAdapter {
    pub fn new(input: PathBuf) -> Self {
        DefaultConfigAdapter { input }
    }
}

impl ConfigPort for DefaultConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        Ok(AppConfig {
            mode: RunMode::Directory(self.input.clone()),
            format: OutputFormat::Jpg,
            jobs: 1,
            no_progress: false,
            interactive: false,
            log_level: "info".to_string(),
        })
    }
}
