use std::io;
use std::path::PathBuf;
use crate::config::config::OutputFormat;

// 執行模式：單一檔案或整個目錄
#[derive(Debug, Clone, PartialEq)]
pub enum RunMode {
    SingleFile(PathBuf),
    Directory(PathBuf),
}

// 應用配置結構體，封裝所有參數
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mode: RunMode,
    pub format: OutputFormat,
    pub jobs: usize,
    pub no_progress: bool,
    pub interactive: bool,
    pub log_level: String,
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> io::Result<AppConfig>;
}
