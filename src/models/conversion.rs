use crate::config::config::OutputFormat;
use std::path::PathBuf;
use std::process::ExitCode;

// 單次轉換請求，每個輸入檔案建立一次
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub source_path: PathBuf,
    pub target_format: OutputFormat,
}

// 目錄模式的執行選項
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub jobs: usize,
    pub no_progress: bool,
    pub interactive: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        BatchOptions {
            jobs: 1,
            no_progress: true,
            interactive: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConversionResult {
    pub source_path: PathBuf,
    pub output_path: PathBuf,
    pub success: bool,
    pub error: Option<String>,
}

// 目錄模式的執行摘要
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub found_count: usize,
    pub processed_count: usize,
    pub error_count: usize,
    pub output_folder: PathBuf,
}

impl RunSummary {
    pub fn record(&mut self, result: &ConversionResult) {
        if result.success {
            self.processed_count += 1;
        } else {
            self.error_count += 1;
        }
    }
}

#[derive(Debug)]
pub enum ConversionOutput {
    Single(ConversionResult),
    Directory(RunSummary),
    Cancelled,
}

impl ConversionOutput {
    /// 單檔模式依轉換結果決定；目錄模式不論個別錯誤一律視為成功
    pub fn is_success(&self) -> bool {
        match self {
            ConversionOutput::Single(result) => result.success,
            ConversionOutput::Directory(_) | ConversionOutput::Cancelled => true,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}
