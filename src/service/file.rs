use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use chrono::{DateTime, SecondsFormat, Utc};
use log::{info, warn};
use walkdir::WalkDir;
use crate::config::config::{is_webp_path, OutputFormat};
use crate::service::traits::i_service::FileServiceTrait;
use crate::utils::utils::sanitize_timestamp;

const CONVERTED_FOLDER: &str = "converted";
const RUN_FOLDER_PREFIX: &str = "output_";

/// File 服務，負責列舉輸入檔案並建立輸出目錄
pub struct FileService;

impl FileService {
    pub fn new() -> Self {
        FileService
    }
}

impl Default for FileService {
    fn default() -> Self {
        Self::new()
    }
}

impl FileServiceTrait for FileService {
    fn collect_webp_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    // 讀不到目錄本身才是致命錯誤，單一項目失敗則略過
                    if e.depth() == 0 {
                        return Err(e.into());
                    }
                    warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                    continue;
                }
            };
            if entry.file_type().is_file() && is_webp_path(entry.path()) {
                files.push(entry.into_path());
            }
        }
        info!("Collected {} WebP files from {}", files.len(), dir.display());
        Ok(files)
    }

    fn create_run_folder(&self, dir: &Path) -> io::Result<PathBuf> {
        create_run_folder_at(dir, Utc::now())
    }

    fn create_converted_folder(&self, file: &Path) -> io::Result<PathBuf> {
        let parent = file.parent().unwrap_or_else(|| Path::new(""));
        let folder = parent.join(CONVERTED_FOLDER);
        fs::create_dir_all(&folder)?;
        Ok(folder)
    }
}

/// 依時間戳產生輸出目錄名稱，例如 `output_2024_05_01T10_20_30_123Z`
pub fn run_folder_name(now: DateTime<Utc>) -> String {
    let timestamp = now.to_rfc3339_opts(SecondsFormat::Millis, true);
    format!("{}{}", RUN_FOLDER_PREFIX, sanitize_timestamp(&timestamp))
}

/// 建立輸出目錄；同名目錄已存在時附加 `_1`、`_2` 等後綴，確保每次執行不會共用目錄
pub fn create_run_folder_at(dir: &Path, now: DateTime<Utc>) -> io::Result<PathBuf> {
    let base = run_folder_name(now);
    let mut suffix = 0usize;
    loop {
        let name = if suffix == 0 {
            base.clone()
        } else {
            format!("{}_{}", base, suffix)
        };
        let candidate = dir.join(name);
        match fs::create_dir(&candidate) {
            Ok(()) => return Ok(candidate),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => suffix += 1,
            Err(e) => return Err(e),
        }
    }
}

/// `<folder>/<原檔名去副檔名>.<format>`
pub fn output_path_for(source: &Path, folder: &Path, format: OutputFormat) -> PathBuf {
    let mut name: OsString = source
        .file_stem()
        .map(|stem| stem.to_os_string())
        .unwrap_or_default();
    name.push(".");
    name.push(format.extension());
    folder.join(name)
}
