use std::io;
use std::path::{Path, PathBuf};
use crate::models::conversion::ConversionRequest;

// File 服務接口，負責檔案收集與輸出目錄
pub trait FileServiceTrait: Send + Sync {
    /// 收集目錄下（不遞迴）副檔名為 .webp 的檔案
    /// # 參數
    /// - dir: 輸入目錄
    /// # 回傳
    /// - 成功時返回依檔案系統列舉順序的檔案列表，失敗時返回 IO 錯誤
    fn collect_webp_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;

    /// 在輸入目錄內建立本次執行專用的輸出目錄
    /// # 參數
    /// - dir: 輸入目錄
    /// # 回傳
    /// - 成功時返回新建立的目錄路徑，失敗時返回 IO 錯誤
    fn create_run_folder(&self, dir: &Path) -> io::Result<PathBuf>;

    /// 建立單檔模式的 converted 目錄（與輸入檔案同層）
    fn create_converted_folder(&self, file: &Path) -> io::Result<PathBuf>;
}

// Image 服務接口，負責實際的影像解碼與編碼
pub trait ImageServiceTrait: Send + Sync {
    /// 將 WebP 檔案轉換為目標格式
    /// # 參數
    /// - request: 來源路徑與目標格式
    /// # 回傳
    /// - 成功時返回編碼後的影像位元組，失敗時返回 IO 錯誤
    fn convert(&self, request: &ConversionRequest) -> io::Result<Vec<u8>>;
}
