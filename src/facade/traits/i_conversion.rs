use std::io;
use crate::config::ports::AppConfig;
use crate::models::conversion::ConversionOutput;

// Facade 接口，負責協調檔案轉換流程
pub trait ConversionFacadeTrait: Send + Sync {
    /// 依配置執行單檔或目錄轉換
    /// # 參數
    /// - config: 已解析的應用配置
    /// # 回傳
    /// - 成功時返回轉換結果；前置條件不符（檔案或目錄不存在、非 WebP）時返回 IO 錯誤
    fn execute_conversion(&self, config: &AppConfig) -> io::Result<ConversionOutput>;
}
