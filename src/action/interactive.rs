use dialoguer::Confirm;
use std::io;
use crate::config::config::OutputFormat;

/// 目錄模式開始前詢問是否轉換（僅在 --interactive 時使用）
pub fn confirm_batch(file_count: usize, format: OutputFormat) -> io::Result<bool> {
    Confirm::new()
        .with_prompt(batch_prompt(file_count, format))
        .default(true)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Confirmation failed: {}", e)))
}

fn batch_prompt(file_count: usize, format: OutputFormat) -> String {
    let noun = if file_count == 1 { "file" } else { "files" };
    format!("Convert {} WebP {} to {}?", file_count, noun, format)
}
