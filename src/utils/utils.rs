use std::io;
use std::time::Instant;
use indicatif::{ProgressBar, ProgressStyle};
use log;

pub fn setup_logging(log_level: &str) -> io::Result<()> {
    let log_level_filter = match log_level {
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .format_target(false)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Failed to initialise logging: {}", e)))
}

/// 將 ISO 時間戳中的 `:`、`.`、`-` 換成底線，讓它可以作為目錄名稱
pub fn sanitize_timestamp(timestamp: &str) -> String {
    timestamp.replace([':', '.', '-'], "_")
}

pub struct ProgressManager {
    pb: ProgressBar,
    no_progress: bool,
    start: Instant,
}

impl ProgressManager {
    pub fn new(total: u64, no_progress: bool) -> Self {
        let pb = if no_progress {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new(total);
            match ProgressStyle::default_bar().template("{msg} [{bar:40}] {pos}/{len} ETA: {eta_precise}") {
                Ok(style) => pb.set_style(style.progress_chars("##-")),
                Err(e) => log::warn!("Invalid progress template: {}", e),
            }
            pb
        };
        ProgressManager {
            pb,
            no_progress,
            start: Instant::now(),
        }
    }

    /// 輸出狀態列到 stdout；進度條可見時先暫停繪製以免畫面錯亂
    pub fn println(&self, msg: impl AsRef<str>) {
        if self.no_progress || self.pb.is_hidden() {
            println!("{}", msg.as_ref());
        } else {
            self.pb.suspend(|| println!("{}", msg.as_ref()));
        }
    }

    pub fn inc(&self, file_name: &str) {
        if self.no_progress {
            return;
        }
        self.pb.set_message(file_name.to_string());
        self.pb.inc(1);
    }

    pub fn finish(&self, converted: usize, errors: usize) {
        if self.no_progress {
            return;
        }
        let elapsed = self.start.elapsed().as_secs_f64();
        self.pb.finish_with_message(format!(
            "Done: {} converted, {} errors in {:.1}s",
            converted, errors, elapsed
        ));
    }
}

pub fn create_progress_bar(total: u64, no_progress: bool) -> ProgressManager {
    ProgressManager::new(total, no_progress)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_replaces_every_separator() {
        assert_eq!(sanitize_timestamp("2024-05-01T10:20:30.123Z"), "2024_05_01T10_20_30_123Z");
        assert_eq!(sanitize_timestamp("plain"), "plain");
    }

    #[test]
    fn hidden_progress_still_prints() {
        let pm = create_progress_bar(2, true);
        pm.println("status line");
        pm.inc("a.webp");
        pm.finish(1, 1);
    }
}
