use clap::Parser;
use std::fmt;
use std::io;
use std::path::Path;

const USAGE_EXAMPLES: &str = "Examples:
  webpconvert image.webp                 # Convert single file to jpg
  webpconvert image.webp -f png          # Convert single file to png
  webpconvert -i ./images                # Convert all WebP files in directory
  webpconvert -i ./images -f png         # Convert all WebP files to png
  webpconvert -i ./images -j 4           # Convert with 4 parallel workers";

// 命令列參數
#[derive(Parser, Clone, Debug)]
#[command(
    name = "webpconvert",
    version,
    about = "WebP Converter - Convert WebP images to JPG or PNG",
    long_about = "Convert a single WebP file, or every WebP file in a directory, to JPG or PNG.\nA single file is written to a `converted` folder next to it; a directory run writes to a new `output_<timestamp>` folder inside the directory.",
    after_help = USAGE_EXAMPLES
)]
pub struct Cli {
    /// Single WebP file to convert (takes precedence over --input)
    pub file: Option<String>,
    /// Input directory (default: current directory)
    #[arg(short, long)]
    pub input: Option<String>,
    /// Output format: jpg or png; shorthand j for jpg, p for png
    #[arg(short, long, default_value = "jpg")]
    pub format: String,
    /// Number of files converted concurrently in directory mode
    #[arg(short, long, default_value_t = 1)]
    pub jobs: usize,
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
    /// Ask for confirmation before converting a directory
    #[arg(long, default_value_t = false)]
    pub interactive: bool,
    #[arg(long, default_value = "info", value_parser = ["info", "warn", "error"])]
    pub log_level: String,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Jpg,
    Png,
}

impl OutputFormat {
    /// 嚴格解析格式字串，接受 jpg/png 及縮寫 j/p（不分大小寫）
    pub fn parse_alias(value: &str) -> Option<OutputFormat> {
        match value.to_lowercase().as_str() {
            "jpg" | "j" => Some(OutputFormat::Jpg),
            "png" | "p" => Some(OutputFormat::Png),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Jpg => "jpg",
            OutputFormat::Png => "png",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// 將使用者輸入的格式正規化，無效值記錄警告並回退為 jpg
pub fn normalize_format(value: &str) -> OutputFormat {
    match OutputFormat::parse_alias(value) {
        Some(format) => format,
        None => {
            log::warn!("Invalid format: {}. Using jpg as default.", value);
            OutputFormat::default()
        }
    }
}

pub fn is_webp_path(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("webp"))
        .unwrap_or(false)
}

pub fn validate_input_file(path: &Path) -> io::Result<()> {
    if !path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("File not found: {}", path.display()),
        ));
    }
    if !is_webp_path(path) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("File is not a WebP image: {}", path.display()),
        ));
    }
    Ok(())
}

pub fn validate_input_dir(path: &Path) -> io::Result<()> {
    if !path.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("Directory not found: {}", path.display()),
        ));
    }
    Ok(())
}
