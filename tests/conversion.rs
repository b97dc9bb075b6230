use std::fs;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use tempfile::TempDir;
use webp_convert::config::config::OutputFormat;
use webp_convert::config::ports::{AppConfig, RunMode};
use webp_convert::facade::conversion_facade::ConversionFacade;
use webp_convert::facade::traits::i_conversion::ConversionFacadeTrait;
use webp_convert::models::conversion::ConversionOutput;
use webp_convert::service::file::FileService;
use webp_convert::service::image::ImageService;

fn write_webp(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| Rgb([(x * 10) as u8, (y * 10) as u8, 90]));
    DynamicImage::ImageRgb8(img)
        .save_with_format(path, ImageFormat::WebP)
        .unwrap();
}

fn facade() -> ConversionFacade {
    ConversionFacade::new(Box::new(FileService::new()), Box::new(ImageService::new()))
}

fn config(mode: RunMode, format: OutputFormat) -> AppConfig {
    AppConfig {
        mode,
        format,
        jobs: 1,
        no_progress: true,
        interactive: false,
        log_level: "error".to_string(),
    }
}

fn run_folders(dir: &Path) -> Vec<PathBuf> {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.is_dir() && path.file_name().unwrap().to_string_lossy().starts_with("output_"))
        .collect()
}

#[test]
fn single_file_is_converted_next_to_the_source() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("Holiday Photo.WEBP");
    write_webp(&source, 16, 9);

    let output = facade()
        .execute_conversion(&config(RunMode::SingleFile(source), OutputFormat::Png))
        .unwrap();
    assert!(output.is_success());

    let converted = dir.path().join("converted").join("Holiday Photo.png");
    let decoded = image::open(&converted).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (16, 9));
}

#[test]
fn non_webp_single_file_is_rejected_without_output() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("picture.jpg");
    fs::write(&source, b"jpeg bytes").unwrap();

    let result = facade().execute_conversion(&config(RunMode::SingleFile(source), OutputFormat::Jpg));
    assert!(result.is_err());
    assert!(!dir.path().join("converted").exists());
}

#[test]
fn corrupt_single_file_fails_the_run() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("broken.webp");
    fs::write(&source, b"definitely not a webp").unwrap();

    let output = facade()
        .execute_conversion(&config(RunMode::SingleFile(source), OutputFormat::Jpg))
        .unwrap();
    assert!(!output.is_success());
    assert!(!dir.path().join("converted").join("broken.jpg").exists());
}

#[test]
fn directory_run_converts_good_files_and_counts_bad_ones() {
    let dir = TempDir::new().unwrap();
    write_webp(&dir.path().join("one.webp"), 8, 8);
    write_webp(&dir.path().join("two.WebP"), 4, 2);
    fs::write(dir.path().join("three.webp"), b"garbage").unwrap();
    fs::write(dir.path().join("notes.txt"), b"ignored").unwrap();

    let output = facade()
        .execute_conversion(&config(RunMode::Directory(dir.path().to_path_buf()), OutputFormat::Jpg))
        .unwrap();
    assert!(output.is_success());

    let summary = match output {
        ConversionOutput::Directory(summary) => summary,
        other => panic!("unexpected output {:?}", other),
    };
    assert_eq!(summary.found_count, 3);
    assert_eq!(summary.processed_count, 2);
    assert_eq!(summary.error_count, 1);
    assert!(summary.output_folder.starts_with(dir.path()));
    assert!(summary.output_folder.join("one.jpg").is_file());
    assert!(summary.output_folder.join("two.jpg").is_file());
    assert!(!summary.output_folder.join("three.jpg").exists());
}

#[test]
fn directory_without_webp_files_still_succeeds() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.png"), b"png").unwrap();

    let output = facade()
        .execute_conversion(&config(RunMode::Directory(dir.path().to_path_buf()), OutputFormat::Png))
        .unwrap();
    match output {
        ConversionOutput::Directory(summary) => {
            assert_eq!(summary.found_count, 0);
            assert_eq!(summary.processed_count + summary.error_count, 0);
        }
        other => panic!("unexpected output {:?}", other),
    }
    assert_eq!(run_folders(dir.path()).len(), 1);
}

#[test]
fn repeated_directory_runs_never_share_a_folder() {
    let dir = TempDir::new().unwrap();
    write_webp(&dir.path().join("pic.webp"), 2, 2);
    let mut cfg = config(RunMode::Directory(dir.path().to_path_buf()), OutputFormat::Png);
    cfg.jobs = 2;

    for _ in 0..3 {
        facade().execute_conversion(&cfg).unwrap();
    }
    let folders = run_folders(dir.path());
    assert_eq!(folders.len(), 3);
    for folder in folders {
        assert!(folder.join("pic.png").is_file());
    }
}

#[test]
fn missing_directory_is_an_error() {
    let dir = TempDir::new().unwrap();
    let result = facade().execute_conversion(&config(
        RunMode::Directory(dir.path().join("absent")),
        OutputFormat::Jpg,
    ));
    assert_eq!(result.unwrap_err().kind(), std::io::ErrorKind::NotFound);
}
