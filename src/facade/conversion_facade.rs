use std::fs;
use std::io;
use std::path::Path;
use log::{error, info};
use rayon::prelude::*;
use crate::action::interactive::confirm_batch;
use crate::config::config::{validate_input_dir, validate_input_file, OutputFormat};
use crate::config::ports::{AppConfig, RunMode};
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{BatchOptions, ConversionOutput, ConversionRequest, ConversionResult, RunSummary};
use crate::service::file::output_path_for;
use crate::service::traits::i_service::{FileServiceTrait, ImageServiceTrait};
use crate::utils::utils::{create_progress_bar, ProgressManager};

pub struct ConversionFacade {
    file_service: Box<dyn FileServiceTrait>,
    image_service: Box<dyn ImageServiceTrait>,
}

impl ConversionFacade {
    pub fn new(
        file_service: Box<dyn FileServiceTrait>,
        image_service: Box<dyn ImageServiceTrait>,
    ) -> Self {
        ConversionFacade {
            file_service,
            image_service,
        }
    }
}

impl ConversionFacadeTrait for ConversionFacade {
    fn execute_conversion(&self, config: &AppConfig) -> io::Result<ConversionOutput> {
        match &config.mode {
            RunMode::SingleFile(path) => {
                let result = self.convert_single(path, config.format)?;
                Ok(ConversionOutput::Single(result))
            }
            RunMode::Directory(dir) => {
                let options = BatchOptions {
                    jobs: config.jobs,
                    no_progress: config.no_progress,
                    interactive: config.interactive,
                };
                self.convert_directory(dir, config.format, &options)
            }
        }
    }
}

impl ConversionFacade {
    /// 單檔模式：輸出到與檔案同層的 `converted` 目錄
    pub fn convert_single(&self, path: &Path, format: OutputFormat) -> io::Result<ConversionResult> {
        validate_input_file(path)?;
        let output_folder = self.file_service.create_converted_folder(path)?;
        let pm = create_progress_bar(1, true);
        let result = self.convert_into(path, &output_folder, format, &pm);
        if result.success {
            println!("Saved to: {}", result.output_path.display());
        }
        Ok(result)
    }

    /// 目錄模式：個別檔案失敗不會中斷整批，只有目錄不存在是致命錯誤
    pub fn convert_directory(
        &self,
        dir: &Path,
        format: OutputFormat,
        options: &BatchOptions,
    ) -> io::Result<ConversionOutput> {
        validate_input_dir(dir)?;
        let output_folder = self.file_service.create_run_folder(dir)?;

        println!("Input folder: {}", dir.display());
        println!("Output folder: {}", output_folder.display());
        println!("Output format: {}", format);

        let mut summary = RunSummary {
            output_folder: output_folder.clone(),
            ..Default::default()
        };

        let files = match self.file_service.collect_webp_files(dir) {
            Ok(files) => files,
            Err(e) => {
                error!("Error reading input folder: {}", e);
                return Ok(ConversionOutput::Directory(summary));
            }
        };
        summary.found_count = files.len();
        println!("Found {} WebP files to convert.", files.len());

        if files.is_empty() {
            println!("No WebP files found to process.");
            return Ok(ConversionOutput::Directory(summary));
        }

        if options.interactive && !confirm_batch(files.len(), format)? {
            println!("Conversion cancelled.");
            return Ok(ConversionOutput::Cancelled);
        }

        let pm = create_progress_bar(files.len() as u64, options.no_progress);
        let results = if options.jobs <= 1 {
            files
                .iter()
                .map(|file| self.convert_into(file, &output_folder, format, &pm))
                .collect::<Vec<_>>()
        } else {
            info!("Converting with {} workers", options.jobs);
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(options.jobs)
                .build()
                .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Failed to start worker pool: {}", e)))?;
            pool.install(|| {
                files
                    .par_iter()
                    .map(|file| self.convert_into(file, &output_folder, format, &pm))
                    .collect::<Vec<_>>()
            })
        };

        for result in &results {
            summary.record(result);
        }
        pm.finish(summary.processed_count, summary.error_count);
        println!(
            "\nConversion complete. {} files converted, {} errors.",
            summary.processed_count, summary.error_count
        );
        Ok(ConversionOutput::Directory(summary))
    }

    // 轉換單一檔案並寫入輸出目錄，錯誤只記錄在結果中
    fn convert_into(
        &self,
        source: &Path,
        output_folder: &Path,
        format: OutputFormat,
        pm: &ProgressManager,
    ) -> ConversionResult {
        let request = ConversionRequest {
            source_path: source.to_path_buf(),
            target_format: format,
        };
        let output_path = output_path_for(source, output_folder, format);
        let file_name = display_name(source);
        pm.println(format!("Converting: {}", file_name));

        let outcome = self
            .image_service
            .convert(&request)
            .and_then(|bytes| fs::write(&output_path, bytes));
        pm.inc(&file_name);

        match outcome {
            Ok(()) => {
                pm.println(format!(
                    "Successfully converted: {} -> {}",
                    file_name,
                    display_name(&output_path)
                ));
                ConversionResult {
                    source_path: request.source_path,
                    output_path,
                    success: true,
                    error: None,
                }
            }
            Err(e) => {
                error!("Error converting {}: {}", file_name, e);
                ConversionResult {
                    source_path: request.source_path,
                    output_path,
                    success: false,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
