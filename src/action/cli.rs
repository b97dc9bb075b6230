use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use clap::Parser;
use crate::config::config::{normalize_format, Cli};
use crate::config::ports::{AppConfig, ConfigPort, RunMode};
use crate::facade::conversion_facade::ConversionFacade;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::service::config_service::{ConfigService, DefaultConfigAdapter};
use crate::service::file::FileService;
use crate::service::image::ImageService;
use crate::utils::utils::setup_logging;

pub fn process_args(args: Vec<String>) -> io::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config_port: Box<dyn ConfigPort> = if args.len() <= 1 {
        setup_logging("info")?;
        Box::new(DefaultConfigAdapter::new(cwd))
    } else {
        let cli = Cli::parse_from(args);
        Box::new(CliConfigAdapter::new(cli, cwd))
    };
    run(ConfigService::new(config_port))
}

pub fn run(config_service: ConfigService) -> io::Result<ExitCode> {
    let config = config_service.get_config()?;
    log::info!("Resolved configuration: {:?}", config);

    let facade: Box<dyn ConversionFacadeTrait> = Box::new(ConversionFacade::new(
        Box::new(FileService::new()),
        Box::new(ImageService::new()),
    ));
    let output = facade.execute_conversion(&config)?;
    Ok(output.exit_code())
}

/// 由命令列參數決定執行模式；位置參數（單一檔案）優先於 --input
pub fn resolve_config(cli: &Cli, cwd: &Path) -> AppConfig {
    let mode = match (&cli.file, &cli.input) {
        (Some(file), input) => {
            if let Some(input) = input {
                log::info!("Single file given, ignoring --input {}", input);
            }
            RunMode::SingleFile(PathBuf::from(file))
        }
        (None, Some(input)) => RunMode::Directory(PathBuf::from(input)),
        (None, None) => RunMode::Directory(cwd.to_path_buf()),
    };

    AppConfig {
        mode,
        format: normalize_format(&cli.format),
        jobs: cli.jobs.max(1),
        no_progress: cli.no_progress,
        interactive: cli.interactive,
        log_level: cli.log_level.clone(),
    }
}

// CLI 配置適配器
pub struct CliConfigAdapter {
    cli: Cli,
    cwd: PathBuf,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli, cwd: PathBuf) -> Self {
        CliConfigAdapter { cli, cwd }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        setup_logging(&self.cli.log_level)?;
        Ok(resolve_config(&self.cli, &self.cwd))
    }
}
