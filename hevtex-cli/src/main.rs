//! hevtex CLI - Command-line interface
//!
//! This binary converts block-compressed DDS textures to PNG. Given a
//! directory it scans recursively and converts everything in parallel
//! behind the H.E.V themed console; given a file it converts that one
//! file to the named output.

use clap::Parser;
use hevtex::logging::{default_log_dir, default_log_file, init_logging};
use hevtex::pipeline::{ConversionJob, ConversionPipeline};
use hevtex::pool::{PoolConfig, ProgressSink, WorkerPool};
use hevtex::scan::discover_jobs;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

mod error;
mod ui;

use error::CliError;

#[derive(Parser)]
#[command(name = "hevtex", version)]
#[command(about = "Convert block-compressed DDS textures to PNG", long_about = None)]
struct Args {
    /// DDS file to convert, or a directory to scan recursively
    input: PathBuf,

    /// Output PNG path (file input) or worker thread count (directory input)
    #[arg(value_name = "OUTPUT|THREADS")]
    second: Option<String>,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(error) => {
            // Help and version go to stdout and exit 0; real usage
            // errors exit 1
            let _ = error.print();
            process::exit(if error.use_stderr() { 1 } else { 0 });
        }
    };

    // Guard keeps the non-blocking log writer alive until exit
    let _logging_guard = match init_logging(default_log_dir(), default_log_file()) {
        Ok(guard) => guard,
        Err(error) => CliError::LoggingInit(error.to_string()).exit(),
    };

    if !args.input.exists() {
        CliError::PathMissing(args.input).exit();
    }

    if args.input.is_dir() {
        tracing::debug!(input = %args.input.display(), "Batch mode");
        run_batch(args);
    } else {
        tracing::debug!(input = %args.input.display(), "Single file mode");
        run_single(args);
    }
}

/// Convert every pending DDS file under the given directory.
fn run_batch(args: Args) {
    let threads = match args.second {
        Some(raw) => match raw.parse::<usize>() {
            Ok(threads) => threads,
            Err(_) => {
                CliError::Config(format!("thread count must be a number, got '{}'", raw)).exit()
            }
        },
        None => PoolConfig::default().threads,
    };
    let config = PoolConfig::default().with_threads(threads);

    ui::boot_sequence();
    ui::announce_threads(config.threads);

    let jobs = discover_jobs(&args.input);
    if jobs.is_empty() {
        ui::no_files_found();
        return;
    }
    ui::announce_total(jobs.len());

    let progress = Arc::new(ui::HevProgressSink::new(jobs.len() as u64));
    let pool = WorkerPool::new(Arc::new(ConversionPipeline::new()))
        .with_config(config)
        .with_progress(Arc::clone(&progress) as Arc<dyn ProgressSink>);

    let outcome = pool.run(jobs);
    progress.finish();
    ui::completion_banner(&outcome);
}

/// Convert one DDS file to the named PNG output.
fn run_single(args: Args) {
    let output = match args.second {
        Some(output) => PathBuf::from(output),
        None => {
            CliError::Config("output path required when converting a single file".to_string())
                .exit()
        }
    };

    let job = ConversionJob::new(&args.input, output);
    match ConversionPipeline::new().convert_file(&job) {
        Ok(report) => {
            println!(
                "Converted {} -> {} ({}x{} {}, {} bytes)",
                job.source.display(),
                job.dest.display(),
                report.width,
                report.height,
                report.format,
                report.png_bytes
            );
        }
        Err(error) => CliError::Convert(error).exit(),
    }
}
