//! Fixed-size worker pool for batch conversion.
//!
//! This module schedules conversion jobs across a fixed set of OS
//! threads sharing one FIFO queue:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        WorkerPool                           │
//! │   enqueue all jobs, then poll the completed counter         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │            Mutex<JobQueue> + Condvar (available)            │
//! │   VecDeque of pending jobs, shutdown flag                   │
//! └─────────────────────────────────────────────────────────────┘
//!            │                 │                 │
//!            ▼                 ▼                 ▼
//! ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────┐
//! │ convert-worker-0 │ │ convert-worker-1 │ │ convert-worker-N │
//! │ pop, run, count  │ │ pop, run, count  │ │ pop, run, count  │
//! └──────────────────┘ └──────────────────┘ └──────────────────┘
//! ```
//!
//! Lifecycle of one `run` call: spawn workers, enqueue every job and
//! wake all sleepers, poll the completed counter until it reaches the
//! batch size, set the shutdown flag, wake sleepers again, join.
//!
//! Workers drain the queue before honoring shutdown, so a batch never
//! loses jobs even if the flag is raised while some are still queued.
//! Failed jobs are counted and logged, never fatal to the batch.

use crate::error::ConvertError;
use crate::pipeline::{ConversionJob, ConversionPipeline};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Interval between checks of the completed counter.
const COMPLETION_POLL: Duration = Duration::from_millis(100);

/// Work executor for the pool, one call per job.
pub trait JobRunner: Send + Sync {
    /// Process one job to completion.
    fn run(&self, job: &ConversionJob) -> Result<(), ConvertError>;
}

impl JobRunner for ConversionPipeline {
    fn run(&self, job: &ConversionJob) -> Result<(), ConvertError> {
        self.convert_file(job).map(|_| ())
    }
}

/// Observer notified after each job finishes, success or not.
pub trait ProgressSink: Send + Sync {
    /// Called with the cumulative completed count for the batch.
    fn on_progress(&self, completed: usize, total: usize);
}

/// Sink that discards all progress updates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProgressSink;

impl ProgressSink for NullProgressSink {
    fn on_progress(&self, _completed: usize, _total: usize) {}
}

/// Configuration for the conversion worker pool.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Number of worker threads (default: number of CPU cores)
    pub threads: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            threads: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
        }
    }
}

impl PoolConfig {
    /// Set the number of worker threads, floored at 1.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }
}

/// Counts for one batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Jobs submitted
    pub total: usize,
    /// Jobs that produced a PNG
    pub succeeded: usize,
    /// Jobs that failed (logged and counted, never fatal)
    pub failed: usize,
}

/// Shared state between the driver and its workers.
struct PoolState {
    queue: Mutex<JobQueue>,
    available: Condvar,
    completed: AtomicUsize,
    failed: AtomicUsize,
}

struct JobQueue {
    jobs: VecDeque<ConversionJob>,
    shutdown: bool,
}

/// Fixed-size pool of conversion workers.
///
/// Workers live for the duration of one [`run`](WorkerPool::run) call;
/// the pool itself is reusable across batches.
pub struct WorkerPool {
    config: PoolConfig,
    runner: Arc<dyn JobRunner>,
    progress: Arc<dyn ProgressSink>,
}

impl WorkerPool {
    /// Create a pool with the default configuration and no progress
    /// reporting.
    pub fn new(runner: Arc<dyn JobRunner>) -> Self {
        Self {
            config: PoolConfig::default(),
            runner,
            progress: Arc::new(NullProgressSink),
        }
    }

    /// Replace the pool configuration.
    pub fn with_config(mut self, config: PoolConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the progress sink.
    pub fn with_progress(mut self, progress: Arc<dyn ProgressSink>) -> Self {
        self.progress = progress;
        self
    }

    /// Run every job in `jobs` to completion and report the counts.
    ///
    /// Blocks until the whole batch has been processed and all workers
    /// have exited.
    pub fn run(&self, jobs: Vec<ConversionJob>) -> BatchOutcome {
        let total = jobs.len();
        let state = Arc::new(PoolState {
            queue: Mutex::new(JobQueue {
                jobs: VecDeque::new(),
                shutdown: false,
            }),
            available: Condvar::new(),
            completed: AtomicUsize::new(0),
            failed: AtomicUsize::new(0),
        });

        info!(threads = self.config.threads, total, "Starting conversion pool");

        let mut workers = Vec::with_capacity(self.config.threads);
        for i in 0..self.config.threads {
            let state = Arc::clone(&state);
            let runner = Arc::clone(&self.runner);
            let progress = Arc::clone(&self.progress);

            let handle = thread::Builder::new()
                .name(format!("convert-worker-{}", i))
                .spawn(move || worker_loop(state, runner, progress, total))
                .expect("Failed to spawn conversion worker thread");
            workers.push(handle);
        }

        {
            let mut queue = state.queue.lock().unwrap();
            queue.jobs.extend(jobs);
            state.available.notify_all();
        }

        while state.completed.load(Ordering::SeqCst) < total {
            thread::sleep(COMPLETION_POLL);
        }

        {
            let mut queue = state.queue.lock().unwrap();
            queue.shutdown = true;
            state.available.notify_all();
        }

        for handle in workers {
            let _ = handle.join();
        }

        let failed = state.failed.load(Ordering::SeqCst);
        let outcome = BatchOutcome {
            total,
            succeeded: total - failed,
            failed,
        };
        info!(
            total = outcome.total,
            succeeded = outcome.succeeded,
            failed = outcome.failed,
            "Conversion pool finished"
        );
        outcome
    }
}

/// Worker thread loop: pop one job at a time until the queue is empty
/// and shutdown has been signaled.
fn worker_loop(
    state: Arc<PoolState>,
    runner: Arc<dyn JobRunner>,
    progress: Arc<dyn ProgressSink>,
    total: usize,
) {
    loop {
        let job = {
            let mut queue = state.queue.lock().unwrap();
            loop {
                if let Some(job) = queue.jobs.pop_front() {
                    break Some(job);
                }
                if queue.shutdown {
                    break None;
                }
                queue = state.available.wait(queue).unwrap();
            }
        };

        let job = match job {
            Some(job) => job,
            None => {
                debug!("Worker draining complete, exiting");
                return;
            }
        };

        if let Err(error) = runner.run(&job) {
            state.failed.fetch_add(1, Ordering::SeqCst);
            warn!(
                source = %job.source.display(),
                error = %error,
                "Conversion failed"
            );
        }
        let done = state.completed.fetch_add(1, Ordering::SeqCst) + 1;
        progress.on_progress(done, total);
    }
}
