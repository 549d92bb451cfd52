//! Execution engine for running numeric operations over large sequences in parallel.
//!
//! This module sits "above" [`crate::processing`] and provides:
//!
//! - Chunked parallel execution of process / filter / stats on a dedicated rayon pool
//! - Real-time metrics + observer hooks for monitoring
//!
//! Results match the sequential operations, in input order. Float totals in [`Stats`] are summed
//! per chunk, so they can differ from a sequential sum in the last bits.

mod observer;

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::{ProcessingError, ProcessingResult};
use crate::processing::{double_positive, filter_data, summarize, DataProcessor, Stats, Thresholds};
use crate::types::Number;

pub use observer::{
    ExecutionEvent, ExecutionMetrics, ExecutionMetricsSnapshot, ExecutionObserver, Operation,
    StdErrExecutionObserver,
};

/// Configuration for the [`ExecutionEngine`].
#[derive(Debug, Clone)]
pub struct ExecutionOptions {
    /// Number of worker threads used by the engine.
    ///
    /// If `None`, uses the platform's available parallelism.
    pub num_threads: Option<usize>,
    /// Number of values per chunk.
    pub chunk_size: usize,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        Self {
            num_threads: Some(available_parallelism()),
            chunk_size: 4_096,
        }
    }
}

/// A configurable execution engine for numeric sequences.
///
/// Runs on one engine are serialized: if several threads call into the same engine, each run
/// waits for the previous one to finish, so [`ExecutionMetrics`] always describes a single run.
/// Chunks within a run still execute in parallel. Observers must not call back into the engine
/// that emitted the event.
pub struct ExecutionEngine {
    pool: ThreadPool,
    opts: ExecutionOptions,
    observer: Option<Arc<dyn ExecutionObserver>>,
    metrics: Arc<ExecutionMetrics>,
    run_lock: Mutex<()>,
}

impl ExecutionEngine {
    /// Create a new engine with the given options.
    ///
    /// Fails with [`ProcessingError::InvalidOptions`] if `chunk_size == 0` or
    /// `num_threads == Some(0)`.
    pub fn new(opts: ExecutionOptions) -> ProcessingResult<Self> {
        if opts.chunk_size == 0 {
            return Err(ProcessingError::InvalidOptions {
                message: "chunk_size must be > 0".to_string(),
            });
        }
        if opts.num_threads == Some(0) {
            return Err(ProcessingError::InvalidOptions {
                message: "num_threads must be > 0 when set".to_string(),
            });
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(opts.num_threads.unwrap_or_else(available_parallelism))
            .build()?;

        Ok(Self {
            pool,
            opts,
            observer: None,
            metrics: Arc::new(ExecutionMetrics::new()),
            run_lock: Mutex::new(()),
        })
    }

    /// Attach an observer for execution events (metrics/logging).
    pub fn with_observer(mut self, observer: Arc<dyn ExecutionObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// The options this engine was built with.
    pub fn options(&self) -> &ExecutionOptions {
        &self.opts
    }

    /// Get a handle to real-time execution metrics.
    pub fn metrics(&self) -> Arc<ExecutionMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Parallel [`DataProcessor::process`].
    pub fn process_parallel(&self, processor: &DataProcessor) -> Vec<Number> {
        self.run_chunked(Operation::Process, processor.data(), |chunk| {
            let out = double_positive(chunk);
            let len = out.len();
            (out, len)
        })
        .into_iter()
        .flatten()
        .collect()
    }

    /// Parallel [`filter_data`].
    pub fn filter_parallel(&self, data: &[Number], thresholds: Thresholds) -> Vec<Number> {
        self.run_chunked(Operation::Filter, data, |chunk| {
            let out = filter_data(chunk, thresholds);
            let len = out.len();
            (out, len)
        })
        .into_iter()
        .flatten()
        .collect()
    }

    /// Parallel [`DataProcessor::get_stats`].
    pub fn stats(&self, processor: &DataProcessor) -> Stats {
        let partials = self.run_chunked(Operation::Stats, processor.data(), |chunk| {
            let stats = summarize(chunk);
            (stats, stats.count)
        });
        let stats = partials
            .into_iter()
            .fold(Stats::empty(), Stats::combine);
        self.emit(ExecutionEvent::StatsFinished { stats });
        stats
    }

    // Runs `per_chunk` over consecutive chunks of `input`; results come back in input order.
    // `per_chunk` returns the chunk result and its output length (for events).
    fn run_chunked<T, U, F>(&self, op: Operation, input: &[T], per_chunk: F) -> Vec<U>
    where
        T: Sync,
        U: Send,
        F: Fn(&[T]) -> (U, usize) + Sync,
    {
        // Held for the whole run; begin_run resets every counter, so a poisoned lock is reusable.
        let _run = self.run_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let start = Instant::now();
        self.metrics.begin_run();
        self.emit(ExecutionEvent::RunStarted {
            op,
            input_len: input.len(),
        });

        let chunk_size = self.opts.chunk_size;
        let out: Vec<U> = self.pool.install(|| {
            input
                .par_chunks(chunk_size)
                .enumerate()
                .map(|(i, chunk)| {
                    let start_index = i * chunk_size;
                    self.metrics.on_chunk_start(chunk.len());
                    self.emit(ExecutionEvent::ChunkStarted {
                        start_index,
                        len: chunk.len(),
                    });

                    let (result, output_len) = per_chunk(chunk);

                    self.emit(ExecutionEvent::ChunkFinished {
                        start_index,
                        output_len,
                    });
                    self.metrics.on_chunk_end();
                    result
                })
                .collect()
        });

        self.metrics.end_run(start.elapsed());
        self.emit(ExecutionEvent::RunFinished {
            op,
            elapsed: start.elapsed(),
            metrics: self.metrics.snapshot(),
        });
        out
    }

    fn emit(&self, event: ExecutionEvent) {
        if let Some(obs) = &self.observer {
            obs.on_event(&event);
        }
    }
}

fn available_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
