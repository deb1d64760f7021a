use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

pub const MAX_WORKERS: usize = 16;

#[derive(Debug)]
pub enum WorkerPoolError {
    ZeroWorkers,
    Build(ThreadPoolBuildError),
}

impl fmt::Display for WorkerPoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWorkers => write!(f, "worker pool needs at least one worker"),
            Self::Build(err) => write!(f, "failed to build worker pool: {}", err),
        }
    }
}

impl Error for WorkerPoolError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ZeroWorkers => None,
            Self::Build(err) => Some(err),
        }
    }
}

impl From<ThreadPoolBuildError> for WorkerPoolError {
    fn from(err: ThreadPoolBuildError) -> Self {
        Self::Build(err)
    }
}

/// Logical CPU count, clamped to `1..=MAX_WORKERS`.
#[must_use]
pub fn default_worker_count() -> usize {
    num_cpus::get().clamp(1, MAX_WORKERS)
}

/// Fixed-size pool built once and reused for every grid computation.
///
/// Each row of the output is a disjoint slice handed to exactly one worker,
/// so the parallel phase needs no locking and the merged result is already in
/// row-major pixel order.
#[derive(Debug)]
pub struct WorkerPool {
    pool: ThreadPool,
    workers: usize,
}

impl WorkerPool {
    pub fn new(workers: usize) -> Result<Self, WorkerPoolError> {
        if workers == 0 {
            return Err(WorkerPoolError::ZeroWorkers);
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|index| format!("fractal-worker-{}", index))
            .build()?;

        log::debug!("worker pool started with {} workers", workers);

        Ok(Self { pool, workers })
    }

    pub fn with_default_size() -> Result<Self, WorkerPoolError> {
        Self::new(default_worker_count())
    }

    #[must_use]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Runs `algorithm` over every pixel; stops at the first failure.
    pub fn generate<Alg>(&self, algorithm: &Alg) -> Result<Vec<Alg::Success>, Alg::Failure>
    where
        Alg: FractalAlgorithm + Sync,
        Alg::Success: Send + Copy + Default,
        Alg::Failure: Send,
    {
        let resolution = algorithm.resolution();
        let width = resolution.width() as usize;
        let mut results = vec![Alg::Success::default(); resolution.pixel_count()];

        self.pool.install(|| {
            results
                .par_chunks_mut(width)
                .enumerate()
                .try_for_each(|(y, row)| -> Result<(), Alg::Failure> {
                    for (x, slot) in row.iter_mut().enumerate() {
                        *slot = algorithm.compute(Point {
                            x: x as i32,
                            y: y as i32,
                        })?;
                    }
                    Ok(())
                })
        })?;

        Ok(results)
    }
}
