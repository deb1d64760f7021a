use crate::controllers::ports::frame_renderer::FrameRenderer;
use crate::controllers::ports::frame_sink::FrameSink;
use crate::controllers::render_worker::events::{FrameData, RenderError, RenderEvent};
use crate::core::navigation::controller::NavigationState;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, NavigationState)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    renderer: Arc<dyn FrameRenderer>,
    sink: Arc<dyn FrameSink>,
}

pub struct RenderWorker {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl RenderWorker {
    pub fn new(renderer: Arc<dyn FrameRenderer>, sink: Arc<dyn FrameSink>) -> std::io::Result<Self> {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            renderer,
            sink,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::Builder::new()
            .name("render-worker".to_string())
            .spawn(move || {
                Self::worker_loop(&worker_shared);
            })?;

        Ok(Self {
            shared,
            worker: Some(worker),
        })
    }

    /// Queues `snapshot`, replacing any request that has not started yet.
    /// Returns the generation assigned to it.
    pub fn submit(&self, snapshot: NavigationState) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self
                .shared
                .latest_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            if let Some((replaced, _)) = guard.replace((generation, snapshot)) {
                log::trace!("request {} superseded by {}", replaced, generation);
            }
        }

        self.shared.wake.notify_one();

        generation
    }

    pub fn shutdown(&mut self) {
        {
            // flag is set under the lock the worker checks it with, so the
            // notify cannot slip in between its check and its wait
            let _guard = self
                .shared
                .latest_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            self.shared.shutdown.store(true, Ordering::Release);
        }
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                log::warn!("render worker panicked before shutdown");
            }
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job_generation, snapshot) = {
                let mut guard = shared
                    .latest_request
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(request) = guard.take() {
                        break request;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            let result = shared.renderer.render(&snapshot);

            let current_generation = shared.generation.load(Ordering::Acquire);
            if job_generation != current_generation {
                log::debug!(
                    "dropping stale render {} (newest is {})",
                    job_generation,
                    current_generation
                );
                continue;
            }

            let event = match result {
                Ok(frame) => RenderEvent::Frame(FrameData {
                    generation: job_generation,
                    frame,
                }),
                Err(err) => {
                    log::warn!("render {} failed: {}", job_generation, err);
                    RenderEvent::Error(RenderError {
                        generation: job_generation,
                        message: err.to_string(),
                    })
                }
            };

            shared.sink.present(event);
            shared
                .last_completed_generation
                .store(job_generation, Ordering::Release);
        }
    }
}

impl Drop for RenderWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::frame::Frame;
    use crate::core::actions::generate_fractal::worker_pool::WorkerPool;
    use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::GeneratePixelBufferError;
    use crate::core::colour_mapping::errors::ColourMapError;
    use crate::core::colour_mapping::settings::ColourSettings;
    use crate::core::data::complex::Complex;
    use crate::core::data::fractal_params::FractalParams;
    use crate::core::data::resolution::Resolution;
    use crate::core::data::viewport::Viewport;
    use std::sync::atomic::AtomicUsize;
    use std::time::{Duration, Instant};

    #[derive(Default)]
    struct MockFrameSink {
        events: Mutex<Vec<RenderEvent>>,
    }

    impl MockFrameSink {
        fn take_events(&self) -> Vec<RenderEvent> {
            let mut guard = self.events.lock().unwrap();
            std::mem::take(&mut *guard)
        }
    }

    impl FrameSink for MockFrameSink {
        fn present(&self, event: RenderEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    /// Wraps a real pool, sleeping before each render and counting calls.
    struct SlowRenderer {
        pool: WorkerPool,
        delay: Duration,
        renders: AtomicUsize,
    }

    impl FrameRenderer for SlowRenderer {
        fn render(&self, snapshot: &NavigationState) -> Result<Frame, GeneratePixelBufferError> {
            self.renders.fetch_add(1, Ordering::SeqCst);
            thread::sleep(self.delay);
            self.pool.render(snapshot)
        }
    }

    struct FailingRenderer {}

    impl FrameRenderer for FailingRenderer {
        fn render(&self, _: &NavigationState) -> Result<Frame, GeneratePixelBufferError> {
            Err(GeneratePixelBufferError::ColourMap(
                ColourMapError::IterationsExceedCap {
                    iterations: 11,
                    iteration_cap: 10,
                },
            ))
        }
    }

    fn snapshot(center_real: f64) -> NavigationState {
        NavigationState {
            viewport: Viewport::new(
                Complex::new(center_real, 0.0),
                Complex::new(center_real - 2.0, 0.0),
                Resolution::new(4, 4).unwrap(),
            )
            .unwrap(),
            params: FractalParams::default(),
            colour: ColourSettings::default(),
        }
    }

    fn wait_for_events(sink: &MockFrameSink, timeout: Duration) -> Vec<RenderEvent> {
        let start = Instant::now();
        loop {
            let events = sink.take_events();
            if !events.is_empty() {
                return events;
            }
            if start.elapsed() >= timeout {
                return events;
            }
            thread::sleep(Duration::from_millis(10));
        }
    }

    fn wait_for_generation(worker: &RenderWorker, generation: u64, timeout: Duration) {
        let start = Instant::now();
        while worker.last_completed_generation() < generation && start.elapsed() < timeout {
            thread::sleep(Duration::from_millis(10));
        }
    }

    fn pool_worker(sink: &Arc<MockFrameSink>) -> RenderWorker {
        RenderWorker::new(
            Arc::new(WorkerPool::new(2).unwrap()),
            Arc::clone(sink) as Arc<dyn FrameSink>,
        )
        .unwrap()
    }

    #[test]
    fn test_submit_emits_frame() {
        let sink = Arc::new(MockFrameSink::default());
        let mut worker = pool_worker(&sink);

        let generation = worker.submit(snapshot(0.0));
        let events = wait_for_events(sink.as_ref(), Duration::from_secs(2));
        assert!(!events.is_empty(), "expected a render event");

        match &events[0] {
            RenderEvent::Frame(data) => {
                assert_eq!(data.generation, generation);
                assert!(generation > 0, "generation should be non-zero");
                assert_eq!(data.frame.pixels.resolution(), Resolution::new(4, 4).unwrap());
                assert_eq!(data.frame.snapshot, snapshot(0.0));
            }
            RenderEvent::Error(error) => panic!("unexpected render error: {}", error),
        }

        worker.shutdown();
    }

    #[test]
    fn test_generation_ids_increment() {
        let sink = Arc::new(MockFrameSink::default());
        let mut worker = pool_worker(&sink);

        worker.submit(snapshot(0.0));
        let events_a = wait_for_events(sink.as_ref(), Duration::from_secs(2));
        assert!(!events_a.is_empty(), "expected events from request A");

        worker.submit(snapshot(0.5));
        let events_b = wait_for_events(sink.as_ref(), Duration::from_secs(2));
        assert!(!events_b.is_empty(), "expected events from request B");

        assert!(events_b[0].generation() > events_a[0].generation());

        worker.shutdown();
    }

    #[test]
    fn test_last_completed_generation_starts_at_zero() {
        let sink = Arc::new(MockFrameSink::default());
        let mut worker = pool_worker(&sink);

        assert_eq!(worker.last_completed_generation(), 0);

        worker.shutdown();
    }

    #[test]
    fn test_error_is_reported_with_its_generation() {
        let sink = Arc::new(MockFrameSink::default());
        let mut worker = RenderWorker::new(
            Arc::new(FailingRenderer {}),
            Arc::clone(&sink) as Arc<dyn FrameSink>,
        )
        .unwrap();

        let generation = worker.submit(snapshot(0.0));
        let events = wait_for_events(sink.as_ref(), Duration::from_secs(2));

        assert!(matches!(
            events.as_slice(),
            [RenderEvent::Error(RenderError { generation: g, .. })] if *g == generation
        ));
        assert_eq!(worker.last_completed_generation(), generation);

        worker.shutdown();
    }

    #[test]
    fn test_rapid_submissions_render_only_newest_and_drop_stale() {
        let sink = Arc::new(MockFrameSink::default());
        let renderer = Arc::new(SlowRenderer {
            pool: WorkerPool::new(1).unwrap(),
            delay: Duration::from_millis(100),
            renders: AtomicUsize::new(0),
        });
        let mut worker = RenderWorker::new(
            Arc::clone(&renderer) as Arc<dyn FrameRenderer>,
            Arc::clone(&sink) as Arc<dyn FrameSink>,
        )
        .unwrap();

        let mut last_generation = 0;
        for step in 0..5 {
            last_generation = worker.submit(snapshot(f64::from(step) * 0.1));
        }

        wait_for_generation(&worker, last_generation, Duration::from_secs(5));
        thread::sleep(Duration::from_millis(50));

        assert_eq!(worker.last_completed_generation(), last_generation);
        assert!(renderer.renders.load(Ordering::SeqCst) <= 2);

        let events = sink.take_events();
        assert_eq!(events.len(), 1, "stale frames must not be presented");
        match &events[0] {
            RenderEvent::Frame(data) => {
                assert_eq!(data.generation, last_generation);
                assert_eq!(data.frame.snapshot, snapshot(f64::from(4) * 0.1));
            }
            RenderEvent::Error(error) => panic!("unexpected render error: {}", error),
        }

        worker.shutdown();
    }

    #[test]
    fn test_presented_generations_strictly_increase() {
        let sink = Arc::new(MockFrameSink::default());
        let mut worker = pool_worker(&sink);

        let mut presented = Vec::new();
        for step in 0..4 {
            let generation = worker.submit(snapshot(f64::from(step)));
            wait_for_generation(&worker, generation, Duration::from_secs(2));
            presented.extend(sink.take_events().iter().map(RenderEvent::generation));
        }

        assert!(!presented.is_empty());
        assert!(presented.windows(2).all(|pair| pair[0] < pair[1]));

        worker.shutdown();
    }

    #[test]
    fn test_immediate_shutdown_never_hangs() {
        let (done_tx, done_rx) = std::sync::mpsc::channel();

        thread::spawn(move || {
            for _ in 0..20_000 {
                let sink: Arc<dyn FrameSink> = Arc::new(MockFrameSink::default());
                let renderer: Arc<dyn FrameRenderer> = Arc::new(FailingRenderer {});
                let mut worker = RenderWorker::new(renderer, sink).unwrap();
                worker.shutdown();
            }
            let _ = done_tx.send(());
        });

        assert!(
            done_rx.recv_timeout(Duration::from_secs(60)).is_ok(),
            "shutdown did not complete"
        );
    }

    #[test]
    fn test_drop_joins_worker() {
        let sink = Arc::new(MockFrameSink::default());
        let worker = pool_worker(&sink);
        worker.submit(snapshot(0.0));

        drop(worker);

        assert!(Arc::strong_count(&sink) == 1);
    }
}
