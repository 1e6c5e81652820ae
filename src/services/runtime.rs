//! Tokio Runtime Bridge
//!
//! GPUI drives the window on its own executor, while timers and reqwest need
//! tokio. One multi-threaded runtime is created at startup and every service
//! task is spawned onto it; results travel back over the event channel.
//!
//! ```text
//! GPUI controller
//!       │ ticket
//!       ▼
//! spawn_named_in_tokio(async { sleep; fetch })
//!       │ AppEvent
//!       ▼
//! workspace event pump -> entity update
//! ```

use std::future::Future;
use std::sync::OnceLock;

use tokio::runtime::{Builder, Runtime};
use tracing::{debug, error};

static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Create the global runtime. Calling it again returns the existing one.
pub fn init_runtime() -> std::io::Result<&'static Runtime> {
    if let Some(runtime) = TOKIO_RUNTIME.get() {
        return Ok(runtime);
    }
    let runtime = Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("mdt-tokio")
        .enable_all()
        .build()?;
    Ok(TOKIO_RUNTIME.get_or_init(|| runtime))
}

/// Spawn a detached, named task on the runtime
pub fn spawn_named_in_tokio<F>(name: &'static str, future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    let Some(runtime) = TOKIO_RUNTIME.get() else {
        error!("Tokio runtime not initialised, dropping task {name}");
        return;
    };
    debug!("Spawning tokio task: {name}");
    runtime.spawn(async move {
        future.await;
        debug!("Tokio task completed: {name}");
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_spawned_task_runs() {
        init_runtime().expect("runtime");
        let flag = Arc::new(AtomicBool::new(false));
        let (tx, rx) = std::sync::mpsc::channel();

        let task_flag = flag.clone();
        spawn_named_in_tokio("test", async move {
            task_flag.store(true, Ordering::SeqCst);
            let _ = tx.send(());
        });

        rx.recv_timeout(std::time::Duration::from_secs(5)).expect("task ran");
        assert!(flag.load(Ordering::SeqCst));
    }
}
