use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::{sync::mpsc, task::JoinHandle};
use tracing::{debug, error, info, warn};

/// Bursts of filesystem events closer together than this collapse into one
/// reload notification.
const DEBOUNCE: Duration = Duration::from_millis(250);

/// Watches the config file and sends a notification after every change.
///
/// The parent directory is watched rather than the file itself so editors
/// that save by renaming a temp file over the original are still picked up.
/// Dropping the watcher stops the background task.
///
/// # Example
/// ```no_run
/// # async fn demo() {
/// let (_watcher, mut rx) = flame_config::ConfigWatcher::spawn("/home/user/.config/flame/flame.toml");
/// while rx.recv().await.is_some() {
///     println!("config changed — reloading");
/// }
/// # }
/// ```
pub struct ConfigWatcher {
    path: PathBuf,
    task: JoinHandle<()>,
}

impl ConfigWatcher {
    /// Spawn a filesystem watcher for `path`.
    /// Returns the watcher handle and a receiver that fires on every detected change.
    pub fn spawn(path: impl AsRef<Path>) -> (Self, mpsc::Receiver<()>) {
        let (tx, rx) = mpsc::channel(1);
        let path = path.as_ref().to_path_buf();
        let task = tokio::spawn(watch_loop(path.clone(), tx));

        (Self { path, task }, rx)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ConfigWatcher {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn watch_loop(path: PathBuf, tx: mpsc::Sender<()>) {
    use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

    let Some(dir) = path.parent().map(Path::to_path_buf) else {
        error!("Config path '{}' has no parent directory", path.display());
        return;
    };

    let (event_tx, mut event_rx) = mpsc::channel::<notify::Result<Event>>(16);

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = event_tx.blocking_send(res);
        },
        Config::default().with_poll_interval(Duration::from_secs(2)),
    ) {
        Ok(w) => w,
        Err(e) => {
            error!("Failed to create filesystem watcher: {e}");
            return;
        }
    };

    if let Err(e) = watcher.watch(&dir, RecursiveMode::NonRecursive) {
        warn!("Cannot watch '{}' (live reload disabled): {e}", dir.display());
        return;
    }

    info!("Watching config file: {}", path.display());

    while let Some(event) = event_rx.recv().await {
        match event {
            Ok(e) if touches(&e, &path) => {
                // Swallow the rest of the burst before notifying.
                tokio::time::sleep(DEBOUNCE).await;
                while event_rx.try_recv().is_ok() {}

                debug!("Config file changed: {}", path.display());
                if tx.send(()).await.is_err() {
                    break; // receiver dropped
                }
            }
            Ok(_) => {}
            Err(e) => warn!("Watcher error: {e}"),
        }
    }
}

/// `true` if `event` is a write/create/rename affecting `path`.
fn touches(event: &notify::Event, path: &Path) -> bool {
    use notify::EventKind::*;
    matches!(event.kind, Modify(_) | Create(_)) && event.paths.iter().any(|p| p == path)
}
