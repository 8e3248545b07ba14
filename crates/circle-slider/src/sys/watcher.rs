use crate::events::AppEvent;
use async_channel::Sender;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};

fn is_config_change(event: &Event, config_path: &Path) -> bool {
    matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    ) && event.paths.iter().any(|p| p == config_path)
}

/// Sends `ConfigReload` whenever the config file is written, created or
/// removed. The parent directory is watched so editors that swap the file
/// out are still seen.
pub async fn run_async_watcher(tx: Sender<AppEvent>, config_path: PathBuf) {
    let config_path = match std::path::absolute(&config_path) {
        Ok(p) => p,
        Err(e) => {
            log::error!("Config watcher error: {}", e);
            return;
        }
    };
    let Some(config_dir) = config_path.parent().map(Path::to_path_buf) else {
        return;
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();
    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", e);
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch {}: {}", config_dir.display(), e);
        return;
    }
    log::debug!("Watching {} for changes", config_path.display());

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) if is_config_change(&event, &config_path) => {
                if tx.send(AppEvent::ConfigReload).await.is_err() {
                    break;
                }
            }
            Ok(_) => {}
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, CreateKind, ModifyKind};

    #[test]
    fn test_config_change_filter() {
        let path = Path::new("/tmp/circle-slider/config.toml");

        let modify = Event::new(EventKind::Modify(ModifyKind::Any)).add_path(path.to_path_buf());
        assert!(is_config_change(&modify, path));

        let create = Event::new(EventKind::Create(CreateKind::File)).add_path(path.to_path_buf());
        assert!(is_config_change(&create, path));

        let other = Event::new(EventKind::Modify(ModifyKind::Any))
            .add_path(PathBuf::from("/tmp/circle-slider/other.toml"));
        assert!(!is_config_change(&other, path));

        let access = Event::new(EventKind::Access(AccessKind::Any)).add_path(path.to_path_buf());
        assert!(!is_config_change(&access, path));
    }
}
