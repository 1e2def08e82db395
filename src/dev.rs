use std::path::Path;

use notify::{Event, Watcher};

use crate::AppState;

pub fn watch_templates(state: AppState) {
    let mut watcher = notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
        if let Ok(event) = res {
            if !(event.kind.is_modify() || event.kind.is_remove() || event.kind.is_create()) {
                return;
            }
            let superstate = state.clone();
            std::thread::spawn(move || superstate.reload_tera());
        }
    })
    .expect("failed to create watcher");
    watcher
        .watch(Path::new("./templates/"), notify::RecursiveMode::Recursive)
        .expect("Failed to watch for template changes");
    // The watcher stops when dropped; it has to live as long as the server.
    std::mem::forget(watcher);
}
