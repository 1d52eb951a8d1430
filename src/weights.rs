//! Analyzer weights with optional hot-reload from config/weights.json.
//!
//! JSON shape (all fields optional, defaults shown):
//! {
//!   "w_instagram_category": 0.6,
//!   "w_bio": 0.4,
//!   "w_primary": 1.0,
//!   "w_secondary": 0.4
//! }
//!
//! The two fusion weights combine the classifier's per-account signals into
//! one strength scalar; the two category weights decide how much of that
//! strength lands on the primary vs. secondary category. They are plain data
//! passed into the engine, never ambient globals, so tests can run with
//! alternate sets.
//!
//! On each `current()` call we check the file's modified time and reload if
//! changed.

use serde::Deserialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::RwLock,
    time::SystemTime,
};

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct AnalyzerWeights {
    /// Weight of the signal derived from the platform's own category field.
    #[serde(default = "default_w_instagram_category")]
    pub w_instagram_category: f64,
    /// Weight of the signal derived from the account bio.
    #[serde(default = "default_w_bio")]
    pub w_bio: f64,
    /// Share of the fused strength credited to the primary category.
    #[serde(default = "default_w_primary")]
    pub w_primary: f64,
    /// Share of the fused strength credited to the secondary category.
    #[serde(default = "default_w_secondary")]
    pub w_secondary: f64,
}

fn default_w_instagram_category() -> f64 {
    0.6
}
fn default_w_bio() -> f64 {
    0.4
}
fn default_w_primary() -> f64 {
    1.0
}
fn default_w_secondary() -> f64 {
    0.4
}

impl Default for AnalyzerWeights {
    fn default() -> Self {
        Self {
            w_instagram_category: default_w_instagram_category(),
            w_bio: default_w_bio(),
            w_primary: default_w_primary(),
            w_secondary: default_w_secondary(),
        }
    }
}

/// Hot-reload wrapper: reloads when the config file mtime changes.
#[derive(Debug)]
pub struct HotReloadWeights {
    path: PathBuf,
    inner: RwLock<State>,
}

#[derive(Debug)]
struct State {
    weights: AnalyzerWeights,
    last_modified: Option<SystemTime>,
}

impl HotReloadWeights {
    /// Create with a path (defaults to "config/weights.json" if `None`).
    pub fn new(path: Option<&Path>) -> Self {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("config/weights.json"));
        Self {
            path,
            inner: RwLock::new(State {
                weights: AnalyzerWeights::default(),
                last_modified: None,
            }),
        }
    }

    /// Get the latest weights, reloading if the config file changed.
    pub fn current(&self) -> AnalyzerWeights {
        // Fast path: check metadata without grabbing write lock yet.
        let needs_reload = match fs::metadata(&self.path).and_then(|m| m.modified()) {
            Ok(mtime) => {
                let guard = self.inner.read().unwrap();
                guard.last_modified != Some(mtime)
            }
            Err(_) => {
                // If file isn't there, we keep defaults; no reload.
                false
            }
        };

        if !needs_reload {
            return self.inner.read().unwrap().weights;
        }

        // Slow path: reload with write lock.
        let mut guard = self.inner.write().unwrap();
        // Double-check in case of races.
        if let Ok(meta) = fs::metadata(&self.path) {
            if let Ok(mtime) = meta.modified() {
                if guard.last_modified != Some(mtime) {
                    if let Ok(w) = load_weights_file(&self.path) {
                        guard.weights = w;
                        guard.last_modified = Some(mtime);
                    }
                }
            }
        }
        guard.weights
    }
}

/// Load weights directly (no caching). Public for tests/tools.
pub fn load_weights_file(path: &Path) -> io::Result<AnalyzerWeights> {
    let bytes = fs::read(path)?;
    let w: AnalyzerWeights = serde_json::from_slice(&bytes)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(w)
}
