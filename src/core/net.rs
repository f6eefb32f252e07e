// src/core/net.rs
// One blocking HTTP client per run, with an optional time-based response
// cache under the store dir. No module-level client instance; callers
// construct this and pass it down.

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
    time::{Duration, SystemTime},
};

use crate::config::consts::{
    HTTP_CACHE_SUBDIR, HTTP_CACHE_TTL_SECS, REQUEST_TIMEOUT_SECS, STORE_DIR,
};
use crate::core::sanitize::sanitize_bucket_filename;

/// Where cached GET bodies live and how long they count as fresh.
#[derive(Clone, Debug)]
pub struct CacheOptions {
    pub dir: PathBuf,
    pub ttl: Duration,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(STORE_DIR).join(HTTP_CACHE_SUBDIR),
            ttl: Duration::from_secs(HTTP_CACHE_TTL_SECS),
        }
    }
}

pub struct Client {
    http: reqwest::blocking::Client,
    cache: Option<CacheOptions>,
}

impl Client {
    /// `cache: None` disables the response cache entirely.
    pub fn new(cache: Option<CacheOptions>) -> Result<Self, Box<dyn Error>> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("zip_scrape/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, cache })
    }

    pub fn get_text(&self, url: &str) -> Result<String, Box<dyn Error>> {
        let bytes = self.get_bytes(url)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// GET with the cache in front: a fresh copy short-circuits the request;
    /// a fetch error falls back to any stale copy on disk.
    pub fn get_bytes(&self, url: &str) -> Result<Vec<u8>, Box<dyn Error>> {
        let cached = self.cache.as_ref().map(|c| c.dir.join(cache_key(url)));

        if let (Some(c), Some(path)) = (self.cache.as_ref(), cached.as_ref()) {
            if is_fresh(path, c.ttl) {
                logd!("cache hit: {url}");
                return Ok(fs::read(path)?);
            }
        }

        match self.fetch(url) {
            Ok(body) => {
                if let Some(path) = cached.as_ref() {
                    // cache write is best-effort
                    if let Some(parent) = path.parent() {
                        let _ = fs::create_dir_all(parent);
                    }
                    let _ = fs::write(path, &body);
                }
                Ok(body)
            }
            Err(e) => {
                if let Some(path) = cached.as_ref() {
                    if path.exists() {
                        logw!("fetch failed, serving stale cache for {url}: {e}");
                        return Ok(fs::read(path)?);
                    }
                }
                Err(e)
            }
        }
    }

    fn fetch(&self, url: &str) -> Result<Vec<u8>, Box<dyn Error>> {
        logd!("GET {url}");
        let resp = self.http.get(url).send()?.error_for_status()?;
        Ok(resp.bytes()?.to_vec())
    }
}

fn is_fresh(path: &Path, ttl: Duration) -> bool {
    let mtime = match fs::metadata(path).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };
    match SystemTime::now().duration_since(mtime) {
        Ok(age) => age < ttl,
        Err(_) => true, // mtime in the future
    }
}

fn cache_key(url: &str) -> String {
    sanitize_bucket_filename(url, "response")
}
