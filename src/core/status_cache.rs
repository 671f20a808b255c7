//! Time-limited memoization of per-path status codes.
//!
//! This module provides [`StatusCache`], a process-wide map from the literal path
//! string to its last computed [`StatusCode`] and an expiry instant. The host builds
//! one cache and hands it to the dispatcher; nothing here is global state.
//!
//! # Cache Strategy
//! - **Lazy expiry**: stale entries are never purged, only replaced on the next lookup
//! - **Literal keys**: `a/b` and `a//b` are different entries even if they name one file
//! - **Error fallback**: a failed check is reported once and cached as clean, so hosts
//!   polling every frame do not re-spawn a failing tool
//! - **Injected clock**: [`Clock`] lets tests step time deterministically

use crate::core::error::Result;
use crate::core::notify::Notifier;
use crate::core::status_code::StatusCode;
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to
#[derive(Debug)]
pub struct ManualClock {
    origin: Instant,
    offset: Mutex<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Mutex::new(Duration::ZERO),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut offset = self.offset.lock().unwrap_or_else(|e| e.into_inner());
        *offset += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        let offset = *self.offset.lock().unwrap_or_else(|e| e.into_inner());
        self.origin + offset
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CacheEntry {
    status: StatusCode,
    expires_at: Instant,
}

pub struct StatusCache {
    ttl: Duration,
    clock: Box<dyn Clock>,
    verbose: bool,
    entries: Mutex<HashMap<OsString, CacheEntry>>,
}

impl StatusCache {
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Box::new(SystemClock))
    }

    pub fn with_clock(ttl: Duration, clock: Box<dyn Clock>) -> Self {
        Self {
            ttl,
            clock,
            verbose: false,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Report lookup timing at info level instead of debug
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the live cached status for `path`, or run `check` and cache its result.
    ///
    /// Errors from `check` go to `notifier` and are cached as [`StatusCode::CLEAN`].
    /// The lock is held across the check so a miss is computed and stored atomically.
    pub fn get_status<F>(&self, path: &Path, notifier: &dyn Notifier, check: F) -> StatusCode
    where
        F: FnOnce() -> Result<StatusCode>,
    {
        let key = path.as_os_str().to_os_string();
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());

        let now = self.clock.now();
        if let Some(entry) = entries.get(&key) {
            if now < entry.expires_at {
                self.trace(format_args!("Fetching cached status for {}", path.display()));
                return entry.status;
            }
        }

        let started = Instant::now();
        let status = match check() {
            Ok(status) => status,
            Err(e) => {
                log::warn!("Status check failed for {}: {e}", path.display());
                notifier.error(&e.to_string());
                StatusCode::CLEAN
            }
        };

        entries.insert(
            key,
            CacheEntry {
                status,
                expires_at: self.clock.now() + self.ttl,
            },
        );

        self.trace(format_args!(
            "Fetching status for {} in {:?}",
            path.display(),
            started.elapsed()
        ));

        status
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn trace(&self, message: std::fmt::Arguments<'_>) {
        if self.verbose {
            log::info!("{message}");
        } else {
            log::debug!("{message}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::TortoiseError;
    use crate::core::notify::RecordingNotifier;
    use std::cell::Cell;

    fn cache_with_clock(ttl_secs: u64) -> (StatusCache, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new());
        let cache = StatusCache::with_clock(
            Duration::from_secs(ttl_secs),
            Box::new(Arc::clone(&clock)),
        );
        (cache, clock)
    }

    #[test]
    fn test_second_lookup_within_ttl_is_cached() {
        let (cache, clock) = cache_with_clock(5);
        let notifier = RecordingNotifier::default();
        let calls = Cell::new(0);
        let path = Path::new("/repo/src/foo.txt");

        let check = || {
            calls.set(calls.get() + 1);
            Ok(StatusCode::MODIFIED)
        };
        assert_eq!(cache.get_status(path, &notifier, check), StatusCode::MODIFIED);

        clock.advance(Duration::from_secs(4));
        let check = || {
            calls.set(calls.get() + 1);
            Ok(StatusCode::ADDED)
        };
        assert_eq!(cache.get_status(path, &notifier, check), StatusCode::MODIFIED);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_expired_entry_is_recomputed_once() {
        let (cache, clock) = cache_with_clock(5);
        let notifier = RecordingNotifier::default();
        let calls = Cell::new(0);
        let path = Path::new("/repo/src/foo.txt");

        cache.get_status(path, &notifier, || Ok(StatusCode::MODIFIED));
        clock.advance(Duration::from_secs(5));

        let refreshed = cache.get_status(path, &notifier, || {
            calls.set(calls.get() + 1);
            Ok(StatusCode::CLEAN)
        });
        assert_eq!(refreshed, StatusCode::CLEAN);
        assert_eq!(calls.get(), 1);

        // The refreshed entry carries a new expiry
        clock.advance(Duration::from_secs(4));
        let cached = cache.get_status(path, &notifier, || {
            calls.set(calls.get() + 1);
            Ok(StatusCode::DELETED)
        });
        assert_eq!(cached, StatusCode::CLEAN);
        assert_eq!(calls.get(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_failed_check_is_reported_and_cached_as_clean() {
        let (cache, _clock) = cache_with_clock(5);
        let notifier = RecordingNotifier::default();
        let path = Path::new("/repo/broken.txt");

        let status = cache.get_status(path, &notifier, || {
            Err(TortoiseError::process_spawn(
                "/missing/svn",
                std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            ))
        });
        assert_eq!(status, StatusCode::CLEAN);
        assert_eq!(notifier.messages().len(), 1);
        assert!(notifier.messages()[0].contains("/missing/svn"));

        // Cached fallback: no second report
        let status = cache.get_status(path, &notifier, || Ok(StatusCode::MODIFIED));
        assert_eq!(status, StatusCode::CLEAN);
        assert_eq!(notifier.messages().len(), 1);
    }

    #[test]
    fn test_keys_are_literal_path_strings() {
        let (cache, _clock) = cache_with_clock(5);
        let notifier = RecordingNotifier::default();
        let calls = Cell::new(0);

        for path in ["/repo/src/foo.txt", "/repo//src/foo.txt", "/repo/src/./foo.txt"] {
            cache.get_status(Path::new(path), &notifier, || {
                calls.set(calls.get() + 1);
                Ok(StatusCode::MODIFIED)
            });
        }

        assert_eq!(calls.get(), 3);
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn test_zero_ttl_never_hits() {
        let (cache, _clock) = cache_with_clock(0);
        let notifier = RecordingNotifier::default();
        let calls = Cell::new(0);
        let path = Path::new("/repo/a.txt");

        for _ in 0..2 {
            cache.get_status(path, &notifier, || {
                calls.set(calls.get() + 1);
                Ok(StatusCode::CLEAN)
            });
        }
        assert_eq!(calls.get(), 2);
    }
}
