//! Per-symbol entry-point cache with double-checked initialization.
//!
//! Every driver call site owns one [`FunctionCache`] static. The first call
//! resolves the symbol from the loaded library and publishes the function
//! pointer; every later call reads the slot without locking. Concurrent
//! first calls serialize inside the cell and exactly one performs the
//! resolution, so no caller ever observes a partially initialized entry.

use once_cell::sync::OnceCell;

use crate::loader::{self, LoadError};

/// A lazily bound driver entry point.
///
/// `T` is the exact `unsafe extern "system" fn` signature declared for the
/// symbol. The slot is assigned at most once for the life of the process;
/// resolution failures are returned to the caller and retried on the next
/// use, which keeps a transiently missing library from poisoning the slot.
pub struct FunctionCache<T> {
    symbol: &'static str,
    slot: OnceCell<T>,
}

impl<T: Copy> FunctionCache<T> {
    /// Declares a cache for `symbol` without resolving anything.
    pub const fn new(symbol: &'static str) -> Self {
        Self {
            symbol,
            slot: OnceCell::new(),
        }
    }

    /// The driver symbol this cache binds.
    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// The entry point, bound on first use.
    ///
    /// # Errors
    ///
    /// [`LoadError::LibraryNotFound`] if the driver library cannot be
    /// loaded, [`LoadError::SymbolMissing`] if this driver version does not
    /// export the symbol.
    pub fn get(&self) -> Result<T, LoadError> {
        let symbol = self.symbol;
        self.get_with(|| {
            let lib = loader::library()?;
            // SAFETY: the cache's declared signature matches the driver's C
            // prototype for this symbol, and the library handle lives for
            // the rest of the process, so the extracted pointer never
            // dangles.
            unsafe {
                lib.get::<T>(symbol.as_bytes())
                    .map(|sym| *sym)
                    .map_err(|_| LoadError::SymbolMissing { symbol })
            }
        })
    }

    /// [`get`](Self::get) with an explicit resolver.
    ///
    /// Exactly one caller runs `resolve` on the uninitialized slot; failures
    /// propagate without publishing, and later callers retry.
    pub fn get_with<E>(&self, resolve: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
        if let Some(f) = self.slot.get() {
            return Ok(*f);
        }
        self.slot.get_or_try_init(resolve).copied()
    }
}

impl<T> std::fmt::Debug for FunctionCache<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionCache")
            .field("symbol", &self.symbol)
            .field("bound", &self.slot.get().is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_resolves_once_and_caches() {
        static CACHE: FunctionCache<usize> = FunctionCache::new("TestSymbol");
        let calls = AtomicUsize::new(0);

        let resolve = || -> Result<usize, ()> {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(42)
        };

        assert_eq!(CACHE.get_with(resolve), Ok(42));
        assert_eq!(CACHE.get_with(resolve), Ok(42));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(CACHE.symbol(), "TestSymbol");
    }

    #[test]
    fn test_failed_resolution_is_retried() {
        static CACHE: FunctionCache<usize> = FunctionCache::new("Flaky");

        assert_eq!(CACHE.get_with(|| Err::<usize, &str>("down")), Err("down"));
        // The slot stays empty after a failure, so the next use resolves.
        assert_eq!(CACHE.get_with(|| Ok::<usize, &str>(7)), Ok(7));
        assert_eq!(CACHE.get_with(|| Err::<usize, &str>("down")), Ok(7));
    }

    #[test]
    fn test_concurrent_first_use_publishes_exactly_once() {
        static CACHE: FunctionCache<usize> = FunctionCache::new("Contended");
        let resolutions = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..64)
            .map(|_| {
                let resolutions = Arc::clone(&resolutions);
                std::thread::spawn(move || {
                    CACHE.get_with(|| -> Result<usize, ()> {
                        resolutions.fetch_add(1, Ordering::SeqCst);
                        Ok(1234)
                    })
                })
            })
            .collect();

        for handle in handles {
            // Every thread observes the same fully published value.
            assert_eq!(handle.join().ok(), Some(Ok(1234)));
        }
        assert_eq!(resolutions.load(Ordering::SeqCst), 1);
    }
}
