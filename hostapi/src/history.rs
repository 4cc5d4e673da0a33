//! Key history iteration with scoped release.
//!
//! A store hands out a `HistoryIterator` over every version of a key.
//! Backends hold resources (snapshots, cursors) until `close` is called,
//! so callers wrap the iterator in a `HistoryScope`, which closes it on
//! every exit path.

use medledger_primitives::{Timestamp, TxId};
use tracing::warn;

use crate::error::StoreError;

/// One historical version of a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyModification {
    /// Transaction that wrote this version.
    pub tx_id: TxId,
    /// Stored bytes. Empty for deletions.
    pub value: Vec<u8>,
    /// Commit time of the writing transaction.
    pub timestamp: Timestamp,
    /// True if this version deleted the key.
    pub is_delete: bool,
}

/// Single-pass iterator over the versions of one key, oldest first.
///
/// Not restartable: a second pass needs a new `history_for_key` call.
pub trait HistoryIterator: Iterator<Item = Result<KeyModification, StoreError>> + Send {
    /// Release the resources held by this iterator.
    ///
    /// Closing twice is a no-op.
    fn close(&mut self) -> Result<(), StoreError>;
}

/// Owns a `HistoryIterator` and guarantees it is closed.
///
/// Call [`close`](HistoryScope::close) to observe close failures; a scope
/// dropped without it closes the iterator and logs any failure.
pub struct HistoryScope {
    key: String,
    inner: Option<Box<dyn HistoryIterator>>,
}

impl HistoryScope {
    pub fn new(key: &str, inner: Box<dyn HistoryIterator>) -> Self {
        Self {
            key: key.to_owned(),
            inner: Some(inner),
        }
    }

    /// Key whose history this scope iterates.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Close the iterator, reporting any failure.
    pub fn close(mut self) -> Result<(), StoreError> {
        match self.inner.take() {
            Some(mut inner) => inner.close(),
            None => Ok(()),
        }
    }
}

impl Iterator for HistoryScope {
    type Item = Result<KeyModification, StoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }
}

impl Drop for HistoryScope {
    fn drop(&mut self) {
        if let Some(mut inner) = self.inner.take() {
            if let Err(err) = inner.close() {
                warn!(key = %self.key, error = %err, "failed to close history iterator");
            }
        }
    }
}

impl std::fmt::Debug for HistoryScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryScope")
            .field("key", &self.key)
            .field("open", &self.inner.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Iterator over fixed entries that counts close calls.
    struct Fixed {
        entries: std::vec::IntoIter<Result<KeyModification, StoreError>>,
        closes: Arc<AtomicUsize>,
        fail_close: bool,
    }

    impl Iterator for Fixed {
        type Item = Result<KeyModification, StoreError>;
        fn next(&mut self) -> Option<Self::Item> {
            self.entries.next()
        }
    }

    impl HistoryIterator for Fixed {
        fn close(&mut self) -> Result<(), StoreError> {
            self.closes.fetch_add(1, Ordering::SeqCst);
            if self.fail_close {
                Err(StoreError::unavailable("close failed"))
            } else {
                Ok(())
            }
        }
    }

    fn modification(tx: &str, value: &[u8]) -> KeyModification {
        KeyModification {
            tx_id: tx.into(),
            value: value.to_vec(),
            timestamp: 0,
            is_delete: false,
        }
    }

    fn scope(
        entries: Vec<Result<KeyModification, StoreError>>,
        fail_close: bool,
    ) -> (HistoryScope, Arc<AtomicUsize>) {
        let closes = Arc::new(AtomicUsize::new(0));
        let iter = Fixed {
            entries: entries.into_iter(),
            closes: closes.clone(),
            fail_close,
        };
        (HistoryScope::new("r1", Box::new(iter)), closes)
    }

    #[test]
    fn test_explicit_close_runs_once() {
        let (mut scope, closes) = scope(vec![Ok(modification("tx1", b"a"))], false);
        assert_eq!(scope.key(), "r1");
        assert_eq!(scope.next().unwrap().unwrap().tx_id, "tx1");
        assert!(scope.next().is_none());
        scope.close().unwrap();
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_closes() {
        let (scope, closes) = scope(vec![Ok(modification("tx1", b"a"))], false);
        drop(scope);
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_early_return_closes() {
        fn first_error(mut scope: HistoryScope) -> Result<usize, StoreError> {
            let mut seen = 0;
            for entry in scope.by_ref() {
                entry?;
                seen += 1;
            }
            scope.close()?;
            Ok(seen)
        }

        let (scope, closes) = scope(
            vec![
                Ok(modification("tx1", b"a")),
                Err(StoreError::unavailable("peer down")),
                Ok(modification("tx3", b"c")),
            ],
            false,
        );
        assert!(first_error(scope).is_err());
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_close_failure_is_reported() {
        let (scope, closes) = scope(vec![], true);
        assert_eq!(scope.close(), Err(StoreError::unavailable("close failed")));
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_close_failure_on_drop_is_swallowed() {
        let (scope, closes) = scope(vec![], true);
        drop(scope);
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }
}
