//! Read-through query cache over a `Connection`.
//!
//! Query results are cached in two levels:
//!
//! - scope: `user:channel:chaincode`, one per chaincode a user reads
//! - field: blake3 digest of the function name and arguments
//!
//! A `QueryCache` is shared by every `CachedConnection` a gateway hands
//! out. A successful invoke on a chaincode drops its whole scope, since
//! any function of that chaincode may now read different state. Failed
//! calls are passed through and never cached.
//!
//! Each scope carries a generation, bumped on every invalidation. A query
//! result is only stored if the generation it was read under is still
//! current, so a read racing an invoke cannot repopulate the scope with
//! pre-invoke state.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::connection::Connection;
use crate::error::GatewayError;

#[derive(Debug, Default)]
struct Scope {
    generation: u64,
    fields: HashMap<String, String>,
}

enum Lookup {
    Hit(String),
    Miss { generation: u64 },
}

/// Query results shared across connections.
#[derive(Debug)]
pub struct QueryCache {
    max_entries: usize,
    scopes: Mutex<HashMap<String, Scope>>,
}

impl QueryCache {
    /// Cache holding up to `max_entries` results per scope.
    /// Zero never stores anything.
    pub fn new(max_entries: usize) -> Self {
        Self {
            max_entries,
            scopes: Mutex::new(HashMap::new()),
        }
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Number of cached results in `scope`.
    pub fn len(&self, scope: &str) -> usize {
        self.scopes.lock().get(scope).map_or(0, |s| s.fields.len())
    }

    /// Drop every cached result.
    pub fn clear(&self) {
        for scope in self.scopes.lock().values_mut() {
            scope.fields.clear();
            scope.generation = scope.generation.wrapping_add(1);
        }
    }

    fn lookup(&self, scope: &str, field: &str) -> Lookup {
        let mut scopes = self.scopes.lock();
        let entry = scopes.entry(scope.to_owned()).or_default();
        match entry.fields.get(field) {
            Some(hit) => Lookup::Hit(hit.clone()),
            None => Lookup::Miss {
                generation: entry.generation,
            },
        }
    }

    /// Store a result read under `generation`. Returns false if the scope
    /// was invalidated since.
    fn insert(&self, scope: &str, field: String, value: String, generation: u64) -> bool {
        if self.max_entries == 0 {
            return false;
        }
        let mut scopes = self.scopes.lock();
        let entry = scopes.entry(scope.to_owned()).or_default();
        if entry.generation != generation {
            return false;
        }
        if entry.fields.len() >= self.max_entries && !entry.fields.contains_key(&field) {
            entry.fields.clear();
        }
        entry.fields.insert(field, value);
        true
    }

    fn invalidate(&self, scope: &str) {
        let mut scopes = self.scopes.lock();
        let entry = scopes.entry(scope.to_owned()).or_default();
        let dropped = entry.fields.len();
        entry.fields.clear();
        entry.generation = entry.generation.wrapping_add(1);
        debug!(scope, dropped, generation = entry.generation, "cache scope invalidated");
    }
}

/// Caching proxy for query results.
pub struct CachedConnection<C> {
    inner: C,
    user_name: String,
    channel_name: String,
    cache: Arc<QueryCache>,
}

impl<C: Connection> CachedConnection<C> {
    /// Wrap `inner`, storing results in `cache`.
    pub fn new(inner: C, user_name: &str, channel_name: &str, cache: Arc<QueryCache>) -> Self {
        Self {
            inner,
            user_name: user_name.to_owned(),
            channel_name: channel_name.to_owned(),
            cache,
        }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn cache(&self) -> &Arc<QueryCache> {
        &self.cache
    }

    /// Number of cached results for `chaincode`.
    pub fn cached(&self, chaincode: &str) -> usize {
        self.cache.len(&self.scope(chaincode))
    }

    fn scope(&self, chaincode: &str) -> String {
        format!("{}:{}:{}", self.user_name, self.channel_name, chaincode)
    }
}

/// Digest identifying a call within a scope.
///
/// Each part is length-prefixed so `("ab", ["c"])` and `("a", ["bc"])`
/// hash differently.
pub fn field_digest(function: &str, args: &[String]) -> String {
    let mut hasher = blake3::Hasher::new();
    for part in std::iter::once(function).chain(args.iter().map(String::as_str)) {
        hasher.update(&(part.len() as u64).to_le_bytes());
        hasher.update(part.as_bytes());
    }
    hasher.finalize().to_hex().to_string()
}

impl<C: Connection> Connection for CachedConnection<C> {
    fn query(
        &self,
        chaincode: &str,
        function: &str,
        args: &[String],
    ) -> Result<String, GatewayError> {
        let scope = self.scope(chaincode);
        let field = field_digest(function, args);

        let generation = match self.cache.lookup(&scope, &field) {
            Lookup::Hit(hit) => {
                debug!(%scope, function, "cache hit");
                return Ok(hit);
            }
            Lookup::Miss { generation } => generation,
        };

        debug!(%scope, function, "cache miss");
        let result = self.inner.query(chaincode, function, args)?;
        if !self.cache.insert(&scope, field, result.clone(), generation) {
            debug!(%scope, function, "result not cached");
        }
        Ok(result)
    }

    fn invoke(
        &self,
        chaincode: &str,
        function: &str,
        args: &[String],
    ) -> Result<String, GatewayError> {
        let result = self.inner.invoke(chaincode, function, args)?;
        self.cache.invalidate(&self.scope(chaincode));
        Ok(result)
    }
}

impl<C> std::fmt::Debug for CachedConnection<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedConnection")
            .field("user_name", &self.user_name)
            .field("channel_name", &self.channel_name)
            .field("max_entries", &self.cache.max_entries())
            .finish_non_exhaustive()
    }
}
