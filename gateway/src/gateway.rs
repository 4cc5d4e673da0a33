//! In-process gateway — routes client calls to registered chaincodes.
//!
//! The `Gateway` struct is the main entry point. It owns the shared state
//! store, the chaincode registry and the query cache, and hands out
//! connections bound to the configured user and channel.
//!
//! Every call runs inside a fresh `OverlayStore`, so a chaincode never
//! writes to the shared store directly. A query drops the overlay; an
//! invoke commits it in one batch once the chaincode has succeeded.

use std::collections::HashMap;
use std::sync::Arc;

use medledger_contracts::{BasicInfoChaincode, Chaincode, RecordInfoChaincode};
use medledger_hostapi::{OverlayStore, StateStore};
use medledger_primitives::TxContext;
use tracing::debug;

use crate::cache::{CachedConnection, QueryCache};
use crate::config::GatewayConfig;
use crate::connection::Connection;
use crate::error::GatewayError;

type Registry = HashMap<String, Arc<dyn Chaincode>>;

/// Chaincode host over one shared state store.
pub struct Gateway {
    config: GatewayConfig,
    store: Arc<dyn StateStore>,
    chaincodes: Registry,
    cache: Option<Arc<QueryCache>>,
}

impl Gateway {
    /// Create a gateway with no chaincodes registered.
    pub fn new(store: Arc<dyn StateStore>, config: GatewayConfig) -> Self {
        let cache = config
            .cache
            .enabled
            .then(|| Arc::new(QueryCache::new(config.cache.max_entries)));
        Self {
            config,
            store,
            chaincodes: HashMap::new(),
            cache,
        }
    }

    /// Create a gateway serving `hospital_basicInfo` and
    /// `hospital_recordInfo` with `config.contract`.
    pub fn with_default_chaincodes(store: Arc<dyn StateStore>, config: GatewayConfig) -> Self {
        let contract = config.contract.clone();
        let mut gateway = Self::new(store, config);
        gateway.register(Arc::new(BasicInfoChaincode::new(contract.clone())));
        gateway.register(Arc::new(RecordInfoChaincode::new(contract)));
        gateway
    }

    /// Register a chaincode under its name, returning any it replaces.
    ///
    /// Connections opened earlier keep the registry they were opened with.
    pub fn register(&mut self, chaincode: Arc<dyn Chaincode>) -> Option<Arc<dyn Chaincode>> {
        self.chaincodes.insert(chaincode.name().to_owned(), chaincode)
    }

    /// Names of the registered chaincodes, sorted.
    pub fn chaincode_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.chaincodes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn StateStore> {
        &self.store
    }

    /// Query cache shared by this gateway's connections, if enabled.
    pub fn cache(&self) -> Option<&Arc<QueryCache>> {
        self.cache.as_ref()
    }

    /// Open a connection for the configured user and channel.
    ///
    /// The connection is wrapped in a `CachedConnection` when the query
    /// cache is enabled. All of them share the gateway's cache, so an
    /// invoke through one connection invalidates what the others cached.
    pub fn connect(&self) -> Arc<dyn Connection> {
        let local = LocalConnection {
            user_name: self.config.user_name.clone(),
            channel_name: self.config.channel_name.clone(),
            msp_id: self.config.msp_id.clone(),
            store: Arc::clone(&self.store),
            chaincodes: self.chaincodes.clone(),
        };

        match &self.cache {
            Some(cache) => Arc::new(CachedConnection::new(
                local,
                &self.config.user_name,
                &self.config.channel_name,
                Arc::clone(cache),
            )),
            None => Arc::new(local),
        }
    }
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("config", &self.config)
            .field("chaincodes", &self.chaincode_names())
            .field("cache", &self.cache)
            .finish()
    }
}

/// Connection that runs chaincodes in this process.
pub struct LocalConnection {
    user_name: String,
    channel_name: String,
    msp_id: String,
    store: Arc<dyn StateStore>,
    chaincodes: Registry,
}

impl LocalConnection {
    fn chaincode(&self, name: &str) -> Result<&Arc<dyn Chaincode>, GatewayError> {
        self.chaincodes
            .get(name)
            .ok_or_else(|| GatewayError::UnknownChaincode(name.to_owned()))
    }

    /// Run one call in its own overlay, committing it when `submit` is set.
    fn execute(
        &self,
        chaincode: &str,
        function: &str,
        args: &[String],
        submit: bool,
    ) -> Result<String, GatewayError> {
        let chaincode = self.chaincode(chaincode)?;
        let ctx = TxContext::new(&self.channel_name, &self.msp_id, &self.user_name);
        let overlay = OverlayStore::new(self.store.as_ref());

        debug!(
            tx_id = %ctx.tx_id,
            chaincode = chaincode.name(),
            function,
            submit,
            "executing"
        );
        let payload = chaincode.invoke(&ctx, &overlay, function, args)?;

        if submit {
            let written = overlay.commit(&ctx)?;
            debug!(tx_id = %ctx.tx_id, written, "committed");
        }

        Ok(String::from_utf8_lossy(&payload).into_owned())
    }
}

impl Connection for LocalConnection {
    fn query(
        &self,
        chaincode: &str,
        function: &str,
        args: &[String],
    ) -> Result<String, GatewayError> {
        self.execute(chaincode, function, args, false)
    }

    fn invoke(
        &self,
        chaincode: &str,
        function: &str,
        args: &[String],
    ) -> Result<String, GatewayError> {
        self.execute(chaincode, function, args, true)
    }
}
