//! Named chaincodes — function-name dispatch onto the contract services.
//!
//! An invocation names a chaincode, a function, and string arguments, as
//! submitted by a client. Each chaincode decodes the arguments, builds
//! its contract over the store it is handed for this transaction, and
//! returns the response payload:
//!
//! | Chaincode | Function | Arguments | Payload |
//! |-----------|----------|-----------|---------|
//! | `hospital_basicInfo` | `InitLedger` | — | empty |
//! | | `Save` | key, name, mobile, identity | empty |
//! | | `QueryInfo` / `Query` | key | `BasicInfo` JSON |
//! | `hospital_recordInfo` | `InitLedger` | — | empty |
//! | | `Save` | key, sickName, drug list (JSON array), identity | empty |
//! | | `QueryRecord` / `Query` | key | `MedicalRecord` JSON |
//! | | `QueryHistoryRecord` / `QueryHistory` | key | `HistoryResult` JSON |

use medledger_hostapi::StateStore;
use medledger_primitives::{TxContext, BASIC_INFO_CHAINCODE, RECORD_INFO_CHAINCODE};

use crate::basic_info::BasicInfoContract;
use crate::config::ContractConfig;
use crate::error::{ContractError, ContractResult};
use crate::medical_record::MedicalRecordContract;
use crate::validation::{expect_arity, parse_string_list, to_payload};

/// A contract exposed under a name with string-argument functions.
pub trait Chaincode: Send + Sync {
    /// Name clients address this chaincode by.
    fn name(&self) -> &str;

    /// Run `function` against `store` on behalf of the transaction `ctx`.
    fn invoke(
        &self,
        ctx: &TxContext,
        store: &dyn StateStore,
        function: &str,
        args: &[String],
    ) -> ContractResult<Vec<u8>>;
}

fn unknown(chaincode: &str, function: &str) -> ContractError {
    ContractError::UnknownFunction {
        chaincode: chaincode.to_owned(),
        function: function.to_owned(),
    }
}

/// `hospital_basicInfo`: patient basic info.
#[derive(Debug, Clone, Default)]
pub struct BasicInfoChaincode {
    config: ContractConfig,
}

impl BasicInfoChaincode {
    pub fn new(config: ContractConfig) -> Self {
        Self { config }
    }
}

impl Chaincode for BasicInfoChaincode {
    fn name(&self) -> &str {
        BASIC_INFO_CHAINCODE
    }

    fn invoke(
        &self,
        ctx: &TxContext,
        store: &dyn StateStore,
        function: &str,
        args: &[String],
    ) -> ContractResult<Vec<u8>> {
        let contract = BasicInfoContract::with_config(store, self.config.clone());
        match function {
            "InitLedger" => {
                expect_arity(function, args, 0)?;
                contract.init_ledger(ctx)?;
                Ok(Vec::new())
            }
            "Save" => {
                expect_arity(function, args, 4)?;
                contract.save(ctx, &args[0], &args[1], &args[2], &args[3])?;
                Ok(Vec::new())
            }
            "QueryInfo" | "Query" => {
                expect_arity(function, args, 1)?;
                to_payload(&contract.query(ctx, &args[0])?)
            }
            _ => Err(unknown(self.name(), function)),
        }
    }
}

/// `hospital_recordInfo`: medical records and their history.
#[derive(Debug, Clone, Default)]
pub struct RecordInfoChaincode {
    config: ContractConfig,
}

impl RecordInfoChaincode {
    pub fn new(config: ContractConfig) -> Self {
        Self { config }
    }
}

impl Chaincode for RecordInfoChaincode {
    fn name(&self) -> &str {
        RECORD_INFO_CHAINCODE
    }

    fn invoke(
        &self,
        ctx: &TxContext,
        store: &dyn StateStore,
        function: &str,
        args: &[String],
    ) -> ContractResult<Vec<u8>> {
        let contract = MedicalRecordContract::with_config(store, self.config.clone());
        match function {
            "InitLedger" => {
                expect_arity(function, args, 0)?;
                contract.init_ledger(ctx)?;
                Ok(Vec::new())
            }
            "Save" => {
                expect_arity(function, args, 4)?;
                let drug_names = parse_string_list("drugName", &args[2])?;
                contract.save(ctx, &args[0], &args[1], drug_names, &args[3])?;
                Ok(Vec::new())
            }
            "QueryRecord" | "Query" => {
                expect_arity(function, args, 1)?;
                to_payload(&contract.query(ctx, &args[0])?)
            }
            "QueryHistoryRecord" | "QueryHistory" => {
                expect_arity(function, args, 1)?;
                to_payload(&contract.query_history(ctx, &args[0])?)
            }
            _ => Err(unknown(self.name(), function)),
        }
    }
}
