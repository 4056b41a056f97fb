use near_contract_standards::non_fungible_token::TokenId;
use near_sdk::serde::{Deserialize, Serialize};
use near_sdk::serde_json::{self, Value};
use near_sdk::{AccountId, near};

use crate::DropError;

/// The only method the relay will dispatch.
pub const TRANSFER_FROM_METHOD: &str = "nft_transfer_from";

#[derive(Serialize, Deserialize)]
#[serde(crate = "near_sdk::serde")]
struct CallEnvelope {
    method: String,
    #[serde(default)]
    args: Value,
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferFromArgs {
    pub from: AccountId,
    pub to: AccountId,
    pub token_id: TokenId,
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferOutcome {
    pub token_id: TokenId,
    pub old_owner_id: AccountId,
    pub new_owner_id: AccountId,
}

/// Closed set of relayable operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RelayCall {
    TransferFrom(TransferFromArgs),
}

impl RelayCall {
    pub fn decode(payload: &[u8]) -> Result<Self, DropError> {
        let envelope: CallEnvelope = serde_json::from_slice(payload).map_err(|_| {
            DropError::UnapprovedOperation("payload is not a method call envelope".into())
        })?;

        match envelope.method.as_str() {
            TRANSFER_FROM_METHOD => {
                let args = serde_json::from_value(envelope.args).map_err(|_| {
                    DropError::SubcallFailed(format!(
                        "malformed {} arguments",
                        TRANSFER_FROM_METHOD
                    ))
                })?;
                Ok(Self::TransferFrom(args))
            }
            other => Err(DropError::UnapprovedOperation(format!(
                "method {} is not relayable",
                other
            ))),
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>, DropError> {
        let envelope = match self {
            Self::TransferFrom(args) => CallEnvelope {
                method: TRANSFER_FROM_METHOD.to_string(),
                args: serde_json::to_value(args).map_err(|_| {
                    DropError::InvalidInput("Failed to encode transfer arguments".into())
                })?,
            },
        };
        serde_json::to_vec(&envelope)
            .map_err(|_| DropError::InvalidInput("Failed to encode payload".into()))
    }
}

impl TransferOutcome {
    pub fn to_bytes(&self) -> Result<Vec<u8>, DropError> {
        serde_json::to_vec(self)
            .map_err(|_| DropError::SubcallFailed("Failed to encode transfer result".into()))
    }
}
