use crate::*;

pub(crate) fn check_one_yocto() -> Result<(), DropError> {
    if env::attached_deposit() != ONE_YOCTO {
        return Err(DropError::InvalidPayment(
            "Requires attached deposit of exactly 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

/// Parses a ledger token id and checks it names a slot of the collection.
pub(crate) fn parse_token_index(token_id: &str) -> Result<u32, DropError> {
    let index: u32 = token_id
        .parse()
        .map_err(|_| DropError::invalid_token_id(token_id))?;
    if index >= MAX_SUPPLY || index.to_string() != token_id {
        return Err(DropError::invalid_token_id(token_id));
    }
    Ok(index)
}

impl Contract {
    pub(crate) fn check_contract_owner(&self, actor_id: &AccountId) -> Result<(), DropError> {
        if actor_id != &self.owner_id {
            return Err(DropError::only_owner("contract owner"));
        }
        Ok(())
    }
}
