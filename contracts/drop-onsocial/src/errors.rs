use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub enum DropError {
    InvalidStage(String),
    InvalidPayment(String),
    NotEligible,
    AlreadyMinted,
    AlreadyCommitted,
    NotCommitted,
    AlreadyRevealed,
    RevealTooEarly(String),
    InvalidSecret,
    UnapprovedOperation(String),
    SubcallFailed(String),
    Unauthorized(String),
    NothingToWithdraw,
    InsufficientBalance(String),
    WithdrawalFailed(String),
    InvalidInput(String),
}

impl std::fmt::Display for DropError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStage(msg) => write!(f, "Invalid stage: {}", msg),
            Self::InvalidPayment(msg) => write!(f, "Invalid payment: {}", msg),
            Self::NotEligible => write!(f, "Not eligible: allowlist proof rejected"),
            Self::AlreadyMinted => write!(f, "Already minted: allowlist entry consumed"),
            Self::AlreadyCommitted => write!(f, "Already committed"),
            Self::NotCommitted => write!(f, "Not committed"),
            Self::AlreadyRevealed => write!(f, "Already revealed"),
            Self::RevealTooEarly(msg) => write!(f, "Reveal too early: {}", msg),
            Self::InvalidSecret => write!(f, "Invalid secret: commitment mismatch"),
            Self::UnapprovedOperation(msg) => write!(f, "Unapproved operation: {}", msg),
            Self::SubcallFailed(msg) => write!(f, "Subcall failed: {}", msg),
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::NothingToWithdraw => write!(f, "Nothing to withdraw"),
            Self::InsufficientBalance(msg) => write!(f, "Insufficient balance: {}", msg),
            Self::WithdrawalFailed(msg) => write!(f, "Withdrawal failed: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl DropError {
    pub fn only_owner(what: &str) -> Self {
        Self::Unauthorized(format!("Only {} can perform this action", what))
    }
    pub fn invalid_stage(expected: crate::Stage, actual: crate::Stage) -> Self {
        Self::InvalidStage(format!("expected {:?}, current stage is {:?}", expected, actual))
    }
    pub fn invalid_payment(expected: u128, attached: u128) -> Self {
        Self::InvalidPayment(format!(
            "expected exactly {} yoctoNEAR, attached {}",
            expected, attached
        ))
    }
    pub fn invalid_token_id(token_id: &str) -> Self {
        Self::InvalidInput(format!("Token ID {} is outside the collection", token_id))
    }
}
