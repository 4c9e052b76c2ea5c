//!
//! The structured JSON-RPC error.
//!

///
/// The structured JSON-RPC error returned by the node.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RpcError {
    /// The error code.
    pub code: i64,
    /// The error message.
    pub message: String,
}

impl RpcError {
    /// The code of a rejected transaction, as used by Ethereum-compatible nodes.
    pub const CODE_TRANSACTION_REJECTED: i64 = -32003;

    /// The message of a transfer exceeding the sender balance.
    pub const MESSAGE_INSUFFICIENT_FUNDS: &'static str = "insufficient funds for transfer";

    ///
    /// A shortcut constructor.
    ///
    pub fn new<S>(code: i64, message: S) -> Self
    where
        S: ToString,
    {
        Self {
            code,
            message: message.to_string(),
        }
    }

    ///
    /// The error a node reports for a transfer exceeding the sender balance.
    ///
    pub fn insufficient_funds() -> Self {
        Self::new(
            Self::CODE_TRANSACTION_REJECTED,
            Self::MESSAGE_INSUFFICIENT_FUNDS,
        )
    }
}

impl From<jsonrpc_core::Error> for RpcError {
    fn from(error: jsonrpc_core::Error) -> Self {
        Self {
            code: error.code.code(),
            message: error.message,
        }
    }
}

impl std::fmt::Display for RpcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{'code': {}, 'message': '{}'}}",
            self.code, self.message
        )
    }
}
