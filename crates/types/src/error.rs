/// Errors the pack engine reports to its caller.
///
/// Both variants represent invalid caller input; the engine has no
/// environmental or transient failure modes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PackError {
    /// The submitted pack size configuration was rejected. The previously
    /// configured sizes remain in effect.
    #[error("invalid pack size configuration: {0}")]
    InvalidConfiguration(String),
    /// The requested quantity was negative.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(i64),
}
