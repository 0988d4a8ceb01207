//! Human-readable message lookup contract.

/// Resolves log and error text by message key.
///
/// The core never hardcodes end-user strings beyond field and path constants;
/// everything user-facing goes through this lookup.
#[cfg_attr(test, mockall::automock)]
pub trait MessageSource: Send + Sync {
    /// Resolves a message by key, substituting `{}` placeholders with `args`
    /// in order. Unknown keys resolve to the key itself.
    fn message(&self, key: &str, args: &[String]) -> String;
}
