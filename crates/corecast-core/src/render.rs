//! Rendering helpers shared by the feeds.

use std::fmt;

use corecast_proto::message::{Account, BlockHeader, Currency, TransactionInfo};

/// Base-58 text of a binary identifier. Empty input renders as `""`.
pub fn b58(bytes: &[u8]) -> String {
    bs58::encode(bytes).into_string()
}

/// A message reduced to the fields an operator reads.
pub trait EventSummary: fmt::Debug + Send {
    /// Slot of the block carrying the event, `0` when the block is missing.
    fn slot(&self) -> u64;

    /// Writes the summary as one `info!` event.
    fn emit(&self);
}

// Accessors over optional nested parts. A missing part renders as its zero value.

pub(crate) fn slot_of(block: Option<&BlockHeader>) -> u64 {
    block.map_or(0, |b| b.slot)
}

pub(crate) fn signature_of(tx: Option<&TransactionInfo>) -> String {
    tx.map(|t| b58(&t.signature)).unwrap_or_default()
}

pub(crate) fn tx_index_of(tx: Option<&TransactionInfo>) -> u32 {
    tx.map_or(0, |t| t.index)
}

pub(crate) fn success_of(tx: Option<&TransactionInfo>) -> bool {
    tx.and_then(|t| t.status.as_ref()).is_some_and(|s| s.success)
}

pub(crate) fn mint_of(currency: Option<&Currency>) -> String {
    currency.map(|c| b58(&c.mint_address)).unwrap_or_default()
}

pub(crate) fn account_of(account: Option<&Account>) -> String {
    account.map(|a| b58(&a.address)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn b58_known_vectors() {
        assert_eq!(b58(&[]), "");
        assert_eq!(b58(&[0]), "1");
        assert_eq!(b58(b"hello world"), "StV1DL6CwTryKyV");
        // System program id.
        assert_eq!(b58(&[0u8; 32]), "11111111111111111111111111111111");
    }

    #[test]
    fn missing_parts_render_as_zero_values() {
        assert_eq!(slot_of(None), 0);
        assert_eq!(signature_of(None), "");
        assert_eq!(tx_index_of(None), 0);
        assert!(!success_of(None));
        assert_eq!(mint_of(None), "");
        assert_eq!(account_of(None), "");
    }

    #[test]
    fn success_requires_status() {
        let tx = TransactionInfo::default();
        assert!(!success_of(Some(&tx)));
    }
}
