//! Address filter construction.

use corecast_proto::AddressFilter;

/// Wraps `ids` in an [`AddressFilter`], or `None` when there is nothing to
/// filter on. Order and contents are preserved as given.
pub fn address_filter(ids: &[String]) -> Option<AddressFilter> {
    if ids.is_empty() {
        return None;
    }
    Some(AddressFilter {
        addresses: ids.to_vec(),
    })
}
