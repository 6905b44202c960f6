//! Content hashing for loaded record sets.

use xxhash_rust::xxh3::xxh3_64;

use crate::model::OrderRecord;

/// Deterministic xxh3 hash over a record set's fields.
///
/// Field bytes are length-delimited (NUL-separated IDs, bit-exact floats)
/// so reordered or edited rows always produce a different hash. Used by the
/// store to detect whether a reload actually changed anything.
#[must_use]
pub fn records_hash(records: &[OrderRecord]) -> u64 {
    let mut buf = Vec::new();
    for record in records {
        buf.extend_from_slice(record.factory.as_bytes());
        buf.push(0);
        buf.extend_from_slice(record.product.as_bytes());
        buf.push(0);
        buf.extend_from_slice(record.warehouse.as_bytes());
        buf.push(0);
        buf.extend_from_slice(&record.demand.to_bits().to_le_bytes());
        buf.extend_from_slice(&record.delay.to_bits().to_le_bytes());
        buf.push(u8::from(record.sustainable));
    }
    xxh3_64(&buf)
}
