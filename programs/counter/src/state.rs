//! Program state

use {
    bytemuck::{Pod, Zeroable},
    solana_pubkey::Pubkey,
    spl_pod::primitives::PodU64,
};

/// Counter
///
/// The counter account is identified by a client-generated keypair rather
/// than a PDA, so one wallet may own any number of independent counters.
/// The keypair signs only the `Initialize` transaction; afterwards every
/// mutation is gated on the recorded `authority`.
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Counter {
    /// Current value of the counter
    pub count: PodU64,
    /// Key permitted to mutate the counter after initialization
    pub authority: Pubkey,
}

impl Counter {
    /// Serialized size of a counter account
    pub const LEN: usize = std::mem::size_of::<Counter>();
}
