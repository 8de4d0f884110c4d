//! Counter program
#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod entrypoint;
pub mod error;
pub mod instruction;
pub mod processor;
pub mod state;

solana_pubkey::declare_id!("81XaBkA2RWseHgh5s1BWWk8qwfFAJEVRU3pat6vPhkyU");
