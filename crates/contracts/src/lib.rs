//! Wire contract and client-side logic of the PrivateGxT document chat.
//!
//! Nothing in this crate touches the browser; the `frontend` crate wires
//! these types to signals, `fetch` and local storage.

pub mod domain;
pub mod shared;
