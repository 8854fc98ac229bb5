//! Timed dock sequences.
//!
//! After a ship accepts the pipe, two delays run back to back: the connect
//! delay ends in the `Departing` stage and the depart delay ends in
//! `Launched`. Each sequence is a tokio task whose handle is kept so the
//! sequence can be cancelled when the arena view is torn down.

pub mod manager;
pub mod sequence;
