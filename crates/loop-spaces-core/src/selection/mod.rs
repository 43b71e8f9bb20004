mod key;
mod session;

pub use {
    key::{KeyDisposition, SelectionKey},
    session::{CancelCallback, CommitCallback, SelectionSession},
};
