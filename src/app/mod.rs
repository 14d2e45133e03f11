mod history;
mod root;

pub(crate) use history::{FetchStatus, HistoryKey, HistoryLoader};

pub use root::App;
