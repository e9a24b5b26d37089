pub mod engine;
pub mod protocol;
pub mod transport;

pub mod normalizer;
pub mod dispatcher;
pub mod reporter;
pub mod send_guard;

pub mod editor;
pub mod probe;
pub mod diagnostics;
