#![allow(dead_code)]

pub mod recording_sender;
pub mod scripted_source;

pub use recording_sender::RecordingSender;
pub use scripted_source::{ScriptedSource, Step};
