//! Chain handlers: `/start` greeting and the voice reply pipeline.

mod start;
mod voice_reply;

pub use start::{StartHandler, GREETING, START_COMMAND};
pub use voice_reply::VoiceReplyHandler;
