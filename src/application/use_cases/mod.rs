mod chat_session;
mod generate_reply;

pub use chat_session::*;
pub use generate_reply::*;
