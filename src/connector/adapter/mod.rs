mod gemini_client;
mod http_turn_gateway;
mod mock_chat_client;

pub use gemini_client::*;
pub use http_turn_gateway::*;
pub use mock_chat_client::*;
