mod chat_client;
mod turn_gateway;

pub use chat_client::*;
pub use turn_gateway::*;
