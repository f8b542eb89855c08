pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    ChatClient, ChatEvent, ChatSession, ChatState, GenerateReplyUseCase, SubmitOutcome,
    TurnGateway,
};

pub use cli::Commands;

pub use connector::{
    Container, ContainerConfig, GeminiClient, HttpTurnGateway, MockChatClient, GENERATE_PATH,
};

pub use domain::{
    DomainError, GenerationConfig, Instruction, Speaker, Transcript, Turn, UpstreamChat,
    UpstreamMessage,
};
