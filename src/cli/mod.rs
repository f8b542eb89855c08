mod repl;

use clap::Subcommand;

pub use repl::run_chat;

#[derive(Subcommand)]
pub enum Commands {
    /// Run the tutoring proxy (`POST /api/generate`)
    Serve {
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the server on all network interfaces
        #[arg(long)]
        public: bool,

        /// Answer from an in-process mock instead of calling Gemini
        #[arg(long)]
        mock_upstream: bool,
    },

    /// Chat with a running proxy from the terminal
    Chat {
        /// Proxy base URL
        #[arg(short, long, default_value = "http://127.0.0.1:3000")]
        url: String,
    },
}
