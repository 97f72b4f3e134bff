use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "vertex-chat", version, about = "Talk to the Vertex chat responder")]
pub struct Cli {
    /// Simulated reply latency in milliseconds. Overrides `VERTEX_CHAT_LATENCY_MS`.
    #[arg(long, global = true)]
    pub latency_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the CLI version.
    Version,

    /// Send one query and print the reply with its links.
    Ask {
        /// Query text. Omit for an empty query.
        #[arg(trailing_var_arg = true)]
        query: Vec<String>,
    },

    /// Record that a link was opened.
    Click {
        /// Link target, recorded verbatim.
        href: String,
    },

    /// Interactive chat over stdin. `:open N` opens link N of the last reply, `:quit` exits.
    Chat,
}
