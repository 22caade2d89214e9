//! nimbus-ingest Client Binary
//!
//! One-shot command-line driver for the ingestion protocol.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use nimbus_ingest::network::Client;
use nimbus_ingest::protocol;

/// nimbus-ingest client
#[derive(Parser, Debug)]
#[command(name = "nimbus-client")]
#[command(about = "Sends one customer record to the ingestion server")]
#[command(version)]
struct Args {
    /// Server address
    #[arg(short, long, default_value = "127.0.0.1:5784")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Send a customer record
    Send {
        /// Customer name
        name: String,

        /// Email address
        email: String,

        /// Phone number (11 digits)
        phone: String,

        /// Age in years
        age: String,
    },

    /// Send an arbitrary raw line (useful for driving the validator)
    Raw {
        /// The line to send, without terminator
        line: String,
    },
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).init();

    let args = Args::parse();

    let message = match &args.command {
        Commands::Send {
            name,
            email,
            phone,
            age,
        } => format!("{},{},{},{}", name, email, phone, age),
        Commands::Raw { line } => line.clone(),
    };

    let client = Client::new(&args.server);
    match client.send(&message) {
        Ok(reply) => {
            println!("{}", reply);
            if reply != protocol::OK_LINE {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    }
}
