use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
#[cfg(test)]
pub mod tests;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    /// File holding the persisted saved-locations collection.
    #[arg(long)]
    #[arg(default_value = "saved_locations.json")]
    pub favorites_file: PathBuf,
    #[arg(long)]
    #[arg(default_values_t = [
        String::from("http://127.0.0.1:3000"),
        String::from("http://localhost:3000"),
    ])]
    pub allowed_origins: Vec<String>,
}
