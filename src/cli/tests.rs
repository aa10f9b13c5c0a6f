use crate::cli::Args;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

pub fn fake_args(favorites_file: PathBuf) -> Args {
    Args {
        listen_address: SocketAddr::from_str("0.0.0.0:3030")
            .expect("Failed to construct fake listen address."),
        favorites_file,
        allowed_origins: vec![String::from("http://localhost:3000")],
    }
}
