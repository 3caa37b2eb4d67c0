use std::process::ExitCode;

use getjson::HttpGetClient;
use serde_json::Value;

// Fetches a URL and pretty-prints the JSON document it returns.
//
//   RUST_LOG=debug cargo run --example fetch_json -- https://httpbin.org/json
fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();

    let Some(url) = std::env::args().nth(1) else {
        eprintln!("usage: fetch_json <url>");
        return Ok(ExitCode::from(2));
    };

    let client = HttpGetClient::new(url);

    // The failure diagnostic has already been printed by the client
    let Some(doc) = client.json() else {
        return Ok(ExitCode::FAILURE);
    };

    println!("{}", serde_json::to_string_pretty(&Value::from(doc))?);
    Ok(ExitCode::SUCCESS)
}
