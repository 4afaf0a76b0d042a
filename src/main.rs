mod fetcher;

use clap::Parser;
use fetcher::fetch;
use serde_json::Value;

/// Fetch JSON data from a specified URL.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The URL to fetch data from
    #[arg(short, long, env = "FETCH_JSON_URL")]
    url: String,
}

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    // Failures are reported by the fetcher; the process still exits 0.
    let data = fetch(&args.url);
    println!("{}", render(data.as_ref()));
}

/// `None` marks a failed fetch, distinct from a JSON `null` body.
fn render(data: Option<&Value>) -> String {
    match data {
        Some(value) => value.to_string(),
        None => "None".to_string(),
    }
}
