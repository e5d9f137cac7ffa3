use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "query-demo-cli")]
#[command(about = "Command-line client for the query-demo endpoints", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:5000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a greeting
    Greet {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        age: Option<i64>,
    },
    /// Run an arithmetic operation
    Calculate {
        #[arg(long, default_value = "add")]
        operation: String,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        y: f64,
    },
    /// Summary statistics over comma-separated numbers
    Stats {
        #[arg(long, default_value = "1,2,3,4,5", allow_hyphen_values = true)]
        numbers: String,
        #[arg(long, default_value = "all")]
        operation: String,
    },
    /// Fetch the sample dataset
    Data {
        #[arg(long, default_value = "json")]
        format: String,
        #[arg(long)]
        limit: Option<i64>,
        #[arg(long)]
        sort: Option<String>,
        #[arg(long)]
        metadata: bool,
    },
    /// Generate random numbers
    Random {
        #[arg(long, default_value_t = 10)]
        count: usize,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value = "uniform")]
        distribution: String,
        #[arg(long)]
        integers: bool,
    },
    /// List available endpoints
    Help,
}

impl Commands {
    /// Path and query pairs for the matching endpoint.
    fn request(&self) -> (&'static str, Vec<(&'static str, String)>) {
        match self {
            Commands::Greet { name, age } => {
                let mut q = Vec::new();
                if let Some(name) = name {
                    q.push(("name", name.clone()));
                }
                if let Some(age) = age {
                    q.push(("age", age.to_string()));
                }
                ("/greet", q)
            }
            Commands::Calculate { operation, x, y } => (
                "/calculate",
                vec![
                    ("operation", operation.clone()),
                    ("x", x.to_string()),
                    ("y", y.to_string()),
                ],
            ),
            Commands::Stats { numbers, operation } => (
                "/stats",
                vec![("numbers", numbers.clone()), ("operation", operation.clone())],
            ),
            Commands::Data { format, limit, sort, metadata } => {
                let mut q = vec![("format", format.clone())];
                if let Some(limit) = limit {
                    q.push(("limit", limit.to_string()));
                }
                if let Some(sort) = sort {
                    q.push(("sort", sort.clone()));
                }
                q.push(("include_metadata", metadata.to_string()));
                ("/data", q)
            }
            Commands::Random { count, seed, distribution, integers } => {
                let mut q = vec![
                    ("count", count.to_string()),
                    ("distribution", distribution.clone()),
                ];
                if let Some(seed) = seed {
                    q.push(("seed", seed.to_string()));
                }
                if *integers {
                    q.push(("format", "integers".to_string()));
                }
                ("/random_enhanced", q)
            }
            Commands::Help => ("/help", Vec::new()),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let (path, query) = cli.command.request();
    let res = client
        .get(format!("{}{}", cli.url.trim_end_matches('/'), path))
        .query(&query)
        .send()
        .await?;

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let is_csv = res
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("text/csv"))
        .unwrap_or(false);

    if !status.is_success() {
        eprintln!("Error: server returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    if is_csv {
        println!("{}", res.text().await?);
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
