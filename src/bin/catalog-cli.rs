use catalog_service::CatalogItem;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "catalog-cli")]
#[command(about = "Command-line client for the Catalog Service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8000", env = "CATALOG_URL")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the service is up
    Health,
    /// Print the aggregated catalog
    Catalog {
        /// Print raw JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let base = cli.url.trim_end_matches('/');
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Health => {
            let res = client.get(format!("{}/", base)).send().await?;
            let status = res.status();
            println!("{} {}", status, res.text().await?);
        }
        Commands::Catalog { json } => {
            let res = client.get(format!("{}/catalog", base)).send().await?;
            let status = res.status();
            if !status.is_success() {
                eprintln!("Error: catalog returned status {}", status);
                if let Ok(text) = res.text().await {
                    eprintln!("Response: {}", text);
                }
                std::process::exit(1);
            }

            let items: Vec<CatalogItem> = res.json().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else {
                print_table(&items);
            }
        }
    }

    Ok(())
}

fn print_table(items: &[CatalogItem]) {
    println!("{:>6}  {:<40}  {:<18}  {:>4}  {}", "ID", "TITLE", "ISBN", "YEAR", "AUTHOR");
    for item in items {
        println!(
            "{:>6}  {:<40}  {:<18}  {:>4}  {}",
            item.book.id, item.book.title, item.book.isbn, item.book.publication_year, item.author_name
        );
    }
    println!("{} item(s)", items.len());
}
