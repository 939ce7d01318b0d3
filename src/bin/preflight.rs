use productos_api::{Config, ConnectionAcquirer};
use tracing_subscriber::EnvFilter;

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight -- [--no-retry]\n\
         \n\
         Reads env vars (all optional):\n\
           DB_HOST, DB_PORT, DB_USER, DB_PASS, DB_NAME\n\
         and checks that the database accepts connections and that the\n\
         `producto` table is readable.\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    let mut config = Config::from_env()?;
    if args.iter().any(|a| a == "--no-retry") {
        config.retry.max_attempts = 1;
    }

    println!("> Preflight:");
    println!("  DB_HOST={}", config.database.host);
    println!("  DB_PORT={}", config.database.port);
    println!("  DB_USER={}", config.database.user);
    println!("  DB_NAME={}", config.database.name);
    println!(
        "  Retry policy: {} attempt(s), {:?} apart",
        config.retry.max_attempts, config.retry.backoff
    );

    let acquirer = ConnectionAcquirer::new(&config.database, config.retry);
    let mut conn = acquirer.acquire().await?;
    println!("  Connection established.");

    let table: Result<i64, sqlx::Error> = sqlx::query_scalar("SELECT COUNT(*) FROM producto")
        .fetch_one(&mut *conn)
        .await;
    conn.release().await;

    let count = table.map_err(|e| {
        anyhow::anyhow!(
            "Table `producto` is not readable (start api_server once to create it): {}",
            e
        )
    })?;
    println!("  Table `producto` is readable ({} row(s)).", count);

    println!("> Preflight OK.");
    Ok(())
}
