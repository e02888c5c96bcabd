/// Order book example: read credentials from the environment, fetch the public
/// order book, list our own orders, and query pools.
///
/// Requires NICEHASH_API_KEY, NICEHASH_API_SECRET and NICEHASH_ORG_ID.
/// Set NICEHASH_TEST=1 to use the test environment.
use nicehash_client::{ClientConfig, Credentials, Environment, NicehashApi};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let credentials = Credentials::new(
        std::env::var("NICEHASH_API_KEY")?,
        std::env::var("NICEHASH_API_SECRET")?,
        std::env::var("NICEHASH_ORG_ID")?,
    );
    let environment = if std::env::var("NICEHASH_TEST").is_ok() {
        Environment::Test
    } else {
        Environment::Production
    };
    let api = NicehashApi::with_config(credentials, ClientConfig::from_environment(environment))?;

    // These three calls start at least three seconds apart.
    let (book, mine, pools) = tokio::join!(
        api.order_book(&[("algorithm", "SCRYPT")]),
        api.my_order_book(&[("algorithm", "SCRYPT"), ("active", "true")]),
        api.get_pools(0, 10),
    );

    let book = book?;
    println!("order book: HTTP {}", book.status);
    if let Some(stats) = book.body.get("stats") {
        println!("  markets: {}", stats.as_object().map(|m| m.len()).unwrap_or(0));
    }

    let mine = mine?;
    println!("my orders: HTTP {} {}", mine.status, mine.body);

    let pools = pools?;
    println!("pools: HTTP {} {}", pools.status, pools.body);

    Ok(())
}
