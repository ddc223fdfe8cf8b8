//! Basic usage example of ctrlcache.
//!
//! Run with `RUST_LOG=trace cargo run --example basic_usage` to see which
//! directives the parser drops.

use ctrlcache::{parse::parse_directive, CacheControl, CacheControlSettings};

fn main() {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .try_init()
        .ok();

    println!("\n=== ctrlcache - Basic Example ===\n");

    // 1. Build a policy for a short-lived public resource
    println!("1. Building a Cache-Control header for a product page:");
    let cache_short = CacheControl::new(
        CacheControlSettings::new()
            .with_public()
            .with_max_age(60.0)
            .with_stale_while_revalidate(60.0),
    );
    println!("   {}: {}\n", CacheControl::HEADER_NAME, cache_short);

    // 2. Sensitive data: never stored
    println!("2. Building a header for an account page:");
    let no_store = CacheControlSettings::new().with_private().with_no_store();
    println!(
        "   {}: {}\n",
        CacheControl::HEADER_NAME,
        CacheControl::serialize_settings(&no_store)
    );

    // 3. Parse what an upstream sent, noise included
    let upstream = "Cache-Control: max-age=invalid, no-cache, s-maxage=12, immutable, no-transform=12";
    println!("3. Parsing upstream header:\n   {}", upstream);
    let parsed = CacheControl::parse(upstream);
    println!("   ✓ Recognised: {}\n", parsed);

    // 4. Per-directive diagnostics
    println!("4. Inspecting each segment:");
    for segment in upstream.trim_start_matches("Cache-Control:").split(',') {
        match parse_directive(segment) {
            Ok((directive, value)) => println!("   ✓ {:<14} {:?}", directive, value),
            Err(e) => println!("   ✗ {}", e),
        }
    }

    println!("\n=== Example Complete ===\n");
}
