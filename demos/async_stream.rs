//! Async generators driven from a tokio runtime
//!
//! Run with: cargo run --example async_stream

use std::time::Duration;

use lazyseq::prelude::*;
use tokio_stream::StreamExt;

/// Pretend to fetch pages from a remote service, one page per pull.
fn paged_fetch(pages: u32) -> AsyncGenerator<'static, Vec<String>> {
    AsyncGenerator::builder()
        .name("paged_fetch")
        .build_async(move |co| async move {
            for page in 0..pages {
                tokio::time::sleep(Duration::from_millis(20)).await;
                let rows = (0..3).map(|row| format!("page {} row {}", page, row)).collect();
                co.yield_(rows).await;
            }
            Ok(())
        })
}

/// Example 1: Walk an async generator with a cursor
async fn cursor_example() -> Result<()> {
    println!("=== Async Cursor ===");

    let mut pages = paged_fetch(3);
    let mut cursor = pages.begin().await;
    while cursor != AsyncGenerator::end() {
        let rows = cursor.get()?;
        println!("Fetched {} rows, first: {}", rows.len(), rows[0]);
        cursor.advance().await;
    }

    println!();
    Ok(())
}

/// Example 2: Use the generator as a Stream
async fn stream_example() -> Result<()> {
    println!("=== Stream Combinators ===");

    let ticks: AsyncGenerator<'_, u64> = AsyncGenerator::new(|co| async move {
        for tick in 1..=10u64 {
            tokio::time::sleep(Duration::from_millis(5)).await;
            co.yield_(tick).await;
        }
        Ok(())
    });

    let odd_squares: Vec<u64> = ticks
        .filter_map(|tick| tick.ok())
        .filter(|tick| tick % 2 == 1)
        .map(|tick| tick * tick)
        .collect()
        .await;
    println!("Odd squares: {:?}", odd_squares);

    println!();
    Ok(())
}

/// Example 3: Pull items in batches through the Source trait
async fn source_example() -> Result<()> {
    println!("=== Source Batches ===");

    let mut pages = paged_fetch(5);
    loop {
        let batch = pages.next_batch(2).await?;
        if batch.is_empty() {
            break;
        }
        println!("Batch of {} pages", batch.len());
    }

    println!();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    cursor_example().await?;
    stream_example().await?;
    source_example().await?;
    Ok(())
}
