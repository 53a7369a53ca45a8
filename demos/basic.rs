//! Basic usage examples for lazyseq
//!
//! Run with: cargo run --example basic

use std::fmt;

use lazyseq::prelude::*;

#[derive(Debug)]
struct BadRecord {
    line: usize,
    text: String,
}

impl fmt::Display for BadRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: cannot parse {:?}", self.line, self.text)
    }
}

impl std::error::Error for BadRecord {}

/// Example 1: Walk a generator with a cursor
fn cursor_example() {
    println!("=== Cursor Traversal ===");

    let mut countdown: Generator<'_, u32> = Generator::new(|co| async move {
        for n in (1..=5).rev() {
            co.yield_(n).await;
        }
        Ok(())
    });

    let mut cursor = countdown.begin();
    while cursor != Generator::end() {
        match cursor.get() {
            Ok(n) => println!("T-minus {}", n),
            Err(e) => println!("Failed: {}", e),
        }
        cursor.advance();
    }
    println!("Liftoff ({:?})", countdown.status());
    println!();
}

/// Example 2: Infinite producers only run as far as they are pulled
fn infinite_example() {
    println!("=== Infinite Fibonacci ===");

    let first: Vec<u64> = sources::fibonacci()
        .take(10)
        .map(|n| n.unwrap_or_default())
        .collect();
    println!("First ten: {:?}", first);
    println!();
}

/// Example 3: A failing producer reports its error where the consumer reads
fn failure_example() {
    println!("=== Deferred Failure ===");

    let input = "10\n20\nthirty\n40";
    let mut numbers: Generator<'_, i64, BadRecord> = Generator::builder()
        .name("parser")
        .build(move |co| async move {
            for (index, text) in input.lines().enumerate() {
                match text.parse::<i64>() {
                    Ok(n) => co.yield_(n).await,
                    Err(_) => {
                        return Err(BadRecord {
                            line: index + 1,
                            text: text.to_string(),
                        })
                    }
                }
            }
            Ok(())
        });

    let mut cursor = numbers.begin();
    while !cursor.is_end() {
        match cursor.get() {
            Ok(n) => println!("Parsed {}", n),
            Err(e) => println!("Stopped: {}", e),
        }
        cursor.advance();
    }
    println!();
}

/// Example 4: Library sources compose as plain iterators
fn sources_example() {
    println!("=== Sources ===");

    let merged = sources::merge(vec![
        sources::range(0..3),
        sources::from_vec(vec![100, 200]),
        sources::once(-1),
    ]);
    for chunk in sources::chunked(merged, 2) {
        match chunk {
            Ok(chunk) => println!("Chunk: {:?}", chunk),
            Err(e) => println!("Error: {}", e),
        }
    }
    println!();
}

fn main() {
    cursor_example();
    infinite_example();
    failure_example();
    sources_example();
}
