// Copyright 2025 the Keyhint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label lengths and the first labels for a few candidate counts.
//!
//! Run:
//! - `cargo run -p keyhint_demos --example label_table`

use keyhint_label::{Alphabet, label_len};

fn main() {
    println!("== default alphabet: {} symbols ==", Alphabet::DEFAULT.len());
    for total in [1, 20, 21, 25, 400, 401, 8001] {
        let first: Vec<String> = Alphabet::DEFAULT.labels(total).take(4).collect();
        println!("  {total:>5} candidates -> length {}  {first:?}", label_len(total));
    }

    match Alphabet::new("asdfjkl") {
        Ok(home) => {
            println!("== home row only: {} symbols ==", home.len());
            let first: Vec<String> = home.labels(30).take(8).collect();
            println!("  30 candidates -> length {}  {first:?}", home.label_len(30));
        }
        Err(e) => println!("  rejected: {e}"),
    }

    if let Err(e) = Alphabet::new("abca") {
        println!("== invalid alphabet ==\n  {e}");
    }
}
