// Copyright 2025 Jonas Kruckenberg
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

#![no_main]

use avltree::AvlTree;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|values: Vec<u16>| {
    let mut tree: AvlTree<u16> = AvlTree::new();

    for value in values {
        tree.insert(value);
        tree.assert_valid();
    }

    // in-order iteration must yield a strictly ascending sequence
    let mut previous = None;
    for value in tree.iter() {
        if let Some(previous) = previous {
            assert!(previous < *value);
        }
        previous = Some(*value);
    }
});
