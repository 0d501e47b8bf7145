// Copyright 2025 Jonas Kruckenberg
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

#![no_main]

use avltree::AvlTree;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|inserts_removals: (Vec<u16>, Vec<u16>)| {
    let mut tree: AvlTree<u16> = AvlTree::new();
    let mut inserted = 0usize;

    for value in inserts_removals.0 {
        if tree.insert(value).is_none() {
            inserted += 1;
        }
        tree.assert_valid();
    }
    assert_eq!(tree.size(), inserted);

    for value in inserts_removals.1 {
        let was_present = tree.contains(&value);
        assert_eq!(tree.remove(&value).is_some(), was_present);
        tree.assert_valid();
    }
});
