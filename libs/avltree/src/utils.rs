// Copyright 2025 Jonas Kruckenberg
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::{Link, Node};
use core::fmt;
use core::ptr::NonNull;

#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

impl Side {
    pub(crate) fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

pub(crate) unsafe fn find_minimum<T>(mut curr: NonNull<Node<T>>) -> NonNull<Node<T>> {
    while let Some(left) = unsafe { (*curr.as_ptr()).left } {
        curr = left;
    }

    curr
}

pub(crate) unsafe fn find_maximum<T>(mut curr: NonNull<Node<T>>) -> NonNull<Node<T>> {
    while let Some(right) = unsafe { (*curr.as_ptr()).right } {
        curr = right;
    }

    curr
}

/// In-order successor of `node`, or `None` if it holds the greatest element.
pub(crate) unsafe fn next<T>(node: NonNull<Node<T>>) -> Link<T> {
    unsafe {
        // If we have a right child, its least descendant is our next node
        if let Some(right) = (*node.as_ptr()).right {
            return Some(find_minimum(right));
        }

        let mut curr = node;

        loop {
            let Some(parent) = (*curr.as_ptr()).up else {
                // we reached the tree root without finding a next node
                return None;
            };

            // if we have a parent, and we're not their right/greater child,
            // that parent is our next node
            if (*parent.as_ptr()).right != Some(curr) {
                return Some(parent);
            }

            curr = parent;
        }
    }
}

/// In-order predecessor of `node`, or `None` if it holds the least element.
pub(crate) unsafe fn prev<T>(node: NonNull<Node<T>>) -> Link<T> {
    unsafe {
        // If we have a left child, its greatest descendant is our previous node
        if let Some(left) = (*node.as_ptr()).left {
            return Some(find_maximum(left));
        }

        let mut curr = node;

        loop {
            let Some(parent) = (*curr.as_ptr()).up else {
                // we reached the tree root without finding a previous node
                return None;
            };

            // if we have a parent, and we're not their left/lesser child,
            // that parent is our previous node
            if (*parent.as_ptr()).left != Some(curr) {
                return Some(parent);
            }

            curr = parent;
        }
    }
}
