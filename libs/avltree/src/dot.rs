// Copyright 2025 Jonas Kruckenberg
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::utils::Side;
use crate::{AvlTree, Node};
use core::fmt;
use core::ptr::NonNull;

/// Renders an [`AvlTree`] in [graphviz format].
///
/// [graphviz format]: https://graphviz.org/doc/info/lang.html
pub struct Dot<'a, T>
where
    T: Ord,
{
    pub(crate) tree: &'a AvlTree<T>,
}

impl<T> Dot<'_, T>
where
    T: Ord + fmt::Debug,
{
    #[allow(
        clippy::only_used_in_recursion,
        reason = "need to ensure tree is borrowed for the entire time we operate on it"
    )]
    fn node_fmt(&self, f: &mut fmt::Formatter, node: NonNull<Node<T>>) -> fmt::Result {
        unsafe {
            let n = node.as_ptr();

            let id = n.addr();
            f.write_fmt(format_args!(
                r#"{id} [label="data = {data:?} height = {height}"];"#,
                data = (*n).data,
                height = (*n).height,
            ))?;

            if let Some(up) = (*n).up {
                f.write_fmt(format_args!(r#"{id} -> {} [label="up"];"#, up.as_ptr().addr()))?;
            }

            let mut print_side = |side: Side| -> fmt::Result {
                if let Some(child) = (*n).child(side) {
                    f.write_fmt(format_args!(
                        r#"{id} -> {} [label="{side}"];"#,
                        child.as_ptr().addr(),
                    ))?;
                    self.node_fmt(f, child)?;
                }
                Ok(())
            };
            print_side(Side::Left)?;
            print_side(Side::Right)?;
        }

        Ok(())
    }
}

impl<T> fmt::Display for Dot<'_, T>
where
    T: Ord + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("digraph {")?;

        if let Some(root) = self.tree.root {
            self.node_fmt(f, root)?;
        }

        f.write_str("}")
    }
}

impl<T> fmt::Debug for Dot<'_, T>
where
    T: Ord + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
