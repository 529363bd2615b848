// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decoding of the hierarchy and color-lookup objects.
//!
//! The hierarchy is a JSON object keyed by category name. Object order carries
//! meaning (the preparation step writes siblings by descending count), so it is
//! read through a map visitor instead of an intermediate hash map.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use serde::de::{self, Deserialize, Deserializer, Error as _, MapAccess, Visitor};

use crate::node::CategoryNode;
use crate::palette::Palette;
use crate::tree::CategoryTree;

#[derive(serde::Deserialize)]
struct NodeBody {
    count: u64,
    color: [u8; 3],
    #[serde(default)]
    children: Option<Siblings>,
}

/// Ordered `name → body` entries of one level.
struct Siblings(Vec<(String, NodeBody)>);

impl<'de> Deserialize<'de> for Siblings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SiblingsVisitor;

        impl<'de> Visitor<'de> for SiblingsVisitor {
            type Value = Siblings;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping category names to {count, color, children?}")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, body)) = map.next_entry::<String, NodeBody>()? {
                    entries.push((name, body));
                }
                Ok(Siblings(entries))
            }
        }

        deserializer.deserialize_map(SiblingsVisitor)
    }
}

fn build_node<E: de::Error>(name: String, body: NodeBody) -> Result<CategoryNode, E> {
    let mut node = CategoryNode::new(name, body.count, body.color);
    for (child_name, child_body) in body.children.map(|s| s.0).unwrap_or_default() {
        let child = build_node::<E>(child_name, child_body)?;
        node.push_child(child).map_err(E::custom)?;
    }
    Ok(node)
}

impl<'de> Deserialize<'de> for CategoryTree {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Siblings(entries) = Siblings::deserialize(deserializer)?;
        let mut tree = Self::new();
        for (name, body) in entries {
            let root = build_node::<D::Error>(name, body)?;
            tree.push_root(root).map_err(D::Error::custom)?;
        }
        Ok(tree)
    }
}

impl<'de> Deserialize<'de> for Palette {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let colors = alloc::collections::BTreeMap::<String, [u8; 3]>::deserialize(deserializer)?;
        Ok(colors.into_iter().collect())
    }
}
