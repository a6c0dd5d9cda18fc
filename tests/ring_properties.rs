//! Property-based tests for ring ownership invariants.
//!
//! A slow, obviously-correct linear scan over the node snapshot serves as
//! the reference model; the ring must agree with it on every lookup.

use std::collections::HashSet;

use proptest::prelude::*;

use hashring::{HashSpace, Node, Ring};

/// Owner by definition: the first node at or after the key's position,
/// wrapping to the lowest node.
fn model_owner(nodes: &[Node], position: u32) -> &Node {
    nodes
        .iter()
        .find(|node| node.position >= position)
        .unwrap_or(&nodes[0])
}

fn ring_with(ids: &HashSet<String>) -> Ring {
    let ring = Ring::new();
    for id in ids {
        ring.add_node(id.clone()).unwrap();
    }
    ring
}

proptest! {
    /// Property: lookup agrees with a linear scan of the sorted snapshot
    #[test]
    fn prop_lookup_matches_linear_scan(
        ids in prop::collection::hash_set("[a-z]{1,8}", 1..16),
        keys in prop::collection::vec("[a-z0-9]{0,12}", 1..32),
    ) {
        let ring = ring_with(&ids);
        let nodes = ring.nodes();
        for key in &keys {
            let expected = model_owner(&nodes, ring.position_of(key));
            prop_assert_eq!(&ring.lookup(key).unwrap(), &expected.id);
        }
    }

    /// Property: repeated lookups never change their answer
    #[test]
    fn prop_lookup_deterministic(
        ids in prop::collection::hash_set("[a-z]{1,8}", 1..16),
        key in "[a-z0-9]{0,16}",
    ) {
        let ring = ring_with(&ids);
        let first = ring.lookup(&key).unwrap();
        for _ in 0..3 {
            prop_assert_eq!(ring.lookup(&key).unwrap(), first.clone());
        }
    }

    /// Property: adding a node only moves keys onto that node
    #[test]
    fn prop_add_moves_keys_only_to_new_node(
        ids in prop::collection::hash_set("[a-z]{1,8}", 1..12),
        new_id in "[A-Z]{1,8}",
        keys in prop::collection::vec("[a-z0-9]{0,12}", 1..48),
    ) {
        // Existing ids are lowercase and the new id uppercase, so the add
        // can never collide with a member.
        let ring = ring_with(&ids);
        let before: Vec<String> = keys.iter().map(|k| ring.lookup(k).unwrap()).collect();

        ring.add_node(new_id.clone()).unwrap();

        for (key, old) in keys.iter().zip(&before) {
            let now = ring.lookup(key).unwrap();
            if &now != old {
                prop_assert_eq!(&now, &new_id);
            }
        }
    }

    /// Property: keys of a removed node transfer to its successor, and no
    /// other key moves
    #[test]
    fn prop_remove_transfers_keys_to_successor(
        ids in prop::collection::hash_set("[a-z]{1,8}", 2..12),
        keys in prop::collection::vec("[a-z0-9]{0,12}", 1..48),
    ) {
        let ring = ring_with(&ids);
        let victim = ring.nodes()[0].id.clone();
        let heir = ring.successor(&victim).unwrap();
        let before: Vec<String> = keys.iter().map(|k| ring.lookup(k).unwrap()).collect();

        ring.remove_node(&victim).unwrap();

        for (key, old) in keys.iter().zip(&before) {
            let now = ring.lookup(key).unwrap();
            if old == &victim {
                prop_assert_eq!(&now, &heir);
            } else {
                prop_assert_eq!(&now, old);
            }
        }
    }

    /// Property: positions and owners stay within the bucketed space
    #[test]
    fn prop_positions_bounded_by_bucket_count(
        buckets in 1u32..2000,
        ids in prop::collection::hash_set("[a-z0-9]{1,8}", 1..16),
        key in "[a-z0-9]{0,12}",
    ) {
        let ring = Ring::builder()
            .with_hash_space(HashSpace::Buckets(buckets))
            .build()
            .unwrap();
        for id in &ids {
            let node = ring.add_node(id.clone()).unwrap();
            prop_assert!(node.position < buckets);
        }
        prop_assert!(ring.position_of(&key) < buckets);
        let owner = ring.lookup(&key).unwrap();
        prop_assert!(ids.contains(&owner));
    }

    /// Property: the node snapshot is sorted by position, ids breaking ties
    #[test]
    fn prop_nodes_sorted_in_ring_order(
        ids in prop::collection::hash_set("[a-z]{1,6}", 1..24),
    ) {
        let ring = ring_with(&ids);
        let nodes = ring.nodes();
        prop_assert_eq!(nodes.len(), ids.len());
        for pair in nodes.windows(2) {
            prop_assert!(
                (pair[0].position, pair[0].id.as_str())
                    < (pair[1].position, pair[1].id.as_str())
            );
        }
    }
}
