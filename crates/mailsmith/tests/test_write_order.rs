/*
 * test_write_order.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Property tests for the block fold: writing a list of blocks is
 * exactly the in-order concatenation of writing each block alone.
 *
 * Run with: cargo test --test test_write_order
 */

use mailsmith::{Block, Settings, write_block, write_blocks};
use mailsmith_types::block::{Divider, Spacer, Text};
use mailsmith_types::style::Alignment;
use proptest::prelude::*;

fn render_one(block: &Block, settings: &Settings) -> String {
    let mut buf = Vec::new();
    write_block(block, settings, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

fn render_all(blocks: &[Block], settings: &Settings) -> String {
    let mut buf = Vec::new();
    write_blocks(blocks, settings, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

fn simple_block() -> impl Strategy<Value = Block> {
    prop_oneof![
        "[a-z ]{0,16}".prop_map(|content| Block::Text(Text {
            content,
            alignment: Alignment::Left,
        })),
        (1u32..240).prop_map(|height| Block::Spacer(Spacer { height })),
        Just(Block::Divider(Divider::default())),
        Just(Block::Unknown),
    ]
}

proptest! {
    #[test]
    fn fold_equals_in_order_concatenation(
        blocks in proptest::collection::vec(simple_block(), 0..10)
    ) {
        let settings = Settings::default();
        let folded = render_all(&blocks, &settings);
        let concatenated: String = blocks
            .iter()
            .map(|block| render_one(block, &settings))
            .collect();
        prop_assert_eq!(folded, concatenated);
    }

    #[test]
    fn reordering_blocks_only_reorders_markup(
        blocks in proptest::collection::vec(simple_block(), 0..10)
    ) {
        let settings = Settings::default();
        let reversed: Vec<Block> = blocks.iter().rev().cloned().collect();
        let forward: String = blocks
            .iter()
            .map(|block| render_one(block, &settings))
            .collect();
        let backward: String = reversed
            .iter()
            .rev()
            .map(|block| render_one(block, &settings))
            .collect();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn writing_never_fails_for_in_memory_buffers(
        blocks in proptest::collection::vec(simple_block(), 0..10)
    ) {
        let settings = Settings::default();
        let mut buf = Vec::new();
        prop_assert!(write_blocks(&blocks, &settings, &mut buf).is_ok());
    }
}
