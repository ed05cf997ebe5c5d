/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Email document model type definitions for mailsmith.
 *
 * This crate provides pure data type definitions for the block-tree
 * documents produced by the visual email editor. It has minimal
 * dependencies (serde, serde_json, thiserror) and carries no rendering
 * logic; the renderer lives in the `mailsmith` crate.
 */

pub mod block;
pub mod document;
pub mod style;

// Re-export commonly used types at the crate root
pub use block::{
    Block, Blocks, Button, ColumnGroup, Divider, Footer, Header, Heading, Html, Image, Link,
    NavLink, Product, RowGroup, Social, SocialLink, Spacer, Text, Unsubscribe, Video,
};
pub use document::{Document, DocumentError, Settings};
pub use style::{Alignment, DividerStyle, HeaderLayout, HeadingLevel, IconShape, IconSize};
