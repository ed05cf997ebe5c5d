/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Email-safe HTML renderer for block-tree email documents.
 */

//! Compiles the visual email editor's block-tree documents into
//! self-contained HTML built to survive inconsistent email clients:
//! every style is inlined, multi-column layout uses tables, and an MSO
//! conditional block pins the content width for desktop Outlook.
//!
//! Rendering is a single synchronous pass over an immutable document.
//! The functions here are pure: the same [`Document`] always produces
//! the same string, and concurrent calls share nothing but the static
//! icon table.
//!
//! # No escaping or sanitization
//!
//! The renderer emits every text field and the `html` block's content
//! **verbatim**. It has no HTML-injection defense of any kind, by
//! design: escaping authored markup would break legitimate rich-text
//! documents. Callers embedding untrusted content must sanitize it
//! before constructing the [`Document`]. The [`escape_html`] helper is
//! available for callers that want entity escaping for plain-text
//! fields; the renderer never applies it on its own.

pub mod icons;
pub mod writers;

pub use mailsmith_types::{Block, Document, Settings};
pub use writers::html::{escape_html, render_document, write_block, write_blocks, write_document};
