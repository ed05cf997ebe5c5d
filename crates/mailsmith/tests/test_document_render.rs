/*
 * test_document_render.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * End-to-end tests for the document shell: short-circuit contract,
 * shell structure, and full renders of editor-shaped JSON documents.
 *
 * Run with: cargo test --test test_document_render
 */

use mailsmith::{Document, render_document};
use serde_json::json;

fn doc_from(value: serde_json::Value) -> Document {
    serde_json::from_value(value).expect("valid document JSON")
}

#[test]
fn missing_settings_renders_empty() {
    let doc = doc_from(json!({ "blocks": [] }));
    assert_eq!(render_document(&doc), "");
}

#[test]
fn missing_blocks_renders_empty() {
    let doc = doc_from(json!({
        "settings": { "fontFamily": "Arial", "backgroundColor": "#fff" }
    }));
    assert_eq!(render_document(&doc), "");
}

#[test]
fn empty_document_renders_empty() {
    assert_eq!(render_document(&Document::default()), "");
}

#[test]
fn heading_document_renders_full_shell() {
    let doc = doc_from(json!({
        "settings": {
            "fontFamily": "Arial",
            "backgroundColor": "#fff",
            "contentWidth": 600,
            "primaryColor": "#000"
        },
        "blocks": [{
            "type": "heading",
            "level": "h1",
            "content": "Hi",
            "alignment": "center",
            "color": "#111"
        }]
    }));

    let html = render_document(&doc);

    assert!(html.starts_with("<!DOCTYPE html>"), "doctype first: {html}");
    assert!(html.trim_end().ends_with("</html>"));
    assert!(html.contains("font-size:28px"));
    assert!(html.contains("Hi"));
    assert!(html.contains("<!--[if gte mso 9]>"));
    assert!(html.contains("<o:AllowPNG/>"));
    assert!(html.contains("role=\"presentation\""));
    assert!(html.contains("max-width:600px"));
    assert!(html.contains("color-scheme"));
    assert!(html.contains("@media only screen and (max-width:600px)"));
}

#[test]
fn empty_block_list_still_renders_shell() {
    let doc = doc_from(json!({
        "settings": { "contentWidth": 480 },
        "blocks": []
    }));

    let html = render_document(&doc);

    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("max-width:480px"));
    // No block markup inside the content container.
    assert!(!html.contains("<h1"));
    assert!(!html.contains("<h2"));
}

#[test]
fn settings_are_interpolated_into_the_shell() {
    let doc = doc_from(json!({
        "settings": {
            "fontFamily": "Georgia, serif",
            "backgroundColor": "#101010",
            "contentWidth": 720,
            "primaryColor": "#ff0000"
        },
        "blocks": []
    }));

    let html = render_document(&doc);

    assert!(html.contains("font-family:Georgia, serif"));
    assert!(html.contains("background-color:#101010"));
    assert!(html.contains("width=\"720\""), "MSO wrapper takes the content width");
    assert!(html.contains("max-width:720px"));
}

#[test]
fn rendering_is_deterministic() {
    let doc = doc_from(json!({
        "settings": {},
        "blocks": [
            { "type": "heading", "level": "h1", "content": "A" },
            { "type": "text", "content": "B" },
            { "type": "spacer", "height": 16 }
        ]
    }));

    assert_eq!(render_document(&doc), render_document(&doc));
}

#[test]
fn from_json_boundary_feeds_the_renderer() {
    let input = r#"{
        "settings": { "contentWidth": 600 },
        "blocks": [{ "type": "text", "content": "hello from json" }]
    }"#;

    let doc = Document::from_json(input).unwrap();
    let html = render_document(&doc);
    assert!(html.contains("hello from json"));
}

#[test]
fn block_order_is_preserved_in_output() {
    let doc = doc_from(json!({
        "settings": {},
        "blocks": [
            { "type": "text", "content": "first-marker" },
            { "type": "text", "content": "second-marker" },
            { "type": "text", "content": "third-marker" }
        ]
    }));

    let html = render_document(&doc);
    let first = html.find("first-marker").unwrap();
    let second = html.find("second-marker").unwrap();
    let third = html.find("third-marker").unwrap();
    assert!(first < second && second < third);
}
