/*
 * block.rs
 * Copyright (c) 2025 Posit, PBC
 */

use serde::{Deserialize, Serialize};

use crate::style::{Alignment, DividerStyle, HeaderLayout, HeadingLevel, IconShape, IconSize};

/// One node in the document tree.
///
/// The editor serializes blocks as JSON objects discriminated by a
/// `type` field; each variant carries only the attributes its own
/// rendering rule needs. Unrecognized `type` values deserialize to
/// [`Block::Unknown`], which renders to nothing: unknown blocks are
/// skipped, never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Heading(Heading),
    Text(Text),
    Image(Image),
    Button(Button),
    Spacer(Spacer),
    Divider(Divider),
    Link(Link),
    Html(Html),
    Video(Video),
    Header(Header),
    Footer(Footer),
    Product(Product),
    Unsubscribe(Unsubscribe),
    Social(Social),
    Row2(RowGroup),
    Row3(RowGroup),
    Column2(ColumnGroup),
    Column3(ColumnGroup),
    #[serde(other)]
    Unknown,
}

pub type Blocks = Vec<Block>;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Heading {
    pub level: HeadingLevel,
    pub content: String,
    pub alignment: Alignment,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Text {
    pub content: String,
    pub alignment: Alignment,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Image {
    pub src: String,
    pub alt: String,
    pub alignment: Alignment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Button {
    pub url: String,
    pub label: String,
    /// Falls back to the document's primary color when absent.
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    /// Inlined verbatim as `{value}px`; the editor owns validation.
    pub border_radius: u32,
    pub alignment: Alignment,
}

impl Default for Button {
    fn default() -> Self {
        Button {
            url: String::new(),
            label: String::new(),
            background_color: None,
            text_color: None,
            border_radius: 4,
            alignment: Alignment::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Spacer {
    pub height: u32,
}

impl Default for Spacer {
    fn default() -> Self {
        Spacer { height: 24 }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Divider {
    pub style: DividerStyle,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Link {
    pub url: String,
    pub text: String,
    /// Falls back to the document's primary color when absent.
    pub color: Option<String>,
}

/// Raw markup, emitted verbatim with zero escaping or sanitization.
/// Callers embedding untrusted content must sanitize before building
/// the document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Html {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Video {
    pub url: String,
    pub thumbnail: String,
    pub alt: String,
    pub alignment: Alignment,
}

/// A label/url pair used for header navigation and footer legal links.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Header {
    /// Logo image URL; the company name is the fallback when absent.
    pub logo: Option<String>,
    pub company_name: String,
    pub tagline: Option<String>,
    pub menu_items: Vec<NavLink>,
    pub layout: HeaderLayout,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub link_color: Option<String>,
}

/// A social platform entry: `name` is matched against the known
/// platform set by the icon resolver, `url` is the link target.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Footer {
    pub logo: Option<String>,
    pub company_name: String,
    pub address: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub social_links: Vec<SocialLink>,
    pub social_icon_size: IconSize,
    pub social_icon_shape: IconShape,
    /// Icon container background; falls back to the primary color.
    pub social_icon_color: Option<String>,
    pub legal_links: Vec<NavLink>,
    pub unsubscribe_url: Option<String>,
    pub unsubscribe_text: String,
    /// Prefixed with `© ` at render time unless it already starts
    /// with the `©` character.
    pub copyright_text: Option<String>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub link_color: Option<String>,
}

impl Default for Footer {
    fn default() -> Self {
        Footer {
            logo: None,
            company_name: String::new(),
            address: None,
            email: None,
            phone: None,
            social_links: Vec::new(),
            social_icon_size: IconSize::default(),
            social_icon_shape: IconShape::default(),
            social_icon_color: None,
            legal_links: Vec::new(),
            unsubscribe_url: None,
            unsubscribe_text: "Unsubscribe".to_string(),
            copyright_text: None,
            background_color: None,
            text_color: None,
            link_color: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    pub image: Option<String>,
    pub title: String,
    /// Star count, 0..=5 by convention but not clamped.
    pub rating: u32,
    pub review_count: u32,
    pub price: Option<String>,
    pub original_price: Option<String>,
    /// Percentage shown as `-{discount}%` next to the price.
    pub discount: Option<u32>,
    pub badge: Option<String>,
    pub description: Option<String>,
    pub button_label: String,
    pub button_url: Option<String>,
    /// Falls back to the document's primary color when absent.
    pub button_color: Option<String>,
    pub in_stock: bool,
}

impl Default for Product {
    fn default() -> Self {
        Product {
            image: None,
            title: String::new(),
            // rating 5 with zero reviews is the editor's "no rating
            // data" placeholder; the renderer hides the star row for
            // exactly that combination.
            rating: 5,
            review_count: 0,
            price: None,
            original_price: None,
            discount: None,
            badge: None,
            description: None,
            button_label: "Shop Now".to_string(),
            button_url: None,
            button_color: None,
            in_stock: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Unsubscribe {
    pub text: String,
    pub link_text: String,
    pub url: Option<String>,
    pub font_size: u32,
    pub text_color: Option<String>,
    pub link_color: Option<String>,
}

impl Default for Unsubscribe {
    fn default() -> Self {
        Unsubscribe {
            text: "You received this email because you subscribed to our list.".to_string(),
            link_text: "Unsubscribe".to_string(),
            url: None,
            font_size: 12,
            text_color: None,
            link_color: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Social {
    pub links: Vec<SocialLink>,
    pub alignment: Alignment,
}

/// Payload of the `row2`/`row3` blocks: a list of logical rows, each
/// holding that row's children grouped per cell. The renderer stacks
/// every group of a row inside one shared card-style cell; it does not
/// place groups side by side.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RowGroup {
    pub rows: Vec<Vec<Blocks>>,
}

/// Payload of the `column2`/`column3` blocks: one list of child blocks
/// per column, rendered side by side as fixed-width table cells.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnGroup {
    pub columns: Vec<Blocks>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn heading_deserializes_from_editor_json() {
        let block: Block = serde_json::from_value(json!({
            "type": "heading",
            "level": "h1",
            "content": "Hello",
            "alignment": "center",
            "color": "#111111",
        }))
        .unwrap();

        match block {
            Block::Heading(h) => {
                assert_eq!(h.level, HeadingLevel::H1);
                assert_eq!(h.content, "Hello");
                assert_eq!(h.alignment, Alignment::Center);
                assert_eq!(h.color.as_deref(), Some("#111111"));
            }
            other => panic!("expected heading, got {other:?}"),
        }
    }

    #[test]
    fn unknown_type_deserializes_to_unknown() {
        let block: Block = serde_json::from_value(json!({
            "type": "carousel",
            "slides": [1, 2, 3],
        }))
        .unwrap();
        assert_eq!(block, Block::Unknown);
    }

    #[test]
    fn missing_optional_fields_take_defaults() {
        let block: Block = serde_json::from_value(json!({
            "type": "product",
            "title": "Desk Lamp",
        }))
        .unwrap();

        match block {
            Block::Product(p) => {
                assert_eq!(p.rating, 5);
                assert_eq!(p.review_count, 0);
                assert!(p.in_stock);
                assert_eq!(p.button_label, "Shop Now");
            }
            other => panic!("expected product, got {other:?}"),
        }
    }

    #[test]
    fn containers_nest_blocks_recursively() {
        let block: Block = serde_json::from_value(json!({
            "type": "column2",
            "columns": [
                [{"type": "text", "content": "left"}],
                [{"type": "spacer", "height": 8}],
            ],
        }))
        .unwrap();

        match block {
            Block::Column2(cols) => {
                assert_eq!(cols.columns.len(), 2);
                assert_eq!(
                    cols.columns[1],
                    vec![Block::Spacer(Spacer { height: 8 })]
                );
            }
            other => panic!("expected column2, got {other:?}"),
        }
    }
}
