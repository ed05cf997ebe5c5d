/*
 * html.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Email-safe HTML writer for block-tree documents.
 */

//! Compiles blocks to inline-styled, table-based markup and wraps the
//! result in the email document shell (doctype, MSO conditional
//! wrapper, outer centering table).
//!
//! Dispatch is an exhaustive match over the [`Block`] union: exactly
//! one rule per known type, and [`Block::Unknown`] contributes
//! nothing. The writer never fails for in-memory sinks and never
//! panics; missing optional fields simply omit their markup fragment.
//!
//! Text fields are emitted verbatim; see the crate-level notes on
//! sanitization.

use std::io::{self, Write};

use mailsmith_types::block::{
    Block, ColumnGroup, Footer, Header, Product, RowGroup, SocialLink,
};
use mailsmith_types::document::{Document, Settings};
use mailsmith_types::style::{HeaderLayout, HeadingLevel};
use tracing::{debug, trace};

use crate::icons;

/// Render a document to a complete HTML string.
///
/// A document missing `settings` or `blocks` renders to the empty
/// string, the documented no-op contract for partial editor state.
pub fn render_document(doc: &Document) -> String {
    let mut buf = Vec::new();
    // In-memory writes cannot fail.
    write_document(doc, &mut buf).expect("write to Vec<u8>");
    String::from_utf8(buf).expect("writer output is UTF-8")
}

/// Main entry point: write the full email document shell with the
/// compiled block markup inside.
pub fn write_document<W: Write>(doc: &Document, buf: &mut W) -> io::Result<()> {
    let (Some(settings), Some(blocks)) = (&doc.settings, &doc.blocks) else {
        return Ok(());
    };

    trace!(
        blocks = blocks.len(),
        content_width = settings.content_width,
        "rendering email document"
    );

    writeln!(buf, "<!DOCTYPE html>")?;
    writeln!(
        buf,
        "<html lang=\"en\" xmlns=\"http://www.w3.org/1999/xhtml\" xmlns:v=\"urn:schemas-microsoft-com:vml\" xmlns:o=\"urn:schemas-microsoft-com:office:office\">"
    )?;
    writeln!(buf, "<head>")?;
    writeln!(buf, "<meta charset=\"utf-8\" />")?;
    writeln!(
        buf,
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />"
    )?;
    writeln!(buf, "<meta http-equiv=\"X-UA-Compatible\" content=\"IE=edge\" />")?;
    // Declare light-mode-only intent to clients that honor it.
    writeln!(buf, "<meta name=\"color-scheme\" content=\"light\" />")?;
    writeln!(buf, "<meta name=\"supported-color-schemes\" content=\"light\" />")?;
    // Word's engine (desktop Outlook) ignores max-width; these settings
    // plus the fixed-width wrapper table below pin the content width.
    writeln!(buf, "<!--[if gte mso 9]>")?;
    writeln!(buf, "<xml>")?;
    writeln!(buf, "<o:OfficeDocumentSettings>")?;
    writeln!(buf, "<o:AllowPNG/>")?;
    writeln!(buf, "<o:PixelsPerInch>96</o:PixelsPerInch>")?;
    writeln!(buf, "</o:OfficeDocumentSettings>")?;
    writeln!(buf, "</xml>")?;
    writeln!(buf, "<![endif]-->")?;
    writeln!(buf, "<style>")?;
    writeln!(buf, "body {{ margin:0; padding:0; }}")?;
    writeln!(
        buf,
        "@media only screen and (max-width:600px) {{ .email-shell {{ padding:12px !important; }} }}"
    )?;
    writeln!(buf, "</style>")?;
    writeln!(buf, "</head>")?;
    writeln!(
        buf,
        "<body style=\"margin:0;padding:0;background-color:{bg};font-family:{font};\">",
        bg = settings.background_color,
        font = settings.font_family
    )?;
    writeln!(buf, "<!--[if gte mso 9]>")?;
    writeln!(
        buf,
        "<table role=\"presentation\" width=\"{}\" align=\"center\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\"><tr><td>",
        settings.content_width
    )?;
    writeln!(buf, "<![endif]-->")?;
    writeln!(
        buf,
        "<table role=\"presentation\" width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\" style=\"background-color:{};\">",
        settings.background_color
    )?;
    writeln!(buf, "<tr>")?;
    writeln!(buf, "<td align=\"center\" class=\"email-shell\" style=\"padding:24px;\">")?;
    writeln!(
        buf,
        "<div style=\"max-width:{width}px;margin:0 auto;background-color:#ffffff;border-radius:8px;box-shadow:0 1px 4px rgba(0,0,0,0.08);overflow:hidden;font-family:{font};\">",
        width = settings.content_width,
        font = settings.font_family
    )?;
    write_blocks(blocks, settings, buf)?;
    writeln!(buf, "</div>")?;
    writeln!(buf, "</td>")?;
    writeln!(buf, "</tr>")?;
    writeln!(buf, "</table>")?;
    writeln!(buf, "<!--[if gte mso 9]>")?;
    writeln!(buf, "</td></tr></table>")?;
    writeln!(buf, "<![endif]-->")?;
    writeln!(buf, "</body>")?;
    writeln!(buf, "</html>")?;
    Ok(())
}

/// Write a sequence of blocks in order, with no separator; whatever
/// spacing exists comes from each block's own markup.
pub fn write_blocks<W: Write>(
    blocks: &[Block],
    settings: &Settings,
    buf: &mut W,
) -> io::Result<()> {
    for block in blocks {
        write_block(block, settings, buf)?;
    }
    Ok(())
}

/// Write a single block.
pub fn write_block<W: Write>(block: &Block, settings: &Settings, buf: &mut W) -> io::Result<()> {
    match block {
        Block::Heading(heading) => {
            let (tag, size) = match heading.level {
                HeadingLevel::H1 => ("h1", 28),
                HeadingLevel::Other => ("h2", 20),
            };
            writeln!(
                buf,
                "<{tag} style=\"margin:0;padding:24px 32px 8px;font-size:{size}px;font-weight:700;line-height:1.3;text-align:{align};color:{color};\">{content}</{tag}>",
                align = heading.alignment.as_css(),
                color = heading.color.as_deref().unwrap_or("#1a1a1a"),
                content = heading.content
            )?;
        }
        Block::Text(text) => {
            writeln!(
                buf,
                "<div style=\"padding:12px 32px;font-size:16px;line-height:1.6;color:#404040;text-align:{align};\">{content}</div>",
                align = text.alignment.as_css(),
                content = text.content
            )?;
        }
        Block::Image(image) => {
            writeln!(
                buf,
                "<div style=\"padding:12px 32px;text-align:{align};\"><img src=\"{src}\" alt=\"{alt}\" style=\"max-width:100%;height:auto;border:0;display:inline-block;\" /></div>",
                align = image.alignment.as_css(),
                src = image.src,
                alt = image.alt
            )?;
        }
        Block::Button(button) => {
            writeln!(
                buf,
                "<div style=\"padding:16px 32px;text-align:{align};\"><a href=\"{url}\" style=\"display:inline-block;background-color:{bg};color:{fg};font-size:16px;font-weight:600;text-decoration:none;padding:12px 28px;border-radius:{radius}px;\">{label}</a></div>",
                align = button.alignment.as_css(),
                url = button.url,
                bg = button.background_color.as_deref().unwrap_or(&settings.primary_color),
                fg = button.text_color.as_deref().unwrap_or("#ffffff"),
                radius = button.border_radius,
                label = button.label
            )?;
        }
        Block::Spacer(spacer) => {
            writeln!(
                buf,
                "<div style=\"height:{h}px;line-height:{h}px;font-size:1px;\">&nbsp;</div>",
                h = spacer.height
            )?;
        }
        Block::Divider(divider) => {
            writeln!(
                buf,
                "<div style=\"padding:12px 32px;\"><div style=\"border-top:1px {style} {color};\"></div></div>",
                style = divider.style.as_css(),
                color = divider.color.as_deref().unwrap_or("#e0e0e0")
            )?;
        }
        Block::Link(link) => {
            writeln!(
                buf,
                "<div style=\"padding:8px 32px;\"><a href=\"{url}\" style=\"color:{color};font-size:16px;text-decoration:underline;\">{text}</a></div>",
                url = link.url,
                color = link.color.as_deref().unwrap_or(&settings.primary_color),
                text = link.text
            )?;
        }
        Block::Html(html) => {
            // Deliberate verbatim passthrough; sanitization belongs to
            // whoever constructs the document.
            writeln!(buf, "{}", html.content)?;
        }
        Block::Video(video) => {
            // Email clients can't embed players, so a video is its
            // thumbnail linking out to the hosted clip.
            writeln!(
                buf,
                "<div style=\"padding:12px 32px;text-align:{align};\"><a href=\"{url}\" style=\"text-decoration:none;\"><img src=\"{thumb}\" alt=\"{alt}\" style=\"max-width:100%;height:auto;border:0;display:inline-block;\" /><div style=\"margin-top:8px;font-size:14px;color:#6b6b6b;\">&#9654; Watch video</div></a></div>",
                align = video.alignment.as_css(),
                url = video.url,
                thumb = video.thumbnail,
                alt = video.alt
            )?;
        }
        Block::Header(header) => {
            write_header(header, settings, buf)?;
        }
        Block::Footer(footer) => {
            write_footer(footer, settings, buf)?;
        }
        Block::Product(product) => {
            write_product(product, settings, buf)?;
        }
        Block::Unsubscribe(unsub) => {
            write!(
                buf,
                "<div style=\"padding:16px 32px;text-align:center;font-size:{size}px;line-height:1.5;color:{color};\">{text}",
                size = unsub.font_size,
                color = unsub.text_color.as_deref().unwrap_or("#9a9a9a"),
                text = unsub.text
            )?;
            if let Some(url) = &unsub.url {
                write!(
                    buf,
                    " <a href=\"{url}\" style=\"color:{color};text-decoration:underline;\">{label}</a>",
                    color = unsub.link_color.as_deref().unwrap_or(&settings.primary_color),
                    label = unsub.link_text
                )?;
            }
            writeln!(buf, "</div>")?;
        }
        Block::Social(social) => {
            write!(
                buf,
                "<div style=\"padding:16px 32px;text-align:{};\">",
                social.alignment.as_css()
            )?;
            for link in &social.links {
                // Standalone social blocks always use the fixed 32px
                // circular container.
                write_icon_badge(link, 32, "50%", &settings.primary_color, buf)?;
            }
            writeln!(buf, "</div>")?;
        }
        // row2/row3 do not place children side by side: every group of
        // a logical row stacks inside one shared card-style cell. This
        // mirrors the editor's layouts and is preserved as is.
        Block::Row2(group) | Block::Row3(group) => {
            write_row_group(group, settings, buf)?;
        }
        Block::Column2(group) => {
            write_column_group(group, settings, "50%", buf)?;
        }
        Block::Column3(group) => {
            write_column_group(group, settings, "33%", buf)?;
        }
        Block::Unknown => {
            debug!("skipping block with unrecognized type");
        }
    }
    Ok(())
}

/// Write a header block: logo (or company name), optional tagline,
/// optional nav menu, stacked vertically or on one line.
fn write_header<W: Write>(header: &Header, settings: &Settings, buf: &mut W) -> io::Result<()> {
    let text_color = header.text_color.as_deref().unwrap_or("#1a1a1a");
    let link_color = header.link_color.as_deref().unwrap_or(&settings.primary_color);
    let background = header.background_color.as_deref().unwrap_or("#ffffff");

    match header.layout {
        HeaderLayout::Stacked => {
            writeln!(
                buf,
                "<div style=\"padding:24px 32px;text-align:center;background-color:{background};\">"
            )?;
            write_header_brand(header, text_color, buf)?;
            if !header.menu_items.is_empty() {
                write!(buf, "<div style=\"margin-top:12px;\">")?;
                for item in &header.menu_items {
                    write!(
                        buf,
                        "<a href=\"{url}\" style=\"color:{link_color};font-size:14px;text-decoration:none;margin:0 8px;\">{label}</a>",
                        url = item.url,
                        label = item.label
                    )?;
                }
                writeln!(buf, "</div>")?;
            }
            writeln!(buf, "</div>")?;
        }
        HeaderLayout::Inline => {
            // Nav cell sits next to the brand cell; tables are the only
            // side-by-side layout email clients agree on.
            writeln!(
                buf,
                "<table role=\"presentation\" width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\" style=\"background-color:{background};\">"
            )?;
            writeln!(buf, "<tr>")?;
            writeln!(buf, "<td align=\"left\" style=\"padding:20px 32px;\">")?;
            write_header_brand(header, text_color, buf)?;
            writeln!(buf, "</td>")?;
            writeln!(buf, "<td align=\"right\" style=\"padding:20px 32px;\">")?;
            for item in &header.menu_items {
                write!(
                    buf,
                    "<a href=\"{url}\" style=\"color:{link_color};font-size:14px;text-decoration:none;margin:0 8px;\">{label}</a>",
                    url = item.url,
                    label = item.label
                )?;
            }
            writeln!(buf)?;
            writeln!(buf, "</td>")?;
            writeln!(buf, "</tr>")?;
            writeln!(buf, "</table>")?;
        }
    }
    Ok(())
}

/// Logo image when present, company name otherwise, plus the tagline.
fn write_header_brand<W: Write>(header: &Header, text_color: &str, buf: &mut W) -> io::Result<()> {
    match &header.logo {
        Some(logo) => writeln!(
            buf,
            "<img src=\"{logo}\" alt=\"{name}\" style=\"max-height:48px;border:0;\" />",
            name = header.company_name
        )?,
        None => writeln!(
            buf,
            "<div style=\"font-size:22px;font-weight:700;color:{text_color};\">{name}</div>",
            name = header.company_name
        )?,
    }
    if let Some(tagline) = &header.tagline {
        writeln!(
            buf,
            "<div style=\"margin-top:4px;font-size:14px;color:{text_color};\">{tagline}</div>"
        )?;
    }
    Ok(())
}

fn write_footer<W: Write>(footer: &Footer, settings: &Settings, buf: &mut W) -> io::Result<()> {
    let text_color = footer.text_color.as_deref().unwrap_or("#6b6b6b");
    let link_color = footer.link_color.as_deref().unwrap_or(&settings.primary_color);
    let background = footer.background_color.as_deref().unwrap_or("#f8f8f8");

    writeln!(
        buf,
        "<div style=\"padding:32px;text-align:center;background-color:{background};color:{text_color};font-size:13px;line-height:1.6;\">"
    )?;

    if let Some(logo) = &footer.logo {
        writeln!(
            buf,
            "<img src=\"{logo}\" alt=\"{name}\" style=\"max-height:40px;border:0;margin-bottom:12px;\" />",
            name = footer.company_name
        )?;
    }
    if !footer.company_name.is_empty() {
        writeln!(
            buf,
            "<div style=\"font-weight:600;color:{text_color};\">{name}</div>",
            name = footer.company_name
        )?;
    }
    if let Some(address) = &footer.address {
        writeln!(buf, "<div>{address}</div>")?;
    }
    if let Some(email) = &footer.email {
        writeln!(
            buf,
            "<div><a href=\"mailto:{email}\" style=\"color:{text_color};text-decoration:none;\">{email}</a></div>"
        )?;
    }
    if let Some(phone) = &footer.phone {
        writeln!(buf, "<div>{phone}</div>")?;
    }

    if !footer.social_links.is_empty() {
        let container = footer.social_icon_size.container_px();
        let radius = footer.social_icon_shape.radius_css();
        let icon_bg = footer
            .social_icon_color
            .as_deref()
            .unwrap_or(&settings.primary_color);
        write!(buf, "<div style=\"margin:16px 0 4px;\">")?;
        for link in &footer.social_links {
            write_icon_badge(link, container, radius, icon_bg, buf)?;
        }
        writeln!(buf, "</div>")?;
    }

    if !footer.legal_links.is_empty() {
        write!(buf, "<div style=\"margin-top:12px;\">")?;
        for (i, link) in footer.legal_links.iter().enumerate() {
            if i > 0 {
                write!(buf, " &nbsp;|&nbsp; ")?;
            }
            write!(
                buf,
                "<a href=\"{url}\" style=\"color:{link_color};text-decoration:underline;\">{label}</a>",
                url = link.url,
                label = link.label
            )?;
        }
        writeln!(buf, "</div>")?;
    }

    if let Some(url) = &footer.unsubscribe_url {
        writeln!(
            buf,
            "<div style=\"margin-top:8px;\"><a href=\"{url}\" style=\"color:{link_color};text-decoration:underline;\">{label}</a></div>",
            label = footer.unsubscribe_text
        )?;
    }

    if let Some(copyright) = &footer.copyright_text {
        writeln!(
            buf,
            "<div style=\"margin-top:12px;color:{text_color};\">{}</div>",
            normalize_copyright(copyright)
        )?;
    }

    writeln!(buf, "</div>")?;
    Ok(())
}

fn write_product<W: Write>(product: &Product, settings: &Settings, buf: &mut W) -> io::Result<()> {
    writeln!(buf, "<div style=\"padding:16px 32px;\">")?;

    if let Some(image) = &product.image {
        writeln!(buf, "<div style=\"position:relative;text-align:center;\">")?;
        if let Some(badge) = &product.badge {
            writeln!(
                buf,
                "<div style=\"position:absolute;top:8px;left:8px;background-color:#dc2626;color:#ffffff;font-size:12px;font-weight:600;padding:2px 8px;border-radius:4px;\">{badge}</div>"
            )?;
        }
        writeln!(
            buf,
            "<img src=\"{image}\" alt=\"{title}\" style=\"max-width:100%;height:auto;border:0;\" />",
            title = product.title
        )?;
        if !product.in_stock {
            // Overlay sits on top of the image markup; the image itself
            // stays in the output.
            writeln!(
                buf,
                "<div style=\"position:absolute;top:0;left:0;right:0;bottom:0;background-color:rgba(255,255,255,0.65);\"><div style=\"position:absolute;top:45%;left:0;right:0;text-align:center;font-size:18px;font-weight:700;color:#1a1a1a;\">Out of Stock</div></div>"
            )?;
        }
        writeln!(buf, "</div>")?;
    }

    if !product.title.is_empty() {
        writeln!(
            buf,
            "<div style=\"margin-top:12px;font-size:18px;font-weight:600;color:#1a1a1a;\">{}</div>",
            product.title
        )?;
    }

    // A rating of exactly 5 with no reviews is the editor's "no rating
    // data" placeholder, so the star row is suppressed for that one
    // combination. Every other rating renders, including values over 5.
    if !(product.rating == 5 && product.review_count == 0) {
        write!(
            buf,
            "<div style=\"margin-top:4px;font-size:14px;color:#f59e0b;\">{}",
            star_row(product.rating)
        )?;
        if product.review_count > 0 {
            write!(
                buf,
                " <span style=\"color:#6b6b6b;\">({})</span>",
                product.review_count
            )?;
        }
        writeln!(buf, "</div>")?;
    }

    if let Some(price) = &product.price {
        write!(
            buf,
            "<div style=\"margin-top:8px;font-size:18px;font-weight:700;color:#1a1a1a;\">{price}"
        )?;
        if let Some(original) = &product.original_price {
            write!(
                buf,
                " <span style=\"font-size:14px;font-weight:400;color:#9a9a9a;text-decoration:line-through;\">{original}</span>"
            )?;
        }
        if let Some(discount) = product.discount {
            write!(
                buf,
                " <span style=\"font-size:13px;font-weight:600;color:#dc2626;\">-{discount}%</span>"
            )?;
        }
        writeln!(buf, "</div>")?;
    }

    if let Some(description) = &product.description {
        writeln!(
            buf,
            "<div style=\"margin-top:8px;font-size:14px;line-height:1.5;color:#404040;\">{description}</div>"
        )?;
    }

    if let Some(url) = &product.button_url {
        writeln!(
            buf,
            "<div style=\"margin-top:12px;\"><a href=\"{url}\" style=\"display:inline-block;background-color:{bg};color:#ffffff;font-size:14px;font-weight:600;text-decoration:none;padding:10px 20px;border-radius:4px;\">{label}</a></div>",
            bg = product.button_color.as_deref().unwrap_or(&settings.primary_color),
            label = product.button_label
        )?;
    }

    writeln!(buf, "</div>")?;
    Ok(())
}

/// Write a `row2`/`row3` group: one `<tr>` per logical row, all of the
/// row's child groups concatenated inside a single bordered cell.
fn write_row_group<W: Write>(group: &RowGroup, settings: &Settings, buf: &mut W) -> io::Result<()> {
    writeln!(buf, "<div style=\"padding:12px 32px;\">")?;
    writeln!(
        buf,
        "<table role=\"presentation\" width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\">"
    )?;
    for row in &group.rows {
        writeln!(buf, "<tr>")?;
        writeln!(
            buf,
            "<td style=\"padding:12px;border:1px solid #e8e8e8;border-radius:8px;\">"
        )?;
        for cell_blocks in row {
            write_blocks(cell_blocks, settings, buf)?;
        }
        writeln!(buf, "</td>")?;
        writeln!(buf, "</tr>")?;
    }
    writeln!(buf, "</table>")?;
    writeln!(buf, "</div>")?;
    Ok(())
}

/// Write a `column2`/`column3` group: each column in its own
/// fixed-width cell, genuinely side by side.
fn write_column_group<W: Write>(
    group: &ColumnGroup,
    settings: &Settings,
    width: &str,
    buf: &mut W,
) -> io::Result<()> {
    writeln!(buf, "<div style=\"padding:12px 32px;\">")?;
    writeln!(
        buf,
        "<table role=\"presentation\" width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\">"
    )?;
    writeln!(buf, "<tr>")?;
    for column in &group.columns {
        writeln!(buf, "<td width=\"{width}\" valign=\"top\">")?;
        write_blocks(column, settings, buf)?;
        writeln!(buf, "</td>")?;
    }
    writeln!(buf, "</tr>")?;
    writeln!(buf, "</table>")?;
    writeln!(buf, "</div>")?;
    Ok(())
}

/// Write one social icon: a colored container with the platform glyph
/// centered inside. The glyph is always 12px smaller than the
/// container; that inset is a fixed visual constant.
fn write_icon_badge<W: Write>(
    link: &SocialLink,
    container_px: u32,
    radius_css: &str,
    background: &str,
    buf: &mut W,
) -> io::Result<()> {
    let glyph_px = container_px - 12;
    write!(
        buf,
        "<a href=\"{url}\" style=\"display:inline-block;margin:0 4px;text-decoration:none;\">",
        url = link.url
    )?;
    write!(
        buf,
        "<span style=\"display:inline-block;width:{c}px;height:{c}px;border-radius:{radius_css};background-color:{background};text-align:center;line-height:{c}px;\">",
        c = container_px
    )?;
    write!(
        buf,
        "<svg width=\"{g}\" height=\"{g}\" viewBox=\"0 0 24 24\" fill=\"#ffffff\" style=\"vertical-align:middle;\">{path}</svg>",
        g = glyph_px,
        path = icons::icon_path(&link.name)
    )?;
    writeln!(buf, "</span></a>")?;
    Ok(())
}

/// `★` repeated `rating` times, then `☆` for the remainder of five.
/// Filled stars are not clamped; the empty-star count bottoms out at
/// zero for ratings above five.
fn star_row(rating: u32) -> String {
    let filled = "★".repeat(rating as usize);
    let empty = "☆".repeat(5usize.saturating_sub(rating as usize));
    format!("{filled}{empty}")
}

/// Prepend `© ` unless the text already starts with the `©` character.
fn normalize_copyright(text: &str) -> String {
    if text.starts_with('©') {
        text.to_string()
    } else {
        format!("© {text}")
    }
}

/// Escape HTML special characters.
///
/// The renderer never calls this on document content (output parity
/// with the editor requires verbatim passthrough), but callers that
/// feed plain text into text fields can escape it with this before
/// building the document.
pub fn escape_html(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#39;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}
