/*
 * style.rs
 * Copyright (c) 2025 Posit, PBC
 */

use serde::{Deserialize, Serialize};

/// Horizontal alignment of a block's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    pub fn as_css(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

/// Heading size selector. The editor only distinguishes h1 from
/// everything else; h2 through h6 all resolve to the smaller style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    H1,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DividerStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl DividerStyle {
    pub fn as_css(self) -> &'static str {
        match self {
            DividerStyle::Solid => "solid",
            DividerStyle::Dashed => "dashed",
            DividerStyle::Dotted => "dotted",
        }
    }
}

/// Header block arrangement: logo and navigation stacked vertically,
/// or side by side on one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderLayout {
    #[default]
    Stacked,
    Inline,
}

/// Social icon container size in the footer. The inner glyph is always
/// 12px smaller than the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl IconSize {
    /// Container edge length in pixels.
    pub fn container_px(self) -> u32 {
        match self {
            IconSize::Small => 24,
            IconSize::Medium => 32,
            IconSize::Large => 40,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconShape {
    #[default]
    Circle,
    Square,
    Rounded,
}

impl IconShape {
    /// Border-radius value for the icon container.
    pub fn radius_css(self) -> &'static str {
        match self {
            IconShape::Circle => "50%",
            IconShape::Square => "0",
            IconShape::Rounded => "8px",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_level_collapses_unrecognized_values() {
        let h1: HeadingLevel = serde_json::from_str("\"h1\"").unwrap();
        assert_eq!(h1, HeadingLevel::H1);

        for level in ["\"h2\"", "\"h3\"", "\"h6\"", "\"banner\""] {
            let parsed: HeadingLevel = serde_json::from_str(level).unwrap();
            assert_eq!(parsed, HeadingLevel::Other, "{level} should collapse");
        }
    }

    #[test]
    fn icon_size_container_px() {
        assert_eq!(IconSize::Small.container_px(), 24);
        assert_eq!(IconSize::Medium.container_px(), 32);
        assert_eq!(IconSize::Large.container_px(), 40);
    }

    #[test]
    fn icon_shape_radius() {
        assert_eq!(IconShape::Circle.radius_css(), "50%");
        assert_eq!(IconShape::Square.radius_css(), "0");
        assert_eq!(IconShape::Rounded.radius_css(), "8px");
    }
}
