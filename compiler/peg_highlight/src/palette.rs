//! Style-to-attribute mapping.
//!
//! A [`Palette`] holds one [`TextAttribute`] per [`Style`], stored densely
//! by [`Style::index`]. Tokens without a style render with
//! [`TextAttribute::DEFAULT`].

use std::fmt;

use bitflags::bitflags;
use peg_ir::Style;

/// A foreground color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

bitflags! {
    /// Font weight and slant. The empty set is the normal font.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct FontStyle: u8 {
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
    }
}

impl Default for FontStyle {
    fn default() -> Self {
        FontStyle::empty()
    }
}

/// How a styled token is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextAttribute {
    pub foreground: Rgb,
    pub font: FontStyle,
}

impl TextAttribute {
    /// Black, normal font.
    pub const DEFAULT: TextAttribute = TextAttribute::new(Rgb::BLACK, FontStyle::empty());

    #[inline]
    pub const fn new(foreground: Rgb, font: FontStyle) -> Self {
        TextAttribute { foreground, font }
    }
}

const NORMAL: FontStyle = FontStyle::empty();
const BOLD: FontStyle = FontStyle::BOLD;
const ITALIC: FontStyle = FontStyle::ITALIC;

const KEYWORD_COLOR: Rgb = Rgb::new(127, 0, 85);
const NAME_COLOR: Rgb = Rgb::new(0, 80, 50);
const VARIABLE_COLOR: Rgb = Rgb::new(100, 70, 50);
const COMMENT_COLOR: Rgb = Rgb::new(63, 127, 95);
const STRING_COLOR: Rgb = Rgb::new(42, 0, 255);

/// Default attribute for `style`.
const fn default_attribute(style: Style) -> TextAttribute {
    let (foreground, font) = match style {
        Style::Keyword | Style::CodeKeyword => (KEYWORD_COLOR, BOLD),
        Style::RuleName => (NAME_COLOR, ITALIC),
        Style::TypeName => (NAME_COLOR, BOLD),
        Style::ResultVariable => (Rgb::new(0, 0, 192), NORMAL),
        Style::TemplateVariable => (VARIABLE_COLOR, BOLD),
        Style::Substitution => (VARIABLE_COLOR, BOLD.union(ITALIC)),
        Style::LineComment
        | Style::BlockComment
        | Style::CodeLineComment
        | Style::CodeBlockComment => (COMMENT_COLOR, NORMAL),
        Style::CharacterClass => (STRING_COLOR, ITALIC),
        Style::String | Style::CodeString | Style::CodeChar | Style::CodeHeaderName => {
            (STRING_COLOR, NORMAL)
        }
        Style::Code => (Rgb::new(100, 40, 128), BOLD),
        Style::CodeUnknown => (Rgb::new(224, 0, 0), BOLD),
        Style::Identifier
        | Style::Operator
        | Style::CodeIdentifier
        | Style::CodeNumber
        | Style::CodePunctuator => (Rgb::BLACK, NORMAL),
    };
    TextAttribute::new(foreground, font)
}

/// One attribute per style.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    attributes: [TextAttribute; Style::COUNT],
}

impl Palette {
    /// The attribute `style` renders with.
    #[inline]
    pub fn get(&self, style: Style) -> TextAttribute {
        self.attributes[style.index()]
    }

    /// The attribute for an optional style; unstyled tokens get
    /// [`TextAttribute::DEFAULT`].
    #[inline]
    pub fn resolve(&self, style: Option<Style>) -> TextAttribute {
        style.map_or(TextAttribute::DEFAULT, |style| self.get(style))
    }

    /// Override the attribute of `style`.
    pub fn set(&mut self, style: Style, attribute: TextAttribute) {
        self.attributes[style.index()] = attribute;
    }

    /// Builder form of [`Palette::set`].
    #[must_use]
    pub fn with(mut self, style: Style, attribute: TextAttribute) -> Self {
        self.set(style, attribute);
        self
    }

    /// `(style, attribute)` pairs in style order.
    pub fn iter(&self) -> impl Iterator<Item = (Style, TextAttribute)> + '_ {
        Style::ALL.iter().map(|&style| (style, self.get(style)))
    }
}

impl Default for Palette {
    fn default() -> Self {
        let mut attributes = [TextAttribute::DEFAULT; Style::COUNT];
        for style in Style::ALL {
            attributes[style.index()] = default_attribute(style);
        }
        Palette { attributes }
    }
}
