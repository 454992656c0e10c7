//! # Themes
//!
//! Resolves the semantic roles stored in buffer attributes to concrete
//! colours and font styles. With syntax highlighting switched off every
//! syntax role resolves to its base value; find highlights still show.

use std::collections::BTreeSet;

use crate::buffer::{Attribute, AttributeKey, ColorRole, ContentKind, FontRole, StyledBuffer};
use crate::parsing::rope::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn hex(value: u32) -> Self {
        Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontStyle {
    pub bold: bool,
    pub italic: bool,
    /// Size relative to body text, in percent.
    pub scale: u16,
}

impl FontStyle {
    pub const BODY: FontStyle = FontStyle {
        bold: false,
        italic: false,
        scale: 100,
    };
}

/// Final look of a stretch of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedStyle {
    pub foreground: Rgb,
    pub background: Option<Rgb>,
    pub font: FontStyle,
    pub strikethrough: bool,
    pub underline: bool,
}

/// A run of text sharing one resolved style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledRun {
    pub span: Span,
    pub style: ResolvedStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeKind {
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub kind: ThemeKind,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub fn light() -> Self {
        Self {
            kind: ThemeKind::Light,
        }
    }

    pub fn dark() -> Self {
        Self {
            kind: ThemeKind::Dark,
        }
    }

    pub fn color(&self, role: ColorRole) -> Rgb {
        use ColorRole::*;
        let hex = match (self.kind, role) {
            (ThemeKind::Light, Base) => 0x202122,
            (ThemeKind::Light, Orange) => 0xA85600,
            (ThemeKind::Light, Purple) => 0x6B4BA1,
            (ThemeKind::Light, Green) => 0x00815F,
            (ThemeKind::Light, Blue) => 0x3366CC,
            (ThemeKind::Light, Gray) => 0x72777D,
            (ThemeKind::Light, MatchForeground) => 0x202122,
            (ThemeKind::Light, MatchBackground) => 0xFEF6E7,
            (ThemeKind::Light, SelectedMatchBackground) => 0xFC3D47,
            (ThemeKind::Light, ReplacedMatchBackground) => 0xD5FDF4,
            (ThemeKind::Dark, Base) => 0xEAECF0,
            (ThemeKind::Dark, Orange) => 0xFF9500,
            (ThemeKind::Dark, Purple) => 0xA18BDB,
            (ThemeKind::Dark, Green) => 0x00AF89,
            (ThemeKind::Dark, Blue) => 0x6D8AF1,
            (ThemeKind::Dark, Gray) => 0xA2A9B1,
            (ThemeKind::Dark, MatchForeground) => 0x101418,
            (ThemeKind::Dark, MatchBackground) => 0x7A5C00,
            (ThemeKind::Dark, SelectedMatchBackground) => 0xFFCC33,
            (ThemeKind::Dark, ReplacedMatchBackground) => 0x14866D,
        };
        Rgb::hex(hex)
    }

    pub fn font(&self, role: FontRole) -> FontStyle {
        let (bold, italic, scale) = match role {
            FontRole::Base => (false, false, 100),
            FontRole::Bold => (true, false, 100),
            FontRole::Italics => (false, true, 100),
            FontRole::BoldItalics => (true, true, 100),
            FontRole::Heading => (true, false, 150),
            FontRole::Subheading1 => (true, false, 130),
            FontRole::Subheading2 => (true, false, 120),
            FontRole::Subheading3 => (true, false, 110),
            FontRole::Subheading4 => (true, false, 100),
        };
        FontStyle {
            bold,
            italic,
            scale,
        }
    }

    /// Resolves the attributes present on one stretch of text.
    pub fn resolve(&self, attributes: &[Attribute], highlighting: bool) -> ResolvedStyle {
        let mut style = ResolvedStyle {
            foreground: self.color(ColorRole::Base),
            background: None,
            font: FontStyle::BODY,
            strikethrough: false,
            underline: false,
        };
        for attribute in attributes {
            match *attribute {
                Attribute::Background(role) => {
                    style.background = Some(self.color(role));
                    style.foreground = self.color(ColorRole::MatchForeground);
                }
                _ if !highlighting => {}
                Attribute::Foreground(role) if style.background.is_none() => {
                    style.foreground = self.color(role);
                }
                Attribute::Foreground(_) => {}
                Attribute::Font(role) => style.font = self.font(role),
                Attribute::Content(ContentKind::Strikethrough) => style.strikethrough = true,
                Attribute::Content(ContentKind::Underline) => style.underline = true,
                Attribute::Content(_) => {}
            }
        }
        style
    }

    /// Splits the buffer into runs of uniform resolved style.
    ///
    /// The runs cover the whole buffer without gaps.
    pub fn styled_runs(&self, buffer: &StyledBuffer, highlighting: bool) -> Vec<StyledRun> {
        let mut cuts: BTreeSet<usize> = BTreeSet::from([0, buffer.len()]);
        for run in buffer.attributes().iter() {
            cuts.insert(run.span.start);
            cuts.insert(run.span.end);
        }
        let cuts: Vec<usize> = cuts.into_iter().collect();

        let mut out: Vec<StyledRun> = vec![];
        for w in cuts.windows(2) {
            let span = Span::new(w[0], w[1]);
            if span.is_empty() {
                continue;
            }
            let style = self.resolve(&ordered(buffer.attributes_at(span.start)), highlighting);
            match out.last_mut() {
                Some(prev) if prev.style == style => prev.span.end = span.end,
                _ => out.push(StyledRun { span, style }),
            }
        }
        out
    }
}

/// Backgrounds first, so a match highlight decides the foreground.
fn ordered(mut attributes: Vec<Attribute>) -> Vec<Attribute> {
    attributes.sort_by_key(|a| a.key() != AttributeKey::Background);
    attributes
}
