//! Theme system for consistent styling
//!
//! A [`Theme`] is a flat set of colour tokens. [`ThemeProvider`] cascades a
//! theme to whatever it wraps: the child receives the theme at render time
//! instead of hard-coding colours.

use crate::error::WizardError;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Text},
    widgets::{Paragraph, Widget},
};
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Brand accent used for the stroke overrides
pub const BRAND_ACCENT: Color = Color::Rgb(0xF1, 0x5D, 0x22);

/// Names of the colour tokens a theme carries
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ThemeToken {
    /// Accent stroke: active step, primary buttons, dialog border
    BrandStroke,
    /// Accent stroke under the pointer
    BrandStrokeHover,
    /// Text drawn on top of the accent
    OnBrand,
    /// Completed steps and their connectors
    Done,
    /// Upcoming steps and disabled controls
    Neutral,
    /// Highlighted step icon and label
    Emphasis,
    Foreground,
    Background,
}

/// Colour tokens cascaded to descendant components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub brand_stroke: Color,
    pub brand_stroke_hover: Color,
    pub on_brand: Color,
    pub done: Color,
    pub neutral: Color,
    pub emphasis: Color,
    pub foreground: Color,
    pub background: Color,
}

impl Theme {
    /// Base light theme
    pub fn light() -> Self {
        Self {
            brand_stroke: Color::Rgb(0x0F, 0x6C, 0xBD),
            brand_stroke_hover: Color::Rgb(0x11, 0x5E, 0xA3),
            on_brand: Color::Rgb(0xFF, 0xFF, 0xFF),
            done: Color::Rgb(0x4C, 0xAF, 0x50),
            neutral: Color::Rgb(0xCC, 0xCC, 0xCC),
            emphasis: Color::Rgb(0x00, 0x28, 0x56),
            foreground: Color::Rgb(0x24, 0x24, 0x24),
            background: Color::Rgb(0xFF, 0xFF, 0xFF),
        }
    }

    /// Light theme with both stroke tokens set to the brand accent
    pub fn branded() -> Self {
        Self::light()
            .with(ThemeToken::BrandStroke, BRAND_ACCENT)
            .with(ThemeToken::BrandStrokeHover, BRAND_ACCENT)
    }

    /// Look up a token
    pub fn get(&self, token: ThemeToken) -> Color {
        match token {
            ThemeToken::BrandStroke => self.brand_stroke,
            ThemeToken::BrandStrokeHover => self.brand_stroke_hover,
            ThemeToken::OnBrand => self.on_brand,
            ThemeToken::Done => self.done,
            ThemeToken::Neutral => self.neutral,
            ThemeToken::Emphasis => self.emphasis,
            ThemeToken::Foreground => self.foreground,
            ThemeToken::Background => self.background,
        }
    }

    /// Override a token in place
    pub fn set(&mut self, token: ThemeToken, color: Color) {
        let slot = match token {
            ThemeToken::BrandStroke => &mut self.brand_stroke,
            ThemeToken::BrandStrokeHover => &mut self.brand_stroke_hover,
            ThemeToken::OnBrand => &mut self.on_brand,
            ThemeToken::Done => &mut self.done,
            ThemeToken::Neutral => &mut self.neutral,
            ThemeToken::Emphasis => &mut self.emphasis,
            ThemeToken::Foreground => &mut self.foreground,
            ThemeToken::Background => &mut self.background,
        };
        *slot = color;
    }

    /// Builder form of [`Theme::set`]
    pub fn with(mut self, token: ThemeToken, color: Color) -> Self {
        self.set(token, color);
        self
    }

    /// Override a token from a colour string such as `#F15D22` or `red`
    pub fn set_str(&mut self, token: ThemeToken, value: &str) -> Result<(), WizardError> {
        let color = parse_color(value).ok_or_else(|| WizardError::InvalidColor {
            token: token.to_string(),
            value: value.to_string(),
        })?;
        self.set(token, color);
        Ok(())
    }

    /// Default text style on the theme background
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    /// Style of a primary (accent filled) control
    pub fn primary_style(&self) -> Style {
        Style::default().fg(self.on_brand).bg(self.brand_stroke)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::branded()
    }
}

/// Parse a colour string, returning `None` when it is not a colour
pub fn parse_color(value: &str) -> Option<Color> {
    Color::from_str(value.trim()).ok()
}

/// Format a colour as `#RRGGBB` where possible
pub fn color_to_string(color: Color) -> String {
    match color {
        Color::Rgb(r, g, b) => format!("#{:02X}{:02X}{:02X}", r, g, b),
        other => other.to_string(),
    }
}

/// Anything that can draw itself with a theme supplied by an ancestor
pub trait ThemedWidget {
    fn render_themed(&self, area: Rect, buf: &mut Buffer, theme: &Theme);
}

impl ThemedWidget for &str {
    fn render_themed(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        Paragraph::new(*self)
            .style(Style::default().fg(theme.foreground))
            .render(area, buf);
    }
}

impl ThemedWidget for String {
    fn render_themed(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        self.as_str().render_themed(area, buf, theme);
    }
}

impl ThemedWidget for Line<'_> {
    fn render_themed(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        self.clone()
            .patch_style(Style::default().fg(theme.foreground))
            .render(area, buf);
    }
}

impl ThemedWidget for Text<'_> {
    fn render_themed(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        Paragraph::new(self.clone())
            .style(Style::default().fg(theme.foreground))
            .render(area, buf);
    }
}

impl ThemedWidget for Paragraph<'_> {
    fn render_themed(&self, area: Rect, buf: &mut Buffer, _theme: &Theme) {
        self.clone().render(area, buf);
    }
}

impl<T: ThemedWidget + ?Sized> ThemedWidget for Box<T> {
    fn render_themed(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        (**self).render_themed(area, buf, theme);
    }
}

/// Wraps a child and renders it with a theme
///
/// The provider dereferences to its child, so a wrapped component keeps
/// its whole API: `with_theme(stepper).next()` drives the stepper.
#[derive(Debug, Clone)]
pub struct ThemeProvider<C> {
    theme: Theme,
    child: C,
}

impl<C> ThemeProvider<C> {
    /// Wrap `child` in the default (branded) theme
    pub fn new(child: C) -> Self {
        Self {
            theme: Theme::default(),
            child,
        }
    }

    /// Replace the provided theme
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn current_theme(&self) -> &Theme {
        &self.theme
    }

    pub fn into_inner(self) -> C {
        self.child
    }
}

impl<C> Deref for ThemeProvider<C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.child
    }
}

impl<C> DerefMut for ThemeProvider<C> {
    fn deref_mut(&mut self) -> &mut C {
        &mut self.child
    }
}

impl<C: ThemedWidget> Widget for &ThemeProvider<C> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.theme.base_style());
        self.child.render_themed(area, buf, &self.theme);
    }
}

/// Nested providers: the innermost theme wins
impl<C: ThemedWidget> ThemedWidget for ThemeProvider<C> {
    fn render_themed(&self, area: Rect, buf: &mut Buffer, _theme: &Theme) {
        Widget::render(self, area, buf);
    }
}

/// Return `component` pre-wrapped in the default theme provider
///
/// The default is [`Theme::branded`], the same theme a bare
/// [`ThemeProvider::new`] supplies. Chain `.theme(Theme::light())` for the
/// plain light theme without the brand stroke overrides.
pub fn with_theme<C>(component: C) -> ThemeProvider<C> {
    ThemeProvider::new(component)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_branded_overrides_strokes_only() {
        let light = Theme::light();
        let branded = Theme::branded();
        assert_eq!(branded.brand_stroke, BRAND_ACCENT);
        assert_eq!(branded.brand_stroke_hover, BRAND_ACCENT);
        for token in ThemeToken::iter() {
            if !matches!(token, ThemeToken::BrandStroke | ThemeToken::BrandStrokeHover) {
                assert_eq!(branded.get(token), light.get(token), "{} changed", token);
            }
        }
    }

    #[test]
    fn test_set_and_get_every_token() {
        let mut theme = Theme::light();
        for token in ThemeToken::iter() {
            theme.set(token, Color::Rgb(1, 2, 3));
            assert_eq!(theme.get(token), Color::Rgb(1, 2, 3));
        }
    }

    #[test]
    fn test_set_str_rejects_garbage() {
        let mut theme = Theme::light();
        let err = theme.set_str(ThemeToken::Done, "not-a-colour").unwrap_err();
        assert!(matches!(err, WizardError::InvalidColor { .. }));
        theme.set_str(ThemeToken::Done, "#010203").unwrap();
        assert_eq!(theme.done, Color::Rgb(1, 2, 3));
    }

    #[test]
    fn test_token_names() {
        assert_eq!(ThemeToken::BrandStrokeHover.to_string(), "brand_stroke_hover");
        assert_eq!(
            ThemeToken::from_str("on_brand").unwrap(),
            ThemeToken::OnBrand
        );
    }

    #[test]
    fn test_color_to_string() {
        assert_eq!(color_to_string(BRAND_ACCENT), "#F15D22");
    }

    #[test]
    fn test_provider_paints_background_and_child() {
        let provider = ThemeProvider::new("hi").theme(Theme::light());
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        (&provider).render(area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), "h");
        assert_eq!(buf[(3, 0)].bg, Theme::light().background);
        assert_eq!(buf[(0, 0)].fg, Theme::light().foreground);
    }

    #[test]
    fn test_with_theme_matches_provider_default() {
        let wrapped = with_theme("x");
        assert_eq!(wrapped.current_theme(), ThemeProvider::new("x").current_theme());
        assert_eq!(*with_theme("x").theme(Theme::light()).current_theme(), Theme::light());
    }

    #[test]
    fn test_with_theme_passes_through() {
        let mut wrapped = with_theme(String::from("abc"));
        wrapped.push('d');
        assert_eq!(wrapped.len(), 4);
        assert_eq!(*wrapped.current_theme(), Theme::branded());
        assert_eq!(wrapped.into_inner(), "abcd");
    }
}
