// File: crates/mockup-core/src/palette.rs
// Summary: Named colour palettes for wireframes and diagrams.

use skia_safe as skia;

use crate::types::{ButtonVariant, Tone};

/// Opaque colour from a 0xRRGGBB literal.
pub fn rgb(hex: u32) -> skia::Color {
    skia::Color::from_argb(255, (hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

/// Colour with explicit alpha from a 0xRRGGBB literal.
pub fn argb(alpha: u8, hex: u32) -> skia::Color {
    skia::Color::from_argb(alpha, (hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

/// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional). Six digits are opaque.
pub fn parse_hex(text: &str) -> Option<skia::Color> {
    let digits = text.strip_prefix('#').unwrap_or(text);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(digits, 16).ok()?;
    match digits.len() {
        6 => Some(rgb(value)),
        8 => Some(argb(value as u8, value >> 8)),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub name: &'static str,
    pub white: skia::Color,
    pub bg: skia::Color,
    pub card: skia::Color,
    pub primary: skia::Color,
    pub primary_dark: skia::Color,
    pub primary_light: skia::Color,
    pub secondary: skia::Color,
    pub sidebar: skia::Color,
    pub sidebar_active: skia::Color,
    pub sidebar_text: skia::Color,
    pub success: skia::Color,
    pub success_light: skia::Color,
    pub warning: skia::Color,
    pub warning_light: skia::Color,
    pub danger: skia::Color,
    pub danger_light: skia::Color,
    pub info: skia::Color,
    pub info_light: skia::Color,
    pub purple: skia::Color,
    pub purple_light: skia::Color,
    pub text: skia::Color,
    pub text_secondary: skia::Color,
    pub text_light: skia::Color,
    pub border: skia::Color,
    pub shadow: skia::Color,
}

impl Palette {
    /// Material-style palette used by the polished mock-up set.
    pub fn professional() -> Self {
        Self {
            name: "professional",
            white: rgb(0xFFFFFF),
            bg: rgb(0xF5F7FA),
            card: rgb(0xFFFFFF),
            primary: rgb(0x1976D2),
            primary_dark: rgb(0x0D47A1),
            primary_light: rgb(0xBBDEFB),
            secondary: rgb(0x455A64),
            sidebar: rgb(0x263238),
            sidebar_active: rgb(0x37474F),
            sidebar_text: rgb(0xB0BEC5),
            success: rgb(0x4CAF50),
            success_light: rgb(0xE8F5E9),
            warning: rgb(0xFF9800),
            warning_light: rgb(0xFFF3E0),
            danger: rgb(0xF44336),
            danger_light: rgb(0xFFEBEE),
            info: rgb(0x2196F3),
            info_light: rgb(0xE3F2FD),
            purple: rgb(0x7C4DFF),
            purple_light: rgb(0xEDE7F6),
            text: rgb(0x212121),
            text_secondary: rgb(0x757575),
            text_light: rgb(0x9E9E9E),
            border: rgb(0xE0E0E0),
            shadow: argb(0x15, 0x000000),
        }
    }

    /// Flat grey palette of the first-draft wireframes.
    pub fn classic() -> Self {
        Self {
            name: "classic",
            white: rgb(0xFFFFFF),
            bg: rgb(0xF5F5F5),
            card: rgb(0xFAFAFA),
            primary: rgb(0x2196F3),
            primary_dark: rgb(0x1565C0),
            primary_light: rgb(0xBBDEFB),
            secondary: rgb(0x757575),
            sidebar: rgb(0x37474F),
            sidebar_active: rgb(0x263238),
            sidebar_text: rgb(0xECEFF1),
            success: rgb(0x4CAF50),
            success_light: rgb(0xE8F5E9),
            warning: rgb(0xFF9800),
            warning_light: rgb(0xFFF3E0),
            danger: rgb(0xF44336),
            danger_light: rgb(0xFFEBEE),
            info: rgb(0x2196F3),
            info_light: rgb(0xE3F2FD),
            purple: rgb(0x7C4DFF),
            purple_light: rgb(0xEDE7F6),
            text: rgb(0x333333),
            text_secondary: rgb(0x757575),
            text_light: rgb(0x9E9E9E),
            border: rgb(0xBDBDBD),
            shadow: argb(0x10, 0x000000),
        }
    }

    /// Cooler palette used by the architecture and ERD diagrams.
    pub fn diagram() -> Self {
        Self {
            name: "diagram",
            bg: rgb(0xF8FAFC),
            primary_light: rgb(0xE3F2FD),
            info: rgb(0x00BCD4),
            info_light: rgb(0xE0F7FA),
            ..Self::professional()
        }
    }

    /// (fill, text) pair for a badge tone.
    pub fn tone(&self, tone: Tone) -> (skia::Color, skia::Color) {
        match tone {
            Tone::Primary => (self.primary, self.white),
            Tone::Success => (self.success, self.white),
            Tone::Warning => (self.warning, self.white),
            Tone::Danger => (self.danger, self.white),
            Tone::Info => (self.info, self.white),
            Tone::Light => (self.bg, self.text),
        }
    }

    /// (tint, accent) pair for icon tiles; `Light` and `Primary` share the primary tint.
    pub fn tone_tint(&self, tone: Tone) -> (skia::Color, skia::Color) {
        match tone {
            Tone::Success => (self.success_light, self.success),
            Tone::Warning => (self.warning_light, self.warning),
            Tone::Danger => (self.danger_light, self.danger),
            Tone::Info => (self.info_light, self.info),
            Tone::Primary | Tone::Light => (self.primary_light, self.primary),
        }
    }

    /// (fill, text, border) triple for a button variant.
    pub fn button(&self, variant: ButtonVariant) -> (skia::Color, skia::Color, Option<skia::Color>) {
        match variant {
            ButtonVariant::Default => (self.bg, self.text, None),
            ButtonVariant::Primary => (self.primary, self.white, None),
            ButtonVariant::Success => (self.success, self.white, None),
            ButtonVariant::Danger => (self.danger, self.white, None),
            ButtonVariant::Outline => (self.white, self.primary, Some(self.primary)),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::professional()
    }
}

/// Return a list of built-in palette presets.
pub fn presets() -> Vec<Palette> {
    vec![Palette::professional(), Palette::classic(), Palette::diagram()]
}

/// Find a palette by its `name`, falling back to professional.
pub fn find(name: &str) -> Palette {
    for p in presets() { if p.name.eq_ignore_ascii_case(name) { return p; } }
    Palette::professional()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_splits_channels() {
        let c = rgb(0x1976D2);
        assert_eq!((c.a(), c.r(), c.g(), c.b()), (255, 0x19, 0x76, 0xD2));
        assert_eq!(argb(0x15, 0).a(), 0x15);
    }

    #[test]
    fn find_is_case_insensitive_with_fallback() {
        assert_eq!(find("CLASSIC").name, "classic");
        assert_eq!(find("no-such-palette").name, "professional");
        assert_eq!(find("Diagram").name, "diagram");
    }

    #[test]
    fn parse_hex_accepts_both_lengths() {
        assert_eq!(parse_hex("#1976D2"), Some(rgb(0x1976D2)));
        assert_eq!(parse_hex("1976d2"), Some(rgb(0x1976D2)));
        let shadow = parse_hex("#00000015").expect("rgba");
        assert_eq!((shadow.a(), shadow.r(), shadow.g(), shadow.b()), (0x15, 0, 0, 0));
        assert_eq!(parse_hex("#FF000080"), Some(argb(0x80, 0xFF0000)));
    }

    #[test]
    fn parse_hex_rejects_malformed() {
        for bad in ["", "#", "#12345", "#1234567", "#GG0000", "#+12345", "#123456789"] {
            assert_eq!(parse_hex(bad), None, "{bad}");
        }
    }

    #[test]
    fn diagram_preset_overrides_background_and_info() {
        let d = Palette::diagram();
        let p = Palette::professional();
        assert_eq!(d.bg, rgb(0xF8FAFC));
        assert_eq!(d.info, rgb(0x00BCD4));
        assert_eq!(d.primary, p.primary);
        assert_ne!(d.bg, p.bg);
    }

    #[test]
    fn outline_button_has_border() {
        let p = Palette::professional();
        let (fill, fg, border) = p.button(ButtonVariant::Outline);
        assert_eq!(fill, p.white);
        assert_eq!(fg, p.primary);
        assert_eq!(border, Some(p.primary));
        assert_eq!(p.button(ButtonVariant::Danger).2, None);
    }
}
