// File: crates/mockup-core/src/types.rs
// Summary: Shared types and constants (canvas sizes, font specs, widget variants).

/// Desktop wireframe width in pixels.
pub const WIDTH: i32 = 1200;
/// Desktop wireframe height in pixels.
pub const HEIGHT: i32 = 800;
/// Mobile wireframe width in pixels.
pub const MOBILE_WIDTH: i32 = 400;
/// Mobile wireframe height in pixels.
pub const MOBILE_HEIGHT: i32 = 800;

/// Width of the navigation sidebar band.
pub const SIDEBAR_WIDTH: i32 = 220;

/// Font request: pixel size and weight. Families come from the system font manager.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSpec {
    pub size: f32,
    pub bold: bool,
}

impl FontSpec {
    pub const fn regular(size: f32) -> Self {
        Self { size, bold: false }
    }
    pub const fn bold(size: f32) -> Self {
        Self { size, bold: true }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::regular(12.0)
    }
}

/// Button colour scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Primary,
    Success,
    Danger,
    Outline,
}

/// Semantic colour used by badges and table cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Primary,
    Success,
    Warning,
    Danger,
    Info,
    Light,
}

impl Tone {
    /// Look a tone up by name; unknown names map to `Primary`.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "success" => Tone::Success,
            "warning" => Tone::Warning,
            "danger" => Tone::Danger,
            "info" => Tone::Info,
            "light" => Tone::Light,
            _ => Tone::Primary,
        }
    }
}

/// Row and header heights for `widgets::table`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableStyle {
    pub header_height: i32,
    pub row_height: i32,
}

impl TableStyle {
    /// Tighter rows used by the plain wireframe set.
    pub const fn compact() -> Self {
        Self { header_height: 36, row_height: 40 }
    }

    /// Total pixel height for `rows` body rows.
    pub const fn total_height(&self, rows: usize) -> i32 {
        self.header_height + self.row_height * rows as i32
    }
}

impl Default for TableStyle {
    fn default() -> Self {
        Self { header_height: 44, row_height: 48 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_names_are_case_insensitive() {
        assert_eq!(Tone::from_name("Success"), Tone::Success);
        assert_eq!(Tone::from_name("DANGER"), Tone::Danger);
        assert_eq!(Tone::from_name("light"), Tone::Light);
        assert_eq!(Tone::from_name("primary"), Tone::Primary);
    }

    #[test]
    fn unknown_tone_falls_back_to_primary() {
        assert_eq!(Tone::from_name("teal"), Tone::Primary);
        assert_eq!(Tone::from_name(""), Tone::Primary);
    }

    #[test]
    fn table_heights() {
        assert_eq!(TableStyle::compact().total_height(5), 236);
        assert_eq!(TableStyle::default().total_height(0), 44);
    }
}
