//! Fixed color palettes assigned to series entries by cyclic index

/// Ordered, non-empty list of colors reused cyclically
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: &'static [&'static str],
}

impl Palette {
    /// Panics at compile time when used in a const with an empty list.
    pub const fn new(colors: &'static [&'static str]) -> Self {
        assert!(!colors.is_empty(), "palette must contain at least one color");
        Self { colors }
    }

    /// Color for entry `index`, wrapping without bound
    pub fn color(&self, index: usize) -> &'static str {
        self.colors[index % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &'static [&'static str] {
        self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        ALLOCATION
    }
}

pub const ALLOCATION: Palette =
    Palette::new(&["#60a5fa", "#818cf8", "#a78bfa", "#c084fc", "#e879f9"]);

pub const RISK: Palette =
    Palette::new(&["#ef4444", "#f97316", "#f59e0b", "#eab308", "#84cc16"]);

pub const OPTIMIZATION: Palette =
    Palette::new(&["#10b981", "#14b8a6", "#06b6d4", "#0ea5e9", "#3b82f6"]);

/// Stroke color of the performance line
pub const PERFORMANCE_LINE: &str = "#60a5fa";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycles_with_period_len() {
        for palette in [ALLOCATION, RISK, OPTIMIZATION] {
            for i in 0..3 * palette.len() {
                assert_eq!(palette.color(i), palette.color(i + palette.len()));
            }
        }
    }

    #[test]
    fn test_wraps_large_index() {
        assert_eq!(RISK.color(0), "#ef4444");
        assert_eq!(RISK.color(5), "#ef4444");
        assert_eq!(RISK.color(usize::MAX), RISK.color(usize::MAX % RISK.len()));
    }

    #[test]
    fn test_single_color_palette() {
        const MONO: Palette = Palette::new(&["#000000"]);
        assert_eq!(MONO.color(7), "#000000");
    }
}
