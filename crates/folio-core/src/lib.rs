//! # folio-core
//!
//! Core domain types for the Portfolio Analytics Dashboard.
//! Implements Strategy pattern for value formatting.

pub mod palette;
pub mod portfolio;
pub mod records;
pub mod series;

pub use palette::Palette;
pub use portfolio::*;
pub use records::*;
pub use series::*;

// ============================================================================
// STRATEGY PATTERN: Formatters
// ============================================================================

/// Strategy trait for rendering a value as display text
pub trait ValueFormatter: Send + Sync {
    fn format(&self, value: f64) -> String;
}

/// Currency formatter with thousands grouping (e.g. "€12,000")
#[derive(Debug, Clone)]
pub struct CurrencyFormatter {
    pub symbol: &'static str,
    pub decimals: usize,
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self {
            symbol: "€",
            decimals: 0,
        }
    }
}

impl ValueFormatter for CurrencyFormatter {
    fn format(&self, value: f64) -> String {
        let sign = if value < 0.0 { "-" } else { "" };
        let fixed = format!("{:.prec$}", value.abs(), prec = self.decimals);
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (fixed.as_str(), None),
        };

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        match frac_part {
            Some(frac) => format!("{}{}{}.{}", sign, self.symbol, grouped, frac),
            None => format!("{}{}{}", sign, self.symbol, grouped),
        }
    }
}

/// Percent formatter (values already expressed in percent)
#[derive(Debug, Clone, Default)]
pub struct PercentFormatter {
    pub decimals: usize,
}

impl ValueFormatter for PercentFormatter {
    fn format(&self, value: f64) -> String {
        format!("{:.prec$}%", value, prec = self.decimals)
    }
}

/// Compact formatter for large numbers (K, M, B suffixes)
#[derive(Debug, Clone, Default)]
pub struct CompactNumberFormatter;

impl ValueFormatter for CompactNumberFormatter {
    fn format(&self, num: f64) -> String {
        let abs = num.abs();
        let sign = if num < 0.0 { "-" } else { "" };

        if abs >= 1_000_000_000.0 {
            format!("{}{:.2}B", sign, abs / 1_000_000_000.0)
        } else if abs >= 1_000_000.0 {
            format!("{}{:.2}M", sign, abs / 1_000_000.0)
        } else if abs >= 1_000.0 {
            format!("{}{:.2}K", sign, abs / 1_000.0)
        } else {
            format!("{}{:.2}", sign, abs)
        }
    }
}

// ============================================================================
// COLOR CONSTANTS
// ============================================================================

pub mod colors {
    pub const ACCENT: &str = "#60a5fa";
    pub const UP: &str = "#4ade80";
    pub const DOWN: &str = "#f87171";
    pub const WARN: &str = "#facc15";
    pub const BG_PANEL: &str = "#0f172a";
    pub const BG_ELEVATED: &str = "#1e293b";
    pub const TEXT_PRIMARY: &str = "#ffffff";
    pub const TEXT_MUTED: &str = "#64748b";
    pub const GRID: &str = "rgba(255,255,255,0.05)";

    pub fn accent_alpha(alpha: f64) -> String {
        format!("rgba(96, 165, 250, {:.2})", alpha)
    }
}
