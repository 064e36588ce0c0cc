//! Display descriptors for categories and entry kinds.

use serde::Serialize;

use crate::entry::{Category, Kind};
use crate::summary::ChartSlice;

/// Colour used for every debit slice regardless of category.
pub const DEBIT_SLICE_COLOR: &str = "#e57373";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryStyle {
    /// Hex colour for chart series
    pub chart_color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KindStyle {
    /// Prefix shown before an amount
    pub sign: &'static str,
    /// Arrow glyph for summary cards
    pub arrow: &'static str,
}

impl Category {
    pub fn style(&self) -> CategoryStyle {
        let chart_color = match self {
            Category::Food => "#8884d8",
            Category::Transport => "#82ca9d",
            Category::Utilities => "#ff7300",
            Category::Entertainment => "#ffb347",
            Category::Healthcare => "#8dd1e1",
            Category::Shopping => "#d084d0",
            Category::Education => "#ffc658",
            Category::Other => "#87ceeb",
        };
        CategoryStyle { chart_color }
    }
}

impl Kind {
    pub fn style(&self) -> KindStyle {
        match self {
            Kind::Credit => KindStyle { sign: "+", arrow: "↑" },
            Kind::Debit => KindStyle { sign: "-", arrow: "↓" },
        }
    }
}

impl ChartSlice {
    pub fn color(&self) -> &'static str {
        match self.kind {
            Kind::Credit => self.category.style().chart_color,
            Kind::Debit => DEBIT_SLICE_COLOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::collections::HashSet;

    #[test]
    fn test_every_category_has_a_distinct_chart_color() {
        let colors: HashSet<&str> = Category::ALL.iter().map(|c| c.style().chart_color).collect();
        assert_eq!(colors.len(), Category::ALL.len());
    }

    #[test]
    fn test_slice_color_by_kind() {
        let slice = |kind| ChartSlice {
            name: String::new(),
            category: Category::Food,
            kind,
            value: Decimal::ONE,
        };
        assert_eq!(slice(Kind::Credit).color(), "#8884d8");
        assert_eq!(slice(Kind::Debit).color(), DEBIT_SLICE_COLOR);
        assert_eq!(Kind::Debit.style().sign, "-");
    }
}
