use umya_spreadsheet::Style;
use umya_spreadsheet::structs::PatternValues;

use crate::classify::CellClass;

// umya-spreadsheet rewrites an ARGB value that matches one of its indexed
// colours into indexed="n", which some viewers render with a different
// palette. Lowercase hex never matches that table, so rgb="..." is kept.
pub const LIGHT_BLUE: &str = "ffccccff";
pub const GRAY_25: &str = "ffc0c0c0";
pub const YELLOW: &str = "ffffff00";
pub const RED: &str = "ffff0000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSpec {
    /// Solid background fill as ARGB hex, `None` for the sheet default.
    pub background: Option<&'static str>,
    pub bold: bool,
}

impl StyleSpec {
    pub const PLAIN: StyleSpec = StyleSpec {
        background: None,
        bold: false,
    };

    pub fn for_class(class: CellClass) -> StyleSpec {
        match class {
            CellClass::Header => StyleSpec {
                background: Some(LIGHT_BLUE),
                bold: true,
            },
            CellClass::ErrorRow => StyleSpec::fill(GRAY_25),
            CellClass::InvalidEmail => StyleSpec::fill(YELLOW),
            CellClass::InvalidAge => StyleSpec::fill(RED),
            CellClass::Normal => StyleSpec::PLAIN,
        }
    }

    const fn fill(argb: &'static str) -> StyleSpec {
        StyleSpec {
            background: Some(argb),
            bold: false,
        }
    }

    pub fn is_plain(&self) -> bool {
        *self == StyleSpec::PLAIN
    }

    pub fn to_umya(&self) -> Style {
        let mut style = Style::default();
        if let Some(argb) = self.background {
            let pattern = style.get_fill_mut().get_pattern_fill_mut();
            pattern.set_pattern_type(PatternValues::Solid);
            pattern.get_foreground_color_mut().set_argb(argb);
            pattern.get_background_color_mut().set_argb(argb);
        }
        if self.bold {
            style.get_font_mut().set_bold(true);
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_is_fixed() {
        let header = StyleSpec::for_class(CellClass::Header);
        assert_eq!(header.background, Some(LIGHT_BLUE));
        assert!(header.bold);

        assert_eq!(
            StyleSpec::for_class(CellClass::ErrorRow).background,
            Some(GRAY_25)
        );
        assert_eq!(
            StyleSpec::for_class(CellClass::InvalidEmail).background,
            Some(YELLOW)
        );
        assert_eq!(
            StyleSpec::for_class(CellClass::InvalidAge).background,
            Some(RED)
        );
        assert!(StyleSpec::for_class(CellClass::Normal).is_plain());
    }

    #[test]
    fn only_header_is_bold() {
        for class in CellClass::ALL {
            assert_eq!(
                StyleSpec::for_class(class).bold,
                class == CellClass::Header,
                "{class:?}"
            );
        }
    }

    #[test]
    fn highlight_colours_are_distinct() {
        let mut colours: Vec<_> = CellClass::ALL
            .iter()
            .filter_map(|class| StyleSpec::for_class(*class).background)
            .collect();
        colours.sort();
        colours.dedup();
        assert_eq!(colours.len(), 4);
    }

    #[test]
    fn umya_style_carries_fill_and_font() {
        let style = StyleSpec::for_class(CellClass::Header).to_umya();
        let fg = style
            .get_fill()
            .and_then(|fill| fill.get_pattern_fill())
            .and_then(|pattern| pattern.get_foreground_color())
            .map(|color| color.get_argb().to_ascii_lowercase());
        assert_eq!(fg.as_deref(), Some(LIGHT_BLUE));

        let bold = style.get_font().map(|font| matches!(font.get_bold(), true));
        assert_eq!(bold, Some(true));
    }
}
