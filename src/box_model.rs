//! CSS box arithmetic for reading element heights.
//!
//! `offsetHeight` covers padding and border, while an inline `height` is
//! applied to the box selected by `box-sizing`. Heights handed to the toggle
//! are in the latter unit so that writing one back leaves the layout as it was.

/// Parse a computed CSS length such as `"12.5px"`. Empty or non-px values
/// are treated as absent.
pub fn parse_px(value: &str) -> Option<f32> {
    value
        .trim()
        .strip_suffix("px")?
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|px| px.is_finite())
}

/// Vertical box metrics of one element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VerticalBox {
    /// Rendered border-box height (`offsetHeight`)
    pub offset_height: f32,
    pub padding_top: f32,
    pub padding_bottom: f32,
    pub border_top: f32,
    pub border_bottom: f32,
    /// `box-sizing: border-box`
    pub border_box: bool,
}

impl VerticalBox {
    /// Height in the unit the `height` property uses for this element.
    pub fn style_height(&self) -> f32 {
        if self.border_box {
            return self.offset_height.max(0.0);
        }
        let chrome = self.padding_top + self.padding_bottom + self.border_top + self.border_bottom;
        (self.offset_height - chrome).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_px() {
        assert_eq!(parse_px("10px"), Some(10.0));
        assert_eq!(parse_px(" 0.5px "), Some(0.5));
        assert_eq!(parse_px("0px"), Some(0.0));
        assert_eq!(parse_px("auto"), None);
        assert_eq!(parse_px("1em"), None);
        assert_eq!(parse_px(""), None);
    }

    #[test]
    fn test_content_box_excludes_padding_and_border() {
        let padded = VerticalBox {
            offset_height: 172.0,
            padding_top: 10.0,
            padding_bottom: 10.0,
            border_top: 1.0,
            border_bottom: 1.0,
            border_box: false,
        };
        assert_eq!(padded.style_height(), 150.0);

        // a collapsed panel still shows its padding
        let collapsed = VerticalBox {
            offset_height: 20.0,
            ..padded
        };
        assert_eq!(collapsed.style_height(), 0.0);
    }

    #[test]
    fn test_border_box_uses_offset_height() {
        let panel = VerticalBox {
            offset_height: 170.0,
            padding_top: 10.0,
            padding_bottom: 10.0,
            border_box: true,
            ..VerticalBox::default()
        };
        assert_eq!(panel.style_height(), 170.0);
    }
}
