use crate::widgets::page_shell::SidebarVisibility;

/// Width regime of the window relative to the configured breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Viewport {
    Narrow,
    Wide,
}

impl Viewport {
    /// Classify a logical window width. The breakpoint itself is wide.
    pub(crate) fn from_width(width: f32, breakpoint: f32) -> Self {
        if width < breakpoint {
            Self::Narrow
        } else {
            Self::Wide
        }
    }

    pub(crate) fn is_narrow(self) -> bool {
        matches!(self, Self::Narrow)
    }
}

/// Where the sidebar panel sits and whether the scrim is drawn behind it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SidebarPlacement {
    pub(crate) offset_x: f32,
    pub(crate) width: f32,
    pub(crate) scrim: bool,
}

/// One layer of the root view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Layer {
    Body,
    Scrim,
    Header,
    Sidebar,
}

impl SidebarPlacement {
    pub(crate) fn is_on_screen(&self) -> bool {
        self.offset_x + self.width > 0.0
    }

    /// Root view layers, bottom to top.
    ///
    /// The header sits above the scrim so its menu control stays reachable
    /// while the overlay is open.
    pub(crate) fn layers(&self) -> Vec<Layer> {
        let mut layers = vec![Layer::Body];
        if self.scrim {
            layers.push(Layer::Scrim);
        }
        layers.push(Layer::Header);
        if self.is_on_screen() {
            layers.push(Layer::Sidebar);
        }
        layers
    }
}

/// Resolve the sidebar placement for the current viewport and flag.
///
/// Wide viewports pin the panel on screen and never draw a scrim, whatever
/// the flag says.
pub(crate) fn sidebar_placement(
    viewport: Viewport,
    visibility: SidebarVisibility,
    width: f32,
) -> SidebarPlacement {
    match (viewport, visibility) {
        (Viewport::Wide, _) => SidebarPlacement {
            offset_x: 0.0,
            width,
            scrim: false,
        },
        (Viewport::Narrow, SidebarVisibility::Visible) => SidebarPlacement {
            offset_x: 0.0,
            width,
            scrim: true,
        },
        (Viewport::Narrow, SidebarVisibility::Hidden) => SidebarPlacement {
            offset_x: -width,
            width,
            scrim: false,
        },
    }
}

/// Left offset of the content region so it does not sit under the fixed
/// sidebar.
pub(crate) fn content_offset(viewport: Viewport, sidebar_width: f32) -> f32 {
    match viewport {
        Viewport::Wide => sidebar_width,
        Viewport::Narrow => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f32 = 256.0;

    #[test]
    fn given_width_below_breakpoint_when_classified_then_viewport_is_narrow()
    {
        assert_eq!(Viewport::from_width(767.0, 768.0), Viewport::Narrow);
        assert_eq!(Viewport::from_width(768.0, 768.0), Viewport::Wide);
        assert_eq!(Viewport::from_width(1440.0, 768.0), Viewport::Wide);
    }

    #[test]
    fn given_wide_viewport_when_flag_changes_then_placement_is_identical() {
        let hidden =
            sidebar_placement(Viewport::Wide, SidebarVisibility::Hidden, WIDTH);
        let visible =
            sidebar_placement(Viewport::Wide, SidebarVisibility::Visible, WIDTH);

        assert_eq!(hidden, visible);
        assert!(hidden.is_on_screen());
        assert!(!hidden.scrim);
    }

    #[test]
    fn given_narrow_viewport_when_flag_changes_then_placement_differs() {
        let hidden = sidebar_placement(
            Viewport::Narrow,
            SidebarVisibility::Hidden,
            WIDTH,
        );
        let visible = sidebar_placement(
            Viewport::Narrow,
            SidebarVisibility::Visible,
            WIDTH,
        );

        assert_ne!(hidden, visible);
        assert!(!hidden.is_on_screen());
        assert!(!hidden.scrim);
        assert!(visible.is_on_screen());
        assert!(visible.scrim);
    }

    #[test]
    fn given_open_narrow_overlay_when_layered_then_header_is_above_scrim() {
        let placement = sidebar_placement(
            Viewport::Narrow,
            SidebarVisibility::Visible,
            WIDTH,
        );

        assert_eq!(
            placement.layers(),
            vec![Layer::Body, Layer::Scrim, Layer::Header, Layer::Sidebar]
        );
    }

    #[test]
    fn given_closed_narrow_overlay_when_layered_then_only_body_and_header() {
        let placement = sidebar_placement(
            Viewport::Narrow,
            SidebarVisibility::Hidden,
            WIDTH,
        );

        assert_eq!(placement.layers(), vec![Layer::Body, Layer::Header]);
    }

    #[test]
    fn given_wide_viewport_when_layered_then_sidebar_is_drawn_without_scrim() {
        let placement =
            sidebar_placement(Viewport::Wide, SidebarVisibility::Hidden, WIDTH);

        assert_eq!(
            placement.layers(),
            vec![Layer::Body, Layer::Header, Layer::Sidebar]
        );
    }

    #[test]
    fn given_viewport_when_content_offset_computed_then_only_wide_is_shifted()
    {
        assert_eq!(content_offset(Viewport::Wide, WIDTH), WIDTH);
        assert_eq!(content_offset(Viewport::Narrow, WIDTH), 0.0);
    }
}
