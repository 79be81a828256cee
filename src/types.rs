/*
 * Portable value types for the dock panel: the logical panel configuration,
 * the pixel geometry derived from a monitor, and the EWMH strut reservation
 * words computed from that geometry. Everything here is pure math with no
 * toolkit or display-server dependency, so the invariants are unit-testable
 * on any platform.
 */
use std::ffi::OsString;
use std::os::raw::c_ulong;

/// Number of 32-bit words in a `_NET_WM_STRUT_PARTIAL` property.
pub(crate) const STRUT_PARTIAL_LEN: usize = 12;
/// Number of leading words reused for the legacy `_NET_WM_STRUT` property.
pub(crate) const STRUT_LEGACY_LEN: usize = 4;

// Word indices within `_NET_WM_STRUT_PARTIAL`, per the EWMH ordering.
const STRUT_BOTTOM: usize = 3;
const STRUT_BOTTOM_START_X: usize = 10;
const STRUT_BOTTOM_END_X: usize = 11;

/*
 * Logical (unscaled) sizing for the panel strip. The defaults are the fixed
 * base the shell ships with: a 60 px tall strip floated 4 px off the bottom
 * screen edge. Both values are multiplied by the monitor's integer scale
 * factor when the window is staged.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelConfig {
    pub logical_height: i32,
    pub logical_bottom_margin: i32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            logical_height: 60,
            logical_bottom_margin: 4,
        }
    }
}

/*
 * Pixel geometry of the staged panel window, computed once from the primary
 * monitor and moved into the first-frame handler when it is registered. The
 * fields are never negative: scaled sizes and the monitor width are clamped
 * at zero.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelGeometry {
    pub width: i32,
    pub height: i32,
    pub bottom_margin: i32,
}

impl PanelGeometry {
    /// Derives the panel geometry from a monitor's pixel width and integer
    /// content scale factor. The panel always spans the monitor's full width.
    pub fn from_monitor(config: PanelConfig, monitor_width: i32, scale_factor: i32) -> Self {
        Self {
            width: monitor_width.max(0),
            height: (config.logical_height * scale_factor).max(0),
            bottom_margin: (config.logical_bottom_margin * scale_factor).max(0),
        }
    }

    /// Vertical origin that pins the panel to the bottom edge, inset by the
    /// bottom margin. The horizontal origin is always 0.
    pub fn origin_y(&self, monitor_height: i32) -> i32 {
        monitor_height - self.height - self.bottom_margin
    }

    /*
     * Builds the `_NET_WM_STRUT_PARTIAL` word array: a bottom-edge
     * reservation of height + margin, spanning the panel's full width. All
     * other words stay zero. The first `STRUT_LEGACY_LEN` words double as the
     * legacy `_NET_WM_STRUT` payload.
     */
    pub(crate) fn strut_partial(&self) -> [c_ulong; STRUT_PARTIAL_LEN] {
        let mut strut = [0; STRUT_PARTIAL_LEN];
        strut[STRUT_BOTTOM] = (self.height + self.bottom_margin) as c_ulong;
        strut[STRUT_BOTTOM_START_X] = 0;
        strut[STRUT_BOTTOM_END_X] = self.width as c_ulong;
        strut
    }
}

/// Process arguments after the program name, forwarded verbatim to the
/// embedded runtime as entrypoint arguments.
pub(crate) fn entrypoint_arguments(argv: &[OsString]) -> Vec<String> {
    argv.iter()
        .skip(1)
        .map(|argument| argument.to_string_lossy().into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sixty_by_four() {
        let config = PanelConfig::default();
        assert_eq!(config.logical_height, 60);
        assert_eq!(config.logical_bottom_margin, 4);
    }

    #[test]
    fn geometry_scales_height_and_margin_with_scale_factor() {
        // Arrange
        let config = PanelConfig::default();
        // Act
        let at_1x = PanelGeometry::from_monitor(config, 1920, 1);
        let at_2x = PanelGeometry::from_monitor(config, 3840, 2);
        // Assert
        assert_eq!(at_1x.height, 60);
        assert_eq!(at_1x.bottom_margin, 4);
        assert_eq!(at_1x.width, 1920);
        assert_eq!(at_2x.height, 120);
        assert_eq!(at_2x.bottom_margin, 8);
        assert_eq!(at_2x.width, 3840);
    }

    #[test]
    fn geometry_clamps_negative_monitor_width() {
        let geometry = PanelGeometry::from_monitor(PanelConfig::default(), -100, 1);
        assert_eq!(geometry.width, 0);
    }

    #[test]
    fn origin_sits_margin_pixels_above_the_bottom_edge() {
        let geometry = PanelGeometry::from_monitor(PanelConfig::default(), 1920, 1);
        assert_eq!(geometry.origin_y(1080), 1080 - 60 - 4);

        let scaled = PanelGeometry::from_monitor(PanelConfig::default(), 3840, 2);
        assert_eq!(scaled.origin_y(2160), 2160 - 120 - 8);
    }

    #[test]
    fn strut_reserves_bottom_region_only() {
        for (width, scale) in [(1280, 1), (1920, 1), (3840, 2), (5120, 3)] {
            let geometry = PanelGeometry::from_monitor(PanelConfig::default(), width, scale);
            let strut = geometry.strut_partial();

            assert_eq!(
                strut[3],
                (geometry.height + geometry.bottom_margin) as c_ulong
            );
            assert_eq!(strut[10], 0);
            assert_eq!(strut[11], geometry.width as c_ulong);
            for (index, word) in strut.iter().enumerate() {
                if index != 3 && index != 11 {
                    assert_eq!(*word, 0, "unexpected reservation at strut index {index}");
                }
            }
        }
    }

    #[test]
    fn legacy_strut_prefix_carries_only_the_bottom_word() {
        let geometry = PanelGeometry::from_monitor(PanelConfig::default(), 1920, 2);
        let strut = geometry.strut_partial();
        let legacy = &strut[..STRUT_LEGACY_LEN];
        assert_eq!(legacy, &[0, 0, 0, (120 + 8) as c_ulong]);
    }

    #[test]
    fn entrypoint_arguments_drop_the_program_name() {
        // Arrange
        let argv = vec![
            OsString::from("/usr/bin/panel"),
            OsString::from("--route"),
            OsString::from("home"),
        ];
        // Act
        let arguments = entrypoint_arguments(&argv);
        // Assert
        assert_eq!(arguments, vec!["--route".to_string(), "home".to_string()]);
    }

    #[test]
    fn entrypoint_arguments_tolerate_empty_argv() {
        assert!(entrypoint_arguments(&[]).is_empty());
        assert!(entrypoint_arguments(&[OsString::from("panel")]).is_empty());
    }
}
