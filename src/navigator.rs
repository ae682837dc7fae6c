use tracing::debug;

use crate::constants::{classes, elements, pages};
use crate::surface::Surface;

/// Switches which top-level page panel is visible.
pub struct PageNavigator;

impl PageNavigator {
    /// Deactivates every panel, closes the mobile menu, then activates
    /// `page-<page_id>` and scrolls to the top.
    ///
    /// When the panel does not exist nothing further happens and `false` is
    /// returned; the other panels stay deactivated.
    pub fn show<S: Surface>(surface: &mut S, page_id: &str) -> bool {
        for panel in surface.ids_with_class(pages::PANEL_CLASS) {
            surface.remove_class(&panel, classes::ACTIVE);
        }
        surface.remove_class(elements::MOBILE_MENU, classes::ACTIVE);

        let target = format!("{}{page_id}", pages::ID_PREFIX);
        if !surface.contains(&target) {
            debug!(page_id, "No such page panel");
            return false;
        }

        surface.add_class(&target, classes::ACTIVE);
        surface.scroll_to(0.0);
        true
    }
}
