use super::{UiContext, SHOW};
use crate::dom::{Anchor, EventKind, Group, UiElement, UiEvent, Wiring};
use crate::error::UiError;
use log::info;

/// Profile menu: the trigger toggles it, any click outside the trigger or on
/// a menu item closes it.
pub fn install<E: UiElement>(ctx: &UiContext<E>) -> Result<Wiring, UiError> {
    let registry = ctx.registry.clone();
    registry
        .get(Anchor::UserProfile)
        .zip(registry.get(Anchor::ProfileDropdown))
        .attach(|(profile, menu)| {
            {
                let menu = menu.clone();
                profile.listen(
                    EventKind::Click,
                    Box::new(move |ev: &E::Event| {
                        // Keep the document listener below from closing what this opens.
                        ev.stop_propagation();
                        menu.toggle_class(SHOW);
                    }),
                )?;
            }

            {
                let profile = profile.clone();
                let menu = menu.clone();
                registry.root().listen(
                    EventKind::Click,
                    Box::new(move |ev: &E::Event| {
                        let inside = ev
                            .target()
                            .map(|target| profile.contains(&target))
                            .unwrap_or(false);
                        if !inside {
                            menu.remove_class(SHOW);
                        }
                    }),
                )?;
            }

            for item in registry.group(Group::DropdownItems) {
                let menu = menu.clone();
                let clicked = item.clone();
                item.listen(
                    EventKind::Click,
                    Box::new(move |_: &E::Event| {
                        menu.remove_class(SHOW);
                        info!("Clicked: {}", clicked.text().trim());
                    }),
                )?;
            }
            Ok(())
        })
}
