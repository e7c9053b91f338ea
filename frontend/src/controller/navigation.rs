use super::{progress::ProgressAnimator, UiContext, ACTIVE};
use crate::dom::{EventKind, Group, UiElement, UiRegistry};
use crate::error::UiError;
use std::rc::Rc;

pub const TARGET_ATTR: &str = "data-tab";

/// Makes `tab` the only active tab and activates the panel named by its
/// `data-tab`. Returns the activated panel; when no panel matches, the tab
/// stays active with every panel hidden.
pub fn activate<E: UiElement>(registry: &UiRegistry<E>, tab: &E) -> Option<E> {
    for other in registry.group(Group::NavTabs) {
        other.remove_class(ACTIVE);
    }
    for panel in registry.group(Group::TabContents) {
        panel.remove_class(ACTIVE);
    }
    tab.add_class(ACTIVE);

    let target = tab.attribute(TARGET_ATTR)?;
    let panel = registry.by_id(&target).into_option()?;
    panel.add_class(ACTIVE);
    Some(panel)
}

pub fn install<E: UiElement>(
    ctx: &UiContext<E>,
    progress: &ProgressAnimator<E>,
) -> Result<usize, UiError> {
    let tabs = ctx.registry.group(Group::NavTabs);
    for tab in tabs {
        let registry = Rc::clone(&ctx.registry);
        let progress = progress.clone();
        let clicked = tab.clone();
        tab.listen(
            EventKind::Click,
            Box::new(move |_: &E::Event| {
                if activate(&registry, &clicked).is_some() {
                    progress.animate();
                }
            }),
        )?;
    }
    Ok(tabs.len())
}
