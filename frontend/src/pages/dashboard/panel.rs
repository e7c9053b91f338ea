use crate::pages::dashboard::{
    components::{HrPanel, LearningPanel, LeaveModal, OverviewPanel},
    layout::DashboardFrame,
    repository::{TabSpec, TABS},
};
use leptos::*;

#[component]
fn NavTabs() -> impl IntoView {
    view! {
        <nav class="nav-tabs" role="tablist">
            {TABS
                .iter()
                .enumerate()
                .map(|(index, TabSpec { id, label })| {
                    let class = if index == 0 { "nav-tab active" } else { "nav-tab" };
                    view! {
                        <button type="button" class=class data-tab=*id role="tab">
                            {*label}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

/// Markup the controller wires. The first tab and its panel start active.
#[component]
pub fn DashboardPage(
    #[prop(into)] brand: String,
    #[prop(into)] user: String,
) -> impl IntoView {
    view! {
        <DashboardFrame brand=brand user=user>
            <NavTabs/>
            <OverviewPanel active=true/>
            <HrPanel/>
            <LearningPanel/>
            <LeaveModal/>
        </DashboardFrame>
    }
}
