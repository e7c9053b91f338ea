use leptos::*;

#[component]
pub fn DashboardHeader(
    #[prop(into)] brand: String,
    #[prop(into)] user: String,
) -> impl IntoView {
    let initials: String = user
        .split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .collect();

    view! {
        <header class="dashboard-header">
            <div class="brand">
                <h1>{brand}</h1>
            </div>
            <div class="header-actions">
                <div class="notification-icon" role="button" aria-label="Notifications">
                    <span class="bell">{"🔔"}</span>
                    <span class="notification-badge">{"3"}</span>
                </div>
                <div id="userProfile" class="user-profile" role="button" aria-haspopup="menu">
                    <span class="avatar">{initials}</span>
                    <span class="user-name">{user}</span>
                </div>
                <div id="profileDropdown" class="dropdown-menu" role="menu">
                    <a class="dropdown-item" role="menuitem">{"My Profile"}</a>
                    <a class="dropdown-item" role="menuitem">{"Settings"}</a>
                    <a class="dropdown-item" role="menuitem">{"Sign Out"}</a>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn DashboardFrame(
    #[prop(into)] brand: String,
    #[prop(into)] user: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="dashboard">
            <DashboardHeader brand=brand user=user/>
            <main class="dashboard-main">{children()}</main>
        </div>
    }
}
