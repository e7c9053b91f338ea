use crate::pages::dashboard::repository::{self, Goal, Metric, PendingLeave};
use leptos::*;

#[component]
fn MetricCard(metric: Metric) -> impl IntoView {
    view! {
        <div class="metric-card">
            <p class="metric-label">{metric.label}</p>
            <p class="metric-value">{metric.value}</p>
            <p class="metric-hint">{metric.hint}</p>
        </div>
    }
}

#[component]
pub fn ProgressRow(#[prop(into)] title: String, progress: u8) -> impl IntoView {
    view! {
        <div class="progress-item">
            <div class="progress-label">
                <span>{title}</span>
                <span>{format!("{progress}%")}</span>
            </div>
            <div class="progress-track">
                <div class="progress-bar" data-progress={progress.to_string()} style="width: 0%"></div>
            </div>
        </div>
    }
}

#[component]
pub fn OverviewPanel(#[prop(optional)] active: bool) -> impl IntoView {
    let class = if active { "tab-content active" } else { "tab-content" };
    view! {
        <section id="overview" class=class>
            <div class="metric-grid">
                {repository::metrics()
                    .into_iter()
                    .map(|metric| view! { <MetricCard metric=metric/> })
                    .collect_view()}
            </div>
            <div class="panel">
                <h3>{"Goals"}</h3>
                {repository::goals()
                    .into_iter()
                    .map(|Goal { title, progress }| view! { <ProgressRow title=title progress=progress/> })
                    .collect_view()}
            </div>
            <div class="panel quick-actions">
                <h3>{"Quick Actions"}</h3>
                <button id="btnAttendance" type="button" class="btn">{"Mark Attendance"}</button>
                <button id="btnLeaveRequest" type="button" class="btn">{"Request Leave"}</button>
                <button id="btnPayslip" type="button" class="btn">{"View Payslip"}</button>
                <button id="btnReimbursement" type="button" class="btn">{"Request Reimbursement"}</button>
            </div>
        </section>
    }
}

#[component]
fn PendingLeaveRow(leave: PendingLeave) -> impl IntoView {
    view! {
        <tr>
            <td>{leave.employee}</td>
            <td>{leave.kind}</td>
            <td>{leave.period}</td>
            <td class="row-actions">
                <button type="button" class="btn-approve">{"Approve"}</button>
                <button type="button" class="btn-reject">{"Reject"}</button>
            </td>
        </tr>
    }
}

#[component]
pub fn HrPanel() -> impl IntoView {
    view! {
        <section id="hr" class="tab-content">
            <div class="panel">
                <h3>{"Pending Leave Approvals"}</h3>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{"Employee"}</th>
                            <th>{"Type"}</th>
                            <th>{"Period"}</th>
                            <th>{"Action"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {repository::pending_leaves()
                            .into_iter()
                            .map(|leave| view! { <PendingLeaveRow leave=leave/> })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </section>
    }
}
