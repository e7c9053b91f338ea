use leptos::*;

#[component]
pub fn LeaveModal() -> impl IntoView {
    view! {
        <div id="leaveModal" class="modal">
            <div class="modal-content" role="dialog" aria-modal="true">
                <div class="modal-header">
                    <h3>{"Request Leave"}</h3>
                    <button id="closeLeaveModal" type="button" class="modal-close" aria-label="Close">
                        {"✕"}
                    </button>
                </div>
                <form class="leave-form">
                    <label>
                        {"Leave type"}
                        <select name="leave_type">
                            <option value="annual">{"Annual"}</option>
                            <option value="sick">{"Sick"}</option>
                            <option value="personal">{"Personal"}</option>
                        </select>
                    </label>
                    <label>
                        {"From"}
                        <input type="date" name="start_date"/>
                    </label>
                    <label>
                        {"To"}
                        <input type="date" name="end_date"/>
                    </label>
                    <label>
                        {"Reason"}
                        <textarea name="reason" rows="3"></textarea>
                    </label>
                    <div class="modal-footer">
                        <button id="cancelLeave" type="button" class="btn">{"Cancel"}</button>
                        <button type="submit" class="btn btn-primary">{"Submit Request"}</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
