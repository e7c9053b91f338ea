use super::overview::ProgressRow;
use crate::pages::dashboard::repository::{self, Course, Session};
use leptos::*;

#[component]
fn CourseCard(course: Course) -> impl IntoView {
    let Course {
        title,
        provider,
        progress,
    } = course;
    view! {
        <div class="course-card">
            <h4>{title}</h4>
            <p class="course-provider">{provider}</p>
            {match progress {
                Some(done) => view! {
                    <div class="course-progress">
                        <h4 class="sr-only">{title}</h4>
                        <ProgressRow title="Progress" progress=done/>
                        <button type="button" class="btn-continue">{"Continue"}</button>
                    </div>
                }
                .into_view(),
                None => view! {
                    <div class="course-actions">
                        <button type="button" class="btn-enroll">{"Enroll"}</button>
                    </div>
                }
                .into_view(),
            }}
        </div>
    }
}

#[component]
fn SessionItem(session: Session) -> impl IntoView {
    view! {
        <div class="session-item">
            <h4>{session.title}</h4>
            <p class="session-time">{session.starts_at}</p>
            <button type="button" class="btn-join">{"Join"}</button>
        </div>
    }
}

#[component]
pub fn LearningPanel() -> impl IntoView {
    view! {
        <section id="learning" class="tab-content">
            <div class="panel quick-actions">
                <button id="btnEnrollCourse" type="button" class="btn">{"Enroll in Course"}</button>
                <button id="btnMyCourses" type="button" class="btn">{"My Learning Path"}</button>
                <button id="btnCertificates" type="button" class="btn">{"My Certificates"}</button>
                <button id="btnScheduleTraining" type="button" class="btn">{"Schedule Training"}</button>
            </div>
            <div class="course-grid">
                {repository::courses()
                    .into_iter()
                    .map(|course| view! { <CourseCard course=course/> })
                    .collect_view()}
            </div>
            <div class="panel">
                <h3>{"Upcoming Sessions"}</h3>
                {repository::sessions()
                    .into_iter()
                    .map(|session| view! { <SessionItem session=session/> })
                    .collect_view()}
            </div>
        </section>
    }
}
