use maud::{html, Markup};

use crate::middleware::session::Session;
use crate::models::study_plan::{RecommendationKind, StudyPlan};
use crate::views::page_with_session;

pub fn study_plan(session: &Session, plan: &StudyPlan) -> Markup {
    page_with_session(
        "Study plan",
        session,
        html! {
            h1 {
                @if let Some(name) = &plan.user_name {
                    (name) "'s study plan"
                } @else {
                    "Your study plan"
                }
            }
            @if plan.enrolled_courses_count.is_some() || plan.completed_lessons_count.is_some() {
                p {
                    @if let Some(n) = plan.enrolled_courses_count {
                        "Enrolled courses: " strong { (n) } " "
                    }
                    @if let Some(n) = plan.completed_lessons_count {
                        "Completed lessons: " strong { (n) }
                    }
                }
            }
            @if plan.recommendations.is_empty() {
                p { "No recommendations yet. Take a pre-assessment quiz to get personalised suggestions." }
            } @else {
                ul {
                    @for rec in &plan.recommendations {
                        li {
                            a href=(rec.href()) { (rec.title) }
                            " "
                            small {
                                @match rec.kind {
                                    RecommendationKind::Course => { "(course)" }
                                    RecommendationKind::Module => { "(module)" }
                                }
                            }
                            @if let Some(desc) = &rec.description {
                                br;
                                (desc)
                            }
                        }
                    }
                }
            }
        },
    )
}
