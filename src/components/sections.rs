//! Content sections below the hero, and the page footer.

use leptos::ev;
use leptos::prelude::*;

use super::ContactForm;
use crate::app::AppContext;
use crate::core::TiltSession;
use crate::core::tilt::Rect;
use crate::models::{Project, Skill, TimelineItem};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/sections.module.css");

#[component]
pub fn Sections() -> impl IntoView {
    view! {
        <About />
        <Skills />
        <Experience />
        <Projects />
        <Contact />
    }
}

#[component]
fn SectionTitle(title: &'static str) -> impl IntoView {
    view! { <h2 class=css::title data-reveal="">{title}</h2> }
}

#[component]
fn About() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let paragraphs = ctx.content.with_value(|c| c.about.clone());

    view! {
        <section id="about" class=css::section>
            <SectionTitle title="About me" />
            {paragraphs
                .into_iter()
                .map(|text| view! { <p class=css::lead data-reveal="">{text}</p> })
                .collect_view()}
        </section>
    }
}

// ============================================================================
// Skills
// ============================================================================

#[component]
fn Skills() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let skills = ctx.content.with_value(|c| c.skills.clone());

    view! {
        <section id="skills" class=css::section>
            <SectionTitle title="Skills" />
            <ul class=css::skills>
                {skills.into_iter().map(|skill| view! { <SkillBar skill /> }).collect_view()}
            </ul>
        </section>
    }
}

/// Labelled bar. The reveal engine fills the inner span to `data-percent`.
#[component]
fn SkillBar(skill: Skill) -> impl IntoView {
    view! {
        <li class=css::skill>
            <div class=css::skillHeader>
                <span>{skill.name}</span>
                <span class=css::percent>{format!("{}%", skill.percent)}</span>
            </div>
            <div class=format!("{} progress", css::track) data-percent=skill.percent.to_string()>
                <span class=css::bar></span>
            </div>
        </li>
    }
}

// ============================================================================
// Experience
// ============================================================================

#[component]
fn Experience() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let items = ctx.content.with_value(|c| c.timeline.clone());

    view! {
        <section id="experience" class=css::section>
            <SectionTitle title="Experience" />
            <ol class=css::timeline>
                {items.into_iter().map(|item| view! { <TimelineEntry item /> }).collect_view()}
            </ol>
        </section>
    }
}

#[component]
fn TimelineEntry(item: TimelineItem) -> impl IntoView {
    view! {
        <li class=format!("{} timeline-item", css::timelineItem)>
            <span class=css::period>{item.period}</span>
            <h3>{item.title}</h3>
            <p>{item.body}</p>
        </li>
    }
}

// ============================================================================
// Projects
// ============================================================================

#[component]
fn Projects() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let projects = ctx.content.with_value(|c| c.projects.clone());
    let tilt = ctx.capabilities.animate_motion();

    view! {
        <section id="projects" class=css::section>
            <SectionTitle title="Projects" />
            <div class=css::grid>
                {projects
                    .into_iter()
                    .map(|project| view! { <ProjectCard project tilt /> })
                    .collect_view()}
            </div>
        </section>
    }
}

/// Project card that tilts toward the pointer.
///
/// With `tilt` off the card renders without pointer handlers.
#[component]
fn ProjectCard(project: Project, tilt: bool) -> impl IntoView {
    let card_ref = NodeRef::<leptos::html::Article>::new();
    let session = StoredValue::new(TiltSession::new());
    let transform = RwSignal::new(String::new());

    let measure = move || {
        card_ref
            .get_untracked()
            .map(|card| {
                let rect = card.get_bounding_client_rect();
                Rect {
                    left: rect.left(),
                    top: rect.top(),
                    width: rect.width(),
                    height: rect.height(),
                }
            })
            .unwrap_or(Rect {
                left: 0.0,
                top: 0.0,
                width: 0.0,
                height: 0.0,
            })
    };

    let on_move = move |ev: ev::MouseEvent| {
        if !tilt {
            return;
        }
        let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
        if let Some(value) = session
            .try_update_value(|s| s.on_move(x, y, measure))
            .flatten()
        {
            transform.set(value);
        }
    };

    let on_leave = move |_: ev::MouseEvent| {
        if !tilt {
            return;
        }
        session.update_value(TiltSession::on_leave);
        transform.set(String::new());
    };

    view! {
        <article
            node_ref=card_ref
            class=css::card
            data-reveal=""
            data-tilt=tilt.then_some("")
            style:transform=move || transform.get()
            on:mousemove=on_move
            on:mouseleave=on_leave
        >
            <h3>{project.title}</h3>
            <p>{project.body}</p>
            <ul class=css::tags>
                {project
                    .tags
                    .into_iter()
                    .map(|tag| view! { <li class=css::tag>{tag}</li> })
                    .collect_view()}
            </ul>
        </article>
    }
}

// ============================================================================
// Contact
// ============================================================================

#[component]
fn Contact() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let copy = ctx.content.with_value(|c| c.contact.clone());

    view! {
        <section id="contact" class=css::section>
            <h2 class=css::title data-reveal="">{copy.heading}</h2>
            <p class=css::lead data-reveal="">{copy.intro}</p>
            <ContactForm />
        </section>
    }
}

// ============================================================================
// Footer
// ============================================================================

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let owner = ctx.content.with_value(|c| c.owner.clone());

    view! {
        <footer class=css::footer>
            "© "
            <span id="year">{dom::current_year()}</span>
            " "
            {owner}
        </footer>
    }
}

