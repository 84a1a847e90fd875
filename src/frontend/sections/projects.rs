use yew::prelude::*;

use super::{layer_transform, Backdrop, Reveal};
use crate::{
    content::{Project, PROJECTS, PROJECT_ROW_HEIGHT_PX},
    frontend::hooks::{use_pointer_offset, use_scroll_y, use_spring, RevealOptions},
    motion::{PointerProfile, ScrollParallax},
    navigation::SectionId,
};

const CARD_STAGGER_MS: u32 = 200;

fn project_card(position: usize, project: &Project) -> Html {
    let hidden = project.hidden_technology_count();

    html! {
        <li key={project.id} class={classes!("project", format!("project-{}", project.side.as_str()))}>
            <Reveal
                options={RevealOptions::REPEAT}
                delay_ms={position as u32 * CARD_STAGGER_MS}
                class={classes!("project-reveal", format!("reveal-from-{}", project.side.as_str()))}
            >
                <span class="project-branch" aria-hidden="true" />
                <article class="project-card">
                    <div class="project-media">
                        <img src={project.image_url} alt={project.title} loading="lazy" />
                        <span class="project-icon" aria-hidden="true">{project.icon}</span>
                    </div>
                    <div class="project-body">
                        <h3>{project.title}</h3>
                        <p>{project.description}</p>
                        <ul class="chips">
                            { for project.visible_technologies().iter().map(|technology| html! {
                                <li key={*technology} class="chip">{*technology}</li>
                            }) }
                            if hidden > 0 {
                                <li class="chip chip-muted">{format!("+{hidden}")}</li>
                            }
                        </ul>
                    </div>
                </article>
            </Reveal>
        </li>
    }
}

#[function_component(ProjectsSection)]
pub fn projects_section() -> Html {
    let section_ref = use_node_ref();
    let scroll_y = use_scroll_y();
    let (offset_x, offset_y) = use_pointer_offset(section_ref.clone());

    let profile = PointerProfile::PROJECTS;
    let (target_x, target_y) = profile.tilt((offset_x, offset_y));
    let tilt_x = use_spring(profile.spring, target_x);
    let tilt_y = use_spring(profile.spring, target_y);

    let spine_style = format!("height: {}px;", PROJECTS.len() * PROJECT_ROW_HEIGHT_PX);

    html! {
        <section id={SectionId::Projects.as_str()} ref={section_ref} class="section projects">
            <Backdrop
                word="PROJECTS"
                offset_y={ScrollParallax::PROJECTS_BACKGROUND.offset(scroll_y)}
                drift={profile.drift((offset_x, offset_y))}
            />

            <div class="section-inner">
                <Reveal class="section-heading">
                    <span class="section-kicker">{"My recent work"}</span>
                    <h2>{"Featured "}<span class="accent">{"Projects"}</span></h2>
                </Reveal>

                <div class="projects-timeline" style={layer_transform(0.0, tilt_x, tilt_y)}>
                    <Reveal options={RevealOptions::REPEAT} class="projects-spine">
                        <span class="projects-spine-line" style={spine_style} aria-hidden="true" />
                    </Reveal>
                    <ol class="project-list">
                        { for PROJECTS.iter().enumerate().map(|(position, project)| project_card(position, project)) }
                    </ol>
                </div>
            </div>
        </section>
    }
}
