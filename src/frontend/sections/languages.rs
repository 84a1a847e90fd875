use yew::prelude::*;

use super::Reveal;
use crate::{
    content::SKILLS,
    frontend::hooks::{
        use_pointer_position, use_scroll_progress, use_site_config, use_spring,
        use_viewport_size, RevealOptions,
    },
    motion::{languages_tilt, scatter_particle, viewport_drift, SpringConfig},
    navigation::SectionId,
};

const POINTER_DRIFT_FACTOR: f64 = 0.01;
const MOBILE_PARTICLES: usize = 20;
const DESKTOP_PARTICLES: usize = 50;
const CARD_STAGGER_MS: u32 = 150;

fn particle(index: usize) -> Html {
    let placement = scatter_particle(index);
    let style = format!(
        "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s;",
        placement.left_pct, placement.top_pct, placement.delay_s, placement.duration_s,
    );

    html! { <span key={index} class="particle" style={style} /> }
}

#[function_component(Languages)]
pub fn languages() -> Html {
    let config = use_site_config();
    let section_ref = use_node_ref();
    let (viewport_width, viewport_height) = use_viewport_size();
    let mobile = config.is_mobile_width(viewport_width);

    let pointer = use_pointer_position(!mobile);
    let progress = use_scroll_progress(section_ref.clone());
    let (target_x, target_y) = pointer
        .map(|(x, y)| viewport_drift(x, y, (viewport_width, viewport_height), POINTER_DRIFT_FACTOR))
        .unwrap_or((0.0, 0.0));
    let drift_x = use_spring(SpringConfig::LANGUAGES, target_x);
    let drift_y = use_spring(SpringConfig::LANGUAGES, target_y);

    let header_style = format!(
        "transform: translate3d({drift_x:.2}px, {drift_y:.2}px, 0) rotateX({:.2}deg);",
        languages_tilt(progress),
    );
    let particle_count = if mobile {
        MOBILE_PARTICLES
    } else {
        DESKTOP_PARTICLES
    };

    html! {
        <section id={SectionId::Languages.as_str()} ref={section_ref} class="section languages">
            <div class="particles" aria-hidden="true">
                { for (0..particle_count).map(particle) }
            </div>

            <div class="languages-header" style={header_style}>
                <Reveal options={RevealOptions::ONCE_INSET} class="languages-header-reveal">
                    <div class="languages-kicker">{"TABLE OF"}</div>
                </Reveal>
            </div>

            <div class="languages-stage">
                <Reveal class="languages-word-reveal">
                    <h2 class="languages-word">{"LANGUAGES"}</h2>
                </Reveal>

                <ul class="skills-grid">
                    { for SKILLS.iter().enumerate().map(|(position, skill)| html! {
                        <li key={skill.index} class="skill" style={format!("--skill-color: {};", skill.color)}>
                            <Reveal delay_ms={position as u32 * CARD_STAGGER_MS} class="skill-reveal">
                                <div class="skill-index">{skill.index}</div>
                                <div class="skill-title">{skill.title}</div>
                                <div class="skill-subtitle">{skill.subtitle}</div>
                            </Reveal>
                        </li>
                    }) }
                </ul>
            </div>
        </section>
    }
}
