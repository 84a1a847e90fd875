use yew::prelude::*;

use super::{layer_transform, Backdrop, Reveal};
use crate::{
    content::{ABOUT_PARAGRAPHS, EXPERIENCES, PROFILE, PROFILE_IMAGE, STATS},
    frontend::{
        hooks::{use_pointer_offset, use_scroll_y, use_site_config, use_spring},
        scroll_to_section,
    },
    motion::{PointerProfile, ScrollParallax},
    navigation::SectionId,
};

const STAT_STAGGER_MS: u32 = 100;
const EXPERIENCE_STAGGER_MS: u32 = 200;

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    let config = use_site_config();
    let section_ref = use_node_ref();
    let scroll_y = use_scroll_y();
    let (offset_x, offset_y) = use_pointer_offset(section_ref.clone());

    let profile = PointerProfile::ABOUT;
    let (target_x, target_y) = profile.tilt((offset_x, offset_y));
    let tilt_x = use_spring(profile.spring, target_x);
    let tilt_y = use_spring(profile.spring, target_y);

    let on_work_together = {
        let nav_offset = config.nav_offset;
        Callback::from(move |_: MouseEvent| {
            scroll_to_section(SectionId::Contact, nav_offset);
        })
    };

    html! {
        <section id={SectionId::About.as_str()} ref={section_ref} class="section about">
            <Backdrop
                word="ABOUT"
                offset_y={ScrollParallax::ABOUT_BACKGROUND.offset(scroll_y)}
                drift={profile.drift((offset_x, offset_y))}
            />

            <div class="section-inner">
                <Reveal class="section-heading">
                    <span class="section-kicker">{"Get to know me"}</span>
                    <h2>{"About "}<span class="accent">{"Me"}</span></h2>
                </Reveal>

                <div class="about-grid" style={layer_transform(0.0, tilt_x, tilt_y)}>
                    <Reveal class="about-portrait">
                        <div class="about-image-card">
                            <img src={PROFILE_IMAGE} alt={PROFILE.name} loading="lazy" />
                            <span class="glow glow-top" aria-hidden="true" />
                            <span class="glow glow-bottom" aria-hidden="true" />
                        </div>
                        <ul class="stats">
                            { for STATS.iter().enumerate().map(|(position, stat)| html! {
                                <li key={stat.label}>
                                    <Reveal delay_ms={position as u32 * STAT_STAGGER_MS} class="stat">
                                        <span class="stat-icon" aria-hidden="true">{stat.icon}</span>
                                        <span class="stat-value">{stat.value}</span>
                                        <span class="stat-label">{stat.label}</span>
                                    </Reveal>
                                </li>
                            }) }
                        </ul>
                    </Reveal>

                    <div class="about-story">
                        <Reveal class="panel">
                            <h3>{"My Story"}</h3>
                            { for ABOUT_PARAGRAPHS.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                        </Reveal>

                        <Reveal class="panel">
                            <h3>{"Experience"}</h3>
                            <ol class="timeline">
                                { for EXPERIENCES.iter().enumerate().map(|(position, experience)| html! {
                                    <li key={experience.title}>
                                        <Reveal delay_ms={position as u32 * EXPERIENCE_STAGGER_MS} class="timeline-entry">
                                            <span class="timeline-icon" aria-hidden="true">{experience.icon}</span>
                                            <h4>{experience.title}</h4>
                                            <p class="timeline-meta">
                                                {experience.organization}{" · "}{experience.period}
                                            </p>
                                            <p>{experience.description}</p>
                                        </Reveal>
                                    </li>
                                }) }
                            </ol>
                        </Reveal>
                    </div>
                </div>

                <Reveal class="section-cta">
                    <button class="button button-solid button-floating" type="button" onclick={on_work_together}>
                        <span class="button-orbit" aria-hidden="true" />
                        {"Let's Work Together"}
                    </button>
                </Reveal>
            </div>
        </section>
    }
}
