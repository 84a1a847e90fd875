use std::rc::Rc;

use yew::prelude::*;

use super::{layer_transform, translate_y};
use crate::{
    content::{HEADLINES, PROFILE, PROFILE_IMAGE},
    frontend::{
        hooks::{use_interval, use_pointer_offset, use_scroll_y, use_site_config, use_spring},
        scroll_to_section,
    },
    motion::{next_index, word_lean, PointerProfile, ScrollParallax},
    navigation::SectionId,
};

/// The backdrop word leans at half the unsmoothed drift.
const WORD_LEAN: f64 = 0.5;

#[derive(Default, PartialEq)]
struct HeadlineCursor(usize);

impl Reducible for HeadlineCursor {
    type Action = ();

    fn reduce(self: Rc<Self>, _action: ()) -> Rc<Self> {
        Rc::new(Self(next_index(self.0, HEADLINES.len())))
    }
}

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let config = use_site_config();
    let section_ref = use_node_ref();
    let scroll_y = use_scroll_y();
    let (offset_x, offset_y) = use_pointer_offset(section_ref.clone());

    let profile = PointerProfile::HERO;
    let (target_x, target_y) = profile.tilt((offset_x, offset_y));
    let tilt_x = use_spring(profile.spring, target_x);
    let tilt_y = use_spring(profile.spring, target_y);

    let headline = use_reducer(HeadlineCursor::default);
    {
        let headline = headline.clone();
        use_interval(
            config.headline_interval,
            Callback::from(move |_| headline.dispatch(())),
        );
    }

    let scroll_button = |label: &'static str, section: SectionId, class: &'static str| {
        let nav_offset = config.nav_offset;
        let onclick = Callback::from(move |_: MouseEvent| {
            scroll_to_section(section, nav_offset);
        });
        html! {
            <button class={classes!("button", class)} type="button" onclick={onclick}>{label}</button>
        }
    };

    let current = &HEADLINES[headline.0 % HEADLINES.len()];
    let background_style = translate_y(ScrollParallax::HERO_BACKGROUND.offset(scroll_y));
    let word_layer_style = layer_transform(
        ScrollParallax::HERO_TEXT.offset(scroll_y),
        tilt_x,
        tilt_y,
    );
    let (lean_x, lean_y) = word_lean(profile.drift((offset_x, offset_y)), WORD_LEAN);
    let word_style = format!(
        "transform: translateZ(-100px) rotateX({lean_x:.2}deg) rotateY({lean_y:.2}deg);"
    );
    let image_style = layer_transform(
        ScrollParallax::HERO_IMAGE.offset(scroll_y),
        tilt_x,
        tilt_y,
    );

    html! {
        <section id={SectionId::Hero.as_str()} ref={section_ref} class="section hero">
            <div class="hero-background" style={background_style} aria-hidden="true">
                <span class="ring ring-spin" />
                <span class="ring ring-spin-reverse" />
            </div>

            <div class="hero-word-layer" style={word_layer_style} aria-hidden="true">
                <h1 class="hero-word" style={word_style}>{"PORTFOLIO"}</h1>
            </div>

            <div class="hero-content">
                <div class="hero-intro">
                    <div class="badge badge-floating">
                        <span class="badge-dot" />
                        {"Open to work"}
                    </div>
                    <div class="hero-headline" key={headline.0}>
                        <div class="hero-headline-line">{current.line1}</div>
                        <div class="hero-headline-line hero-headline-line-late">{current.line2}</div>
                    </div>
                </div>

                <div class="hero-image-stage">
                    <div class="hero-image-card" style={image_style}>
                        <span class="glow glow-top" aria-hidden="true" />
                        <span class="glow glow-bottom" aria-hidden="true" />
                        <img class="hero-image" src={PROFILE_IMAGE} alt={format!("Portrait of {}", PROFILE.name)} />
                        <span class="hero-image-sheen" aria-hidden="true" />
                    </div>
                </div>

                <div class="hero-bio">
                    <p>{PROFILE.short_summary}</p>
                    <div class="hero-actions">
                        { scroll_button("About me", SectionId::About, "button-outline") }
                        { scroll_button("See my work", SectionId::Projects, "button-solid") }
                    </div>
                </div>
            </div>
        </section>
    }
}
