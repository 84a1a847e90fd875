use yew::prelude::*;

use super::{OutboundLink, Reveal};
use crate::{
    content::{PROFILE, SOCIAL_LINKS, TECHNOLOGIES},
    frontend::{hooks::use_site_config, scroll_to_section, scroll_to_top},
    navigation::FOOTER_LINKS,
};

#[function_component(Footer)]
pub fn footer() -> Html {
    let config = use_site_config();

    let on_brand = Callback::from(|_: MouseEvent| scroll_to_top());

    let quick_links = FOOTER_LINKS.iter().map(|link| {
        let target = link.target;
        let nav_offset = config.nav_offset;
        let onclick = Callback::from(move |_: MouseEvent| {
            scroll_to_section(target, nav_offset);
        });
        html! {
            <li key={link.label}>
                <button class="footer-link" type="button" onclick={onclick}>{link.label}</button>
            </li>
        }
    });

    html! {
        <footer class="footer">
            <div class="footer-pattern" aria-hidden="true" />
            <div class="footer-grid">
                <Reveal class="footer-brand">
                    <button class="footer-brand-button" type="button" onclick={on_brand} aria-label="Back to top">
                        <h3>{PROFILE.name}</h3>
                    </button>
                    <p>{PROFILE.tagline}</p>
                    <div class="badge">
                        <span class="badge-dot badge-dot-pulse" />
                        {PROFILE.availability}
                    </div>
                </Reveal>

                <Reveal class="footer-column">
                    <h4>{"Quick Links"}</h4>
                    <ul class="footer-links">{ for quick_links }</ul>
                </Reveal>

                <Reveal class="footer-column">
                    <h4>{"Technologies"}</h4>
                    <ul class="chips">
                        { for TECHNOLOGIES.iter().map(|technology| html! {
                            <li key={*technology} class="chip chip-dark">{*technology}</li>
                        }) }
                    </ul>
                </Reveal>
            </div>

            <div class="footer-bottom">
                <ul class="socials">
                    { for SOCIAL_LINKS.iter().map(|social| html! {
                        <li key={social.name}>
                            <OutboundLink href={social.url} class="social-link">{social.name}</OutboundLink>
                        </li>
                    }) }
                </ul>
                <p class="copyright">
                    {format!("© {} {}. All rights reserved.", PROFILE.copyright_year, PROFILE.name)}
                </p>
            </div>
        </footer>
    }
}
