pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod languages;
pub mod navbar;
pub mod projects;

use yew::prelude::*;

use super::hooks::{use_reveal, RevealOptions};
use crate::{motion::word_lean, navigation::LinkKind};

const BACKDROP_LEAN: f64 = 0.2;

/// Inline transform for a layer shifted by `y` pixels and tilted in degrees.
pub(crate) fn layer_transform(y: f64, rotate_x: f64, rotate_y: f64) -> String {
    format!(
        "transform: translate3d(0, {y:.2}px, 0) rotateX({rotate_x:.2}deg) rotateY({rotate_y:.2}deg);"
    )
}

pub(crate) fn translate_y(y: f64) -> String {
    format!("transform: translate3d(0, {y:.2}px, 0);")
}

#[derive(Properties, PartialEq)]
pub struct OutboundLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// Anchor whose target and `rel` follow the link kind: only web links open a
/// new tab.
#[function_component(OutboundLink)]
pub fn outbound_link(props: &OutboundLinkProps) -> Html {
    let kind = LinkKind::classify(&props.href);

    html! {
        <a
            class={classes!("link", props.class.clone())}
            href={props.href.clone()}
            target={kind.target()}
            rel={kind.rel()}
        >
            {props.children.clone()}
            if kind.opens_new_context() {
                <span class="sr-only">{" (opens in a new tab)"}</span>
            }
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or(RevealOptions::ONCE)]
    pub options: RevealOptions,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// Wrapper that gains `is-visible` once it scrolls into view. The hidden
/// pose and transition live in the stylesheet under `.reveal`.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), props.options);

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.class.clone(), visible.then_some("is-visible"))}
            style={format!("--reveal-delay: {}ms;", props.delay_ms)}
        >
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BackdropProps {
    pub word: AttrValue,
    #[prop_or_default]
    pub offset_y: f64,
    #[prop_or_default]
    pub drift: (f64, f64),
}

/// Oversized section title behind the content, with its decorative rings.
#[function_component(Backdrop)]
pub fn backdrop(props: &BackdropProps) -> Html {
    let (lean_x, lean_y) = word_lean(props.drift, BACKDROP_LEAN);
    let rings_style = translate_y(props.offset_y);
    let word_style = format!(
        "transform: translateZ(-100px) rotateX({lean_x:.2}deg) rotateY({lean_y:.2}deg);"
    );

    html! {
        <div class="backdrop" aria-hidden="true">
            <div class="backdrop-rings" style={rings_style}>
                <span class="ring ring-large" />
                <span class="ring ring-square" />
                <span class="ring ring-small" />
            </div>
            <div class="backdrop-word" style={word_style}>{props.word.clone()}</div>
        </div>
    }
}
