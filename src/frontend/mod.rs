mod hooks;
mod sections;

use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::{
    config::SiteConfig,
    navigation::{scroll_destination, SectionId},
    subscriptions::active_subscriptions,
    telemetry::{self, log_event, LogLevel},
};
use sections::{
    about::AboutSection, contact::ContactSection, footer::Footer, hero::HeroSection,
    languages::Languages, navbar::Navbar, projects::ProjectsSection,
};

const MOUNT_POINT_ID: &str = "app";
const FALLBACK_VIEWPORT: (f64, f64) = (1280.0, 720.0);

#[derive(Debug, Error)]
pub enum MountError {
    #[error("missing #{0} mount point")]
    MissingMountPoint(&'static str),
}

pub(crate) fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub(crate) fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return FALLBACK_VIEWPORT;
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT.1);

    (width, height)
}

fn smooth_scroll_to(top: f64) {
    if let Some(win) = window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    }
}

/// Scrolls so `section` sits `nav_offset` pixels below the viewport top.
/// Returns `false` without scrolling when the section is not in the page.
pub(crate) fn scroll_to_section(section: SectionId, nav_offset: f64) -> bool {
    let Some(win) = window() else {
        return false;
    };
    let Some(target) = win
        .document()
        .and_then(|document| document.get_element_by_id(section.as_str()))
    else {
        log_event(
            LogLevel::Debug,
            "scroll_target_missing",
            serde_json::json!({ "target": section.as_str() }),
        );
        return false;
    };

    let section_top = target.get_bounding_client_rect().top();
    let scroll_y = win.scroll_y().unwrap_or(0.0);
    let destination = scroll_destination(section_top, scroll_y, nav_offset);
    smooth_scroll_to(destination);

    log_event(
        LogLevel::Debug,
        "nav_scroll",
        serde_json::json!({
            "target": section.as_str(),
            "from": scroll_y,
            "to": destination,
        }),
    );
    true
}

pub(crate) fn scroll_to_top() {
    smooth_scroll_to(0.0);
}

fn set_root_scroll_behavior(value: &str) {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|element| element.dyn_into::<HtmlElement>().ok());

    if let Some(root) = root {
        let _ = root.style().set_property("scroll-behavior", value);
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: SiteConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    use_effect_with((), |_| {
        set_root_scroll_behavior("smooth");
        || {
            set_root_scroll_behavior("auto");
            log_event(
                LogLevel::Debug,
                "app_unmounted",
                serde_json::json!({ "active_subscriptions": active_subscriptions() }),
            );
        }
    });

    html! {
        <ContextProvider<SiteConfig> context={props.config.clone()}>
            <div class="page">
                <Navbar />
                <main id="content">
                    <HeroSection />
                    <Languages />
                    <AboutSection />
                    <ProjectsSection />
                    <ContactSection />
                </main>
                <Footer />
            </div>
        </ContextProvider<SiteConfig>>
    }
}

fn mount_point() -> Result<Element, MountError> {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_POINT_ID))
        .ok_or(MountError::MissingMountPoint(MOUNT_POINT_ID))
}

pub fn run() {
    let config = SiteConfig::from_build_env();
    telemetry::init(config.log_level);

    let root = match mount_point() {
        Ok(root) => root,
        Err(error) => {
            log_event(
                LogLevel::Warn,
                "mount_failed",
                serde_json::json!({ "error": error.to_string() }),
            );
            return;
        }
    };

    log_event(
        LogLevel::Info,
        "app_mounted",
        serde_json::json!({
            "mount_point": MOUNT_POINT_ID,
            "nav_offset": config.nav_offset,
            "mobile_breakpoint": config.mobile_breakpoint,
        }),
    );
    yew::Renderer::<App>::with_root_and_props(root, AppProps { config }).render();
}
