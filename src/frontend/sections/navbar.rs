use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{window, MouseEvent};
use yew::prelude::*;

use crate::{
    frontend::{
        hooks::{element_rect, use_site_config},
        scroll_to_section,
    },
    navigation::{MenuEvent, MenuState, NavLink, NAV_LINKS},
    subscriptions::Subscription,
    telemetry::{log_event, LogLevel},
};

fn menu_label(state: MenuState) -> &'static str {
    if state.is_open() {
        "open"
    } else {
        "closed"
    }
}

fn nav_item(link: &NavLink, dispatch: &Callback<MenuEvent>, class: &'static str) -> Html {
    let onclick = {
        let dispatch = dispatch.clone();
        let target = link.target;
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            dispatch.emit(MenuEvent::Select(target));
        })
    };

    html! {
        <li key={link.target.as_str()}>
            <a class={class} href={link.target.anchor()} onclick={onclick}>{link.label}</a>
        </li>
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let config = use_site_config();
    let menu = use_state(MenuState::default);
    let nav_ref = use_node_ref();

    let dispatch = {
        let menu = menu.clone();
        let nav_offset = config.nav_offset;
        Callback::from(move |event: MenuEvent| {
            let previous = *menu;
            let outcome = previous.apply(event);

            if outcome.state != previous {
                log_event(
                    LogLevel::Debug,
                    "menu_transition",
                    serde_json::json!({
                        "from": menu_label(previous),
                        "to": menu_label(outcome.state),
                    }),
                );
                menu.set(outcome.state);
            }

            if let Some(section) = outcome.scroll_to {
                scroll_to_section(section, nav_offset);
            }
        })
    };

    // Outside presses only matter while the dropdown is showing.
    {
        let dispatch = dispatch.clone();
        let nav_ref = nav_ref.clone();
        use_effect_with(menu.is_open(), move |open| {
            let listener = window()
                .and_then(|w| w.document())
                .filter(|_| *open)
                .map(|document| {
                    let listener = EventListener::new(&document, "pointerdown", move |event| {
                        let Some(event) = event.dyn_ref::<MouseEvent>() else {
                            return;
                        };
                        let Some(bounds) = element_rect(&nav_ref) else {
                            return;
                        };
                        dispatch.emit(MenuEvent::PointerDown {
                            x: f64::from(event.client_x()),
                            y: f64::from(event.client_y()),
                            bounds,
                        });
                    });
                    Subscription::new(listener)
                });
            move || drop(listener)
        });
    }

    let on_toggle = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(MenuEvent::Toggle))
    };

    let state = *menu;

    html! {
        <nav
            ref={nav_ref}
            class={classes!("navbar", state.is_open().then_some("is-open"))}
            aria-label="Primary"
        >
            <div class="navbar-inner">
                <ul class="navbar-links">
                    { for NAV_LINKS.iter().map(|link| nav_item(link, &dispatch, "navbar-link")) }
                </ul>
                <button
                    class="navbar-toggle"
                    type="button"
                    aria-label={state.toggle_label()}
                    aria-expanded={state.is_open().to_string()}
                    aria-controls="mobile-menu"
                    onclick={on_toggle}
                >
                    <svg class="navbar-toggle-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" aria-hidden="true">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={state.icon_path()} />
                    </svg>
                </button>
            </div>
            if state.is_open() {
                <ul id="mobile-menu" class="navbar-dropdown">
                    { for NAV_LINKS.iter().map(|link| nav_item(link, &dispatch, "navbar-dropdown-link")) }
                </ul>
            }
        </nav>
    }
}
