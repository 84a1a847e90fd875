use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    time::Duration,
};

use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Interval;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, Event, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent,
};
use yew::prelude::*;

use super::{prefers_reduced_motion, viewport_size};
use crate::{
    config::SiteConfig,
    motion::{normalized_offset, scroll_progress, Rect, Reveal, Spring, SpringConfig},
    subscriptions::Subscription,
};

const MAX_FRAME_MS: f64 = 50.0;
const NOMINAL_FRAME_SECS: f64 = 1.0 / 60.0;

#[hook]
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

fn window_subscription<F>(event: &'static str, callback: F) -> Option<Subscription<EventListener>>
where
    F: FnMut(&Event) + 'static,
{
    let win = window()?;
    Some(Subscription::new(EventListener::new(&win, event, callback)))
}

pub(crate) fn element_rect(node: &NodeRef) -> Option<Rect> {
    let rect = node.cast::<Element>()?.get_bounding_client_rect();
    Some(Rect::new(rect.left(), rect.top(), rect.width(), rect.height()))
}

fn current_scroll_y() -> f64 {
    window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}

#[hook]
pub fn use_scroll_y() -> f64 {
    let scroll_y = use_state(current_scroll_y);

    {
        let scroll_y = scroll_y.clone();
        use_effect_with((), move |_| {
            let listener = window_subscription("scroll", move |_event| {
                scroll_y.set(current_scroll_y());
            });
            move || drop(listener)
        });
    }

    *scroll_y
}

#[hook]
pub fn use_viewport_size() -> (f64, f64) {
    let size = use_state(viewport_size);

    {
        let size = size.clone();
        use_effect_with((), move |_| {
            let listener = window_subscription("resize", move |_event| {
                size.set(viewport_size());
            });
            move || drop(listener)
        });
    }

    *size
}

#[hook]
pub fn use_scroll_progress(node: NodeRef) -> f64 {
    let progress = use_state(|| 0.0);

    {
        let progress = progress.clone();
        use_effect_with(node, move |node| {
            let measure = {
                let node = node.clone();
                move || {
                    let viewport_height = viewport_size().1;
                    element_rect(&node)
                        .map(|rect| scroll_progress(rect.top, rect.height, viewport_height))
                        .unwrap_or(0.0)
                }
            };

            progress.set(measure());
            let listener = window_subscription("scroll", move |_event| {
                progress.set(measure());
            });
            move || drop(listener)
        });
    }

    *progress
}

/// Latest pointer position in client coordinates. Stays `None` while
/// disabled or when the user asks for reduced motion.
#[hook]
pub fn use_pointer_position(enabled: bool) -> Option<(f64, f64)> {
    let position = use_state(|| None);

    {
        let position = position.clone();
        use_effect_with(enabled, move |enabled| {
            let listener = if *enabled && !prefers_reduced_motion() {
                let setter = position.clone();
                window_subscription("mousemove", move |event| {
                    if let Some(event) = event.dyn_ref::<MouseEvent>() {
                        setter.set(Some((
                            f64::from(event.client_x()),
                            f64::from(event.client_y()),
                        )));
                    }
                })
            } else {
                position.set(None);
                None
            };
            move || drop(listener)
        });
    }

    *position
}

/// Pointer offset from the centre of `container`, normalised by its size and
/// measured when the pointer moves. `(0.0, 0.0)` under reduced motion.
#[hook]
pub fn use_pointer_offset(container: NodeRef) -> (f64, f64) {
    let offset = use_state(|| (0.0, 0.0));

    {
        let offset = offset.clone();
        use_effect_with(container, move |container| {
            let container = container.clone();
            let listener = (!prefers_reduced_motion())
                .then(|| {
                    window_subscription("mousemove", move |event| {
                        let Some(event) = event.dyn_ref::<MouseEvent>() else {
                            return;
                        };
                        let Some(rect) = element_rect(&container) else {
                            return;
                        };
                        offset.set(normalized_offset(
                            f64::from(event.client_x()),
                            f64::from(event.client_y()),
                            rect,
                        ));
                    })
                })
                .flatten();
            move || drop(listener)
        });
    }

    *offset
}

type FrameSlot = Rc<RefCell<Option<Subscription<AnimationFrame>>>>;

fn schedule_frame(
    spring: Rc<RefCell<Spring>>,
    frame: FrameSlot,
    redraw: UseForceUpdateHandle,
    last_timestamp: Option<f64>,
) {
    let slot = frame.clone();
    let handle = request_animation_frame(move |timestamp| {
        frame.borrow_mut().take();

        let dt = last_timestamp
            .map(|previous| (timestamp - previous).clamp(0.0, MAX_FRAME_MS) / 1000.0)
            .unwrap_or(NOMINAL_FRAME_SECS);
        let settled = {
            let mut spring = spring.borrow_mut();
            spring.step(dt);
            spring.is_settled()
        };
        redraw.force_update();

        if !settled {
            schedule_frame(spring, frame, redraw, Some(timestamp));
        }
    });
    *slot.borrow_mut() = Some(Subscription::new(handle));
}

/// Follows `target` through a damped spring, one step per animation frame.
/// The frame loop only runs while the spring is moving.
#[hook]
pub fn use_spring(config: SpringConfig, target: f64) -> f64 {
    let spring = use_mut_ref(|| Spring::new(config, target));
    let frame: FrameSlot = use_mut_ref(|| None);
    let redraw = use_force_update();

    {
        let spring = spring.clone();
        let frame = frame.clone();
        use_effect_with(target, move |target| {
            spring.borrow_mut().set_target(*target);
            let idle = frame.borrow().is_none();
            if idle && !spring.borrow().is_settled() {
                schedule_frame(spring, frame, redraw, None);
            }
            || ()
        });
    }

    {
        let frame = frame.clone();
        use_effect_with((), move |_| {
            move || {
                frame.borrow_mut().take();
            }
        });
    }

    let value = spring.borrow().value();
    value
}

#[hook]
pub fn use_interval(period: Duration, on_tick: Callback<()>) {
    use_effect_with(period, move |period| {
        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        let interval = Subscription::new(Interval::new(millis, move || on_tick.emit(())));
        move || drop(interval)
    });
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    pub once: bool,
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl RevealOptions {
    pub const ONCE: Self = Self {
        once: true,
        threshold: 0.0,
        root_margin: "0px",
    };
    /// Header blocks wait until they are 100px inside the viewport.
    pub const ONCE_INSET: Self = Self {
        once: true,
        threshold: 0.0,
        root_margin: "-100px",
    };
    pub const REPEAT: Self = Self {
        once: false,
        threshold: 0.3,
        root_margin: "0px",
    };
}

struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_reveal(
    node: &NodeRef,
    options: RevealOptions,
    visible: UseStateHandle<bool>,
) -> Option<Subscription<RevealObserver>> {
    let element = node.cast::<Element>()?;

    let reveal = Rc::new(Cell::new(Reveal::new(options.once)));
    let callback = {
        let reveal = reveal.clone();
        let setter = visible.clone();
        Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let mut state = reveal.get();
                    let was_visible = state.is_visible();
                    if state.observe(entry.is_intersecting()) != was_visible {
                        setter.set(state.is_visible());
                    }
                    reveal.set(state);
                }
            },
        )
    };

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(&element);
            Some(Subscription::new(RevealObserver {
                observer,
                _callback: callback,
            }))
        }
        Err(_) => {
            let mut state = reveal.get();
            state.force_visible();
            reveal.set(state);
            visible.set(state.is_visible());
            None
        }
    }
}

/// Whether `node` should currently be shown. Without observer support the
/// block is shown straight away.
#[hook]
pub fn use_reveal(node: NodeRef, options: RevealOptions) -> bool {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with((node, options), move |(node, options)| {
            let observer = observe_reveal(node, *options, visible);
            move || drop(observer)
        });
    }

    *visible
}
