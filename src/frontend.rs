use js_sys::{Array, Function, Reflect};
use serde_json::json;
use std::{cell::Cell, cell::RefCell, rc::Rc, time::Duration};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, ErrorEvent, Event, EventTarget, HtmlAnchorElement, HtmlElement,
    HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent, MouseEvent,
    Performance, PromiseRejectionEvent, ScrollBehavior, ScrollToOptions, Storage, SubmitEvent,
};
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::content::{
    project_image, OWNER_EMAIL, OWNER_NAME, RESUME_FILE_NAME, RESUME_URL, SECTIONS, SUBJECTS,
};
use crate::effects::{ClickGeometry, LoadingPhase, Ripple};
use crate::form::Field;
use crate::logging::{log_event, LogLevel};
use crate::modal::trap_focus;
use crate::nav::{scroll_target, PageLayout, ScrollSnapshot, SectionSpan};
use crate::projects::{ProjectFilter, ProjectRecord};
use crate::reveal::{RevealKey, RevealTrigger, Visibility};
use crate::state::{Action, AppState, Fault, FrameClock};
use crate::theme::{Theme, THEME_KEY};

const REVEAL_ATTRIBUTE: &str = "data-reveal";
const FOCUSABLE_SELECTOR: &str =
    "button, [href], input, select, textarea, [tabindex]:not([tabindex=\"-1\"])";
const PLACEHOLDER_IMAGE: &str = "data:image/gif;base64,R0lGODlhAQABAAAAACH5BAEKAAEALAAAAAABAAEAAAICTAEAOw==";

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

fn read_stored_theme() -> Option<String> {
    local_storage()?.get_item(THEME_KEY).ok().flatten()
}

fn system_prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn resolve_theme() -> Theme {
    Theme::resolve(read_stored_theme().as_deref(), system_prefers_dark())
}

fn apply_theme(theme: Theme) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn apply_theme_with_transition(theme: Theme) {
    if prefers_reduced_motion() {
        apply_theme(theme);
        return;
    }

    let Some(document) = window().and_then(|w| w.document()) else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let start_view_transition =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition")).ok();
    let Some(start_view_transition) = start_view_transition
        .as_ref()
        .and_then(|value| value.dyn_ref::<Function>())
    else {
        apply_theme(theme);
        return;
    };

    // The browser invokes the callback later, so ownership moves to JS.
    let callback = Closure::once_into_js(move || apply_theme(theme));
    if start_view_transition.call1(&document_js, &callback).is_err() {
        apply_theme(theme);
    }
}

fn persist_theme(theme: Theme) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(THEME_KEY, theme.as_str());
    }
}

fn set_scroll_lock(locked: bool) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.class_list().toggle_with_force("no-scroll", locked);
    }
}

fn smooth_scroll_to(top: f64) {
    let Some(win) = window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

fn header_height(header: &NodeRef) -> f64 {
    header
        .cast::<HtmlElement>()
        .map(|element| f64::from(element.offset_height()))
        .unwrap_or(0.0)
}

/// Scrolls so the section sits under the header. False when it is missing.
fn scroll_to_section(section_id: &str, header: &NodeRef) -> bool {
    let Some(section) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section_id))
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        return false;
    };

    smooth_scroll_to(scroll_target(
        f64::from(section.offset_top()),
        header_height(header),
    ));
    true
}

fn measure_layout(header: &NodeRef, sections: &[(&'static str, NodeRef)]) -> PageLayout {
    PageLayout {
        header_height: header_height(header),
        sections: sections
            .iter()
            .filter_map(|(id, node)| {
                let element = node.cast::<HtmlElement>()?;
                Some(SectionSpan {
                    id: id.to_string(),
                    top: f64::from(element.offset_top()),
                    height: f64::from(element.client_height()),
                })
            })
            .collect(),
    }
}

fn scroll_snapshot(header: &NodeRef, sections: &[(&'static str, NodeRef)]) -> ScrollSnapshot {
    ScrollSnapshot {
        offset: window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0),
        layout: measure_layout(header, sections),
    }
}

fn download_resume() -> bool {
    let Some(document) = window().and_then(|w| w.document()) else {
        return false;
    };
    let Some(body) = document.body() else {
        return false;
    };
    let Some(link) = document
        .create_element("a")
        .ok()
        .and_then(|element| element.dyn_into::<HtmlAnchorElement>().ok())
    else {
        return false;
    };

    link.set_href(RESUME_URL);
    link.set_download(RESUME_FILE_NAME);
    link.set_target("_blank");
    if body.append_child(&link).is_err() {
        return false;
    }
    link.click();
    link.remove();
    true
}

fn open_in_new_tab(url: &str) {
    if let Some(win) = window() {
        let _ = win.open_with_url_and_target(url, "_blank");
    }
}

fn control_value(target: Option<EventTarget>) -> Option<String> {
    let target = target?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        return Some(area.value());
    }
    target.dyn_ref::<HtmlSelectElement>().map(HtmlSelectElement::value)
}

fn describe_js(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// An event listener that is removed again when dropped.
struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn new(target: &EventTarget, event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;

        Some(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Reads `performance.now()` into the shared [`FrameClock`].
struct PageClock {
    performance: Option<Performance>,
    frames: Cell<FrameClock>,
}

impl PageClock {
    fn new() -> Self {
        let performance = window().and_then(|w| w.performance());
        let now = performance.as_ref().map(Performance::now).unwrap_or(0.0);
        Self {
            performance,
            frames: Cell::new(FrameClock::new(now)),
        }
    }

    fn lap(&self) -> Duration {
        let Some(performance) = self.performance.as_ref() else {
            return Duration::ZERO;
        };
        let mut frames = self.frames.get();
        let elapsed = frames.lap(performance.now());
        self.frames.set(frames);
        elapsed
    }
}

/// Dispatches into the page after bringing every timer up to now.
#[derive(Clone)]
struct PageDispatcher {
    inner: UseReducerDispatcher<Page>,
    clock: Rc<PageClock>,
}

impl PageDispatcher {
    fn tick(&self) {
        self.inner.dispatch(Action::Tick(self.clock.lap()));
    }

    fn dispatch(&self, action: Action) {
        self.tick();
        self.inner.dispatch(action);
    }
}

/// The page-wide interval driving [`Action::Tick`].
struct Ticker {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Ticker {
    fn start(dispatcher: PageDispatcher, interval: Duration) -> Option<Self> {
        let win = window()?;
        let callback = Closure::<dyn FnMut()>::new(move || dispatcher.tick());
        let handle = win
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                interval.as_millis().min(i32::MAX as u128) as i32,
            )
            .ok()?;

        Some(Self {
            handle,
            _callback: callback,
        })
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        if let Some(win) = window() {
            win.clear_interval_with_handle(self.handle);
        }
    }
}

fn reveal_key(element: &Element) -> Option<RevealKey> {
    RevealKey::from_attr(&element.get_attribute(REVEAL_ATTRIBUTE)?)
}

/// Feeds an `IntersectionObserver` into a [`RevealTrigger`] and dispatches
/// each key the first time it is seen.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    fn start(
        threshold: f64,
        root_margin: &str,
        accepts: fn(&RevealKey) -> bool,
        dispatcher: PageDispatcher,
        min_level: LogLevel,
    ) -> Option<Self> {
        let document = window()?.document()?;
        let nodes = document
            .query_selector_all(&format!("[{REVEAL_ATTRIBUTE}]"))
            .ok()?;
        let targets: Vec<(Element, RevealKey)> = (0..nodes.length())
            .filter_map(|index| nodes.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .filter_map(|element| reveal_key(&element).map(|key| (element, key)))
            .filter(|(_, key)| accepts(key))
            .collect();

        let trigger = Rc::new(RefCell::new(RevealTrigger::new(threshold)));
        let callback = {
            let trigger = trigger.clone();
            let dispatcher = dispatcher.clone();
            Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                move |entries: Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                            continue;
                        };
                        let target = entry.target();
                        let Some(key) = reveal_key(&target) else {
                            continue;
                        };
                        let visibility = Visibility {
                            intersecting: entry.is_intersecting(),
                            ratio: entry.intersection_ratio(),
                        };

                        if trigger.borrow_mut().notify(&key, visibility) {
                            observer.unobserve(&target);
                            dispatcher.dispatch(Action::Revealed(key));
                        }
                    }
                },
            )
        };

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin(root_margin);

        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => observer,
            Err(error) => {
                log_event(
                    min_level,
                    LogLevel::Warn,
                    "visibility_observer_unavailable",
                    json!({ "error": describe_js(&error) }),
                );
                for (_, key) in targets {
                    dispatcher.dispatch(Action::Revealed(key));
                }
                return None;
            }
        };

        for (element, key) in targets {
            if trigger.borrow_mut().observe(key) {
                observer.observe(&element);
            }
        }

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn trap_modal_focus(modal: &NodeRef, event: &KeyboardEvent) {
    let Some(modal) = modal.cast::<Element>() else {
        return;
    };
    if !modal.class_list().contains("active") {
        return;
    }
    let Ok(nodes) = modal.query_selector_all(FOCUSABLE_SELECTOR) else {
        return;
    };

    let focusables: Vec<HtmlElement> = (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect();
    let active = window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element());
    let current = active.and_then(|active| {
        focusables.iter().position(|element| {
            let element: &Element = element.as_ref();
            *element == active
        })
    });

    if let Some(next) = trap_focus(current, focusables.len(), event.shift_key())
        .and_then(|index| focusables.get(index))
    {
        event.prevent_default();
        let _ = next.focus();
    }
}

/// Reducer wrapper so the pure [`AppState`] can drive Yew.
#[derive(Clone, PartialEq)]
struct Page(AppState);

impl Reducible for Page {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Action) -> Rc<Self> {
        let mut next = self.0.clone();
        next.reduce(action);

        if next == self.0 {
            self
        } else {
            Rc::new(Page(next))
        }
    }
}

#[derive(Properties, PartialEq)]
struct RippleButtonProps {
    id: AttrValue,
    label: AttrValue,
    #[prop_or_default]
    class: Classes,
    #[prop_or_default]
    icon: Option<AttrValue>,
    #[prop_or(AttrValue::Static("button"))]
    button_type: AttrValue,
    #[prop_or_default]
    disabled: bool,
    #[prop_or_default]
    ripples: Vec<Ripple>,
    #[prop_or_default]
    onclick: Callback<()>,
    on_ripple: Callback<(String, ClickGeometry)>,
}

#[function_component(RippleButton)]
fn ripple_button(props: &RippleButtonProps) -> Html {
    let node = use_node_ref();

    let onclick = {
        let node = node.clone();
        let id = props.id.to_string();
        let on_ripple = props.on_ripple.clone();
        let on_click = props.onclick.clone();
        Callback::from(move |event: MouseEvent| {
            if let Some(button) = node.cast::<Element>() {
                let rect = button.get_bounding_client_rect();
                on_ripple.emit((
                    id.clone(),
                    ClickGeometry {
                        left: rect.left(),
                        top: rect.top(),
                        width: rect.width(),
                        height: rect.height(),
                        client_x: f64::from(event.client_x()),
                        client_y: f64::from(event.client_y()),
                    },
                ));
            }
            on_click.emit(());
        })
    };

    html! {
        <button
            ref={node}
            id={props.id.clone()}
            class={classes!("btn", props.class.clone())}
            type={props.button_type.clone()}
            disabled={props.disabled}
            onclick={onclick}
        >
            if let Some(icon) = props.icon.clone() {
                <i class={icon.to_string()} aria-hidden="true"></i>
            }
            <span class="btn-text">{props.label.clone()}</span>
            { for props.ripples.iter().map(|ripple| html! {
                <span key={ripple.id} class="btn-ripple" style={ripple.style()}></span>
            }) }
        </button>
    }
}

#[derive(Clone, PartialEq)]
enum Control {
    Input(&'static str),
    TextArea,
    Select,
}

#[derive(Properties, PartialEq)]
struct FormFieldProps {
    field: Field,
    label: AttrValue,
    control: Control,
    value: AttrValue,
    focused: bool,
    on_change: Callback<(Field, String)>,
    on_focus: Callback<Field>,
    on_blur: Callback<Field>,
}

#[function_component(FormField)]
fn form_field(props: &FormFieldProps) -> Html {
    let field = props.field;
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: Event| {
            if let Some(value) = control_value(event.target()) {
                on_change.emit((field, value));
            }
        })
    };
    let onfocus = {
        let on_focus = props.on_focus.clone();
        Callback::from(move |_: FocusEvent| on_focus.emit(field))
    };
    let onblur = {
        let on_blur = props.on_blur.clone();
        Callback::from(move |_: FocusEvent| on_blur.emit(field))
    };
    let name = field.name();

    let control = match props.control {
        Control::Input(kind) => html! {
            <input
                id={name}
                name={name}
                type={kind}
                value={props.value.clone()}
                required=true
                oninput={oninput.reform(|event: InputEvent| event.into())}
                onfocus={onfocus}
                onblur={onblur}
            />
        },
        Control::TextArea => html! {
            <textarea
                id={name}
                name={name}
                rows="5"
                value={props.value.clone()}
                required=true
                oninput={oninput.reform(|event: InputEvent| event.into())}
                onfocus={onfocus}
                onblur={onblur}
            />
        },
        Control::Select => html! {
            <select id={name} name={name} required=true onchange={oninput} onfocus={onfocus} onblur={onblur}>
                <option value="" selected={props.value.is_empty()} disabled=true>{"Select a subject"}</option>
                { for SUBJECTS.iter().map(|(value, label)| html! {
                    <option value={*value} selected={props.value.as_str() == *value}>{*label}</option>
                }) }
            </select>
        },
    };

    html! {
        <div class={classes!("form-group", props.focused.then_some("focused"))}>
            <label for={name}>{props.label.clone()}</label>
            {control}
        </div>
    }
}

fn project_details(project: &'static ProjectRecord) -> Html {
    let open_source = Callback::from(move |_: MouseEvent| open_in_new_tab(project.github_link));
    let open_demo = Callback::from(move |_: MouseEvent| open_in_new_tab(project.live_demo_link));

    html! {
        <div class="project-modal-content">
            <div class="project-description">
                <p>{project.description}</p>
            </div>
            <div class="project-features">
                <h4>{"Key Features:"}</h4>
                <ul>
                    { for project.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                </ul>
            </div>
            <div class="project-technologies">
                <h4>{"Technologies Used:"}</h4>
                <div class="tech-tags">
                    { for project.technologies.iter().map(|tech| html! { <span class="tech-tag">{*tech}</span> }) }
                </div>
            </div>
            <div class="project-actions">
                <button class="btn btn-primary" type="button" onclick={open_source}>
                    <i class="fab fa-github" aria-hidden="true"></i>
                    {"View Source Code"}
                </button>
                <button class="btn btn-outline" type="button" onclick={open_demo}>
                    <i class="fas fa-external-link-alt" aria-hidden="true"></i>
                    {"Live Demo"}
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: SiteConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let page = {
        let config = props.config.clone();
        use_reducer(move || Page(AppState::new(config, resolve_theme())))
    };
    let dispatcher = {
        let clock = use_memo((), |_| PageClock::new());
        PageDispatcher {
            inner: page.dispatcher(),
            clock,
        }
    };
    let header_ref = use_node_ref();
    let modal_ref = use_node_ref();
    let section_refs = use_memo((), |_| {
        SECTIONS
            .iter()
            .map(|(id, _)| (*id, NodeRef::default()))
            .collect::<Vec<_>>()
    });

    let state = &page.0;
    let config = state.config();
    let min_level = config.log_level;

    {
        let first_run = use_mut_ref(|| true);
        use_effect_with(state.theme, move |theme| {
            if first_run.replace(false) {
                apply_theme(*theme);
            } else {
                persist_theme(*theme);
                apply_theme_with_transition(*theme);
            }
            || ()
        });
    }

    use_effect_with(state.scroll_locked(), |locked| {
        set_scroll_lock(*locked);
        || ()
    });

    {
        let dispatcher = dispatcher.clone();
        let interval = config.counter_interval;
        use_effect_with((), move |_| {
            let ticker = Ticker::start(dispatcher, interval);
            move || drop(ticker)
        });
    }

    {
        let dispatcher = dispatcher.clone();
        let threshold = config.reveal_threshold;
        let root_margin = config.reveal_root_margin();
        use_effect_with((), move |_| {
            let animations = RevealObserver::start(
                threshold,
                &root_margin,
                |key| !matches!(key, RevealKey::LazyImage(_)),
                dispatcher.clone(),
                min_level,
            );
            let images = RevealObserver::start(
                0.0,
                "0px",
                |key| matches!(key, RevealKey::LazyImage(_)),
                dispatcher,
                min_level,
            );
            move || drop((animations, images))
        });
    }

    {
        let dispatcher = dispatcher.clone();
        let header_ref = header_ref.clone();
        let modal_ref = modal_ref.clone();
        let section_refs = section_refs.clone();
        use_effect_with((), move |_| {
            let mut listeners = Vec::new();

            if let Some(win) = window() {
                dispatcher.dispatch(Action::Scrolled(scroll_snapshot(&header_ref, &section_refs)));

                let on_scroll = dispatcher.clone();
                listeners.extend(Listener::new(&win, "scroll", move |_| {
                    on_scroll.dispatch(Action::Scrolled(scroll_snapshot(&header_ref, &section_refs)));
                }));

                let on_error = dispatcher.clone();
                listeners.extend(Listener::new(&win, "error", move |event: Event| {
                    let message = event
                        .dyn_ref::<ErrorEvent>()
                        .map(ErrorEvent::message)
                        .unwrap_or_else(|| "unknown error".to_string());
                    on_error.dispatch(Action::Fault(Fault::Error(message)));
                }));

                let on_rejection = dispatcher.clone();
                listeners.extend(Listener::new(&win, "unhandledrejection", move |event: Event| {
                    event.prevent_default();
                    let reason = event
                        .dyn_ref::<PromiseRejectionEvent>()
                        .map(|rejection| describe_js(&rejection.reason()))
                        .unwrap_or_default();
                    on_rejection.dispatch(Action::Fault(Fault::Rejection(reason)));
                }));

                if let Some(document) = win.document() {
                    let on_key = dispatcher.clone();
                    listeners.extend(Listener::new(&document, "keydown", move |event: Event| {
                        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                            return;
                        };
                        match event.key().as_str() {
                            "Escape" => on_key.dispatch(Action::Escape),
                            "Tab" => trap_modal_focus(&modal_ref, event),
                            _ => {}
                        }
                    }));
                }
            }

            move || drop(listeners)
        });
    }

    let on_toggle_theme = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(Action::ToggleTheme))
    };

    let on_toggle_menu = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(Action::ToggleMenu))
    };

    let on_navigate = {
        let dispatcher = dispatcher.clone();
        let header_ref = header_ref.clone();
        Callback::from(move |section_id: &'static str| {
            if scroll_to_section(section_id, &header_ref) {
                dispatcher.dispatch(Action::Navigate(section_id.to_string()));
            }
        })
    };

    let on_ripple = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |(button, click): (String, ClickGeometry)| {
            dispatcher.dispatch(Action::Ripple { button, click })
        })
    };

    let on_field_change = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |(field, value): (Field, String)| {
            dispatcher.dispatch(Action::FieldInput(field, value))
        })
    };
    let on_field_focus = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |field: Field| dispatcher.dispatch(Action::FieldFocus(field)))
    };
    let on_field_blur = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |field: Field| dispatcher.dispatch(Action::FieldBlur(field)))
    };

    let on_submit = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            dispatcher.dispatch(Action::Submit);
        })
    };

    let on_download_resume = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: ()| {
            if download_resume() {
                dispatcher.dispatch(Action::ResumeDownloadStarted);
            }
        })
    };

    let on_scroll_top = Callback::from(|_: MouseEvent| smooth_scroll_to(0.0));

    let on_close_modal = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(Action::CloseModal))
    };

    let on_modal_overlay = {
        let dispatcher = dispatcher.clone();
        let modal_ref = modal_ref.clone();
        Callback::from(move |event: MouseEvent| {
            let clicked = event.target_dyn_into::<Element>();
            if clicked.is_some() && clicked == modal_ref.cast::<Element>() {
                dispatcher.dispatch(Action::CloseModal);
            }
        })
    };

    let section_ref = |id: &str| {
        section_refs
            .iter()
            .find(|(section_id, _)| *section_id == id)
            .map(|(_, node)| node.clone())
            .unwrap_or_default()
    };
    let ripples_for = |button: &str| state.ripples.for_button(button).copied().collect::<Vec<_>>();
    let nav = state.nav_state();
    let toast = &state.toast;
    let sending = state.form.is_sending();

    let form_field = |field: Field, label: &'static str, control: Control| {
        html! {
            <FormField
                field={field}
                label={label}
                control={control}
                value={state.form.value(field).to_string()}
                focused={state.form.is_focused(field)}
                on_change={on_field_change.clone()}
                on_focus={on_field_focus.clone()}
                on_blur={on_field_blur.clone()}
            />
        }
    };

    html! {
        <>
            {
                match state.loading.phase() {
                    LoadingPhase::Removed => html! {},
                    phase => html! {
                        <div
                            id="loading-screen"
                            class={classes!("loading-screen", (phase == LoadingPhase::Fading).then_some("hidden"))}
                            aria-hidden="true"
                        >
                            <div class="loader"></div>
                        </div>
                    },
                }
            }

            <header id="header" ref={header_ref.clone()} class={classes!("header", nav.header_compact.then_some("scrolled"))}>
                <a class="logo" href="#home">{OWNER_NAME}</a>
                <nav class={classes!("nav", state.menu.is_open().then_some("mobile-open"))} aria-label="Primary">
                    <ul class="nav-list">
                        { for SECTIONS.iter().map(|&(id, label)| {
                            let on_navigate = on_navigate.clone();
                            let onclick = Callback::from(move |event: MouseEvent| {
                                event.prevent_default();
                                on_navigate.emit(id);
                            });
                            html! {
                                <li>
                                    <a
                                        class={classes!("nav-link", nav.is_active(id).then_some("active"))}
                                        href={format!("#{id}")}
                                        onclick={onclick}
                                    >
                                        {label}
                                    </a>
                                </li>
                            }
                        }) }
                    </ul>
                </nav>
                <button
                    id="theme-toggle"
                    class="theme-toggle"
                    type="button"
                    aria-label={state.theme.toggle_label()}
                    aria-pressed={state.theme.pressed().to_string()}
                    onclick={on_toggle_theme}
                >
                    <span aria-hidden="true">{state.theme.icon()}</span>
                </button>
                <button
                    id="mobile-menu-toggle"
                    class={classes!("mobile-menu-toggle", state.menu.is_open().then_some("active"))}
                    type="button"
                    aria-label="Toggle navigation"
                    aria-expanded={state.menu.is_open().to_string()}
                    onclick={on_toggle_menu}
                >
                    <span></span><span></span><span></span>
                </button>
            </header>

            <main id="content">
                <section id="home" ref={section_ref("home")} class="hero">
                    <h1>{"Hi, I'm "}<span class="highlight">{OWNER_NAME}</span></h1>
                    <p class="hero-role">
                        <span id="typing-text">{state.typed_text()}</span>
                        <span class="typing-cursor" aria-hidden="true">{"|"}</span>
                    </p>
                    <div class="hero-actions">
                        <RippleButton
                            id="hire-me"
                            class={classes!("btn-primary")}
                            label="Hire Me"
                            icon={Some(AttrValue::from("fas fa-paper-plane"))}
                            ripples={ripples_for("hire-me")}
                            onclick={{
                                let on_navigate = on_navigate.clone();
                                Callback::from(move |_| on_navigate.emit("contact"))
                            }}
                            on_ripple={on_ripple.clone()}
                        />
                        <RippleButton
                            id="download-resume"
                            class={classes!("btn-outline")}
                            label="Download Resume"
                            icon={Some(AttrValue::from("fas fa-download"))}
                            ripples={ripples_for("download-resume")}
                            onclick={on_download_resume}
                            on_ripple={on_ripple.clone()}
                        />
                    </div>
                </section>

                <section id="about" ref={section_ref("about")} class="section-block">
                    <h2>{"About Me"}</h2>
                    <p>
                        {"Web developer who enjoys turning ideas into fast, accessible interfaces, from small utilities to full-stack platforms."}
                    </p>
                    <div class="stats">
                        { for state.counters.iter().enumerate().map(|(index, slot)| html! {
                            <div class="stat">
                                <span
                                    class="stat-number"
                                    data-reveal={RevealKey::Counter(index).to_attr()}
                                    data-count={slot.raw_target()}
                                >
                                    {slot.text()}
                                </span>
                                <span class="stat-label">{slot.label}</span>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="skills" ref={section_ref("skills")} class="section-block">
                    <h2>{"Skills"}</h2>
                    <ul class="skill-list">
                        { for state.skills.iter().enumerate().map(|(index, bar)| html! {
                            <li class="skill">
                                <div class="skill-header">
                                    <span>{bar.name}</span>
                                    <span class="muted">{bar.target_width().to_string()}</span>
                                </div>
                                <div class="skill-bar">
                                    <div
                                        class="skill-progress"
                                        data-reveal={RevealKey::SkillBar(index).to_attr()}
                                        data-width={bar.target_width().to_string()}
                                        style={bar.style()}
                                    ></div>
                                </div>
                            </li>
                        }) }
                    </ul>
                </section>

                <section id="projects" ref={section_ref("projects")} class="section-block">
                    <h2>{"Projects"}</h2>
                    <div class="project-filters" role="group" aria-label="Filter projects">
                        { for ProjectFilter::ALL.iter().map(|&filter| {
                            let dispatcher = dispatcher.clone();
                            let onclick = Callback::from(move |_: MouseEvent| {
                                dispatcher.dispatch(Action::SetFilter(filter))
                            });
                            html! {
                                <button
                                    class={classes!("filter-btn", (state.gallery.filter() == filter).then_some("active"))}
                                    type="button"
                                    data-filter={filter.as_str()}
                                    onclick={onclick}
                                >
                                    {filter.label()}
                                </button>
                            }
                        }) }
                    </div>
                    <div class="project-grid">
                        { for state.gallery.cards().enumerate().map(|(index, (project, card))| {
                            let dispatcher = dispatcher.clone();
                            let onclick = Callback::from(move |_: MouseEvent| {
                                dispatcher.dispatch(Action::OpenProject(project.id.to_string()))
                            });
                            let loaded = state.images_loaded.get(index).copied().unwrap_or(false);
                            let style = format!(
                                "display: {}; opacity: {}; transform: translateY({});",
                                if card.is_displayed() { "block" } else { "none" },
                                if card.is_opaque() { "1" } else { "0" },
                                if card.is_opaque() { "0" } else { "20px" },
                            );
                            html! {
                                <article class="project-card" data-category={project.category.as_str()} style={style}>
                                    <img
                                        class={classes!("project-image", (!loaded).then_some("lazy"))}
                                        src={if loaded { project_image(project.id) } else { PLACEHOLDER_IMAGE.to_string() }}
                                        data-reveal={RevealKey::LazyImage(index).to_attr()}
                                        alt={project.title}
                                    />
                                    <h3>{project.title}</h3>
                                    <p class="muted">{project.summary}</p>
                                    <button class="btn btn-outline" type="button" onclick={onclick}>
                                        {"View Details"}
                                    </button>
                                </article>
                            }
                        }) }
                    </div>
                </section>

                <section id="contact" ref={section_ref("contact")} class="section-block">
                    <h2>{"Get In Touch"}</h2>
                    <p class="muted">
                        {"Reach me at "}<a class="link" href={format!("mailto:{OWNER_EMAIL}")}>{OWNER_EMAIL}</a>
                    </p>
                    <form id="contactForm" class="contact-form" novalidate=true onsubmit={on_submit}>
                        <div class="form-row">
                            { form_field(Field::FirstName, "First Name", Control::Input("text")) }
                            { form_field(Field::LastName, "Last Name", Control::Input("text")) }
                        </div>
                        { form_field(Field::Email, "Email", Control::Input("email")) }
                        { form_field(Field::Subject, "Subject", Control::Select) }
                        { form_field(Field::Message, "Message", Control::TextArea) }
                        <RippleButton
                            id="submit"
                            class={classes!("btn-primary", "submit-btn", sending.then_some("loading"))}
                            label={if sending { "Sending..." } else { "Send Message" }}
                            icon={Some(AttrValue::from("fas fa-paper-plane"))}
                            button_type="submit"
                            disabled={sending}
                            ripples={ripples_for("submit")}
                            on_ripple={on_ripple.clone()}
                        />
                    </form>
                </section>
            </main>

            <button
                id="scrollTop"
                class={classes!("scroll-top", nav.scroll_top_visible.then_some("visible"))}
                type="button"
                aria-label="Scroll to top"
                onclick={on_scroll_top}
            >
                <i class="fas fa-arrow-up" aria-hidden="true"></i>
            </button>

            <div
                id="projectModal"
                ref={modal_ref}
                class={classes!("modal", state.modal.is_open().then_some("active"))}
                role="dialog"
                aria-modal="true"
                aria-labelledby="modalTitle"
                onclick={on_modal_overlay}
            >
                <div class="modal-dialog">
                    <div class="modal-header">
                        <h3 id="modalTitle">{state.modal.project().map(|project| project.title).unwrap_or_default()}</h3>
                        <button class="modal-close" type="button" aria-label="Close" onclick={on_close_modal}>
                            {"×"}
                        </button>
                    </div>
                    <div id="modalContent">
                        { state.modal.project().map(project_details).unwrap_or_default() }
                    </div>
                </div>
            </div>

            <div
                id="toast"
                class={classes!("toast", toast.kind().css_class(), toast.is_visible().then_some("show"))}
                role="status"
                aria-live="polite"
            >
                <div class="toast-icon"><i class={toast.kind().icon_class()} aria-hidden="true"></i></div>
                <p id="toastMessage">{toast.message().to_string()}</p>
                <div class="toast-progress-track">
                    <div
                        class="toast-progress"
                        style={format!("width: {:.1}%;", (1.0 - toast.progress()) * 100.0)}
                    ></div>
                </div>
            </div>
        </>
    }
}

pub fn run() {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
    else {
        log_event(
            LogLevel::Info,
            LogLevel::Error,
            "mount_point_missing",
            json!({ "id": "app" }),
        );
        return;
    };

    let config = SiteConfig::from_lookup(|name| root.get_attribute(&format!("data-{name}")));
    let min_level = config.log_level;
    std::panic::set_hook(Box::new(move |info| {
        log_event(
            min_level,
            LogLevel::Error,
            "panic",
            json!({ "message": info.to_string() }),
        );
    }));
    log_event(
        min_level,
        LogLevel::Debug,
        "page_init",
        json!({ "roles": config.roles.len() }),
    );

    yew::Renderer::<App>::with_root_and_props(root, AppProps { config }).render();
}
