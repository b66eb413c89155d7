//! Browser wiring: DOM lookups, event listeners and the animation-frame loop.
//!
//! All mutable page state sits in a thread-local `PageState`; listeners borrow
//! it for the duration of one event and then re-render what changed. Optional
//! widgets whose elements are missing from the page are skipped.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlFormElement, HtmlInputElement, NodeList, Window,
    window,
};

use crate::config::PageConfig;
use crate::cursor::{Follower, HOVER_TARGETS};
use crate::games::{GameId, Games, PanelAction};
use crate::nav::{SectionBox, active_section, is_revealed, nav_scrolled, parallax_transform};
use crate::perf::{self, PERF_OPTIONS};
use crate::keymap::is_text_entry;
use crate::render::{perf_toggle_markup, ring_style, skill_tile_markup};
use crate::skills::{self, SKILLS};

struct PageState {
    games: Games,
    follower: Follower,
}

thread_local! {
    static PAGE_STATE: RefCell<Option<PageState>> = const { RefCell::new(None) };
}

fn with_page<R>(f: impl FnOnce(&mut PageState) -> R) -> Option<R> {
    PAGE_STATE.with(|cell| cell.borrow_mut().as_mut().map(f))
}

fn collect_elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn query_all(doc: &Document, selector: &str) -> Vec<Element> {
    doc.query_selector_all(selector)
        .map(collect_elements)
        .unwrap_or_default()
}

fn html_element(doc: &Document, id: &str) -> Option<HtmlElement> {
    doc.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

fn event_element(evt: &Event) -> Option<Element> {
    evt.target()?.dyn_into::<Element>().ok()
}

/// Register `handler` for `kind` events for the lifetime of the page.
fn add_listener<E>(
    target: &web_sys::EventTarget,
    kind: &str,
    handler: impl FnMut(E) + 'static,
) -> Result<(), JsValue>
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

// --- Entry -------------------------------------------------------------------

pub fn start_page(config: PageConfig) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    for id in [GameId::Bug, GameId::Myths] {
        if let Some(area) = id.area_id() {
            if doc.get_element_by_id(area).is_none() {
                return Err(JsValue::from_str(&format!("missing #{area}")));
            }
        }
    }

    let mut games = Games::new();
    if let Some(id) = doc
        .query_selector(".game-tab.active")?
        .and_then(|tab| tab.get_attribute("data-game"))
        .and_then(|g| GameId::from_attr(&g))
    {
        games.activate(id);
    }
    let state = PageState {
        games,
        follower: Follower::new(config.follower_easing),
    };
    PAGE_STATE.with(|cell| cell.replace(Some(state)));

    for id in [GameId::Bug, GameId::Myths] {
        render_quiz(&doc, id);
        bind_quiz_area(&doc, id)?;
    }
    bind_tabs(&doc)?;
    bind_keyboard(&doc)?;
    setup_perf(&doc)?;
    setup_skills(&doc)?;
    bind_cursor(&doc)?;
    bind_nav(&win, &doc, &config)?;
    bind_contact(&doc, config.form_success_ms)?;
    reveal_pass(&win, &doc, &config);
    start_frame_loop(&doc);

    info!("portfolio widgets ready");
    Ok(())
}

// --- Quiz panels -------------------------------------------------------------

fn render_quiz(doc: &Document, id: GameId) {
    let Some(area) = id.area_id().and_then(|a| doc.get_element_by_id(a)) else {
        return;
    };
    if let Some(html) = with_page(|s| s.games.quiz(id).map(|p| p.markup())).flatten() {
        area.set_inner_html(&html);
    }
}

fn action_from_event(evt: &Event) -> Option<PanelAction> {
    let button = event_element(evt)?.closest("[data-action]").ok()??;
    if button.has_attribute("disabled") {
        return None;
    }
    PanelAction::from_attrs(
        &button.get_attribute("data-action")?,
        button.get_attribute("data-idx").as_deref(),
        button.get_attribute("data-answer").as_deref(),
    )
}

fn bind_quiz_area(doc: &Document, id: GameId) -> Result<(), JsValue> {
    let Some(area) = id.area_id().and_then(|a| doc.get_element_by_id(a)) else {
        return Ok(());
    };
    let doc = doc.clone();
    add_listener(&area, "click", move |evt: Event| {
        let Some(action) = action_from_event(&evt) else {
            return;
        };
        let changed = with_page(|s| s.games.quiz_mut(id).is_some_and(|p| p.handle(action)));
        if changed == Some(true) {
            render_quiz(&doc, id);
        }
    })
}

fn bind_tabs(doc: &Document) -> Result<(), JsValue> {
    for tab in query_all(doc, ".game-tab") {
        let doc = doc.clone();
        let this = tab.clone();
        add_listener(&tab, "click", move |_evt: Event| {
            let Some(id) = this
                .get_attribute("data-game")
                .and_then(|g| GameId::from_attr(&g))
            else {
                warn!("game tab without a known data-game");
                return;
            };
            for el in query_all(&doc, ".game-tab, .game-panel") {
                let _ = el.class_list().remove_1("active");
            }
            let _ = this.class_list().add_1("active");
            if let Some(panel) = doc.get_element_by_id(id.panel_id()) {
                let _ = panel.class_list().add_1("active");
            }
            with_page(|s| s.games.activate(id));
            debug!("game panel {:?} active", id);
        })?;
    }
    Ok(())
}

fn bind_keyboard(doc: &Document) -> Result<(), JsValue> {
    let target = doc.clone();
    add_listener(doc, "keydown", move |evt: web_sys::KeyboardEvent| {
        if event_element(&evt).is_some_and(|el| is_text_entry(&el.tag_name())) {
            return;
        }
        let key = evt.key();
        if let Some(id) = with_page(|s| s.games.handle_key(&key)).flatten() {
            render_quiz(&target, id);
        }
    })
}

// --- Performance optimizer ---------------------------------------------------

fn setup_perf(doc: &Document) -> Result<(), JsValue> {
    let Some(controls) = doc.get_element_by_id("perf-controls") else {
        debug!("no #perf-controls, optimizer skipped");
        return Ok(());
    };
    for (i, opt) in PERF_OPTIONS.iter().enumerate() {
        let row = doc.create_element("div")?;
        row.set_class_name("perf-toggle");
        row.set_inner_html(&perf_toggle_markup(i, opt));
        controls.append_child(&row)?;
    }
    let target = doc.clone();
    add_listener(&controls, "change", move |evt: Event| {
        let Some(input) = evt
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(idx) = input
            .get_attribute("data-idx")
            .and_then(|v| v.parse::<usize>().ok())
        else {
            return;
        };
        let checked = input.checked();
        if let Ok(Some(row)) = input.closest(".perf-toggle") {
            let _ = row.class_list().toggle_with_force("active", checked);
        }
        with_page(|s| s.games.perf.set(idx, checked));
        update_perf_gauge(&target);
    })?;
    update_perf_gauge(doc);
    Ok(())
}

fn update_perf_gauge(doc: &Document) {
    let Some((score, offset, color)) = with_page(|s| {
        let perf = &s.games.perf;
        (perf.score(), perf.ring_offset(), perf.band().color())
    }) else {
        return;
    };
    if let Some(fill) = doc.get_element_by_id("perf-ring-fill") {
        let _ = fill.set_attribute("style", &ring_style(offset, perf::RING_RADIUS, Some(color)));
    }
    if let Some(text) = html_element(doc, "perf-score-text") {
        text.set_text_content(Some(&score.to_string()));
        let _ = text.style().set_property("color", color);
    }
}

// --- Skills ------------------------------------------------------------------

fn setup_skills(doc: &Document) -> Result<(), JsValue> {
    let Some(grid) = doc.get_element_by_id("skills-grid") else {
        debug!("no #skills-grid, skills skipped");
        return Ok(());
    };
    for (i, skill) in SKILLS.iter().enumerate() {
        let tile = doc.create_element("button")?;
        tile.set_class_name("skill-tile fade-up");
        tile.set_attribute("aria-label", &format!("{}: {}%", skill.name, skill.level))?;
        tile.set_attribute("data-idx", &i.to_string())?;
        tile.set_inner_html(&skill_tile_markup(skill));
        grid.append_child(&tile)?;
    }

    let target = doc.clone();
    add_listener(&grid, "click", move |evt: Event| {
        let Some(skill) = event_element(&evt)
            .and_then(|el| el.closest(".skill-tile").ok().flatten())
            .and_then(|tile| tile.get_attribute("data-idx"))
            .and_then(|v| v.parse::<usize>().ok())
            .and_then(skills::skill)
        else {
            return;
        };
        if let Some(title) = target.get_element_by_id("skill-detail-title") {
            title.set_text_content(Some(skill.name));
        }
        if let Some(desc) = target.get_element_by_id("skill-detail-desc") {
            desc.set_text_content(Some(skill.desc));
        }
        if let Some(detail) = html_element(&target, "skill-detail") {
            detail.set_hidden(false);
            detail.scroll_into_view_with_bool(false);
        }
    })?;

    if let Some(close) = doc.query_selector(".skill-detail-close")? {
        let target = doc.clone();
        add_listener(&close, "click", move |_evt: Event| {
            if let Some(detail) = html_element(&target, "skill-detail") {
                detail.set_hidden(true);
            }
        })?;
    }
    Ok(())
}

// --- Cursor ------------------------------------------------------------------

fn set_position(el: &HtmlElement, x: f64, y: f64) {
    let style = el.style();
    let _ = style.set_property("left", &format!("{x}px"));
    let _ = style.set_property("top", &format!("{y}px"));
}

fn bind_cursor(doc: &Document) -> Result<(), JsValue> {
    let dot = html_element(doc, "cursor-dot");
    add_listener(doc, "mousemove", move |evt: web_sys::MouseEvent| {
        let (x, y) = (evt.client_x() as f64, evt.client_y() as f64);
        if let Some(dot) = &dot {
            set_position(dot, x, y);
        }
        with_page(|s| s.follower.set_target(x, y));
    })?;

    let body = doc.body();
    add_listener(doc, "mouseover", move |evt: Event| {
        let hovering = event_element(&evt)
            .and_then(|el| el.closest(HOVER_TARGETS).ok().flatten())
            .is_some();
        if let Some(body) = &body {
            let _ = body.class_list().toggle_with_force("cursor-hover", hovering);
        }
    })
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Eases the cursor ring toward the pointer once per display refresh.
fn start_frame_loop(doc: &Document) {
    let Some(ring) = html_element(doc, "cursor-ring") else {
        debug!("no #cursor-ring, frame loop not started");
        return;
    };
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        if let Some((x, y)) = with_page(|s| s.follower.step()) {
            set_position(&ring, x, y);
        }
        if let (Some(w), Some(cb)) = (window(), f.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let (Some(w), Some(cb)) = (window(), g.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

// --- Navigation & scroll -----------------------------------------------------

fn section_boxes(doc: &Document) -> Vec<SectionBox> {
    query_all(doc, "section[id]")
        .into_iter()
        .filter_map(|el| {
            let id = el.id();
            let html = el.dyn_into::<HtmlElement>().ok()?;
            Some(SectionBox {
                id,
                top: html.offset_top() as f64,
                height: html.offset_height() as f64,
            })
        })
        .collect()
}

fn reveal_pass(win: &Window, doc: &Document, config: &PageConfig) {
    let viewport = win
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    for el in query_all(doc, ".fade-up:not(.visible)") {
        let rect = el.get_bounding_client_rect();
        if is_revealed(rect.top(), rect.height(), viewport, config.reveal_threshold) {
            let _ = el.class_list().add_1("visible");
        }
    }
    for tile in query_all(doc, ".skill-tile:not(.ring-filled)") {
        let rect = tile.get_bounding_client_rect();
        if !is_revealed(rect.top(), rect.height(), viewport, config.ring_reveal_threshold) {
            continue;
        }
        let skill = tile
            .get_attribute("data-idx")
            .and_then(|v| v.parse::<usize>().ok())
            .and_then(skills::skill);
        if let (Some(skill), Ok(Some(fill))) = (skill, tile.query_selector(".skill-ring-fill")) {
            let style = ring_style(skill.ring_offset(), skills::RING_RADIUS, None);
            let _ = fill.set_attribute("style", &style);
        }
        let _ = tile.class_list().add_1("ring-filled");
    }
}

fn close_mobile_nav(toggle: &Element, links: &Element) {
    let _ = toggle.class_list().remove_1("open");
    let _ = links.class_list().remove_1("open");
    let _ = toggle.set_attribute("aria-expanded", "false");
}

fn bind_nav(win: &Window, doc: &Document, config: &PageConfig) -> Result<(), JsValue> {
    let (w, d, cfg) = (win.clone(), doc.clone(), config.clone());
    add_listener(win, "scroll", move |_evt: Event| {
        let y = w.scroll_y().unwrap_or(0.0);
        if let Some(nav) = d.get_element_by_id("nav") {
            let _ = nav
                .class_list()
                .toggle_with_force("scrolled", nav_scrolled(y, cfg.nav_shadow_threshold_px));
        }
        let sections = section_boxes(&d);
        let active = active_section(&sections, y, cfg.nav_offset_px);
        for link in query_all(&d, ".nav-links a") {
            let href = link.get_attribute("href").unwrap_or_default();
            let on = active.is_some_and(|id| href.strip_prefix('#') == Some(id));
            let _ = link.class_list().toggle_with_force("active", on);
        }
        if let Ok(Some(hero)) = d.query_selector(".hero-bg-text") {
            if let Ok(hero) = hero.dyn_into::<HtmlElement>() {
                let _ = hero
                    .style()
                    .set_property("transform", &parallax_transform(y, cfg.parallax_factor));
            }
        }
        reveal_pass(&w, &d, &cfg);
    })?;

    let (Some(toggle), Some(links)) = (
        doc.query_selector(".nav-toggle")?,
        doc.query_selector(".nav-links")?,
    ) else {
        return Ok(());
    };
    {
        let (toggle_c, links_c) = (toggle.clone(), links.clone());
        add_listener(&toggle, "click", move |_evt: Event| {
            let open = toggle_c.class_list().toggle("open").unwrap_or(false);
            let _ = links_c.class_list().toggle_with_force("open", open);
            let _ = toggle_c.set_attribute("aria-expanded", if open { "true" } else { "false" });
        })?;
    }
    for link in collect_elements(links.query_selector_all("a")?) {
        let (toggle_c, links_c) = (toggle.clone(), links.clone());
        add_listener(&link, "click", move |_evt: Event| {
            close_mobile_nav(&toggle_c, &links_c);
        })?;
    }
    Ok(())
}

// --- Contact form ------------------------------------------------------------

/// The form has no backend: submitting shows a banner and clears the fields.
fn bind_contact(doc: &Document, success_ms: i32) -> Result<(), JsValue> {
    let Some(form) = doc
        .get_element_by_id("contact-form")
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        return Ok(());
    };
    let banner = html_element(doc, "form-success");
    let this = form.clone();
    add_listener(&form, "submit", move |evt: Event| {
        evt.prevent_default();
        this.reset();
        info!("contact form submitted locally");
        let Some(banner) = &banner else {
            return;
        };
        banner.set_hidden(false);
        let hide = banner.clone();
        let cb = Closure::once_into_js(move || hide.set_hidden(true));
        if let Some(w) = window() {
            let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.unchecked_ref(),
                success_ms,
            );
        }
    })
}
