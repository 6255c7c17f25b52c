use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;
use atelier_engine::logging::{init_logging, LoggingConfig};
use atelier_ui::prelude::*;
use atelier_ui::store::style;

/// Feeds raw host events through `dispatcher` into `control`.
fn replay<C: Control + ?Sized>(dispatcher: &mut Dispatcher, control: &mut C, rect: Rect, events: &[InputEvent]) {
    for ev in events {
        let result = dispatcher.dispatch(ev, control, rect);
        log::trace!("{ev:?} -> {result:?}");
    }
}

fn click(x: f32, y: f32) -> Vec<InputEvent> {
    vec![
        InputEvent::pointer_moved(x, y),
        InputEvent::primary(MouseButtonState::Pressed, x, y),
        InputEvent::primary(MouseButtonState::Released, x, y),
    ]
}

fn drag(from: Vec2, to: Vec2) -> Vec<InputEvent> {
    let mid = Vec2::new((from.x + to.x) * 0.5, (from.y + to.y) * 0.5);
    vec![
        InputEvent::pointer_moved(from.x, from.y),
        InputEvent::primary(MouseButtonState::Pressed, from.x, from.y),
        InputEvent::pointer_moved(mid.x, mid.y),
        InputEvent::pointer_moved(to.x, to.y),
        InputEvent::primary(MouseButtonState::Released, to.x, to.y),
    ]
}

// ── Attributes ────────────────────────────────────────────────────────────

fn attributes_session(store: &AttributeStore) -> anyhow::Result<()> {
    store.toggle_margin();
    store.toggle_stack();
    store.toggle_opacity();

    let margin = BoxControl::new(store, BoxGroup::Margin);
    margin.set(Edge::Top, "12px");
    margin.nudge(Edge::Left, 4.0);

    store
        .setter_for("stack.gap")
        .context("binding stack gap")?
        .set("16");
    store
        .set(AttributePath::parse("stack.justifyContent")?, Some(FlexAlign::End.into()))
        .context("setting justify content")?;
    store.setter(AttributeKey::Opacity).set(60.0);

    // Rejected: logged by the setter, store untouched.
    store.setter(AttributeKey::Opacity).set("translucent");

    store.read(|attrs| {
        for (name, value) in style::box_style(attrs) {
            log::info!("  {name}: {value}");
        }
    });
    log::info!("snapshot: {}", style::to_json(&store.snapshot()));
    Ok(())
}

// ── Gradient ──────────────────────────────────────────────────────────────

fn gradient_session() {
    let track = Rect::new(0.0, 0.0, 200.0, 24.0);
    let dial = Rect::new(0.0, 40.0, 32.0, 32.0);
    let mut dispatcher = Dispatcher::new(DragConfig::default());

    let editor = Rc::new(RefCell::new(
        GradientEditor::new(GradientConfig::default())
            .on_change(|css| log::debug!("gradient changed: {css}")),
    ));

    // Click the middle of the track, then drag blue's handle to the end.
    replay(&mut dispatcher, &mut *editor.borrow_mut(), track, &click(100.0, 12.0));
    replay(&mut dispatcher, &mut *editor.borrow_mut(), track, &drag(Vec2::new(160.0, 12.0), Vec2::new(196.0, 12.0)));
    replay(
        &mut dispatcher,
        &mut *editor.borrow_mut(),
        track,
        &[InputEvent::key_press(Key::ArrowLeft, Modifiers::SHIFT)],
    );
    editor.borrow_mut().set_current_color("rebeccapurple");

    editor.borrow_mut().set_kind(GradientType::Linear.kind());
    let target = editor.clone();
    let mut angle = AngleInput::new()
        .value(i32::from(editor.borrow().style().angle))
        .on_change(move |deg| target.borrow_mut().set_angle(i32::from(deg)));
    replay(&mut dispatcher, &mut angle, dial, &drag(Vec2::new(16.0, 44.0), Vec2::new(4.0, 68.0)));
    replay(&mut dispatcher, &mut angle, dial, &[InputEvent::key_press(Key::ArrowUp, Modifiers::SHIFT)]);

    let editor = editor.borrow();
    for stop in editor.sorted() {
        let marker = if &stop.id == editor.current_id() { "*" } else { " " };
        log::info!("{marker} {:>3}% {}", stop.stop, stop.color);
    }
    log::info!("type:       {}", editor.gradient_type().label());
    log::info!("bar:        {}", editor.bar_css());
    log::info!("background: {}", editor.css());
}

// ── Background image ──────────────────────────────────────────────────────

fn background_session() {
    let picker = Rect::new(0.0, 0.0, 90.0, 30.0);
    let preview = Rect::new(0.0, 0.0, 280.0, 200.0);

    let mut pivot = PivotControl::new().on_change(|v| log::debug!("pivot: {}", v.label()));
    let mut dispatcher = Dispatcher::new(PivotControl::drag_config());
    replay(&mut dispatcher, &mut pivot, picker, &drag(Vec2::new(45.0, 15.0), Vec2::new(82.0, 4.0)));
    log::info!("pivot: {} ({})", pivot.label(), pivot.get().css());

    let mut controls = BackgroundControls::new(BackgroundImage::new("/images/potato.jpg"))
        .on_change(|bg| log::trace!("background: {}", bg.to_css()));
    controls.set_position(pivot.get());
    controls.set_size(BackgroundSize::Custom);
    controls.set_scale_percent(150.0);
    controls.set_repeat(BackgroundRepeat::RepeatX);
    log::info!("{}", controls.background().to_css());

    let mut dispatcher = Dispatcher::new(DragConfig::default());
    replay(&mut dispatcher, &mut controls, preview, &drag(Vec2::new(140.0, 100.0), Vec2::new(164.0, 88.0)));
    log::info!(
        "dragged to {} ({}%)",
        controls.background().position.css(),
        controls.background().scale_percent()
    );
}

// ── Blending ──────────────────────────────────────────────────────────────

fn blending_session() {
    let mut preview = BlendingPreview::new()
        .on_change(|p| log::debug!("blend: {} at {}%", p.blend_mode().label(), p.opacity()));
    preview.set_image(SampleImage::Leaves);
    preview.set_blend(BlendMode::Overlay);
    preview.set_opacity(70.0);
    preview.set_color("#ffd400");

    for (name, value) in preview.backdrop_declarations().into_iter().chain(preview.text_declarations()) {
        log::info!("  {name}: {value}");
    }
}

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║          ATELIER STUDIO v0.1           ║");
    println!("  ║   headless controls  ·  scripted run   ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let store = AttributeStore::new();
    store.subscribe(|attrs| log::debug!("attributes: {}", style::to_json(attrs)));

    log::info!("── attributes");
    attributes_session(&store)?;
    log::info!("── gradient");
    gradient_session();
    log::info!("── background");
    background_session();
    log::info!("── blending");
    blending_session();

    Ok(())
}
