//! Headless walkthrough of the classic hello-window demo: a window with a
//! greeting, a progress bar, and a button that kicks off background work.
//!
//! The button callback spawns a worker thread that publishes progress
//! through a [`Mailbox`]; the frame loop drains the mailbox and applies the
//! newest fraction through typed arena access before rendering. Run with
//! `RUST_LOG=debug` to watch the frames go by.

use std::cell::RefCell;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use lattice_core::logging::{LoggingConfig, init_logging};
use lattice_ui::prelude::*;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let surface = Rc::new(RefCell::new(HeadlessSurface::new(Vec2::new(640.0, 480.0))));
    let mut scene = Scene::new();

    let mut label = Label::new("greeting");
    label.set_text("Hello, world!");
    let label_id = scene.insert(label);

    let bar_id = scene.insert(ProgressBar::new("progress"));

    let progress = Mailbox::<f32>::new();
    let tx = progress.sender();
    let mut button = Button::new("start");
    button.set_text("Start");
    button.set_callback(move || {
        let tx = tx.clone();
        thread::spawn(move || {
            for step in 1..=20 {
                thread::sleep(Duration::from_millis(10));
                tx.post(step as f32 / 20.0);
            }
        });
    });
    let button_id = scene.insert(button);

    let mut boxes = Boxes::new("content");
    boxes.set_capacity(3);
    boxes.set_widget(0, label_id)?;
    boxes.set_widget(1, bar_id)?;
    boxes.set_widget(2, button_id)?;
    let content_id = scene.insert(boxes);

    let shared: Rc<RefCell<dyn WindowSurface>> = surface.clone();
    let mut window = ApplicationWindow::new("main", shared);
    window.set_title("Hello World");
    window.set_child(content_id);
    let root = scene.insert(window);
    scene.set_root(root);

    let mut backend = RecordingBackend::new(surface.borrow().framebuffer_size());
    backend.queue_click("Start");

    let mut fraction = 0.0f32;
    let mut frames = 0u32;
    while fraction < 1.0 {
        if let Some(latest) = progress.take() {
            fraction = latest;
            if let Some(bar) = scene.widget_mut::<ProgressBar>(bar_id) {
                bar.set_progress(latest);
            }
        }

        backend.new_frame();
        scene.render(&mut backend)?;
        frames += 1;
        log::debug!(
            "frame {frames}: progress {:.0}%, {} draw commands",
            fraction * 100.0,
            backend.commands().len()
        );
        thread::sleep(Duration::from_millis(16));
    }

    println!("done after {frames} frames, final frame recorded:");
    for cmd in backend.commands() {
        println!("  {cmd:?}");
    }
    Ok(())
}
