//! `requestAnimationFrame` binding for the animation driver.

use gloo::render::{AnimationFrame, request_animation_frame};
use std::cell::RefCell;
use std::rc::Rc;

use crate::application::AnimationDriver;
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::scene::FrameStats;
use crate::infrastructure::rendering::CubeRenderer;

struct AnimationLoop {
    driver: AnimationDriver<CubeRenderer>,
    // dropping the handle cancels the pending callback
    pending_frame: Option<AnimationFrame>,
}

thread_local! {
    static ACTIVE_LOOP: RefCell<Option<Rc<RefCell<AnimationLoop>>>> = const { RefCell::new(None) };
}

fn schedule_next_frame(animation: Rc<RefCell<AnimationLoop>>) {
    let next = Rc::clone(&animation);
    let frame = request_animation_frame(move |timestamp| {
        next.borrow_mut().driver.tick(timestamp);
        schedule_next_frame(next);
    });
    animation.borrow_mut().pending_frame = Some(frame);
}

/// Hand the renderer to a new loop that runs on every display refresh.
///
/// A loop that was already running is stopped first so only one renderer
/// draws into the page.
pub fn start_animation_loop(renderer: CubeRenderer) {
    let canvas_id = renderer.canvas_id().to_string();
    let animation = Rc::new(RefCell::new(AnimationLoop {
        driver: AnimationDriver::new(renderer),
        pending_frame: None,
    }));

    let previous = ACTIVE_LOOP.with(|cell| cell.borrow_mut().replace(Rc::clone(&animation)));
    if let Some(previous) = previous {
        previous.borrow_mut().pending_frame = None;
        get_logger().info(
            LogComponent::Presentation("AnimationLoop"),
            "Replaced the running animation loop",
        );
    }

    schedule_next_frame(animation);
    get_logger().info(
        LogComponent::Presentation("AnimationLoop"),
        &format!("🎬 Animation loop started on '{}'", canvas_id),
    );
}

/// Frame statistics of the running loop, if any
pub fn active_loop_stats() -> Option<FrameStats> {
    ACTIVE_LOOP.with(|cell| cell.borrow().as_ref().map(|animation| animation.borrow().driver.stats()))
}
