use std::time::{Duration, Instant};

use log::{debug, info};
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoopBuilder},
};

use crate::config::DemoConfig;
use crate::render::{GlWindowContext, TriangleScene};
use crate::utils::error::{DemoError, Result};

/// Lifecycle of the one frame this program shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    Pending,
    Shown { until: Instant },
}

impl Presentation {
    /// True only for the first call: that caller draws and presents.
    pub fn begin(&mut self, now: Instant, hold: Duration) -> bool {
        match self {
            Self::Pending => {
                *self = Self::Shown { until: now + hold };
                true
            }
            Self::Shown { .. } => false,
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        match self {
            Self::Pending => None,
            Self::Shown { until } => Some(*until),
        }
    }

    pub fn is_over(&self, now: Instant) -> bool {
        self.deadline().is_some_and(|until| now >= until)
    }
}

/// Opens the window, draws the triangle once, keeps it on screen for the
/// configured delay, then returns.
pub fn run(config: &DemoConfig) -> Result<()> {
    let event_loop = EventLoopBuilder::new().build()?;

    let context = GlWindowContext::create(&event_loop, &config.window, &config.context)?;
    context.log_driver_info();

    let mut scene = TriangleScene::new(config)?;
    let hold = config.present_delay();
    let mut presentation = Presentation::Pending;
    let mut failure: Option<DemoError> = None;

    context.window().request_redraw();

    event_loop.run(|event, elwt| match event {
        Event::Resumed => context.window().request_redraw(),
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::RedrawRequested => {
                if !presentation.begin(Instant::now(), hold) {
                    return;
                }
                scene.draw();
                if let Err(e) = context.present() {
                    failure = Some(e);
                    elwt.exit();
                    return;
                }
                info!("Frame presented, closing in {} ms", hold.as_millis());
            }
            WindowEvent::CloseRequested => elwt.exit(),
            _ => (),
        },
        Event::AboutToWait => {
            if presentation.is_over(Instant::now()) {
                elwt.exit();
            } else if let Some(until) = presentation.deadline() {
                elwt.set_control_flow(ControlFlow::WaitUntil(until));
            }
        }
        _ => (),
    })?;

    debug!("{} draw call(s) issued", scene.draw_calls());

    match failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_first_redraw_draws() {
        let start = Instant::now();
        let hold = Duration::from_millis(5000);
        let mut presentation = Presentation::Pending;

        assert!(presentation.begin(start, hold));
        assert!(!presentation.begin(start + Duration::from_millis(10), hold));
        assert!(!presentation.begin(start + Duration::from_secs(60), hold));
        assert_eq!(presentation.deadline(), Some(start + hold));
    }

    #[test]
    fn test_pending_never_expires() {
        let presentation = Presentation::Pending;
        assert_eq!(presentation.deadline(), None);
        assert!(!presentation.is_over(Instant::now() + Duration::from_secs(3600)));
    }

    #[test]
    fn test_expires_after_hold() {
        let start = Instant::now();
        let hold = Duration::from_millis(250);
        let mut presentation = Presentation::Pending;
        presentation.begin(start, hold);

        assert!(!presentation.is_over(start));
        assert!(!presentation.is_over(start + Duration::from_millis(249)));
        assert!(presentation.is_over(start + hold));
    }

    #[test]
    fn test_zero_hold_closes_immediately() {
        let start = Instant::now();
        let mut presentation = Presentation::Pending;
        presentation.begin(start, Duration::ZERO);
        assert!(presentation.is_over(start));
    }
}
