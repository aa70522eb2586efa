//! Terminal frontend for polyview
//!
//! Draws the current shape as coloured characters and maps mouse drags,
//! wheel and keys onto the core [`ViewModel`](polyview_core::ViewModel).
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
    QueueableCommand,
};
use log::{debug, trace};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod config;
pub mod renderer;
pub mod viewer;

pub use config::{ConfigError, Settings, ViewerConfig};
pub use renderer::{CellRenderer, RenderOptions};
pub use viewer::Viewer;

/// Main application struct for terminal rendering
pub struct TerminalApp {
    viewer: Viewer,
    renderer: CellRenderer,
    frame_time: Duration,
}

impl TerminalApp {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let (width, height) = terminal::size()?;
        let (canvas_width, canvas_height) = canvas_size(width, height);

        Ok(Self {
            viewer: Viewer::new(settings)?,
            renderer: CellRenderer::new(canvas_width, canvas_height),
            frame_time: Duration::from_millis(1000 / u64::from(settings.fps.max(1))),
        })
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        terminal::enable_raw_mode()?;
        let mut out = stdout();
        let mut guard = TerminalGuard::new(&mut out);
        execute!(
            guard.out,
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;

        self.main_loop()
    }

    fn main_loop(&mut self) -> anyhow::Result<()> {
        let mut pacer = FramePacer::new(self.frame_time);
        let mut dirty = true;

        while self.viewer.is_running() {
            let now = Instant::now();
            if dirty && pacer.ready(now) {
                self.render()?;
                pacer.mark(now);
                dirty = false;
            }

            // Wait for input, or until the next frame is due. Everything
            // pending is drained so a burst of drag events costs one redraw.
            if event::poll(pacer.timeout(Instant::now(), dirty))? {
                loop {
                    let event = event::read()?;
                    if let event::Event::Resize(width, height) = event {
                        let (w, h) = canvas_size(width, height);
                        self.renderer.resize(w, h);
                    }
                    dirty |= self.viewer.handle_event(&event)?;
                    if !event::poll(Duration::ZERO)? {
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let started = Instant::now();
        let (width, height) = (self.renderer.width(), self.renderer.height());

        let frame = self.viewer.view().frame(width as u32, height as u32);
        self.renderer.render_frame(&frame, self.viewer.options());

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;
        self.renderer.draw(&mut stdout)?;

        // Status bar on the last row
        let mut status = self.viewer.status_line();
        status.truncate(width);
        queue!(
            stdout,
            cursor::MoveTo(0, height as u16),
            terminal::Clear(ClearType::CurrentLine),
            SetForegroundColor(Color::Yellow),
            Print(status),
            ResetColor
        )?;

        stdout.flush()?;
        trace!("frame rendered in {:?}", started.elapsed());
        Ok(())
    }
}

/// Restores the terminal when dropped, whether `run` returns normally,
/// fails, or unwinds from a panic.
///
/// Raw mode is switched off first so the shell is usable even if the
/// escape sequences cannot be written. Errors are ignored here.
struct TerminalGuard<'a, W: Write> {
    out: &'a mut W,
}

impl<'a, W: Write> TerminalGuard<'a, W> {
    fn new(out: &'a mut W) -> Self {
        Self { out }
    }
}

impl<W: Write> Drop for TerminalGuard<'_, W> {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(
            self.out,
            DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show
        );
    }
}

/// Limits redraws to one per `frame_time`
#[derive(Debug, Clone, Copy)]
struct FramePacer {
    frame_time: Duration,
    last: Option<Instant>,
}

impl FramePacer {
    fn new(frame_time: Duration) -> Self {
        Self {
            frame_time,
            last: None,
        }
    }

    /// Whether a frame may be drawn at `now`
    fn ready(&self, now: Instant) -> bool {
        self.last
            .map_or(true, |last| now.saturating_duration_since(last) >= self.frame_time)
    }

    fn mark(&mut self, now: Instant) {
        self.last = Some(now);
    }

    /// How long to wait for input. With a redraw pending this is the time
    /// left until the next frame is allowed.
    fn timeout(&self, now: Instant, dirty: bool) -> Duration {
        match self.last {
            Some(last) if dirty => self
                .frame_time
                .saturating_sub(now.saturating_duration_since(last)),
            None if dirty => Duration::ZERO,
            _ => self.frame_time,
        }
    }
}

/// Canvas size for a terminal of `width` x `height`, leaving a status row
fn canvas_size(width: u16, height: u16) -> (usize, usize) {
    (usize::from(width), usize::from(height.saturating_sub(1)))
}

/// Render a single frame of `viewer` at `width` x `height` cells to `writer`
pub fn render_once<W: Write>(
    viewer: &Viewer,
    width: u16,
    height: u16,
    writer: &mut W,
) -> io::Result<()> {
    debug!("rendering one {width}x{height} frame");
    let mut renderer = CellRenderer::new(usize::from(width), usize::from(height));
    let frame = viewer.view().frame(u32::from(width), u32::from(height));
    renderer.render_frame(&frame, viewer.options());
    renderer.draw(writer)?;
    writer.queue(Print("\r\n"))?;
    writer.flush()
}
