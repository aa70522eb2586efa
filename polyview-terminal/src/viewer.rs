//! Maps terminal input events onto the view model and render options
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::style::Color;
use log::debug;
use polyview_core::{Result, ShapeKind, ViewModel};

use crate::config::{Settings, PALETTE};
use crate::renderer::RenderOptions;

/// Interactive state: the view model plus presentation toggles
pub struct Viewer {
    view: ViewModel,
    options: RenderOptions,
    degrees_per_cell: i32,
    drag_anchor: Option<(u16, u16)>,
    running: bool,
}

impl Viewer {
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self {
            view: ViewModel::new(settings.shape)?,
            options: RenderOptions {
                fill_faces: settings.fill_faces,
                mark_edges: settings.mark_edges,
                face_color: settings.face_color,
                mark_color: settings.mark_color,
            },
            degrees_per_cell: settings.degrees_per_cell,
            drag_anchor: None,
            running: true,
        })
    }

    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Apply one input event. Returns true if the picture needs redrawing.
    pub fn handle_event(&mut self, event: &Event) -> Result<bool> {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => Ok(self.handle_mouse(mouse)),
            Event::Resize(..) => Ok(true),
            _ => Ok(false),
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> Result<bool> {
        if key.kind == KeyEventKind::Release {
            return Ok(false);
        }
        let step = self.degrees_per_cell;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false
            }
            // Arrow keys behave like a one-cell drag in that direction
            KeyCode::Char('w') | KeyCode::Up => self.view.apply_drag(0, -step),
            KeyCode::Char('s') | KeyCode::Down => self.view.apply_drag(0, step),
            KeyCode::Char('a') | KeyCode::Left => self.view.apply_drag(-step, 0),
            KeyCode::Char('d') | KeyCode::Right => self.view.apply_drag(step, 0),
            KeyCode::Char('+') | KeyCode::Char('=') => self.view.apply_zoom_delta(-1),
            KeyCode::Char('-') => self.view.apply_zoom_delta(1),
            KeyCode::Char('1') => self.select(ShapeKind::Cube)?,
            KeyCode::Char('2') => self.select(ShapeKind::Pyramid)?,
            KeyCode::Char('3') => self.select(ShapeKind::Box)?,
            KeyCode::Char('4') => self.select(ShapeKind::Prism)?,
            KeyCode::Char('f') => self.options.fill_faces = !self.options.fill_faces,
            KeyCode::Char('e') => self.options.mark_edges = !self.options.mark_edges,
            KeyCode::Char('c') => self.options.face_color = next_color(self.options.face_color),
            KeyCode::Char('r') => self.view.reset_view(),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) -> bool {
        let position = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.drag_anchor = Some(position);
                false
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let Some((x0, y0)) = self.drag_anchor.replace(position) else {
                    return false;
                };
                let dx = i32::from(position.0) - i32::from(x0);
                let dy = i32::from(position.1) - i32::from(y0);
                self.view.apply_drag(
                    dx.saturating_mul(self.degrees_per_cell),
                    dy.saturating_mul(self.degrees_per_cell),
                );
                dx != 0 || dy != 0
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.drag_anchor = None;
                false
            }
            // Wheel down zooms out, as a positive notch count
            MouseEventKind::ScrollDown => {
                self.view.apply_zoom_delta(1);
                true
            }
            MouseEventKind::ScrollUp => {
                self.view.apply_zoom_delta(-1);
                true
            }
            _ => false,
        }
    }

    fn select(&mut self, shape: ShapeKind) -> Result<()> {
        self.drag_anchor = None;
        self.view.select_shape(shape)
    }

    /// One line describing the current state and the controls
    pub fn status_line(&self) -> String {
        let rotation = self.view.rotation();
        format!(
            "{} | rot x {:.0} y {:.0} | zoom {:.1} | fill {} | edges {} | 1-4 shape  drag/WASD rotate  wheel/+- zoom  f fill  e edges  c color  r reset  q quit",
            self.view.shape(),
            rotation.x,
            rotation.y,
            self.view.zoom(),
            on_off(self.options.fill_faces),
            on_off(self.options.mark_edges),
        )
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

/// The palette colour after `current`, or the first one if it is not listed
fn next_color(current: Color) -> Color {
    let next = PALETTE
        .iter()
        .position(|&c| c == current)
        .map_or(0, |i| (i + 1) % PALETTE.len());
    debug!("face color {current:?} -> {:?}", PALETTE[next]);
    PALETTE[next]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn viewer() -> Viewer {
        Viewer::new(&Settings::default()).unwrap()
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_starts_with_configured_shape() {
        let settings = Settings {
            shape: ShapeKind::Pyramid,
            fill_faces: true,
            ..Settings::default()
        };
        let viewer = Viewer::new(&settings).unwrap();
        assert_eq!(viewer.view().shape(), ShapeKind::Pyramid);
        assert!(viewer.options().fill_faces);
        assert!(viewer.is_running());
    }

    #[test]
    fn test_mouse_drag_rotates() {
        let mut viewer = viewer();
        let left = MouseButton::Left;
        assert!(!viewer.handle_event(&mouse(MouseEventKind::Down(left), 10, 5)).unwrap());
        assert!(viewer.handle_event(&mouse(MouseEventKind::Drag(left), 13, 3)).unwrap());
        assert!(viewer.handle_event(&mouse(MouseEventKind::Drag(left), 14, 3)).unwrap());
        viewer.handle_event(&mouse(MouseEventKind::Up(left), 14, 3)).unwrap();

        // 4 cells right and 2 up, at 4 degrees per cell
        let rotation = viewer.view().rotation();
        assert_eq!(rotation.y, -16.0);
        assert_eq!(rotation.x, 8.0);
    }

    #[test]
    fn test_drag_scaling_saturates() {
        let mut viewer = Viewer::new(&Settings {
            degrees_per_cell: i32::MAX,
            ..Settings::default()
        })
        .unwrap();
        let left = MouseButton::Left;
        viewer.handle_event(&mouse(MouseEventKind::Down(left), 0, 0)).unwrap();
        assert!(viewer.handle_event(&mouse(MouseEventKind::Drag(left), 2, 0)).unwrap());
        assert_eq!(viewer.view().rotation().y, -f64::from(i32::MAX));

        viewer.handle_event(&key(KeyCode::Up)).unwrap();
        assert_eq!(viewer.view().rotation().x, f64::from(i32::MAX));
    }

    #[test]
    fn test_drag_without_press_is_ignored() {
        let mut viewer = viewer();
        let event = mouse(MouseEventKind::Drag(MouseButton::Left), 20, 20);
        assert!(!viewer.handle_event(&event).unwrap());
        assert_eq!(viewer.view().rotation().y, 0.0);
    }

    #[test]
    fn test_wheel_zooms() {
        let mut viewer = viewer();
        viewer.handle_event(&mouse(MouseEventKind::ScrollUp, 0, 0)).unwrap();
        viewer.handle_event(&mouse(MouseEventKind::ScrollUp, 0, 0)).unwrap();
        assert!((viewer.view().zoom() - 1.2).abs() < 1e-9);

        for _ in 0..30 {
            viewer.handle_event(&mouse(MouseEventKind::ScrollDown, 0, 0)).unwrap();
        }
        assert!((viewer.view().zoom() - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_number_keys_select_and_reset() {
        let mut viewer = viewer();
        viewer.handle_event(&key(KeyCode::Left)).unwrap();
        viewer.handle_event(&key(KeyCode::Char('+'))).unwrap();

        assert!(viewer.handle_event(&key(KeyCode::Char('4'))).unwrap());
        assert_eq!(viewer.view().shape(), ShapeKind::Prism);
        assert_eq!(viewer.view().zoom(), 1.0);
        assert_eq!(viewer.view().rotation().y, 0.0);
    }

    #[test]
    fn test_toggles_and_color_cycle() {
        let mut viewer = viewer();
        viewer.handle_event(&key(KeyCode::Char('f'))).unwrap();
        viewer.handle_event(&key(KeyCode::Char('e'))).unwrap();
        viewer.handle_event(&key(KeyCode::Char('c'))).unwrap();

        let options = viewer.options();
        assert!(options.fill_faces);
        assert!(options.mark_edges);
        assert_eq!(options.face_color, Color::Green);
    }

    #[test]
    fn test_color_cycle_wraps() {
        assert_eq!(next_color(Color::White), Color::Red);
        assert_eq!(next_color(Color::DarkGrey), Color::Red);
    }

    #[test]
    fn test_quit_keys() {
        let mut viewer = viewer();
        viewer.handle_event(&key(KeyCode::Char('q'))).unwrap();
        assert!(!viewer.is_running());

        let mut viewer = self::viewer();
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        viewer.handle_event(&ctrl_c).unwrap();
        assert!(!viewer.is_running());
        assert_eq!(viewer.options().face_color, Color::Red);
    }

    #[test]
    fn test_key_release_ignored() {
        let mut viewer = viewer();
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('f'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(!viewer.handle_event(&release).unwrap());
        assert!(!viewer.options().fill_faces);
    }

    #[test]
    fn test_status_line_names_shape() {
        let viewer = viewer();
        assert!(viewer.status_line().starts_with("cube | rot x 0 y 0 | zoom 1.0"));
    }
}
