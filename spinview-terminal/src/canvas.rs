/// Canvas abstraction and the crossterm-backed terminal implementation
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, MouseEvent, MouseEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use log::debug;
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

use spinview_core::Rgb;

/// One frame's worth of decoded input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasEvent {
    /// A printable key, lowercased.
    Key(char),
    /// Mouse wheel movement, positive away from the user.
    Wheel(f64),
    /// Close request.
    Quit,
}

/// Rendering and input surface the viewer draws through. Keeps the
/// rotation/projection core free of any terminal or graphics dependency.
pub trait Canvas {
    /// Buffer size in cells (columns, rows).
    fn size(&self) -> (u16, u16);

    /// Reset the frame buffer to the background.
    fn clear(&mut self);

    /// Draw a filled point. `radius` is in cells; 0 plots a single cell.
    fn draw_point(&mut self, pos: (f64, f64), color: Rgb, radius: u16);

    /// Draw a line segment between two positions.
    fn draw_line(&mut self, a: (f64, f64), b: (f64, f64), color: Rgb);

    /// Draw a text overlay anchored at a cell.
    fn draw_text(&mut self, text: &str, cell: (u16, u16), color: Rgb);

    /// Drain all input that arrived since the previous poll.
    fn poll_input(&mut self) -> io::Result<Vec<CanvasEvent>>;

    /// Block out the remainder of the frame to hold the target rate and
    /// return the full duration of the frame that just ended.
    fn tick(&mut self, target_fps: u32) -> Duration;

    /// Flush the frame buffer to the output.
    fn present(&mut self) -> io::Result<()>;
}

const POINT_CHAR: char = 'o';
const LINE_CHAR: char = '*';

/// Terminal canvas: a char + color cell buffer flushed through crossterm.
/// Construction enters raw mode, the alternate screen, and mouse capture;
/// drop restores the terminal on every exit path.
pub struct TermCanvas {
    width: u16,
    height: u16,
    chars: Vec<char>,
    colors: Vec<Rgb>,
    last_tick: Instant,
}

impl TermCanvas {
    pub fn open(resolution: [u16; 2]) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;
        debug!("terminal canvas opened at {}x{}", resolution[0], resolution[1]);

        let size = resolution[0] as usize * resolution[1] as usize;
        Ok(Self {
            width: resolution[0],
            height: resolution[1],
            chars: vec![' '; size],
            colors: vec![[0, 0, 0]; size],
            last_tick: Instant::now(),
        })
    }

    fn plot(&mut self, x: i32, y: i32, ch: char, color: Rgb) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.chars[idx] = ch;
        self.colors[idx] = color;
    }
}

impl Canvas for TermCanvas {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        for ch in &mut self.chars {
            *ch = ' ';
        }
    }

    fn draw_point(&mut self, pos: (f64, f64), color: Rgb, radius: u16) {
        let (cx, cy) = (pos.0.round() as i32, pos.1.round() as i32);
        let r = radius as i32;
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r * r {
                    self.plot(cx + dx, cy + dy, POINT_CHAR, color);
                }
            }
        }
    }

    fn draw_line(&mut self, a: (f64, f64), b: (f64, f64), color: Rgb) {
        // Bresenham over cell coordinates.
        let (mut x0, mut y0) = (a.0.round() as i32, a.1.round() as i32);
        let (x1, y1) = (b.0.round() as i32, b.1.round() as i32);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x0, y0, LINE_CHAR, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    fn draw_text(&mut self, text: &str, cell: (u16, u16), color: Rgb) {
        let (x, y) = (cell.0 as i32, cell.1 as i32);
        for (i, ch) in text.chars().enumerate() {
            self.plot(x + i as i32, y, ch, color);
        }
    }

    fn poll_input(&mut self) -> io::Result<Vec<CanvasEvent>> {
        let mut events = Vec::new();
        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(KeyEvent { code, .. }) => match code {
                    KeyCode::Esc => events.push(CanvasEvent::Quit),
                    KeyCode::Char(c) => events.push(CanvasEvent::Key(c.to_ascii_lowercase())),
                    _ => {}
                },
                Event::Mouse(MouseEvent { kind, .. }) => match kind {
                    MouseEventKind::ScrollUp => events.push(CanvasEvent::Wheel(1.0)),
                    MouseEventKind::ScrollDown => events.push(CanvasEvent::Wheel(-1.0)),
                    _ => {}
                },
                _ => {}
            }
        }
        Ok(events)
    }

    fn tick(&mut self, target_fps: u32) -> Duration {
        let target = Duration::from_secs_f64(1.0 / target_fps.max(1) as f64);
        let elapsed = self.last_tick.elapsed();
        if elapsed < target {
            std::thread::sleep(target - elapsed);
        }
        let frame = self.last_tick.elapsed();
        self.last_tick = Instant::now();
        frame
    }

    fn present(&mut self) -> io::Result<()> {
        let mut stdout = stdout();
        for y in 0..self.height {
            queue!(stdout, cursor::MoveTo(0, y))?;
            for x in 0..self.width {
                let idx = y as usize * self.width as usize + x as usize;
                let [r, g, b] = self.colors[idx];
                queue!(
                    stdout,
                    SetForegroundColor(Color::Rgb { r, g, b }),
                    Print(self.chars[idx])
                )?;
            }
        }
        queue!(stdout, ResetColor)?;
        stdout.flush()
    }
}

impl Drop for TermCanvas {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(
            stdout(),
            event::DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show
        );
    }
}
