use std::{io, time::Duration};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    DefaultTerminal, Frame,
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    symbols::border,
    text::Line,
    widgets::{Block, Borders, Paragraph, Sparkline, Widget},
};

use crate::app::Watch;

pub struct App {
    watch: Watch,
    interval: Duration,
    exit: bool,
}

impl App {
    pub fn new(watch: Watch, interval: Duration) -> Self {
        Self {
            watch,
            interval,
            exit: false,
        }
    }

    fn draw(&self, frame: &mut Frame) {
        frame.render_widget(self, frame.area());
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        while !self.exit {
            self.watch.poll();
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    // waits up to `interval`; a key press ends the wait early, so the next poll comes sooner
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.interval)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if let KeyCode::Char('q') | KeyCode::Char('Q') = key.code {
            self.exit = true;
        }
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = Line::from(vec![
            format!(" Address: {} ", self.watch.address()).yellow(),
            format!("via {} ", self.watch.sniffer().tool().display()).white(),
        ]);
        let instructions = Line::from(vec![" Quit ".into(), "<Q> ".blue().bold()]);

        let block = Block::bordered()
            .title(title.left_aligned())
            .title_bottom(instructions.centered())
            .border_set(border::THICK);

        let inner_area = block.inner(area);
        block.render(area, buf);

        // [value, counters, last error, sparkline]
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(3),
            ])
            .split(inner_area);

        let value = self
            .watch
            .latest
            .as_deref()
            .map_or_else(|| "-".to_string(), |v| v.trim_end().to_string());
        Paragraph::new(Line::from(vec!["Value: ".into(), value.bold().green()]))
            .render(chunks[0], buf);

        Paragraph::new(format!(
            "Samples: {}  Errors: {}",
            self.watch.samples, self.watch.errors
        ))
        .render(chunks[1], buf);

        if let Some(error) = &self.watch.last_error {
            Paragraph::new(error.as_str().red()).render(chunks[2], buf);
        }

        // newest readings on the right
        let width = chunks[3].width as usize;
        let skip = self.watch.history.len().saturating_sub(width);
        let data: Vec<u64> = self.watch.history.iter().skip(skip).copied().collect();
        Sparkline::default()
            .block(Block::default().borders(Borders::TOP).title("History"))
            .style(Style::default().fg(Color::Cyan))
            .data(data)
            .render(chunks[3], buf);
    }
}
