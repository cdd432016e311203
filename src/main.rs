use std::io::{self, Stdout, Write};

use anyhow::{Context, Result};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::QueueableCommand;
use rand::rngs::StdRng;
use rand::SeedableRng;
use unicode_width::UnicodeWidthStr;

use serpent_maze::{GameConfig, Pos, Session, Tile};

const CELL_W: usize = 2;

#[derive(Clone, Copy, PartialEq)]
enum Glyph {
    Chaser,
    Target,
    Wall,
    Empty,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(io::stderr)
        .init();

    let config = GameConfig::from_env();
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut session = Session::new(&config, &mut rng).context("failed to build levels")?;
    let number = u32::try_from(config.preview_level).context("preview level out of range")?;
    session.jump_to(number, &mut rng);

    let level = session.level();
    let mut stdout = io::stdout();
    render(&mut stdout, &session)?;
    writeln!(
        stdout,
        "Level {} of {}  {}x{}  open tiles: {}  connected: {}",
        session.level_number(),
        session.level_count(),
        level.grid.width(),
        level.grid.height(),
        level.grid.open_cells().len(),
        level.grid.is_connected_from(level.start),
    )?;
    stdout.flush()?;
    Ok(())
}

fn render(stdout: &mut Stdout, session: &Session) -> io::Result<()> {
    let grid = session.grid();
    for pos in grid.positions() {
        draw_cell(stdout, glyph_for(session, pos))?;
        if pos.x + 1 == grid.width() {
            stdout.queue(Print('\n'))?;
        }
    }
    Ok(())
}

fn glyph_for(session: &Session, pos: Pos) -> Glyph {
    if pos == session.chaser() {
        return Glyph::Chaser;
    }
    if pos == session.target() {
        return Glyph::Target;
    }
    match session.grid().tile(pos) {
        Some(Tile::Open) => Glyph::Empty,
        _ => Glyph::Wall,
    }
}

fn draw_cell(stdout: &mut Stdout, glyph: Glyph) -> io::Result<()> {
    let (text, color) = match glyph {
        Glyph::Chaser => ("🐍", Color::Green),
        Glyph::Target => ("🐭", Color::White),
        Glyph::Wall => ("██", Color::Blue),
        Glyph::Empty => ("  ", Color::Reset),
    };
    stdout.queue(SetForegroundColor(color))?;
    stdout.queue(Print(text))?;
    let w = UnicodeWidthStr::width(text);
    if w < CELL_W {
        for _ in 0..(CELL_W - w) {
            stdout.queue(Print(' '))?;
        }
    }
    stdout.queue(ResetColor)?;
    Ok(())
}
