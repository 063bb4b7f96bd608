#![cfg(feature = "std")]
//! Text console front end: parses typed commands, forwards them to a
//! [`SharedSession`] and prints what happened.

use std::collections::VecDeque;
use std::io::Write;
use std::str::FromStr;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::{
    common::{CoordParseError, EngineError},
    game::{GameEvent, GameSession, Phase, Side},
    grid::Coord,
    ship::Orientation,
    shared::SharedSession,
};

pub const HELP: &str = "\
Commands:
  place C7 [v|h]   place the next ship (vertical by default)
  auto             place your remaining ships at random
  C7 | fire C7     fire at the enemy board
  board            show both boards
  help             show this message
  quit             leave the game";

/// A parsed console command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place {
        origin: Coord,
        orientation: Orientation,
    },
    AutoPlace,
    Fire(Coord),
    Show,
    Help,
    Quit,
}

fn parse_coord(input: Option<&str>) -> Result<Coord, String> {
    let input = input.ok_or("Missing coordinate (e.g. C7)")?;
    input
        .parse()
        .map_err(|e: CoordParseError| format!("Bad coordinate '{input}': {e}"))
}

fn parse_orientation(input: &str) -> Result<Orientation, String> {
    match input.to_ascii_lowercase().as_str() {
        "v" | "vertical" => Ok(Orientation::Vertical),
        "h" | "horizontal" => Ok(Orientation::Horizontal),
        _ => Err(format!("Bad orientation '{input}', use v or h")),
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let head = parts.next().ok_or("Empty input")?;
        let command = match head.to_ascii_lowercase().as_str() {
            "q" | "quit" | "exit" => Command::Quit,
            "?" | "help" => Command::Help,
            "board" | "show" => Command::Show,
            "auto" => Command::AutoPlace,
            "p" | "place" => {
                let origin = parse_coord(parts.next())?;
                let orientation = match parts.next() {
                    Some(o) => parse_orientation(o)?,
                    None => Orientation::Vertical,
                };
                Command::Place {
                    origin,
                    orientation,
                }
            }
            "f" | "fire" => Command::Fire(parse_coord(parts.next())?),
            _ => Command::Fire(
                head.parse()
                    .map_err(|e: CoordParseError| format!("Unknown command '{head}': {e}"))?,
            ),
        };
        if let Some(extra) = parts.next() {
            return Err(format!("Unexpected '{extra}'"));
        }
        Ok(command)
    }
}

/// Where console commands come from.
#[async_trait::async_trait]
pub trait InputSource: Send {
    /// Next input line, or `None` at end of input.
    async fn next_line(&mut self) -> anyhow::Result<Option<String>>;
}

/// Lines typed on stdin.
pub struct StdinInput {
    lines: Lines<BufReader<Stdin>>,
}

impl StdinInput {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Default for StdinInput {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl InputSource for StdinInput {
    async fn next_line(&mut self) -> anyhow::Result<Option<String>> {
        Ok(self.lines.next_line().await?)
    }
}

/// A fixed list of lines, for scripted games and tests.
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait::async_trait]
impl InputSource for ScriptedInput {
    async fn next_line(&mut self) -> anyhow::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

fn prompt(session: &GameSession) -> String {
    match (session.phase(), session.next_ship_type()) {
        (Phase::Placement, Some(next)) => {
            format!("Place {} (length {}): ", next.name(), next.length())
        }
        _ => "Fire at: ".to_string(),
    }
}

/// Print both boards; the enemy's ships stay hidden until the game ends.
pub async fn render<W: Write>(shared: &SharedSession, out: &mut W) -> anyhow::Result<()> {
    let (mine, theirs) = shared
        .with(|s| (s.view(Side::Player), s.view(Side::Opponent)))
        .await;
    writeln!(out, "Enemy board:\n{theirs}\n\nYour board:\n{mine}")?;
    Ok(())
}

async fn report_events<W: Write>(shared: &SharedSession, out: &mut W) -> anyhow::Result<()> {
    for event in shared.with(|s| s.take_events()).await {
        match event {
            GameEvent::ShipPlaced {
                ship,
                origin,
                orientation,
            } => writeln!(out, "Placed {ship} at {origin} ({orientation:?})")?,
            GameEvent::FleetDeployed { .. } => writeln!(out, "Enemy fleet deployed. Open fire!")?,
            GameEvent::ShotFired {
                by: Side::Player,
                target,
                outcome,
            } => writeln!(out, "You fired at {target}: {outcome}")?,
            GameEvent::ShotFired {
                by: Side::Opponent,
                target,
                outcome,
            } => writeln!(out, "Enemy fired at {target}: {outcome}")?,
            GameEvent::TurnPassed { .. } | GameEvent::GameOver { .. } => {}
        }
    }
    Ok(())
}

fn announce<W: Write>(out: &mut W, winner: Side) -> anyhow::Result<()> {
    match winner {
        Side::Player => writeln!(out, "YOU WIN! You destroyed every enemy ship.")?,
        Side::Opponent => writeln!(out, "YOU LOSE. All of your ships were destroyed.")?,
    }
    Ok(())
}

/// Play a game on the console until it ends or input runs out.
///
/// With `turn_timeout` set, each shot and the opponent's reply must finish in
/// that time; an interrupted opponent turn resumes before the next prompt.
/// Returns the winner, or `None` if the player quit.
pub async fn run_console<W: Write>(
    shared: &SharedSession,
    input: &mut dyn InputSource,
    out: &mut W,
    turn_timeout: Option<Duration>,
) -> anyhow::Result<Option<Side>> {
    writeln!(out, "{HELP}")?;
    render(shared, out).await?;
    loop {
        if shared.finish_opponent_turn().await? > 0 {
            report_events(shared, out).await?;
        }
        if let Some(winner) = shared.winner().await {
            render(shared, out).await?;
            announce(out, winner)?;
            return Ok(Some(winner));
        }

        let (text, placing) = shared
            .with(|s| (prompt(s), s.phase() == Phase::Placement))
            .await;
        write!(out, "{text}")?;
        out.flush()?;
        let Some(line) = input.next_line().await? else {
            return Ok(None);
        };
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<Command>() {
            // During placement a bare coordinate places the next ship.
            Ok(Command::Fire(origin)) if placing => Command::Place {
                origin,
                orientation: Orientation::Vertical,
            },
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{e}")?;
                continue;
            }
        };

        match command {
            Command::Quit => return Ok(None),
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Show => render(shared, out).await?,
            Command::Place {
                origin,
                orientation,
            } => {
                if !shared.place(origin, orientation).await? {
                    writeln!(out, "Cannot place a ship at {origin} ({orientation:?}).")?;
                }
                report_events(shared, out).await?;
            }
            Command::AutoPlace => {
                shared.auto_place().await?;
                report_events(shared, out).await?;
                render(shared, out).await?;
            }
            Command::Fire(target) => {
                let result = match turn_timeout {
                    Some(limit) => shared.fire_with_timeout(target, limit).await,
                    None => shared.fire(target).await,
                };
                match result {
                    Ok(Some(_)) => {}
                    Ok(None) => writeln!(out, "Shot at {target} ignored.")?,
                    Err(EngineError::TurnTimeout { millis }) => {
                        writeln!(out, "Turn timed out after {millis} ms.")?
                    }
                    Err(e) => return Err(anyhow::anyhow!(e)),
                }
                report_events(shared, out).await?;
                render(shared, out).await?;
            }
        }
    }
}
