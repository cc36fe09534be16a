use anyhow::Context;
use std::collections::HashMap;
use std::io::{self, Write};
#[cfg(unix)]
use std::os::fd::AsRawFd;
use std::path::PathBuf;
use torment_core::{
    Appearance, Button, Card, CardBack, DisplayBridge, HostAction, Phase, PickOutcome, RunState,
    Session, TextField,
};
use torment_data::{builtin_assets, load_assets, Assets};

const DEFAULT_RUN_SEED: u64 = 0xC0FFEE;
const AUTO_STEP_LIMIT: usize = 200;
const BUTTONS: [Button; 4] = [
    Button::NormalRun,
    Button::HardRun,
    Button::Advance,
    Button::NewRun,
];

#[derive(Debug, Clone, Default)]
struct CliOptions {
    auto: bool,
    hard: bool,
    events: bool,
    seed: Option<u64>,
    assets: Option<PathBuf>,
}

fn parse_cli_options(args: &[String]) -> CliOptions {
    let mut options = CliOptions::default();
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--auto" => options.auto = true,
            "--hard" => options.hard = true,
            "--events" => options.events = true,
            "--seed" => {
                if let Some(value) = args.get(idx + 1) {
                    options.seed = value.parse::<u64>().ok();
                    idx += 1;
                }
            }
            "--assets" => {
                if let Some(value) = args.get(idx + 1) {
                    options.assets = Some(PathBuf::from(value));
                    idx += 1;
                }
            }
            other => log::warn!("ignoring unknown argument {other:?}"),
        }
        idx += 1;
    }
    options
}

/// Keeps the last value the engine pushed into every display element and
/// prints them as a board on demand.
#[derive(Debug, Default)]
struct TerminalBridge {
    slots: HashMap<usize, String>,
    texts: HashMap<TextField, String>,
    buttons: HashMap<Button, (bool, Option<HostAction>)>,
    slot_count: usize,
}

impl TerminalBridge {
    fn new(slot_count: usize) -> Self {
        Self {
            slot_count,
            ..Self::default()
        }
    }

    fn text(&self, field: TextField) -> &str {
        self.texts.get(&field).map(String::as_str).unwrap_or_default()
    }

    fn action(&self, button: Button) -> Option<HostAction> {
        match self.buttons.get(&button) {
            Some((true, action)) => *action,
            _ => None,
        }
    }

    fn print_board(&self) {
        println!();
        for field in [TextField::Round, TextField::Map] {
            let text = self.text(field);
            if !text.is_empty() {
                println!("{text}");
            }
        }
        println!("{}", self.text(TextField::Pick));
        for index in 0..self.slot_count {
            if let Some(face) = self.slots.get(&index) {
                println!("  [{}] {}", index + 1, face.replace('\n', " / "));
            }
        }
        let buttons: Vec<&str> = BUTTONS
            .iter()
            .filter_map(|&button| self.action(button))
            .map(HostAction::label)
            .collect();
        if !buttons.is_empty() {
            println!("buttons: {}", buttons.join(", "));
        }
    }

    fn print_history(&self) {
        for field in [TextField::Modifiers, TextField::Challenges] {
            let text = self.text(field);
            if !text.is_empty() {
                println!("{text}");
            }
        }
    }
}

impl DisplayBridge for TerminalBridge {
    fn reveal_slot(&mut self, index: usize, card: &Card, appearance: Appearance) {
        let face = match appearance {
            Appearance::Face => card.offer_text().to_string(),
            Appearance::Back(CardBack::Silver) => "(face down, silver)".to_string(),
            Appearance::Back(CardBack::Challenge) => "(face down, challenge)".to_string(),
            Appearance::Back(CardBack::Golden) => "(face down, golden)".to_string(),
        };
        self.slots.insert(index, face);
    }

    fn conceal_slot(&mut self, index: usize) {
        self.slots.remove(&index);
    }

    fn set_text(&mut self, field: TextField, content: &str) {
        self.texts.insert(field, content.to_string());
    }

    fn set_color(&mut self, field: TextField, color: &str) {
        log::trace!("{field:?} color {color}");
    }

    fn set_button(&mut self, button: Button, enabled: bool, action: Option<HostAction>) {
        self.buttons.insert(button, (enabled, action));
    }
}

fn main() -> anyhow::Result<()> {
    let _ = env_logger::try_init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_cli_options(&args);
    let assets = match &options.assets {
        Some(dir) => {
            load_assets(dir).with_context(|| format!("load assets from {}", dir.display()))?
        }
        None => builtin_assets(),
    };
    let seed = options.seed.unwrap_or(DEFAULT_RUN_SEED);
    log::info!("seed {seed}");
    let mut session = build_session(assets, seed);
    if options.auto {
        return run_auto(&mut session, &options);
    }
    if options.hard {
        session.on_start_hard_run()?;
    }
    run_interactive(&mut session, &options)
}

fn build_session(assets: Assets, seed: u64) -> Session<TerminalBridge> {
    let slot_count = assets.config.total_slots;
    let run = RunState::new(assets.config, assets.catalog, assets.maps, seed);
    Session::new(run, TerminalBridge::new(slot_count))
}

/// Plays one run by always taking the first card on offer.
fn run_auto(session: &mut Session<TerminalBridge>, options: &CliOptions) -> anyhow::Result<()> {
    if options.hard {
        session.on_start_hard_run()?;
        session.on_continue_clicked()?;
    } else {
        session.on_start_normal_run()?;
    }
    for _ in 0..AUTO_STEP_LIMIT {
        flush_events(session, options.events)?;
        match session.phase() {
            Phase::RunEnded => break,
            Phase::RoundComplete => {
                session.bridge.print_board();
                session.on_next_round_clicked()?;
            }
            Phase::Picking => {
                let Some(slot) = (0..session.run.state.slots.len())
                    .find(|&slot| !session.run.state.is_slot_concealed(slot))
                else {
                    anyhow::bail!("no card left to pick in round {}", session.run.state.round);
                };
                session.bridge.print_board();
                if session.on_slot_clicked(slot)? == PickOutcome::AwaitingConfirm {
                    session.on_slot_clicked(slot)?;
                }
            }
            phase => anyhow::bail!("auto play stuck in {phase:?}"),
        }
    }
    flush_events(session, options.events)?;
    session.bridge.print_board();
    session.bridge.print_history();
    Ok(())
}

fn run_interactive(session: &mut Session<TerminalBridge>, options: &CliOptions) -> anyhow::Result<()> {
    print_help();
    session.bridge.print_board();
    while let Some(line) = read_line("> ") {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or_default();
        let result = match command {
            "q" | "quit" | "exit" => break,
            "h" | "help" | "?" => {
                print_help();
                continue;
            }
            "history" | "ls" => {
                session.bridge.print_history();
                continue;
            }
            "board" | "b" => Ok(()),
            "normal" => session.on_start_normal_run(),
            "hard" => session.on_start_hard_run(),
            "new" => {
                session.on_new_run_clicked();
                Ok(())
            }
            "n" | "next" | "continue" => match session.bridge.action(Button::Advance) {
                Some(action) => session.dispatch(action),
                None => {
                    println!("nothing to advance to");
                    continue;
                }
            },
            "p" | "pick" => match parts.next().and_then(|value| value.parse::<usize>().ok()) {
                Some(slot) => pick_slot(session, slot),
                None => {
                    println!("usage: pick <slot>");
                    continue;
                }
            },
            other => match other.parse::<usize>() {
                Ok(slot) => pick_slot(session, slot),
                Err(_) => {
                    println!("unknown command {other:?}, try help");
                    continue;
                }
            },
        };
        if let Err(err) = result {
            println!("error: {err}");
        }
        flush_events(session, options.events)?;
        session.bridge.print_board();
    }
    Ok(())
}

/// Slots are numbered from 1 on screen.
fn pick_slot(
    session: &mut Session<TerminalBridge>,
    slot: usize,
) -> Result<(), torment_core::RunError> {
    let index = slot.checked_sub(1).unwrap_or(usize::MAX);
    match session.on_slot_clicked(index)? {
        PickOutcome::AwaitingConfirm => println!("mystery card: pick slot {slot} again to confirm"),
        PickOutcome::Picked { remaining } => log::debug!("{remaining} picks left"),
        PickOutcome::RoundComplete => println!("round complete"),
        PickOutcome::RunEnded => {
            println!("run complete");
            session.bridge.print_history();
        }
    }
    Ok(())
}

fn flush_events(session: &mut Session<TerminalBridge>, print: bool) -> anyhow::Result<()> {
    for event in session.events.drain() {
        if print {
            println!("event: {}", serde_json::to_string(&event)?);
        } else {
            log::debug!("event: {event:?}");
        }
    }
    Ok(())
}

fn print_help() {
    println!("commands:");
    println!("  normal | hard     start a run");
    println!("  <slot> | pick <slot>");
    println!("  next              press the advance button");
    println!("  new               back to the run choice screen");
    println!("  history           picked modifiers and challenges");
    println!("  board | help | quit");
}

fn stdin_is_tty() -> bool {
    #[cfg(unix)]
    {
        let fd = io::stdin().as_raw_fd();
        unsafe { libc::isatty(fd) == 1 }
    }
    #[cfg(not(unix))]
    {
        true
    }
}

fn read_line(prompt: &str) -> Option<String> {
    if stdin_is_tty() {
        print!("{prompt}");
        let _ = io::stdout().flush();
    }
    let mut line = String::new();
    if io::stdin().read_line(&mut line).ok()? == 0 {
        return None;
    }
    Some(line.trim_end_matches(&['\n', '\r'][..]).to_string())
}
