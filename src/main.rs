use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use scry::app::{App, InputMode};
use scry::config;
use scry::core::Registry;
use scry::infrastructure::runtime::{RuntimeBridge, RuntimeCommand, RuntimeEvent};
use scry::ui;

const DEFAULT_WALLET_ENDPOINT: &str = "http://127.0.0.1:1248";

#[derive(Debug, Parser)]
#[command(
    name = "scry",
    version,
    about = "Scry: a read-only Base wallet & chain inspector TUI"
)]
struct Args {
    /// Start on Base Mainnet instead of Base Sepolia
    #[arg(long)]
    mainnet: bool,

    /// Wallet daemon JSON-RPC endpoint (e.g. a Frame-style local wallet)
    #[arg(long)]
    wallet: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = config::load();

    let mut registry = Registry::builtin();
    for entry in &config.endpoints {
        registry.override_rpc(entry.chain_id, entry.rpc.clone());
    }
    if args.mainnet {
        registry.set_active(1);
    }

    let wallet_endpoint = args
        .wallet
        .or(config.wallet)
        .unwrap_or_else(|| DEFAULT_WALLET_ENDPOINT.to_string());

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let runtime = RuntimeBridge::new(wallet_endpoint.clone())?;
    let app = App::new(registry, wallet_endpoint);

    let res = run_app(&mut terminal, app, runtime);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    runtime: RuntimeBridge,
) -> Result<()> {
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();

    loop {
        pump_background(&mut app, &runtime);
        terminal.draw(|f| ui::draw(f, &app))?;
        if app.should_quit {
            let _ = runtime.send(RuntimeCommand::Shutdown);
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                handle_key(&mut app, key);
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }

        pump_background(&mut app, &runtime);
    }
}

fn pump_background(app: &mut App, runtime: &RuntimeBridge) {
    // Apply events in arrival order; a later report replaces an earlier one
    for event in runtime.poll_events() {
        match event {
            RuntimeEvent::WalletConnected {
                address,
                chain_id_hex,
            } => app.apply_wallet_connected(address, chain_id_hex),
            RuntimeEvent::Report { lines } => app.apply_report(lines),
            RuntimeEvent::Error { message } => app.apply_error(message),
        }
    }

    // Forward pending user actions, each bound to the active target
    if app.take_connect_request() {
        let _ = runtime.send(RuntimeCommand::ConnectWallet {
            network: app.registry.active().clone(),
        });
    }
    if app.take_snapshot_request() {
        let _ = runtime.send(RuntimeCommand::Snapshot {
            network: app.registry.active().clone(),
        });
    }
    if let Some(address) = app.take_probe_request() {
        let _ = runtime.send(RuntimeCommand::Probe {
            network: app.registry.active().clone(),
            address,
        });
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if app.help_open {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.help_open = false;
        }
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::AddressPrompt => handle_prompt_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.help_open = true,
        KeyCode::Char('c') => app.request_connect(),
        KeyCode::Char('n') => app.toggle_network(),
        KeyCode::Char('s') => app.request_snapshot(),
        KeyCode::Char('p') => app.enter_prompt(),
        _ => {}
    }
}

fn handle_prompt_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.exit_prompt(),
        KeyCode::Enter => app.apply_prompt(),
        KeyCode::Backspace => {
            app.prompt.pop();
        }
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return;
            }
            app.prompt.push(ch);
        }
        _ => {}
    }
}
