//! Application state: network registry, wallet session, output surface

use std::time::{Duration, Instant};

use crate::core::Registry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    AddressPrompt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub since: Instant,
}

/// Most recently authorized wallet account, replaced wholesale on
/// reconnect. A network switch leaves it untouched; the switch message
/// tells the user to reconnect.
#[derive(Debug, Clone)]
pub struct SessionInfo {
    pub address: String,
    pub chain_id_hex: String,
}

#[derive(Debug)]
pub struct App {
    pub registry: Registry,
    pub session: Option<SessionInfo>,
    /// The rendered output, replaced wholesale per action (no history)
    pub output: Vec<String>,
    pub input_mode: InputMode,
    pub prompt: String,
    pub wallet_endpoint: String,
    pub status: Option<StatusMessage>,
    pub help_open: bool,
    pub should_quit: bool,
    pending_connect: bool,
    pending_snapshot: bool,
    pending_probe: Option<String>,
}

impl App {
    pub fn new(registry: Registry, wallet_endpoint: String) -> Self {
        let output = vec![
            "Ready".to_string(),
            format!("Active network: {}", registry.active().label),
            "Read-only mode".to_string(),
        ];
        Self {
            registry,
            session: None,
            output,
            input_mode: InputMode::Normal,
            prompt: String::new(),
            wallet_endpoint,
            status: None,
            help_open: false,
            should_quit: false,
            pending_connect: false,
            pending_snapshot: false,
            pending_probe: None,
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > Duration::from_secs(3) {
                self.status = None;
            }
        }
    }

    // --- user-triggered actions ---

    pub fn request_connect(&mut self) {
        self.pending_connect = true;
        self.set_status("Connecting wallet…", StatusLevel::Info);
    }

    pub fn request_snapshot(&mut self) {
        self.pending_snapshot = true;
        self.set_status("Fetching snapshot…", StatusLevel::Info);
    }

    /// Pure local mutation: flip the active target and render the switch
    /// message. The open wallet session keeps pointing at the previous
    /// chain on purpose.
    pub fn toggle_network(&mut self) {
        let label = self.registry.toggle().label.clone();
        self.output = vec![format!(
            "Switched to {label}. Reconnect wallet to refresh session."
        )];
    }

    pub fn enter_prompt(&mut self) {
        self.input_mode = InputMode::AddressPrompt;
        self.prompt.clear();
    }

    pub fn exit_prompt(&mut self) {
        self.input_mode = InputMode::Normal;
        self.prompt.clear();
    }

    /// Submit whatever is in the prompt as a probe target. Validation
    /// happens inside the operation; an empty or malformed input comes
    /// back as a rendered "Invalid address" line.
    pub fn apply_prompt(&mut self) {
        let input = self.prompt.trim().to_string();
        self.pending_probe = Some(input);
        self.set_status("Probing address…", StatusLevel::Info);
        self.exit_prompt();
    }

    // --- pending requests drained by the main loop ---

    pub fn take_connect_request(&mut self) -> bool {
        std::mem::take(&mut self.pending_connect)
    }

    pub fn take_snapshot_request(&mut self) -> bool {
        std::mem::take(&mut self.pending_snapshot)
    }

    pub fn take_probe_request(&mut self) -> Option<String> {
        self.pending_probe.take()
    }

    // --- runtime events ---

    /// Replace the output wholesale. Overlapping actions race; whichever
    /// event arrives last determines the final rendered state.
    pub fn apply_report(&mut self, lines: Vec<String>) {
        self.output = lines;
    }

    /// Failures render as a single-line message replacing any prior output
    pub fn apply_error(&mut self, message: String) {
        self.output = vec![message];
        self.set_status("Last action failed", StatusLevel::Error);
    }

    pub fn apply_wallet_connected(&mut self, address: String, chain_id_hex: String) {
        self.session = Some(SessionInfo {
            address,
            chain_id_hex,
        });
        self.set_status("Wallet connected", StatusLevel::Info);
    }
}
