use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub mod layout;

use crate::app::{App, InputMode, StatusLevel};

pub fn draw(f: &mut Frame, app: &App) {
    let areas = layout::areas(f.size());

    draw_header(f, areas.header, app);
    draw_output(f, areas.output, app);
    draw_status_line(f, areas.status_line, app);
    draw_prompt_line(f, areas.prompt_line, app);

    if app.help_open {
        draw_help_popup(f, areas.size, app);
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let network = app.registry.active();
    let wallet = app
        .session
        .as_ref()
        .map(|session| short_addr(&session.address))
        .unwrap_or_else(|| "not connected".to_string());

    let title = Line::from(vec![
        Span::styled(
            "Scry",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("Network", Style::default().fg(Color::DarkGray)),
        Span::raw(format!(" {} ", network.label)),
        Span::styled("RPC", Style::default().fg(Color::DarkGray)),
        Span::raw(format!(" {} ", network.rpc)),
        Span::styled("Wallet", Style::default().fg(Color::DarkGray)),
        Span::raw(format!(" {}", wallet)),
    ]);

    let header = Paragraph::new(title)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);

    f.render_widget(header, area);
}

fn draw_output(f: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = app
        .output
        .iter()
        .map(|line| Line::from(line.as_str()))
        .collect();

    let output = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).title("Output"))
        .wrap(Wrap { trim: false });

    f.render_widget(output, area);
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let line = match app.status_text() {
        Some((text, level)) => {
            let color = match level {
                StatusLevel::Info => Color::Cyan,
                StatusLevel::Warn => Color::Yellow,
                StatusLevel::Error => Color::Red,
            };
            Line::from(Span::styled(text.to_string(), Style::default().fg(color)))
        }
        None => Line::from(Span::styled(
            "c connect  n network  s snapshot  p probe  ? help  q quit",
            Style::default().fg(Color::DarkGray),
        )),
    };

    f.render_widget(Paragraph::new(line), area);
}

fn draw_prompt_line(f: &mut Frame, area: Rect, app: &App) {
    let line = match app.input_mode {
        InputMode::AddressPrompt => Line::from(vec![
            Span::styled("address> ", Style::default().fg(Color::LightCyan)),
            Span::raw(app.prompt.clone()),
            Span::styled("▏", Style::default().fg(Color::DarkGray)),
        ]),
        InputMode::Normal => Line::from(""),
    };

    f.render_widget(Paragraph::new(line), area);
}

fn draw_help_popup(f: &mut Frame, size: Rect, app: &App) {
    let area = centered_rect(52, 14, size);
    f.render_widget(Clear, area);

    let mut lines = vec![
        Line::from("c  connect wallet (read-only summary)"),
        Line::from("n  toggle network (reconnect wallet after)"),
        Line::from("s  chain snapshot (head, gas, latest block)"),
        Line::from("p  probe an address (balance + nonce)"),
        Line::from("q  quit    ?/Esc  close this help"),
        Line::from(""),
        Line::from("Targets:"),
    ];
    for network in app.registry.networks() {
        lines.push(Line::from(format!(
            "  {} ({}) - {}",
            network.label, network.chain_id, network.rpc
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(format!("Wallet daemon: {}", app.wallet_endpoint)));

    let help = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).title("Help"))
        .wrap(Wrap { trim: true });

    f.render_widget(help, area);
}

fn centered_rect(width: u16, height: u16, size: Rect) -> Rect {
    let width = width.min(size.width);
    let height = height.min(size.height);
    Rect {
        x: size.x + (size.width.saturating_sub(width)) / 2,
        y: size.y + (size.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

fn short_addr(value: &str) -> String {
    let value = value.trim();
    if value.len() <= 10 {
        return value.to_string();
    }
    let start: String = value.chars().take(6).collect();
    let end: String = value
        .chars()
        .rev()
        .take(4)
        .collect::<String>()
        .chars()
        .rev()
        .collect();
    format!("{}..{}", start, end)
}
