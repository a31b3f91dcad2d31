use crate::deck::CharacterRecord;
use crate::ui::app::{App, FormField};
use crate::ui::layout::{card_rects, ControlsLayout, FormLayout, PaginationLayout, ScreenLayout};
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = ScreenLayout::new(area, &app.features);
    let theme = &app.theme;

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg).fg(theme.fg)),
        area,
    );

    render_header(frame, app, layout.header);
    if let Some(form) = &layout.form {
        render_form(frame, app, form);
    }
    render_cards(frame, app, layout.cards);
    render_pagination(frame, app, &layout.pagination);
    if let Some(controls) = &layout.controls {
        render_controls(frame, app, controls);
    }
    render_footer(frame, app, layout.footer);

    if app.show_help {
        render_help(frame, theme);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let line = Line::from(vec![
        Span::styled(
            app.dataset.title(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {} cards", app.len()),
            Style::default().fg(theme.fg_dim),
        ),
    ]);

    let header = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent)),
    );

    frame.render_widget(header, area);
}

fn render_form(frame: &mut Frame, app: &App, form: &FormLayout) {
    let theme = &app.theme;
    let focus = app.form.focus;

    render_input(
        frame,
        theme,
        form.glyph,
        "输入汉字",
        &app.form.glyph,
        focus == Some(FormField::Glyph),
    );
    render_input(
        frame,
        theme,
        form.gloss,
        "含义（可选）",
        &app.form.gloss,
        focus == Some(FormField::Gloss),
    );

    let add = Paragraph::new("添加")
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent)),
        );
    frame.render_widget(add, form.add);
}

fn render_input(
    frame: &mut Frame,
    theme: &Theme,
    area: Rect,
    title: &str,
    value: &str,
    focused: bool,
) {
    let (border, style) = if focused {
        (theme.accent, Style::default().fg(theme.fg).bg(theme.input_bg))
    } else {
        (theme.card_border, Style::default().fg(theme.fg))
    };

    let mut spans = vec![Span::raw(value.to_string())];
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(theme.accent)));
    }

    let input = Paragraph::new(Line::from(spans)).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(title.to_string(), Style::default().fg(theme.fg_dim)))
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(input, area);
}

fn render_cards(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let records = app.visible_records();

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.card_border));
    let inner = block.inner(area);
    let rects = card_rects(inner, records.len());

    let hidden = records.len() - rects.len();
    if hidden > 0 {
        block = block.title_bottom(
            Line::from(Span::styled(
                format!(" +{} more, enlarge the terminal ", hidden),
                Style::default().fg(theme.fg_dim),
            ))
            .alignment(Alignment::Right),
        );
    }
    frame.render_widget(block, area);

    if records.is_empty() {
        let empty = Paragraph::new("No characters")
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.fg_dim));
        frame.render_widget(empty, inner);
        return;
    }

    for (record, rect) in records.iter().zip(rects) {
        render_card(frame, theme, record, rect);
    }
}

fn render_card(frame: &mut Frame, theme: &Theme, record: &CharacterRecord, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(
        record.glyph.clone(),
        Style::default()
            .fg(theme.glyph)
            .add_modifier(Modifier::BOLD),
    ))];
    if let Some(gloss) = &record.gloss {
        lines.push(Line::from(Span::styled(
            gloss.clone(),
            Style::default().fg(theme.fg_dim),
        )));
    }

    let card = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.card_border)),
    );
    frame.render_widget(card, area);
}

fn button_style(theme: &Theme, enabled: bool) -> Style {
    if enabled {
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.fg_dim)
    }
}

fn render_button(frame: &mut Frame, theme: &Theme, area: Rect, label: &str, enabled: bool) {
    let style = button_style(theme, enabled);
    let button = Paragraph::new(label.to_string())
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    frame.render_widget(button, area);
}

fn render_pagination(frame: &mut Frame, app: &App, pagination: &PaginationLayout) {
    let theme = &app.theme;

    render_button(frame, theme, pagination.previous, "上一页", !app.is_first_page());
    render_button(frame, theme, pagination.next, "下一页", !app.is_last_page());

    let label = Paragraph::new(app.page_label())
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.fg))
        .block(Block::default().borders(Borders::TOP | Borders::BOTTOM).border_style(
            Style::default().fg(theme.card_border),
        ));
    frame.render_widget(label, pagination.label);
}

fn render_controls(frame: &mut Frame, app: &App, controls: &ControlsLayout) {
    let theme = &app.theme;

    if let Some(area) = controls.show_all {
        let mark = if app.show_all() { "[x]" } else { "[ ]" };
        render_button(frame, theme, area, &format!("{} 显示全部", mark), true);
    }

    if let Some(area) = controls.page_size {
        let label = if app.page_size_mode.is_auto() {
            format!("每页: auto ({})", app.page_size())
        } else {
            format!("每页: {}", app.page_size())
        };
        render_button(frame, theme, area, &label, true);
    }
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let hint = if app.form.is_editing() {
        "[Tab] Switch field  [Enter] Add  [Esc] Done".to_string()
    } else {
        let mut parts = vec!["[←→] Page", "drag cards to swipe"];
        if app.features.add_form {
            parts.push("[a] Add");
        }
        if app.features.show_all_toggle {
            parts.push("[s] Show all");
        }
        if app.features.page_size_picker {
            parts.push("[p] Page size");
        }
        parts.push("[?] Help");
        parts.push("[q] Quit");
        parts.join("  ")
    };

    let footer = Paragraph::new(Line::from(vec![
        Span::styled(hint, Style::default().fg(theme.fg_dim)),
        Span::styled(format!("  · {}", theme.name), Style::default().fg(theme.card_border)),
    ]));
    frame.render_widget(footer, area);
}

fn render_help(frame: &mut Frame, theme: &Theme) {
    let area = centered_rect(56, 15, frame.area());
    let key = |k: &'static str| Span::styled(format!("{:<16}", k), Style::default().fg(theme.accent));

    let lines = vec![
        Line::from(vec![key("← h PgUp"), Span::raw("previous page")]),
        Line::from(vec![key("→ l PgDn Space"), Span::raw("next page")]),
        Line::from(vec![key("Home g / End G"), Span::raw("first / last page")]),
        Line::from(vec![key("drag"), Span::raw("swipe across the cards")]),
        Line::from(vec![key("a"), Span::raw("add a character")]),
        Line::from(vec![key("s"), Span::raw("toggle show all")]),
        Line::from(vec![key("p / P"), Span::raw("next / previous page size")]),
        Line::from(vec![key("t"), Span::raw("next theme")]),
        Line::from(vec![key("q Esc"), Span::raw("quit")]),
        Line::from(""),
        Line::from(Span::styled(
            "Controls missing from the screen are disabled.",
            Style::default().fg(theme.fg_dim),
        )),
    ];

    let help = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(theme.bg).fg(theme.fg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .border_style(Style::default().fg(theme.accent)),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(help, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
