// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Promptbox-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Promptbox and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Layout, title, footer, help, and style helpers used by TUI rendering.
fn stack_main_panes_vertically(area: Rect) -> bool {
    area.width < 80
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    List,
    Search,
    Title,
    Content,
}

impl Focus {
    fn cycle(self, sidebar_visible: bool) -> Self {
        match self {
            Self::Title => Self::Content,
            Self::Content if sidebar_visible => Self::List,
            Self::Content => Self::Title,
            Self::List | Self::Search => Self::Title,
        }
    }

    fn cycle_back(self, sidebar_visible: bool) -> Self {
        match self {
            Self::Title if sidebar_visible => Self::List,
            Self::Title => Self::Content,
            Self::Content => Self::Title,
            Self::List | Self::Search => Self::Content,
        }
    }

    fn is_sidebar(self) -> bool {
        matches!(self, Self::List | Self::Search)
    }
}

fn panel_border_style_for_focus(active: Focus, panel: Focus) -> Style {
    if active != panel {
        return Style::default();
    }

    Style::default().fg(FOCUS_COLOR)
}

fn view_title(label: &str, tail: Option<&str>) -> String {
    let mut title = format!("─ {label}");
    if let Some(tail) = tail {
        let tail = tail.trim();
        if !tail.is_empty() {
            title.push(' ');
            title.push_str(tail);
        }
    }
    title.push(' ');
    title
}

fn list_view_title(shown: usize, total: usize) -> String {
    let counter = if shown == total {
        format!("({total})")
    } else {
        format!("({shown}/{total})")
    };
    view_title("Prompts", Some(&counter))
}

fn prompt_list_item(row: &PromptRow, width: usize) -> ListItem<'static> {
    let title = Line::from(Span::styled(
        truncate_with_ellipsis(&single_line(&row.title), width),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    let description = Line::from(Span::styled(
        row.description_line(width),
        Style::default().fg(DESCRIPTION_COLOR),
    ));
    ListItem::new(Text::from(vec![title, description]))
}

/// Text shown in an editing region, with the placeholder standing in for blank input.
fn region_text(text: &str, is_empty: bool, placeholder: &str) -> Text<'static> {
    if is_empty && text.trim().is_empty() {
        return Text::from(Span::styled(
            placeholder.to_owned(),
            Style::default().fg(PLACEHOLDER_COLOR),
        ));
    }
    Text::from(text.to_owned())
}

fn footer_help_line(app: &App, toast_suffix: &str) -> Line<'static> {
    let mut spans = Vec::<Span<'static>>::new();

    match app.focus {
        Focus::List => {
            push_footer_entry_maybe_disabled(&mut spans, "OPEN", "Enter", app.rows.is_empty());
            push_footer_entry_maybe_disabled(&mut spans, "REMOVE", "d", app.rows.is_empty());
            push_footer_entry(&mut spans, "SEARCH", "/");
        }
        Focus::Search => {
            push_footer_entry(&mut spans, "LIST", "Enter");
            push_footer_entry(&mut spans, "CLEAR", "Esc");
        }
        Focus::Title | Focus::Content => {
            push_footer_entry(&mut spans, "EDITOR", "^E");
        }
    }

    push_footer_entry_maybe_disabled(&mut spans, "SAVE", "^S", app.editor.validate().is_err());
    push_footer_entry(&mut spans, "NEW", "^N");
    push_footer_entry_maybe_disabled(&mut spans, "COPY", "^Y", app.editor.content_is_empty());
    if app.sidebar_visible {
        push_footer_entry(&mut spans, "HIDE", "^B");
    } else {
        push_footer_entry(&mut spans, "LIST", "^O");
    }
    if app.focus == Focus::List {
        push_footer_entry(&mut spans, "HELP", "?");
    }
    push_footer_entry(&mut spans, "QUIT", "^Q");

    let toast_message = toast_suffix.strip_prefix(" | ").unwrap_or(toast_suffix).trim();
    if !toast_message.is_empty() {
        spans.push(Span::styled(" | ", Style::default().fg(FOOTER_LABEL_COLOR)));
        spans.push(Span::styled(
            toast_message.to_owned(),
            Style::default().fg(TOAST_COLOR).add_modifier(Modifier::BOLD),
        ));
    }

    Line::from(spans)
}

fn footer_brand_line() -> Line<'static> {
    Line::from(vec![Span::styled(
        FOOTER_BRAND.to_owned(),
        Style::default().fg(FOOTER_BRAND_COLOR),
    )])
}

fn help_key_style() -> Style {
    Style::default().fg(FOOTER_KEY_COLOR).add_modifier(Modifier::BOLD)
}

fn help_header_style() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
}

fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
    let vertical_margin = (100u16.saturating_sub(height_percent)) / 2;
    let horizontal_margin = (100u16.saturating_sub(width_percent)) / 2;

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(vertical_margin),
            Constraint::Percentage(height_percent),
            Constraint::Percentage(vertical_margin),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(horizontal_margin),
            Constraint::Percentage(width_percent),
            Constraint::Percentage(horizontal_margin),
        ])
        .split(vertical[1])[1]
}

fn help_kv(key: &str, desc: &str, key_width: usize, key_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key:>width$}", width = key_width), key_style),
        Span::raw("  "),
        Span::raw(desc.to_owned()),
    ])
}

const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Global",
        &[
            ("Ctrl-S", "Save prompt (create or update)"),
            ("Ctrl-N", "New prompt"),
            ("Ctrl-Y", "Copy content as plain text"),
            ("Ctrl-E", "Edit content in $VISUAL/$EDITOR"),
            ("Ctrl-O/Ctrl-B", "Open/collapse prompt list"),
            ("Tab/Shift-Tab", "Focus next/previous region"),
            ("Ctrl-Q", "Quit"),
        ],
    ),
    (
        "List",
        &[
            ("j/k, ↑/↓, Home/End", "Move cursor"),
            ("Enter", "Open prompt in editor"),
            ("d/Delete", "Remove prompt"),
            ("/", "Search titles"),
            ("?", "Help (toggle)"),
            ("q", "Quit"),
        ],
    ),
    (
        "Search",
        &[
            ("Type", "Filter titles as you type"),
            ("Enter/↓", "Back to list, keep filter"),
            ("Esc", "Clear filter"),
        ],
    ),
    (
        "Title/Content",
        &[
            ("Type", "Edit text"),
            ("←/→, Home/End", "Move cursor"),
            ("Enter", "Next line (content) or go to content (title)"),
            ("Esc", "Back to list"),
        ],
    ),
];

fn render_help(frame: &mut Frame<'_>, app: &mut App, main_area: Rect) {
    let area = centered_rect(76, 80, main_area);
    frame.render_widget(Clear, area);

    let key_style = help_key_style();
    let header_style = help_header_style();
    let key_col_width = HELP_SECTIONS
        .iter()
        .flat_map(|(_, entries)| entries.iter())
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::<Line<'static>>::new();
    for (idx, (header, entries)) in HELP_SECTIONS.iter().enumerate() {
        if idx > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(format!("--- {header} ---"), header_style)));
        for (key, desc) in entries.iter() {
            lines.push(help_kv(key, desc, key_col_width, key_style));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Prompts are saved to {}.", app.storage_label),
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .title("─ Help ─")
        .border_style(Style::default().fg(FOCUS_COLOR))
        .title_style(Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD));
    let inner = block.inner(area);
    let max_scroll = lines
        .len()
        .saturating_sub(inner.height.max(1) as usize)
        .min(u16::MAX as usize) as u16;
    app.help_scroll = app.help_scroll.min(max_scroll);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false })
        .scroll((app.help_scroll, 0));
    frame.render_widget(paragraph, area);
}

fn push_footer_entry(spans: &mut Vec<Span<'static>>, label: &str, value: &str) {
    push_footer_entry_maybe_disabled(spans, label, value, false);
}

fn push_footer_entry_maybe_disabled(
    spans: &mut Vec<Span<'static>>,
    label: &str,
    value: &str,
    disabled: bool,
) {
    if !spans.is_empty() {
        spans.push(Span::styled(" | ", Style::default().fg(FOOTER_LABEL_COLOR)));
    }
    spans.push(Span::styled(
        format!("{}:", footer_label_ucfirst(label)),
        Style::default().fg(FOOTER_LABEL_COLOR),
    ));
    spans.push(footer_value_span(value, disabled));
}

fn footer_label_ucfirst(label: &str) -> String {
    let lower = label.to_lowercase();
    let mut chars = lower.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = first.to_uppercase().collect::<String>();
    out.push_str(chars.as_str());
    out
}

fn footer_value_span(value: &str, disabled: bool) -> Span<'static> {
    let color = if disabled { Color::DarkGray } else { FOOTER_KEY_COLOR };
    Span::styled(value.to_owned(), Style::default().fg(color).add_modifier(Modifier::BOLD))
}
