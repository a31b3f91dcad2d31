//! Event dispatch: turns crossterm key, mouse and resize events into [`App`]
//! operations.
//!
//! Disabled features swallow their bindings silently, the same way
//! out-of-range page requests are ignored.

use crate::ui::app::{App, FormField};
use crate::ui::layout::{ScreenLayout, Target};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

pub fn handle_event(app: &mut App, layout: &ScreenLayout, event: &Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, *key),
        Event::Mouse(mouse) => handle_mouse(app, layout, *mouse),
        Event::Resize(columns, _) => app.handle_terminal_resize(*columns),
        _ => {}
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Esc
        ) {
            app.toggle_help();
        }
        return;
    }

    if app.form.is_editing() {
        handle_form_key(app, key);
        return;
    }

    let features = app.features;
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => {
            app.previous_page();
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::PageDown | KeyCode::Char(' ') => {
            app.next_page();
        }
        KeyCode::Home | KeyCode::Char('g') => {
            app.first_page();
        }
        KeyCode::End | KeyCode::Char('G') => {
            app.last_page();
        }
        KeyCode::Char('s') if features.show_all_toggle => app.toggle_show_all(),
        KeyCode::Char('p') if features.page_size_picker => app.cycle_page_size(true),
        KeyCode::Char('P') if features.page_size_picker => app.cycle_page_size(false),
        KeyCode::Char('a') if features.add_form => app.form.focus(FormField::Glyph),
        KeyCode::Char('t') => app.cycle_theme(),
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.form.blur(),
        KeyCode::Tab | KeyCode::BackTab => app.form.switch_field(),
        KeyCode::Enter => {
            // Ready for the next entry after a successful add.
            if app.submit_entry() {
                app.form.focus(FormField::Glyph);
            }
        }
        KeyCode::Backspace => app.form.pop_char(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.form.push_char(c);
        }
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, layout: &ScreenLayout, mouse: MouseEvent) {
    // The help overlay covers everything underneath it.
    if app.show_help {
        return;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let target = layout.target_at(mouse.column, mouse.row);
            if !matches!(target, Some(Target::GlyphInput | Target::GlossInput)) {
                app.form.blur();
            }
            if let Some(target) = target {
                click(app, target, mouse.column);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            let x = app.column_to_px(mouse.column);
            app.touch_move(x);
        }
        MouseEventKind::Up(MouseButton::Left) => app.touch_end(),
        _ => {}
    }
}

fn click(app: &mut App, target: Target, column: u16) {
    let features = app.features;
    match target {
        Target::Cards => {
            let x = app.column_to_px(column);
            app.touch_start(x);
        }
        Target::PreviousButton => {
            app.previous_page();
        }
        Target::NextButton => {
            app.next_page();
        }
        Target::AddButton if features.add_form => {
            app.submit_entry();
        }
        Target::GlyphInput if features.add_form => app.form.focus(FormField::Glyph),
        Target::GlossInput if features.add_form => app.form.focus(FormField::Gloss),
        Target::ShowAllToggle if features.show_all_toggle => app.toggle_show_all(),
        Target::PageSizePicker if features.page_size_picker => app.cycle_page_size(true),
        _ => {}
    }
}
