//! Keyboard input handling for the TUI.
//!
//! This module handles all keyboard events and translates them into
//! application state changes.

use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, AppState, LoginFocus, SignupFocus, MAX_MESSAGE_LENGTH, PAGE_SCROLL_SIZE};
use crate::routes::Route;

/// Handle keyboard input. Returns true if the app should quit.
pub fn handle_input(app: &mut App, key: KeyEvent) -> bool {
    // Overlays first
    if matches!(app.state, AppState::ShowingHelp) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.state = AppState::Normal;
        }
        return false;
    }

    if matches!(app.state, AppState::ConfirmingQuit) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.state = AppState::Quitting;
                return true;
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.state = AppState::Normal;
            }
            _ => {}
        }
        return false;
    }

    if matches!(app.state, AppState::Searching) {
        handle_search_input(app, key);
        return false;
    }

    if matches!(app.state, AppState::Composing) {
        handle_compose_input(app, key);
        return false;
    }

    // Form screens own the keyboard
    match app.navigator.current() {
        Route::Login => {
            handle_login_input(app, key);
            return false;
        }
        Route::Signup => {
            handle_signup_input(app, key);
            return false;
        }
        _ => {}
    }

    // Global keys
    match key.code {
        KeyCode::Char('q') => {
            app.state = AppState::ConfirmingQuit;
            return false;
        }
        KeyCode::Char('?') => {
            app.state = AppState::ShowingHelp;
            return false;
        }
        _ => {}
    }

    if app.navigator.current().is_protected() {
        match key.code {
            KeyCode::Char('1') => {
                app.goto(Route::Dashboard);
                return false;
            }
            KeyCode::Char('2') => {
                app.goto(Route::Opportunities);
                return false;
            }
            KeyCode::Char('3') => {
                app.goto(Route::Messages);
                return false;
            }
            KeyCode::Char('4') => {
                if app
                    .session_state
                    .user()
                    .is_some_and(|u| u.role.is_org_side())
                {
                    app.goto(Route::OrgDashboard);
                }
                return false;
            }
            KeyCode::Char('u') => {
                app.refresh_current();
                return false;
            }
            KeyCode::Char('o') => {
                app.logout();
                return false;
            }
            _ => {}
        }
    }

    // Route-specific keys
    match app.navigator.current().clone() {
        Route::Landing => match key.code {
            KeyCode::Char('l') => app.navigator.push(Route::Login),
            KeyCode::Char('s') => app.navigator.push(Route::Signup),
            _ => {}
        },
        Route::Dashboard => match key.code {
            KeyCode::Up => app.match_selection = app.match_selection.saturating_sub(1),
            KeyCode::Down => {
                app.match_selection = (app.match_selection + 1)
                    .min(app.matches.len().saturating_sub(1));
            }
            KeyCode::PageUp => {
                app.match_selection = app.match_selection.saturating_sub(PAGE_SCROLL_SIZE);
            }
            KeyCode::PageDown => {
                app.match_selection = (app.match_selection + PAGE_SCROLL_SIZE)
                    .min(app.matches.len().saturating_sub(1));
            }
            KeyCode::Enter => {
                if let Some(entry) = app.matches.get(app.match_selection) {
                    app.open_opportunity(entry.opportunity_id.clone());
                }
            }
            _ => {}
        },
        Route::Opportunities => match key.code {
            KeyCode::Char('/') => app.state = AppState::Searching,
            KeyCode::Up => {
                app.opportunity_selection = app.opportunity_selection.saturating_sub(1);
            }
            KeyCode::Down => {
                app.opportunity_selection = (app.opportunity_selection + 1)
                    .min(app.filtered_opportunities().len().saturating_sub(1));
            }
            KeyCode::PageUp => {
                app.opportunity_selection =
                    app.opportunity_selection.saturating_sub(PAGE_SCROLL_SIZE);
            }
            KeyCode::PageDown => {
                app.opportunity_selection = (app.opportunity_selection + PAGE_SCROLL_SIZE)
                    .min(app.filtered_opportunities().len().saturating_sub(1));
            }
            KeyCode::Enter => {
                let id = app
                    .filtered_opportunities()
                    .get(app.opportunity_selection)
                    .map(|o| o.id.clone());
                if let Some(id) = id {
                    app.open_opportunity(id);
                }
            }
            KeyCode::Esc => {
                app.navigator.back();
            }
            _ => {}
        },
        Route::OpportunityDetail(_) => match key.code {
            KeyCode::Char('a') => app.apply_to_selected(),
            KeyCode::Esc => {
                app.navigator.back();
            }
            _ => {}
        },
        Route::Messages => match key.code {
            KeyCode::Up => {
                if app.conversation_selection > 0 {
                    app.conversation_selection -= 1;
                    app.fetch_messages_for_selected();
                }
            }
            KeyCode::Down => {
                let max = app.conversations.len().saturating_sub(1);
                if app.conversation_selection < max {
                    app.conversation_selection += 1;
                    app.fetch_messages_for_selected();
                }
            }
            KeyCode::Char('c') | KeyCode::Enter => {
                if app.selected_conversation().is_some() {
                    app.state = AppState::Composing;
                }
            }
            KeyCode::Esc => {
                app.navigator.back();
            }
            _ => {}
        },
        Route::OrgDashboard => match key.code {
            KeyCode::Up => app.org_selection = app.org_selection.saturating_sub(1),
            KeyCode::Down => {
                app.org_selection =
                    (app.org_selection + 1).min(app.org_rows.len().saturating_sub(1));
            }
            KeyCode::Esc => {
                app.navigator.back();
            }
            _ => {}
        },
        Route::Login | Route::Signup => {}
    }

    false
}

fn handle_search_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.opportunity_query.clear();
            app.opportunity_selection = 0;
            app.state = AppState::Normal;
        }
        KeyCode::Enter => app.state = AppState::Normal,
        KeyCode::Backspace => {
            app.opportunity_query.pop();
            app.opportunity_selection = 0;
        }
        KeyCode::Char(c) => {
            app.opportunity_query.push(c);
            app.opportunity_selection = 0;
        }
        _ => {}
    }
}

fn handle_compose_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.compose_input.clear();
            app.state = AppState::Normal;
        }
        KeyCode::Enter => {
            app.send_current_message();
            app.state = AppState::Normal;
        }
        KeyCode::Backspace => {
            app.compose_input.pop();
        }
        KeyCode::Char(c) => {
            if app.compose_input.len() < MAX_MESSAGE_LENGTH && !c.is_control() {
                app.compose_input.push(c);
            }
        }
        _ => {}
    }
}

fn handle_login_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            if !app.navigator.back() {
                app.navigator.replace(Route::Landing);
            }
        }
        KeyCode::Tab | KeyCode::Down => {
            app.login_form.focus = match app.login_form.focus {
                LoginFocus::Email => LoginFocus::Password,
                LoginFocus::Password => LoginFocus::Button,
                LoginFocus::Button => LoginFocus::Email,
            };
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.login_form.focus = match app.login_form.focus {
                LoginFocus::Email => LoginFocus::Button,
                LoginFocus::Password => LoginFocus::Email,
                LoginFocus::Button => LoginFocus::Password,
            };
        }
        KeyCode::Enter => app.attempt_login(),
        KeyCode::Backspace => {
            match app.login_form.focus {
                LoginFocus::Email => {
                    app.login_form.email.pop();
                }
                LoginFocus::Password => {
                    app.login_form.password.pop();
                }
                LoginFocus::Button => {}
            };
        }
        KeyCode::Char(c) => match app.login_form.focus {
            LoginFocus::Email => app.login_form.push_email(c),
            LoginFocus::Password => app.login_form.push_password(c),
            LoginFocus::Button => {}
        },
        _ => {}
    }
}

fn handle_signup_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            if !app.navigator.back() {
                app.navigator.replace(Route::Landing);
            }
        }
        KeyCode::Tab | KeyCode::Down => {
            app.signup_form.focus = match app.signup_form.focus {
                SignupFocus::Email => SignupFocus::Password,
                SignupFocus::Password => SignupFocus::Role,
                SignupFocus::Role => SignupFocus::Button,
                SignupFocus::Button => SignupFocus::Email,
            };
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.signup_form.focus = match app.signup_form.focus {
                SignupFocus::Email => SignupFocus::Button,
                SignupFocus::Password => SignupFocus::Email,
                SignupFocus::Role => SignupFocus::Password,
                SignupFocus::Button => SignupFocus::Role,
            };
        }
        KeyCode::Left | KeyCode::Right => {
            if app.signup_form.focus == SignupFocus::Role {
                app.signup_form.role = app.signup_form.role.next();
            }
        }
        KeyCode::Enter => app.attempt_signup(),
        KeyCode::Backspace => {
            match app.signup_form.focus {
                SignupFocus::Email => {
                    app.signup_form.email.pop();
                }
                SignupFocus::Password => {
                    app.signup_form.password.pop();
                }
                SignupFocus::Role | SignupFocus::Button => {}
            };
        }
        KeyCode::Char(' ') if app.signup_form.focus == SignupFocus::Role => {
            app.signup_form.role = app.signup_form.role.next();
        }
        KeyCode::Char(c) => match app.signup_form.focus {
            SignupFocus::Email => app.signup_form.push_email(c),
            SignupFocus::Password => app.signup_form.push_password(c),
            SignupFocus::Role | SignupFocus::Button => {}
        },
        _ => {}
    }
}
