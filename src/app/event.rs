// Keyboard event handling
//
// This module contains the keyboard event handler that processes
// user input and updates the application state accordingly.

use super::AppState;
use crossterm::event::KeyCode;

/// Handle keyboard events and update application state
///
/// Returns `true` if the application should continue running,
/// `false` if it should exit.
///
/// # Key Bindings
/// - `q`, `Q`, `Esc` - Quit the application
/// - `Space`, `Enter`, `c`, `C` - Activate the connection animation (the tap)
/// - `+`, `=` - Increase refresh rate (shorter interval)
/// - `-`, `_` - Decrease refresh rate (longer interval)
pub fn handle_key_event(app: &mut AppState, key: KeyCode) -> bool {
    match key {
        // Quit on 'q', 'Q', or Esc
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.running = false;
            false
        }
        // The tap gesture: start (or restart) the search choreography
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('c') | KeyCode::Char('C') => {
            app.tap();
            true
        }
        // Refresh rate controls
        // + = faster refresh (shorter interval)
        // - = slower refresh (longer interval)
        KeyCode::Char('+') | KeyCode::Char('=') => {
            app.increase_refresh_rate();
            true
        }
        KeyCode::Char('-') | KeyCode::Char('_') => {
            app.decrease_refresh_rate();
            true
        }
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_keys() {
        let mut app = AppState::new();

        // Test 'q' key
        assert!(app.running);
        let result = handle_key_event(&mut app, KeyCode::Char('q'));
        assert!(!result);
        assert!(!app.running);

        // Reset and test 'Q' key
        app.running = true;
        let result = handle_key_event(&mut app, KeyCode::Char('Q'));
        assert!(!result);
        assert!(!app.running);

        // Reset and test Esc key
        app.running = true;
        let result = handle_key_event(&mut app, KeyCode::Esc);
        assert!(!result);
        assert!(!app.running);
    }

    #[test]
    fn test_activation_keys() {
        for key in [
            KeyCode::Char(' '),
            KeyCode::Enter,
            KeyCode::Char('c'),
            KeyCode::Char('C'),
        ] {
            let mut app = AppState::new();
            assert!(!app.animation.is_animating);

            let result = handle_key_event(&mut app, key);
            assert!(result);
            assert!(app.animation.is_animating);
            assert_eq!(app.animation.header_label, "Searching");
        }
    }

    #[test]
    fn test_refresh_rate_controls() {
        let mut app = AppState::new();
        let initial_rate = app.refresh_config.refresh_ms;

        // Faster refresh (shorter interval)
        handle_key_event(&mut app, KeyCode::Char('+'));
        assert!(app.refresh_config.refresh_ms < initial_rate);

        // Slower refresh (longer interval)
        handle_key_event(&mut app, KeyCode::Char('-'));
        assert_eq!(app.refresh_config.refresh_ms, initial_rate);
    }

    #[test]
    fn test_unbound_keys_keep_running() {
        let mut app = AppState::new();
        let result = handle_key_event(&mut app, KeyCode::Char('x'));
        assert!(result);
        assert!(app.running);
        assert!(!app.animation.is_animating);
    }
}
