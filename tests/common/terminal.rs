//! TUI testing utilities using Ratatui's TestBackend

use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use recipe_book::App;

/// Create a test terminal with custom dimensions
pub fn create_test_terminal_sized(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// Draw one frame of `app` and return the buffer
pub fn render_app(app: &mut App, width: u16, height: u16) -> Buffer {
    let mut terminal = create_test_terminal_sized(width, height);
    terminal
        .draw(|f| app.render(f))
        .expect("Failed to draw frame");
    terminal.backend().buffer().clone()
}

/// Convert a buffer to a string, one line per row
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut output = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                output.push_str(cell.symbol());
            }
        }
        output.push('\n');
    }

    output
}

/// Check if the buffer contains a string anywhere on a single row
pub fn buffer_contains(buffer: &Buffer, text: &str) -> bool {
    buffer_to_string(buffer).contains(text)
}

/// Index of the first row containing `text`
pub fn row_of(buffer: &Buffer, text: &str) -> Option<usize> {
    buffer_to_string(buffer)
        .lines()
        .position(|line| line.contains(text))
}
