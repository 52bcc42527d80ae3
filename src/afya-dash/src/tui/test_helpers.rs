use ratatui::Terminal;
use ratatui::backend::TestBackend;

/// Create a test terminal with standard dimensions (120x40)
pub fn create_test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(120, 40)).unwrap()
}

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}

/// Assert that the terminal buffer contains the given text
pub fn assert_buffer_contains(terminal: &Terminal<TestBackend>, text: &str) {
    let content = buffer_text(terminal);
    assert!(
        content.contains(text),
        "Buffer does not contain '{text}'.\nBuffer content: {content}"
    );
}

/// Assert that the terminal buffer does not contain the given text
pub fn assert_buffer_lacks(terminal: &Terminal<TestBackend>, text: &str) {
    let content = buffer_text(terminal);
    assert!(
        !content.contains(text),
        "Buffer unexpectedly contains '{text}'.\nBuffer content: {content}"
    );
}
