use file_roundtrip::prelude::*;

/// Mock OutputPresenter capturing every presented line
#[derive(Default, Clone)]
pub struct MockOutputPresenter {
    pub lines: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
    pub should_fail: bool,
}

impl MockOutputPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn get_lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    /// Captured output as stdout would show it
    pub fn as_stdout(&self) -> String {
        self.get_lines()
            .iter()
            .map(|line| format!("{}\n", line))
            .collect()
    }
}

impl OutputPresenter for MockOutputPresenter {
    fn present(&self, content: &str) -> Result<()> {
        if self.should_fail {
            anyhow::bail!("Mock presenter failure");
        }
        self.lines.lock().unwrap().push(content.to_string());
        Ok(())
    }
}
