use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;

/// Presentation settings passed down to every command.
#[derive(Debug, Clone)]
pub struct Theme {
    pub table_preset: &'static str,
    pub success_label: &'static str,
    pub error_label: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            table_preset: UTF8_FULL,
            success_label: "Success",
            error_label: "Error",
        }
    }
}

impl Theme {
    pub fn table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(self.table_preset);
        table
    }

    pub fn success(&self, msg: &str) -> String {
        format!("{}: {}", self.success_label, msg)
    }

    pub fn error(&self, msg: &str) -> String {
        format!("{}: {}", self.error_label, msg)
    }
}
