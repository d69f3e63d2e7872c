use crate::models::Theme;

/// Host surface the workbench talks to instead of a rendering toolkit.
pub trait Environment: Send {
    fn apply_theme(&mut self, theme: Theme);
    /// Hands a finished export (file name + bytes) to the user.
    fn deliver_download(&mut self, file_name: &str, bytes: &[u8]) -> std::io::Result<()>;
    /// Sends a printable HTML document to the print target.
    fn print(&mut self, title: &str, html: &str) -> std::io::Result<()>;
}
