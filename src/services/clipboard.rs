use crate::error::AppResult;

pub trait ClipboardService: Send + Sync {
    fn copy(&self, text: &str) -> AppResult<()>;
}
