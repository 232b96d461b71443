use crate::errors::AppResult;
use crate::ui::views::render_presets;

pub fn handle() -> AppResult<()> {
    print!("{}", render_presets());
    Ok(())
}
