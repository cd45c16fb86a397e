use crossterm::tty::IsTty;

pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// 取得 stdout 的終端機寬度；stdout 不是終端機或無法偵測時回傳 80
pub fn terminal_width() -> usize {
    let stdout_is_tty = std::io::stdout().is_tty();
    let size = if stdout_is_tty {
        crossterm::terminal::size()
    } else {
        Err(std::io::Error::other("stdout is not a terminal"))
    };
    width_from(size)
}

fn width_from(size: std::io::Result<(u16, u16)>) -> usize {
    match size {
        Ok((columns, _rows)) if columns > 0 => columns as usize,
        Ok(_) => DEFAULT_TERMINAL_WIDTH,
        Err(e) => {
            tracing::debug!("Terminal size unavailable ({}), using {}", e, DEFAULT_TERMINAL_WIDTH);
            DEFAULT_TERMINAL_WIDTH
        }
    }
}
